use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::RewardId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BackingId(pub i64);

impl fmt::Display for BackingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BackingId {
    fn from(id: i64) -> Self {
        BackingId(id)
    }
}

/// The viewing user's pledge on a project. Present on `Project` iff the
/// viewer has backed it. The core reads only `reward_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backing {
    pub id: BackingId,
    pub amount: f32,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub pledged_at: Option<DateTime<Utc>>,
    pub reward_id: Option<RewardId>,
}
