use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RewardId(pub i64);

impl fmt::Display for RewardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RewardId {
    fn from(id: i64) -> Self {
        RewardId(id)
    }
}

/// A pledge tier. Opaque to the core except for its id, which feeds
/// `Project::is_backing_reward_id` and `Project::reward_selected_url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    pub id: RewardId,
    pub minimum: f32,
    pub description: Option<String>,
    pub backers_count: Option<u32>,
}
