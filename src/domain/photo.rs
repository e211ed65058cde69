use serde::{Deserialize, Serialize};

/// Campaign imagery at a few server-chosen sizes. Pass-through only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub full: Option<String>,
    pub med: Option<String>,
    pub small: Option<String>,
}
