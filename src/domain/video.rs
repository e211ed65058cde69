use serde::{Deserialize, Serialize};

/// Campaign video sources. Pass-through only; `Project::has_video`
/// cares about presence, not contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub base: Option<String>,
    pub high: Option<String>,
    pub webm: Option<String>,
}
