use serde::{Deserialize, Serialize};

/// A Reddit post as used by the selection pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    /// Destination media URL.
    pub url: String,
    pub post_hint: Option<String>,
    pub is_video: bool,
    pub is_gif: Option<bool>,
    pub is_gallery: Option<bool>,
    pub subreddit: String,
    /// Path relative to `https://www.reddit.com`.
    pub permalink: String,
}
