use serde::{Deserialize, Serialize};
use slakkit_core::Post;

pub const REDDIT_WEB_BASE: &str = "https://www.reddit.com";
pub const IMAGE_ALT_TEXT: &str = "image";

/// A Slack Block Kit layout block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section { text: TextObject },
    Image { image_url: String, alt_text: String },
    Divider,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextObject {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl TextObject {
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self {
            kind: "mrkdwn".to_string(),
            text: text.into(),
        }
    }
}

impl Block {
    pub fn section(text: impl Into<String>) -> Self {
        Block::Section {
            text: TextObject::mrkdwn(text),
        }
    }

    pub fn image(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Block::Image {
            image_url: image_url.into(),
            alt_text: alt_text.into(),
        }
    }
}

/// Title quote, image, attribution link and a closing divider, in that order.
pub fn make_message_blocks(post: &Post) -> Vec<Block> {
    vec![
        Block::section(format!("> {}", post.title)),
        Block::image(post.url.clone(), IMAGE_ALT_TEXT),
        Block::section(format!(
            "Pulled from the <{}{}|{}> subreddit",
            REDDIT_WEB_BASE, post.permalink, post.subreddit
        )),
        Block::Divider,
    ]
}
