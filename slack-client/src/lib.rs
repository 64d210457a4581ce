pub mod api;
pub mod blocks;

pub use api::{MessageDelivery, PostMessageResponse, SlackClient};
pub use blocks::{make_message_blocks, Block, TextObject};
