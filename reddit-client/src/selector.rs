use slakkit_core::{Post, SelectionError};
use tracing::{debug, info};

pub const IMAGE_POST_HINT: &str = "image";

/// A post can be sent when it is a titled, single, still image.
pub fn is_suitable(post: &Post) -> bool {
    !post.title.is_empty()
        && !post.url.is_empty()
        && post.post_hint.as_deref() == Some(IMAGE_POST_HINT)
        && !post.is_video
        && !post.is_gif.unwrap_or(false)
        && !post.is_gallery.unwrap_or(false)
}

/// Shuffles `posts` and returns the first suitable one, which makes the pick uniform
/// over the suitable posts. On failure the error carries the shuffled list.
pub fn choose(mut posts: Vec<Post>, rng: &mut fastrand::Rng) -> Result<Post, SelectionError> {
    rng.shuffle(&mut posts);
    debug!("Choosing from {} shuffled posts", posts.len());

    match posts.iter().position(is_suitable) {
        Some(index) => {
            let chosen = posts.swap_remove(index);
            info!(
                "Selected post '{}' from r/{} ({})",
                chosen.title, chosen.subreddit, chosen.permalink
            );
            Ok(chosen)
        }
        None => Err(SelectionError::NoSuitablePost { candidates: posts }),
    }
}
