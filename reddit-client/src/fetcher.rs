use crate::api::TimeWindow;
use slakkit_core::{ConfigError, CoreError, Post};
use tracing::info;

/// Window used for the first query.
pub const PRIMARY_WINDOW: TimeWindow = TimeWindow::Month;
/// Window used when the primary query comes back short.
pub const FALLBACK_WINDOW: TimeWindow = TimeWindow::Year;

/// Anything that can list a subreddit's top posts.
pub trait TopPostsSource {
    async fn top_posts(
        &self,
        subreddit: &str,
        limit: u32,
        window: TimeWindow,
    ) -> Result<Vec<Post>, CoreError>;
}

/// Fetches candidate posts, widening the time window once when a subreddit is quiet.
#[derive(Debug, Clone)]
pub struct PostFetcher<S> {
    source: S,
}

impl<S: TopPostsSource> PostFetcher<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the monthly top posts, or the yearly ones if the month had fewer than
    /// `page_size`. The yearly result replaces the monthly one and is returned however
    /// short it is.
    pub async fn fetch(&self, subreddit: &str, page_size: u32) -> Result<Vec<Post>, CoreError> {
        if subreddit.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "subreddit".to_string(),
                value: subreddit.to_string(),
            }
            .into());
        }
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_size".to_string(),
                value: page_size.to_string(),
            }
            .into());
        }

        info!(
            "Retrieving top {} posts for the {} from r/{}",
            page_size, PRIMARY_WINDOW, subreddit
        );
        let posts = self
            .source
            .top_posts(subreddit, page_size, PRIMARY_WINDOW)
            .await?;

        if posts.len() >= page_size as usize {
            return Ok(posts);
        }

        info!(
            "Only {} of {} posts from r/{} for the {}, retrying over the {}",
            posts.len(),
            page_size,
            subreddit,
            PRIMARY_WINDOW,
            FALLBACK_WINDOW
        );
        self.source
            .top_posts(subreddit, page_size, FALLBACK_WINDOW)
            .await
    }
}
