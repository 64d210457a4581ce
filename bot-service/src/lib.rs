use reddit_client::{selector, PostFetcher, TopPostsSource};
use slack_client::{make_message_blocks, MessageDelivery};
use slakkit_core::{AppConfig, CoreError, Post, SelectionError};
use tracing::{error, info};

/// One scheduled run: pick a subreddit, fetch, select, format and deliver.
pub struct SlakkitService<S, D> {
    config: AppConfig,
    oauth_token: String,
    fetcher: PostFetcher<S>,
    delivery: D,
    rng: fastrand::Rng,
}

impl<S: TopPostsSource, D: MessageDelivery> SlakkitService<S, D> {
    pub fn new(config: AppConfig, oauth_token: String, source: S, delivery: D) -> Self {
        Self {
            config,
            oauth_token,
            fetcher: PostFetcher::new(source),
            delivery,
            rng: fastrand::Rng::new(),
        }
    }

    /// Replace the random source, e.g. with a seeded one.
    pub fn with_rng(mut self, rng: fastrand::Rng) -> Self {
        self.rng = rng;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn choose_subreddit(&mut self) -> Result<String, SelectionError> {
        self.rng
            .choice(self.config.subreddits.iter())
            .cloned()
            .ok_or(SelectionError::NoSubreddits)
    }

    /// Runs the whole pipeline once and returns the post that was delivered.
    /// Any failure aborts the run.
    pub async fn run_once(&mut self) -> Result<Post, CoreError> {
        let subreddit = self.choose_subreddit()?;
        info!("Chose r/{} from {} subreddits", subreddit, self.config.subreddits.len());

        let posts = self
            .fetcher
            .fetch(&subreddit, self.config.page_size)
            .await?;

        let post = selector::choose(posts, &mut self.rng)?;
        let blocks = make_message_blocks(&post);

        info!(
            "Delivering post from r/{} to channel {}",
            post.subreddit, self.config.target_channel
        );
        self.delivery
            .deliver(&self.config.target_channel, &self.oauth_token, &blocks)
            .await
            .map_err(|e| {
                error!("Delivery to {} failed: {}", self.config.target_channel, e);
                e
            })?;

        info!("Run complete");
        Ok(post)
    }
}
