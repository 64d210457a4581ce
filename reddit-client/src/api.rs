use crate::fetcher::TopPostsSource;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use slakkit_core::{CoreError, Post, RedditApiError};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};
use url::Url;

const REDDIT_API_BASE: &str = "https://www.reddit.com";

/// User agent sent with every Reddit request.
pub const USER_AGENT: &str = concat!("Slakkit/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListing<T> {
    pub kind: String,
    pub data: RedditListingData<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListingData<T> {
    pub children: Vec<RedditListingChild<T>>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub dist: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListingChild<T> {
    pub kind: String,
    pub data: T,
}

/// The subset of a `t3` link record the bot looks at. Missing fields fall back to
/// empty values so that a sparse record is rejected by selection instead of failing the parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedditPostData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub url_overridden_by_dest: Option<String>,
    pub post_hint: Option<String>,
    #[serde(default)]
    pub is_video: bool,
    pub is_gif: Option<bool>,
    pub is_gallery: Option<bool>,
    #[serde(default)]
    pub subreddit: String,
    #[serde(default)]
    pub permalink: String,
}

/// Time range for a subreddit's top listing (`t` query parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeWindow {
    Hour,
    Day,
    Week,
    Month,
    Year,
    All,
}

impl TimeWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Hour => "hour",
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
            TimeWindow::Month => "month",
            TimeWindow::Year => "year",
            TimeWindow::All => "all",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct RedditApiClient {
    http_client: Client,
    base_url: Url,
}

impl RedditApiClient {
    pub fn new() -> Result<Self, CoreError> {
        Self::with_base_url(REDDIT_API_BASE)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, CoreError> {
        let base_url = Url::parse(base_url).map_err(|e| RedditApiError::InvalidBaseUrl {
            details: format!("{}: {}", base_url, e),
        })?;

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn make_request(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
    ) -> Result<Response, CoreError> {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|e| RedditApiError::InvalidBaseUrl {
                details: format!("cannot join {}: {}", endpoint, e),
            })?;
        let start_time = Instant::now();

        info!("Making Reddit API request: GET {} {:?}", endpoint, query_params);
        let response = self
            .http_client
            .get(url)
            .query(query_params)
            .send()
            .await
            .map_err(|e| {
                error!("Network error for GET {}: {}", endpoint, e);
                CoreError::Network(e)
            })?;

        let status = response.status();
        debug!(
            "Got response {} for {} in {:?}",
            status,
            endpoint,
            start_time.elapsed()
        );

        if status.is_success() {
            return Ok(response);
        }

        error!("Request failed with status: {} for {}", status, endpoint);
        let api_error = match status {
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|value| value.to_str().ok())
                    .and_then(|value| value.parse::<u64>().ok())
                    .unwrap_or(60);
                warn!("Rate limited, retry after {} seconds", retry_after);
                RedditApiError::RateLimitExceeded { retry_after }
            }
            StatusCode::FORBIDDEN => RedditApiError::Forbidden {
                resource: endpoint.to_string(),
            },
            s if s.is_server_error() => RedditApiError::ServerError {
                status_code: s.as_u16(),
            },
            s => RedditApiError::UnexpectedStatus {
                endpoint: endpoint.to_string(),
                status_code: s.as_u16(),
            },
        };
        Err(api_error.into())
    }

    pub async fn get_top_posts(
        &self,
        subreddit: &str,
        limit: u32,
        window: TimeWindow,
    ) -> Result<RedditListing<RedditPostData>, CoreError> {
        let endpoint = format!("/r/{}/top.json", subreddit);
        let limit_str = limit.to_string();
        let params = [("limit", limit_str.as_str()), ("t", window.as_str())];

        let response = self
            .make_request(&endpoint, &params)
            .await
            .map_err(|e| match e {
                CoreError::RedditApi(RedditApiError::UnexpectedStatus {
                    status_code: 404,
                    ..
                }) => CoreError::RedditApi(RedditApiError::SubredditNotFound {
                    subreddit: subreddit.to_string(),
                }),
                other => other,
            })?;

        let listing: RedditListing<RedditPostData> = response.json().await.map_err(|e| {
            error!("Failed to parse top posts: {}", e);
            CoreError::RedditApi(RedditApiError::InvalidResponse {
                details: format!("Failed to parse top posts for r/{}", subreddit),
            })
        })?;

        info!(
            "Retrieved {} top posts from r/{} over the last {}",
            listing.data.children.len(),
            subreddit,
            window
        );
        Ok(listing)
    }
}

impl TopPostsSource for RedditApiClient {
    async fn top_posts(
        &self,
        subreddit: &str,
        limit: u32,
        window: TimeWindow,
    ) -> Result<Vec<Post>, CoreError> {
        let listing = self.get_top_posts(subreddit, limit, window).await?;
        Ok(listing
            .data
            .children
            .into_iter()
            .map(|child| Post::from(child.data))
            .collect())
    }
}

impl From<RedditPostData> for Post {
    fn from(post_data: RedditPostData) -> Self {
        Self {
            title: post_data.title,
            url: post_data.url_overridden_by_dest.unwrap_or_default(),
            post_hint: post_data.post_hint,
            is_video: post_data.is_video,
            is_gif: post_data.is_gif,
            is_gallery: post_data.is_gallery,
            subreddit: post_data.subreddit,
            permalink: post_data.permalink,
        }
    }
}
