use crate::types::Post;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Secret retrieval error: {0}")]
    Secret(#[from] SecretError),

    #[error("Reddit API error: {0}")]
    RedditApi(#[from] RedditApiError),

    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("Slack error: {0}")]
    Slack(#[from] SlackError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Environment variable not set: {var_name}")]
    MissingEnvironmentVariable { var_name: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Configuration validation failed: {reason}")]
    ValidationFailed { reason: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SecretError {
    #[error("Did not find an appropriate secret under the name '{name}'")]
    NoSecretString { name: String },

    #[error("Secret '{name}' is not a JSON object of strings: {details}")]
    MalformedSecret { name: String, details: String },

    #[error("Secret '{name}' has no '{key}' entry")]
    MissingKey { name: String, key: String },

    #[error("Secret store request for '{name}' failed: {details}")]
    Backend { name: String, details: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RedditApiError {
    #[error("Rate limit exceeded. Retry after {retry_after} seconds")]
    RateLimitExceeded { retry_after: u64 },

    #[error("Forbidden access to resource: {resource}")]
    Forbidden { resource: String },

    #[error("Subreddit not found: {subreddit}")]
    SubredditNotFound { subreddit: String },

    #[error("Server error: {status_code}")]
    ServerError { status_code: u16 },

    #[error("Request to {endpoint} failed with status {status_code}")]
    UnexpectedStatus { endpoint: String, status_code: u16 },

    #[error("Invalid API response: {details}")]
    InvalidResponse { details: String },

    #[error("Invalid API base URL: {details}")]
    InvalidBaseUrl { details: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("Could not find a suitable image post from this list of posts: {candidates:?}")]
    NoSuitablePost { candidates: Vec<Post> },

    #[error("No subreddits to choose from")]
    NoSubreddits,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlackError {
    #[error("Slack API returned an error: {error}")]
    Api { error: String },

    #[error("Slack request failed with status {status_code}")]
    HttpStatus { status_code: u16 },

    #[error("Invalid Slack response: {details}")]
    InvalidResponse { details: String },
}
