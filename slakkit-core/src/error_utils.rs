use crate::error::*;
use tracing::{error, warn};

pub trait ErrorExt {
    fn log_error(&self) -> &Self;
    fn log_warn(&self) -> &Self;
    fn user_friendly_message(&self) -> String;
    fn error_code(&self) -> String;
}

impl ErrorExt for CoreError {
    fn log_error(&self) -> &Self {
        error!("CoreError [{}]: {}", self.error_code(), self);
        match self {
            CoreError::Config(e) => {
                error!("Configuration error details: {:?}", e);
            }
            CoreError::Secret(e) => {
                error!("Secret error details: {:?}", e);
            }
            CoreError::RedditApi(e) => {
                error!("Reddit API error details: {:?}", e);
            }
            CoreError::Slack(e) => {
                error!("Slack error details: {:?}", e);
            }
            // The selection error already carries the full candidate list in its message.
            _ => {}
        }
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("CoreError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            CoreError::Config(e) => e.user_friendly_message(),
            CoreError::Secret(e) => e.user_friendly_message(),
            CoreError::RedditApi(e) => e.user_friendly_message(),
            CoreError::Selection(e) => e.user_friendly_message(),
            CoreError::Slack(e) => e.user_friendly_message(),
            CoreError::Network(_) => {
                "Network connection error. Please check your internet connection.".to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            CoreError::Config(_) => "CONFIG".to_string(),
            CoreError::Secret(_) => "SECRET".to_string(),
            CoreError::RedditApi(_) => "REDDIT_API".to_string(),
            CoreError::Selection(_) => "SELECTION".to_string(),
            CoreError::Slack(_) => "SLACK".to_string(),
            CoreError::Network(_) => "NETWORK".to_string(),
        }
    }
}

impl ErrorExt for ConfigError {
    fn log_error(&self) -> &Self {
        error!("ConfigError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("ConfigError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            ConfigError::MissingEnvironmentVariable { var_name } => {
                format!("Please set the {} environment variable.", var_name)
            }
            ConfigError::InvalidValue { field, value } => {
                format!("'{}' is not a valid value for {}.", value, field)
            }
            ConfigError::ValidationFailed { reason } => {
                format!("Configuration is invalid: {}.", reason)
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            ConfigError::MissingEnvironmentVariable { .. } => "CONFIG_MISSING_ENV".to_string(),
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE".to_string(),
            ConfigError::ValidationFailed { .. } => "CONFIG_VALIDATION_FAILED".to_string(),
        }
    }
}

impl ErrorExt for SecretError {
    fn log_error(&self) -> &Self {
        error!("SecretError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("SecretError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            SecretError::NoSecretString { name } => format!(
                "Secret '{}' has no string value. Store the Slack token as a JSON string secret.",
                name
            ),
            SecretError::MissingKey { name, key } => {
                format!("Secret '{}' must contain a '{}' entry.", name, key)
            }
            _ => "Could not read the Slack token from the secret store.".to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            SecretError::NoSecretString { .. } => "SECRET_NO_STRING".to_string(),
            SecretError::MalformedSecret { .. } => "SECRET_MALFORMED".to_string(),
            SecretError::MissingKey { .. } => "SECRET_MISSING_KEY".to_string(),
            SecretError::Backend { .. } => "SECRET_BACKEND".to_string(),
        }
    }
}

impl ErrorExt for RedditApiError {
    fn log_error(&self) -> &Self {
        error!("RedditApiError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("RedditApiError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            RedditApiError::RateLimitExceeded { retry_after } => format!(
                "Too many requests to Reddit. Wait {} seconds before the next run.",
                retry_after
            ),
            RedditApiError::Forbidden { resource } => {
                format!("Access denied to {}. The subreddit may be private.", resource)
            }
            RedditApiError::SubredditNotFound { subreddit } => {
                format!("Subreddit '{}' not found or is private.", subreddit)
            }
            _ => "Reddit API error occurred. Please try again later.".to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            RedditApiError::RateLimitExceeded { .. } => "REDDIT_RATE_LIMIT".to_string(),
            RedditApiError::Forbidden { .. } => "REDDIT_FORBIDDEN".to_string(),
            RedditApiError::SubredditNotFound { .. } => "REDDIT_SUBREDDIT_NOT_FOUND".to_string(),
            RedditApiError::ServerError { .. } => "REDDIT_SERVER_ERROR".to_string(),
            RedditApiError::UnexpectedStatus { .. } => "REDDIT_UNEXPECTED_STATUS".to_string(),
            RedditApiError::InvalidResponse { .. } => "REDDIT_INVALID_RESPONSE".to_string(),
            RedditApiError::InvalidBaseUrl { .. } => "REDDIT_INVALID_BASE_URL".to_string(),
        }
    }
}

impl ErrorExt for SelectionError {
    fn log_error(&self) -> &Self {
        error!("SelectionError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("SelectionError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            SelectionError::NoSuitablePost { candidates } => format!(
                "None of the {} fetched posts is a plain image post.",
                candidates.len()
            ),
            SelectionError::NoSubreddits => "No subreddits are configured.".to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            SelectionError::NoSuitablePost { .. } => "SELECTION_NO_SUITABLE_POST".to_string(),
            SelectionError::NoSubreddits => "SELECTION_NO_SUBREDDITS".to_string(),
        }
    }
}

impl ErrorExt for SlackError {
    fn log_error(&self) -> &Self {
        error!("SlackError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("SlackError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            SlackError::Api { error } if error == "invalid_auth" || error == "not_authed" => {
                "Slack rejected the OAuth token. Check the configured token.".to_string()
            }
            SlackError::Api { error } if error == "channel_not_found" => {
                "Slack channel not found. Check the target channel id.".to_string()
            }
            _ => "Failed to post the message to Slack.".to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            SlackError::Api { .. } => "SLACK_API".to_string(),
            SlackError::HttpStatus { .. } => "SLACK_HTTP_STATUS".to_string(),
            SlackError::InvalidResponse { .. } => "SLACK_INVALID_RESPONSE".to_string(),
        }
    }
}
