//! Slack token lookup.
//!
//! The configured token reference is either a bot token, used as-is, or the name of
//! a secret whose JSON string value holds the token under `api_key`.

pub mod aws;

pub use aws::AwsSecretsManager;

use slakkit_core::{CoreError, SecretError};
use std::collections::HashMap;
use tracing::{debug, info};

/// Prefix of Slack bot tokens.
pub const BOT_TOKEN_PREFIX: &str = "xoxb-";
/// Key of the token inside a stored secret.
pub const API_KEY_FIELD: &str = "api_key";

/// A named key/value secret lookup.
pub trait SecretStore {
    async fn get_secret(&self, name: &str) -> Result<HashMap<String, String>, CoreError>;
}

/// Resolve the Slack OAuth token from a configured reference.
pub async fn resolve_oauth_token<S: SecretStore>(
    reference: &str,
    store: &S,
) -> Result<String, CoreError> {
    if reference.starts_with(BOT_TOKEN_PREFIX) {
        debug!("Using Slack token set directly in configuration");
        return Ok(reference.to_string());
    }

    info!("Reading Slack token from secret '{}'", reference);
    let mut secret = store.get_secret(reference).await?;
    secret.remove(API_KEY_FIELD).ok_or_else(|| {
        SecretError::MissingKey {
            name: reference.to_string(),
            key: API_KEY_FIELD.to_string(),
        }
        .into()
    })
}

/// Parse a secret's string value as a flat JSON object of strings.
pub fn parse_secret_string(
    name: &str,
    secret_string: Option<&str>,
) -> Result<HashMap<String, String>, SecretError> {
    let raw = secret_string.ok_or_else(|| SecretError::NoSecretString {
        name: name.to_string(),
    })?;

    serde_json::from_str(raw).map_err(|e| SecretError::MalformedSecret {
        name: name.to_string(),
        details: e.to_string(),
    })
}
