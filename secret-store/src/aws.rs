use crate::{parse_secret_string, SecretStore};
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::Client;
use slakkit_core::{CoreError, SecretError};
use std::collections::HashMap;
use tokio::sync::OnceCell;
use tracing::{debug, error, info};

/// AWS Secrets Manager backend using the default credential and region chain.
///
/// The SDK client is only built on the first lookup, so a run whose token is set
/// directly never loads AWS configuration.
#[derive(Debug, Default)]
pub struct AwsSecretsManager {
    client: OnceCell<Client>,
}

impl AwsSecretsManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self {
            client: OnceCell::new_with(Some(client)),
        }
    }

    async fn client(&self) -> &Client {
        self.client
            .get_or_init(|| async {
                debug!("Loading AWS configuration for Secrets Manager");
                let config =
                    aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
                Client::new(&config)
            })
            .await
    }
}

impl SecretStore for AwsSecretsManager {
    async fn get_secret(&self, name: &str) -> Result<HashMap<String, String>, CoreError> {
        info!("Looking for secret '{}' in Secrets Manager", name);
        let output = self
            .client()
            .await
            .get_secret_value()
            .secret_id(name)
            .send()
            .await
            .map_err(|e| {
                error!("Secrets Manager request for '{}' failed", name);
                SecretError::Backend {
                    name: name.to_string(),
                    details: DisplayErrorContext(&e).to_string(),
                }
            })?;

        let secret = parse_secret_string(name, output.secret_string())?;
        info!("Found string secret for '{}'", name);
        Ok(secret)
    }
}
