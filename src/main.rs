use bot_service::SlakkitService;
use reddit_client::RedditApiClient;
use secret_store::{resolve_oauth_token, AwsSecretsManager};
use slack_client::SlackClient;
use slakkit_core::{AppConfig, CoreError, ErrorExt};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str =
    "slakkit=info,bot_service=info,reddit_client=info,slack_client=info,secret_store=info";

#[tokio::main]
async fn main() -> Result<(), CoreError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    tracing::info!("Starting Slakkit run");

    run().await.map_err(|e| {
        e.log_error();
        tracing::error!("{}", e.user_friendly_message());
        e
    })
}

async fn run() -> Result<(), CoreError> {
    tracing::info!("Reading Slakkit configuration from env vars");
    let config = AppConfig::from_env()?;

    let secrets = AwsSecretsManager::new();
    let oauth_token = resolve_oauth_token(&config.oauth_token, &secrets).await?;

    let reddit = RedditApiClient::new()?;
    let slack = SlackClient::new()?;

    let mut service = SlakkitService::new(config, oauth_token, reddit, slack);
    let post = service.run_once().await?;

    tracing::info!("Posted '{}' ({})", post.title, post.permalink);
    Ok(())
}
