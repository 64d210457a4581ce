use crate::blocks::Block;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use slakkit_core::{CoreError, SlackError};
use std::time::Duration;
use tracing::{debug, error, info};

const SLACK_API_BASE: &str = "https://slack.com";
const POST_MESSAGE_ENDPOINT: &str = "/api/chat.postMessage";

/// Sends formatted blocks to a chat channel.
pub trait MessageDelivery {
    async fn deliver(
        &self,
        channel_id: &str,
        auth_token: &str,
        blocks: &[Block],
    ) -> Result<(), CoreError>;
}

#[derive(Debug, Serialize)]
struct PostMessageRequest<'a> {
    channel: &'a str,
    blocks: &'a [Block],
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageResponse {
    pub ok: bool,
    pub error: Option<String>,
    pub channel: Option<String>,
    pub ts: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SlackClient {
    http_client: Client,
    base_url: String,
}

impl SlackClient {
    pub fn new() -> Result<Self, CoreError> {
        Self::with_base_url(SLACK_API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, CoreError> {
        let http_client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub async fn post_message(
        &self,
        channel_id: &str,
        auth_token: &str,
        blocks: &[Block],
    ) -> Result<PostMessageResponse, CoreError> {
        let url = format!("{}{}", self.base_url, POST_MESSAGE_ENDPOINT);
        let body = PostMessageRequest {
            channel: channel_id,
            blocks,
        };

        info!("Sending slack message to {} channel...", channel_id);
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(auth_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Network error posting to Slack: {}", e);
                CoreError::Network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Slack request failed with status: {}", status);
            return Err(SlackError::HttpStatus {
                status_code: status.as_u16(),
            }
            .into());
        }

        let api_response: PostMessageResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Slack response: {}", e);
            SlackError::InvalidResponse {
                details: e.to_string(),
            }
        })?;
        info!("Slack API response: {:?}", api_response);

        if !api_response.ok {
            return Err(SlackError::Api {
                error: api_response
                    .error
                    .unwrap_or_else(|| "unknown_error".to_string()),
            }
            .into());
        }

        debug!(
            "Message posted to {:?} at {:?}",
            api_response.channel, api_response.ts
        );
        Ok(api_response)
    }
}

impl MessageDelivery for SlackClient {
    async fn deliver(
        &self,
        channel_id: &str,
        auth_token: &str,
        blocks: &[Block],
    ) -> Result<(), CoreError> {
        self.post_message(channel_id, auth_token, blocks).await?;
        Ok(())
    }
}
