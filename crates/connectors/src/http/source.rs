//! Reqwest-backed source of synthetic users.

use crate::{http::error::FetchError, settings::ApiSettings};
use async_trait::async_trait;
use model::records::user::RawUser;
use reqwest::{Client, Url};
use tracing::debug;

const USER_AGENT: &str = concat!("user-loader/", env!("CARGO_PKG_VERSION"));
const ERROR_BODY_PREVIEW: usize = 200;

#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetches one batch of users. Records are returned exactly as decoded.
    async fn fetch_users(&self) -> Result<Vec<RawUser>, FetchError>;
}

/// Issues a single `GET <endpoint>?size=<n>` per call. No retry, no paging.
pub struct HttpUserSource {
    client: Client,
    endpoint: Url,
    size: u32,
}

impl HttpUserSource {
    /// Builds a source whose client enforces the configured request timeout.
    pub fn new(settings: &ApiSettings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self::with_client(client, settings))
    }

    pub fn with_client(client: Client, settings: &ApiSettings) -> Self {
        Self {
            client,
            endpoint: settings.endpoint.clone(),
            size: settings.size,
        }
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<RawUser>, FetchError> {
        debug!(endpoint = %self.endpoint, size = self.size, "Requesting users");

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("size", self.size)])
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(FetchError::Transport)?;
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: preview(&body),
            });
        }

        let users: Vec<RawUser> = serde_json::from_slice(&body)?;
        debug!(count = users.len(), bytes = body.len(), "Decoded users payload");
        Ok(users)
    }
}

fn preview(body: &[u8]) -> String {
    String::from_utf8_lossy(body)
        .chars()
        .take(ERROR_BODY_PREVIEW)
        .collect()
}
