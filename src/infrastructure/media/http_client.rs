//! HTTP client for the media storage service

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::media::{MediaAuthority, MediaCleanupOutcome, MediaStorageClient};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Media storage client using reqwest
///
/// One client is built at startup and shared; its timeout bounds the whole
/// request including the body read.
#[derive(Debug, Clone)]
pub struct HttpMediaStorageClient {
    client: reqwest::Client,
}

impl HttpMediaStorageClient {
    pub fn new(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MediaStorageClient for HttpMediaStorageClient {
    async fn delete_directory(
        &self,
        authority: &MediaAuthority,
        user_id: &UserId,
    ) -> MediaCleanupOutcome {
        let endpoint = match authority.deletion_endpoint(user_id) {
            Ok(url) => url,
            Err(e) => {
                return MediaCleanupOutcome::Transport {
                    reason: e.to_string(),
                    timed_out: false,
                };
            }
        };

        debug!(endpoint = %endpoint, "Requesting media directory deletion");

        let response = match self.client.delete(endpoint).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!(authority = %authority, error = %e, "Media deletion request failed");
                return MediaCleanupOutcome::Transport {
                    reason: e.to_string(),
                    timed_out: e.is_timeout(),
                };
            }
        };

        let status = response.status();

        if !status.is_success() {
            return MediaCleanupOutcome::Rejected {
                status: status.as_u16(),
            };
        }

        match response.bytes().await {
            Ok(body) => MediaCleanupOutcome::from_success_body(&body),
            Err(e) => MediaCleanupOutcome::Transport {
                reason: format!("Failed to read response body: {}", e),
                timed_out: e.is_timeout(),
            },
        }
    }
}
