//! Contract of the external media storage service

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde_json::Value;

use super::entity::MediaAuthority;
use crate::domain::user::UserId;

/// Result of a directory-deletion request, parsed at the client boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaCleanupOutcome {
    /// Well-formed body with `data.delete == true`
    Deleted,
    /// Well-formed body whose `data.delete` flag is false or missing
    NotDeleted,
    /// The service answered with a non-2xx status
    Rejected { status: u16 },
    /// 2xx answer that does not follow the `{ "data": { ... } }` shape
    Malformed { reason: String },
    /// Connection failure, timeout or body read failure
    Transport { reason: String, timed_out: bool },
}

impl MediaCleanupOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted)
    }

    /// Interpret a 2xx response body
    pub fn from_success_body(body: &[u8]) -> Self {
        let value: Value = match serde_json::from_slice(body) {
            Ok(v) => v,
            Err(e) => {
                return Self::Malformed {
                    reason: format!("Response is not JSON: {}", e),
                };
            }
        };

        let Some(data) = value.get("data").and_then(Value::as_object) else {
            return Self::Malformed {
                reason: "Response has no 'data' object".to_string(),
            };
        };

        match data.get("delete") {
            Some(Value::Bool(true)) => Self::Deleted,
            _ => Self::NotDeleted,
        }
    }
}

impl std::fmt::Display for MediaCleanupOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deleted => write!(f, "directory deleted"),
            Self::NotDeleted => write!(f, "service reported the directory was not deleted"),
            Self::Rejected { status } => write!(f, "service responded with HTTP {}", status),
            Self::Malformed { reason } => write!(f, "malformed response: {}", reason),
            Self::Transport { reason, timed_out } => {
                if *timed_out {
                    write!(f, "request timed out: {}", reason)
                } else {
                    write!(f, "request failed: {}", reason)
                }
            }
        }
    }
}

/// Client for the media storage service that owns uploaded directories
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MediaStorageClient: Send + Sync {
    /// Ask `authority` to delete the upload directory of `user_id`
    ///
    /// Never fails: every failure mode is expressed in the outcome.
    async fn delete_directory(
        &self,
        authority: &MediaAuthority,
        user_id: &UserId,
    ) -> MediaCleanupOutcome;
}
