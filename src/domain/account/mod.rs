//! Account lifecycle domain
//!
//! Error taxonomy and results shared by registration, authentication,
//! profile update and account deletion.

mod error;

pub use error::AccountError;

use serde::{Deserialize, Serialize};

use crate::domain::media::MediaAuthority;
use crate::domain::user::UserId;

/// Successful end state of an account deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// The user had no uploads, no external call was made
    NoMedia { user_id: UserId },
    /// The storage service at `authority` confirmed the directory purge
    MediaPurged {
        user_id: UserId,
        authority: MediaAuthority,
    },
}

impl DeletionOutcome {
    pub fn user_id(&self) -> &UserId {
        match self {
            Self::NoMedia { user_id } | Self::MediaPurged { user_id, .. } => user_id,
        }
    }

    pub fn media_purged(&self) -> bool {
        matches!(self, Self::MediaPurged { .. })
    }
}

/// Wire form of a [`DeletionOutcome`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionSummary {
    pub id: String,
    pub media_purged: bool,
}

impl From<&DeletionOutcome> for DeletionSummary {
    fn from(outcome: &DeletionOutcome) -> Self {
        Self {
            id: outcome.user_id().as_str().to_string(),
            media_purged: outcome.media_purged(),
        }
    }
}
