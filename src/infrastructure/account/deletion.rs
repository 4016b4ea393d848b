//! Account deletion across the user store and the media storage service
//!
//! The two systems share no transaction, so deletion runs as an explicit,
//! non-atomic sequence:
//!
//! 1. delete the user row (irreversible from here on),
//! 2. look up one media URL uploaded by the user,
//! 3. derive the storage authority from that URL and ask it to delete the
//!    user's directory,
//! 4. interpret the answer.
//!
//! A failure in step 1 aborts the whole deletion. Any failure after step 1
//! leaves the identity removed and its media orphaned; it is surfaced as
//! [`AccountError::ExternalCleanupFailed`] and logged under the
//! `orphaned_media` target for out-of-band reconciliation.

use std::sync::Arc;

use tracing::{error, info};

use super::parse_user_id;
use crate::domain::media::{MediaAssetRepository, MediaAuthority, MediaStorageClient};
use crate::domain::user::{UserId, UserRepository};
use crate::domain::{AccountError, DeletionOutcome};

#[derive(Debug)]
pub struct AccountDeletionOrchestrator<U, M, C>
where
    U: UserRepository,
    M: MediaAssetRepository,
    C: MediaStorageClient,
{
    users: Arc<U>,
    media: Arc<M>,
    client: Arc<C>,
}

impl<U, M, C> AccountDeletionOrchestrator<U, M, C>
where
    U: UserRepository,
    M: MediaAssetRepository,
    C: MediaStorageClient,
{
    pub fn new(users: Arc<U>, media: Arc<M>, client: Arc<C>) -> Self {
        Self {
            users,
            media,
            client,
        }
    }

    pub async fn delete(&self, id: &str) -> Result<DeletionOutcome, AccountError> {
        let user_id = parse_user_id(id)?;

        if !self.users.delete(&user_id).await? {
            return Err(AccountError::not_found(id));
        }

        info!(user_id = %user_id, "User row deleted");

        let asset_url = match self.media.find_one_url_by_artist(&user_id).await {
            Ok(Some(url)) => url,
            Ok(None) => {
                info!(user_id = %user_id, "No uploaded media, deletion complete");
                return Ok(DeletionOutcome::NoMedia { user_id });
            }
            Err(e) => return Err(orphaned(&user_id, None, &e.to_string())),
        };

        let authority = match MediaAuthority::from_asset_url(&asset_url) {
            Ok(authority) => authority,
            Err(e) => return Err(orphaned(&user_id, None, &e.to_string())),
        };

        let outcome = self.client.delete_directory(&authority, &user_id).await;

        if !outcome.is_deleted() {
            return Err(orphaned(&user_id, Some(&authority), &outcome.to_string()));
        }

        info!(user_id = %user_id, authority = %authority, "Media directory purged");
        Ok(DeletionOutcome::MediaPurged { user_id, authority })
    }
}

/// Record a user whose row is gone but whose media directory was not purged
fn orphaned(user_id: &UserId, authority: Option<&MediaAuthority>, reason: &str) -> AccountError {
    error!(
        target: "orphaned_media",
        user_id = %user_id,
        authority = authority.map(MediaAuthority::as_str).unwrap_or("unknown"),
        reason = %reason,
        "User deleted but media cleanup failed"
    );

    AccountError::external_cleanup_failed(user_id.as_str(), reason)
}
