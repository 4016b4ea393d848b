//! Media asset repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Narrow read access to the `images` relation
#[async_trait]
pub trait MediaAssetRepository: Send + Sync + Debug {
    /// URL of any one asset uploaded by `artist_id`, in unspecified order
    async fn find_one_url_by_artist(&self, artist_id: &UserId)
    -> Result<Option<String>, DomainError>;
}
