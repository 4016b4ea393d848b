//! In-memory media asset repository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::media::{MediaAsset, MediaAssetRepository};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// In-memory stand-in for the `images` relation
///
/// Assets are written by the upload subsystem in production; here `add` plays
/// that role.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMediaAssetRepository {
    assets: Arc<RwLock<Vec<MediaAsset>>>,
}

impl InMemoryMediaAssetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assets(assets: Vec<MediaAsset>) -> Self {
        Self {
            assets: Arc::new(RwLock::new(assets)),
        }
    }

    pub async fn add(&self, asset: MediaAsset) {
        self.assets.write().await.push(asset);
    }
}

#[async_trait]
impl MediaAssetRepository for InMemoryMediaAssetRepository {
    async fn find_one_url_by_artist(
        &self,
        artist_id: &UserId,
    ) -> Result<Option<String>, DomainError> {
        let assets = self.assets.read().await;

        Ok(assets
            .iter()
            .find(|a| &a.artist_id == artist_id)
            .map(|a| a.url.clone()))
    }
}
