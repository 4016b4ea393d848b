//! PostgreSQL media asset repository implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::media::MediaAssetRepository;
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Reads the `images` relation
#[derive(Debug, Clone)]
pub struct PostgresMediaAssetRepository {
    pool: PgPool,
}

impl PostgresMediaAssetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MediaAssetRepository for PostgresMediaAssetRepository {
    async fn find_one_url_by_artist(
        &self,
        artist_id: &UserId,
    ) -> Result<Option<String>, DomainError> {
        sqlx::query_scalar::<_, String>("SELECT url FROM images WHERE artist_id = $1 LIMIT 1")
            .bind(artist_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to look up media URL: {}", e)))
    }
}
