//! Media infrastructure module
//!
//! Read access to uploaded assets and the HTTP client for the external media
//! storage service.

mod http_client;
mod postgres_repository;
mod repository;

pub use http_client::HttpMediaStorageClient;
pub use postgres_repository::PostgresMediaAssetRepository;
pub use repository::InMemoryMediaAssetRepository;
