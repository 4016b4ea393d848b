//! Media domain
//!
//! Uploaded assets are owned by the upload subsystem; this crate only reads
//! one URL per artist to locate the storage service holding their directory.

mod client;
mod entity;
mod repository;

pub use client::{MediaCleanupOutcome, MediaStorageClient};
pub use entity::{MediaAsset, MediaAuthority};
pub use repository::MediaAssetRepository;

#[cfg(test)]
pub use client::MockMediaStorageClient;
