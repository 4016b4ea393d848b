//! Infrastructure layer - Store, hashing, HTTP client and use case implementations

pub mod account;
pub mod logging;
pub mod media;
pub mod storage;
pub mod user;
