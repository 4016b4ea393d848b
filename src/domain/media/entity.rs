//! Media asset and storage authority types

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Path of the directory-deletion script on a media storage host
const DELETE_ENDPOINT_PATH: &str = "delete.php";

/// One uploaded item, owned by the media-upload subsystem and only read here
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAsset {
    pub artist_id: UserId,
    pub url: String,
}

impl MediaAsset {
    pub fn new(artist_id: UserId, url: impl Into<String>) -> Self {
        Self {
            artist_id,
            url: url.into(),
        }
    }
}

/// Scheme + host (+ port) of the storage service instance that owns an asset
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaAuthority(String);

impl MediaAuthority {
    /// Derive the authority from an absolute asset URL
    pub fn from_asset_url(asset_url: &str) -> Result<Self, DomainError> {
        let url = Url::parse(asset_url).map_err(|e| {
            DomainError::validation(format!("Invalid media URL '{}': {}", asset_url, e))
        })?;

        let origin = url.origin();

        if !origin.is_tuple() {
            return Err(DomainError::validation(format!(
                "Media URL '{}' has no host authority",
                asset_url
            )));
        }

        Ok(Self(origin.ascii_serialization()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `{authority}/delete.php?id={user_id}`
    pub fn deletion_endpoint(&self, user_id: &UserId) -> Result<Url, DomainError> {
        let mut url = Url::parse(&format!("{}/{}", self.0, DELETE_ENDPOINT_PATH))
            .map_err(|e| DomainError::internal(format!("Invalid deletion endpoint: {}", e)))?;

        url.query_pairs_mut().append_pair("id", user_id.as_str());

        Ok(url)
    }
}

impl std::fmt::Display for MediaAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
