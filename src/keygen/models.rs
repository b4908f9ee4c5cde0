//! JSON:API documents exchanged with Keygen.

use serde::{Deserialize, Serialize};

/// Top-level JSON:API response document
#[derive(Debug, Clone, Deserialize)]
pub struct Document<T> {
    /// Primary data, present on success
    pub data: Option<T>,
    /// Error objects, present on failure
    pub errors: Option<Vec<serde_json::Value>>,
}

/// Release resource
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Release identifier
    pub id: String,
    /// Release attributes
    #[serde(default)]
    pub attributes: ReleaseAttributes,
}

/// Release attributes returned by the API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReleaseAttributes {
    /// Version string
    pub version: Option<String>,
    /// Release channel
    pub channel: Option<String>,
    /// Publish state, e.g. `DRAFT` or `PUBLISHED`
    pub status: Option<String>,
}

/// Artifact resource
#[derive(Debug, Clone, Deserialize)]
pub struct Artifact {
    /// Artifact identifier
    pub id: String,
    /// Artifact attributes
    #[serde(default)]
    pub attributes: ArtifactAttributes,
}

/// Artifact attributes returned by the API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtifactAttributes {
    /// Stored filename
    pub filename: Option<String>,
    /// File type tag
    pub filetype: Option<String>,
    /// Size in bytes
    pub filesize: Option<u64>,
    /// Platform tag
    pub platform: Option<String>,
    /// Checksum sent at registration
    pub checksum: Option<String>,
    /// Upload state, e.g. `WAITING` or `UPLOADED`
    pub status: Option<String>,
}

/// Request document creating a single resource
#[derive(Debug, Serialize)]
pub(crate) struct CreateDocument<A, R> {
    pub(crate) data: NewResource<A, R>,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewResource<A, R> {
    #[serde(rename = "type")]
    pub(crate) kind: &'static str,
    pub(crate) attributes: A,
    pub(crate) relationships: R,
}

#[derive(Debug, Serialize)]
pub(crate) struct Relationship {
    pub(crate) data: ResourceIdentifier,
}

impl Relationship {
    pub(crate) fn to(kind: &'static str, id: &str) -> Self {
        Self {
            data: ResourceIdentifier {
                kind,
                id: id.to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub(crate) kind: &'static str,
    pub(crate) id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewReleaseAttributes {
    pub(crate) version: String,
    pub(crate) channel: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProductRelationship {
    pub(crate) product: Relationship,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewArtifactAttributes {
    pub(crate) platform: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) checksum: Option<String>,
    pub(crate) filename: String,
    pub(crate) filetype: &'static str,
    pub(crate) filesize: u64,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReleaseRelationship {
    pub(crate) release: Relationship,
}
