//! Artifact upload.
//!
//! Registration and upload are separate requests: the API records the
//! artifact metadata and answers with a redirect to a presigned storage URL,
//! then the content is PUT there directly. The artifact is not downloadable
//! until the PUT succeeds.

use super::models::{
    Artifact, CreateDocument, NewArtifactAttributes, NewResource, Relationship,
    ReleaseRelationship,
};
use super::{JSON_API, KeygenClient, read_document};
use crate::error::{ApiError, Result};
use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use std::path::PathBuf;
use tokio_util::io::ReaderStream;

/// Platform tag for every artifact
pub const ARTIFACT_PLATFORM: &str = "npm";

/// Artifact content
#[derive(Debug, Clone)]
pub enum ArtifactBody {
    /// Streamed from a file on disk
    File(PathBuf),
    /// Held in memory
    Bytes(Bytes),
}

/// Parameters for a two-phase artifact upload
#[derive(Debug, Clone)]
pub struct ArtifactUpload {
    /// Release the artifact belongs to
    pub release_id: String,
    /// Content-Type sent to storage
    pub content_type: &'static str,
    /// Content to upload
    pub body: ArtifactBody,
    /// Base64 SHA-512 digest, when known
    pub checksum: Option<String>,
    /// Artifact filename
    pub filename: String,
    /// Artifact file type tag
    pub filetype: &'static str,
    /// Content length in bytes
    pub filesize: u64,
}

impl KeygenClient {
    /// Register an artifact and upload its content to storage
    pub async fn upload_artifact(&self, upload: ArtifactUpload) -> Result<Artifact> {
        let url = format!("{}/artifacts", self.account_url());
        let document = CreateDocument {
            data: NewResource {
                kind: "artifact",
                attributes: NewArtifactAttributes {
                    platform: ARTIFACT_PLATFORM,
                    checksum: upload.checksum.clone(),
                    filename: upload.filename.clone(),
                    filetype: upload.filetype,
                    filesize: upload.filesize,
                },
                relationships: ReleaseRelationship {
                    release: Relationship::to("release", &upload.release_id),
                },
            },
        };

        log::info!(
            "Registering artifact {} ({} bytes) for release {}",
            upload.filename,
            upload.filesize,
            upload.release_id
        );

        let response = self
            .api()
            .post(&url)
            .header(CONTENT_TYPE, JSON_API)
            .body(serde_json::to_vec(&document)?)
            .send()
            .await?;

        let response = read_document::<Artifact>(response, "create artifact").await?;
        let status = response.status;
        let location = response.location.clone();
        let artifact = response.into_data("create artifact", |payload| {
            ApiError::CreateArtifact {
                release_id: upload.release_id.clone(),
                payload,
            }
        })?;

        let location = location.ok_or(ApiError::MissingRedirect {
            operation: "create artifact",
            status: status.as_u16(),
        })?;

        let body = match upload.body {
            ArtifactBody::File(path) => {
                let file = tokio::fs::File::open(&path).await?;
                reqwest::Body::wrap_stream(ReaderStream::new(file))
            }
            ArtifactBody::Bytes(bytes) => reqwest::Body::from(bytes),
        };

        log::debug!("Uploading artifact {} to storage", upload.filename);

        let uploaded = self
            .storage()
            .put(&location)
            .header(CONTENT_LENGTH, upload.filesize)
            .header(CONTENT_TYPE, upload.content_type)
            .body(body)
            .send()
            .await?;

        if uploaded.status() != StatusCode::OK {
            return Err(ApiError::UploadFailed {
                url: location,
                status: uploaded.status().as_u16(),
            }
            .into());
        }

        Ok(artifact)
    }
}
