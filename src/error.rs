//! Error types for keygen_publish operations.
//!
//! Configuration errors are detected before any network activity. Operation
//! errors carry the offending identifier and, where the API produced one, the
//! raw error payload.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for keygen_publish operations
pub type Result<T> = std::result::Result<T, PublishError>;

/// Main error type for all keygen_publish operations
#[derive(Error, Debug)]
pub enum PublishError {
    /// Configuration errors (missing credentials, bad metadata)
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Keygen API and object storage errors
    #[error("{0}")]
    Api(#[from] ApiError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport-level HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Configuration errors. Every variant is fatal before any request is sent.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is absent or empty
    #[error("env var {var} is required")]
    MissingEnv {
        /// Variable name
        var: &'static str,
    },

    /// Credential cannot be sent as an HTTP header
    #[error("env var {var} contains characters not allowed in an HTTP header")]
    InvalidCredential {
        /// Variable name
        var: &'static str,
    },

    /// API base URL could not be parsed
    #[error("invalid URL for {var}: {reason}")]
    InvalidUrl {
        /// Variable name
        var: &'static str,
        /// Parser message
        reason: String,
    },

    /// Package metadata could not be read
    #[error("failed to read package metadata at {path}: {reason}")]
    Metadata {
        /// Path to package.json
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },

    /// Neither the environment nor package.json supplies a field
    #[error("package {field} is required (set {var} or add \"{field}\" to package.json)")]
    MissingPackageField {
        /// Field in package.json
        field: &'static str,
        /// Overriding environment variable
        var: &'static str,
    },

    /// Package version is not semver
    #[error("invalid package version '{version}': {source}")]
    InvalidVersion {
        /// Version string
        version: String,
        /// Parsing error
        #[source]
        source: semver::Error,
    },

    /// Pre-built tarball is missing
    #[error("tarball not found at {path}")]
    TarballNotFound {
        /// Expected tarball location
        path: PathBuf,
    },
}

/// Keygen API and object storage errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Release creation returned an error document
    #[error("failed to create release for product {product_id}: {payload}")]
    CreateRelease {
        /// Product identifier
        product_id: String,
        /// Raw `{"errors": [...]}` payload
        payload: String,
    },

    /// Release publish returned an error document
    #[error("failed to publish release {release_id}: {payload}")]
    PublishRelease {
        /// Release identifier
        release_id: String,
        /// Raw `{"errors": [...]}` payload
        payload: String,
    },

    /// Artifact registration returned an error document
    #[error("failed to create artifact for release {release_id}: {payload}")]
    CreateArtifact {
        /// Release identifier
        release_id: String,
        /// Raw `{"errors": [...]}` payload
        payload: String,
    },

    /// Manifest lookup returned an error document
    #[error("failed to retrieve manifest for {package}: {payload}")]
    RetrieveManifest {
        /// Package name
        package: String,
        /// Raw `{"errors": [...]}` payload
        payload: String,
    },

    /// Direct storage upload did not return 200
    #[error("failed to upload artifact to {url}: {status}")]
    UploadFailed {
        /// Presigned storage URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// Direct storage download did not return 200
    #[error("failed to retrieve manifest from {url}: {status}")]
    DownloadFailed {
        /// Presigned storage URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// API response carried no usable redirect location
    #[error("{operation}: response did not include a redirect location (status {status})")]
    MissingRedirect {
        /// Operation that expected a redirect
        operation: &'static str,
        /// HTTP status code
        status: u16,
    },

    /// API response was neither data nor errors
    #[error("{operation}: unexpected response (status {status}): {body}")]
    UnexpectedResponse {
        /// Operation being performed
        operation: &'static str,
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },
}

impl PublishError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            PublishError::Config(ConfigError::MissingEnv { var }) => vec![
                format!("Export {var} before running the publisher"),
                "Product tokens are created in the Keygen dashboard under Products".to_string(),
            ],
            PublishError::Config(ConfigError::TarballNotFound { .. }) => vec![
                "Build the tarball first, e.g. npm pack --pack-destination dist".to_string(),
                "Use --dist-dir if the tarball lives elsewhere".to_string(),
            ],
            PublishError::Api(
                ApiError::UploadFailed { .. }
                | ApiError::CreateArtifact { .. }
                | ApiError::RetrieveManifest { .. }
                | ApiError::DownloadFailed { .. },
            ) => vec![
                "The release was created but not published; it stays a draft".to_string(),
                "Delete the draft release in Keygen before retrying the same version".to_string(),
            ],
            PublishError::Api(ApiError::CreateRelease { .. }) => vec![
                "Check that the version has not already been released".to_string(),
                "Verify KEYGEN_PRODUCT_TOKEN belongs to KEYGEN_PRODUCT_ID".to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
