//! Keygen API integration for release operations.
//!
//! Two HTTP clients are kept: one for the Keygen API, carrying the bearer
//! token and version header and never following redirects, and one for the
//! presigned object storage URLs the API redirects to.

mod artifacts;
mod models;
mod release_manager;

pub use artifacts::{ArtifactBody, ArtifactUpload};
pub use models::{Artifact, ArtifactAttributes, Document, Release, ReleaseAttributes};

use crate::config::{PRODUCT_TOKEN_VAR, PublishConfig};
use crate::error::{ApiError, ConfigError, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, LOCATION};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

/// JSON:API media type
pub const JSON_API: &str = "application/vnd.api+json";

/// Keygen API version pinned by every request
pub const KEYGEN_VERSION: &str = "1.1";

/// Keygen API client
#[derive(Debug, Clone)]
pub struct KeygenClient {
    /// Authenticated API client
    api: reqwest::Client,
    /// Unauthenticated object storage client
    storage: reqwest::Client,
    /// `{api}/v1/accounts/{account}`
    account_url: String,
    /// Product the releases belong to
    product_id: String,
}

impl KeygenClient {
    /// Create a new client from configuration
    pub fn new(config: &PublishConfig) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.product_token))
            .map_err(|_| ConfigError::InvalidCredential {
                var: PRODUCT_TOKEN_VAR,
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_API));
        headers.insert("Keygen-Version", HeaderValue::from_static(KEYGEN_VERSION));

        let api = reqwest::Client::builder()
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        let storage = reqwest::Client::builder().build()?;

        Ok(Self {
            api,
            storage,
            account_url: config.account_url(),
            product_id: config.product_id.clone(),
        })
    }

    /// Authenticated API client
    pub(crate) fn api(&self) -> &reqwest::Client {
        &self.api
    }

    /// Object storage client
    pub(crate) fn storage(&self) -> &reqwest::Client {
        &self.storage
    }

    /// Account-scoped API root
    pub fn account_url(&self) -> &str {
        &self.account_url
    }

    /// Product identifier releases are created under
    pub fn product_id(&self) -> &str {
        &self.product_id
    }
}

/// A decoded API response, captured before the body is consumed
#[derive(Debug)]
pub(crate) struct ApiResponse<T> {
    pub(crate) status: StatusCode,
    pub(crate) location: Option<String>,
    pub(crate) document: Document<T>,
    pub(crate) body: String,
}

impl<T> ApiResponse<T> {
    /// Unwrap `data`, mapping an `errors` document through `on_errors`
    pub(crate) fn into_data(
        self,
        operation: &'static str,
        on_errors: impl FnOnce(String) -> ApiError,
    ) -> Result<T> {
        if let Some(errors) = self.document.errors {
            return Err(on_errors(errors_payload(&errors)).into());
        }

        self.document.data.ok_or_else(|| {
            ApiError::UnexpectedResponse {
                operation,
                status: self.status.as_u16(),
                body: self.body,
            }
            .into()
        })
    }
}

/// Read a JSON:API document from a response.
///
/// An empty body decodes to a document with neither data nor errors.
pub(crate) async fn read_document<T: DeserializeOwned>(
    response: Response,
    operation: &'static str,
) -> Result<ApiResponse<T>> {
    let status = response.status();
    let location = response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = response.text().await?;

    log::debug!("{operation}: HTTP {status}");

    let document = if body.trim().is_empty() {
        Document {
            data: None,
            errors: None,
        }
    } else {
        serde_json::from_str(&body).map_err(|_| ApiError::UnexpectedResponse {
            operation,
            status: status.as_u16(),
            body: body.clone(),
        })?
    };

    Ok(ApiResponse {
        status,
        location,
        document,
        body,
    })
}

/// Render API errors the way they are reported: `{"errors":[...]}`
pub(crate) fn errors_payload(errors: &[serde_json::Value]) -> String {
    serde_json::json!({ "errors": errors }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_payload_wraps_entries() {
        let errors = vec![serde_json::json!({"title": "Unauthorized"})];
        assert_eq!(
            errors_payload(&errors),
            r#"{"errors":[{"title":"Unauthorized"}]}"#
        );
    }

    #[test]
    fn into_data_prefers_errors_over_data() {
        let response = ApiResponse {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            location: None,
            document: Document {
                data: Some(1u32),
                errors: Some(vec![serde_json::json!({"title": "bad"})]),
            },
            body: String::new(),
        };

        let err = response
            .into_data("test", |payload| ApiError::PublishRelease {
                release_id: "r1".to_string(),
                payload,
            })
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"failed to publish release r1: {"errors":[{"title":"bad"}]}"#
        );
    }

    #[test]
    fn into_data_without_data_is_unexpected() {
        let response: ApiResponse<u32> = ApiResponse {
            status: StatusCode::OK,
            location: None,
            document: Document {
                data: None,
                errors: None,
            },
            body: "{}".to_string(),
        };

        let err = response
            .into_data("create release", |payload| ApiError::CreateRelease {
                product_id: "p".to_string(),
                payload,
            })
            .unwrap_err();
        assert!(err.to_string().starts_with("create release: unexpected response"));
    }
}
