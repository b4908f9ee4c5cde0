//! Release creation and publication

use super::models::{
    CreateDocument, NewReleaseAttributes, NewResource, ProductRelationship, Relationship, Release,
};
use super::{JSON_API, KeygenClient, read_document};
use crate::error::{ApiError, Result};
use reqwest::header::CONTENT_TYPE;

/// Channel every release is created on
pub const RELEASE_CHANNEL: &str = "stable";

impl KeygenClient {
    /// Create a draft release for `version` under the configured product.
    ///
    /// # Returns
    /// * `Ok(release)` - the created release
    /// * `Err` - transport failure or an `errors` document from the API
    pub async fn create_release(&self, version: &str) -> Result<Release> {
        let url = format!("{}/releases", self.account_url());
        let body = CreateDocument {
            data: NewResource {
                kind: "release",
                attributes: NewReleaseAttributes {
                    version: version.to_string(),
                    channel: RELEASE_CHANNEL,
                },
                relationships: ProductRelationship {
                    product: Relationship::to("product", self.product_id()),
                },
            },
        };

        log::info!("Creating release {} for product {}", version, self.product_id());

        let response = self
            .api()
            .post(&url)
            .header(CONTENT_TYPE, JSON_API)
            .body(serde_json::to_vec(&body)?)
            .send()
            .await?;

        read_document(response, "create release")
            .await?
            .into_data("create release", |payload| ApiError::CreateRelease {
                product_id: self.product_id().to_string(),
                payload,
            })
    }

    /// Publish a draft release, making it publicly visible
    pub async fn publish_release(&self, release: &Release) -> Result<Release> {
        let url = format!(
            "{}/releases/{}/actions/publish",
            self.account_url(),
            release.id
        );

        log::info!("Publishing release {}", release.id);

        let response = self.api().post(&url).send().await?;

        read_document(response, "publish release")
            .await?
            .into_data("publish release", |payload| ApiError::PublishRelease {
                release_id: release.id.clone(),
                payload,
            })
    }
}
