//! Manifest retrieval and upload.

use super::tarball::tarball_path;
use crate::checksum::checksum_file;
use crate::config::PublishConfig;
use crate::error::{ApiError, Result};
use crate::keygen::{Artifact, ArtifactBody, ArtifactUpload, KeygenClient, Release, read_document};
use crate::manifest::{Manifest, VersionEntry};
use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::ACCEPT;

/// Content type of the manifest artifact
pub const MANIFEST_CONTENT_TYPE: &str = "application/json";

/// Fetch the previously published manifest for `package_name`.
///
/// # Returns
/// * `Ok(None)` - nothing has been published yet (404)
/// * `Ok(Some(manifest))` - the manifest currently in storage
/// * `Err` - API errors or a failed storage download
pub async fn get_manifest(client: &KeygenClient, package_name: &str) -> Result<Option<Manifest>> {
    let url = format!("{}/artifacts/{}", client.account_url(), package_name);

    log::info!("Retrieving manifest for {}", package_name);

    let response = client
        .api()
        .get(&url)
        .header(ACCEPT, MANIFEST_CONTENT_TYPE)
        .send()
        .await?;

    if response.status() == StatusCode::NOT_FOUND {
        log::info!("No manifest published yet for {}", package_name);
        return Ok(None);
    }

    let response = read_document::<serde_json::Value>(response, "retrieve manifest").await?;
    if let Some(errors) = response.document.errors {
        return Err(ApiError::RetrieveManifest {
            package: package_name.to_string(),
            payload: crate::keygen::errors_payload(&errors),
        }
        .into());
    }

    let location = response.location.ok_or(ApiError::MissingRedirect {
        operation: "retrieve manifest",
        status: response.status.as_u16(),
    })?;

    let download = client.storage().get(&location).send().await?;
    if download.status() != StatusCode::OK {
        return Err(ApiError::DownloadFailed {
            url: location,
            status: download.status().as_u16(),
        }
        .into());
    }

    let body = download.bytes().await?;
    let manifest: Option<Manifest> = serde_json::from_slice(&body)?;
    Ok(manifest)
}

/// Merge this version into the published manifest and upload the result
pub async fn publish_manifest(
    client: &KeygenClient,
    config: &PublishConfig,
    release: &Release,
) -> Result<Artifact> {
    let checksum = checksum_file(&tarball_path(config)).await?;
    let previous = get_manifest(client, &config.package_name).await?;

    if let Some(previous) = &previous {
        log::debug!(
            "Merging into manifest with {} version(s)",
            previous.versions.len()
        );
    }

    let entry = VersionEntry {
        name: &config.package_name,
        version: &config.package_version,
        metadata: &config.metadata.document,
        tarball_url: format!(
            "{}/artifacts/{}/{}.tgz",
            client.account_url(),
            config.package_name,
            config.package_version
        ),
        checksum: &checksum,
    };
    let manifest = Manifest::merge(previous, &entry);
    let body = Bytes::from(serde_json::to_vec(&manifest)?);

    client
        .upload_artifact(ArtifactUpload {
            release_id: release.id.clone(),
            content_type: MANIFEST_CONTENT_TYPE,
            filesize: body.len() as u64,
            body: ArtifactBody::Bytes(body),
            checksum: None,
            filename: config.package_name.clone(),
            filetype: "json",
        })
        .await
}
