//! Publisher configuration.
//!
//! Credentials come from the environment (through clap's `env` bindings),
//! package identity from package.json unless overridden.

use crate::cli::Args;
use crate::error::ConfigError;
use crate::metadata::{PackageMetadata, load_package_json};
use std::path::PathBuf;
use url::Url;

/// Keygen account identifier variable
pub const ACCOUNT_ID_VAR: &str = "KEYGEN_ACCOUNT_ID";
/// Keygen product identifier variable
pub const PRODUCT_ID_VAR: &str = "KEYGEN_PRODUCT_ID";
/// Keygen product token variable
pub const PRODUCT_TOKEN_VAR: &str = "KEYGEN_PRODUCT_TOKEN";
/// Package name override variable
pub const PACKAGE_NAME_VAR: &str = "PACKAGE_NAME";
/// Package version override variable
pub const PACKAGE_VERSION_VAR: &str = "PACKAGE_VERSION";
/// API base URL variable
pub const API_URL_VAR: &str = "KEYGEN_API_URL";

/// Production Keygen API
pub const DEFAULT_API_URL: &str = "https://api.keygen.sh";

/// Resolved configuration for a publish run.
///
/// Custom `Debug` implementation redacts the product token.
#[derive(Clone)]
pub struct PublishConfig {
    /// Keygen account identifier
    pub account_id: String,
    /// Keygen product identifier
    pub product_id: String,
    /// Product token used as bearer credential
    pub product_token: String,
    /// Package name (may be scoped, e.g. `@acme/widgets`)
    pub package_name: String,
    /// Package version
    pub package_version: String,
    /// Package metadata from package.json
    pub metadata: PackageMetadata,
    /// Keygen API base URL
    pub api_url: Url,
    /// Directory holding the pre-built tarball
    pub dist_dir: PathBuf,
}

impl std::fmt::Debug for PublishConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublishConfig")
            .field("account_id", &self.account_id)
            .field("product_id", &self.product_id)
            .field("product_token", &"[REDACTED]")
            .field("package_name", &self.package_name)
            .field("package_version", &self.package_version)
            .field("api_url", &self.api_url.as_str())
            .field("dist_dir", &self.dist_dir)
            .finish()
    }
}

impl PublishConfig {
    /// Resolve configuration from parsed arguments.
    ///
    /// Credentials are checked first, in the order account, product, token,
    /// so a missing credential is reported before any file is touched.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let account_id = require(args.account_id.as_deref(), ACCOUNT_ID_VAR)?;
        let product_id = require(args.product_id.as_deref(), PRODUCT_ID_VAR)?;
        let product_token = require(args.product_token.as_deref(), PRODUCT_TOKEN_VAR)?;

        let api_url = Url::parse(&args.api_url).map_err(|e| ConfigError::InvalidUrl {
            var: API_URL_VAR,
            reason: e.to_string(),
        })?;

        let metadata = load_package_json(&args.package_json)?;
        let package_name = non_empty(args.package_name.as_deref())
            .or_else(|| metadata.name.clone())
            .ok_or(ConfigError::MissingPackageField {
                field: "name",
                var: PACKAGE_NAME_VAR,
            })?;
        let package_version = non_empty(args.package_version.as_deref())
            .or_else(|| metadata.version.clone())
            .ok_or(ConfigError::MissingPackageField {
                field: "version",
                var: PACKAGE_VERSION_VAR,
            })?;

        semver::Version::parse(&package_version).map_err(|source| {
            ConfigError::InvalidVersion {
                version: package_version.clone(),
                source,
            }
        })?;

        Ok(Self {
            account_id,
            product_id,
            product_token,
            package_name,
            package_version,
            metadata,
            api_url,
            dist_dir: args.dist_dir.clone(),
        })
    }

    /// Account-scoped API root, e.g. `https://api.keygen.sh/v1/accounts/{id}`
    pub fn account_url(&self) -> String {
        format!(
            "{}/v1/accounts/{}",
            self.api_url.as_str().trim_end_matches('/'),
            self.account_id
        )
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn require(value: Option<&str>, var: &'static str) -> Result<String, ConfigError> {
    non_empty(value).ok_or(ConfigError::MissingEnv { var })
}
