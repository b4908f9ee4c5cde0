//! Package metadata read from `package.json`.
//!
//! The whole document is kept because it becomes the body of the version
//! entry in the published manifest.

use crate::error::ConfigError;
use serde_json::{Map, Value};
use std::path::Path;

/// Package metadata extracted from package.json
#[derive(Debug, Clone, Default)]
pub struct PackageMetadata {
    /// `name` field, if present
    pub name: Option<String>,
    /// `version` field, if present
    pub version: Option<String>,
    /// Every top-level field of the document
    pub document: Map<String, Value>,
}

impl PackageMetadata {
    /// Build metadata from an already parsed document
    pub fn from_document(document: Map<String, Value>) -> Self {
        let field = |key: &str| document.get(key).and_then(Value::as_str).map(str::to_string);

        Self {
            name: field("name"),
            version: field("version"),
            document,
        }
    }
}

/// Load package metadata from a package.json file
pub fn load_package_json(path: &Path) -> Result<PackageMetadata, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Metadata {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(document)) => Ok(PackageMetadata::from_document(document)),
        Ok(_) => Err(ConfigError::Metadata {
            path: path.to_path_buf(),
            reason: "top-level value is not an object".to_string(),
        }),
        Err(e) => Err(ConfigError::Metadata {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_name_version_and_keeps_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(
            &path,
            r#"{"name":"@acme/widgets","version":"2.0.1","main":"index.js"}"#,
        )
        .unwrap();

        let metadata = load_package_json(&path).unwrap();
        assert_eq!(metadata.name.as_deref(), Some("@acme/widgets"));
        assert_eq!(metadata.version.as_deref(), Some("2.0.1"));
        assert_eq!(metadata.document["main"], "index.js");
    }

    #[test]
    fn missing_file_is_metadata_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_package_json(&dir.path().join("package.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Metadata { .. }));
    }

    #[test]
    fn non_object_document_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = load_package_json(&path).unwrap_err();
        assert!(err.to_string().contains("not an object"));
    }
}
