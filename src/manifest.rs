//! Registry-style package manifest.
//!
//! The manifest is an accumulating history: each publish adds or replaces
//! exactly one entry under `versions` and points `dist-tags.latest` at it.
//! Earlier entries are carried over untouched.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value, json};

/// Package manifest as served to npm-compatible clients
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Package name, duplicated under `_id`
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Package name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Named pointers to versions
    #[serde(rename = "dist-tags", default, deserialize_with = "null_as_default")]
    pub dist_tags: Map<String, Value>,
    /// Version string to version metadata
    #[serde(default, deserialize_with = "null_as_default")]
    pub versions: Map<String, Value>,
}

// Explicit `null` reads the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A version being added to a manifest
#[derive(Debug, Clone)]
pub struct VersionEntry<'a> {
    /// Package name
    pub name: &'a str,
    /// Version string
    pub version: &'a str,
    /// package.json fields copied into the entry
    pub metadata: &'a Map<String, Value>,
    /// Download URL of the tarball artifact
    pub tarball_url: String,
    /// Base64 SHA-512 of the tarball
    pub checksum: &'a str,
}

impl VersionEntry<'_> {
    /// Render the `versions[version]` value
    pub fn to_value(&self) -> Value {
        let mut entry = self.metadata.clone();
        entry.insert("name".to_string(), Value::from(self.name));
        entry.insert("version".to_string(), Value::from(self.version));
        entry.insert(
            "_id".to_string(),
            Value::from(format!("{}@{}", self.name, self.version)),
        );
        entry.insert(
            "dist".to_string(),
            json!({
                "tarball": self.tarball_url,
                "integrity": format!("sha512-{}", self.checksum),
            }),
        );
        Value::Object(entry)
    }
}

impl Manifest {
    /// Merge `entry` into the previous manifest, if any.
    ///
    /// Prior versions and non-`latest` dist-tags are kept; `latest` and the
    /// entry for this version are overwritten.
    pub fn merge(previous: Option<Manifest>, entry: &VersionEntry<'_>) -> Manifest {
        let previous = previous.unwrap_or_default();

        let mut dist_tags = previous.dist_tags;
        dist_tags.insert("latest".to_string(), Value::from(entry.version));

        let mut versions = previous.versions;
        versions.insert(entry.version.to_string(), entry.to_value());

        Manifest {
            id: entry.name.to_string(),
            name: entry.name.to_string(),
            dist_tags,
            versions,
        }
    }

    /// Version currently tagged `latest`
    pub fn latest(&self) -> Option<&str> {
        self.dist_tags.get("latest").and_then(Value::as_str)
    }
}
