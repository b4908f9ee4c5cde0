//! # keygen_publish
//!
//! Publishes an npm-style package release to the Keygen distribution API.
//!
//! A run creates a draft release, uploads the packed tarball and a
//! registry-style manifest as artifacts of that release, then publishes it.
//! The manifest accumulates every version ever published, so Keygen can act
//! as an npm registry for the package.
//!
//! ## Usage
//!
//! ```bash
//! export KEYGEN_ACCOUNT_ID=... KEYGEN_PRODUCT_ID=... KEYGEN_PRODUCT_TOKEN=...
//! npm pack --pack-destination dist
//! keygen_publish
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod checksum;
pub mod cli;
pub mod config;
pub mod error;
pub mod keygen;
pub mod manifest;
pub mod metadata;
pub mod publish;

pub use cli::Args;
pub use config::PublishConfig;
pub use error::{ApiError, ConfigError, PublishError, Result};
pub use keygen::{Artifact, KeygenClient, Release};
pub use manifest::Manifest;
pub use publish::{PublishOutcome, Publisher};
