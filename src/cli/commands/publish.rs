//! Publish command.

use crate::cli::{Args, RuntimeConfig};
use crate::config::PublishConfig;
use crate::error::Result;
use crate::publish::Publisher;

/// Resolve configuration and publish the package release
pub(super) async fn execute_publish(args: &Args, config: &RuntimeConfig) -> Result<()> {
    let publish_config = PublishConfig::from_args(args)?;
    log::debug!("Resolved configuration: {:?}", publish_config);

    let publisher = Publisher::new(publish_config)?;
    let outcome = publisher.run(config).await?;

    config.success_println("🎉 Release complete!");
    config.indent(&format!(
        "Package: {}@{}",
        publisher.config().package_name,
        publisher.config().package_version
    ));
    config.indent(&format!("Release: {}", outcome.release.id));
    if let Some(status) = &outcome.release.attributes.status {
        config.indent(&format!("Status: {}", status));
    }

    Ok(())
}
