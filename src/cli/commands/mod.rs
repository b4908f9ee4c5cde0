//! Command execution.
//!
//! Errors are reported here, with recovery suggestions, and turned into the
//! process exit code.

mod publish;

use crate::cli::{Args, RuntimeConfig};
use crate::error::Result;

use publish::execute_publish;

/// Execute the publish command and map its outcome to an exit code
pub async fn execute_command(args: Args) -> Result<i32> {
    let config = RuntimeConfig::new();

    match execute_publish(&args, &config).await {
        Ok(()) => Ok(0),
        Err(e) => {
            config.error_println(&e.to_string());

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                config.println("\n💡 Recovery suggestions:");
                for suggestion in suggestions {
                    config.indent(&format!("• {}", suggestion));
                }
            }

            Ok(1)
        }
    }
}
