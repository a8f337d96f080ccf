//! Handler for the `init` command.

use crate::cli::{output, InitArgs};
use crate::error::{ConfigError, Result};

/// Starter config written by `adsmith init`.
const CONFIG_TEMPLATE: &str = include_str!("../../config.toml.example");

/// Write a commented starter configuration file.
pub fn execute(args: &InitArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        return Err(ConfigError::InvalidValue {
            field: "path",
            reason: format!(
                "{} already exists (use --force to overwrite)",
                args.path.display()
            ),
        }
        .into());
    }

    std::fs::write(&args.path, CONFIG_TEMPLATE)?;
    output::ok(&format!("wrote {}", args.path.display()));
    output::key_value("Next", format!("adsmith generate --config {}", args.path.display()));
    Ok(())
}
