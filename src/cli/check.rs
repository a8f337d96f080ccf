//! Diagnostic checks.

use crate::cli::{output, ConfigPathArg};
use crate::config::Config;
use crate::error::Result;

/// Load and validate a configuration file, reporting what it resolves to.
pub fn config(args: &ConfigPathArg) -> Result<()> {
    output::progress("Loading configuration");
    let config = match Config::load(&args.config) {
        Ok(config) => {
            output::progress_done(true);
            config
        }
        Err(e) => {
            output::progress_done(false);
            return Err(e);
        }
    };

    output::key_value(
        "Date range",
        format!(
            "{} .. {} ({} days)",
            config.generation.start_date,
            config.generation.end_date,
            config.generation.total_days()
        ),
    );
    output::key_value("Campaigns", config.generation.campaign_count);
    output::key_value("Seed", config.generation.seed);
    output::key_value("Channels", config.channels.weights.len());
    output::key_value("Events", config.events.len());
    output::ok("configuration is valid");
    Ok(())
}
