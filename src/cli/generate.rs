//! Handler for the `generate` command.

use tracing::info;

use crate::cli::{output, GenerateArgs};
use crate::config::Config;
use crate::error::Result;
use crate::{export, generator};

/// Execute the generate command.
pub fn execute(args: &GenerateArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // Apply CLI overrides
    if let Some(seed) = args.seed {
        config.generation.seed = seed;
    }
    if let Some(ref path) = args.output {
        config.output.path = path.clone();
    }
    if args.star_schema {
        config.output.star_schema = true;
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }

    config.init_logging();

    info!(
        seed = config.generation.seed,
        campaigns = config.generation.campaign_count,
        start = %config.generation.start_date,
        end = %config.generation.end_date,
        "generation starting"
    );

    let dataset = generator::generate(&config)?;

    let rows = export::write_flat(&dataset, &config.output.path)?;
    info!(rows, path = %config.output.path.display(), "flat dataset written");

    if config.output.star_schema {
        export::write_star_schema(&dataset, &config.output.star_schema_dir)?;
        info!(dir = %config.output.star_schema_dir.display(), "star schema written");
    }

    output::ok(&format!(
        "{rows} rows across {} campaigns -> {}",
        dataset.campaigns.len(),
        config.output.path.display()
    ));

    Ok(())
}
