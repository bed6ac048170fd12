// crates/select_tests/src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use extract_test_selection::run;

mod cli;
mod config;
mod logger;

use cli::Cli;
use config::ExtractorConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ExtractorConfig::from_cli(&cli)?;
    logger::init_logger(config.verbose);

    debug!("Config: {:?}", config);
    info!("Scanning {}", config.pr_body_path.display());

    let selection = run(&config.pr_body_path, &config.output_path, config.scan_policy)
        .context("Failed to extract the test selection")?;

    if selection.is_all() {
        info!("No test directive found; running all tests");
    }

    Ok(())
}
