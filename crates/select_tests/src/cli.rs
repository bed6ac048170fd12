// crates/select_tests/src/cli.rs

use clap::Parser;
use std::path::PathBuf;

/// Writes the tests requested in a pull-request description to a file for the test runner.
///
/// Looks for a line containing `Apex::[<tests>]::Apex` and writes `<tests>`,
/// or `all` when there is none.
#[derive(Parser, Debug, Default)]
#[command(name = "select_tests", version)]
pub struct Cli {
    /// Pull-request body to scan [default: pr_body.txt next to the executable]
    #[arg(long, value_name = "PATH")]
    pub pr_body: Option<PathBuf>,

    /// File that receives the selection [default: testsToRun.txt next to the executable]
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Keep scanning when a directive has an empty test list
    #[arg(long)]
    pub skip_empty_markers: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,
}
