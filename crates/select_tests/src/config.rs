// crates/select_tests/src/config.rs

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use extract_test_selection::ScanPolicy;

use crate::cli::Cli;

/// Pull-request body written by the CI job before this tool runs.
pub const PR_BODY_FILE: &str = "pr_body.txt";

/// Read by the downstream test runner.
pub const OUTPUT_FILE: &str = "testsToRun.txt";

/// Runtime configuration resolved from the CLI and the executable's location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractorConfig {
    pub pr_body_path: PathBuf,
    pub output_path: PathBuf,
    pub scan_policy: ScanPolicy,
    pub verbose: bool,
}

impl ExtractorConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let base_dir = executable_dir()?;
        Ok(Self::resolve(cli, &base_dir))
    }

    /// Relative paths, including the defaults, are taken relative to `base_dir`.
    pub fn resolve(cli: &Cli, base_dir: &Path) -> Self {
        let pr_body = cli.pr_body.as_deref().unwrap_or(Path::new(PR_BODY_FILE));
        let output = cli.output.as_deref().unwrap_or(Path::new(OUTPUT_FILE));
        let scan_policy = if cli.skip_empty_markers {
            ScanPolicy::SkipEmptyMarkers
        } else {
            ScanPolicy::StopAtFirstMarker
        };

        Self {
            pr_body_path: base_dir.join(pr_body),
            output_path: base_dir.join(output),
            scan_policy,
            verbose: cli.verbose,
        }
    }
}

fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("Executable {} has no parent directory", exe.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_sit_next_to_base_dir() {
        let base = Path::new("/opt/ci/bin");
        let config = ExtractorConfig::resolve(&Cli::default(), base);

        assert_eq!(config.pr_body_path, base.join("pr_body.txt"));
        assert_eq!(config.output_path, base.join("testsToRun.txt"));
        assert_eq!(config.scan_policy, ScanPolicy::StopAtFirstMarker);
        assert!(!config.verbose);
    }

    #[test]
    fn test_relative_overrides_resolve_against_base_dir() {
        let base = Path::new("/opt/ci/bin");
        let cli = Cli {
            pr_body: Some(PathBuf::from("input/body.md")),
            output: Some(PathBuf::from("out.txt")),
            ..Cli::default()
        };
        let config = ExtractorConfig::resolve(&cli, base);

        assert_eq!(config.pr_body_path, base.join("input/body.md"));
        assert_eq!(config.output_path, base.join("out.txt"));
    }

    #[test]
    fn test_absolute_overrides_are_kept() {
        let base = Path::new("/opt/ci/bin");
        let absolute = env::temp_dir().join("body.txt");
        let cli = Cli {
            pr_body: Some(absolute.clone()),
            skip_empty_markers: true,
            verbose: true,
            ..Cli::default()
        };
        let config = ExtractorConfig::resolve(&cli, base);

        assert_eq!(config.pr_body_path, absolute);
        assert_eq!(config.scan_policy, ScanPolicy::SkipEmptyMarkers);
        assert!(config.verbose);
    }

    #[test]
    fn test_executable_dir_exists() {
        let dir = executable_dir().unwrap();
        assert!(dir.is_dir());
    }
}
