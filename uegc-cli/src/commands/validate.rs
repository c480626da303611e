//! Validate command implementation

use crate::conformance;
use crate::error::CliError;
use crate::input::FileReader;
use crate::logging::Verbosity;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use uegc_core::Segmenter;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Break test file in GraphemeBreakTest.txt format
    #[arg(short, long, value_name = "FILE", required = true)]
    pub file: PathBuf,

    /// Number of failing lines to print
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub max_failures: usize,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        self.verbosity.init_logging();

        println!("Validating against: {}", self.file.display());

        let content = FileReader::read_text(&self.file)?;
        let cases = conformance::parse(&content)?;
        let segmenter = Segmenter::new()?;
        let report = conformance::run(&segmenter, cases)?;

        if report.failures.is_empty() {
            println!("✓ All {} lines passed (Unicode {})", report.total, uegc_core::UNICODE_VERSION);
            return Ok(());
        }

        println!("✗ {} of {} lines failed", report.failures.len(), report.total);
        for failure in report.failures.iter().take(self.max_failures) {
            println!("  {}", failure.describe());
        }
        if report.failures.len() > self.max_failures {
            println!("  ... and {} more", report.failures.len() - self.max_failures);
        }

        Err(CliError::ConformanceFailures {
            failed: report.failures.len(),
            total: report.total,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args(content: &str) -> (NamedTempFile, ValidateArgs) {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        let args = ValidateArgs {
            file: file.path().to_path_buf(),
            max_failures: 10,
            verbosity: Verbosity {
                quiet: true,
                verbose: 0,
            },
        };
        (file, args)
    }

    #[test]
    fn test_validate_passing_file() {
        let (_file, args) = args("÷ 000D × 000A ÷\n÷ 1F1FA × 1F1F8 ÷ 1F1EB ÷\n");
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_failing_file() {
        let (_file, args) = args("÷ 0061 ÷ 0308 ÷\n");
        let error = args.execute().unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::ConformanceFailures { failed: 1, total: 1 })
        ));
    }

    #[test]
    fn test_validate_malformed_file() {
        let (_file, args) = args("0061 0308\n");
        assert!(args.execute().is_err());
    }
}
