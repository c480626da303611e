//! Logging setup shared by the subcommands

use clap::Args;

/// Verbosity flags
#[derive(Debug, Clone, Default, Args)]
pub struct Verbosity {
    /// Suppress progress output and logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Verbosity {
    /// Log filter for the verbosity count
    pub fn level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Initialize logging based on verbosity level; `RUST_LOG` takes precedence
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }
        // A logger may already be installed when commands run in-process
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.level()),
        )
        .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        let mut verbosity = Verbosity::default();
        assert_eq!(verbosity.level(), "warn");
        verbosity.verbose = 2;
        assert_eq!(verbosity.level(), "debug");
        verbosity.verbose = 7;
        assert_eq!(verbosity.level(), "trace");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        let verbosity = Verbosity::default();
        verbosity.init_logging();
        verbosity.init_logging();
    }
}
