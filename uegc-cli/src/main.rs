//! uegc command-line entry point

use clap::Parser;
use uegc_cli::commands::Commands;
use uegc_cli::CliResult;

/// Split text into user-perceived characters (Unicode extended grapheme clusters)
#[derive(Debug, Parser)]
#[command(name = "uegc", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_segment_flags() {
        let cli = Cli::try_parse_from([
            "uegc", "segment", "-t", "abc", "-f", "json", "--code-points", "-p", "-vv",
        ])
        .unwrap();
        match cli.command {
            Commands::Segment(args) => {
                assert_eq!(args.input.text.as_deref(), Some("abc"));
                assert!(args.code_points);
                assert!(args.parallel);
                assert_eq!(args.verbosity.verbose, 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_explain_requires_input() {
        assert!(Cli::try_parse_from(["uegc", "explain"]).is_err());
        assert!(Cli::try_parse_from(["uegc", "explain", "-u", "0061"]).is_ok());
    }
}
