//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use uegc_core::{BreakProperty, UNICODE_VERSION};

pub mod count;
pub mod explain;
pub mod generate_config;
pub mod segment;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text into extended grapheme clusters
    Segment(segment::SegmentArgs),

    /// Count extended grapheme clusters
    Count(count::CountArgs),

    /// Show the rule behind every boundary decision
    Explain(explain::ExplainArgs),

    /// Check the segmenter against a GraphemeBreakTest.txt file
    Validate(validate::ValidateArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Print version information, including the Unicode version
    Version,
}

/// List subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List grapheme cluster break properties
    Properties,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Segment(args) => args.execute(),
            Commands::Count(args) => args.execute(),
            Commands::Explain(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
            Commands::Version => {
                println!("{}", version_line());
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Lines printed by `uegc list`
    pub fn lines(self) -> Vec<String> {
        match self {
            ListCommands::Formats => vec![
                "text      one cluster per line".to_string(),
                "json      array of clusters with offsets and code points".to_string(),
                "markdown  numbered list with a total".to_string(),
            ],
            ListCommands::Properties => BreakProperty::ALL
                .iter()
                .map(|property| property.ucd_name().to_string())
                .collect(),
        }
    }
}

/// `uegc <version> (Unicode <version>)`
pub fn version_line() -> String {
    format!(
        "uegc {} (Unicode {UNICODE_VERSION})",
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_properties() {
        let lines = ListCommands::Properties.lines();
        assert_eq!(lines.len(), 15);
        assert_eq!(lines[0], "Other");
        assert!(lines.contains(&"Extended_Pictographic".to_string()));
    }

    #[test]
    fn test_list_formats() {
        let lines = ListCommands::Formats.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("json"));
    }

    #[test]
    fn test_version_line() {
        let line = version_line();
        assert!(line.starts_with("uegc "));
        assert!(line.ends_with("(Unicode 17.0.0)"));
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Properties,
        };
        let debug_str = format!("{list_cmd:?}");
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Properties"));
    }
}
