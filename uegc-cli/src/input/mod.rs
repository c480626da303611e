//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Where the text to segment comes from
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Text given directly on the command line
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,
}

/// One input source, not yet read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text from the command line
    Inline(String),
    /// A resolved file
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// Display name used in output and progress
    pub fn name(&self) -> String {
        match self {
            InputSource::Inline(_) => "<text>".to_string(),
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
        }
    }

    /// Read the source text
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Inline(text) => Ok(text.clone()),
            InputSource::File(path) => FileReader::read_text(path),
            InputSource::Stdin => FileReader::read_stdin(),
        }
    }
}

impl InputArgs {
    /// Resolve the arguments to sources; stdin when nothing was given
    pub fn resolve(&self) -> Result<Vec<InputSource>> {
        let mut sources = Vec::new();
        if let Some(text) = &self.text {
            sources.push(InputSource::Inline(text.clone()));
        }
        if !self.input.is_empty() {
            sources.extend(
                resolve_patterns(&self.input)?
                    .into_iter()
                    .map(InputSource::File),
            );
        }
        if sources.is_empty() {
            sources.push(InputSource::Stdin);
        }
        Ok(sources)
    }
}
