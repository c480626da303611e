//! Explain command implementation

use anyhow::{Context, Result};
use clap::Args;
use uegc_core::{string_from_code_points, Segmenter};

/// Arguments for the explain command
#[derive(Debug, Args)]
#[command(group(clap::ArgGroup::new("source").required(true).args(["text", "code_points"])))]
pub struct ExplainArgs {
    /// Text to explain
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Hex code points instead of text, e.g. "0915 094D 0937"
    #[arg(short = 'u', long, value_name = "HEX")]
    pub code_points: Option<String>,

    /// Print decisions as JSON
    #[arg(long)]
    pub json: bool,
}

impl ExplainArgs {
    /// Execute the explain command
    pub fn execute(&self) -> Result<()> {
        let text = match (&self.text, &self.code_points) {
            (Some(text), _) => text.clone(),
            (None, Some(hex)) => parse_code_points(hex)?,
            (None, None) => String::new(),
        };

        let segmenter = Segmenter::new()?;
        let decisions = segmenter.explain(&text)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&decisions)?);
            return Ok(());
        }

        println!("{:>6} decision", "byte");
        for decision in &decisions {
            println!("{decision}");
        }
        println!("{} clusters", segmenter.count(&text)?);
        Ok(())
    }
}

fn parse_code_points(hex: &str) -> Result<String> {
    let values = hex
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            let digits = token.trim_start_matches("U+").trim_start_matches("u+");
            u32::from_str_radix(digits, 16)
                .with_context(|| format!("'{token}' is not a hex code point"))
        })
        .collect::<Result<Vec<u32>>>()?;
    Ok(string_from_code_points(&values)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uegc_core::SegmentError;

    #[test]
    fn test_parse_code_points() {
        assert_eq!(
            parse_code_points("0915 094D,U+0937").unwrap(),
            "\u{915}\u{94D}\u{937}"
        );
        assert!(parse_code_points("xyz").is_err());
    }

    #[test]
    fn test_invalid_scalar_reported_by_core() {
        let error = parse_code_points("0061 D800").unwrap_err();
        assert_eq!(
            error.downcast_ref::<SegmentError>(),
            Some(&SegmentError::InvalidInput {
                position: 1,
                reason: "U+D800 is not a Unicode scalar value".to_string(),
            })
        );
        assert!(matches!(
            parse_code_points("110000").unwrap_err().downcast_ref::<SegmentError>(),
            Some(SegmentError::InvalidInput { position: 0, .. })
        ));
    }
}
