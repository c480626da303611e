//! Parser and runner for the Unicode `GraphemeBreakTest.txt` format
//!
//! Each data line alternates break markers and hex code points, e.g.
//! `÷ 0061 × 0308 ÷ 0062 ÷  # comment`.

use crate::error::CliError;
use anyhow::Result;
use uegc_core::Segmenter;

/// One test line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// 1-based line number in the file
    pub line: usize,
    /// Code points of the test string
    pub code_points: Vec<u32>,
    /// Expected boundary positions as code point indices, including 0 and the length
    pub boundaries: Vec<usize>,
}

/// Outcome of a test case that did not match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// The failing case
    pub case: TestCase,
    /// Boundaries produced by the segmenter
    pub actual: Vec<usize>,
}

impl Failure {
    /// The case rendered in test file notation, with expected and actual markers
    pub fn describe(&self) -> String {
        format!(
            "line {}: expected {} got {}",
            self.case.line,
            render(&self.case.code_points, &self.case.boundaries),
            render(&self.case.code_points, &self.actual)
        )
    }
}

/// Summary of a conformance run
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Lines checked
    pub total: usize,
    /// Lines that did not match
    pub failures: Vec<Failure>,
}

impl Report {
    /// Lines that matched
    pub fn passed(&self) -> usize {
        self.total - self.failures.len()
    }
}

/// Parse test file content
pub fn parse(content: &str) -> Result<Vec<TestCase>> {
    let mut cases = Vec::new();
    for (i, raw) in content.lines().enumerate() {
        let line = i + 1;
        let body = raw.split('#').next().unwrap_or_default().trim();
        if body.is_empty() {
            continue;
        }

        let invalid = |reason: String| CliError::InvalidTestFile { line, reason };
        let mut code_points = Vec::new();
        let mut boundaries = Vec::new();
        let mut expect_marker = true;
        for token in body.split_whitespace() {
            match (expect_marker, token) {
                (true, "÷") => {
                    boundaries.push(code_points.len());
                    expect_marker = false;
                }
                (true, "×") => expect_marker = false,
                (true, other) => {
                    return Err(invalid(format!("expected ÷ or × before {other}")).into())
                }
                (false, hex) => {
                    let cp = u32::from_str_radix(hex, 16)
                        .map_err(|_| invalid(format!("'{hex}' is not a hex code point")))?;
                    code_points.push(cp);
                    expect_marker = true;
                }
            }
        }

        if code_points.is_empty() || expect_marker {
            return Err(invalid("line must alternate markers and code points".to_string()).into());
        }
        if boundaries.first() != Some(&0) || boundaries.last() != Some(&code_points.len()) {
            return Err(invalid("line must start and end with ÷".to_string()).into());
        }

        cases.push(TestCase {
            line,
            code_points,
            boundaries,
        });
    }
    Ok(cases)
}

/// Run every case through `segmenter`
pub fn run(segmenter: &Segmenter, cases: Vec<TestCase>) -> Result<Report> {
    let mut report = Report {
        total: cases.len(),
        failures: Vec::new(),
    };
    for case in cases {
        let clusters = segmenter.segment_code_points(&case.code_points)?;
        let mut actual = Vec::with_capacity(clusters.len() + 1);
        actual.push(0);
        for cluster in &clusters {
            let last = actual.last().copied().unwrap_or_default();
            actual.push(last + cluster.chars().count());
        }
        if actual != case.boundaries {
            log::debug!("mismatch on line {}", case.line);
            report.failures.push(Failure { case, actual });
        }
    }
    Ok(report)
}

fn render(code_points: &[u32], boundaries: &[usize]) -> String {
    let mut out = String::new();
    for (i, cp) in code_points.iter().enumerate() {
        let marker = if boundaries.contains(&i) { '÷' } else { '×' };
        out.push_str(&format!("{marker} {cp:04X} "));
    }
    out.push('÷');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let cases = parse("# header\n\n÷ 0061 × 0308 ÷ 0062 ÷\t# a with diaeresis\n").unwrap();
        assert_eq!(
            cases,
            vec![TestCase {
                line: 3,
                code_points: vec![0x61, 0x308, 0x62],
                boundaries: vec![0, 2, 3],
            }]
        );
    }

    #[test]
    fn test_parse_unicode_data_lines() {
        let content = "÷ 0020 ÷ 0020 ÷\t#  ÷ [0.2] SPACE (Other) ÷ [999.0] SPACE (Other) ÷ [0.3]\n\
                       ÷ 000D × 000A ÷\t#  ÷ [0.2] <CARRIAGE RETURN (CR)> (CR) × [3.0] <LINE FEED (LF)> (LF) ÷ [0.3]\n";
        let cases = parse(content).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].boundaries, vec![0, 1, 2]);
        assert_eq!(cases[1].code_points, vec![0x0D, 0x0A]);
        assert_eq!(cases[1].boundaries, vec![0, 2]);
    }

    #[test]
    fn test_bundled_break_test_file_passes() {
        let content = include_str!("../../uegc-core/tests/data/GraphemeBreakTest.txt");
        let cases = parse(content).unwrap();
        assert!(cases.len() > 700);
        let report = run(&Segmenter::new().unwrap(), cases).unwrap();
        assert!(report.failures.is_empty(), "{:?}", report.failures.first());
        assert_eq!(report.passed(), report.total);
    }

    #[test]
    fn test_parse_errors() {
        for bad in [
            "0061 ÷",
            "÷ 0061",
            "÷ 0061 × 0062",
            "÷ 0061 0062 ÷",
            "÷ zz ÷",
            "× 0061 ÷",
            "÷ 0061 ×",
            "÷",
        ] {
            let error = parse(bad).unwrap_err();
            assert!(
                matches!(
                    error.downcast_ref::<CliError>(),
                    Some(CliError::InvalidTestFile { line: 1, .. })
                ),
                "{bad}: {error}"
            );
        }
    }

    #[test]
    fn test_run_reports_failures() {
        let cases = parse("÷ 000D × 000A ÷\n÷ 0061 ÷ 0308 ÷\n").unwrap();
        let report = run(&Segmenter::new().unwrap(), cases).unwrap();
        assert_eq!(report.total, 2);
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failures[0].case.line, 2);
        assert_eq!(report.failures[0].actual, vec![0, 2]);
        assert_eq!(
            report.failures[0].describe(),
            "line 2: expected ÷ 0061 ÷ 0308 ÷ got ÷ 0061 × 0308 ÷"
        );
    }
}
