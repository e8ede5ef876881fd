//! Shared helpers for integration tests
//!
//! Parsing of the three-line report the binary prints.

/// Regex matching a complete report, including the zero-rounds sentinel
#[allow(dead_code)]
pub const REPORT_PATTERN: &str = r"\AResult: -?\d+\nTotal time: \d+\.\d{4} ms\nAverage per iteration: (\d+\.\d{2} ns|N/A)\n\z";

/// Values read back from a printed report
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReport {
    pub result: i64,
    pub total_ms: f64,
    /// `None` when the line reads `N/A`
    pub average_ns: Option<f64>,
}

/// Parse the three report lines, panicking with the offending text on mismatch
#[allow(dead_code)]
pub fn parse_report(stdout: &str) -> ParsedReport {
    let mut lines = stdout.lines();
    let mut field = |prefix: &str, suffix: &str| -> String {
        let line = lines
            .next()
            .unwrap_or_else(|| panic!("missing line '{prefix}' in:\n{stdout}"));
        line.strip_prefix(prefix)
            .and_then(|rest| rest.strip_suffix(suffix))
            .unwrap_or_else(|| panic!("unexpected line {line:?} in:\n{stdout}"))
            .to_owned()
    };

    let result = field("Result: ", "").parse().unwrap();
    let total_ms = field("Total time: ", " ms").parse().unwrap();
    let average = field("Average per iteration: ", "");
    let average_ns = match average.as_str() {
        "N/A" => None,
        value => Some(
            value
                .strip_suffix(" ns")
                .unwrap_or_else(|| panic!("unexpected average {value:?}"))
                .parse()
                .unwrap(),
        ),
    };

    ParsedReport {
        result,
        total_ms,
        average_ns,
    }
}
