use anyhow::{Context, Result};
use regex::Regex;

/// Label reported when a line has no recognizable operation name.
const UNKNOWN_OPERATION: &str = "Unknown";

/// One log line reduced to its operation label and latency samples.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEntry {
    pub operation: String,
    /// Samples in their original on-line order (unsorted).
    pub latencies: Vec<f64>,
}

/// Pattern-match extractor for latency dump lines. The input has no schema;
/// this scrapes the first `Latencies of <label>:` marker and the first
/// bracketed numeric list, ignoring everything else on the line.
pub struct LineParser {
    operation_re: Regex,
    list_re: Regex,
}

impl LineParser {
    pub fn new() -> Self {
        Self {
            operation_re: Regex::new(r"Latencies of ([^:]+):").expect("operation pattern"),
            list_re: Regex::new(r"\[([\d.,\s]+)\]").expect("list pattern"),
        }
    }

    /// Extract the operation label and latency list from one raw line.
    /// A missing label falls back to "Unknown"; a missing bracketed list
    /// yields an empty `latencies`. A token that fails to parse as a number
    /// is an error.
    pub fn parse_line(&self, line: &str) -> Result<ParsedEntry> {
        let operation = self
            .operation_re
            .captures(line)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| UNKNOWN_OPERATION.to_string());

        let latencies = match self.list_re.captures(line).and_then(|c| c.get(1)) {
            Some(group) => parse_number_list(group.as_str())?,
            None => Vec::new(),
        };

        Ok(ParsedEntry {
            operation,
            latencies,
        })
    }
}

/// Split a comma-separated list, dropping empty tokens (e.g. from `1,,2`).
fn parse_number_list(raw: &str) -> Result<Vec<f64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            tok.parse::<f64>()
                .with_context(|| format!("invalid latency value '{tok}'"))
        })
        .collect()
}
