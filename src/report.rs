//! Report driver for CLI output.
//!
//! Walks the log file line by line, runs the parser on each data line, and
//! formats a human-readable statistics block per line.

use crate::parse::LineParser;
use crate::stats::StatSummary;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const SEPARATOR_WIDTH: usize = 80;
const REPORT_TITLE: &str = "Latency Analysis Report";

/// Stream a per-line latency report for `input` into `out`.
///
/// Lines that are blank after trimming, or that contain no `[`, are skipped
/// without consuming a line number. A data line with no recognizable numeric
/// list still gets a numbered "No latencies found" notice.
pub fn write_report(input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let parser = LineParser::new();
    let separator = "=".repeat(SEPARATOR_WIDTH);

    writeln!(out, "{separator}")?;
    writeln!(out, "{REPORT_TITLE}")?;
    writeln!(out, "{separator}")?;
    writeln!(out)?;

    let mut line_number = 0usize;
    for line in input.lines() {
        let line = line.context("failed to read input line")?;
        let line = line.trim();
        if line.is_empty() || !line.contains('[') {
            continue;
        }
        line_number += 1;

        let entry = parser
            .parse_line(line)
            .with_context(|| format!("line {line_number}"))?;

        match StatSummary::from_samples(&entry.latencies) {
            Some(summary) => write_stats_block(out, line_number, &entry.operation, &summary)?,
            None => {
                writeln!(out, "Line {line_number}: No latencies found")?;
                writeln!(out)?;
            }
        }
    }

    writeln!(out, "{separator}")?;
    Ok(())
}

fn write_stats_block(
    out: &mut impl Write,
    line_number: usize,
    operation: &str,
    s: &StatSummary,
) -> Result<()> {
    writeln!(out, "Line {line_number}: {operation}")?;
    writeln!(out, "  Min:          {:.2} ms", s.min)?;
    writeln!(out, "  Average:      {:.2} ms", s.mean)?;
    writeln!(out, "  Median (P50): {:.2} ms", s.median)?;
    writeln!(out, "  P99:          {:.2} ms", s.p99)?;
    writeln!(out, "  P100 (Max):   {:.2} ms", s.p100)?;
    writeln!(out)?;
    Ok(())
}
