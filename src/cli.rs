use crate::report;
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "latency-report",
    version,
    about = "Summarize per-line latency measurements from a test log dump"
)]
pub struct Cli {
    /// Input log file containing bracketed latency lists
    #[arg(default_value = "outputs.txt")]
    pub file: PathBuf,
}

pub fn run(args: Cli) -> Result<()> {
    // Open before printing anything, so a missing file yields only the error.
    let file = match File::open(&args.file) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            bail!("file '{}' not found", args.file.display())
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to open '{}'", args.file.display()))
        }
    };

    let stdout = std::io::stdout();
    let mut out = std::io::LineWriter::new(stdout.lock());
    report::write_report(BufReader::new(file), &mut out)?;
    out.flush()?;
    Ok(())
}
