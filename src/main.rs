mod cli;
mod parse;
mod report;
mod stats;

use clap::Parser;

fn main() {
    let args = cli::Cli::parse();

    match cli::run(args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
