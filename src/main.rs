use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use command::*;

mod command;
mod document;
mod error;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Path to the jaqen JSON config. Anything other than exactly one path prints usage.
    #[arg(allow_hyphen_values = true)]
    paths: Vec<PathBuf>,

    #[clap(short, long)]
    verbose: bool,
}

fn usage() -> String {
    format!("USAGE: {} /path/to/jaqen_config.json", env!("CARGO_PKG_NAME"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();

    // Wrong argument count is not a failure: print usage and exit 0.
    let mut paths = cli.paths;
    if paths.len() != 1 {
        println!("{}", usage());
        return Ok(());
    }

    Format {
        path: paths.remove(0),
    }
    .run()
}
