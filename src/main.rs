//! GM log converter CLI

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use gmlog::LogFile;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    println!("gmlog v{}", env!("CARGO_PKG_VERSION"));
    println!();

    if args.len() != 2 {
        eprintln!("Usage: {} <log-file>", args[0]);
        process::exit(1);
    }

    let input = PathBuf::from(&args[1]);
    let output = report_path(&input);

    match run(&input, &output) {
        Ok(()) => println!("successfully parsed and converted to {}", output.display()),
        Err(e) => {
            // A failed conversion still exits 0: scripted callers historically
            // treat any nonzero status as a usage error.
            // TODO: return a distinct nonzero status for corrupted inputs once
            // callers can tell the two apart.
            eprintln!("error: {e:#}");
        }
    }
}

/// The report lands next to the input, with `.txt` appended to the full
/// file name rather than replacing its extension
fn report_path(input: &Path) -> PathBuf {
    let mut path = input.as_os_str().to_os_string();
    path.push(".txt");
    PathBuf::from(path)
}

fn run(input: &Path, output: &Path) -> anyhow::Result<()> {
    let log = LogFile::parse(input)
        .with_context(|| format!("failed to parse {}", input.display()))?;
    log.write_report(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(())
}
