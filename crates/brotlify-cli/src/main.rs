//! brotlify - write brotli-compressed siblings for static files
//!
//! Walks a folder and, next to every file that shrinks under brotli, writes
//! `<name>.br` so a web server can serve precompressed content.

use anyhow::{anyhow, Result};
use brotlify_engine::Brotlifier;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

mod display;
mod json_output;

use display::{display_error, ConsoleReporter, SummaryFormat};

/// brotlify - precompress static files with brotli
#[derive(Parser)]
#[command(
    name = "brotlify",
    version = env!("CARGO_PKG_VERSION"),
    about = "Write brotli-compressed siblings for every compressible file in a folder",
    long_about = "brotlify walks a folder recursively and writes <file>.br next to every file\n\
                  that gets smaller when compressed with brotli at its best quality.\n\
                  Images, audio, video, archives and existing .br files are left alone."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Quiet mode - only log errors
    #[arg(short, long)]
    quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long)]
    verbose: bool,

    /// Print total sizes after a successful run
    #[arg(short, long)]
    summary: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Folder to brotlify
    folder: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(folder) = cli.folder.as_deref() else {
        println!("usage: brotlify <folder>");
        return ExitCode::from(1);
    };

    if let Err(e) = init_logging(cli.debug, cli.quiet, cli.verbose) {
        eprintln!("{}", e);
    }

    info!("brotlify v{} starting", env!("CARGO_PKG_VERSION"));

    let summary = if cli.json {
        SummaryFormat::Json
    } else if cli.summary {
        SummaryFormat::Text
    } else {
        SummaryFormat::None
    };

    match brotlify_command(folder, summary) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display_error(&e.to_string());
            ExitCode::from(1)
        }
    }
}

fn init_logging(debug: bool, quiet: bool, verbose: bool) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {}", e))
}

fn brotlify_command(folder: &Path, summary: SummaryFormat) -> Result<()> {
    let mut brotlifier = Brotlifier::new();
    let mut reporter = ConsoleReporter::new(summary);

    brotlifier.run(folder, &mut reporter)?;

    let totals = brotlifier.totals();
    info!(
        "Saved {} bytes across {} files",
        totals.saved_bytes(),
        totals.files_compressed
    );
    Ok(())
}
