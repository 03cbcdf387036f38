//! TxnForge CLI

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use txnforge::generator::Generator;

/// Generate synthetic HTTP session fixtures for a test harness
#[derive(Parser, Debug)]
#[command(name = "txnforge", version, about, long_about = None)]
struct Args {
    /// Number of sessions to generate
    #[arg(short = 'n', long = "number")]
    number: usize,

    /// Directory to store the generated sessions (must already exist)
    #[arg(short = 'd', long = "dir")]
    dir: PathBuf,
}

fn main() {
    init_tracing();

    let args = Args::parse();

    let mut generator = Generator::from_entropy();
    let report = generator.generate(args.number, &args.dir);

    if report.is_complete() {
        info!(
            sessions = report.written.len(),
            txns = report.txns_built,
            dir = %args.dir.display(),
            "generation complete"
        );
    } else {
        // Individual failures were already reported; a partial run still
        // exits 0 after attempting every requested session.
        warn!(
            written = report.written.len(),
            failed = report.failures.len(),
            attempted = report.attempted(),
            "generation finished with failures"
        );
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
