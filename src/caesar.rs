use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use caesar_crack::error::Result;
use caesar_crack::logging;
use caesar_crack::menu::{Session, SessionOptions};

#[derive(Parser, Debug)]
#[command(name = "caesar", version)]
#[command(about = "Encrypt, decrypt and brute-force Caesar ciphertext interactively")]
struct Args {
    /// Increase log verbosity (-v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// List unknown-shift candidates best-first with their scores
    #[arg(long)]
    ranked: bool,
}

fn run(args: Args) -> Result<()> {
    logging::setup_logging(args.verbose, args.quiet, args.log_file.as_deref())?;
    info!("caesar v{} starting", env!("CARGO_PKG_VERSION"));

    let options = SessionOptions {
        ranked_listing: args.ranked,
    };

    Session::new(io::stdin().lock(), io::stdout().lock(), options).run()
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("session failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
