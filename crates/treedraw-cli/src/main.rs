#![forbid(unsafe_code)]

//! `treedraw` binary entry point.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use treedraw_cli::cli::{HELP_TEXT, Opts, Parsed, VERSION};

fn init_logging() {
    let filter = EnvFilter::try_from_env("TREEDRAW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let parsed = Opts::parse_from(std::env::args().skip(1), |key| std::env::var(key).ok());
    let opts = match parsed {
        Ok(Parsed::Run(opts)) => opts,
        Ok(Parsed::Help) => {
            println!("{HELP_TEXT}");
            return ExitCode::SUCCESS;
        }
        Ok(Parsed::Version) => {
            println!("treedraw {VERSION}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}");
            eprintln!("Run with --help for usage information.");
            return ExitCode::from(2);
        }
    };

    init_logging();

    match treedraw_cli::run(&opts) {
        Ok(diagram) => {
            println!("{diagram}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "treedraw failed");
            eprintln!("treedraw: {err}");
            ExitCode::FAILURE
        }
    }
}
