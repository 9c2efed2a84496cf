#![forbid(unsafe_code)]

//! Harness binary: scripted fingertip runs from the command line.
//!
//! ```sh
//! cargo run -p wavelock-harness -- run --secret 1234 --keys 1234
//! cargo run -p wavelock-harness -- run --secret 1234 --keys 1334 --jsonl
//! cargo run -p wavelock-harness -- layout --lock-type number
//! ```

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match wavelock_harness::cli::run_from_env() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
