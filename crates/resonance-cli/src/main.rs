//! resonance - synthetic node network simulator
//!
//! Synchronizes a synthetic network and reports its health.

use std::process::ExitCode;

fn main() -> ExitCode {
    match resonance_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(resonance_cli::cli::exit_status(&err))
        }
    }
}
