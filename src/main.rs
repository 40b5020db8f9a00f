//! lsext - List File Extensions
//!
//! Entry point for the lsext CLI application.

use clap::Parser;
use lsext::{cli::Cli, error::ExitCode};

fn main() {
    // Parse command-line arguments
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version also arrive here, printed to stdout
            let _ = err.print();
            std::process::exit(ExitCode::from_clap_error(&err).as_i32());
        }
    };

    match lsext::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            let exit_code = ExitCode::GeneralError;
            eprintln!("[{}] Error: {:#}", exit_code.code_prefix(), err);
            std::process::exit(exit_code.as_i32());
        }
    }
}
