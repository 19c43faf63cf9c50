//! ahaha - Portfolio site router and Toy Space catalog

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = ahaha_site::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
