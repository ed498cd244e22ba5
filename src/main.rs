use std::process::ExitCode;

use clap::Parser;
use trlint::cli::Arguments;

fn main() -> ExitCode {
    let args = Arguments::parse();

    match trlint::cli::run_cli(args) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}
