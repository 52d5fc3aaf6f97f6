use std::process::ExitCode;

use bb2html::cli::{Arguments, ExitStatus};
use clap::Parser;

fn main() -> ExitCode {
    let args = Arguments::parse();

    match bb2html::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
