//! Kiwi CLI
//!
//! Prints exactly one result line on success. Errors go to stderr.

use std::process::ExitCode;

use kiwic::{parse_args, Command, CliError};

fn main() -> ExitCode {
    kiwic::init_tracing();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{}", kiwic::USAGE);
            return ExitCode::SUCCESS;
        }
        Ok(Command::Run(options)) => options,
        Err(err) => return report(&err),
    };

    match kiwic::run(&options) {
        Ok(outcome) => {
            println!("{outcome}");
            ExitCode::SUCCESS
        }
        Err(err) => report(&err),
    }
}

fn report(err: &CliError) -> ExitCode {
    eprintln!("error: {err}");
    if matches!(err, CliError::Usage(_)) {
        eprintln!();
        eprintln!("{}", kiwic::USAGE);
    }
    ExitCode::from(err.exit_code())
}
