//! Command-line arguments.

use std::path::PathBuf;

use kiwi_eval::interpreter::DEFAULT_MAX_CALL_DEPTH;
use kiwi_eval::EvalConfig;

use crate::CliError;

pub const USAGE: &str = "\
Usage: kiwi [FILE] [options]

Evaluates an ESTree JSON program read from FILE, or from standard input
when FILE is omitted, and prints its result.

Options:
  --max-depth=<N|none>  Maximum call depth (default: 10000)
  -h, --help            Show this help";

/// What the driver was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(RunOptions),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Input file; `None` reads standard input.
    pub path: Option<PathBuf>,
    /// `None` disables the call depth limit.
    pub max_depth: Option<usize>,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            path: None,
            max_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }
}

impl RunOptions {
    pub fn eval_config(&self) -> EvalConfig {
        EvalConfig::default().with_max_call_depth(self.max_depth)
    }
}

/// Parse arguments, not including the program name.
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut options = RunOptions::default();

    for arg in args {
        let arg = arg.into();
        if arg == "-h" || arg == "--help" {
            return Ok(Command::Help);
        } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
            options.max_depth = parse_max_depth(depth)?;
        } else if arg.starts_with('-') {
            return Err(CliError::Usage(format!("unknown option `{arg}`")));
        } else if options.path.is_none() {
            options.path = Some(PathBuf::from(arg));
        } else {
            return Err(CliError::Usage(format!("unexpected argument `{arg}`")));
        }
    }

    Ok(Command::Run(options))
}

fn parse_max_depth(value: &str) -> Result<Option<usize>, CliError> {
    if value == "none" {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|_| {
        CliError::Usage(format!(
            "invalid value `{value}` for --max-depth (expected a number or `none`)"
        ))
    })
}
