//! Kiwi command-line driver.
//!
//! Reads an ESTree JSON document (from a file or standard input), recovers
//! from leading garbage, lowers it, evaluates it, and renders the single
//! result line.

mod config;
mod error;
mod input;
mod tracing_setup;

pub use config::{parse_args, Command, RunOptions, USAGE};
pub use error::CliError;
pub use input::{find_document, read_source};
pub use tracing_setup::init_tracing;

use kiwi_eval::{run_program, EvalConfig, Outcome};
use kiwi_ir::{estree, lower_program, Program, StringInterner};

/// Stack for decoding, enough for documents nested up to
/// [`estree::MAX_NESTING`] levels (256 MiB).
const DECODE_STACK_SIZE: usize = 256 * 1024 * 1024;

/// Decode, lower and evaluate one program given as JSON text.
pub fn evaluate_source(text: &str, config: EvalConfig) -> Result<Outcome, CliError> {
    let interner = StringInterner::new();
    // The JSON value and ESTree model recurse on drop as well, so both are
    // built and dropped on the decode stack. Only the flat IR leaves it.
    let lowered = kiwi_stack::with_stack_size(DECODE_STACK_SIZE, || decode(text, &interner))?;
    tracing::debug!(
        expressions = lowered.arena.expr_count(),
        identifiers = interner.len(),
        "lowered program"
    );

    Ok(run_program(&lowered, &interner, config)?)
}

fn decode(text: &str, interner: &StringInterner) -> Result<Program, CliError> {
    let (offset, document) = find_document(text)?;
    if offset > 0 {
        tracing::debug!(skipped = offset, "discarded leading bytes before the AST");
    }

    let program = estree::Program::from_value(document)?;
    Ok(lower_program(&program, interner)?)
}

/// Run the driver for parsed options: read the input and evaluate it.
pub fn run(options: &RunOptions) -> Result<Outcome, CliError> {
    let text = read_source(options.path.as_deref())?;
    evaluate_source(&text, options.eval_config())
}
