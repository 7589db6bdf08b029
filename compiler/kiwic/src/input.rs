//! Reading the program text and locating the JSON document in it.

use std::io::Read;
use std::path::Path;

use kiwi_ir::{estree, InputError};

use crate::CliError;

/// Read the whole input from `path`, or from standard input when `None`.
pub fn read_source(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(CliError::ReadStdin)?;
            Ok(text)
        }
    }
}

/// Find the JSON document in `text`, skipping any leading garbage.
///
/// Tries each `{` in order and returns the byte offset and value of the
/// first suffix that is exactly one JSON document. Only JSON syntax is
/// considered here; whether the document is a valid program is decided by
/// the caller.
///
/// When nothing parses, the error from the first candidate is reported.
/// A candidate nested too deeply ends the search: every later `{` lies
/// inside it.
pub fn find_document(text: &str) -> Result<(usize, serde_json::Value), CliError> {
    let mut first_error = None;

    for (offset, _) in text.match_indices('{') {
        match estree::parse_document(&text[offset..]) {
            Ok(value) => return Ok((offset, value)),
            Err(err @ InputError::NestingTooDeep { .. }) => return Err(err.into()),
            Err(err) => {
                tracing::trace!(offset, error = %err, "no document at offset");
                first_error.get_or_insert(err);
            }
        }
    }

    Err(first_error.map_or(CliError::NoDocument, CliError::Input))
}
