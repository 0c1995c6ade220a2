//! Reading evidence documents from files or stdin.

use serde::de::DeserializeOwned;
use std::io::{self, Read};
use thiserror::Error;

/// Errors raised while loading command input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file could not be read.
    #[error("failed to read file {path}: {source}")]
    File {
        /// Path as given on the command line.
        path: String,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Standard input could not be read.
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    /// The input was not the expected JSON document.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads the whole input from `path`, or from stdin when `path` is `None`.
pub fn read_input(path: Option<&str>) -> Result<String, InputError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| InputError::File {
            path: path.to_string(),
            source,
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(InputError::Stdin)?;
            Ok(buffer)
        }
    }
}

/// Reads and deserializes a JSON document.
pub fn read_json<T: DeserializeOwned>(path: Option<&str>) -> Result<T, InputError> {
    let text = read_input(path)?;
    tracing::debug!(bytes = text.len(), "read input document");
    Ok(serde_json::from_str(&text)?)
}
