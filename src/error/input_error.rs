use std::{io, path::PathBuf};

use rustyline::error::ReadlineError;

/// Failures of the input source stack.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Pushing another script would exceed the nesting limit.
    #[error("input redirection stack too deep (limit is {limit})")]
    TooDeep {
        /// The maximum number of nested scripts.
        limit: usize,
    },
    /// A script file could not be opened.
    #[error("could not open file `{}`: {source}", path.display())]
    Open {
        /// The path that was requested.
        path:   PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Reading from an open script failed.
    #[error("could not read from `{name}`: {source}")]
    Read {
        /// Display name of the source.
        name:   String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The line editor failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] ReadlineError),
}
