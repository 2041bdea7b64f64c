use thiserror::Error;

/// Errors produced while parsing a sequence pattern
#[derive(Debug, Error)]
pub enum PatternError {
    /// Pattern matched none of the accepted forms
    #[error("Pattern '{pattern}' matches no recognized sequence form")]
    Unrecognized { pattern: String },
    /// Pattern had nothing to parse
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
