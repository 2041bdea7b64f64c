use thiserror::Error;

/// Errors produced while tokenizing a filename
#[derive(Debug, Error)]
pub enum TokenizeError {
    /// A digit run does not fit in a 64-bit signed integer
    #[error("Number '{digits}' does not fit in a 64-bit signed integer")]
    NumericOverflow { digits: String },
}
