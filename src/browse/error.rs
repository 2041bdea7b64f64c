use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while browsing a directory
#[derive(Debug, Error)]
pub enum BrowseError {
    /// Directory could not be enumerated
    #[error("Cannot browse '{}': {source}", path.display())]
    EnumerationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A filter mask failed to compile
    #[error("Invalid mask '{mask}': {reason}")]
    InvalidMask { mask: String, reason: String },
    /// A pattern entry point received an unparsable pattern
    #[error(transparent)]
    Pattern(#[from] crate::patterns::PatternError),
}
