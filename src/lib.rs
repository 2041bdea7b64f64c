//! seqls - numbered file sequence detection and listing
//!
//! This library partitions directory contents (or explicit path lists) into
//! plain files, folders and **sequences**: groups of filenames differing
//! only in an embedded frame number, reported with their pattern, frame
//! range, step, padding and missing-frame count.
//!
//! ```no_run
//! use std::path::Path;
//! use seqls::{browse, DetectOptions};
//!
//! let items = browse::browse(Path::new("plates"), &[], DetectOptions::default())?;
//! for item in &items {
//!     if let Some(seq) = item.as_sequence() {
//!         println!("{} [{}:{}]", seq.standard_pattern(), seq.first_time(), seq.last_time());
//!     }
//! }
//! # Ok::<(), seqls::BrowseError>(())
//! ```

use thiserror::Error;

pub mod browse;
pub mod cli;
pub mod config;
pub mod detect;
pub mod discovery;
pub mod item;
pub mod options;
pub mod output;
pub mod patterns;
pub mod sequence;
pub mod stat;
pub mod tokenize;

#[cfg(test)]
pub mod testing;

pub use browse::BrowseError;
pub use item::Item;
pub use options::{DetectOptions, DisplayOptions};
pub use patterns::PatternError;
pub use sequence::Sequence;
pub use stat::ItemStat;
pub use tokenize::TokenizeError;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum SeqlsError {
    /// Browse error
    #[error("Browse error: {0}")]
    Browse(#[from] browse::BrowseError),
    /// Pattern parsing error
    #[error("Pattern error: {0}")]
    Pattern(#[from] patterns::PatternError),
    /// Filename tokenization error
    #[error("Tokenize error: {0}")]
    Tokenize(#[from] tokenize::TokenizeError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
