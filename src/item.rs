//! Browse result items
//!
//! One entry of a browse listing: a plain file, a folder, or a detected
//! sequence.

use std::path::{Path, PathBuf};

use crate::Sequence;

/// A single unit of a browse result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    File { directory: PathBuf, name: String },
    Folder { directory: PathBuf, name: String },
    Sequence(Sequence),
}

impl Item {
    /// The directory owning this item.
    #[must_use]
    pub fn directory(&self) -> &Path {
        match self {
            Self::File { directory, .. } | Self::Folder { directory, .. } => directory,
            Self::Sequence(seq) => seq.directory(),
        }
    }

    /// The item's filename; for a sequence, the filename of its first frame.
    #[must_use]
    pub fn first_filename(&self) -> String {
        match self {
            Self::File { name, .. } | Self::Folder { name, .. } => name.clone(),
            Self::Sequence(seq) => seq.first_filename(),
        }
    }

    /// Path of the item (first frame for a sequence).
    #[must_use]
    pub fn first_path(&self) -> PathBuf {
        self.directory().join(self.first_filename())
    }

    /// Name shown in a listing: the filename, or the sequence pattern.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::File { name, .. } | Self::Folder { name, .. } => name.clone(),
            Self::Sequence(seq) => seq.standard_pattern(),
        }
    }

    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    #[must_use]
    pub const fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }

    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    #[must_use]
    pub const fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Self::Sequence(seq) => Some(seq),
            _ => None,
        }
    }
}
