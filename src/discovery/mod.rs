//! Filesystem capability seams
//!
//! Directory enumeration and `stat` access go through small traits so the
//! detection pipeline can be exercised against in-memory fixtures and so
//! frontends can substitute their own sources (archives, remote mounts).

pub mod fs;
pub mod traits;

pub use fs::{FsDirectorySource, FsStatSource};
pub use traits::{DirEntryInfo, DirectorySource, RawStat, StatSource};
