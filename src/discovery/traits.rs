use std::io;
use std::path::Path;

/// One directory entry as seen by a [`DirectorySource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub is_dir: bool,
}

/// Trait for enumerating one level of a directory.
pub trait DirectorySource {
    /// List the entries of `directory`, in no particular order.
    ///
    /// # Errors
    /// Returns an `io::Error` if the directory cannot be read (not found,
    /// permission denied).
    fn entries(&self, directory: &Path) -> io::Result<Vec<DirEntryInfo>>;
}

/// Raw metadata of one filesystem object. Fields a platform cannot supply
/// are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawStat {
    pub size: u64,
    pub nb_hard_links: u64,
    pub modification_time: i64,
    pub access_time: i64,
    pub creation_time: i64,
    pub device_id: u64,
    pub inode_id: u64,
    pub user_id: u32,
    pub group_id: u32,
    /// 512-byte blocks allocated on disk.
    pub nb_blocks: u64,
}

/// Trait for fetching metadata of one path.
pub trait StatSource {
    /// Stat `path`.
    ///
    /// # Errors
    /// Returns an `io::Error` if the path cannot be stat'ed.
    fn stat(&self, path: &Path) -> io::Result<RawStat>;
}
