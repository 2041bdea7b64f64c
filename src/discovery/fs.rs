use std::io;
use std::path::Path;

use super::traits::{DirEntryInfo, DirectorySource, RawStat, StatSource};

/// Directory enumeration backed by `std::fs::read_dir`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectorySource;

impl DirectorySource for FsDirectorySource {
    fn entries(&self, directory: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
            entries.push(DirEntryInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        Ok(entries)
    }
}

/// Metadata access backed by `std::fs::symlink_metadata`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStatSource;

impl StatSource for FsStatSource {
    #[cfg(unix)]
    fn stat(&self, path: &Path) -> io::Result<RawStat> {
        use std::os::unix::fs::MetadataExt;

        let meta = std::fs::symlink_metadata(path)?;
        Ok(RawStat {
            size: meta.size(),
            nb_hard_links: meta.nlink(),
            modification_time: meta.mtime(),
            access_time: meta.atime(),
            creation_time: meta.ctime(),
            device_id: meta.dev(),
            inode_id: meta.ino(),
            user_id: meta.uid(),
            group_id: meta.gid(),
            nb_blocks: meta.blocks(),
        })
    }

    #[cfg(not(unix))]
    fn stat(&self, path: &Path) -> io::Result<RawStat> {
        let meta = std::fs::symlink_metadata(path)?;
        Ok(RawStat {
            size: meta.len(),
            nb_hard_links: 1,
            ..RawStat::default()
        })
    }
}
