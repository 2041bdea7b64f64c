//! Item metadata
//!
//! [`ItemStat`] carries the stat fields of one item. For a sequence, the
//! members are rolled up: sizes and disk blocks are summed, the
//! modification time is the newest member's, the creation time the oldest
//! non-zero one, and the hard-link count the fractional average across the
//! frame range. Frames that cannot be stat'ed (missing or unreadable)
//! contribute zeros.

use crate::Item;
use crate::discovery::{RawStat, StatSource};

/// Aggregated metadata of one browse item.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ItemStat {
    pub size: u64,
    /// Average hard-link count over the members; fractional for sequences.
    pub nb_hard_links: f64,
    pub modification_time: i64,
    pub access_time: i64,
    pub creation_time: i64,
    pub device_id: u64,
    pub inode_id: u64,
    pub user_id: u32,
    pub group_id: u32,
    /// Bytes allocated on disk (512-byte blocks).
    pub size_on_disk: u64,
}

impl ItemStat {
    fn from_raw(raw: RawStat) -> Self {
        Self {
            size: raw.size,
            nb_hard_links: raw.nb_hard_links as f64,
            modification_time: raw.modification_time,
            access_time: raw.access_time,
            creation_time: raw.creation_time,
            device_id: raw.device_id,
            inode_id: raw.inode_id,
            user_id: raw.user_id,
            group_id: raw.group_id,
            size_on_disk: raw.nb_blocks * 512,
        }
    }
}

/// Stat one item through `source`. Per-member failures degrade to zeroed
/// fields rather than failing the whole item.
#[must_use]
pub fn stat_item<S: StatSource>(item: &Item, source: &S) -> ItemStat {
    match item {
        Item::File { .. } | Item::Folder { .. } => {
            let raw = source.stat(&item.first_path()).unwrap_or_default();
            ItemStat::from_raw(raw)
        }
        Item::Sequence(seq) => {
            let mut stat = ItemStat::default();
            let mut total_links = 0u64;
            let mut nb_frames = 0u64;
            let mut first_seen = true;

            for time in seq.times() {
                nb_frames += 1;
                let Ok(raw) = source.stat(&seq.path_at(time)) else {
                    continue;
                };
                if first_seen {
                    stat.device_id = raw.device_id;
                    stat.inode_id = raw.inode_id;
                    stat.user_id = raw.user_id;
                    stat.group_id = raw.group_id;
                    stat.access_time = raw.access_time;
                    first_seen = false;
                }
                stat.size += raw.size;
                stat.size_on_disk += raw.nb_blocks * 512;
                total_links += raw.nb_hard_links;
                if raw.modification_time > stat.modification_time {
                    stat.modification_time = raw.modification_time;
                }
                if raw.creation_time != 0
                    && (stat.creation_time == 0 || raw.creation_time < stat.creation_time)
                {
                    stat.creation_time = raw.creation_time;
                }
            }

            if nb_frames > 0 {
                stat.nb_hard_links = total_links as f64 / nb_frames as f64;
            }
            stat
        }
    }
}
