//! Browse orchestration
//!
//! One pass over a directory (or an explicit path list) classifies every
//! entry as a plain file, a folder, or a member of a numbered sequence,
//! then collapses each detected sequence into a single [`Item`].
//!
//! The pipeline: tokenize each name, bucket by string runs, disambiguate
//! the varying numeric slot per bucket, and build one sequence per
//! candidate. Names without numbers (and names whose numbers overflow a
//! 64-bit integer) pass through as plain items.

pub mod error;
pub mod filter;

pub use error::BrowseError;
pub use filter::{Mask, MaskSet};

use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::{Path, PathBuf};

use crate::detect::{self, GroupMap};
use crate::discovery::{DirEntryInfo, DirectorySource, FsDirectorySource};
use crate::options::DetectOptions;
use crate::patterns;
use crate::tokenize;
use crate::{Item, Sequence};

/// Browse one directory on the filesystem.
///
/// `path` may also name a file or a pattern inside the directory: its
/// basename then becomes an extra mask and the parent is browsed.
///
/// # Errors
/// * [`BrowseError::EnumerationFailed`] if the directory cannot be read.
/// * [`BrowseError::InvalidMask`] if a mask fails to compile.
pub fn browse(
    path: &Path,
    masks: &[String],
    options: DetectOptions,
) -> Result<Vec<Item>, BrowseError> {
    browse_with(&FsDirectorySource, path, masks, options)
}

/// [`browse`] against a caller-supplied directory source.
///
/// # Errors
/// Same as [`browse`].
pub fn browse_with<S: DirectorySource>(
    source: &S,
    path: &Path,
    masks: &[String],
    options: DetectOptions,
) -> Result<Vec<Item>, BrowseError> {
    let mut masks = masks.to_vec();
    let directory = normalize_research(path, &mut masks);
    let filters = MaskSet::compile(&masks)?;

    let mut entries =
        source
            .entries(&directory)
            .map_err(|e| BrowseError::EnumerationFailed {
                path: directory.clone(),
                source: e,
            })?;
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let mut is_dir: HashMap<String, bool> = HashMap::new();
    let mut plain: Vec<Item> = Vec::new();
    let mut groups = GroupMap::new();

    for entry in entries {
        if options.ignore_dot_files && entry.name.starts_with('.') {
            continue;
        }
        if !filters.matches(&entry.name) {
            continue;
        }
        is_dir.insert(entry.name.clone(), entry.is_dir);
        match tokenize::decompose(&entry.name, options.negative) {
            Ok(d) if d.has_numbers() => groups.insert(d),
            // no numbers, or a number too large to index frames with
            _ => plain.push(plain_item(&directory, entry)),
        }
    }

    Ok(finalize(&directory, plain, groups, &is_dir, options))
}

/// Detect sequences in an explicit list of paths, without touching the
/// filesystem. Paths are grouped by parent directory first; sequences
/// never span directories.
///
/// With `sequence_from_filename` disabled every path comes back as a plain
/// file item.
#[must_use]
pub fn browse_paths(paths: &[PathBuf], options: DetectOptions) -> Vec<Item> {
    let mut by_directory: BTreeMap<PathBuf, Vec<String>> = BTreeMap::new();
    for path in paths {
        if let Some(name) = path.file_name() {
            let directory = path.parent().map_or_else(PathBuf::new, Path::to_path_buf);
            by_directory
                .entry(directory)
                .or_default()
                .push(name.to_string_lossy().into_owned());
        }
    }

    let mut output = Vec::new();
    for (directory, names) in by_directory {
        let mut plain = Vec::new();
        let mut groups = GroupMap::new();
        for name in names {
            if options.ignore_dot_files && name.starts_with('.') {
                continue;
            }
            let decomposed = if options.sequence_from_filename {
                tokenize::decompose(&name, options.negative).ok()
            } else {
                None
            };
            match decomposed {
                Some(d) if d.has_numbers() => groups.insert(d),
                _ => plain.push(Item::File {
                    directory: directory.clone(),
                    name,
                }),
            }
        }
        output.extend(finalize(&directory, plain, groups, &HashMap::new(), options));
    }
    output
}

/// Resolve a pattern path (`plates/img.####.exr`) against the filesystem:
/// parse the pattern, scan its directory for members, and return the
/// populated sequence. A directory that does not exist yields an empty
/// sequence.
///
/// # Errors
/// * [`BrowseError::Pattern`] if the basename is not a pattern.
/// * [`BrowseError::EnumerationFailed`] if the directory exists but cannot
///   be read.
pub fn scan_pattern(pattern_path: &Path, options: DetectOptions) -> Result<Sequence, BrowseError> {
    scan_pattern_with(&FsDirectorySource, pattern_path, options)
}

/// [`scan_pattern`] against a caller-supplied directory source.
///
/// # Errors
/// Same as [`scan_pattern`].
pub fn scan_pattern_with<S: DirectorySource>(
    source: &S,
    pattern_path: &Path,
    options: DetectOptions,
) -> Result<Sequence, BrowseError> {
    let directory = parent_or_dot(pattern_path);
    let filename = pattern_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let info = patterns::parse(&filename, options.negative)?;

    let entries = match source.entries(&directory) {
        Ok(entries) => entries,
        // a declared sequence whose directory is absent is simply empty
        Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
        Err(e) => {
            return Err(BrowseError::EnumerationFailed {
                path: directory,
                source: e,
            });
        }
    };

    let mut observed: Vec<(i64, String)> = Vec::new();
    for entry in entries {
        let Some(rest) = entry.name.strip_prefix(info.prefix.as_str()) else {
            continue;
        };
        let Some(middle) = rest.strip_suffix(info.suffix.as_str()) else {
            continue;
        };
        if middle.is_empty() {
            continue;
        }
        if let Ok(time) = middle.parse::<i64>() {
            observed.push((time, middle.to_string()));
        }
    }
    observed.sort();

    if observed.is_empty() {
        return Ok(Sequence::new(
            directory,
            info.prefix,
            info.suffix,
            info.padding,
            info.strict_padding,
            0,
            0,
            1,
            0,
            0,
        ));
    }

    let mut distinct: Vec<i64> = observed.iter().map(|(t, _)| *t).collect();
    distinct.dedup();
    let first = distinct[0];
    let last = distinct[distinct.len() - 1];
    let step = detect::builder::extract_step(&distinct);
    let span = usize::try_from((last - first) / step + 1).unwrap_or(0);

    let padding = padding_of(&observed);
    let strict = padding > 0 && observed.iter().any(|(_, s)| unsigned_part(s).starts_with('0'));

    Ok(Sequence::new(
        directory,
        info.prefix,
        info.suffix,
        padding,
        strict,
        first,
        last,
        step,
        observed.len(),
        span.saturating_sub(distinct.len()),
    ))
}

/// Declared padding of the observed frame spellings: the single non-zero
/// width, or 0 when none or several.
fn padding_of(observed: &[(i64, String)]) -> usize {
    let mut paddings: std::collections::BTreeSet<usize> = observed
        .iter()
        .map(|(_, s)| {
            let digits = unsigned_part(s);
            if digits.len() > 1 && digits.starts_with('0') {
                digits.len()
            } else {
                0
            }
        })
        .collect();
    paddings.remove(&0);
    match paddings.len() {
        1 => *paddings.iter().next().unwrap(),
        _ => 0,
    }
}

fn unsigned_part(spelling: &str) -> &str {
    spelling.trim_start_matches(['-', '+'])
}

/// A research path that names a file instead of a directory turns into a
/// mask over its parent.
fn normalize_research(path: &Path, masks: &mut Vec<String>) -> PathBuf {
    if std::fs::metadata(path).is_ok_and(|m| !m.is_dir())
        && let Some(name) = path.file_name()
    {
        masks.push(name.to_string_lossy().into_owned());
        return parent_or_dot(path);
    }
    path.to_path_buf()
}

fn parent_or_dot(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

fn plain_item(directory: &Path, entry: DirEntryInfo) -> Item {
    if entry.is_dir {
        Item::Folder {
            directory: directory.to_path_buf(),
            name: entry.name,
        }
    } else {
        Item::File {
            directory: directory.to_path_buf(),
            name: entry.name,
        }
    }
}

/// Run disambiguation and sequence building over the groups and assemble
/// the final, deterministically ordered item list: plain items in name
/// order, then sequences by pattern and range.
fn finalize(
    directory: &Path,
    mut plain: Vec<Item>,
    groups: GroupMap,
    is_dir: &HashMap<String, bool>,
    options: DetectOptions,
) -> Vec<Item> {
    let mut sequences: Vec<Sequence> = Vec::new();

    for (key, tuples) in groups.into_groups() {
        for candidate in detect::candidates(tuples) {
            let seq = detect::build(directory, &key, &candidate);
            if is_dir
                .get(&seq.first_filename())
                .copied()
                .unwrap_or(false)
            {
                // numbered directories do not form sequences
                continue;
            }
            if options.sequence_needs_at_least_two_files && seq.nb_files() == 1 {
                plain.push(Item::File {
                    directory: directory.to_path_buf(),
                    name: seq.first_filename(),
                });
            } else {
                sequences.push(seq);
            }
        }
    }

    plain.sort_by(|a, b| a.first_filename().cmp(&b.first_filename()));
    sequences.sort_by(|a, b| {
        a.prefix()
            .cmp(b.prefix())
            .then_with(|| a.suffix().cmp(b.suffix()))
            .then_with(|| a.first_time().cmp(&b.first_time()))
    });

    let mut output = plain;
    output.extend(sequences.into_iter().map(Item::Sequence));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory directory fixture.
    struct VecSource(Vec<DirEntryInfo>);

    impl VecSource {
        fn files(names: &[&str]) -> Self {
            Self(
                names
                    .iter()
                    .map(|n| DirEntryInfo {
                        name: (*n).to_string(),
                        is_dir: false,
                    })
                    .collect(),
            )
        }
    }

    impl DirectorySource for VecSource {
        fn entries(&self, _directory: &Path) -> io::Result<Vec<DirEntryInfo>> {
            Ok(self.0.clone())
        }
    }

    fn seqs(items: &[Item]) -> Vec<&Sequence> {
        items.iter().filter_map(Item::as_sequence).collect()
    }

    #[test]
    fn frames_collapse_into_one_sequence() {
        let source = VecSource::files(&["a.0001.exr", "a.0002.exr", "a.0003.exr", "readme.txt"]);
        let items = browse_with(&source, Path::new("d"), &[], DetectOptions::default()).unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_file());
        assert_eq!(items[0].first_filename(), "readme.txt");
        let seq = items[1].as_sequence().unwrap();
        assert_eq!(seq.nb_files(), 3);
        assert_eq!(seq.standard_pattern(), "a.####.exr");
    }

    #[test]
    fn masks_narrow_the_listing() {
        let source = VecSource::files(&["a.0001.exr", "a.0002.exr", "b.0001.jpg"]);
        let items = browse_with(
            &source,
            Path::new("d"),
            &["*.exr".to_string()],
            DetectOptions::default(),
        )
        .unwrap();
        assert_eq!(items.len(), 1);
        assert!(items[0].is_sequence());
    }

    #[test]
    fn dot_files_are_skipped_on_request() {
        let source = VecSource::files(&[".hidden", "plain.txt"]);
        let options = DetectOptions::default().ignore_dot_files(true);
        let items = browse_with(&source, Path::new("d"), &[], options).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].first_filename(), "plain.txt");
    }

    #[test]
    fn numbered_directories_are_not_sequences() {
        let source = VecSource(vec![
            DirEntryInfo {
                name: "take1".to_string(),
                is_dir: true,
            },
            DirEntryInfo {
                name: "take2".to_string(),
                is_dir: true,
            },
        ]);
        let items = browse_with(&source, Path::new("d"), &[], DetectOptions::default()).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn singleton_becomes_a_file_when_two_are_required() {
        let source = VecSource::files(&["shot.0042.exr"]);
        let options = DetectOptions::default().sequence_needs_at_least_two_files(true);
        let items = browse_with(&source, Path::new("d"), &[], options).unwrap();
        assert_eq!(items.len(), 1);
        assert!(items[0].is_file());
        assert_eq!(items[0].first_filename(), "shot.0042.exr");
    }

    #[test]
    fn oversized_numbers_fall_back_to_plain_files() {
        let source = VecSource::files(&["big.99999999999999999999.exr"]);
        let items = browse_with(&source, Path::new("d"), &[], DetectOptions::default()).unwrap();
        assert_eq!(items.len(), 1);
        assert!(items[0].is_file());
    }

    #[test]
    fn enumeration_failure_surfaces_the_path() {
        struct FailingSource;
        impl DirectorySource for FailingSource {
            fn entries(&self, _d: &Path) -> io::Result<Vec<DirEntryInfo>> {
                Err(io::Error::from(io::ErrorKind::PermissionDenied))
            }
        }
        let err =
            browse_with(&FailingSource, Path::new("d"), &[], DetectOptions::default()).unwrap_err();
        assert!(matches!(err, BrowseError::EnumerationFailed { .. }));
    }

    #[test]
    fn path_list_detection_groups_per_directory() {
        let paths: Vec<PathBuf> = ["x/a.1.exr", "x/a.2.exr", "y/a.3.exr"]
            .iter()
            .map(PathBuf::from)
            .collect();
        let items = browse_paths(&paths, DetectOptions::default());
        let sequences = seqs(&items);
        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[0].directory(), Path::new("x"));
        assert_eq!(sequences[1].directory(), Path::new("y"));
    }

    #[test]
    fn path_list_detection_can_be_disabled() {
        let paths: Vec<PathBuf> = ["x/a.1.exr", "x/a.2.exr"].iter().map(PathBuf::from).collect();
        let options = DetectOptions::default().sequence_from_filename(false);
        let items = browse_paths(&paths, options);
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(Item::is_file));
    }

    #[test]
    fn scan_pattern_collects_members() {
        let source = VecSource::files(&[
            "img.0001.exr",
            "img.0003.exr",
            "img.0005.exr",
            "other.txt",
        ]);
        let seq = scan_pattern_with(
            &source,
            Path::new("d/img.####.exr"),
            DetectOptions::default(),
        )
        .unwrap();
        assert_eq!(seq.first_time(), 1);
        assert_eq!(seq.last_time(), 5);
        assert_eq!(seq.step(), 2);
        assert_eq!(seq.nb_files(), 3);
        assert_eq!(seq.padding(), 4);
        assert!(seq.strict_padding());
    }

    #[test]
    fn scan_pattern_rejects_plain_names() {
        let source = VecSource::files(&[]);
        let err = scan_pattern_with(&source, Path::new("d/readme.txt"), DetectOptions::default())
            .unwrap_err();
        assert!(matches!(err, BrowseError::Pattern(_)));
    }
}
