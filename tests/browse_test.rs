//! Integration tests for on-disk browsing
//!
//! These create scratch directory trees and verify the complete browse
//! workflow against the real filesystem.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use seqls::browse::{browse, scan_pattern};
use seqls::discovery::FsStatSource;
use seqls::{DetectOptions, Item, Sequence, stat};

/// Build a scratch tree with the given files (10 bytes each) and
/// subdirectories.
fn frame_tree(files: &[&str], dirs: &[&str]) -> TempDir {
    let tree = TempDir::new().unwrap();
    for name in dirs {
        fs::create_dir(tree.path().join(name)).unwrap();
    }
    for name in files {
        fs::write(tree.path().join(name), b"0123456789").unwrap();
    }
    tree
}

fn sequences(items: &[Item]) -> Vec<&Sequence> {
    items.iter().filter_map(Item::as_sequence).collect()
}

#[test]
fn listing_mixes_files_folders_and_sequences() {
    let tree = frame_tree(
        &["a.0001.exr", "a.0002.exr", "a.0003.exr", "readme.txt"],
        &["renders"],
    );
    let items = browse(tree.path(), &[], DetectOptions::default()).unwrap();

    assert_eq!(items.len(), 3);
    // plain entries first in name order, sequences after
    assert!(items[0].is_file());
    assert_eq!(items[0].first_filename(), "readme.txt");
    assert!(items[1].is_folder());
    assert_eq!(items[1].first_filename(), "renders");
    let seq = items[2].as_sequence().unwrap();
    assert_eq!(seq.standard_pattern(), "a.####.exr");
    assert_eq!(seq.directory(), tree.path());
}

#[test]
fn masks_filter_the_directory() {
    let tree = frame_tree(&["a.0001.exr", "a.0002.exr", "b.0001.jpg"], &[]);
    let items = browse(
        tree.path(),
        &["*.exr".to_string()],
        DetectOptions::default(),
    )
    .unwrap();
    assert_eq!(items.len(), 1);
    assert!(items[0].is_sequence());
}

#[test]
fn digit_masks_select_sequences() {
    let tree = frame_tree(&["img.0001.exr", "img.0002.exr", "img.10.exr"], &[]);
    let items = browse(
        tree.path(),
        &["img.####.exr".to_string()],
        DetectOptions::default(),
    )
    .unwrap();
    let seqs = sequences(&items);
    assert_eq!(seqs.len(), 1);
    assert_eq!(seqs[0].nb_files(), 2);
}

#[test]
fn dot_files_are_skipped_on_request() {
    let tree = frame_tree(&[".hidden", "visible.txt"], &[]);
    let options = DetectOptions::default().ignore_dot_files(true);
    let items = browse(tree.path(), &[], options).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].first_filename(), "visible.txt");
}

#[test]
fn a_file_path_becomes_a_mask_over_its_parent() {
    let tree = frame_tree(&["a.0001.exr", "a.0002.exr", "other.txt"], &[]);
    let options = DetectOptions::default().sequence_needs_at_least_two_files(true);
    let items = browse(&tree.path().join("a.0001.exr"), &[], options).unwrap();
    assert_eq!(items.len(), 1);
    assert!(items[0].is_file());
    assert_eq!(items[0].first_filename(), "a.0001.exr");
}

#[test]
fn numbered_directories_do_not_form_sequences() {
    let tree = frame_tree(&[], &["cut1", "cut2", "cut3"]);
    let items = browse(tree.path(), &[], DetectOptions::default()).unwrap();
    assert!(items.is_empty());
}

#[test]
fn missing_directory_fails_to_browse() {
    let tree = frame_tree(&[], &[]);
    let gone = tree.path().join("nowhere");
    let err = browse(&gone, &[], DetectOptions::default()).unwrap_err();
    assert!(err.to_string().contains("nowhere"));
}

#[test]
fn browsing_twice_gives_identical_output() {
    let tree = frame_tree(
        &["b.01.exr", "b.02.exr", "a.0001.exr", "a.0002.exr", "zz.txt"],
        &["sub"],
    );
    let first = browse(tree.path(), &[], DetectOptions::default()).unwrap();
    let second = browse(tree.path(), &[], DetectOptions::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn scan_pattern_fills_the_range_from_disk() {
    let tree = frame_tree(
        &["img.0001.exr", "img.0003.exr", "img.0005.exr", "other.txt"],
        &[],
    );
    let seq = scan_pattern(
        &tree.path().join("img.####.exr"),
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
fn scan_pattern_on_an_absent_directory_is_empty() {
    let tree = frame_tree(&[], &[]);
    let seq = scan_pattern(
        &tree.path().join("nowhere").join("img.####.exr"),
        DetectOptions::default(),
    )
    .unwrap();
    assert_eq!(seq.nb_files(), 0);
    assert_eq!(seq.padding(), 4);
}

#[test]
fn sequence_stat_sums_member_sizes() {
    let tree = frame_tree(&["a.0001.exr", "a.0002.exr", "a.0003.exr"], &[]);
    let items = browse(tree.path(), &[], DetectOptions::default()).unwrap();
    let seqs = sequences(&items);
    assert_eq!(seqs.len(), 1);

    let item_stat = stat::stat_item(&items[0], &FsStatSource);
    assert_eq!(item_stat.size, 30);
    assert!(item_stat.modification_time > 0);
    assert!((item_stat.nb_hard_links - 1.0).abs() < f64::EPSILON);
}

#[test]
fn sequence_files_point_at_real_paths() {
    let tree = frame_tree(&["a.0001.exr", "a.0002.exr"], &[]);
    let items = browse(tree.path(), &[], DetectOptions::default()).unwrap();
    let seq = items[0].as_sequence().unwrap();

    let files: Vec<PathBuf> = seq.files();
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|p| p.is_file()));
    assert_eq!(files[0].file_name().unwrap(), "a.0001.exr");
    assert_eq!(files[0].parent().unwrap(), tree.path());
}

#[test]
fn empty_directory_browses_to_nothing() {
    let tree = frame_tree(&[], &[]);
    let items = browse(tree.path(), &[], DetectOptions::default()).unwrap();
    assert!(items.is_empty());
}

#[test]
fn mixed_padding_widths_collapse_in_one_directory() {
    let tree = frame_tree(&["r.01.exr", "r.002.exr"], &[]);
    let items = browse(tree.path(), &[], DetectOptions::default()).unwrap();
    let seqs = sequences(&items);
    assert_eq!(seqs.len(), 1);
    assert_eq!(seqs[0].padding(), 0);
    assert!(!seqs[0].strict_padding());
}
