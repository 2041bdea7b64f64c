//! Output formatting for the listing
//!
//! Renders browse items as listing lines: the name (or sequence pattern),
//! the frame range and file counts for sequences, and optional properties
//! columns fed by [`ItemStat`].

use chrono::DateTime;
use colored::Colorize;
use std::path::PathBuf;

use crate::options::DisplayOptions;
use crate::stat::ItemStat;
use crate::Item;

/// Format one item as a listing line.
#[must_use]
pub fn format_item(item: &Item, stat: Option<&ItemStat>, display: &DisplayOptions) -> String {
    let mut line = String::new();

    if display.properties {
        line.push_str(&properties_columns(item, stat));
    }

    line.push_str(&painted_name(item, display));

    if let Some(seq) = item.as_sequence() {
        line.push_str(&format!(" [{}:{}", seq.first_time(), seq.last_time()));
        if seq.step() != 1 {
            line.push_str(&format!("x{}", seq.step()));
        }
        line.push_str(&format!("] {} file{}", seq.nb_files(), plural(seq.nb_files())));
        if seq.has_missing_files() {
            let missing = format!(
                "{} missing file{}",
                seq.nb_missing_files(),
                plural(seq.nb_missing_files())
            );
            line.push_str(", ");
            line.push_str(&paint(missing, display, |s| s.red().to_string()));
        }
    }

    line
}

/// The displayed path of an item: name only by default, prefixed with its
/// directory under relative display, resolved under absolute display.
#[must_use]
pub fn format_path(item: &Item, display: &DisplayOptions) -> String {
    let name = item.display_name();
    if display.absolute_path {
        let joined = item.directory().join(&name);
        return std::path::absolute(&joined)
            .unwrap_or(joined)
            .display()
            .to_string();
    }
    if display.relative_path {
        let directory = item.directory();
        if directory.as_os_str().is_empty() {
            return name;
        }
        return directory.join(&name).display().to_string();
    }
    name
}

fn painted_name(item: &Item, display: &DisplayOptions) -> String {
    let path = format_path(item, display);
    match item {
        Item::Folder { .. } => paint(path, display, |s| s.blue().bold().to_string()),
        Item::Sequence(_) => paint(path, display, |s| s.magenta().to_string()),
        Item::File { .. } => path,
    }
}

fn properties_columns(item: &Item, stat: Option<&ItemStat>) -> String {
    let letter = match item {
        Item::File { .. } => 'f',
        Item::Folder { .. } => 'd',
        Item::Sequence(_) => 's',
    };
    match stat {
        Some(stat) => format!(
            "{letter} {:>12} {:>16}  ",
            stat.size,
            format_mtime(stat.modification_time)
        ),
        None => format!("{letter}  "),
    }
}

fn format_mtime(mtime: i64) -> String {
    DateTime::from_timestamp(mtime, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn paint(text: String, display: &DisplayOptions, apply: impl Fn(String) -> String) -> String {
    if display.color { apply(text) } else { text }
}

const fn plural(n: usize) -> &'static str {
    if n > 1 { "s" } else { "" }
}

/// Paths of all files behind an item, one per line: a single path for a
/// plain item, every frame for a sequence. Used by quiet listings meant
/// for shell pipelines.
#[must_use]
pub fn expand_paths(item: &Item) -> Vec<PathBuf> {
    match item {
        Item::Sequence(seq) => seq.files(),
        _ => vec![item.first_path()],
    }
}
