//! The sequence value type
//!
//! A [`Sequence`] is a set of files sharing one pattern and differing only
//! in a frame number: `prefix + frame + suffix`, with `frame` running from
//! `first_time` to `last_time` by `step`. It knows how to render the
//! filename of any frame, probe a filename for membership, and enumerate
//! the paths of its valid frames.

use std::path::{Path, PathBuf};

use crate::patterns;
use crate::patterns::PatternError;

/// A detected or declared file sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    directory: PathBuf,
    prefix: String,
    suffix: String,
    padding: usize,
    strict_padding: bool,
    first_time: i64,
    last_time: i64,
    step: i64,
    nb_files: usize,
    nb_missing: usize,
}

impl Sequence {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        directory: PathBuf,
        prefix: String,
        suffix: String,
        padding: usize,
        strict_padding: bool,
        first_time: i64,
        last_time: i64,
        step: i64,
        nb_files: usize,
        nb_missing: usize,
    ) -> Self {
        Self {
            directory,
            prefix,
            suffix,
            padding,
            strict_padding,
            first_time,
            last_time,
            step: step.max(1),
            nb_files,
            nb_missing,
        }
    }

    /// Declare a sequence from a pattern string (`img.####.exr`,
    /// `img.@@@.exr`, `img.%04d.exr`, `img.0001.exr`) and an explicit
    /// frame range. No file of the sequence is considered observed.
    ///
    /// # Errors
    /// Returns [`PatternError`] if the pattern matches none of the accepted
    /// forms.
    pub fn from_pattern(
        directory: impl Into<PathBuf>,
        pattern: &str,
        first_time: i64,
        last_time: i64,
        step: i64,
        negative: bool,
    ) -> Result<Self, PatternError> {
        let info = patterns::parse(pattern, negative)?;
        let step = step.max(1);
        let span = usize::try_from((last_time - first_time) / step + 1).unwrap_or(0);
        Ok(Self::new(
            directory.into(),
            info.prefix,
            info.suffix,
            info.padding,
            info.strict_padding,
            first_time,
            last_time,
            step,
            0,
            span,
        ))
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Width used to render frame numbers; 0 means unconstrained.
    #[must_use]
    pub const fn padding(&self) -> usize {
        self.padding
    }

    /// Whether at least one observed member was zero-padded, which makes
    /// the width a requirement rather than a maximum.
    #[must_use]
    pub const fn strict_padding(&self) -> bool {
        self.strict_padding
    }

    #[must_use]
    pub const fn first_time(&self) -> i64 {
        self.first_time
    }

    #[must_use]
    pub const fn last_time(&self) -> i64 {
        self.last_time
    }

    /// Positive stride between consecutive valid frames.
    #[must_use]
    pub const fn step(&self) -> i64 {
        self.step
    }

    /// Number of observed member files.
    #[must_use]
    pub const fn nb_files(&self) -> usize {
        self.nb_files
    }

    /// Number of valid frame times with no observed file.
    #[must_use]
    pub const fn nb_missing_files(&self) -> usize {
        self.nb_missing
    }

    #[must_use]
    pub const fn has_missing_files(&self) -> bool {
        self.nb_missing > 0
    }

    /// Render the frame number at `time`, honoring the padding width.
    #[must_use]
    pub fn render_time(&self, time: i64) -> String {
        let digits = time.unsigned_abs().to_string();
        let padded = if self.padding > digits.len() {
            format!("{}{}", "0".repeat(self.padding - digits.len()), digits)
        } else {
            digits
        };
        if time < 0 {
            format!("-{padded}")
        } else {
            padded
        }
    }

    /// Filename of the member at `time`.
    #[must_use]
    pub fn filename_at(&self, time: i64) -> String {
        format!("{}{}{}", self.prefix, self.render_time(time), self.suffix)
    }

    /// Path of the member at `time`, inside the owning directory.
    #[must_use]
    pub fn path_at(&self, time: i64) -> PathBuf {
        self.directory.join(self.filename_at(time))
    }

    #[must_use]
    pub fn first_filename(&self) -> String {
        self.filename_at(self.first_time)
    }

    /// Probe a filename for membership: it must carry the sequence's prefix
    /// and suffix around a parsable frame number. Returns the frame time.
    #[must_use]
    pub fn contains(&self, filename: &str) -> Option<i64> {
        let rest = filename.strip_prefix(self.prefix.as_str())?;
        let middle = rest.strip_suffix(self.suffix.as_str())?;
        if middle.is_empty() {
            return None;
        }
        middle.parse::<i64>().ok()
    }

    /// The valid frame times, first to last by step.
    pub fn times(&self) -> impl Iterator<Item = i64> + '_ {
        (self.first_time..=self.last_time).step_by(self.step as usize)
    }

    /// Paths of every valid frame, missing ones included.
    #[must_use]
    pub fn files(&self) -> Vec<PathBuf> {
        self.times().map(|t| self.path_at(t)).collect()
    }

    /// The pattern spelled with `#` characters at the frame position, or a
    /// single `@` when the width is unconstrained.
    #[must_use]
    pub fn standard_pattern(&self) -> String {
        let marker = if self.padding > 0 {
            "#".repeat(self.padding)
        } else {
            "@".to_string()
        };
        format!("{}{}{}", self.prefix, marker, self.suffix)
    }
}
