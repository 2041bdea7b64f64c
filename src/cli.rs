//! Command-line interface definitions and parsing
//!
//! Defines the complete CLI surface of seqls using the `clap` crate and the
//! translation of flags into the library's detection and display options.
//!
//! # Usage
//!
//! ```bash
//! # List the current directory, sequences collapsed
//! seqls
//!
//! # List several directories with the properties columns
//! seqls -l shots/ plates/
//!
//! # Only entries matching a mask; # placeholders match digits
//! seqls -m 'img.####.exr' plates/
//!
//! # Script-friendly: every frame path, one per line, no decoration
//! seqls -q --expand plates/
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::config::SeqlsConfig;
use crate::options::{DetectOptions, DisplayOptions};

/// List directory contents with numbered file sequences collapsed into
/// single entries
#[derive(Debug, Parser)]
#[command(name = "seqls", version, about)]
pub struct Cli {
    /// Directories (or file paths used as masks) to list
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Only list entries matching these masks (# and @ match digits)
    #[arg(short, long = "mask", value_name = "MASK")]
    pub masks: Vec<String>,

    /// Show absolute paths
    #[arg(short = 'A', long, conflicts_with = "relative")]
    pub absolute: bool,

    /// Prefix entries with the directory as given
    #[arg(short, long)]
    pub relative: bool,

    /// Show the properties columns (type, size, modification time)
    #[arg(short = 'l', long)]
    pub properties: bool,

    /// Do not colorize the listing
    #[arg(long)]
    pub no_color: bool,

    /// Include entries starting with a dot
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Recognize negative frame numbers (img.-0001.exr)
    #[arg(short, long)]
    pub negative: bool,

    /// Report single files matching a numbered pattern as sequences
    #[arg(short, long)]
    pub single: bool,

    /// Print every frame path instead of collapsed sequence lines
    #[arg(long)]
    pub expand: bool,

    /// Only print paths, no decoration or counts
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse the process arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Paths to browse; the current directory when none were given.
    #[must_use]
    pub fn browse_paths(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.paths.clone()
        }
    }

    /// Detection options from the flags: dot files are skipped and
    /// singletons listed as plain files unless asked otherwise.
    #[must_use]
    pub fn detect_options(&self, config: &SeqlsConfig) -> DetectOptions {
        DetectOptions::default()
            .negative(self.negative)
            .sequence_needs_at_least_two_files(!self.single)
            .ignore_dot_files(!(self.all || config.show_dot_files))
    }

    /// Display options: configuration defaults overridden by the flags.
    #[must_use]
    pub fn display_options(&self, config: &SeqlsConfig) -> DisplayOptions {
        let mut display = config.display_options();
        if self.absolute {
            display.absolute_path = true;
            display.relative_path = false;
        }
        if self.relative {
            display.relative_path = true;
            display.absolute_path = false;
        }
        if self.properties {
            display.properties = true;
        }
        if self.no_color || self.quiet {
            display.color = false;
        }
        display
    }
}
