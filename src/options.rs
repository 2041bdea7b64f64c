//! Detection and display options
//!
//! Plain flag structs with chainable `const` setters, shared by the library
//! entry points and the CLI.

/// Options steering sequence detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectOptions {
    /// Detect sequences from explicit filename lists (no directory scan).
    pub sequence_from_filename: bool,
    /// Fold `-`/`+` signs into the numbers they precede.
    pub negative: bool,
    /// Report one-file groups as plain files instead of sequences.
    pub sequence_needs_at_least_two_files: bool,
    /// Skip entries whose name starts with a dot.
    pub ignore_dot_files: bool,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            sequence_from_filename: true,
            negative: false,
            sequence_needs_at_least_two_files: false,
            ignore_dot_files: false,
        }
    }
}

impl DetectOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn sequence_from_filename(mut self, v: bool) -> Self {
        self.sequence_from_filename = v;
        self
    }

    #[must_use]
    pub const fn negative(mut self, v: bool) -> Self {
        self.negative = v;
        self
    }

    #[must_use]
    pub const fn sequence_needs_at_least_two_files(mut self, v: bool) -> Self {
        self.sequence_needs_at_least_two_files = v;
        self
    }

    #[must_use]
    pub const fn ignore_dot_files(mut self, v: bool) -> Self {
        self.ignore_dot_files = v;
        self
    }
}

/// Options steering listing output. Formatting only; detection results do
/// not depend on these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Show absolute paths.
    pub absolute_path: bool,
    /// Show paths relative to the working directory.
    pub relative_path: bool,
    /// Show the properties columns (type, size, modification time).
    pub properties: bool,
    /// Colorize the listing.
    pub color: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            absolute_path: false,
            relative_path: false,
            properties: false,
            color: true,
        }
    }
}

impl DisplayOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn absolute_path(mut self, v: bool) -> Self {
        self.absolute_path = v;
        self
    }

    #[must_use]
    pub const fn relative_path(mut self, v: bool) -> Self {
        self.relative_path = v;
        self
    }

    #[must_use]
    pub const fn properties(mut self, v: bool) -> Self {
        self.properties = v;
        self
    }

    #[must_use]
    pub const fn color(mut self, v: bool) -> Self {
        self.color = v;
        self
    }
}
