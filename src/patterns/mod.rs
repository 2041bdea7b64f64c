//! Sequence pattern parsing
//!
//! Recovers prefix, suffix and padding from a user-supplied pattern
//! filename. Four forms are accepted, tried in this order:
//!
//! - standard: `img.####.exr` / `img.@@@@.exr` (`#` requires the width)
//! - printf style: `img.%04d.exr` (`%d` leaves the width unconstrained)
//! - signed frame number: `img.-0001.exr` (negative detection only)
//! - frame number: `img.0001.exr`
//!
//! The numeric field may be bracketed (`img.[####].exr`); the brackets are
//! not captured.

pub mod error;

pub use error::PatternError;

use std::sync::LazyLock;

use regex::Regex;

static STANDARD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\[?(#+|@+)\]?(.*?)$").expect("hard-coded pattern"));
static C_STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\[?%([0-9]*)d\]?(.*?)$").expect("hard-coded pattern"));
static FRAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\[?([0-9]+)\]?(.*?)$").expect("hard-coded pattern"));
static FRAME_SIGNED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\[?([-+]?[0-9]+)\]?(.*?)$").expect("hard-coded pattern"));

/// Which of the accepted forms a pattern matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Standard,
    CStyle,
    FrameSigned,
    Frame,
}

/// Parts recovered from a pattern filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternInfo {
    pub kind: PatternKind,
    pub prefix: String,
    pub suffix: String,
    pub padding: usize,
    pub strict_padding: bool,
}

/// Parse a pattern filename (no directory component).
///
/// With `negative` enabled, a signed frame number form (`img.-0001.exr`)
/// is accepted as well.
///
/// # Errors
/// * [`PatternError::InvalidInput`] when the pattern is empty.
/// * [`PatternError::Unrecognized`] when no accepted form matches.
pub fn parse(pattern: &str, negative: bool) -> Result<PatternInfo, PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::InvalidInput("empty pattern".to_string()));
    }

    if let Some(caps) = STANDARD.captures(pattern) {
        let field = &caps[2];
        return Ok(PatternInfo {
            kind: PatternKind::Standard,
            prefix: caps[1].to_string(),
            suffix: caps[3].to_string(),
            padding: field.len(),
            strict_padding: field.starts_with('#'),
        });
    }
    if let Some(caps) = C_STYLE.captures(pattern) {
        let width = &caps[2];
        return Ok(PatternInfo {
            kind: PatternKind::CStyle,
            prefix: caps[1].to_string(),
            suffix: caps[3].to_string(),
            padding: width.parse().unwrap_or(0),
            strict_padding: false,
        });
    }
    if negative && let Some(caps) = FRAME_SIGNED.captures(pattern) {
        let field = &caps[2];
        let digits = field.trim_start_matches(['-', '+']);
        return Ok(PatternInfo {
            kind: PatternKind::FrameSigned,
            prefix: caps[1].to_string(),
            suffix: caps[3].to_string(),
            padding: digits.len(),
            strict_padding: false,
        });
    }
    if let Some(caps) = FRAME.captures(pattern) {
        let field = &caps[2];
        return Ok(PatternInfo {
            kind: PatternKind::Frame,
            prefix: caps[1].to_string(),
            suffix: caps[3].to_string(),
            padding: field.len(),
            strict_padding: false,
        });
    }

    Err(PatternError::Unrecognized {
        pattern: pattern.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_form_is_strict() {
        let info = parse("img.####.exr", false).unwrap();
        assert_eq!(info.kind, PatternKind::Standard);
        assert_eq!(info.prefix, "img.");
        assert_eq!(info.suffix, ".exr");
        assert_eq!(info.padding, 4);
        assert!(info.strict_padding);
    }

    #[test]
    fn at_form_is_not_strict() {
        let info = parse("img.@@@.exr", false).unwrap();
        assert_eq!(info.kind, PatternKind::Standard);
        assert_eq!(info.padding, 3);
        assert!(!info.strict_padding);
    }

    #[test]
    fn brackets_are_not_captured() {
        let info = parse("img.[####].exr", false).unwrap();
        assert_eq!(info.prefix, "img.");
        assert_eq!(info.suffix, ".exr");
        assert_eq!(info.padding, 4);
    }

    #[test]
    fn printf_form_reads_the_width() {
        let info = parse("img.%04d.exr", false).unwrap();
        assert_eq!(info.kind, PatternKind::CStyle);
        assert_eq!(info.padding, 4);
        assert!(!info.strict_padding);
    }

    #[test]
    fn bare_percent_d_is_unconstrained() {
        let info = parse("img.%d.exr", false).unwrap();
        assert_eq!(info.kind, PatternKind::CStyle);
        assert_eq!(info.padding, 0);
    }

    #[test]
    fn frame_literal_reads_the_digit_count() {
        let info = parse("img.0001.exr", false).unwrap();
        assert_eq!(info.kind, PatternKind::Frame);
        assert_eq!(info.padding, 4);
        assert!(!info.strict_padding);
    }

    #[test]
    fn signed_frame_needs_negative_detection() {
        let info = parse("img.-0001.exr", true).unwrap();
        assert_eq!(info.kind, PatternKind::FrameSigned);
        assert_eq!(info.prefix, "img.");
        // the sign does not count toward the width
        assert_eq!(info.padding, 4);

        // without negative detection the sign lands in the prefix
        let info = parse("img.-0001.exr", false).unwrap();
        assert_eq!(info.kind, PatternKind::Frame);
        assert_eq!(info.prefix, "img.-");
    }

    #[test]
    fn plain_name_is_not_a_pattern() {
        let err = parse("readme.txt", false).unwrap_err();
        assert!(matches!(err, PatternError::Unrecognized { .. }));
    }

    #[test]
    fn empty_pattern_is_invalid_input() {
        let err = parse("", false).unwrap_err();
        assert!(matches!(err, PatternError::InvalidInput(_)));
    }
}
