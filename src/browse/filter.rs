//! Filename masks
//!
//! Masks restrict a browse to matching entries. A plain mask (`*.exr`) is a
//! glob; a mask containing `#` or `@` placeholders (`img.####.exr`) is
//! translated to a regex where each placeholder matches one digit, so masks
//! can select whole sequences.

use glob::Pattern as GlobPattern;
use regex::Regex;

use super::error::BrowseError;

/// One compiled filename mask.
#[derive(Debug, Clone)]
pub enum Mask {
    Glob { original: String, spec: GlobPattern },
    Frame { original: String, compiled: Regex },
}

impl Mask {
    /// Compile a mask, choosing the frame translation when it carries
    /// digit placeholders.
    ///
    /// # Errors
    /// Returns `BrowseError::InvalidMask` if the mask fails to compile.
    pub fn new(mask: &str) -> Result<Self, BrowseError> {
        if mask.contains('#') || mask.contains('@') {
            let translated = frame_regex(mask);
            Regex::new(&translated)
                .map(|compiled| Self::Frame {
                    original: mask.to_string(),
                    compiled,
                })
                .map_err(|e| BrowseError::InvalidMask {
                    mask: mask.to_string(),
                    reason: e.to_string(),
                })
        } else {
            GlobPattern::new(mask)
                .map(|spec| Self::Glob {
                    original: mask.to_string(),
                    spec,
                })
                .map_err(|e| BrowseError::InvalidMask {
                    mask: mask.to_string(),
                    reason: e.to_string(),
                })
        }
    }

    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Glob { spec, .. } => spec.matches(name),
            Self::Frame { compiled, .. } => compiled.is_match(name),
        }
    }

    #[must_use]
    pub fn original(&self) -> &str {
        match self {
            Self::Glob { original, .. } | Self::Frame { original, .. } => original,
        }
    }
}

/// Translate a mask with digit placeholders into an anchored regex:
/// `#` and `@` each match one digit, `*` and `?` keep their glob meaning.
fn frame_regex(mask: &str) -> String {
    let mut out = String::from("^");
    for c in mask.chars() {
        match c {
            '#' | '@' => out.push_str("[0-9]"),
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            _ => out.push_str(&regex::escape(&c.to_string())),
        }
    }
    out.push('$');
    out
}

/// A set of masks; an entry passes when it matches all of them.
#[derive(Debug, Clone, Default)]
pub struct MaskSet {
    masks: Vec<Mask>,
}

impl MaskSet {
    /// Compile every mask in `masks`.
    ///
    /// # Errors
    /// Returns `BrowseError::InvalidMask` on the first mask that fails to
    /// compile.
    pub fn compile(masks: &[String]) -> Result<Self, BrowseError> {
        let masks = masks
            .iter()
            .map(|m| Mask::new(m))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { masks })
    }

    /// Whether `name` passes every mask. An empty set passes everything.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.masks.iter().all(|m| m.matches(name))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }
}
