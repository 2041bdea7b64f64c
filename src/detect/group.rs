use std::collections::HashMap;

use crate::tokenize::{Decomposition, NumberToken};

/// Group identity: the string runs of a decomposition, numbers blanked out.
///
/// Two filenames belong to the same group exactly when their string runs are
/// equal element-wise. Structural `Hash`/`Eq` on the inner vector gives the
/// deep-equality map key directly; `Ord` gives groups a reproducible
/// iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatternKey(Vec<String>);

impl PatternKey {
    #[must_use]
    pub fn strings(&self) -> &[String] {
        &self.0
    }
}

/// The numbers of one group member, in filename order.
///
/// All tuples within a group have the same length (one entry per numeric
/// slot of the shared pattern).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTuple(Vec<NumberToken>);

impl FrameTuple {
    #[must_use]
    pub fn numbers(&self) -> &[NumberToken] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value of the number at `slot`.
    #[must_use]
    pub fn value_at(&self, slot: usize) -> i64 {
        self.0[slot].value()
    }
}

/// Map from group identity to the number tuples of its members.
#[derive(Debug, Default)]
pub struct GroupMap {
    groups: HashMap<PatternKey, Vec<FrameTuple>>,
}

impl GroupMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one decomposed filename, creating its group on first sight.
    pub fn insert(&mut self, decomposition: Decomposition) {
        let (strings, numbers) = decomposition.into_parts();
        self.groups
            .entry(PatternKey(strings))
            .or_default()
            .push(FrameTuple(numbers));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Drain the map into `(key, tuples)` pairs, ordered by key so callers
    /// see groups in a reproducible order.
    #[must_use]
    pub fn into_groups(self) -> Vec<(PatternKey, Vec<FrameTuple>)> {
        let mut groups: Vec<_> = self.groups.into_iter().collect();
        groups.sort_by(|(a, _), (b, _)| a.cmp(b));
        groups
    }
}
