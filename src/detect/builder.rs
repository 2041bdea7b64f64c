use std::collections::BTreeSet;
use std::path::Path;

use super::group::PatternKey;
use super::split::Candidate;
use crate::Sequence;

/// Turn a disambiguated candidate into a [`Sequence`].
///
/// The non-varying numeric slots keep their original spelling (taken from
/// the first tuple, they are constant across the candidate) and are folded
/// into the prefix and suffix strings around the frame slot.
#[must_use]
pub fn build(directory: &Path, key: &PatternKey, candidate: &Candidate) -> Sequence {
    let strings = key.strings();
    let slot = candidate.slot;
    let tuples = &candidate.tuples;
    let first_numbers = tuples[0].numbers();
    let slots = first_numbers.len();

    let mut prefix = strings[0].clone();
    for j in 0..slot {
        prefix.push_str(&first_numbers[j].source());
        prefix.push_str(&strings[j + 1]);
    }
    let mut suffix = strings[slot + 1].clone();
    for j in (slot + 1)..slots {
        suffix.push_str(&first_numbers[j].source());
        suffix.push_str(&strings[j + 1]);
    }

    let padding = extract_padding(candidate);
    let strict_padding = padding > 0
        && tuples
            .iter()
            .any(|t| t.numbers()[slot].digits().starts_with('0'));

    // tuples are sorted by the frame slot; values may repeat when the same
    // frame is spelled with different padding
    let times: Vec<i64> = tuples.iter().map(|t| t.value_at(slot)).collect();
    let first = times[0];
    let last = times[times.len() - 1];
    let mut distinct = times.clone();
    distinct.dedup();

    let step = extract_step(&distinct);
    let span = (last - first) / step + 1;
    let nb_missing = usize::try_from(span).map_or(0, |s| s.saturating_sub(distinct.len()));

    Sequence::new(
        directory.to_path_buf(),
        prefix,
        suffix,
        padding,
        strict_padding,
        first,
        last,
        step,
        tuples.len(),
        nb_missing,
    )
}

/// Padding of the frame slot: the single non-zero declared width if the
/// members agree on one, otherwise 0 (unconstrained).
fn extract_padding(candidate: &Candidate) -> usize {
    let mut paddings: BTreeSet<usize> = candidate
        .tuples
        .iter()
        .map(|t| t.numbers()[candidate.slot].padding())
        .collect();
    paddings.remove(&0);
    match paddings.len() {
        1 => *paddings.iter().next().unwrap(),
        // TODO on several widths: split into one sequence per padding
        _ => 0,
    }
}

/// Greatest common divisor of the deltas between consecutive frame times.
/// Tolerates holes: `{1, 4, 10}` still yields step 3.
pub(crate) fn extract_step(times: &[i64]) -> i64 {
    if times.len() <= 1 {
        return 1;
    }
    let mut step = 0u64;
    for window in times.windows(2) {
        step = gcd(step, window[0].abs_diff(window[1]));
    }
    i64::try_from(step.max(1)).unwrap_or(1)
}

const fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}
