use super::group::FrameTuple;

/// One potential sequence extracted from a group: the numeric slot chosen as
/// the frame index, and the member tuples sorted by that slot's value.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub slot: usize,
    pub tuples: Vec<FrameTuple>,
}

/// Decide which numeric slot(s) of a group act as the frame index and split
/// the group into sequence candidates.
///
/// Tuples are sorted lexicographically by their values and walked once.
/// Consecutive tuples that differ in exactly one slot extend the current
/// run, as long as it is the slot the run already varies in; a pair that
/// differs in several slots, or in a different slot, starts a new run. Each
/// run becomes one candidate. A run that never establishes a varying slot
/// (a single member, or members whose values are all equal) takes the last
/// slot as its frame index, since numbering conventions put the frame
/// number last.
#[must_use]
pub fn candidates(tuples: Vec<FrameTuple>) -> Vec<Candidate> {
    let slots = tuples[0].len();
    let mut tuples = tuples;
    tuples.sort_by(|a, b| {
        let values = |t: &FrameTuple| -> Vec<i64> { (0..slots).map(|i| t.value_at(i)).collect() };
        values(a)
            .cmp(&values(b))
            .then_with(|| join_digits(a).cmp(&join_digits(b)))
    });

    let mut runs: Vec<Candidate> = Vec::new();
    let mut current: Vec<FrameTuple> = Vec::new();
    let mut varying: Option<usize> = None;

    for tuple in tuples {
        if let Some(previous) = current.last() {
            let diffs: Vec<usize> = (0..slots)
                .filter(|&i| previous.value_at(i) != tuple.value_at(i))
                .collect();
            let compatible = match diffs.as_slice() {
                [] => true,
                [one] => match varying {
                    None => {
                        varying = Some(*one);
                        true
                    }
                    Some(slot) => slot == *one,
                },
                _ => false,
            };
            if !compatible {
                runs.push(finish_run(std::mem::take(&mut current), varying, slots));
                varying = None;
            }
        }
        current.push(tuple);
    }
    runs.push(finish_run(current, varying, slots));
    runs
}

fn finish_run(tuples: Vec<FrameTuple>, varying: Option<usize>, slots: usize) -> Candidate {
    Candidate {
        slot: varying.unwrap_or(slots - 1),
        tuples,
    }
}

fn join_digits(tuple: &FrameTuple) -> String {
    tuple
        .numbers()
        .iter()
        .map(crate::tokenize::NumberToken::source)
        .collect::<Vec<_>>()
        .join("\u{0}")
}
