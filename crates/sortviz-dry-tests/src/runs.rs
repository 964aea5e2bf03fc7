// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Run fixtures: build sessions, drain them, check invariants.

use sortviz_core::{ArrayState, Direction, SortError, SortSession, StepResult};

/// Inputs that exercise duplicates, negatives, sorted and reversed runs.
pub const FIXTURES: &[&[i64]] = &[
    &[5, 3, 1],
    &[4, 2, 4, 1],
    &[1, 2, 3, 4, 5],
    &[5, 4, 3, 2, 1],
    &[7, -3, 0, 7, -3, 12, 5],
    &[2, 2, 2, 2],
    &[9, 1],
];

/// Builds an idle session over `values`.
pub fn session_over(values: &[i64]) -> Result<SortSession, SortError> {
    Ok(SortSession::new(ArrayState::new(values.to_vec())?))
}

/// Advances a running session until it completes.
///
/// Returns every non-terminal step in order. A session that is not running
/// yields an empty vector.
pub fn drain(session: &mut SortSession) -> Vec<StepResult> {
    let mut steps = Vec::new();
    while let Ok(step) = session.advance() {
        if step.done {
            break;
        }
        steps.push(step);
    }
    steps
}

/// Returns `true` when `a` and `b` hold the same multiset of values.
pub fn is_permutation(a: &[i64], b: &[i64]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// Reference result: `values` sorted for `direction` by the standard library.
pub fn sorted_copy(values: &[i64], direction: Direction) -> Vec<i64> {
    let mut out = values.to_vec();
    match direction {
        Direction::Ascending => out.sort_unstable(),
        Direction::Descending => out.sort_unstable_by(|a, b| b.cmp(a)),
    }
    out
}
