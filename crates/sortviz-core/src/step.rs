// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Step records handed to the renderer after each elementary operation.

use std::collections::BTreeMap;

/// Semantic role of an index in the most recent step.
///
/// Renderers map roles to colors; the engine never deals in colors.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HighlightRole {
    /// Not touched by the most recent operation.
    #[default]
    None,
    /// Right-hand element of the operation, or both sides of a plain comparison.
    Compared,
    /// Element that was just moved into place.
    Moved,
}

/// Outcome of pulling one step from an emitter.
///
/// `highlighted` only holds indices touched by the latest operation; every
/// other index is implicitly [`HighlightRole::None`]. Each step owns a fresh
/// map.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepResult {
    /// Index to role mapping for the latest operation.
    pub highlighted: BTreeMap<usize, HighlightRole>,
    /// `true` only on the terminal step, once the sequence is exhausted.
    pub done: bool,
}

impl StepResult {
    /// A swap or shift that left `moved` and `compared` in their new slots.
    pub fn moved(moved: usize, compared: Option<usize>) -> Self {
        let mut highlighted = BTreeMap::new();
        highlighted.insert(moved, HighlightRole::Moved);
        if let Some(c) = compared {
            highlighted.insert(c, HighlightRole::Compared);
        }
        Self {
            highlighted,
            done: false,
        }
    }

    /// A comparison of `left` and `right` that moved nothing.
    pub fn compared(left: usize, right: usize) -> Self {
        let highlighted = BTreeMap::from([
            (left, HighlightRole::Compared),
            (right, HighlightRole::Compared),
        ]);
        Self {
            highlighted,
            done: false,
        }
    }

    /// The terminal step: no highlights, `done` set.
    pub fn finished() -> Self {
        Self {
            highlighted: BTreeMap::new(),
            done: true,
        }
    }

    /// Role of `index` in this step.
    pub fn role(&self, index: usize) -> HighlightRole {
        self.highlighted.get(&index).copied().unwrap_or_default()
    }

    /// Returns `true` if this step moved an element.
    pub fn is_mutation(&self) -> bool {
        self.highlighted
            .values()
            .any(|r| *r == HighlightRole::Moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_indices_have_no_role() {
        let step = StepResult::moved(3, Some(4));
        assert_eq!(step.role(3), HighlightRole::Moved);
        assert_eq!(step.role(4), HighlightRole::Compared);
        assert_eq!(step.role(0), HighlightRole::None);
        assert!(step.is_mutation());
        assert!(!step.done);
    }

    #[test]
    fn comparison_step_is_not_a_mutation() {
        let step = StepResult::compared(1, 2);
        assert_eq!(step.highlighted.len(), 2);
        assert!(!step.is_mutation());
    }

    #[test]
    fn finished_step_has_no_highlights() {
        let step = StepResult::finished();
        assert!(step.done);
        assert!(step.highlighted.is_empty());
    }

    #[test]
    fn each_step_owns_its_map() {
        let mut a = StepResult::moved(0, None);
        let b = StepResult::moved(5, None);
        a.highlighted.insert(9, HighlightRole::Compared);
        assert_eq!(b.role(9), HighlightRole::None);
    }
}
