// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Bubble sort, one swap per step.

use crate::array_state::ArrayState;
use crate::direction::{Direction, Verbosity};
use crate::emitter::StepEmitter;
use crate::step::StepResult;

/// Classic bubble sort: `n - 1` passes over a shrinking unsorted prefix.
///
/// A step is yielded after every swap, highlighting the left slot as
/// `Moved` and the right slot as `Compared`. With
/// [`Verbosity::Comparisons`] a non-swapping comparison is a step too.
#[derive(Debug, Clone)]
pub struct BubbleSort {
    direction: Direction,
    verbosity: Verbosity,
    /// Completed outer passes.
    pass: usize,
    /// Left index of the next pair to compare in the current pass.
    j: usize,
}

impl BubbleSort {
    /// Builds an emitter positioned before the first comparison.
    pub fn new(direction: Direction, verbosity: Verbosity) -> Self {
        Self {
            direction,
            verbosity,
            pass: 0,
            j: 0,
        }
    }
}

impl StepEmitter for BubbleSort {
    fn next_step(&mut self, array: &mut ArrayState) -> Option<StepResult> {
        let n = array.len();
        while self.pass + 1 < n {
            let limit = n - 1 - self.pass;
            if self.j >= limit {
                self.pass += 1;
                self.j = 0;
                continue;
            }
            let j = self.j;
            self.j += 1;
            let (left, right) = (array.values()[j], array.values()[j + 1]);
            if self.direction.out_of_order(left, right) {
                array.swap(j, j + 1);
                return Some(StepResult::moved(j, Some(j + 1)));
            }
            if self.verbosity == Verbosity::Comparisons {
                return Some(StepResult::compared(j, j + 1));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::HighlightRole;

    fn drain(values: Vec<i64>, direction: Direction, verbosity: Verbosity) -> (Vec<i64>, usize) {
        let mut array = ArrayState::new(values).unwrap();
        let mut emitter = BubbleSort::new(direction, verbosity);
        let mut steps = 0;
        while emitter.next_step(&mut array).is_some() {
            steps += 1;
        }
        (array.values().to_vec(), steps)
    }

    #[test]
    fn three_descending_values_take_three_swaps() {
        let mut array = ArrayState::new(vec![5, 3, 1]).unwrap();
        let mut emitter = BubbleSort::new(Direction::Ascending, Verbosity::Mutations);

        let first = emitter.next_step(&mut array).unwrap();
        assert_eq!(array.values(), &[3, 5, 1]);
        assert_eq!(first.role(0), HighlightRole::Moved);
        assert_eq!(first.role(1), HighlightRole::Compared);

        let second = emitter.next_step(&mut array).unwrap();
        assert_eq!(array.values(), &[3, 1, 5]);
        assert_eq!(second.role(1), HighlightRole::Moved);
        assert_eq!(second.role(2), HighlightRole::Compared);

        let third = emitter.next_step(&mut array).unwrap();
        assert_eq!(array.values(), &[1, 3, 5]);
        assert_eq!(third.role(0), HighlightRole::Moved);

        assert!(emitter.next_step(&mut array).is_none());
        assert!(emitter.next_step(&mut array).is_none());
    }

    #[test]
    fn single_element_yields_nothing() {
        assert_eq!(drain(vec![42], Direction::Ascending, Verbosity::Mutations), (vec![42], 0));
    }

    #[test]
    fn equal_values_never_swap() {
        let (values, steps) = drain(vec![2, 2, 2], Direction::Descending, Verbosity::Mutations);
        assert_eq!(values, vec![2, 2, 2]);
        assert_eq!(steps, 0);
    }

    #[test]
    fn descending_direction_sorts_high_to_low() {
        let (values, _) = drain(vec![1, 4, 2, 3], Direction::Descending, Verbosity::Mutations);
        assert_eq!(values, vec![4, 3, 2, 1]);
    }

    #[test]
    fn comparison_verbosity_counts_every_comparison() {
        // n = 4 gives 3 + 2 + 1 comparisons regardless of input order.
        let (values, steps) = drain(vec![1, 2, 3, 4], Direction::Ascending, Verbosity::Comparisons);
        assert_eq!(values, vec![1, 2, 3, 4]);
        assert_eq!(steps, 6);
    }
}
