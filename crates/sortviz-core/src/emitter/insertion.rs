// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Insertion sort, one shift-and-place per step.

use crate::array_state::ArrayState;
use crate::direction::{Direction, Verbosity};
use crate::emitter::StepEmitter;
use crate::step::StepResult;

/// Element currently being walked towards the head of the array.
#[derive(Debug, Clone, Copy)]
struct Carry {
    /// Slot currently holding `current`.
    pos: usize,
    current: i64,
}

/// Insertion sort: each element in turn is shifted left past every
/// predecessor that is out of order relative to it.
///
/// A step is yielded after each shift, highlighting the slot the element
/// landed in as `Moved` and its new predecessor (if any) as `Compared`.
#[derive(Debug, Clone)]
pub struct InsertionSort {
    direction: Direction,
    verbosity: Verbosity,
    /// Next outer index to pick up.
    next: usize,
    carry: Option<Carry>,
}

impl InsertionSort {
    /// Builds an emitter positioned before index 1.
    pub fn new(direction: Direction, verbosity: Verbosity) -> Self {
        Self {
            direction,
            verbosity,
            next: 1,
            carry: None,
        }
    }
}

impl StepEmitter for InsertionSort {
    fn next_step(&mut self, array: &mut ArrayState) -> Option<StepResult> {
        loop {
            let Some(Carry { pos, current }) = self.carry else {
                if self.next >= array.len() {
                    return None;
                }
                let pos = self.next;
                self.next += 1;
                self.carry = Some(Carry {
                    pos,
                    current: array.values()[pos],
                });
                continue;
            };

            if pos > 0 && self.direction.out_of_order(array.values()[pos - 1], current) {
                // values[pos] == current, so shifting the predecessor right
                // and placing current one slot left is a swap.
                array.swap(pos - 1, pos);
                let pos = pos - 1;
                self.carry = Some(Carry { pos, current });
                return Some(StepResult::moved(pos, pos.checked_sub(1)));
            }

            self.carry = None;
            if pos > 0 && self.verbosity == Verbosity::Comparisons {
                return Some(StepResult::compared(pos - 1, pos));
            }
        }
    }
}
