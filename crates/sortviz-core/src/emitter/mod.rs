// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Stepwise sorting algorithms.
//!
//! Each emitter is an explicit state machine: loop counters live in the
//! struct, and every point where the algorithm would suspend returns a
//! [`StepResult`] instead. The next call to [`StepEmitter::next_step`]
//! resumes from the stored counters.
//!
//! # Invariants
//!
//! - One call performs at most one elementary operation (one swap or one
//!   shift-and-place), and never stops halfway through it.
//! - Comparisons do not mutate, so an emitter may run any number of them
//!   inside a single call.
//! - Once `next_step` returns `None` it keeps returning `None`.

mod bubble;
mod insertion;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;

use crate::array_state::ArrayState;
use crate::step::StepResult;

/// A resumable, single-step execution unit for one sorting algorithm.
///
/// Direction and verbosity are fixed when the emitter is built. The array is
/// borrowed per call; the session guarantees it is the same array for the
/// whole run.
pub trait StepEmitter: core::fmt::Debug {
    /// Performs work up to the next suspension point.
    ///
    /// Returns `None` once the sequence is exhausted.
    fn next_step(&mut self, array: &mut ArrayState) -> Option<StepResult>;
}
