// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! sortviz-core: stepwise sorting-algorithm execution engine.
//!
//! Sorting algorithms run as explicit state machines that suspend after every
//! elementary operation (one swap or one shift). A [`SortSession`] owns the
//! [`ArrayState`] and advances the active emitter one step per call, so an
//! external render loop can interleave one step with one redraw at whatever
//! cadence it likes. Each step reports the touched indices as semantic
//! [`HighlightRole`]s; colors and layout belong to the renderer.
#![forbid(unsafe_code)]

mod array_state;
mod direction;
/// Stepwise algorithm implementations and the [`StepEmitter`] trait.
pub mod emitter;
mod error;
mod registry;
mod session;
mod step;

/// Array being sorted and its layout metrics.
pub use array_state::ArrayState;
/// Run configuration captured by emitters at construction.
pub use direction::{Direction, ParseConfigError, Verbosity};
/// Emitter trait and the built-in algorithms.
pub use emitter::{BubbleSort, InsertionSort, StepEmitter};
/// Error taxonomy shared by every operation.
pub use error::SortError;
/// Algorithm registry and built-in entries.
pub use registry::{
    AlgorithmEntry, AlgorithmRegistry, EmitterFactory, BUBBLE_SORT, BUBBLE_SORT_ID,
    INSERTION_SORT, INSERTION_SORT_ID,
};
/// Session state machine.
pub use session::{SessionState, SortSession};
/// Per-step highlight records.
pub use step::{HighlightRole, StepResult};
