// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error taxonomy for the stepwise sorting engine.

use thiserror::Error;

/// Errors surfaced by [`ArrayState`](crate::ArrayState),
/// [`AlgorithmRegistry`](crate::AlgorithmRegistry) and
/// [`SortSession`](crate::SortSession).
///
/// Every variant is a local, recoverable contract violation. Drivers are
/// expected to surface them to the user (or ignore them) and keep going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// The supplied values cannot back an array state (e.g. empty input).
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// The requested algorithm is not registered.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
    /// An algorithm with the same id is already registered.
    #[error("duplicate algorithm id: {0}")]
    DuplicateAlgorithm(&'static str),
    /// `start` was called while a run is still advancing.
    #[error("session busy: a sort run is already in progress")]
    SessionBusy,
    /// `advance` was called while no run is active.
    #[error("session not running")]
    NotRunning,
}
