// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Saved visualizer preferences (array shape + run defaults).

use serde::{Deserialize, Serialize};
use sortviz_core::{AlgorithmRegistry, Direction, SortError, Verbosity, BUBBLE_SORT_ID};
use thiserror::Error;

/// Saved preferences for a visualizer driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VisualizerPrefs {
    /// Shape of generated arrays.
    pub array: ArrayPrefs,
    /// Defaults for each sort run.
    pub run: RunPrefs,
}

/// Shape of randomly generated arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayPrefs {
    /// Number of elements.
    pub len: usize,
    /// Inclusive lower bound of generated values.
    pub min_value: i64,
    /// Inclusive upper bound of generated values.
    pub max_value: i64,
}

impl Default for ArrayPrefs {
    fn default() -> Self {
        Self {
            len: 100,
            min_value: 0,
            max_value: 100,
        }
    }
}

/// Run defaults: algorithm, ordering, step granularity and cadence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunPrefs {
    /// Algorithm id or alias, resolved through the registry.
    pub algorithm: String,
    /// Target ordering.
    pub direction: Direction,
    /// Whether no-motion comparisons are steps too.
    pub verbosity: Verbosity,
    /// Driver ticks per second; one step per tick.
    pub tick_rate_hz: u32,
}

impl Default for RunPrefs {
    fn default() -> Self {
        Self {
            algorithm: BUBBLE_SORT_ID.to_owned(),
            direction: Direction::Ascending,
            verbosity: Verbosity::Mutations,
            tick_rate_hz: 60,
        }
    }
}

/// Reasons a set of preferences cannot drive a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefsError {
    /// `array.len` is zero.
    #[error("array length must be at least 1")]
    EmptyArray,
    /// `array.min_value` exceeds `array.max_value`.
    #[error("value range is inverted: min {min} > max {max}")]
    InvertedRange {
        /// Configured lower bound.
        min: i64,
        /// Configured upper bound.
        max: i64,
    },
    /// `run.tick_rate_hz` is zero.
    #[error("tick rate must be at least 1 Hz")]
    ZeroTickRate,
    /// `run.algorithm` does not resolve.
    #[error(transparent)]
    Algorithm(#[from] SortError),
}

impl ArrayPrefs {
    /// Checks the array shape.
    pub fn validate(&self) -> Result<(), PrefsError> {
        if self.len == 0 {
            return Err(PrefsError::EmptyArray);
        }
        if self.min_value > self.max_value {
            return Err(PrefsError::InvertedRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        Ok(())
    }
}

impl VisualizerPrefs {
    /// Checks every field against the built-in algorithm registry.
    pub fn validate(&self) -> Result<(), PrefsError> {
        self.array.validate()?;
        if self.run.tick_rate_hz == 0 {
            return Err(PrefsError::ZeroTickRate);
        }
        AlgorithmRegistry::builtin().get(&self.run.algorithm)?;
        Ok(())
    }
}
