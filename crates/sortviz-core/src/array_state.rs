// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The array being sorted plus the metrics a renderer needs for layout.

use crate::error::SortError;

/// Owns the sequence being sorted and its `min`/`max` metrics.
///
/// The length is fixed for the lifetime of a run; only [`ArrayState::replace`]
/// changes it, and only by swapping the whole backing sequence. Between steps
/// the values are always a permutation of the values the run started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayState {
    values: Vec<i64>,
    min: i64,
    max: i64,
}

impl ArrayState {
    /// Takes ownership of `values` and computes layout metrics.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::InvalidInput`] when `values` is empty.
    pub fn new(values: Vec<i64>) -> Result<Self, SortError> {
        let (min, max) = metrics(&values)?;
        Ok(Self { values, min, max })
    }

    /// Replaces the backing sequence and recomputes metrics.
    ///
    /// On error the current values are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::InvalidInput`] when `values` is empty.
    pub fn replace(&mut self, values: Vec<i64>) -> Result<(), SortError> {
        let (min, max) = metrics(&values)?;
        self.values = values;
        self.min = min;
        self.max = max;
        Ok(())
    }

    /// Exchanges the elements at `i` and `j`.
    ///
    /// Indices come from the step emitters, which only produce in-range pairs.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.values.swap(i, j);
    }

    /// Read-only view of the current values.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Element at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Never `true` for a constructed state: empty input is rejected.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest value, as of the last `new`/`replace`.
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Largest value, as of the last `new`/`replace`.
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Value range used to scale bar heights, clamped to at least 1.
    ///
    /// Single-element and all-equal arrays have `max == min`; clamping keeps
    /// renderers from dividing by zero.
    pub fn span(&self) -> u64 {
        self.max.abs_diff(self.min).max(1)
    }
}

fn metrics(values: &[i64]) -> Result<(i64, i64), SortError> {
    let first = *values
        .first()
        .ok_or(SortError::InvalidInput("array must not be empty"))?;
    Ok(values
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))))
}
