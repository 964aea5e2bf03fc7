// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Run configuration read once when an emitter is created.

use core::fmt;
use core::str::FromStr;

/// Target ordering for a sort run.
///
/// Emitters capture the direction at construction. Changing the caller's
/// direction while a run is live has no effect until the next run starts.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Non-decreasing order.
    #[default]
    Ascending,
    /// Non-increasing order.
    Descending,
}

impl Direction {
    /// Returns `true` when `left` must move past `right` to reach this order.
    ///
    /// Equal values are never out of order, so ties never move.
    pub fn out_of_order(self, left: i64, right: i64) -> bool {
        match self {
            Self::Ascending => left > right,
            Self::Descending => left < right,
        }
    }

    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Returns `true` if `values` is already ordered for this direction.
    pub fn is_sorted(self, values: &[i64]) -> bool {
        values.windows(2).all(|w| !self.out_of_order(w[0], w[1]))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        })
    }
}

/// Error returned when parsing a [`Direction`] or [`Verbosity`] fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized value: {0}")]
pub struct ParseConfigError(
    /// The rejected input.
    pub String,
);

impl FromStr for Direction {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" | "a" => Ok(Self::Ascending),
            "desc" | "descending" | "d" => Ok(Self::Descending),
            _ => Err(ParseConfigError(s.to_owned())),
        }
    }
}

/// Step granularity of an emitter.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Verbosity {
    /// Suspend only after a swap or shift.
    #[default]
    Mutations,
    /// Also suspend after a comparison that moved nothing.
    ///
    /// Increases the total step count; the final array is identical.
    Comparisons,
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mutations => "mutations",
            Self::Comparisons => "comparisons",
        })
    }
}

impl FromStr for Verbosity {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mutations" => Ok(Self::Mutations),
            "comparisons" => Ok(Self::Comparisons),
            _ => Err(ParseConfigError(s.to_owned())),
        }
    }
}
