// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Text bar renderer.
//!
//! Bars are scaled by `ArrayState::span()` so the minimum value is one row
//! tall and the maximum fills the chart. Glyphs carry the step's highlight
//! roles; the core itself knows nothing about glyphs.

use std::io::{self, Write};

use sortviz_core::{ArrayState, HighlightRole, StepResult};

const BAR: char = '#';
const MOVED: char = '@';
const COMPARED: char = '+';

/// Draws an array as vertical text bars.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BarRenderer {
    rows: usize,
}

impl BarRenderer {
    /// A renderer drawing charts `rows` lines tall (at least one).
    pub fn new(rows: usize) -> Self {
        Self { rows: rows.max(1) }
    }

    /// Height in rows of the bar for `value`, in `1..=rows`.
    pub fn bar_height(&self, value: i64, array: &ArrayState) -> usize {
        let steps = (self.rows - 1) as u128;
        let offset = u128::from(value.abs_diff(array.min()));
        let scaled = offset * steps / u128::from(array.span());
        1 + usize::try_from(scaled).map_or(self.rows - 1, |s| s.min(self.rows - 1))
    }

    /// Writes the chart for `array`, colouring indices from `step`.
    pub fn draw(
        &self,
        out: &mut impl Write,
        array: &ArrayState,
        step: Option<&StepResult>,
    ) -> io::Result<()> {
        let heights: Vec<usize> = array
            .values()
            .iter()
            .map(|&v| self.bar_height(v, array))
            .collect();
        let role = |i: usize| step.map_or(HighlightRole::None, |s| s.role(i));

        let mut line = String::with_capacity(heights.len());
        for row in (1..=self.rows).rev() {
            line.clear();
            for (i, &h) in heights.iter().enumerate() {
                line.push(if h >= row { glyph(role(i)) } else { ' ' });
            }
            writeln!(out, "{}", line.trim_end())?;
        }
        writeln!(out, "{}", "-".repeat(heights.len()))
    }

    /// One-line legend for the glyphs.
    pub fn legend(out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{BAR} value  {MOVED} moved  {COMPARED} compared")
    }
}

fn glyph(role: HighlightRole) -> char {
    match role {
        HighlightRole::None => BAR,
        HighlightRole::Moved => MOVED,
        HighlightRole::Compared => COMPARED,
    }
}

/// Formats values as `[a, b, c]`.
pub(crate) fn format_values(values: &[i64]) -> String {
    format!("{values:?}")
}
