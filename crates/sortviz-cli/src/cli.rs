// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sortviz_app_core::prefs::VisualizerPrefs;
use sortviz_core::{Direction, Verbosity};

#[derive(Parser, Debug)]
#[command(author, version, about = "Stepwise sorting-algorithm visualizer")]
pub(crate) struct Args {
    /// Directory holding prefs.json (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Sort one array to completion, drawing every step
    Run(RunArgs),
    /// Interactive loop: r reset, space/enter start, p pause, a/d direction, i/b algorithm, q quit
    Play(PlayArgs),
    /// List registered algorithms
    Algorithms,
    /// Inspect or persist preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsCommand,
    },
}

#[derive(Subcommand, Debug)]
pub(crate) enum PrefsCommand {
    /// Print the effective preferences as JSON
    Show,
    /// Apply overrides to the stored preferences and save them
    Save(RunOverrides),
}

/// Flags that override stored preferences for one invocation.
#[derive(clap::Args, Debug, Default, Clone)]
pub(crate) struct RunOverrides {
    /// Algorithm id, name or alias (see `sortviz algorithms`)
    #[arg(long, short)]
    pub algorithm: Option<String>,
    /// asc or desc
    #[arg(long, short)]
    pub direction: Option<Direction>,
    /// Number of generated values
    #[arg(long)]
    pub len: Option<usize>,
    /// Smallest generated value
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i64>,
    /// Largest generated value
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i64>,
    /// Steps per second
    #[arg(long)]
    pub tick_rate: Option<u32>,
    /// Also step on comparisons that move nothing
    #[arg(long)]
    pub comparisons: bool,
}

impl RunOverrides {
    /// Writes every flag that was given into `prefs`.
    pub fn apply(&self, prefs: &mut VisualizerPrefs) {
        if let Some(algorithm) = &self.algorithm {
            prefs.run.algorithm.clone_from(algorithm);
        }
        if let Some(direction) = self.direction {
            prefs.run.direction = direction;
        }
        if let Some(len) = self.len {
            prefs.array.len = len;
        }
        if let Some(min) = self.min {
            prefs.array.min_value = min;
        }
        if let Some(max) = self.max {
            prefs.array.max_value = max;
        }
        if let Some(hz) = self.tick_rate {
            prefs.run.tick_rate_hz = hz;
        }
        if self.comparisons {
            prefs.run.verbosity = Verbosity::Comparisons;
        }
    }
}

#[derive(clap::Args, Debug)]
pub(crate) struct RunArgs {
    #[command(flatten)]
    pub overrides: RunOverrides,
    /// Sort these values instead of a generated array (e.g. 5,3,1)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub values: Option<Vec<i64>>,
    /// Seed for generated arrays (defaults to the clock)
    #[arg(long)]
    pub seed: Option<u64>,
    /// Skip per-step drawing and pacing; print only the summary
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(clap::Args, Debug)]
pub(crate) struct PlayArgs {
    #[command(flatten)]
    pub overrides: RunOverrides,
    /// Seed for generated arrays (defaults to the clock)
    #[arg(long)]
    pub seed: Option<u64>,
}
