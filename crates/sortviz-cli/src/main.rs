// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `sortviz`: watch bubble sort and insertion sort move, one step per tick.
//!
//! Subcommands:
//! - `run`: sort one array to completion, drawing text bars per step.
//! - `play`: interactive loop driven by key lines on stdin.
//! - `algorithms`: list the registered algorithms.
//! - `prefs show|save`: inspect or persist preferences.
//!
//! Logs go to stderr; `RUST_LOG` overrides the `-v` level.

mod cli;
mod commands;
mod render;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command, PrefsCommand};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config_dir = args.config_dir.as_deref();
    match args.command {
        Command::Run(run) => commands::run(config_dir, &run).await,
        Command::Play(play) => commands::play(config_dir, &play).await,
        Command::Algorithms => commands::algorithms(),
        Command::Prefs { action } => match action {
            PrefsCommand::Show => commands::prefs_show(config_dir),
            PrefsCommand::Save(overrides) => commands::prefs_save(config_dir, &overrides),
        },
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
