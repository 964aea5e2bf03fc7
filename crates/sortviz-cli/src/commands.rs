// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Subcommand implementations.

use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Table};
use sortviz_app_core::config::{ConfigService, PREFS_KEY};
use sortviz_app_core::controller::{ControlEffect, ControlEvent, Controller, CONTROLS_HELP};
use sortviz_app_core::generate::ArrayGenerator;
use sortviz_app_core::prefs::VisualizerPrefs;
use sortviz_config_fs::FsConfigStore;
use sortviz_core::{AlgorithmRegistry, ArrayState};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cli::{PlayArgs, RunArgs, RunOverrides};
use crate::render::{format_values, BarRenderer};

const CHART_ROWS: usize = 12;

fn open_config(dir: Option<&Path>) -> Result<ConfigService<FsConfigStore>> {
    let store = match dir {
        Some(dir) => FsConfigStore::with_base(dir),
        None => FsConfigStore::new(),
    }
    .context("opening config store")?;
    Ok(ConfigService::new(store))
}

/// Stored prefs with `overrides` applied, validated.
fn effective_prefs(dir: Option<&Path>, overrides: &RunOverrides) -> Result<VisualizerPrefs> {
    let mut prefs = open_config(dir)?
        .load_prefs()
        .context("loading preferences")?;
    overrides.apply(&mut prefs);
    prefs.validate().context("invalid preferences")?;
    Ok(prefs)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs() ^ u64::from(d.subsec_nanos()).rotate_left(32))
}

fn tick_period(hz: u32) -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(hz.max(1)))
}

fn ticker(hz: u32) -> time::Interval {
    let mut interval = time::interval(tick_period(hz));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval
}

/// `sortviz run`: one run to completion, then a summary table.
pub(crate) async fn run(config_dir: Option<&Path>, args: &RunArgs) -> Result<()> {
    let prefs = effective_prefs(config_dir, &args.overrides)?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    let generator = ArrayGenerator::new(prefs.array, seed)?;
    let mut controller = match &args.values {
        Some(values) => {
            let array = ArrayState::new(values.clone()).context("--values")?;
            Controller::with_array(array, generator, &prefs)?
        }
        None => Controller::from_prefs(&prefs, seed)?,
    };
    info!(seed, title = %controller.title(), "run");

    let renderer = BarRenderer::new(CHART_ROWS);
    let mut out = io::stdout();
    let original = controller.session().array().values().to_vec();
    if !args.quiet {
        writeln!(out, "{}", controller.title())?;
        renderer.draw(&mut out, controller.session().array(), None)?;
    }

    let started = Instant::now();
    let mut effects = controller.handle(ControlEvent::StartSort);
    let mut interval = ticker(prefs.run.tick_rate_hz);
    let steps = loop {
        if let Some(steps) = finished(&effects) {
            break steps;
        }
        for effect in &effects {
            match effect {
                ControlEffect::DrawStep(step) if !args.quiet => {
                    renderer.draw(&mut out, controller.session().array(), Some(step))?;
                }
                ControlEffect::Notice(msg) => warn!(%msg, "controller notice"),
                _ => {}
            }
        }
        if !controller.is_sorting() {
            anyhow::bail!("sort run did not start");
        }
        if !args.quiet {
            interval.tick().await;
        }
        effects = controller.handle(ControlEvent::Tick);
    };
    let elapsed = started.elapsed();

    if !args.quiet {
        BarRenderer::legend(&mut out)?;
    }
    let session = controller.session();
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["field", "value"]);
    table.add_row(vec!["algorithm".to_owned(), controller.title()]);
    table.add_row(vec!["verbosity".to_owned(), controller.verbosity().to_string()]);
    table.add_row(vec!["length".to_owned(), session.array().len().to_string()]);
    table.add_row(vec!["steps".to_owned(), steps.to_string()]);
    table.add_row(vec!["seed".to_owned(), seed.to_string()]);
    table.add_row(vec!["elapsed".to_owned(), format!("{elapsed:.2?}")]);
    writeln!(out, "{table}")?;
    writeln!(out, "input:  {}", format_values(&original))?;
    writeln!(out, "sorted: {}", format_values(session.array().values()))?;
    Ok(())
}

fn finished(effects: &[ControlEffect]) -> Option<u64> {
    effects.iter().find_map(|e| match e {
        ControlEffect::Finished { steps } => Some(*steps),
        _ => None,
    })
}

/// `sortviz play`: key lines on stdin, one step per tick.
///
/// End of input quits like `q`.
pub(crate) async fn play(config_dir: Option<&Path>, args: &PlayArgs) -> Result<()> {
    let prefs = effective_prefs(config_dir, &args.overrides)?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    let mut controller = Controller::from_prefs(&prefs, seed)?;
    info!(seed, "play");

    let renderer = BarRenderer::new(CHART_ROWS);
    let clear = io::stdout().is_terminal();
    let mut out = io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut interval = ticker(prefs.run.tick_rate_hz);

    draw_frame(&mut out, &renderer, &controller, None, clear)?;
    loop {
        let effects = tokio::select! {
            _ = interval.tick() => {
                // Idle ticks only ask for a redraw; the screen has not changed.
                let mut fx = controller.handle(ControlEvent::Tick);
                fx.retain(|e| *e != ControlEffect::Redraw);
                fx
            }
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    debug!("stdin closed");
                    break;
                };
                match ControlEvent::from_key(&line) {
                    Some(event) => controller.handle(event),
                    None => vec![ControlEffect::Notice(format!("unbound key: {}", line.trim()))],
                }
            }
        };

        for effect in effects {
            match effect {
                ControlEffect::Redraw => draw_frame(&mut out, &renderer, &controller, None, clear)?,
                ControlEffect::DrawStep(step) => {
                    draw_frame(&mut out, &renderer, &controller, Some(&step), clear)?;
                }
                ControlEffect::Finished { steps } => {
                    writeln!(out, "finished after {steps} steps")?;
                }
                ControlEffect::Notice(msg) => writeln!(out, "{msg}")?,
                ControlEffect::Quit => return Ok(()),
            }
        }
        out.flush()?;
    }
    Ok(())
}

fn draw_frame(
    out: &mut impl Write,
    renderer: &BarRenderer,
    controller: &Controller,
    step: Option<&sortviz_core::StepResult>,
    clear: bool,
) -> io::Result<()> {
    if clear {
        write!(out, "\x1b[2J\x1b[H")?;
    }
    writeln!(out, "{}", controller.title())?;
    for line in CONTROLS_HELP {
        writeln!(out, "{line}")?;
    }
    renderer.draw(out, controller.session().array(), step)
}

/// `sortviz algorithms`.
pub(crate) fn algorithms() -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["id", "name", "aliases"]);
    for entry in AlgorithmRegistry::builtin().entries() {
        table.add_row(vec![
            entry.id.to_owned(),
            entry.name.to_owned(),
            entry.aliases.join(", "),
        ]);
    }
    writeln!(io::stdout(), "{table}")?;
    Ok(())
}

/// `sortviz prefs show`.
pub(crate) fn prefs_show(config_dir: Option<&Path>) -> Result<()> {
    let service = open_config(config_dir)?;
    let prefs = service.load_prefs().context("loading preferences")?;
    let store = service.into_inner();
    let mut out = io::stdout();
    writeln!(out, "# {}", store.path_for(PREFS_KEY).display())?;
    writeln!(out, "{}", serde_json::to_string_pretty(&prefs)?)?;
    Ok(())
}

/// `sortviz prefs save`.
pub(crate) fn prefs_save(config_dir: Option<&Path>, overrides: &RunOverrides) -> Result<()> {
    let service = open_config(config_dir)?;
    let mut prefs = service.load_prefs().context("loading preferences")?;
    overrides.apply(&mut prefs);
    service.save_prefs(&prefs).context("saving preferences")?;
    let path = service.into_inner().path_for(PREFS_KEY);
    info!(path = %path.display(), "preferences saved");
    writeln!(io::stdout(), "saved {}", path.display())?;
    Ok(())
}
