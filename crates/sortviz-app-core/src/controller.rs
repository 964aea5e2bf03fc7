// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Driver-side state transitions: map input events onto a [`SortSession`]
//! and tell the renderer what to draw.
//!
//! The controller owns the session and the array generator. It gates
//! reconfiguration while a run is in flight: direction and algorithm changes
//! are refused until the run completes or is reset. A paused run is still in
//! flight.

use sortviz_core::{
    ArrayState, Direction, SortError, SortSession, StepResult, Verbosity, BUBBLE_SORT_ID,
    INSERTION_SORT_ID,
};
use tracing::{debug, info};

use crate::generate::ArrayGenerator;
use crate::prefs::{PrefsError, VisualizerPrefs};

/// Key bindings, one help line per group.
pub const CONTROLS_HELP: [&str; 2] = [
    "R - Reset | Space - Start Sort | A - Ascending | D - Descending",
    "I - Insertion Sort | B - Bubble Sort | P - Pause/Resume | Q - Quit",
];

/// Input the driver feeds into the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// Replace the array with a freshly generated one.
    Reset,
    /// Start sorting with the selected algorithm and direction.
    StartSort,
    /// Select the direction for the next run.
    SetDirection(Direction),
    /// Select the algorithm (id, name or alias) for the next run.
    SelectAlgorithm(String),
    /// Hold or release the run in flight.
    TogglePause,
    /// One frame of the driver's clock.
    Tick,
    /// Leave the driver loop.
    Quit,
}

impl ControlEvent {
    /// Maps a key name to an event.
    ///
    /// An empty line counts as the space bar so line-based drivers can start
    /// a run with Enter.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_ascii_lowercase();
        let event = match key.as_str() {
            "r" => Self::Reset,
            "" | "space" | " " => Self::StartSort,
            "a" => Self::SetDirection(Direction::Ascending),
            "d" => Self::SetDirection(Direction::Descending),
            "i" => Self::SelectAlgorithm(INSERTION_SORT_ID.to_owned()),
            "b" => Self::SelectAlgorithm(BUBBLE_SORT_ID.to_owned()),
            "p" | "pause" => Self::TogglePause,
            "q" | "quit" | "escape" => Self::Quit,
            _ => return None,
        };
        Some(event)
    }
}

/// What the renderer should do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEffect {
    /// Full redraw: title, key help and plain bars.
    Redraw,
    /// Redraw the bars with this step's highlights.
    DrawStep(StepResult),
    /// The run finished after `steps` steps.
    Finished {
        /// Steps yielded by the run.
        steps: u64,
    },
    /// A command was refused; show this to the user.
    Notice(String),
    /// Leave the driver loop.
    Quit,
}

/// Errors constructing a [`Controller`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    /// Preferences are unusable.
    #[error(transparent)]
    Prefs(#[from] PrefsError),
    /// The session rejected the configuration.
    #[error(transparent)]
    Sort(#[from] SortError),
}

/// Owns a [`SortSession`] and applies [`ControlEvent`]s to it.
#[derive(Debug)]
pub struct Controller {
    session: SortSession,
    generator: ArrayGenerator,
    algorithm: &'static str,
    direction: Direction,
    paused: bool,
}

impl Controller {
    /// Builds a controller from validated prefs, generating the first array.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError`] if the prefs fail validation.
    pub fn from_prefs(prefs: &VisualizerPrefs, seed: u64) -> Result<Self, ControllerError> {
        prefs.validate()?;
        let mut generator = ArrayGenerator::new(prefs.array, seed)?;
        let array = ArrayState::new(generator.generate())?;
        Self::with_array(array, generator, prefs)
    }

    /// Builds a controller over an explicit first array.
    ///
    /// The generator is still used for every later reset.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError`] if `prefs.run.algorithm` is not registered.
    pub fn with_array(
        array: ArrayState,
        generator: ArrayGenerator,
        prefs: &VisualizerPrefs,
    ) -> Result<Self, ControllerError> {
        let mut session = SortSession::new(array);
        session.set_verbosity(prefs.run.verbosity);
        let algorithm = session.registry().get(&prefs.run.algorithm)?.id;
        Ok(Self {
            session,
            generator,
            algorithm,
            direction: prefs.run.direction,
            paused: false,
        })
    }

    /// Applies one event and returns what the renderer should do.
    pub fn handle(&mut self, event: ControlEvent) -> Vec<ControlEffect> {
        match event {
            ControlEvent::Tick => vec![self.tick()],
            ControlEvent::Reset => {
                let values = self.generator.generate();
                match self.session.reset(values) {
                    Ok(()) => {
                        self.paused = false;
                        vec![ControlEffect::Redraw]
                    }
                    Err(err) => vec![notice(&err)],
                }
            }
            ControlEvent::StartSort => {
                if self.session.is_running() {
                    return vec![ControlEffect::Notice("already sorting".into())];
                }
                self.paused = false;
                match self.session.start(self.algorithm, self.direction) {
                    Ok(()) if self.session.is_running() => Vec::new(),
                    Ok(()) => vec![ControlEffect::Finished {
                        steps: self.session.steps_taken(),
                    }],
                    Err(err) => vec![notice(&err)],
                }
            }
            ControlEvent::SetDirection(direction) => {
                if self.session.is_running() {
                    return vec![ControlEffect::Notice(
                        "direction is locked while sorting".into(),
                    )];
                }
                self.direction = direction;
                vec![ControlEffect::Redraw]
            }
            ControlEvent::SelectAlgorithm(key) => {
                if self.session.is_running() {
                    return vec![ControlEffect::Notice(
                        "algorithm is locked while sorting".into(),
                    )];
                }
                match self.session.registry().get(&key) {
                    Ok(entry) => {
                        self.algorithm = entry.id;
                        vec![ControlEffect::Redraw]
                    }
                    Err(err) => vec![notice(&err)],
                }
            }
            ControlEvent::TogglePause => {
                if !self.session.is_running() {
                    return vec![ControlEffect::Notice("nothing to pause".into())];
                }
                self.paused = !self.paused;
                debug!(paused = self.paused, steps = self.session.steps_taken(), "pause toggled");
                let msg = if self.paused { "paused" } else { "resumed" };
                vec![ControlEffect::Notice(msg.into())]
            }
            ControlEvent::Quit => vec![ControlEffect::Quit],
        }
    }

    fn tick(&mut self) -> ControlEffect {
        if self.paused || !self.session.is_running() {
            return ControlEffect::Redraw;
        }
        match self.session.advance() {
            Ok(step) if step.done => ControlEffect::Finished {
                steps: self.session.steps_taken(),
            },
            Ok(step) => ControlEffect::DrawStep(step),
            Err(err) => notice(&err),
        }
    }

    /// The session being driven.
    pub fn session(&self) -> &SortSession {
        &self.session
    }

    /// Returns `true` while a run is in flight, paused or not.
    pub fn is_sorting(&self) -> bool {
        self.session.is_running()
    }

    /// Returns `true` while the run in flight is held.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Selected algorithm id for the next run.
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    /// Selected direction for the next run.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Verbosity applied to the next run.
    pub fn verbosity(&self) -> Verbosity {
        self.session.verbosity()
    }

    /// Header line, e.g. `"Bubble Sort - Ascending"`.
    pub fn title(&self) -> String {
        let name = self
            .session
            .registry()
            .get(self.algorithm)
            .map_or(self.algorithm, |e| e.name);
        format!("{name} - {}", self.direction)
    }
}

fn notice(err: &SortError) -> ControlEffect {
    match err {
        SortError::SessionBusy | SortError::NotRunning => debug!(%err, "command refused"),
        _ => info!(%err, "command refused"),
    }
    ControlEffect::Notice(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::ArrayPrefs;

    fn controller(values: Vec<i64>) -> Controller {
        let prefs = VisualizerPrefs::default();
        let generator = ArrayGenerator::new(
            ArrayPrefs {
                len: 4,
                min_value: 0,
                max_value: 9,
            },
            3,
        )
        .unwrap();
        Controller::with_array(ArrayState::new(values).unwrap(), generator, &prefs).unwrap()
    }

    #[test]
    fn keys_map_to_events() {
        assert_eq!(ControlEvent::from_key("R"), Some(ControlEvent::Reset));
        assert_eq!(ControlEvent::from_key(""), Some(ControlEvent::StartSort));
        assert_eq!(
            ControlEvent::from_key("d"),
            Some(ControlEvent::SetDirection(Direction::Descending))
        );
        assert_eq!(
            ControlEvent::from_key("i"),
            Some(ControlEvent::SelectAlgorithm("insertion".into()))
        );
        assert_eq!(ControlEvent::from_key("z"), None);
    }

    #[test]
    fn idle_tick_requests_redraw() {
        let mut c = controller(vec![3, 1, 2]);
        assert_eq!(c.handle(ControlEvent::Tick), vec![ControlEffect::Redraw]);
    }

    #[test]
    fn ticks_drive_run_to_finish() {
        let mut c = controller(vec![5, 3, 1]);
        assert!(c.handle(ControlEvent::StartSort).is_empty());
        for _ in 0..3 {
            let fx = c.handle(ControlEvent::Tick);
            assert!(matches!(fx.as_slice(), [ControlEffect::DrawStep(_)]));
        }
        assert_eq!(
            c.handle(ControlEvent::Tick),
            vec![ControlEffect::Finished { steps: 3 }]
        );
        assert!(!c.is_sorting());
        assert_eq!(c.session().array().values(), &[1, 3, 5]);
    }

    #[test]
    fn reconfiguration_is_gated_while_sorting() {
        let mut c = controller(vec![4, 3, 2, 1]);
        c.handle(ControlEvent::StartSort);
        let fx = c.handle(ControlEvent::SetDirection(Direction::Descending));
        assert!(matches!(fx.as_slice(), [ControlEffect::Notice(_)]));
        let fx = c.handle(ControlEvent::SelectAlgorithm("i".into()));
        assert!(matches!(fx.as_slice(), [ControlEffect::Notice(_)]));
        let fx = c.handle(ControlEvent::StartSort);
        assert!(matches!(fx.as_slice(), [ControlEffect::Notice(_)]));
        assert_eq!(c.direction(), Direction::Ascending);
        assert_eq!(c.algorithm(), "bubble");
    }

    #[test]
    fn selection_updates_title() {
        let mut c = controller(vec![1, 2]);
        assert_eq!(c.title(), "Bubble Sort - Ascending");
        c.handle(ControlEvent::SelectAlgorithm("i".into()));
        c.handle(ControlEvent::SetDirection(Direction::Descending));
        assert_eq!(c.title(), "Insertion Sort - Descending");
    }

    #[test]
    fn unknown_algorithm_is_a_notice() {
        let mut c = controller(vec![1, 2]);
        let fx = c.handle(ControlEvent::SelectAlgorithm("bogo".into()));
        assert_eq!(
            fx,
            vec![ControlEffect::Notice("unknown algorithm: bogo".into())]
        );
        assert_eq!(c.algorithm(), "bubble");
    }

    #[test]
    fn reset_mid_run_stops_sorting() {
        let mut c = controller(vec![4, 3, 2, 1]);
        c.handle(ControlEvent::StartSort);
        c.handle(ControlEvent::Tick);
        assert_eq!(c.handle(ControlEvent::Reset), vec![ControlEffect::Redraw]);
        assert!(!c.is_sorting());
        assert_eq!(c.session().array().len(), 4);
        assert!(c.session().last_step().is_none());
    }

    #[test]
    fn paused_ticks_do_not_advance() {
        let mut c = controller(vec![5, 3, 1]);
        c.handle(ControlEvent::StartSort);
        c.handle(ControlEvent::Tick);
        assert_eq!(ControlEvent::from_key("p"), Some(ControlEvent::TogglePause));
        assert_eq!(
            c.handle(ControlEvent::TogglePause),
            vec![ControlEffect::Notice("paused".into())]
        );
        let frozen = c.session().array().values().to_vec();
        for _ in 0..5 {
            assert_eq!(c.handle(ControlEvent::Tick), vec![ControlEffect::Redraw]);
        }
        assert_eq!(c.session().array().values(), frozen.as_slice());
        assert_eq!(c.session().steps_taken(), 1);
        assert!(c.is_sorting());

        // Still in flight, so reconfiguration stays locked.
        let fx = c.handle(ControlEvent::SetDirection(Direction::Descending));
        assert!(matches!(fx.as_slice(), [ControlEffect::Notice(_)]));

        c.handle(ControlEvent::TogglePause);
        assert!(!c.is_paused());
        c.handle(ControlEvent::Tick);
        c.handle(ControlEvent::Tick);
        assert_eq!(
            c.handle(ControlEvent::Tick),
            vec![ControlEffect::Finished { steps: 3 }]
        );
        assert_eq!(c.session().array().values(), &[1, 3, 5]);
    }

    #[test]
    fn reset_clears_pause() {
        let mut c = controller(vec![4, 3, 2, 1]);
        assert_eq!(
            c.handle(ControlEvent::TogglePause),
            vec![ControlEffect::Notice("nothing to pause".into())]
        );
        c.handle(ControlEvent::StartSort);
        c.handle(ControlEvent::TogglePause);
        assert!(c.is_paused());
        c.handle(ControlEvent::Reset);
        assert!(!c.is_paused());
        assert!(!c.is_sorting());
    }

    #[test]
    fn single_element_run_finishes_immediately() {
        let mut c = controller(vec![8]);
        assert_eq!(
            c.handle(ControlEvent::StartSort),
            vec![ControlEffect::Finished { steps: 0 }]
        );
        assert!(!c.is_sorting());
    }
}
