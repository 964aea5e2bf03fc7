// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sort session: drives one emitter against one array, a step at a time.
//!
//! # State machine
//!
//! ```text
//!            start                 advance (exhausted)
//!   Idle ───────────► Running ───────────────────────► Completed
//!    ▲                  │  ▲ advance (step)                │
//!    │     reset        │  └──┘                            │ start
//!    └──────────────────┴──────────────────────────────────┘──► Running
//! ```
//!
//! - `start` is rejected while `Running` (no implicit cancel).
//! - `advance` outside `Running` is an error and never mutates.
//! - `reset` works from any state and drops the suspended emitter.

use tracing::{debug, info, trace};

use crate::array_state::ArrayState;
use crate::direction::{Direction, Verbosity};
use crate::emitter::StepEmitter;
use crate::error::SortError;
use crate::registry::AlgorithmRegistry;
use crate::step::StepResult;

/// Lifecycle state of a [`SortSession`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionState {
    /// No run started since creation or the last reset.
    #[default]
    Idle,
    /// A run is suspended between steps.
    Running,
    /// The last run was drained to exhaustion.
    Completed,
}

/// Owns the array and at most one in-flight emitter.
///
/// The session is the only writer of its [`ArrayState`]: drivers get a
/// shared reference through [`SortSession::array`] and can change the values
/// only through [`SortSession::reset`].
#[derive(Debug)]
pub struct SortSession {
    array: ArrayState,
    registry: AlgorithmRegistry,
    state: SessionState,
    emitter: Option<Box<dyn StepEmitter>>,
    verbosity: Verbosity,
    algorithm: Option<&'static str>,
    direction: Direction,
    steps_taken: u64,
    last_step: Option<StepResult>,
}

impl SortSession {
    /// Creates an idle session over `array` using the built-in algorithms.
    pub fn new(array: ArrayState) -> Self {
        Self::with_registry(array, AlgorithmRegistry::builtin())
    }

    /// Creates an idle session resolving algorithms through `registry`.
    pub fn with_registry(array: ArrayState, registry: AlgorithmRegistry) -> Self {
        Self {
            array,
            registry,
            state: SessionState::Idle,
            emitter: None,
            verbosity: Verbosity::default(),
            algorithm: None,
            direction: Direction::default(),
            steps_taken: 0,
            last_step: None,
        }
    }

    /// Starts a run of `algorithm` in `direction` over the session's array.
    ///
    /// Arrays of length 1 have nothing to sort: the session moves straight
    /// to [`SessionState::Completed`] without needing an `advance` call.
    ///
    /// # Errors
    ///
    /// - [`SortError::SessionBusy`] if a run is in progress.
    /// - [`SortError::UnknownAlgorithm`] if `algorithm` is not registered.
    pub fn start(&mut self, algorithm: &str, direction: Direction) -> Result<(), SortError> {
        if self.state == SessionState::Running {
            return Err(SortError::SessionBusy);
        }
        let entry = self.registry.get(algorithm)?;
        let id = entry.id;
        let emitter = entry.create(direction, self.verbosity);

        self.algorithm = Some(id);
        self.direction = direction;
        self.steps_taken = 0;
        self.last_step = None;

        if self.array.len() <= 1 {
            self.emitter = None;
            self.state = SessionState::Completed;
            info!(algorithm = id, %direction, "nothing to sort; run completed");
            return Ok(());
        }

        self.emitter = Some(emitter);
        self.state = SessionState::Running;
        info!(
            algorithm = id,
            %direction,
            verbosity = %self.verbosity,
            len = self.array.len(),
            "sort run started"
        );
        Ok(())
    }

    /// Pulls exactly one step from the active run.
    ///
    /// When the emitter is exhausted the session transitions to
    /// [`SessionState::Completed`] and returns [`StepResult::finished`];
    /// that call performs no mutation.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::NotRunning`] outside [`SessionState::Running`].
    pub fn advance(&mut self) -> Result<StepResult, SortError> {
        if self.state != SessionState::Running {
            return Err(SortError::NotRunning);
        }
        let Some(emitter) = self.emitter.as_mut() else {
            return Err(SortError::NotRunning);
        };

        let step = if let Some(step) = emitter.next_step(&mut self.array) {
            self.steps_taken += 1;
            trace!(step = self.steps_taken, highlighted = ?step.highlighted, "step");
            step
        } else {
            self.emitter = None;
            self.state = SessionState::Completed;
            info!(
                algorithm = self.algorithm.unwrap_or_default(),
                steps = self.steps_taken,
                "sort run completed"
            );
            StepResult::finished()
        };
        self.last_step = Some(step.clone());
        Ok(step)
    }

    /// Drains the active run and returns how many steps it yielded in total.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::NotRunning`] when no run is active.
    pub fn run_to_completion(&mut self) -> Result<u64, SortError> {
        if self.state != SessionState::Running {
            return Err(SortError::NotRunning);
        }
        while !self.advance()?.done {}
        Ok(self.steps_taken)
    }

    /// Abandons any active run and replaces the array with `values`.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::InvalidInput`] for empty `values`; the session
    /// (including an active run) is left untouched in that case.
    pub fn reset(&mut self, values: Vec<i64>) -> Result<(), SortError> {
        self.array.replace(values)?;
        if self.emitter.take().is_some() {
            debug!(
                algorithm = self.algorithm.unwrap_or_default(),
                steps = self.steps_taken,
                "abandoned in-flight sort run"
            );
        }
        self.state = SessionState::Idle;
        self.algorithm = None;
        self.steps_taken = 0;
        self.last_step = None;
        info!(len = self.array.len(), "session reset");
        Ok(())
    }

    /// Sets the step granularity used by the next `start`.
    ///
    /// A run already in progress keeps the verbosity it started with.
    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    /// Step granularity applied to the next run.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns `true` while a run is suspended between steps.
    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Read-only view of the array for rendering.
    pub fn array(&self) -> &ArrayState {
        &self.array
    }

    /// Algorithms this session can start.
    pub fn registry(&self) -> &AlgorithmRegistry {
        &self.registry
    }

    /// Id of the algorithm of the current or last run, cleared on reset.
    pub fn algorithm(&self) -> Option<&'static str> {
        self.algorithm
    }

    /// Direction of the current or last run.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Steps yielded by the current or last run (the terminal step excluded).
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Most recent step, cleared on start and reset.
    pub fn last_step(&self) -> Option<&StepResult> {
        self.last_step.as_ref()
    }
}
