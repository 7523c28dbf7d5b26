//! Session lifecycle
//!
//! A session is one gameplay run: it owns the simulation working set,
//! latches the first terminal outcome, and fires the shell callbacks
//! exactly once. There is no cross-session state; restarting means
//! constructing a new session from the same level config.

use std::time::Instant;

use crate::settings::SessionOptions;
use crate::sim::state::{Frame, LevelConfig, SimState};
use crate::sim::tick::{self, TickInput, TickOutcome};

/// Result of one session tick, as reported to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Session is live; keep scheduling ticks
    Continuing,
    /// Stability exhausted or lethal hazard contact
    Failed,
    /// Core point reached; carries elapsed session time in milliseconds
    Completed(u64),
}

type CompleteHook = Box<dyn FnMut(u64)>;
type FailHook = Box<dyn FnMut()>;

/// One gameplay run from spawn to terminal outcome
pub struct Session {
    options: SessionOptions,
    level: LevelConfig,
    state: SimState,
    /// Monotonic start instant; sampled again only at completion
    started: Instant,
    result: Option<TickResult>,
    on_complete: Option<CompleteHook>,
    on_fail: Option<FailHook>,
}

impl Session {
    /// Start a fresh run: pristine player and hazard working set, elapsed
    /// clock at zero.
    pub fn new(options: SessionOptions, level: LevelConfig) -> Self {
        log::info!(
            "session start: difficulty={} policy={:?}",
            options.difficulty.as_str(),
            options.contact_policy,
        );
        let state = SimState::new(&level);
        Self {
            options,
            level,
            state,
            started: Instant::now(),
            result: None,
            on_complete: None,
            on_fail: None,
        }
    }

    /// Register the completion callback (fired at most once)
    pub fn on_complete(mut self, hook: impl FnMut(u64) + 'static) -> Self {
        self.on_complete = Some(Box::new(hook));
        self
    }

    /// Register the failure callback (fired at most once)
    pub fn on_fail(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_fail = Some(Box::new(hook));
        self
    }

    /// Advance one tick. The first terminal outcome is latched; a terminal
    /// session ignores input and returns the latched result unchanged.
    pub fn advance(&mut self, input: &TickInput) -> TickResult {
        if let Some(result) = self.result {
            return result;
        }

        let result = match tick::advance(&mut self.state, &self.level, &self.options, input) {
            TickOutcome::Continuing => return TickResult::Continuing,
            TickOutcome::Failed => {
                log::info!("session failed at tick {}", self.state.time_ticks);
                if let Some(hook) = self.on_fail.as_mut() {
                    hook();
                }
                TickResult::Failed
            }
            TickOutcome::Reached => {
                let elapsed = self.started.elapsed().as_millis() as u64;
                log::info!(
                    "session completed in {elapsed} ms ({} ticks)",
                    self.state.time_ticks,
                );
                if let Some(hook) = self.on_complete.as_mut() {
                    hook(elapsed);
                }
                TickResult::Completed(elapsed)
            }
        };
        self.result = Some(result);
        result
    }

    /// Immutable snapshot for the render adapter. Side-effect free.
    pub fn frame(&self) -> Frame {
        self.state.frame()
    }

    /// The level this session runs, unchanged since construction
    pub fn level(&self) -> &LevelConfig {
        &self.level
    }

    /// The latched terminal result, if any
    pub fn result(&self) -> Option<TickResult> {
        self.result
    }

    pub fn is_terminal(&self) -> bool {
        self.result.is_some()
    }

    /// Tear the session down, dropping callbacks and working state. The
    /// shell must stop scheduling ticks on every exit path; dropping the
    /// session is equivalent.
    pub fn dispose(self) {
        log::debug!("session disposed at tick {}", self.state.time_ticks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::settings::Difficulty;
    use crate::sim::breach_arena;

    fn instant_win_level() -> LevelConfig {
        LevelConfig {
            width: 400.0,
            height: 400.0,
            start: Vec2::new(50.0, 50.0),
            core_point: Vec2::new(70.0, 50.0),
            initial_stability: 100.0,
            walls: Vec::new(),
            hazards: Vec::new(),
        }
    }

    #[test]
    fn test_complete_fires_exactly_once() {
        let completions = Rc::new(Cell::new(0u32));
        let fails = Rc::new(Cell::new(0u32));

        let mut session = Session::new(
            SessionOptions::new(Difficulty::Easy),
            instant_win_level(),
        )
        .on_complete({
            let completions = completions.clone();
            move |_ms| completions.set(completions.get() + 1)
        })
        .on_fail({
            let fails = fails.clone();
            move || fails.set(fails.get() + 1)
        });

        let input = TickInput::default();
        let first = session.advance(&input);
        assert!(matches!(first, TickResult::Completed(_)));
        assert!(session.is_terminal());

        // Further ticks return the latched result and fire nothing
        for _ in 0..10 {
            assert_eq!(session.advance(&input), first);
        }
        assert_eq!(completions.get(), 1);
        assert_eq!(fails.get(), 0);
    }

    #[test]
    fn test_fail_fires_exactly_once() {
        let completions = Rc::new(Cell::new(0u32));
        let fails = Rc::new(Cell::new(0u32));

        let mut session = Session::new(SessionOptions::new(Difficulty::Easy), breach_arena())
            .on_complete({
                let completions = completions.clone();
                move |_ms| completions.set(completions.get() + 1)
            })
            .on_fail({
                let fails = fails.clone();
                move || fails.set(fails.get() + 1)
            });

        // Idle until the passive drain exhausts stability
        let input = TickInput::default();
        let mut ticks = 0u64;
        loop {
            ticks += 1;
            match session.advance(&input) {
                TickResult::Continuing => continue,
                TickResult::Failed => break,
                TickResult::Completed(_) => panic!("idle session cannot complete"),
            }
        }
        assert_eq!(ticks, 2000);

        for _ in 0..5 {
            assert_eq!(session.advance(&input), TickResult::Failed);
        }
        assert_eq!(fails.get(), 1);
        assert_eq!(completions.get(), 0);
    }

    #[test]
    fn test_terminal_session_stops_mutating() {
        let mut session = Session::new(
            SessionOptions::new(Difficulty::Easy),
            instant_win_level(),
        );
        session.advance(&TickInput::default());
        let frozen = session.frame();

        let input = TickInput {
            right: true,
            down: true,
            action_presses: 3,
            ..Default::default()
        };
        for _ in 0..20 {
            session.advance(&input);
        }
        assert_eq!(session.frame(), frozen);
    }

    #[test]
    fn test_completed_elapsed_is_sane() {
        let mut session = Session::new(
            SessionOptions::new(Difficulty::Easy),
            instant_win_level(),
        );
        match session.advance(&TickInput::default()) {
            TickResult::Completed(ms) => assert!(ms < 60_000),
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[test]
    fn test_frame_reads_are_idempotent() {
        let mut session = Session::new(SessionOptions::new(Difficulty::Hard), breach_arena());
        session.advance(&TickInput {
            right: true,
            ..Default::default()
        });
        assert_eq!(session.frame(), session.frame());
    }

    #[test]
    fn test_restart_starts_pristine() {
        let level = breach_arena();
        let mut session = Session::new(SessionOptions::new(Difficulty::Easy), level.clone());
        for _ in 0..100 {
            session.advance(&TickInput {
                right: true,
                ..Default::default()
            });
        }
        assert_ne!(session.frame().hazards, level.hazards);
        session.dispose();

        let fresh = Session::new(SessionOptions::new(Difficulty::Easy), level.clone());
        assert_eq!(fresh.frame().hazards, level.hazards);
        assert_eq!(fresh.frame().player.pos, level.start);
        assert_eq!(fresh.frame().stability, level.initial_stability);
    }
}
