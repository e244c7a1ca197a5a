//! Frame driver: one [`GameState`] plus the [`FixedStep`] clock that paces it.
//!
//! A front end calls [`GameLoop::frame`] once per rendered frame with a
//! monotonic timestamp, then draws [`GameLoop::game`]. Input goes through
//! [`GameLoop::apply_action`] at any time between frames.

use tracing::{debug, info, trace};

use crate::clock::FixedStep;
use crate::core::{GameConfig, GameState};
use crate::types::{GameAction, GameEvent};

/// What happened during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Elapsed time fed to the accumulator, after clamping.
    pub elapsed_ms: u32,
    /// Ticks run this frame.
    pub ticks: u32,
}

#[derive(Debug, Clone)]
pub struct GameLoop {
    game: GameState,
    clock: FixedStep,
}

impl GameLoop {
    pub fn new(config: &GameConfig) -> Self {
        Self::from_state(config, GameState::new(config))
    }

    /// Drive an already built state, e.g. one created with
    /// [`GameState::with_layout`].
    pub fn from_state(config: &GameConfig, game: GameState) -> Self {
        Self {
            game,
            clock: FixedStep::new(config.tick_ms, config.max_frame_delta_ms),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn clock(&self) -> &FixedStep {
        &self.clock
    }

    /// Apply a player action. Restarting also resets the clock.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(dir) => {
                let accepted = self.game.turn(dir);
                trace!(direction = dir.as_str(), accepted, "turn_requested");
                accepted
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn restart(&mut self) {
        self.game.restart();
        self.clock.reset();
        info!(episode = self.game.episode_id(), "run_restarted");
    }

    /// Run one frame at monotonic time `now_ms`.
    pub fn frame<F: FnMut(GameEvent)>(&mut self, now_ms: u64, on_event: F) -> FrameReport {
        let elapsed = self.clock.frame_delta(now_ms);
        self.advance(elapsed, on_event)
    }

    /// Run one frame with an explicit elapsed time.
    ///
    /// Time only accumulates while the run is live; a finished run stays
    /// frozen until restarted.
    pub fn advance<F: FnMut(GameEvent)>(&mut self, elapsed_ms: u32, mut on_event: F) -> FrameReport {
        if !self.game.running() {
            return FrameReport::default();
        }

        self.clock.accumulate(elapsed_ms);

        let game = &mut self.game;
        let ticks = self.clock.drain(|| {
            for event in game.tick() {
                log_event(&event);
                on_event(event);
            }
            game.running()
        });

        FrameReport {
            elapsed_ms: elapsed_ms.min(self.clock.max_frame_delta_ms()),
            ticks,
        }
    }
}

fn log_event(event: &GameEvent) {
    match *event {
        GameEvent::FoodEaten { score, at } => {
            debug!(score, x = at.x, y = at.y, "food_eaten");
        }
        GameEvent::Milestone {
            background_index,
            level,
        } => {
            debug!(background_index, level, "milestone_reached");
        }
        GameEvent::Terminated { cause, score } => {
            info!(cause = cause.as_str(), score, "run_terminated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, Position, TerminationCause};

    fn p(x: i16, y: i16) -> Position {
        Position::new(x, y)
    }

    fn config() -> GameConfig {
        GameConfig::default().with_seed(99)
    }

    #[test]
    fn test_first_frame_runs_nothing() {
        let mut gl = GameLoop::new(&config());
        let report = gl.frame(50_000, |_| {});
        assert_eq!(report, FrameReport::default());
        assert_eq!(gl.game().tick_count(), 0);
    }

    #[test]
    fn test_frames_accumulate_into_ticks() {
        let mut gl = GameLoop::new(&config());
        let mut now = 0;
        gl.frame(now, |_| {});
        let mut ticks = 0;
        // 16ms frames for 1150ms => 10 ticks of 115ms (1152 with the last frame).
        for _ in 0..72 {
            now += 16;
            ticks += gl.frame(now, |_| {}).ticks;
        }
        assert_eq!(ticks, 10);
        assert_eq!(gl.game().tick_count(), 10);
    }

    #[test]
    fn test_long_stall_is_clamped() {
        let mut gl = GameLoop::new(&config());
        gl.frame(0, |_| {});
        let report = gl.frame(60_000, |_| {});
        assert_eq!(report.elapsed_ms, 250);
        assert_eq!(report.ticks, 2);
        assert_eq!(gl.clock().accumulator_ms(), 20);
    }

    #[test]
    fn test_events_reach_sink_and_draining_stops_on_termination() {
        let game = GameState::with_layout(
            &config(),
            &[p(1, 10), p(2, 10), p(3, 10)],
            Direction::Left,
            p(0, 10),
        );
        let mut gl = GameLoop::from_state(&config(), game);

        let mut events = Vec::new();
        let report = gl.advance(250, |e| events.push(e));

        // Tick 1 eats at (0,10), tick 2 hits the wall.
        assert_eq!(report.ticks, 2);
        assert!(matches!(events[0], GameEvent::FoodEaten { score: 1, .. }));
        assert_eq!(
            events.last(),
            Some(&GameEvent::Terminated {
                cause: TerminationCause::Wall,
                score: 1
            })
        );
        assert!(gl.game().game_over());
    }

    #[test]
    fn test_terminated_run_ignores_time() {
        let game = GameState::with_layout(
            &config(),
            &[p(0, 10), p(1, 10), p(2, 10)],
            Direction::Left,
            p(5, 5),
        );
        let mut gl = GameLoop::from_state(&config(), game);
        gl.advance(115, |_| {});
        assert!(gl.game().game_over());

        let before = gl.clock().accumulator_ms();
        let report = gl.advance(250, |_| {});
        assert_eq!(report.ticks, 0);
        assert_eq!(gl.clock().accumulator_ms(), before);
    }

    #[test]
    fn test_restart_resets_game_and_clock() {
        let game = GameState::with_layout(
            &config(),
            &[p(0, 10), p(1, 10), p(2, 10)],
            Direction::Left,
            p(5, 5),
        );
        let mut gl = GameLoop::from_state(&config(), game);
        gl.frame(0, |_| {});
        gl.frame(200, |_| {});
        assert!(gl.game().game_over());

        assert!(gl.apply_action(GameAction::Restart));
        assert!(gl.game().running());
        assert_eq!(gl.clock().accumulator_ms(), 0);
        // The first frame after a restart measures from itself.
        assert_eq!(gl.frame(10_000, |_| {}).ticks, 0);
    }

    #[test]
    fn test_turn_goes_through_input_mapper() {
        let mut gl = GameLoop::new(&config());
        assert!(!gl.apply_action(GameAction::Turn(Direction::Left)));
        assert!(gl.apply_action(GameAction::Turn(Direction::Down)));
        assert_eq!(gl.game().pending_direction(), Direction::Down);
    }
}
