//! Game state module - owns the authoritative snake simulation
//!
//! This module ties together the snake body, the food spawner and scoring. It
//! implements the per-tick movement rules and the input mapper that queues the
//! next direction.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::food::FoodSpawner;
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Events produced by a single tick. At most: food eaten, milestone, and a
/// board-full termination.
pub type TickEvents = ArrayVec<GameEvent, 3>;

/// Head-first segments of the starting snake for a `grid_size` board.
pub fn initial_layout(grid_size: u8) -> [Position; INITIAL_SNAKE_LEN] {
    let mid = (grid_size / 2) as i16;
    [
        Position::new(mid - 2, mid),
        Position::new(mid - 3, mid),
        Position::new(mid - 4, mid),
    ]
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid_size: u8,
    snake: Snake,
    /// Direction used by the last tick.
    direction: Direction,
    /// Direction the next tick will commit.
    pending: Direction,
    food: Position,
    spawner: FoodSpawner,
    score: u32,
    background_index: u8,
    running: bool,
    termination: Option<TerminationCause>,
    /// Monotonic run id (increments on restart).
    episode_id: u32,
    /// Ticks advanced in the current run.
    tick: u64,
}

impl GameState {
    /// Create a new run in the starting layout and place the first food.
    ///
    /// `config` must pass [`GameConfig::validate`]; a grid below
    /// `MIN_GRID_SIZE` cannot hold the starting snake.
    pub fn new(config: &GameConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "unvalidated config: {config:?}");
        let grid_size = config.grid_size;
        let mut state = Self {
            grid_size,
            snake: Snake::new(grid_size, &initial_layout(grid_size)),
            direction: Direction::Right,
            pending: Direction::Right,
            food: Position::default(),
            spawner: FoodSpawner::new(config.seed, config.food_sampling),
            score: 0,
            background_index: 0,
            running: true,
            termination: None,
            episode_id: 0,
            tick: 0,
        };
        state.place_food();
        state
    }

    /// Create a run from an explicit layout.
    ///
    /// Used to replay a known position; the food is taken as given rather
    /// than sampled.
    pub fn with_layout(
        config: &GameConfig,
        segments: &[Position],
        direction: Direction,
        food: Position,
    ) -> Self {
        debug_assert!(config.validate().is_ok(), "unvalidated config: {config:?}");
        Self {
            grid_size: config.grid_size,
            snake: Snake::new(config.grid_size, segments),
            direction,
            pending: direction,
            food,
            spawner: FoodSpawner::new(config.seed, config.food_sampling),
            score: 0,
            background_index: 0,
            running: true,
            termination: None,
            episode_id: 0,
            tick: 0,
        }
    }

    /// Replace the run with a fresh one, in place.
    ///
    /// The RNG stream continues, so a seeded session stays reproducible
    /// across restarts.
    pub fn restart(&mut self) {
        self.snake.reset(&initial_layout(self.grid_size));
        self.direction = Direction::Right;
        self.pending = Direction::Right;
        self.score = 0;
        self.background_index = 0;
        self.running = true;
        self.termination = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.tick = 0;
        self.place_food();
    }

    pub fn grid_size(&self) -> u8 {
        self.grid_size
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Display-only level, starting at 1.
    pub fn level(&self) -> u32 {
        self.score / POINTS_PER_LEVEL + 1
    }

    pub fn background_index(&self) -> u8 {
        self.background_index
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn game_over(&self) -> bool {
        !self.running
    }

    pub fn termination(&self) -> Option<TerminationCause> {
        self.termination
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid_size = self.grid_size;
        out.snake.clear();
        out.snake.extend(self.snake.segments());
        out.direction = self.direction;
        out.food = self.food;
        out.score = self.score;
        out.level = self.level();
        out.background_index = self.background_index;
        out.running = self.running;
        out.termination = self.termination;
        out.episode_id = self.episode_id;
        out.tick = self.tick;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Queue a direction from a raw `(dx, dy)` vector.
    ///
    /// Non-unit vectors are ignored.
    pub fn request_direction(&mut self, dx: i8, dy: i8) -> bool {
        match Direction::from_delta(dx, dy) {
            Some(dir) => self.turn(dir),
            None => false,
        }
    }

    /// Queue `dir` for the next tick.
    ///
    /// Rejected when the run is over or when `dir` reverses either the
    /// current or the already queued direction; checking both stops two quick
    /// presses inside one tick from turning the snake back into itself.
    pub fn turn(&mut self, dir: Direction) -> bool {
        if !self.running {
            return false;
        }
        if dir == self.direction.opposite() || dir == self.pending.opposite() {
            return false;
        }
        self.pending = dir;
        true
    }

    /// Apply a player action. Returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(dir) => self.turn(dir),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Advance the simulation by one cell.
    ///
    /// No-op once the run is over.
    pub fn tick(&mut self) -> TickEvents {
        let mut events = TickEvents::new();
        if !self.running {
            return events;
        }

        self.direction = self.pending;
        self.tick += 1;

        let new_head = self.snake.head().step(self.direction);
        let eating = new_head == self.food;

        if !new_head.in_bounds(self.grid_size) {
            self.terminate(TerminationCause::Wall, &mut events);
            return events;
        }
        if self.snake.would_collide(new_head, eating) {
            self.terminate(TerminationCause::SelfCollision, &mut events);
            return events;
        }

        self.snake.advance(new_head, eating);

        if eating {
            self.score += 1;
            events.push(GameEvent::FoodEaten {
                score: self.score,
                at: new_head,
            });

            if self.score % POINTS_PER_LEVEL == 0 {
                self.background_index = (self.background_index + 1) % BACKGROUND_COUNT;
                events.push(GameEvent::Milestone {
                    background_index: self.background_index,
                    level: self.level(),
                });
            }

            if !self.place_food() {
                events.push(GameEvent::Terminated {
                    cause: TerminationCause::BoardFull,
                    score: self.score,
                });
            }
        }

        events
    }

    /// Place new food; ends the run when the board is full.
    fn place_food(&mut self) -> bool {
        match self.spawner.spawn(&self.snake) {
            Some(food) => {
                self.food = food;
                true
            }
            None => {
                self.running = false;
                self.termination = Some(TerminationCause::BoardFull);
                false
            }
        }
    }

    fn terminate(&mut self, cause: TerminationCause, events: &mut TickEvents) {
        self.running = false;
        self.termination = Some(cause);
        events.push(GameEvent::Terminated {
            cause,
            score: self.score,
        });
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
