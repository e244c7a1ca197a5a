use crate::types::{Direction, Position, TerminationCause, GRID_SIZE};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub grid_size: u8,
    /// Head first.
    pub snake: Vec<Position>,
    pub direction: Direction,
    pub food: Position,
    pub score: u32,
    pub level: u32,
    pub background_index: u8,
    pub running: bool,
    pub termination: Option<TerminationCause>,
    pub episode_id: u32,
    pub tick: u64,
}

impl GameSnapshot {
    /// Reset to an empty board, keeping the `snake` allocation.
    pub fn clear(&mut self) {
        self.grid_size = GRID_SIZE;
        self.snake.clear();
        self.direction = Direction::Right;
        self.food = Position::default();
        self.score = 0;
        self.level = 1;
        self.background_index = 0;
        self.running = false;
        self.termination = None;
        self.episode_id = 0;
        self.tick = 0;
    }

    pub fn head(&self) -> Option<Position> {
        self.snake.first().copied()
    }

    pub fn game_over(&self) -> bool {
        !self.running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            snake: Vec::new(),
            direction: Direction::Right,
            food: Position::default(),
            score: 0,
            level: 1,
            background_index: 0,
            running: false,
            termination: None,
            episode_id: 0,
            tick: 0,
        }
    }
}
