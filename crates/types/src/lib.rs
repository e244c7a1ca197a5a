//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! from the simulation core, the frame loop, input mapping and rendering alike.
//!
//! # Grid
//!
//! The default playfield is a 20x20 grid of cells indexed `0..GRID_SIZE` on
//! both axes, with `(0, 0)` in the top-left corner and `y` growing downwards.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 115 | Fixed simulation step (one cell of movement) |
//! | `MAX_FRAME_DELTA_MS` | 250 | Upper bound on elapsed time fed per frame |
//! | `FRAME_MS` | 16 | Target render cadence of the terminal loop |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Position, GRID_SIZE};
//!
//! let head = Position::new(8, 10);
//! assert_eq!(head.step(Direction::Right), Position::new(9, 10));
//!
//! assert_eq!(Direction::from_delta(0, -1), Some(Direction::Up));
//! assert_eq!(Direction::from_delta(1, 1), None);
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//!
//! assert!(Position::new(19, 0).in_bounds(GRID_SIZE));
//! assert!(!Position::new(-1, 0).in_bounds(GRID_SIZE));
//! ```

/// Default grid size in cells (20x20)
pub const GRID_SIZE: u8 = 20;

/// Smallest grid that fits the initial three-segment snake with room to turn
pub const MIN_GRID_SIZE: u8 = 8;

/// Largest supported grid
pub const MAX_GRID_SIZE: u8 = 64;

/// Fixed timestep interval in milliseconds
pub const TICK_MS: u32 = 115;

/// Frame deltas above this are clamped before reaching the accumulator
pub const MAX_FRAME_DELTA_MS: u32 = 250;

/// Target interval between rendered frames (~60 FPS)
pub const FRAME_MS: u32 = 16;

/// Length of the snake at the start of every run
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Points per level and per background milestone
pub const POINTS_PER_LEVEL: u32 = 10;

/// Number of background themes the milestone index cycles through
pub const BACKGROUND_COUNT: u8 = 5;


/// A grid cell coordinate.
///
/// Signed so that a candidate head one step past the edge is representable;
/// positions stored in the game state are always inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx as i16,
            y: self.y + dy as i16,
        }
    }

    /// Check if the position lies inside a `grid_size` x `grid_size` grid.
    pub fn in_bounds(self, grid_size: u8) -> bool {
        let g = grid_size as i16;
        self.x >= 0 && self.x < g && self.y >= 0 && self.y < g
    }

    /// Row-major cell index. Only meaningful for in-bounds positions.
    pub fn index(self, grid_size: u8) -> usize {
        (self.y as usize) * (grid_size as usize) + (self.x as usize)
    }

    /// Inverse of [`Position::index`].
    pub fn from_index(index: usize, grid_size: u8) -> Self {
        let g = grid_size as usize;
        Self {
            x: (index % g) as i16,
            y: (index / g) as i16,
        }
    }
}

/// Movement direction of the snake
///
/// Screen coordinates: `Up` is `(0, -1)`, `Down` is `(0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector `(dx, dy)`.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Map a vector back to a direction. Anything other than one of the four
    /// unit vectors yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::from_delta(-1, 0), Some(Direction::Left));
    /// assert_eq!(Direction::from_delta(0, 0), None);
    /// assert_eq!(Direction::from_delta(2, 0), None);
    /// ```
    pub fn from_delta(dx: i8, dy: i8) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Lowercase name, used as a log field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Player intents accepted by the game
///
/// These are the only inputs the simulation understands. Terminal keys,
/// scripted inputs and tests all speak in `GameAction`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Queue a direction change for the next tick
    Turn(Direction),
    /// Replace the current run with a fresh one
    Restart,
}

/// Why a run ended
///
/// All causes look the same to gameplay (the run stops, the score is final);
/// the distinction exists for overlays and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationCause {
    /// The head left the grid
    Wall,
    /// The head ran into the body
    SelfCollision,
    /// No free cell was found for the next food
    BoardFull,
}

impl TerminationCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminationCause::Wall => "wall",
            TerminationCause::SelfCollision => "self",
            TerminationCause::BoardFull => "board_full",
        }
    }
}

/// Discrete things that happened during a tick
///
/// Presentation layers (sound, pop text, background fades) subscribe to these
/// instead of being called from inside the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// The head moved onto the food cell
    FoodEaten { score: u32, at: Position },
    /// The score reached a multiple of [`POINTS_PER_LEVEL`]
    Milestone { background_index: u8, level: u32 },
    /// The run is over
    Terminated { cause: TerminationCause, score: u32 },
}

#[cfg(test)]
mod type_tests {
    use super::*;

    const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[test]
    fn test_delta_round_trips_through_from_delta() {
        for dir in ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(Direction::from_delta(dx, dy), Some(dir));
        }
    }

    #[test]
    fn test_opposite_is_negated_delta() {
        for dir in ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(dir.opposite().delta(), (-dx, -dy));
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_names_are_distinct() {
        let names: Vec<_> = ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(names, vec!["up", "down", "left", "right"]);
    }

    #[test]
    fn test_from_delta_rejects_non_unit_vectors() {
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(1, 1), None);
        assert_eq!(Direction::from_delta(-1, -1), None);
        assert_eq!(Direction::from_delta(2, 0), None);
    }

    #[test]
    fn test_position_bounds() {
        assert!(Position::new(0, 0).in_bounds(20));
        assert!(Position::new(19, 19).in_bounds(20));
        assert!(!Position::new(20, 0).in_bounds(20));
        assert!(!Position::new(0, -1).in_bounds(20));
    }

    #[test]
    fn test_position_index_round_trip() {
        let p = Position::new(7, 3);
        assert_eq!(p.index(20), 67);
        assert_eq!(Position::from_index(67, 20), p);
    }

    #[test]
    fn test_step_can_leave_grid() {
        let p = Position::new(0, 10).step(Direction::Left);
        assert_eq!(p, Position::new(-1, 10));
        assert!(!p.in_bounds(GRID_SIZE));
    }
}
