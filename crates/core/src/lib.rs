//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the snake rules, state management and food placement.
//! It has no dependencies on terminals, timing or I/O, which makes it:
//!
//! - **Deterministic**: the same seed and the same inputs replay the same game
//! - **Testable**: every rule is covered by unit tests next to the code
//! - **Portable**: usable from the terminal loop, benches or a headless driver
//! - **Allocation-free per tick**: body and occupancy buffers are sized once
//!
//! # Module Structure
//!
//! - [`config`]: grid size, timing and food sampling settings
//! - [`snake`]: head-first body with O(1) occupancy checks
//! - [`food`]: seeded food placement (rejection or exact sampling)
//! - [`game_state`]: the tick rules and the direction input mapper
//! - [`snapshot`]: the read-only view handed to renderers
//!
//! # Rules
//!
//! - The queued direction is committed at the start of each tick
//! - Leaving the grid or running into the body ends the run
//! - The tail cell may be entered on the same tick it is vacated
//! - Eating grows the snake by one and scores one point
//! - Every tenth point advances the (display-only) background index
//! - If no food cell can be found, the run ends
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, GameState};
//! use tui_snake_types::{Direction, GameAction};
//!
//! let mut game = GameState::new(&GameConfig::default().with_seed(7));
//! assert_eq!(game.snake().len(), 3);
//!
//! game.apply_action(GameAction::Turn(Direction::Up));
//! game.tick();
//!
//! assert!(game.running());
//! assert_eq!(game.direction(), Direction::Up);
//! ```

pub mod config;
pub mod food;
pub mod game_state;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, FoodSampling, GameConfig};
pub use food::FoodSpawner;
pub use game_state::{initial_layout, GameState, TickEvents};
pub use snake::Snake;
pub use snapshot::GameSnapshot;
