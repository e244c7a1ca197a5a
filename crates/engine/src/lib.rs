//! Fixed-timestep driver for the snake simulation.
//!
//! The simulation speed is set by the tick interval alone: frames feed
//! elapsed time into an accumulator and whole ticks are drained from it, so
//! the snake moves at the same pace whether the terminal redraws at 30 or
//! 144 frames per second.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameConfig;
//! use tui_snake_engine::GameLoop;
//!
//! let config = GameConfig::default().with_seed(1);
//! let mut game_loop = GameLoop::new(&config);
//!
//! game_loop.frame(0, |_| {});
//! let report = game_loop.frame(240, |_| {});
//!
//! assert_eq!(report.ticks, 2);
//! assert_eq!(game_loop.clock().accumulator_ms(), 10);
//! ```

pub mod clock;
pub mod game_loop;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use clock::FixedStep;
pub use game_loop::{FrameReport, GameLoop};
