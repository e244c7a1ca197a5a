//! Terminal input module (engine-facing).
//!
//! This crate is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and provides a bounded queue that
//! carries actions from the event poll to the frame loop.

pub mod map;
pub mod queue;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
pub use queue::{InputQueue, INPUT_QUEUE_CAPACITY};
