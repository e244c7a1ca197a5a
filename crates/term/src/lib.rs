//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids
//! widget/layout libraries and renders into a framebuffer that is diffed and
//! flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and free of presentation concerns
//! - React to game events (pop text, background fades, bell) without the
//!   simulation knowing about them
//! - Keep grid cells roughly square (2 columns per cell)

pub mod effects;
pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod theme;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use effects::Effects;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
