//! Game configuration
//!
//! Every knob defaults to the matching constant in `tui_snake_types`, so
//! `GameConfig::default()` is the standard 20x20 game at 115ms per step.

use thiserror::Error;

use crate::types::{GRID_SIZE, MAX_FRAME_DELTA_MS, MAX_GRID_SIZE, MIN_GRID_SIZE, TICK_MS};

/// How the next food cell is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoodSampling {
    /// Draw random cells and retry on the snake, at most `grid_size²` draws.
    ///
    /// Only approximately uniform, and may give up while free cells remain
    /// on a crowded board.
    #[default]
    Rejection,
    /// Draw uniformly over the free cells.
    Exact,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size {0} is outside the supported range {min}..={max}", min = MIN_GRID_SIZE, max = MAX_GRID_SIZE)]
    GridSize(u8),
    #[error("tick interval must be at least 1ms")]
    ZeroTick,
    #[error("frame delta clamp must be at least 1ms")]
    ZeroFrameClamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_size: u8,
    pub tick_ms: u32,
    pub max_frame_delta_ms: u32,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub food_sampling: FoodSampling,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            tick_ms: TICK_MS,
            max_frame_delta_ms: MAX_FRAME_DELTA_MS,
            seed: None,
            food_sampling: FoodSampling::Rejection,
        }
    }
}

impl GameConfig {
    pub fn with_grid_size(mut self, grid_size: u8) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_tick_ms(mut self, tick_ms: u32) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    pub fn with_max_frame_delta_ms(mut self, max_frame_delta_ms: u32) -> Self {
        self.max_frame_delta_ms = max_frame_delta_ms;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_food_sampling(mut self, food_sampling: FoodSampling) -> Self {
        self.food_sampling = food_sampling;
        self
    }

    /// Total number of cells on the board.
    pub fn cell_count(&self) -> usize {
        (self.grid_size as usize) * (self.grid_size as usize)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if self.max_frame_delta_ms == 0 {
            return Err(ConfigError::ZeroFrameClamp);
        }
        Ok(())
    }
}
