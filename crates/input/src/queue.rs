//! Bounded action queue between the event poll and the frame loop.
//!
//! Keys are read whenever the terminal has them; the loop drains the queue
//! once per frame, before ticks run. Direction requests therefore reach the
//! game only between ticks, and the game's own reversal check sees them in
//! arrival order.

use arrayvec::ArrayVec;

use crate::types::GameAction;

pub const INPUT_QUEUE_CAPACITY: usize = 16;

#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    actions: ArrayVec<GameAction, INPUT_QUEUE_CAPACITY>,
    dropped: u32,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action. When full the new action is dropped and `false` is
    /// returned.
    pub fn push(&mut self, action: GameAction) -> bool {
        if self.actions.try_push(action).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            return false;
        }
        true
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Actions dropped because the queue was full.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Take all queued actions in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = GameAction> + '_ {
        self.actions.drain(..)
    }
}
