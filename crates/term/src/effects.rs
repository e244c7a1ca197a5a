//! Presentation effects driven by game events.
//!
//! The simulation only reports what happened; this module turns those events
//! into short-lived visual state (the "+1" pop text and the background fade)
//! and a one-shot bell request. Timers count down in frame time and never
//! feed back into the game.

use crate::types::GameEvent;

/// How long the "+1" pop text stays visible.
pub const POP_MS: u32 = 600;

/// Duration of the background cross-fade after a milestone.
pub const FADE_MS: u32 = 400;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effects {
    pop_ms: u32,
    fade_ms: u32,
    /// Background shown before the current fade started.
    fade_from: u8,
    bell_enabled: bool,
    bell_pending: bool,
}

impl Default for Effects {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Effects {
    pub fn new(bell_enabled: bool) -> Self {
        Self {
            pop_ms: 0,
            fade_ms: 0,
            fade_from: 0,
            bell_enabled,
            bell_pending: false,
        }
    }

    pub fn on_event(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::FoodEaten { .. } => {
                self.pop_ms = POP_MS;
                self.bell_pending = self.bell_enabled;
            }
            GameEvent::Milestone {
                background_index, ..
            } => {
                self.fade_from = previous_background(background_index);
                self.fade_ms = FADE_MS;
            }
            GameEvent::Terminated { .. } => {
                self.pop_ms = 0;
            }
        }
    }

    /// Advance timers by one frame.
    pub fn update(&mut self, elapsed_ms: u32) {
        self.pop_ms = self.pop_ms.saturating_sub(elapsed_ms);
        self.fade_ms = self.fade_ms.saturating_sub(elapsed_ms);
    }

    /// Drop all running effects (used on restart).
    pub fn clear(&mut self) {
        self.pop_ms = 0;
        self.fade_ms = 0;
        self.bell_pending = false;
    }

    pub fn pop_visible(&self) -> bool {
        self.pop_ms > 0
    }

    /// Fade state as `(from_background, progress)` where progress is in
    /// 0..=255 (255 = fully on the new background).
    pub fn fade(&self) -> Option<(u8, u8)> {
        if self.fade_ms == 0 {
            return None;
        }
        let done = FADE_MS - self.fade_ms;
        Some((self.fade_from, ((done * 255) / FADE_MS) as u8))
    }

    /// Take the pending bell request.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }
}

fn previous_background(index: u8) -> u8 {
    let count = crate::types::BACKGROUND_COUNT;
    (index + count - 1) % count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Position, TerminationCause};

    fn eaten() -> GameEvent {
        GameEvent::FoodEaten {
            score: 1,
            at: Position::new(3, 3),
        }
    }

    #[test]
    fn test_food_starts_pop_and_bell() {
        let mut fx = Effects::new(true);
        fx.on_event(&eaten());
        assert!(fx.pop_visible());
        assert!(fx.take_bell());
        assert!(!fx.take_bell());
    }

    #[test]
    fn test_bell_disabled() {
        let mut fx = Effects::new(false);
        fx.on_event(&eaten());
        assert!(fx.pop_visible());
        assert!(!fx.take_bell());
    }

    #[test]
    fn test_pop_expires() {
        let mut fx = Effects::default();
        fx.on_event(&eaten());
        fx.update(POP_MS - 1);
        assert!(fx.pop_visible());
        fx.update(1);
        assert!(!fx.pop_visible());
    }

    #[test]
    fn test_milestone_fades_from_previous_background() {
        let mut fx = Effects::default();
        fx.on_event(&GameEvent::Milestone {
            background_index: 0,
            level: 6,
        });
        assert_eq!(fx.fade(), Some((4, 0)));
        fx.update(FADE_MS / 2);
        let (from, progress) = fx.fade().unwrap();
        assert_eq!(from, 4);
        assert!(progress > 100 && progress < 160);
        fx.update(FADE_MS);
        assert_eq!(fx.fade(), None);
    }

    #[test]
    fn test_termination_hides_pop() {
        let mut fx = Effects::default();
        fx.on_event(&eaten());
        fx.on_event(&GameEvent::Terminated {
            cause: TerminationCause::Wall,
            score: 1,
        });
        assert!(!fx.pop_visible());
    }
}
