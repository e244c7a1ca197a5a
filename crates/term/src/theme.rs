//! Background themes and the fixed palette.
//!
//! The milestone counter in the game selects one of [`BACKGROUNDS`]; all other
//! colours are constant.

use crate::fb::Rgb;
use crate::types::BACKGROUND_COUNT;

/// One base colour per background theme, cycled by the milestone index.
pub const BACKGROUNDS: [Rgb; BACKGROUND_COUNT as usize] = [
    Rgb::new(42, 77, 143),
    Rgb::new(36, 93, 67),
    Rgb::new(128, 50, 50),
    Rgb::new(113, 68, 166),
    Rgb::new(31, 111, 139),
];

/// Translucent dark wash laid over the theme inside the board.
const BOARD_WASH: Rgb = Rgb::new(4, 10, 18);
const BOARD_WASH_ALPHA: u8 = 148;
const OUTER_SHADE_ALPHA: u8 = 170;

pub const HEAD: Rgb = Rgb::new(126, 240, 100);
pub const BODY: Rgb = Rgb::new(69, 198, 75);
pub const FOOD_BG: Rgb = Rgb::new(255, 244, 187);
pub const FOOD_FG: Rgb = Rgb::new(18, 18, 18);
pub const TEXT: Rgb = Rgb::new(220, 226, 235);
pub const MUTED: Rgb = Rgb::new(140, 150, 165);
pub const POP: Rgb = Rgb::new(255, 230, 120);
pub const BORDER: Rgb = Rgb::new(200, 210, 225);

/// Theme colour for `index`, wrapping out-of-range indices.
pub fn background(index: u8) -> Rgb {
    BACKGROUNDS[(index % BACKGROUND_COUNT) as usize]
}

/// Blend of two themes; `progress` 255 is fully `to`.
pub fn blended(from: u8, to: u8, progress: u8) -> Rgb {
    background(from).mix(background(to), progress)
}

/// Background inside the board for a theme colour.
pub fn board_bg(theme: Rgb) -> Rgb {
    theme.mix(BOARD_WASH, BOARD_WASH_ALPHA)
}

/// Background around the board for a theme colour.
pub fn outer_bg(theme: Rgb) -> Rgb {
    theme.mix(Rgb::new(0, 0, 0), OUTER_SHADE_ALPHA)
}

/// Faint grid dot colour on a board background.
pub fn grid_dot(board: Rgb) -> Rgb {
    board.mix(Rgb::new(210, 229, 255), 40)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_wraps() {
        assert_eq!(background(0), background(BACKGROUND_COUNT));
        assert_eq!(background(1), BACKGROUNDS[1]);
    }

    #[test]
    fn test_board_is_darker_than_theme() {
        for theme in BACKGROUNDS {
            let board = board_bg(theme);
            let sum = |c: Rgb| c.r as u16 + c.g as u16 + c.b as u16;
            assert!(sum(board) < sum(theme));
        }
    }

    #[test]
    fn test_blended_endpoints() {
        assert_eq!(blended(1, 2, 0), background(1));
        assert_eq!(blended(1, 2, 255), background(2));
    }
}
