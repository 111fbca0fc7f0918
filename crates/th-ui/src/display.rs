//! Text colors

use crossterm::style::Color;
use th_core::io::TextColor;

/// Terminal color for a line of game text.
///
/// Plain narration keeps the terminal's own foreground so it stays
/// readable on both dark and light backgrounds.
pub fn text_color(color: TextColor) -> Option<Color> {
    match color {
        TextColor::Black => None,
        TextColor::Red => Some(Color::Red),
        TextColor::Orange => Some(Color::DarkYellow),
    }
}
