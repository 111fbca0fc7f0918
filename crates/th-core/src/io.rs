//! Player input and text output seams
//!
//! The game never touches stdin or the terminal directly. A front end
//! supplies an [`InputSource`] and an [`OutputWindow`]; tests use the
//! in-memory [`ScriptedInput`] and [`BufferedWindow`].

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::errors::GameError;

/// Display attribute attached to each line of output
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum TextColor {
    /// Ordinary narration
    #[default]
    Black,
    /// Refusals, errors and losses
    Red,
    /// Successful purchases, titles and wins
    Orange,
}

/// Source of player input, one line at a time
pub trait InputSource {
    /// Block until the next line is available.
    ///
    /// Returns `Ok(None)` once input is exhausted. The trailing newline is
    /// stripped; case is preserved.
    fn read_line(&mut self) -> Result<Option<String>, GameError>;
}

/// Destination for player-visible text
pub trait OutputWindow {
    /// Append a line of text with a display attribute
    fn add_text(&mut self, text: &str, color: TextColor);

    /// Clear everything shown so far
    fn clear(&mut self);
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn read_line(&mut self) -> Result<Option<String>, GameError> {
        (**self).read_line()
    }
}

impl<T: OutputWindow + ?Sized> OutputWindow for &mut T {
    fn add_text(&mut self, text: &str, color: TextColor) {
        (**self).add_text(text, color);
    }

    fn clear(&mut self) {
        (**self).clear();
    }
}

/// Input replayed from a fixed list of lines
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not consumed yet
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> Result<Option<String>, GameError> {
        Ok(self.lines.pop_front())
    }
}

/// Output kept in memory
///
/// `clear` only empties the visible screen; the full transcript is kept
/// in `history` so tests can inspect everything that was printed.
#[derive(Debug, Clone, Default)]
pub struct BufferedWindow {
    /// Lines since the last clear
    pub screen: Vec<(String, TextColor)>,
    /// Every line ever printed
    pub history: Vec<(String, TextColor)>,
    /// Number of times the window was cleared
    pub clears: usize,
}

impl BufferedWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any printed line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.history.iter().any(|(line, _)| line.contains(needle))
    }

    /// The most recently printed line
    pub fn last_line(&self) -> Option<&str> {
        self.history.last().map(|(line, _)| line.as_str())
    }

    /// Color of the most recently printed line
    pub fn last_color(&self) -> Option<TextColor> {
        self.history.last().map(|(_, color)| *color)
    }
}

impl OutputWindow for BufferedWindow {
    fn add_text(&mut self, text: &str, color: TextColor) {
        self.screen.push((text.to_string(), color));
        self.history.push((text.to_string(), color));
    }

    fn clear(&mut self) {
        self.screen.clear();
        self.clears += 1;
    }
}
