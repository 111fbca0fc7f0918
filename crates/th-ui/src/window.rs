//! Output window backed by a terminal

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use th_core::io::{OutputWindow, TextColor};
use tracing::warn;

use crate::display::text_color;

/// Writes each line of game text to a terminal, colored by its attribute
pub struct TerminalWindow<W: Write> {
    out: W,
}

impl TerminalWindow<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalWindow<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, text: &str, color: TextColor) -> io::Result<()> {
        match text_color(color) {
            Some(fg) => queue!(
                self.out,
                SetForegroundColor(fg),
                Print(text),
                ResetColor,
                Print("\n")
            )?,
            None => queue!(self.out, Print(text), Print("\n"))?,
        }
        self.out.flush()
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()
    }
}

impl<W: Write> OutputWindow for TerminalWindow<W> {
    fn add_text(&mut self, text: &str, color: TextColor) {
        if let Err(e) = self.write_line(text, color) {
            warn!("Failed to write to terminal: {}", e);
        }
    }

    fn clear(&mut self) {
        if let Err(e) = self.clear_screen() {
            warn!("Failed to clear terminal: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(window: TerminalWindow<Vec<u8>>) -> String {
        String::from_utf8(window.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_line() {
        let mut window = TerminalWindow::new(Vec::new());
        window.add_text("What's your next move? ", TextColor::Black);
        assert_eq!(written(window), "What's your next move? \n");
    }

    #[test]
    fn test_colored_line_is_reset() {
        let mut window = TerminalWindow::new(Vec::new());
        window.add_text("You lose!", TextColor::Red);
        let out = written(window);
        assert!(out.starts_with("\x1b["));
        assert!(out.contains("You lose!"));
        // ResetColor
        assert!(out.ends_with("\x1b[0m\n"));
    }

    #[test]
    fn test_clear_moves_home() {
        let mut window = TerminalWindow::new(Vec::new());
        window.clear();
        let out = written(window);
        assert!(out.contains("\x1b[2J"));
        assert!(out.contains("\x1b[1;1H"));
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn test_write_errors_do_not_panic() {
        let mut window = TerminalWindow::new(Broken);
        window.add_text("anyone there?", TextColor::Orange);
        window.clear();
    }
}
