//! Blocking line input

use std::io::{self, BufRead, StdinLock};

use th_core::GameError;
use th_core::io::InputSource;

/// Reads one line at a time from any buffered reader
pub struct LineInput<R: BufRead> {
    reader: R,
}

impl LineInput<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn read_line(&mut self) -> Result<Option<String>, GameError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
