//! th-ui: Terminal front end
//!
//! Colored line output through crossterm and blocking line input, plugged
//! into the game loop through the `th_core::io` traits.

pub mod display;
pub mod input;
pub mod window;

pub use input::LineInput;
pub use window::TerminalWindow;
