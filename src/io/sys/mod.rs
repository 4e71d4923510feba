//! Adapters between the abstract [`Surface`]/[`Action`] world and a real display. One backend:
//! ANSI terminals via crossterm.

use std::io;

use super::{input::Action, output::Surface, XY};

pub mod ansi;

/// An input/output system. The output is called a "display" to distinguish it from the
/// [`Surface`] that gets drawn onto it.
pub trait IoSystem {
    /// Actually render a [`Surface`] to the display.
    fn draw(&mut self, surface: &Surface) -> io::Result<()>;

    /// Get the size of the display, in characters.
    fn size(&self) -> XY;

    /// If the next user input is available, return it. Never blocks.
    fn poll_input(&mut self) -> io::Result<Option<Action>>;

    /// Dispose of any resources the system is holding. Always the last method called.
    fn stop(&mut self);
}
