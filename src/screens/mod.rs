//! One module per game phase, plus the [`Screen`] contract they all implement.
//!
//! Screens exclusively handle IO: they take input actions, tick their own animations, and draw
//! the shared [`GameState`]. They signal intent upward only by mutating that state or by pushing
//! [`Command`]s, which the controller alone interprets; screens never reach into each other.
//!
//! The set of screens is closed, so dispatch is an exhaustive `enum_dispatch` match and a typo'd
//! transition target is a compile error rather than a silent no-op.

use std::time::Duration;

use crate::{
    game::GameState,
    io::{input::Action, output::Surface},
};

mod cooking;
mod home;
mod ingredients;
mod kneading;
mod pedagogy;
mod result;

pub use cooking::CookingScreen;
pub use home::HomeScreen;
pub use ingredients::IngredientsScreen;
pub use kneading::KneadingScreen;
pub use pedagogy::PedagogyScreen;
pub use result::ResultScreen;

/// Which game phase a screen belongs to. Doubles as the index into the controller's screen table.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ScreenId {
    #[default]
    Home,
    Ingredients,
    Kneading,
    Cooking,
    Result,
    Pedagogy,
}

impl ScreenId {
    pub const COUNT: usize = 6;

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// What a screen wants the controller to do. Pushed from `input`/`update`, applied by the
/// controller after the call returns, in order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Command {
    /// Make another screen active (and let it reset itself).
    SwitchTo(ScreenId),
    /// Start a play session for this recipe id; unknown ids are silently ignored.
    ChooseRecipe(String),
    /// Back to the home screen with a blank slate.
    ResetGame,
    /// Freeze the session countdown and record the final elapsed time.
    StopTimer,
    /// Book the automatic jump to the pedagogy page this far in the future.
    SchedulePedagogy(Duration),
}

/// A single phase of the game.
#[enum_dispatch::enum_dispatch]
pub trait Screen {
    /// Reset hook, invoked by the controller right after this screen becomes active.
    fn on_enter(&mut self, state: &GameState);

    /// Take a single input action. Returns `true` if a redraw is needed.
    fn input(&mut self, action: &Action, state: &mut GameState, cmds: &mut Vec<Command>) -> bool;

    /// Advance per-frame logic (animation clocks, auto-dismiss deadlines). Returns `true` if a
    /// redraw is needed.
    fn update(&mut self, state: &mut GameState, cmds: &mut Vec<Command>) -> bool;

    /// Draw the game state onto the surface.
    fn render(&mut self, state: &GameState, surface: &mut Surface);
}

#[enum_dispatch::enum_dispatch(Screen)]
pub enum Screens {
    HomeScreen,
    IngredientsScreen,
    KneadingScreen,
    CookingScreen,
    ResultScreen,
    PedagogyScreen,
}

/// The fixed logical width screens lay themselves out in; wider terminals get margins, narrower
/// ones clip at the right edge.
pub const LOGICAL_WIDTH: usize = 100;

/// X position that centers a run of `width` cells within the logical width.
pub(crate) fn centered_x(width: usize) -> usize {
    LOGICAL_WIDTH.saturating_sub(width) / 2
}

/// Write a line of text centered within the logical width.
pub(crate) fn write_centered(
    surface: &mut Surface,
    y: usize,
    text: Vec<crate::io::clifmt::Text>,
) {
    let width: usize = text.iter().map(|t| t.text.chars().count()).sum();
    surface.write(crate::io::XY(centered_x(width), y), text);
}
