//! A small educational bakery game for the terminal.
//!
//! The player picks a recipe, gathers its ingredients from the pantry, kneads the dough, sets
//! the oven, and gets an explanation page when the bake succeeds — all against a five-minute
//! session countdown. The layers, from the bottom up:
//!
//! - [`io`] talks to the terminal: formatted cells, input actions, widgets, and the crossterm
//!   backend.
//! - [`recipes`] is the static catalog and the pure validation rules.
//! - [`screens`] are the game phases; each one renders the shared state and reports intent as
//!   commands.
//! - [`game`] owns the state, the screens, and the run loop that ties them to the IO system.

pub mod constants;
pub mod game;
pub mod io;
pub mod recipes;
pub mod screens;
pub mod timing;
mod util;
