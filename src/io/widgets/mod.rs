//! The interactive building blocks screens are made of: push buttons, selectable tiles, bounded
//! counters, modal help windows and a scrolling textbox.
//!
//! Widgets are owned by the screen that shows them and live across frames (so hover/selection
//! state sticks), but they're stateless per frame otherwise: feed them [`Action`]s, then render.
//!
//! [`Action`]: crate::io::input::Action

mod button;
mod counter;
mod modal;
mod textbox;
mod tile;

pub use button::Button;
pub use counter::Counter;
pub use modal::Modal;
pub use textbox::{Textbox, TextboxData};
pub use tile::{placeholder_color, Tile};
