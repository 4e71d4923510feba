use crate::io::XY;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Key {
    Char(char),
    Escape,
    Enter,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    ScrollUp,
    ScrollDown,
}

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Action {
    /// A key was pressed.
    KeyPress { key: Key },
    /// A mouse button was pressed at the given cell. Scroll wheel motion arrives as presses of
    /// [`MouseButton::ScrollUp`] / [`MouseButton::ScrollDown`].
    MousePress { button: MouseButton, pos: XY },
    /// The mouse has moved to a new cell, button held or not.
    MouseMove { pos: XY },
    /// The display changed size and needs a full redraw.
    Resized,
    /// User requested the program end externally, e.g. the terminal closing.
    Closed,
    /// Some unknown input was received, with a description of what it was.
    Unknown(String),
    /// Trying to read input led to some kind of error, with a description.
    Error(String),
}

impl Action {
    /// Whether this is a pointer press, the only input the time-up page listens for.
    pub fn is_mouse_press(&self) -> bool {
        matches!(
            self,
            Action::MousePress {
                button: MouseButton::Left | MouseButton::Middle | MouseButton::Right,
                ..
            }
        )
    }
}
