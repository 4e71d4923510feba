use crate::io::{
    clifmt::{Color, FormattedExt},
    input::{Action, MouseButton},
    output::Surface,
    Rect, XY,
};
use crate::text;

/// A labelled push button.
///
/// Tracks its own hover state from mouse movement; reports activation (a left press inside its
/// rectangle) from [`Self::handle`].
#[derive(Clone, Debug)]
pub struct Button {
    pub rect: Rect,
    label: String,
    color: Color,
    hover: bool,
}

impl Button {
    pub fn new(rect: Rect, label: &str, color: Color) -> Self {
        Self {
            rect,
            label: label.into(),
            color,
            hover: false,
        }
    }

    /// Feed one input action. Returns `true` iff the button was activated by this action.
    pub fn handle(&mut self, action: &Action) -> bool {
        match action {
            Action::MouseMove { pos } => {
                self.hover = self.rect.contains(*pos);
                false
            }
            Action::MousePress {
                button: MouseButton::Left,
                pos,
            } => self.rect.contains(*pos),
            _ => false,
        }
    }

    pub fn render(&self, surface: &mut Surface) {
        surface.fill_bg(self.rect, self.color);
        let mid = self.rect.center();
        let x = mid.x().saturating_sub(self.label.chars().count() / 2);
        let label = if self.hover {
            text!(bold "{}"(self.label))
        } else {
            text!("{}"(self.label))
        };
        surface.write(
            XY(x.max(self.rect.pos.x()), mid.y()),
            label
                .into_iter()
                .map(|t| t.bg(self.color).white())
                .collect(),
        );
    }
}
