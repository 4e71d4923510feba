use crate::io::{
    clifmt::{Color, FormattedExt},
    input::{Action, MouseButton},
    output::Surface,
    Rect, XY,
};
use crate::text;

/// A selectable picture tile: a block of color standing in for the product and ingredient art,
/// with a caption underneath and a checkmark when selected.
///
/// The color block doubles as the missing-asset placeholder. There is no art to load in a
/// terminal, so a tile can never fail to render.
#[derive(Clone, Debug)]
pub struct Tile {
    pub rect: Rect,
    caption: String,
    color: Color,
    pub selected: bool,
    hover: bool,
}

impl Tile {
    pub fn new(rect: Rect, caption: &str, color: Color) -> Self {
        Self {
            rect,
            caption: caption.into(),
            color,
            selected: false,
            hover: false,
        }
    }

    /// Feed one input action. Returns `true` iff the tile was clicked.
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
        // art block above, caption on the bottom row
        let art = Rect {
            pos: self.rect.pos,
            size: XY(self.rect.size.x(), self.rect.size.y().saturating_sub(1)),
        };
        surface.fill_bg(art, self.color);
        if self.selected {
            surface.fill_bg(
                Rect::new(self.rect.pos.x(), self.rect.pos.y(), self.rect.size.x(), 1),
                Color::Green,
            );
            let check_x = self.rect.pos.x() + self.rect.size.x().saturating_sub(1);
            surface.write(
                XY(check_x, self.rect.pos.y()),
                text!(bold "v").into_iter().map(|t| t.on_green()).collect(),
            );
        }
        let caption_y = self.rect.pos.y() + self.rect.size.y().saturating_sub(1);
        let mid_x = self.rect.center().x();
        let x = mid_x
            .saturating_sub(self.caption.chars().count() / 2)
            .max(self.rect.pos.x());
        let caption = if self.hover || self.selected {
            text!(underline "{}"(self.caption))
        } else {
            text!("{}"(self.caption))
        };
        surface.write(XY(x, caption_y), caption);
    }
}

/// The stand-in color for a product or ingredient whose art this terminal can't show; everything
/// unrecognized comes out plain grey.
pub fn placeholder_color(name: &str) -> Color {
    match name {
        "pain" => Color::Yellow,
        "croissant" => Color::BrightYellow,
        "gateau" | "gâteau" => Color::Magenta,
        "farine" => Color::BrightWhite,
        "sucre" => Color::White,
        "beurre" => Color::BrightYellow,
        "œuf" | "oeuf" => Color::Yellow,
        "lait" => Color::BrightWhite,
        "levure" => Color::Yellow,
        "eau" => Color::BrightCyan,
        "sel" => Color::White,
        "chocolat" => Color::Red,
        "miel" => Color::BrightYellow,
        _ => Color::BrightBlack,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_toggles_nothing_by_itself() {
        // the owning screen decides what a click means; the tile only reports it
        let mut t = Tile::new(Rect::new(0, 0, 6, 4), "farine", placeholder_color("farine"));
        assert!(t.handle(&Action::MousePress {
            button: MouseButton::Left,
            pos: XY(3, 2),
        }));
        assert!(!t.selected);
    }

    #[test]
    fn unknown_name_gets_placeholder() {
        assert_eq!(placeholder_color("mystère"), Color::BrightBlack);
    }
}
