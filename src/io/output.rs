//! The abstract render target. Screens draw onto a [`Surface`] every frame; a
//! [`sys::IoSystem`][super::sys::IoSystem] then pushes it to the real display.

use std::ops;

pub use super::clifmt::{Cell, Color, Format, Formatted, FormattedExt, Text};

use super::XY;

/// An owned grid of cells for one frame of output.
///
/// The name follows the thing it models: the drawing surface handed to every screen's render
/// method.
pub struct Surface {
    cells: Vec<Cell>,
    size: XY,
}

impl Surface {
    pub fn new(size: XY) -> Self {
        let mut res = Self {
            cells: vec![],
            size: XY(0, 0),
        };
        res.resize(size);
        res
    }

    pub fn size(&self) -> XY {
        self.size
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks panics on 0; a zero-width surface has no cells, so no rows either
        self.cells.chunks(self.size.x().max(1))
    }

    /// Reset every cell to blank, keeping the size.
    pub fn clear(&mut self) {
        self.resize(self.size)
    }

    pub fn resize(&mut self, size: XY) {
        self.cells.truncate(0);
        self.cells.resize(size.x() * size.y(), Cell::BLANK);
        self.size = size;
    }

    /// Write formatted runs starting at `pos`, continuing rightwards. Clipped at the right edge.
    pub fn write(&mut self, pos: XY, text: Vec<Text>) {
        let XY(mut x, y) = pos;
        if y >= self.size.y() {
            return;
        }
        for chunk in text {
            for ch in chunk.text.chars() {
                if x >= self.size.x() {
                    return;
                }
                self[y][x] = Cell::of(ch).fmt_of(&chunk);
                x += 1;
            }
        }
    }

    /// Write runs so their combined width is centered on the given row.
    pub fn write_centered(&mut self, y: usize, text: Vec<Text>) {
        let width: usize = text.iter().map(|t| t.text.chars().count()).sum();
        let x = (self.size.x().saturating_sub(width)) / 2;
        self.write(XY(x, y), text);
    }

    /// Paint the background color of a rectangle without touching the characters.
    pub fn fill_bg(&mut self, rect: super::Rect, bg: Color) {
        for y in rect.pos.y()..(rect.pos.y() + rect.size.y()).min(self.size.y()) {
            for x in rect.pos.x()..(rect.pos.x() + rect.size.x()).min(self.size.x()) {
                self[y][x].fmt.bg = bg;
            }
        }
    }
}

impl ops::Index<usize> for Surface {
    type Output = [Cell];
    fn index(&self, row: usize) -> &Self::Output {
        let start = row * self.size.x();
        &self.cells[start..start + self.size.x()]
    }
}

impl ops::IndexMut<usize> for Surface {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        let start = row * self.size.x();
        &mut self.cells[start..start + self.size.x()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::Rect;
    use crate::text;

    /// Collect one row as a plain string, for render assertions.
    pub fn row_string(surface: &Surface, y: usize) -> String {
        surface[y].iter().map(|c| c.ch).collect()
    }

    #[test]
    fn zero_sized_surface_has_no_rows() {
        assert_eq!(Surface::new(XY(0, 0)).rows().count(), 0);
        assert_eq!(Surface::new(XY(0, 5)).rows().count(), 0);
        assert_eq!(Surface::new(XY(5, 0)).rows().count(), 0);
    }

    #[test]
    fn write_places_text() {
        let mut s = Surface::new(XY(10, 3));
        s.write(XY(2, 1), text!("hi"));
        assert_eq!(row_string(&s, 1), "  hi      ");
    }

    #[test]
    fn write_clips_at_right_edge() {
        let mut s = Surface::new(XY(5, 1));
        s.write(XY(3, 0), text!("long"));
        assert_eq!(row_string(&s, 0), "   lo");
    }

    #[test]
    fn write_centered_centers() {
        let mut s = Surface::new(XY(10, 1));
        s.write_centered(0, text!("abcd"));
        assert_eq!(row_string(&s, 0), "   abcd   ");
    }

    #[test]
    fn fill_bg_sets_only_background() {
        let mut s = Surface::new(XY(4, 2));
        s.write(XY(0, 0), text!("xy"));
        s.fill_bg(Rect::new(0, 0, 2, 1), Color::Red);
        assert_eq!(s[0][0].ch, 'x');
        assert_eq!(s[0][0].fmt.bg, Color::Red);
        assert_eq!(s[0][2].fmt.bg, Color::Default);
    }
}
