use crate::io::{
    clifmt::{Color, FormattedExt},
    output::Surface,
    Rect, XY,
};
use crate::{text, text1};

/// A titled window of text lines centered on the display, over a dimmed backdrop. Used for the
/// ingredient and cooking help.
pub struct Modal {
    title: String,
    lines: Vec<String>,
}

impl Modal {
    pub fn new(title: &str, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }

    pub fn render(&self, surface: &mut Surface) {
        let size = surface.size();

        // wash out whatever is underneath
        for y in 0..size.y() {
            for x in 0..size.x() {
                surface[y][x].fmt.fg = Color::BrightBlack;
                surface[y][x].fmt.bg = Color::Default;
                surface[y][x].fmt.bold = false;
                surface[y][x].fmt.underline = false;
                surface[y][x].fmt.invert = false;
            }
        }

        let inner_w = self
            .lines
            .iter()
            .map(|l| l.chars().count())
            .chain([self.title.chars().count() + 2])
            .max()
            .unwrap_or(0);
        let w = (inner_w + 4).min(size.x());
        let h = (self.lines.len() + 4).min(size.y());
        let x0 = (size.x() - w) / 2;
        let y0 = (size.y() - h) / 2;

        surface.fill_bg(Rect::new(x0, y0, w, h), Color::White);
        let border = |s: &mut Surface, y: usize, l: char, m: char, r: char| {
            let mut row = String::with_capacity(w);
            row.push(l);
            row.extend(std::iter::repeat(m).take(w - 2));
            row.push(r);
            s.write(XY(x0, y), vec![text1!("{}"(row)).black().on_white()]);
        };
        border(surface, y0, '+', '-', '+');
        border(surface, y0 + h - 1, '+', '-', '+');
        for y in y0 + 1..y0 + h - 1 {
            surface.write(XY(x0, y), text!(black on_white "|"));
            surface.write(XY(x0 + w - 1, y), text!(black on_white "|"));
        }

        let title_x = x0 + (w.saturating_sub(self.title.chars().count())) / 2;
        surface.write(XY(title_x, y0 + 1), text!(bold black on_white "{}"(self.title)));

        for (i, line) in self.lines.iter().enumerate() {
            let y = y0 + 3 + i;
            if y >= y0 + h - 1 {
                break;
            }
            surface.write(XY(x0 + 2, y), text!(black on_white "{}"(line)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_draws_title_and_lines() {
        let mut s = Surface::new(XY(40, 12));
        Modal::new("Aide", vec!["ligne un".into(), "deux".into()]).render(&mut s);
        let all: String = s.rows().flatten().map(|c| c.ch).collect();
        assert!(all.contains("Aide"));
        assert!(all.contains("ligne un"));
        assert!(all.contains("deux"));
    }
}
