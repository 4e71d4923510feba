use crate::io::{output::Surface, XY};
use crate::util;

/// Ancillary data a [`Textbox`] reports back after rendering, for scrollbars and scroll clamping.
pub struct TextboxData {
    /// How many total lines there were, after word wrapping.
    pub lines: usize,
    /// How many lines of the viewport the textbox occupied.
    pub height: usize,
    /// How far down from the top the displayed text started.
    pub scroll: usize,
}

impl TextboxData {
    const EMPTY: Self = Self {
        lines: 0,
        height: 0,
        scroll: 0,
    };
}

/// A column of word-wrapped text written into a rectangle of the surface, with vertical scroll.
///
/// Meant to be built fresh every frame. Each [`Text`] chunk is one source line; chunks wider than
/// the box wrap on whitespace and keep their formatting.
///
/// [`Text`]: crate::io::clifmt::Text
pub struct Textbox<'a> {
    surface: &'a mut Surface,
    chunks: Vec<crate::io::clifmt::Text>,
    pos: XY,
    width: Option<usize>,
    height: Option<usize>,
    scroll: usize,
}

impl<'a> Textbox<'a> {
    pub fn new(surface: &'a mut Surface, text: Vec<crate::io::clifmt::Text>) -> Self {
        Self {
            surface,
            chunks: text,
            pos: XY(0, 0),
            width: None,
            height: None,
            scroll: 0,
        }
    }

    util::setters! {
        pos(x: usize, y: usize) => pos = XY(x, y),
        width(w: usize) => width = Some(w),
        height(h: usize) => height = Some(h),
        scroll(amt: usize) => scroll = amt,
    }

    pub fn render(self) -> TextboxData {
        let size = self.surface.size();
        let XY(x, y) = self.pos;
        let width = self.width.unwrap_or(size.x().saturating_sub(x));
        let height = self.height.unwrap_or(size.y().saturating_sub(y));
        if width == 0 || height == 0 {
            return TextboxData::EMPTY;
        }

        // wrap every chunk into (text, format) lines
        let mut lines = vec![];
        for chunk in &self.chunks {
            for para in chunk.text.split('\n') {
                if para.chars().count() <= width {
                    lines.push(chunk.with_text(para.into()));
                    continue;
                }
                let mut cur = String::new();
                for word in para.split_whitespace() {
                    let need = if cur.is_empty() {
                        word.chars().count()
                    } else {
                        cur.chars().count() + 1 + word.chars().count()
                    };
                    if need > width && !cur.is_empty() {
                        lines.push(chunk.with_text(std::mem::take(&mut cur)));
                        cur = word.into();
                    } else {
                        if !cur.is_empty() {
                            cur.push(' ');
                        }
                        cur.push_str(word);
                    }
                }
                lines.push(chunk.with_text(cur));
            }
        }

        let total = lines.len();
        let scroll = self.scroll.min(total.saturating_sub(1));
        let mut shown = 0;
        for (i, line) in lines.into_iter().skip(scroll).enumerate() {
            if i >= height {
                break;
            }
            self.surface.write(XY(x, y + i), vec![line]);
            shown += 1;
        }

        TextboxData {
            lines: total,
            height: shown,
            scroll,
        }
    }
}
