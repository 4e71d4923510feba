//! The crossterm-backed terminal display: raw mode + alternate screen + mouse capture on the way
//! in, everything restored on the way out (including through panics).

use std::{io, io::Write, time::Duration};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event as ct,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    style::{
        Attribute, Color as CtColor, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use crate::io::{
    clifmt::{Cell, Color},
    input::{Action, Key, MouseButton},
    output::Surface,
    XY,
};

use super::IoSystem;

fn key4ct(code: ct::KeyCode) -> Option<Key> {
    let key = match code {
        ct::KeyCode::Char(c) => Key::Char(c),
        ct::KeyCode::Esc => Key::Escape,
        ct::KeyCode::Enter => Key::Enter,
        ct::KeyCode::Backspace => Key::Backspace,
        ct::KeyCode::Tab => Key::Tab,
        ct::KeyCode::Up => Key::Up,
        ct::KeyCode::Down => Key::Down,
        ct::KeyCode::Left => Key::Left,
        ct::KeyCode::Right => Key::Right,
        _ => return None,
    };
    Some(key)
}

fn btn4ct(btn: ct::MouseButton) -> MouseButton {
    match btn {
        ct::MouseButton::Left => MouseButton::Left,
        ct::MouseButton::Middle => MouseButton::Middle,
        ct::MouseButton::Right => MouseButton::Right,
    }
}

fn color4ct(c: Color) -> CtColor {
    match c {
        Color::Black => CtColor::Black,
        Color::BrightBlack => CtColor::DarkGrey,
        Color::Red => CtColor::DarkRed,
        Color::BrightRed => CtColor::Red,
        Color::Green => CtColor::DarkGreen,
        Color::BrightGreen => CtColor::Green,
        Color::Yellow => CtColor::DarkYellow,
        Color::BrightYellow => CtColor::Yellow,
        Color::Blue => CtColor::DarkBlue,
        Color::BrightBlue => CtColor::Blue,
        Color::Magenta => CtColor::DarkMagenta,
        Color::BrightMagenta => CtColor::Magenta,
        Color::Cyan => CtColor::DarkCyan,
        Color::BrightCyan => CtColor::Cyan,
        Color::White => CtColor::Grey,
        Color::BrightWhite => CtColor::White,
        Color::Default => CtColor::Reset,
    }
}

/// Translate one crossterm event into at most one [`Action`].
fn action4ct(ev: ct::Event) -> Option<Action> {
    match ev {
        ct::Event::Key(kev) => {
            if kev.kind == ct::KeyEventKind::Release {
                return None;
            }
            match key4ct(kev.code) {
                Some(key) => Some(Action::KeyPress { key }),
                None => Some(Action::Unknown(format!("key {:?}", kev.code))),
            }
        }
        ct::Event::Mouse(mev) => {
            let pos = XY(mev.column as usize, mev.row as usize);
            match mev.kind {
                ct::MouseEventKind::Down(btn) => Some(Action::MousePress {
                    button: btn4ct(btn),
                    pos,
                }),
                ct::MouseEventKind::Moved | ct::MouseEventKind::Drag(_) => {
                    Some(Action::MouseMove { pos })
                }
                ct::MouseEventKind::ScrollUp => Some(Action::MousePress {
                    button: MouseButton::ScrollUp,
                    pos,
                }),
                ct::MouseEventKind::ScrollDown => Some(Action::MousePress {
                    button: MouseButton::ScrollDown,
                    pos,
                }),
                _ => None,
            }
        }
        ct::Event::Resize(..) => Some(Action::Resized),
        _ => None,
    }
}

/// Emit one row of cells, changing attributes only where neighboring cells differ.
fn render_row(out: &mut Vec<u8>, row: &[Cell], y: usize) -> io::Result<()> {
    if row.is_empty() {
        return Ok(());
    }
    let mut ch_b = [0u8; 4];
    let mut fmt = row[0].fmt;
    crossterm::queue!(
        out,
        MoveTo(0, y as u16),
        ResetColor,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(color4ct(fmt.fg)),
        SetBackgroundColor(color4ct(fmt.bg)),
    )?;
    if fmt.bold {
        crossterm::queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if fmt.underline {
        crossterm::queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if fmt.invert {
        crossterm::queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    out.extend_from_slice(row[0].ch.encode_utf8(&mut ch_b).as_bytes());

    for cell in &row[1..] {
        if cell.fmt.fg != fmt.fg {
            crossterm::queue!(out, SetForegroundColor(color4ct(cell.fmt.fg)))?;
        }
        if cell.fmt.bg != fmt.bg {
            crossterm::queue!(out, SetBackgroundColor(color4ct(cell.fmt.bg)))?;
        }
        if cell.fmt.bold != fmt.bold {
            let attr = if cell.fmt.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            };
            crossterm::queue!(out, SetAttribute(attr))?;
        }
        if cell.fmt.underline != fmt.underline {
            let attr = if cell.fmt.underline {
                Attribute::Underlined
            } else {
                Attribute::NoUnderline
            };
            crossterm::queue!(out, SetAttribute(attr))?;
        }
        if cell.fmt.invert != fmt.invert {
            let attr = if cell.fmt.invert {
                Attribute::Reverse
            } else {
                Attribute::NoReverse
            };
            crossterm::queue!(out, SetAttribute(attr))?;
        }
        fmt = cell.fmt;
        out.extend_from_slice(cell.ch.encode_utf8(&mut ch_b).as_bytes());
    }
    Ok(())
}

/// [`IoSystem`] over an ANSI terminal.
pub struct AnsiIo;

impl AnsiIo {
    fn init_term() -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnableMouseCapture,
            EnterAlternateScreen,
            DisableLineWrap,
            Hide,
            Clear(ClearType::All),
        )
    }

    fn clean_term() -> io::Result<()> {
        execute!(
            io::stdout(),
            Clear(ClearType::All),
            Show,
            EnableLineWrap,
            LeaveAlternateScreen,
            DisableMouseCapture,
        )?;
        terminal::disable_raw_mode()
    }

    /// Take over the terminal. The previous panic hook is wrapped so a panic restores the
    /// terminal before printing.
    pub fn get() -> io::Result<Self> {
        Self::init_term()?;
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = Self::clean_term();
            default_hook(info);
        }));
        Ok(Self)
    }
}

impl IoSystem for AnsiIo {
    fn draw(&mut self, surface: &Surface) -> io::Result<()> {
        let mut out = vec![];
        for (y, row) in surface.rows().enumerate() {
            render_row(&mut out, row, y)?;
        }
        let mut stdout = io::stdout();
        stdout.write_all(&out)?;
        stdout.flush()
    }

    fn size(&self) -> XY {
        match terminal::size() {
            Ok((x, y)) => XY(x as usize, y as usize),
            Err(_) => XY(80, 24),
        }
    }

    fn poll_input(&mut self) -> io::Result<Option<Action>> {
        while ct::poll(Duration::ZERO)? {
            if let Some(action) = action4ct(ct::read()?) {
                return Ok(Some(action));
            }
        }
        Ok(None)
    }

    fn stop(&mut self) {
        let _ = Self::clean_term();
    }
}
