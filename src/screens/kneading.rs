use crate::{
    constants::{
        gameplay::{KNEAD_REST_SECONDS, KNEAD_SECONDS},
        graphics::TITLE_ROW,
    },
    game::GameState,
    io::{clifmt::Color, input::Action, output::Surface, Rect, XY},
    timing::Instant,
    text,
};

use super::{centered_x, write_centered, Command, Screen, ScreenId};

const BAR_W: usize = 40;
const BAR_Y: usize = 15;
const DOUGH_Y: usize = 8;

/// The kneading interlude: a few seconds of dough animation, then on to the oven. No input, the
/// pacing is the point.
pub struct KneadingScreen {
    started: Option<Instant>,
    advanced: bool,
}

impl KneadingScreen {
    pub fn new() -> Self {
        Self {
            started: None,
            advanced: false,
        }
    }

    fn elapsed(&self) -> f32 {
        self.started
            .map(|s| s.elapsed().as_secs_f32())
            .unwrap_or(0.0)
    }
}

impl Default for KneadingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for KneadingScreen {
    fn on_enter(&mut self, _state: &GameState) {
        self.started = Some(Instant::now());
        self.advanced = false;
    }

    fn input(&mut self, _action: &Action, _state: &mut GameState, _cmds: &mut Vec<Command>) -> bool {
        false
    }

    fn update(&mut self, _state: &mut GameState, cmds: &mut Vec<Command>) -> bool {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
        if !self.advanced && self.elapsed() >= KNEAD_SECONDS + KNEAD_REST_SECONDS {
            self.advanced = true;
            cmds.push(Command::SwitchTo(ScreenId::Cooking));
        }
        // always animating
        true
    }

    fn render(&mut self, state: &GameState, surface: &mut Surface) {
        let name = state.current_recipe().map(|r| r.name).unwrap_or("?");
        write_centered(surface, TITLE_ROW, text!(bold "Préparation : ", bold bright_yellow "{}"(name)));

        let elapsed = self.elapsed();
        let kneading = elapsed < KNEAD_SECONDS;
        if kneading {
            write_centered(surface, TITLE_ROW + 2, text!("Pétrissage de la pâte..."));
        } else {
            write_centered(surface, TITLE_ROW + 2, text!(bold bright_green "La pâte est prête !"));
        }

        // the dough rocks back and forth while it's being worked
        let sway = if kneading {
            ((elapsed * 3.0).sin() * 4.0) as isize
        } else {
            0
        };
        let x = (centered_x(10) as isize + sway).max(0) as usize;
        for (i, line) in [" .-~~~~-. ", "(  pâte  )", " `-....-' "].iter().enumerate() {
            surface.write(XY(x, DOUGH_Y + i), text!(bright_yellow "{}"(line)));
        }

        let pct = (elapsed / KNEAD_SECONDS).min(1.0);
        let filled = (pct * BAR_W as f32) as usize;
        let x0 = centered_x(BAR_W);
        surface.fill_bg(Rect::new(x0, BAR_Y, BAR_W, 1), Color::BrightBlack);
        surface.fill_bg(Rect::new(x0, BAR_Y, filled, 1), Color::Green);
        write_centered(surface, BAR_Y + 1, text!("{:.0} %"(pct * 100.0)));
    }
}
