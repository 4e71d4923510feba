//! The game controller: one owned [`GameState`], the table of screens, and the loop that wires
//! the IO system to both.
//!
//! Screens never transition themselves; they push [`Command`]s and the controller applies them
//! here, in order. The session countdown and the booked pedagogy transition are also resolved
//! here, once per tick, so no screen needs to know about either.

use std::{collections::BTreeSet, io, time::Duration};

use crate::{
    constants::gameplay::SESSION_SECONDS,
    io::{
        clifmt::Color,
        input::Action,
        output::Surface,
        sys::IoSystem,
        Rect, XY,
    },
    recipes::{self, CookResult, Recipe},
    screens::{
        Command, CookingScreen, HomeScreen, IngredientsScreen, KneadingScreen, PedagogyScreen,
        ResultScreen, Screen, ScreenId, Screens,
    },
    text,
    timing::{Instant, Timer},
};

/// Everything the screens share. One instance, owned by [`Game`]; screens get a borrow for
/// exactly as long as one call.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct GameState {
    pub active_screen: ScreenId,
    pub chosen_recipe: Option<String>,
    pub selected_ingredients: BTreeSet<String>,
    /// Oven settings, remembered across screens once the player has touched the controls.
    pub oven_temperature: Option<i32>,
    pub oven_minutes: Option<i32>,
    /// Wrong ingredient validations since the last help window.
    pub error_count: u32,
    pub cooking_result: Option<CookResult>,
    /// When the booked jump to the pedagogy page fires, if one is booked.
    pub pedagogy_deadline: Option<Instant>,
    /// Once true, the time-up page holds the display until a click resets the game.
    pub time_up: bool,
    pub timer_started_at: Option<Instant>,
    /// Elapsed play time frozen by [`Self::stop_timer`], for the pedagogy report.
    pub final_elapsed_seconds: Option<u64>,
}

impl GameState {
    /// Seconds left in the session. The full budget when no session is running; never negative.
    pub fn remaining_time(&self) -> u64 {
        match self.timer_started_at {
            Some(started) => SESSION_SECONDS.saturating_sub(started.elapsed().as_secs()),
            None => SESSION_SECONDS,
        }
    }

    pub fn start_timer(&mut self) {
        self.timer_started_at = Some(Instant::now());
        self.final_elapsed_seconds = None;
        self.time_up = false;
    }

    /// Freeze the countdown and remember how long the session took. Does nothing if the timer
    /// isn't running, so stopping twice is harmless.
    pub fn stop_timer(&mut self) {
        if let Some(started) = self.timer_started_at.take() {
            self.final_elapsed_seconds = Some(started.elapsed().as_secs());
        }
    }

    /// Seconds of play so far: the frozen value once the timer has stopped, live until then.
    pub fn elapsed_seconds(&self) -> u64 {
        if let Some(done) = self.final_elapsed_seconds {
            return done;
        }
        self.timer_started_at
            .map(|started| started.elapsed().as_secs())
            .unwrap_or(0)
    }

    pub fn current_recipe(&self) -> Option<&'static Recipe> {
        self.chosen_recipe.as_deref().and_then(recipes::get)
    }
}

/// What the controller wants the run loop to do after handling something.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Response {
    Nothing,
    Redraw,
}

/// The whole game: state, screens, and the rules that connect them.
pub struct Game {
    pub state: GameState,
    screens: [Screens; ScreenId::COUNT],
}

impl Game {
    pub fn new() -> Self {
        Self {
            state: GameState::default(),
            // indexed by ScreenId
            screens: [
                HomeScreen::new().into(),
                IngredientsScreen::new().into(),
                KneadingScreen::new().into(),
                CookingScreen::new().into(),
                ResultScreen::new().into(),
                PedagogyScreen::new().into(),
            ],
        }
    }

    /// Make `id` the active screen and let it reset itself against the current state.
    pub fn switch_screen(&mut self, id: ScreenId) {
        self.state.active_screen = id;
        self.screens[id.index()].on_enter(&self.state);
    }

    /// Start a session for the given recipe: clean slate, fresh countdown, on to the pantry.
    /// Unknown ids are silently ignored.
    pub fn choose_recipe(&mut self, id: &str) {
        if recipes::get(id).is_none() {
            return;
        }
        self.state.chosen_recipe = Some(id.to_string());
        self.state.selected_ingredients.clear();
        self.state.error_count = 0;
        self.state.cooking_result = None;
        self.state.pedagogy_deadline = None;
        self.state.start_timer();
        self.switch_screen(ScreenId::Ingredients);
    }

    /// Back to the home screen with everything forgotten.
    pub fn reset_game(&mut self) {
        self.state = GameState::default();
        self.switch_screen(ScreenId::Home);
    }

    pub fn schedule_pedagogy(&mut self, delay: Duration) {
        self.state.pedagogy_deadline = Some(Instant::now() + delay);
    }

    fn apply(&mut self, cmds: Vec<Command>) -> bool {
        let any = !cmds.is_empty();
        for cmd in cmds {
            match cmd {
                Command::SwitchTo(id) => self.switch_screen(id),
                Command::ChooseRecipe(id) => self.choose_recipe(&id),
                Command::ResetGame => self.reset_game(),
                Command::StopTimer => self.state.stop_timer(),
                Command::SchedulePedagogy(delay) => self.schedule_pedagogy(delay),
            }
        }
        any
    }

    /// Feed one input action to the active screen, or to the time-up page if it's showing. The
    /// time-up page listens for exactly one thing: a click, which starts over.
    pub fn input(&mut self, action: &Action) -> Response {
        if self.state.time_up {
            return if action.is_mouse_press() {
                self.reset_game();
                Response::Redraw
            } else {
                Response::Nothing
            };
        }
        let mut cmds = vec![];
        let idx = self.state.active_screen.index();
        let redraw = self.screens[idx].input(action, &mut self.state, &mut cmds);
        if self.apply(cmds) || redraw {
            Response::Redraw
        } else {
            Response::Nothing
        }
    }

    /// One logic tick: screen animation, then the booked pedagogy transition, then the
    /// countdown. The booking fires first so a session that ends at the buzzer still lands on
    /// the pedagogy page underneath the time-up one.
    pub fn update(&mut self) -> Response {
        let mut redraw = false;
        if !self.state.time_up {
            let mut cmds = vec![];
            let idx = self.state.active_screen.index();
            redraw |= self.screens[idx].update(&mut self.state, &mut cmds);
            redraw |= self.apply(cmds);

            if let Some(deadline) = self.state.pedagogy_deadline {
                if Instant::now() >= deadline {
                    self.state.pedagogy_deadline = None;
                    self.switch_screen(ScreenId::Pedagogy);
                    redraw = true;
                }
            }
            if self.state.timer_started_at.is_some() && self.state.remaining_time() == 0 {
                self.state.timer_started_at = None;
                self.state.time_up = true;
                redraw = true;
            }
        }
        if redraw {
            Response::Redraw
        } else {
            Response::Nothing
        }
    }

    fn render_time_up(&self, surface: &mut Surface) {
        let size = surface.size();
        let y0 = size.y().saturating_sub(9) / 2;
        let x0 = size.x().saturating_sub(64) / 2;
        surface.fill_bg(Rect::new(x0, y0, 64.min(size.x()), 9), Color::Red);
        surface.write_centered(y0 + 1, text!(bold on_red bright_white "Ooups !"));
        surface.write_centered(y0 + 3, text!(on_red bright_white "Le temps est écoulé !"));
        surface.write_centered(
            y0 + 4,
            text!(on_red bright_white "La boulangerie ferme ses portes pour aujourd'hui."),
        );
        surface.write_centered(y0 + 6, text!(bold on_red bright_white "[ Recommencer ]"));
        surface.write_centered(
            y0 + 7,
            text!(on_red bright_white "(cliquez n'importe où)"),
        );
    }

    /// Draw the whole frame: active screen (or the time-up page over everything), plus the
    /// countdown in the top-right corner while a session is running.
    pub fn render(&mut self, surface: &mut Surface) {
        surface.clear();
        if self.state.time_up {
            self.render_time_up(surface);
            return;
        }
        let idx = self.state.active_screen.index();
        self.screens[idx].render(&self.state, surface);
        if self.state.timer_started_at.is_some() {
            let rem = self.state.remaining_time();
            let clock = format!("{:02}:{:02}", rem / 60, rem % 60);
            let x = surface.size().x().saturating_sub(clock.len() + 1);
            let styled = if rem <= 30 {
                text!(bold bright_red "{}"(clock))
            } else {
                text!(bold "{}"(clock))
            };
            surface.write(XY(x, 0), styled);
        }
    }

    /// Run the game against an IO system until the player closes it.
    pub fn run(&mut self, io: &mut dyn IoSystem) -> io::Result<()> {
        let mut surface = Surface::new(io.size());
        let mut frame = Timer::new(1.0 / 60.0);
        let mut tainted = true;
        let mut last_remaining = self.state.remaining_time();
        loop {
            while let Some(action) = io.poll_input()? {
                match action {
                    Action::Closed => return Ok(()),
                    Action::Resized => tainted = true,
                    Action::Error(msg) => {
                        return Err(io::Error::new(io::ErrorKind::Other, msg));
                    }
                    other => {
                        if self.input(&other) == Response::Redraw {
                            tainted = true;
                        }
                    }
                }
            }
            if frame.tick_ready() {
                if self.update() == Response::Redraw {
                    tainted = true;
                }
                let rem = self.state.remaining_time();
                if self.state.timer_started_at.is_some() && rem != last_remaining {
                    last_remaining = rem;
                    tainted = true;
                }
                if io.size() != surface.size() {
                    surface.resize(io.size());
                    tainted = true;
                }
                if tainted {
                    self.render(&mut surface);
                    io.draw(&surface)?;
                    tainted = false;
                }
            }
            std::thread::sleep(frame.remaining().min(Duration::from_millis(2)));
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::gameplay::PEDAGOGY_DELAY_SECONDS,
        io::input::{Key, MouseButton},
    };
    use mock_instant::MockClock;

    const SEC: Duration = Duration::from_secs(1);

    fn click() -> Action {
        Action::MousePress {
            button: MouseButton::Left,
            pos: XY(0, 0),
        }
    }

    #[test]
    fn choosing_a_recipe_starts_a_full_session() {
        let mut game = Game::new();
        game.choose_recipe("pain");
        assert_eq!(game.state.active_screen, ScreenId::Ingredients);
        assert_eq!(game.state.chosen_recipe.as_deref(), Some("pain"));
        assert_eq!(game.state.remaining_time(), SESSION_SECONDS);
    }

    #[test]
    fn unknown_recipes_are_ignored() {
        let mut game = Game::new();
        game.choose_recipe("tarte");
        assert_eq!(game.state.active_screen, ScreenId::Home);
        assert!(game.state.chosen_recipe.is_none());
        assert!(game.state.timer_started_at.is_none());
    }

    #[test]
    fn countdown_ticks_down_and_stops_at_zero() {
        let mut game = Game::new();
        game.choose_recipe("pain");
        MockClock::advance(10 * SEC);
        assert_eq!(game.state.remaining_time(), SESSION_SECONDS - 10);
        MockClock::advance(10_000 * SEC);
        assert_eq!(game.state.remaining_time(), 0);
    }

    #[test]
    fn time_up_is_terminal_until_a_click() {
        let mut game = Game::new();
        game.choose_recipe("pain");
        MockClock::advance(Duration::from_secs(SESSION_SECONDS + 1));
        assert_eq!(game.update(), Response::Redraw);
        assert!(game.state.time_up);
        assert!(game.state.timer_started_at.is_none());

        // keys and further ticks change nothing
        assert_eq!(game.input(&Action::KeyPress { key: Key::Enter }), Response::Nothing);
        assert_eq!(game.update(), Response::Nothing);
        assert!(game.state.time_up);

        // one click resets everything
        assert_eq!(game.input(&click()), Response::Redraw);
        assert!(!game.state.time_up);
        assert_eq!(game.state.active_screen, ScreenId::Home);
        assert_eq!(game.state.remaining_time(), SESSION_SECONDS);
        assert!(game.state.chosen_recipe.is_none());
    }

    #[test]
    fn stopping_the_timer_freezes_elapsed_time() {
        let mut game = Game::new();
        game.choose_recipe("pain");
        MockClock::advance(5 * SEC);
        game.state.stop_timer();
        assert_eq!(game.state.final_elapsed_seconds, Some(5));
        MockClock::advance(50 * SEC);
        assert_eq!(game.state.elapsed_seconds(), 5);
        // stopping again is a no-op
        game.state.stop_timer();
        assert_eq!(game.state.final_elapsed_seconds, Some(5));
    }

    #[test]
    fn booked_pedagogy_fires_before_the_buzzer_is_checked() {
        let mut game = Game::new();
        game.choose_recipe("pain");
        game.schedule_pedagogy(Duration::from_secs(SESSION_SECONDS + 1));
        MockClock::advance(Duration::from_secs(SESSION_SECONDS + 1));
        game.update();
        // both happened in the same tick: the pedagogy page is active under the time-up page
        assert_eq!(game.state.active_screen, ScreenId::Pedagogy);
        assert!(game.state.time_up);
        assert!(game.state.pedagogy_deadline.is_none());
    }

    #[test]
    fn successful_bake_lands_on_the_pedagogy_page() {
        let mut game = Game::new();
        game.choose_recipe("pain");
        game.apply(vec![
            Command::StopTimer,
            Command::SchedulePedagogy(Duration::from_secs(PEDAGOGY_DELAY_SECONDS)),
            Command::SwitchTo(ScreenId::Result),
        ]);
        assert_eq!(game.state.active_screen, ScreenId::Result);
        MockClock::advance(Duration::from_secs(PEDAGOGY_DELAY_SECONDS));
        game.update();
        assert_eq!(game.state.active_screen, ScreenId::Pedagogy);
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut game = Game::new();
        game.choose_recipe("pain");
        game.state.error_count = 3;
        game.state.oven_temperature = Some(260);
        game.reset_game();
        assert_eq!(game.state, GameState::default());
    }

    #[test]
    fn countdown_shows_in_the_corner() {
        let mut game = Game::new();
        game.choose_recipe("pain");
        let mut surface = Surface::new(XY(100, 28));
        game.render(&mut surface);
        let top: String = surface[0].iter().map(|c| c.ch).collect();
        assert!(top.contains("05:00"));
    }

    #[test]
    fn time_up_page_replaces_everything() {
        let mut game = Game::new();
        game.choose_recipe("pain");
        MockClock::advance(Duration::from_secs(SESSION_SECONDS + 1));
        game.update();
        let mut surface = Surface::new(XY(100, 28));
        game.render(&mut surface);
        let all: String = surface.rows().flatten().map(|c| c.ch).collect();
        assert!(all.contains("Le temps est écoulé !"));
        assert!(all.contains("Recommencer"));
        assert!(!all.contains("05:00"));
    }
}
