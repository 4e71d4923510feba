use std::time::Duration;

use crate::{
    constants::{
        gameplay::{
            ERRORS_BEFORE_HELP, HELP_SECONDS, MINUTES_MAX, MINUTES_MIN, MINUTES_STEP,
            PEDAGOGY_DELAY_SECONDS, TEMP_MAX, TEMP_MIN, TEMP_STEP,
        },
        graphics::TITLE_ROW,
    },
    game::GameState,
    io::{
        clifmt::Color,
        input::{Action, Key},
        output::Surface,
        widgets::{Button, Counter, Modal},
        Rect, XY,
    },
    recipes,
    timing::Instant,
    text,
};

use super::{centered_x, write_centered, Command, Screen, ScreenId};

const CONTROLS_X: usize = 42;
const OVEN_POS: XY = XY(8, 7);

/// Set the oven and launch the bake. Failed bakes count toward a help window that opens the next
/// time the player comes back to try again.
pub struct CookingScreen {
    temp: Counter,
    minutes: Counter,
    launch: Button,
    /// Failed bakes since the last help window; survives trips through the result screen.
    attempts: u32,
    help_pending: bool,
    help: Option<Instant>,
}

impl CookingScreen {
    pub fn new() -> Self {
        Self {
            temp: Counter::new(
                XY(CONTROLS_X, 9),
                recipes::FALLBACK_TEMP,
                TEMP_MIN,
                TEMP_MAX,
                TEMP_STEP,
                "°C",
            ),
            minutes: Counter::new(
                XY(CONTROLS_X, 13),
                recipes::FALLBACK_MINUTES,
                MINUTES_MIN,
                MINUTES_MAX,
                MINUTES_STEP,
                "min",
            ),
            launch: Button::new(Rect::new(centered_x(24), 17, 24, 3), "Lancer la cuisson", Color::Red),
            attempts: 0,
            help_pending: false,
            help: None,
        }
    }

    fn launch_bake(&mut self, state: &mut GameState, cmds: &mut Vec<Command>) {
        let id = match &state.chosen_recipe {
            Some(id) => id.clone(),
            None => return,
        };
        let result = match recipes::validate_cooking(&id, self.temp.value(), self.minutes.value()) {
            Some(r) => r,
            None => return,
        };
        if result.success {
            self.attempts = 0;
            cmds.push(Command::StopTimer);
            cmds.push(Command::SchedulePedagogy(Duration::from_secs(
                PEDAGOGY_DELAY_SECONDS,
            )));
        } else {
            self.attempts += 1;
            if self.attempts >= ERRORS_BEFORE_HELP {
                self.help_pending = true;
                self.attempts = 0;
            }
        }
        state.cooking_result = Some(result);
        cmds.push(Command::SwitchTo(ScreenId::Result));
    }

    fn draw_oven(surface: &mut Surface) {
        let XY(x, y) = OVEN_POS;
        let art = [
            "#==================#",
            "#     F O U R      #",
            "#  +------------+  #",
            "#  |            |  #",
            "#  |            |  #",
            "#  +------------+  #",
            "#   (o)      (o)   #",
            "#==================#",
        ];
        for (i, line) in art.iter().enumerate() {
            surface.write(XY(x, y + i), text!(white "{}"(line)));
        }
        // a warm glow behind the door window
        surface.fill_bg(Rect::new(x + 4, y + 3, 12, 2), Color::Red);
    }
}

impl Default for CookingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for CookingScreen {
    fn on_enter(&mut self, state: &GameState) {
        let (dt, dm) = recipes::default_parameters(state.chosen_recipe.as_deref().unwrap_or(""));
        self.temp.set_value(state.oven_temperature.unwrap_or(dt));
        self.minutes.set_value(state.oven_minutes.unwrap_or(dm));
        self.help = if self.help_pending {
            self.help_pending = false;
            Some(Instant::now())
        } else {
            None
        };
    }

    fn input(&mut self, action: &Action, state: &mut GameState, cmds: &mut Vec<Command>) -> bool {
        if self.help.is_some() {
            if matches!(action, Action::KeyPress { key: Key::Escape }) {
                self.help = None;
                return true;
            }
            return false;
        }
        if self.temp.handle(action) {
            state.oven_temperature = Some(self.temp.value());
            return true;
        }
        if self.minutes.handle(action) {
            state.oven_minutes = Some(self.minutes.value());
            return true;
        }
        if self.launch.handle(action) {
            self.launch_bake(state, cmds);
            return true;
        }
        matches!(action, Action::MouseMove { .. })
    }

    fn update(&mut self, _state: &mut GameState, _cmds: &mut Vec<Command>) -> bool {
        if let Some(since) = self.help {
            if since.elapsed() >= Duration::from_secs(HELP_SECONDS) {
                self.help = None;
                return true;
            }
        }
        false
    }

    fn render(&mut self, state: &GameState, surface: &mut Surface) {
        let name = state.current_recipe().map(|r| r.name).unwrap_or("?");
        write_centered(surface, TITLE_ROW, text!(bold "Cuisson : ", bold bright_yellow "{}"(name)));
        write_centered(
            surface,
            TITLE_ROW + 2,
            text!("Choisissez la température et la durée, puis lancez la cuisson."),
        );
        Self::draw_oven(surface);
        surface.write(XY(CONTROLS_X, 8), text!(bold "Température du four"));
        self.temp.render(surface);
        surface.write(XY(CONTROLS_X, 12), text!(bold "Durée de cuisson"));
        self.minutes.render(surface);
        self.launch.render(surface);
        if self.help.is_some() {
            if let Some(r) = state.current_recipe() {
                let lines = vec![
                    "Pour une cuisson réussie :".to_string(),
                    String::new(),
                    format!("Température idéale : {} °C (± {} °C)", r.ideal_temp, r.temp_tolerance),
                    format!("Durée idéale : {} min (± {} min)", r.ideal_minutes, r.minutes_tolerance),
                    String::new(),
                    "Appuyez sur Échap pour fermer".to_string(),
                ];
                Modal::new("Un peu d'aide", lines).render(surface);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::input::MouseButton;
    use mock_instant::MockClock;

    fn state_for(recipe: &str) -> GameState {
        GameState {
            chosen_recipe: Some(recipe.into()),
            ..GameState::default()
        }
    }

    fn press(pos: XY) -> Action {
        Action::MousePress {
            button: MouseButton::Left,
            pos,
        }
    }

    fn launch(screen: &mut CookingScreen, state: &mut GameState) -> Vec<Command> {
        let mut cmds = vec![];
        let pos = screen.launch.rect.center();
        screen.input(&press(pos), state, &mut cmds);
        cmds
    }

    #[test]
    fn counters_seed_from_recipe_defaults() {
        let mut screen = CookingScreen::new();
        let state = state_for("pain");
        screen.on_enter(&state);
        assert_eq!(screen.temp.value(), 220);
        assert_eq!(screen.minutes.value(), 25);
    }

    #[test]
    fn counters_seed_from_prior_choice() {
        let mut screen = CookingScreen::new();
        let mut state = state_for("pain");
        state.oven_temperature = Some(150);
        state.oven_minutes = Some(10);
        screen.on_enter(&state);
        assert_eq!(screen.temp.value(), 150);
        assert_eq!(screen.minutes.value(), 10);
    }

    #[test]
    fn stepping_writes_back_to_state() {
        let mut screen = CookingScreen::new();
        let mut state = state_for("pain");
        screen.on_enter(&state);
        let mut cmds = vec![];
        let plus = press(XY(CONTROLS_X + 13, 9));
        assert!(screen.input(&plus, &mut state, &mut cmds));
        assert_eq!(state.oven_temperature, Some(230));
    }

    #[test]
    fn good_bake_stops_timer_and_books_pedagogy() {
        let mut screen = CookingScreen::new();
        let mut state = state_for("pain");
        screen.on_enter(&state);
        let cmds = launch(&mut screen, &mut state);
        assert_eq!(
            cmds,
            vec![
                Command::StopTimer,
                Command::SchedulePedagogy(Duration::from_secs(PEDAGOGY_DELAY_SECONDS)),
                Command::SwitchTo(ScreenId::Result),
            ]
        );
        assert!(state.cooking_result.as_ref().unwrap().success);
        assert_eq!(screen.attempts, 0);
    }

    #[test]
    fn bad_bake_just_shows_the_result() {
        let mut screen = CookingScreen::new();
        let mut state = state_for("pain");
        state.oven_temperature = Some(300);
        screen.on_enter(&state);
        let cmds = launch(&mut screen, &mut state);
        assert_eq!(cmds, vec![Command::SwitchTo(ScreenId::Result)]);
        assert!(!state.cooking_result.as_ref().unwrap().success);
        assert_eq!(screen.attempts, 1);
    }

    #[test]
    fn fifth_failure_opens_help_on_return() {
        let mut screen = CookingScreen::new();
        let mut state = state_for("pain");
        state.oven_temperature = Some(300);
        for _ in 0..ERRORS_BEFORE_HELP {
            screen.on_enter(&state);
            launch(&mut screen, &mut state);
        }
        assert_eq!(screen.attempts, 0);
        screen.on_enter(&state);
        assert!(screen.help.is_some());
        // consumed, not sticky
        screen.on_enter(&state);
        assert!(screen.help.is_none());
    }

    #[test]
    fn help_blocks_the_oven_until_dismissed() {
        let mut screen = CookingScreen::new();
        let mut state = state_for("pain");
        screen.on_enter(&state);
        screen.help = Some(Instant::now());
        assert!(launch(&mut screen, &mut state).is_empty());
        let mut cmds = vec![];
        screen.input(&Action::KeyPress { key: Key::Escape }, &mut state, &mut cmds);
        assert!(screen.help.is_none());
    }

    #[test]
    fn help_times_out() {
        let mut screen = CookingScreen::new();
        let mut state = state_for("pain");
        screen.help = Some(Instant::now());
        MockClock::advance(Duration::from_secs(HELP_SECONDS + 1));
        let mut cmds = vec![];
        assert!(screen.update(&mut state, &mut cmds));
        assert!(screen.help.is_none());
    }
}
