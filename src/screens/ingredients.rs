use std::time::Duration;

use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

use crate::{
    constants::{
        gameplay::{ERRORS_BEFORE_HELP, ERROR_FLASH_SECONDS, HELP_SECONDS},
        graphics::{INGREDIENT_COLUMNS, TITLE_ROW},
    },
    game::GameState,
    io::{
        clifmt::Color,
        input::{Action, Key},
        output::Surface,
        widgets::{placeholder_color, Button, Modal, Tile},
        Rect,
    },
    recipes,
    timing::Instant,
    text,
};

use super::{centered_x, write_centered, Command, Screen, ScreenId};

const TILE_W: usize = 16;
const TILE_H: usize = 4;
const GAP_X: usize = 2;
const GAP_Y: usize = 1;
const GRID_TOP: usize = 5;

fn grid_rects() -> Vec<Rect> {
    let x0 = centered_x(INGREDIENT_COLUMNS * TILE_W + (INGREDIENT_COLUMNS - 1) * GAP_X);
    recipes::ALL_INGREDIENTS
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let col = i % INGREDIENT_COLUMNS;
            let row = i / INGREDIENT_COLUMNS;
            Rect::new(
                x0 + col * (TILE_W + GAP_X),
                GRID_TOP + row * (TILE_H + GAP_Y),
                TILE_W,
                TILE_H,
            )
        })
        .collect()
}

/// Pick the ingredients for the chosen recipe. Wrong validations shuffle the pantry and count
/// toward the help window.
pub struct IngredientsScreen {
    tiles: Vec<(&'static str, Tile)>,
    rng: SmallRng,
    validate: Button,
    clear: Button,
    back: Button,
    /// The flashed error line and when it appeared.
    error: Option<(String, Instant)>,
    /// When the help window opened, if it is open.
    help: Option<Instant>,
}

impl IngredientsScreen {
    pub fn new() -> Self {
        let tiles = recipes::ALL_INGREDIENTS
            .iter()
            .zip(grid_rects())
            .map(|(id, rect)| (*id, Tile::new(rect, id, placeholder_color(id))))
            .collect();
        let buttons_y = GRID_TOP + 2 * TILE_H + GAP_Y + 2;
        Self {
            tiles,
            rng: SmallRng::from_entropy(),
            validate: Button::new(Rect::new(6, buttons_y, 26, 3), "Valider la sélection", Color::Green),
            clear: Button::new(Rect::new(37, buttons_y, 26, 3), "Réinitialiser", Color::Yellow),
            back: Button::new(Rect::new(68, buttons_y, 26, 3), "Nouvelle recette", Color::Blue),
            error: None,
            help: None,
        }
    }

    fn clear_selection(&mut self, state: &mut GameState) {
        state.selected_ingredients.clear();
        for (_, tile) in &mut self.tiles {
            tile.selected = false;
        }
    }

    /// Reassign the grid slots among the tiles at random, so the player can't click from memory.
    fn shuffle_tiles(&mut self) {
        let mut rects: Vec<_> = self.tiles.iter().map(|(_, t)| t.rect).collect();
        rects.shuffle(&mut self.rng);
        for ((_, tile), rect) in self.tiles.iter_mut().zip(rects) {
            tile.rect = rect;
        }
    }

    fn validate_selection(&mut self, state: &mut GameState, cmds: &mut Vec<Command>) {
        let id = match &state.chosen_recipe {
            Some(id) => id.clone(),
            None => return,
        };
        if recipes::validate_ingredients(&id, &state.selected_ingredients) {
            self.error = None;
            cmds.push(Command::SwitchTo(ScreenId::Kneading));
            return;
        }
        state.error_count += 1;
        self.error = Some((
            format!(
                "Ingrédients incorrects ! Tentative {}/{}",
                state.error_count, ERRORS_BEFORE_HELP
            ),
            Instant::now(),
        ));
        self.shuffle_tiles();
        self.clear_selection(state);
        if state.error_count >= ERRORS_BEFORE_HELP {
            self.help = Some(Instant::now());
            state.error_count = 0;
        }
    }
}

impl Default for IngredientsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for IngredientsScreen {
    fn on_enter(&mut self, state: &GameState) {
        self.help = None;
        self.error = None;
        // fresh layout, selections synced from the state
        for ((_, tile), rect) in self.tiles.iter_mut().zip(grid_rects()) {
            tile.rect = rect;
        }
        for (id, tile) in &mut self.tiles {
            tile.selected = state.selected_ingredients.contains(*id);
        }
    }

    fn input(&mut self, action: &Action, state: &mut GameState, cmds: &mut Vec<Command>) -> bool {
        if self.help.is_some() {
            if matches!(action, Action::KeyPress { key: Key::Escape }) {
                self.help = None;
                return true;
            }
            return false;
        }
        for (id, tile) in &mut self.tiles {
            if tile.handle(action) {
                if state.selected_ingredients.remove(*id) {
                    tile.selected = false;
                } else {
                    state.selected_ingredients.insert(id.to_string());
                    tile.selected = true;
                }
                return true;
            }
        }
        if self.validate.handle(action) {
            self.validate_selection(state, cmds);
            return true;
        }
        if self.clear.handle(action) {
            self.clear_selection(state);
            self.error = None;
            return true;
        }
        if self.back.handle(action) {
            cmds.push(Command::SwitchTo(ScreenId::Home));
            return true;
        }
        matches!(action, Action::MouseMove { .. })
    }

    fn update(&mut self, _state: &mut GameState, _cmds: &mut Vec<Command>) -> bool {
        let mut redraw = false;
        if let Some(since) = self.help {
            if since.elapsed() >= Duration::from_secs(HELP_SECONDS) {
                self.help = None;
            }
            // the countdown line changes every second anyway
            redraw = true;
        }
        if let Some((_, since)) = &self.error {
            if since.elapsed() >= Duration::from_secs(ERROR_FLASH_SECONDS) {
                self.error = None;
                redraw = true;
            }
        }
        redraw
    }

    fn render(&mut self, state: &GameState, surface: &mut Surface) {
        let name = state.current_recipe().map(|r| r.name).unwrap_or("?");
        write_centered(surface, TITLE_ROW, text!(bold "Ingrédients pour : ", bold bright_yellow "{}"(name)));
        write_centered(
            surface,
            TITLE_ROW + 2,
            text!("Sélectionnés : {} ingrédient(s)"(state.selected_ingredients.len())),
        );
        for (_, tile) in &self.tiles {
            tile.render(surface);
        }
        self.validate.render(surface);
        self.clear.render(surface);
        self.back.render(surface);
        if let Some((msg, _)) = &self.error {
            write_centered(surface, self.validate.rect.pos.y() + 4, text!(bold bright_red "{}"(msg)));
        }
        if let Some(since) = self.help {
            let left = HELP_SECONDS.saturating_sub(since.elapsed().as_secs());
            let mut lines = vec!["Voici les bons ingrédients :".to_string(), String::new()];
            if let Some(id) = &state.chosen_recipe {
                for ing in recipes::help_ingredients(id) {
                    lines.push(format!("• {ing}"));
                }
            }
            lines.push(String::new());
            lines.push(format!("Fermeture automatique dans {left} s"));
            lines.push("Appuyez sur Échap pour fermer".into());
            Modal::new("Un peu d'aide", lines).render(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{input::MouseButton, XY};
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

    fn click_tile(screen: &mut IngredientsScreen, state: &mut GameState, id: &str) {
        let pos = screen
            .tiles
            .iter()
            .find(|(tid, _)| *tid == id)
            .map(|(_, t)| t.rect.center())
            .unwrap();
        let mut cmds = vec![];
        screen.input(&press(pos), state, &mut cmds);
    }

    fn click_validate(
        screen: &mut IngredientsScreen,
        state: &mut GameState,
        cmds: &mut Vec<Command>,
    ) {
        let pos = screen.validate.rect.center();
        screen.input(&press(pos), state, cmds);
    }

    #[test]
    fn clicking_toggles_selection() {
        let mut screen = IngredientsScreen::new();
        let mut state = state_for("pain");
        click_tile(&mut screen, &mut state, "farine");
        assert!(state.selected_ingredients.contains("farine"));
        click_tile(&mut screen, &mut state, "farine");
        assert!(!state.selected_ingredients.contains("farine"));
    }

    #[test]
    fn correct_selection_moves_to_kneading() {
        let mut screen = IngredientsScreen::new();
        let mut state = state_for("pain");
        for id in ["farine", "eau", "sel", "levure"] {
            click_tile(&mut screen, &mut state, id);
        }
        let mut cmds = vec![];
        click_validate(&mut screen, &mut state, &mut cmds);
        assert_eq!(cmds, vec![Command::SwitchTo(ScreenId::Kneading)]);
        assert_eq!(state.error_count, 0);
    }

    #[test]
    fn wrong_selection_counts_shuffles_and_clears() {
        let mut screen = IngredientsScreen::new();
        let mut state = state_for("pain");
        click_tile(&mut screen, &mut state, "miel");
        let mut cmds = vec![];
        click_validate(&mut screen, &mut state, &mut cmds);
        assert!(cmds.is_empty());
        assert_eq!(state.error_count, 1);
        assert!(state.selected_ingredients.is_empty());
        let (msg, _) = screen.error.as_ref().unwrap();
        assert!(msg.contains("Tentative 1/5"));
        // same slots, possibly reordered
        let mut rects: Vec<_> = screen.tiles.iter().map(|(_, t)| t.rect).collect();
        rects.sort_by_key(|r| (r.pos.y(), r.pos.x()));
        let mut base = grid_rects();
        base.sort_by_key(|r| (r.pos.y(), r.pos.x()));
        assert_eq!(rects, base);
    }

    #[test]
    fn fifth_error_opens_help_and_resets_count() {
        let mut screen = IngredientsScreen::new();
        let mut state = state_for("pain");
        state.error_count = ERRORS_BEFORE_HELP - 1;
        let mut cmds = vec![];
        click_validate(&mut screen, &mut state, &mut cmds);
        assert!(screen.help.is_some());
        assert_eq!(state.error_count, 0);
    }

    #[test]
    fn help_swallows_input_until_escape() {
        let mut screen = IngredientsScreen::new();
        let mut state = state_for("pain");
        screen.help = Some(Instant::now());
        click_tile(&mut screen, &mut state, "farine");
        assert!(state.selected_ingredients.is_empty());
        let mut cmds = vec![];
        screen.input(
            &Action::KeyPress { key: Key::Escape },
            &mut state,
            &mut cmds,
        );
        assert!(screen.help.is_none());
    }

    #[test]
    fn help_closes_on_its_own() {
        let mut screen = IngredientsScreen::new();
        let mut state = state_for("pain");
        screen.help = Some(Instant::now());
        MockClock::advance(Duration::from_secs(HELP_SECONDS + 1));
        let mut cmds = vec![];
        screen.update(&mut state, &mut cmds);
        assert!(screen.help.is_none());
    }

    #[test]
    fn error_line_fades_after_a_moment() {
        let mut screen = IngredientsScreen::new();
        let mut state = state_for("pain");
        let mut cmds = vec![];
        click_validate(&mut screen, &mut state, &mut cmds);
        assert!(screen.error.is_some());
        MockClock::advance(Duration::from_secs(ERROR_FLASH_SECONDS + 1));
        assert!(screen.update(&mut state, &mut cmds));
        assert!(screen.error.is_none());
    }

    #[test]
    fn on_enter_syncs_tiles_with_state() {
        let mut screen = IngredientsScreen::new();
        let mut state = state_for("pain");
        state.selected_ingredients.insert("eau".into());
        screen.on_enter(&state);
        let eau = screen.tiles.iter().find(|(id, _)| *id == "eau").unwrap();
        assert!(eau.1.selected);
    }
}
