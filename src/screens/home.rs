use crate::{
    constants::graphics::TITLE_ROW,
    game::GameState,
    io::{
        input::Action,
        output::Surface,
        widgets::{placeholder_color, Tile},
        Rect,
    },
    recipes, text,
};

use super::{centered_x, write_centered, Command, Screen};

const TILE_W: usize = 20;
const TILE_H: usize = 6;
const TILE_GAP: usize = 6;

/// The landing page: pick one of the recipes on offer.
pub struct HomeScreen {
    tiles: Vec<(&'static str, Tile)>,
}

impl HomeScreen {
    pub fn new() -> Self {
        let total = recipes::RECIPE_ORDER.len() * TILE_W
            + (recipes::RECIPE_ORDER.len() - 1) * TILE_GAP;
        let x0 = centered_x(total);
        let tiles = recipes::RECIPE_ORDER
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let caption = recipes::get(id).map(|r| r.name).unwrap_or(id);
                let rect = Rect::new(x0 + i * (TILE_W + TILE_GAP), 9, TILE_W, TILE_H);
                (*id, Tile::new(rect, caption, placeholder_color(id)))
            })
            .collect();
        Self { tiles }
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for HomeScreen {
    fn on_enter(&mut self, _state: &GameState) {}

    fn input(&mut self, action: &Action, _state: &mut GameState, cmds: &mut Vec<Command>) -> bool {
        for (id, tile) in &mut self.tiles {
            if tile.handle(action) {
                cmds.push(Command::ChooseRecipe(id.to_string()));
                return true;
            }
        }
        matches!(action, Action::MouseMove { .. })
    }

    fn update(&mut self, _state: &mut GameState, _cmds: &mut Vec<Command>) -> bool {
        false
    }

    fn render(&mut self, _state: &GameState, surface: &mut Surface) {
        write_centered(surface, TITLE_ROW, text!(bold bright_yellow "La Boulangerie"));
        write_centered(surface, TITLE_ROW + 2, text!("Bienvenue dans votre fournil !"));
        write_centered(surface, 6, text!(bold "Choisissez une recette :"));
        for (_, tile) in &self.tiles {
            tile.render(surface);
        }
        write_centered(
            surface,
            18,
            text!(bright_black "Cliquez sur une recette pour commencer. Vous avez 5 minutes !"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{input::MouseButton, XY};

    fn press(pos: XY) -> Action {
        Action::MousePress {
            button: MouseButton::Left,
            pos,
        }
    }

    #[test]
    fn clicking_a_tile_chooses_its_recipe() {
        let mut screen = HomeScreen::new();
        let mut state = GameState::default();
        let mut cmds = vec![];
        let pos = screen.tiles[0].1.rect.center();
        assert!(screen.input(&press(pos), &mut state, &mut cmds));
        assert_eq!(cmds, vec![Command::ChooseRecipe("pain".into())]);
    }

    #[test]
    fn clicking_empty_space_does_nothing() {
        let mut screen = HomeScreen::new();
        let mut state = GameState::default();
        let mut cmds = vec![];
        assert!(!screen.input(&press(XY(0, 0)), &mut state, &mut cmds));
        assert!(cmds.is_empty());
    }
}
