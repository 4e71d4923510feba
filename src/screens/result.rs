use crate::{
    constants::graphics::TITLE_ROW,
    game::GameState,
    io::{
        clifmt::Color,
        input::Action,
        output::Surface,
        widgets::{placeholder_color, Button},
        Rect,
    },
    recipes::CookStatus,
    text,
};

use super::{centered_x, write_centered, Command, Screen, ScreenId};

const PRODUCT_W: usize = 16;
const PRODUCT_H: usize = 6;
const PRODUCT_Y: usize = 6;

fn product_color(status: CookStatus, recipe: Option<&str>) -> Color {
    match status {
        CookStatus::Burnt => Color::BrightBlack,
        CookStatus::Raw => Color::White,
        CookStatus::Success => recipe.map(placeholder_color).unwrap_or(Color::Green),
    }
}

/// Show how the bake went. A failed bake offers a retry straight back into the oven; a success
/// just lingers until the explanation page takes over.
pub struct ResultScreen {
    retry: Option<Button>,
}

impl ResultScreen {
    pub fn new() -> Self {
        Self { retry: None }
    }
}

impl Default for ResultScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ResultScreen {
    fn on_enter(&mut self, state: &GameState) {
        self.retry = state
            .cooking_result
            .as_ref()
            .filter(|r| !r.success)
            .map(|_| Button::new(Rect::new(centered_x(20), 18, 20, 3), "Réessayer", Color::Blue));
    }

    fn input(&mut self, action: &Action, _state: &mut GameState, cmds: &mut Vec<Command>) -> bool {
        if let Some(btn) = &mut self.retry {
            if btn.handle(action) {
                cmds.push(Command::SwitchTo(ScreenId::Cooking));
                return true;
            }
        }
        matches!(action, Action::MouseMove { .. })
    }

    fn update(&mut self, _state: &mut GameState, _cmds: &mut Vec<Command>) -> bool {
        false
    }

    fn render(&mut self, state: &GameState, surface: &mut Surface) {
        write_centered(surface, TITLE_ROW, text!(bold "Résultat de la cuisson"));
        let result = match &state.cooking_result {
            Some(r) => r,
            None => {
                write_centered(surface, 8, text!("Aucun résultat pour le moment."));
                return;
            }
        };

        let color = product_color(result.status, state.chosen_recipe.as_deref());
        surface.fill_bg(
            Rect::new(centered_x(PRODUCT_W), PRODUCT_Y, PRODUCT_W, PRODUCT_H),
            color,
        );
        if let Some(tile) = result.tile {
            write_centered(surface, PRODUCT_Y + PRODUCT_H, text!(bright_black "[{}]"(tile)));
        }

        if result.success {
            write_centered(surface, 14, text!(bold blue "{}"(result.message)));
            write_centered(surface, 15, text!("{}"(result.details)));
            write_centered(
                surface,
                17,
                text!("Les explications arrivent dans quelques secondes..."),
            );
        } else {
            write_centered(surface, 14, text!(bold bright_red "{}"(result.message)));
            write_centered(surface, 15, text!("{}"(result.details)));
            if let Some(btn) = &self.retry {
                btn.render(surface);
            }
        }
    }
}
