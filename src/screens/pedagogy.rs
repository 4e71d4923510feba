use crate::{
    constants::graphics::TITLE_ROW,
    game::GameState,
    io::{
        clifmt::{Color, Text},
        input::{Action, Key, MouseButton},
        output::Surface,
        widgets::{Button, Textbox},
        Rect, XY,
    },
    recipes, text, text1,
};

use super::{centered_x, write_centered, Command, Screen};

const COL_W: usize = 80;
const VIEW_TOP: usize = 4;
const VIEW_ROWS: usize = 16;
const BUTTONS_Y: usize = VIEW_TOP + VIEW_ROWS + 2;

/// The explanation page shown after a successful bake: what each ingredient did, why the oven
/// settings worked, and how the session went. Scrollable, with two exits.
pub struct PedagogyScreen {
    lines: Vec<String>,
    scroll: usize,
    /// Wrapped line count reported by the last render; the scroll clamp works against this.
    wrapped: usize,
    redo: Button,
    menu: Button,
}

fn build_report(state: &GameState) -> Vec<String> {
    let recipe = match state.current_recipe() {
        Some(r) => r,
        None => return vec!["Aucune recette terminée pour le moment.".into()],
    };
    let mut lines = vec![
        format!("Bravo ! Votre {} est une réussite.", recipe.name),
        String::new(),
        "Les ingrédients et leur rôle :".to_string(),
    ];
    for ing in recipe.required {
        let mark = if state.selected_ingredients.contains(*ing) {
            "(bien sélectionné)"
        } else {
            "(non sélectionné)"
        };
        lines.push(format!("• {ing} {mark} : {}", recipes::ingredient_role(ing)));
    }
    lines.push(String::new());
    lines.push("La cuisson :".into());
    lines.push(format!(
        "• Température idéale : {} °C (tolérance ± {} °C).",
        recipe.ideal_temp, recipe.temp_tolerance
    ));
    lines.push(format!(
        "• Durée idéale : {} min (tolérance ± {} min).",
        recipe.ideal_minutes, recipe.minutes_tolerance
    ));
    if let (Some(t), Some(m)) = (state.oven_temperature, state.oven_minutes) {
        lines.push(format!("• Votre réglage : {t} °C pendant {m} min."));
    }
    if let Some(result) = &state.cooking_result {
        lines.push(String::new());
        lines.push("Pourquoi ce résultat :".into());
        lines.push(format!("• {}", result.message));
        lines.push(format!("• {}", result.details));
    }
    lines.push(String::new());
    lines.push("Votre partie :".into());
    let secs = state.elapsed_seconds();
    lines.push(format!("• Temps utilisé : {} min {:02} s.", secs / 60, secs % 60));
    lines.push(String::new());
    lines.push(
        "En résumé : les bons ingrédients, bien dosés et bien cuits, font la réussite.".into(),
    );
    lines.push("Astuce : chaque four est un peu différent, c'est pour cela qu'il y a des tolérances.".into());
    lines
}

impl PedagogyScreen {
    pub fn new() -> Self {
        Self {
            lines: vec![],
            scroll: 0,
            wrapped: 0,
            redo: Button::new(Rect::new(20, BUTTONS_Y, 26, 3), "Refaire la recette", Color::Green),
            menu: Button::new(Rect::new(54, BUTTONS_Y, 26, 3), "Menu principal", Color::Blue),
        }
    }

    fn max_scroll(&self) -> usize {
        self.wrapped.saturating_sub(VIEW_ROWS)
    }

    fn scroll_by(&mut self, delta: isize) -> bool {
        let new = if delta < 0 {
            self.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            (self.scroll + delta as usize).min(self.max_scroll())
        };
        if new != self.scroll {
            self.scroll = new;
            true
        } else {
            false
        }
    }
}

impl Default for PedagogyScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for PedagogyScreen {
    fn on_enter(&mut self, state: &GameState) {
        self.lines = build_report(state);
        self.scroll = 0;
        // refined by the first render once wrapping is known
        self.wrapped = self.lines.len();
    }

    fn input(&mut self, action: &Action, state: &mut GameState, cmds: &mut Vec<Command>) -> bool {
        match action {
            Action::MousePress {
                button: MouseButton::ScrollUp,
                ..
            }
            | Action::KeyPress { key: Key::Up } => return self.scroll_by(-1),
            Action::MousePress {
                button: MouseButton::ScrollDown,
                ..
            }
            | Action::KeyPress { key: Key::Down } => return self.scroll_by(1),
            _ => {}
        }
        if self.redo.handle(action) {
            if let Some(id) = &state.chosen_recipe {
                cmds.push(Command::ChooseRecipe(id.clone()));
            }
            return true;
        }
        if self.menu.handle(action) {
            cmds.push(Command::ResetGame);
            return true;
        }
        matches!(action, Action::MouseMove { .. })
    }

    fn update(&mut self, _state: &mut GameState, _cmds: &mut Vec<Command>) -> bool {
        if self.scroll > self.max_scroll() {
            self.scroll = self.max_scroll();
            return true;
        }
        false
    }

    fn render(&mut self, _state: &GameState, surface: &mut Surface) {
        write_centered(surface, TITLE_ROW, text!(bold bright_green "Pourquoi ça a marché ?"));

        let chunks: Vec<Text> = self.lines.iter().map(|l| text1!("{}"(l))).collect();
        let x0 = centered_x(COL_W);
        let data = Textbox::new(surface, chunks)
            .pos(x0, VIEW_TOP)
            .width(COL_W)
            .height(VIEW_ROWS)
            .scroll(self.scroll)
            .render();
        self.wrapped = data.lines;
        self.scroll = data.scroll;

        if data.lines > data.height && data.height > 0 {
            let x = x0 + COL_W + 1;
            let thumb_h = ((VIEW_ROWS * data.height) / data.lines).max(1);
            let denom = data.lines - data.height;
            let thumb_top = (data.scroll * VIEW_ROWS.saturating_sub(thumb_h)) / denom.max(1);
            for i in 0..VIEW_ROWS {
                let glyph = if (thumb_top..thumb_top + thumb_h).contains(&i) {
                    text!(bright_white "█")
                } else {
                    text!(bright_black "│")
                };
                surface.write(XY(x, VIEW_TOP + i), glyph);
            }
            write_centered(
                surface,
                VIEW_TOP + VIEW_ROWS,
                text!(bright_black "Molette ou flèches pour faire défiler"),
            );
        }

        self.redo.render(surface);
        self.menu.render(surface);
    }
}
