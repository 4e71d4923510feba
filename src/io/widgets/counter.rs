use crate::io::{
    input::{Action, MouseButton},
    output::Surface,
    Rect, XY,
};
use crate::text;

/// A bounded numeric stepper: `[-] 220 °C [+]`.
///
/// Clicks on the minus/plus pads move the value by `step`, clamped to `[min, max]`.
#[derive(Clone, Debug)]
pub struct Counter {
    value: i32,
    min: i32,
    max: i32,
    step: i32,
    unit: &'static str,
    minus: Rect,
    plus: Rect,
    pos: XY,
}

impl Counter {
    /// Width of the value field between the two pads, in cells.
    const FIELD: usize = 10;

    pub fn new(pos: XY, value: i32, min: i32, max: i32, step: i32, unit: &'static str) -> Self {
        Self {
            value: value.clamp(min, max),
            min,
            max,
            step,
            unit,
            minus: Rect::new(pos.x(), pos.y(), 3, 1),
            plus: Rect::new(pos.x() + 3 + Self::FIELD, pos.y(), 3, 1),
            pos,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Reseed the value, e.g. when re-entering the screen. Clamped to the bounds.
    pub fn set_value(&mut self, value: i32) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Feed one input action. Returns `true` iff the value changed.
    pub fn handle(&mut self, action: &Action) -> bool {
        let pos = match action {
            Action::MousePress {
                button: MouseButton::Left,
                pos,
            } => *pos,
            _ => return false,
        };
        if self.minus.contains(pos) && self.value > self.min {
            self.value = (self.value - self.step).max(self.min);
            true
        } else if self.plus.contains(pos) && self.value < self.max {
            self.value = (self.value + self.step).min(self.max);
            true
        } else {
            false
        }
    }

    pub fn render(&self, surface: &mut Surface) {
        let field = format!("{} {}", self.value, self.unit);
        surface.write(
            self.pos,
            text!(on_red "[-]", " {0:^1$}"(field, Self::FIELD), on_green "[+]"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> Counter {
        Counter::new(XY(0, 0), 180, 100, 300, 10, "°C")
    }

    fn press(c: &Counter, plus: bool) -> Action {
        let r = if plus { c.plus } else { c.minus };
        Action::MousePress {
            button: MouseButton::Left,
            pos: r.pos,
        }
    }

    #[test]
    fn steps_by_step() {
        let mut c = counter();
        let plus = press(&c, true);
        assert!(c.handle(&plus));
        assert_eq!(c.value(), 190);
        let minus = press(&c, false);
        assert!(c.handle(&minus));
        assert!(c.handle(&minus));
        assert_eq!(c.value(), 170);
    }

    #[test]
    fn clamps_at_bounds() {
        let mut c = Counter::new(XY(0, 0), 300, 100, 300, 10, "°C");
        let plus = press(&c, true);
        assert!(!c.handle(&plus));
        assert_eq!(c.value(), 300);

        let mut c = Counter::new(XY(0, 0), 100, 100, 300, 10, "°C");
        let minus = press(&c, false);
        assert!(!c.handle(&minus));
        assert_eq!(c.value(), 100);
    }

    #[test]
    fn set_value_clamps() {
        let mut c = counter();
        c.set_value(9999);
        assert_eq!(c.value(), 300);
        c.set_value(-5);
        assert_eq!(c.value(), 100);
    }
}
