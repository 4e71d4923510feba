//! Common code and types between input and output.

use std::{
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign},
};

pub mod clifmt;
pub mod input;
pub mod output;
pub mod sys;
pub mod widgets;

/// A position or size in character cells, with an X and a Y component.
///
/// Supports elementwise arithmetic with other `XY`s and with scalars, e.g.
/// `XY(2, 3) * 4 == XY(8, 12)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct XY(pub usize, pub usize);

impl XY {
    /// The X component
    pub const fn x(&self) -> usize {
        self.0
    }

    /// The Y component
    pub const fn y(&self) -> usize {
        self.1
    }
}

macro_rules! xy_op {
    ( $(
        $trait:ident($fn:ident) => $op:tt $assn_op:tt
    ),* $(,)? ) => {
        $(
            impl $trait for XY {
                type Output = XY;
                fn $fn(self, rhs: XY) -> XY {
                    XY(self.0 $op rhs.0, self.1 $op rhs.1)
                }
            }

            impl $trait<usize> for XY {
                type Output = XY;
                fn $fn(self, rhs: usize) -> XY {
                    XY(self.0 $op rhs, self.1 $op rhs)
                }
            }

            paste::paste! {
                impl [< $trait Assign >] for XY {
                    fn [< $fn _assign >] (&mut self, rhs: XY) {
                        self.0 $assn_op rhs.0;
                        self.1 $assn_op rhs.1;
                    }
                }
            }
        )*
    };
}

xy_op! {
    Add(add) => + +=,
    Sub(sub) => - -=,
    Mul(mul) => * *=,
    Div(div) => / /=,
}

impl fmt::Display for XY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl fmt::Debug for XY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XY({}, {})", self.0, self.1)
    }
}

impl From<(usize, usize)> for XY {
    fn from(f: (usize, usize)) -> XY {
        XY(f.0, f.1)
    }
}

/// A rectangle of cells, used for widget placement and mouse hit-testing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Rect {
    pub pos: XY,
    pub size: XY,
}

impl Rect {
    pub const fn new(x: usize, y: usize, w: usize, h: usize) -> Self {
        Self {
            pos: XY(x, y),
            size: XY(w, h),
        }
    }

    pub fn contains(&self, p: XY) -> bool {
        p.x() >= self.pos.x()
            && p.x() < self.pos.x() + self.size.x()
            && p.y() >= self.pos.y()
            && p.y() < self.pos.y() + self.size.y()
    }

    /// Midpoint, for centering labels.
    pub fn center(&self) -> XY {
        self.pos + self.size / 2
    }
}

#[cfg(test)]
mod tests {
    use super::{Rect, XY};

    #[test]
    fn xy_arithmetic() {
        assert_eq!(XY(2, 3) + XY(4, 5), XY(6, 8));
        assert_eq!(XY(4, 6) - XY(1, 2), XY(3, 4));
        assert_eq!(XY(2, 3) * 4, XY(8, 12));
        assert_eq!(XY(8, 12) / 4, XY(2, 3));
    }

    #[test]
    fn rect_contains_edges() {
        let r = Rect::new(2, 2, 3, 2);
        assert!(r.contains(XY(2, 2)));
        assert!(r.contains(XY(4, 3)));
        assert!(!r.contains(XY(5, 2)));
        assert!(!r.contains(XY(2, 4)));
        assert!(!r.contains(XY(1, 2)));
    }
}
