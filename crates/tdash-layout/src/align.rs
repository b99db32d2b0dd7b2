#![forbid(unsafe_code)]

//! Alignment of rectangles and single-line text inside a rectangle.

use std::fmt;
use std::str::FromStr;

use tdash_core::{Error, Point, Rect, Result};
use tdash_text::RuneWidths;

/// Horizontal alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Horizontal {
    /// Flush with the left edge (default).
    #[default]
    Left,
    /// Centred, biased to the left on odd gaps.
    Center,
    /// Flush with the right edge.
    Right,
}

/// Vertical alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Vertical {
    /// Flush with the top edge (default).
    #[default]
    Top,
    /// Centred, biased upward on odd gaps.
    Middle,
    /// Flush with the bottom edge.
    Bottom,
}

impl Horizontal {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 3] = [Self::Left, Self::Center, Self::Right];

    /// Name used by `Display` and `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    /// Offset of a span of `inner` cells inside `outer` cells.
    const fn offset(self, outer: i32, inner: i32) -> i32 {
        let gap = outer - inner;
        match self {
            Self::Left => 0,
            Self::Center => gap / 2,
            Self::Right => gap,
        }
    }
}

impl Vertical {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 3] = [Self::Top, Self::Middle, Self::Bottom];

    /// Name used by `Display` and `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }

    const fn offset(self, outer: i32, inner: i32) -> i32 {
        let gap = outer - inner;
        match self {
            Self::Top => 0,
            Self::Middle => gap / 2,
            Self::Bottom => gap,
        }
    }
}

macro_rules! alignment_conversions {
    ($ty:ident, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl TryFrom<u8> for $ty {
            type Error = Error;

            fn try_from(value: u8) -> Result<Self> {
                Self::ALL.get(usize::from(value)).copied().ok_or_else(|| {
                    Error::invalid_argument(format!(concat!("unsupported ", $what, " {}"), value))
                })
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::ALL
                    .into_iter()
                    .find(|a| a.name() == s)
                    .ok_or_else(|| {
                        Error::invalid_argument(format!(concat!("unsupported ", $what, " {:?}"), s))
                    })
            }
        }
    };
}

alignment_conversions!(Horizontal, "horizontal alignment");
alignment_conversions!(Vertical, "vertical alignment");

/// Position `inner` inside `outer`, keeping its size.
///
/// `inner` must already lie within `outer`.
pub fn rectangle(outer: Rect, inner: Rect, h: Horizontal, v: Vertical) -> Result<Rect> {
    if !inner.is_within(&outer) {
        return Err(Error::out_of_bounds(format!(
            "cannot align area {inner} inside rectangle {outer}, the area falls outside of the rectangle"
        )));
    }
    let x = outer.min.x + h.offset(outer.dx(), inner.dx());
    let y = outer.min.y + v.offset(outer.dy(), inner.dy());
    Ok(Rect::new(x, y, x + inner.dx(), y + inner.dy()))
}

/// Starting point for drawing `text` aligned inside `rect`.
///
/// Text wider than `rect` starts at its left edge; cutting it off is left to
/// the caller.
///
/// ```
/// use tdash_core::{Point, Rect};
/// use tdash_layout::align::{self, Horizontal, Vertical};
/// use tdash_text::RuneWidths;
///
/// let rect = Rect::new(1, 1, 4, 4);
/// let w = RuneWidths::new();
/// let p = align::text(rect, "a", Horizontal::Center, Vertical::Middle, &w).unwrap();
/// assert_eq!(p, Point::new(2, 2));
/// ```
pub fn text(rect: Rect, text: &str, h: Horizontal, v: Vertical, widths: &RuneWidths) -> Result<Point> {
    widths.validate_text(text)?;
    let cells = i32::try_from(widths.str_width(text)).unwrap_or(i32::MAX);
    let len = cells.min(rect.dx());
    let line = Rect::new(rect.min.x, rect.min.y, rect.min.x + len, rect.min.y + 1);
    Ok(rectangle(rect, line, h, v)?.min)
}
