#![forbid(unsafe_code)]

//! Thick diagonal segments.

use std::fmt;
use std::str::FromStr;

use tdash_core::{Error, Point, Rect, Result};
use tdash_render::BrailleCanvas;
use tdash_render::cell::StyleOpts;
use tdash_render::drawing::{BrailleLineOptions, braille_line};

/// Direction of a diagonal segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagonalType {
    /// From the top left corner down to the bottom right corner, `\`.
    LeftToRight,
    /// From the top right corner down to the bottom left corner, `/`.
    RightToLeft,
}

impl DiagonalType {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 2] = [Self::LeftToRight, Self::RightToLeft];

    /// Name used by `Display` and `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftToRight => "left_to_right",
            Self::RightToLeft => "right_to_left",
        }
    }

    /// Endpoints of the line through `area` shifted `shift` pixels off the
    /// corner-to-corner diagonal. Positive shifts move to the right.
    fn line(self, area: Rect, shift: i32) -> (Point, Point) {
        let (l, t) = (area.min.x, area.min.y);
        let (r, b) = (area.max.x - 1, area.max.y - 1);
        let k = shift.abs();
        match (self, shift >= 0) {
            (Self::LeftToRight, true) => (Point::new(l + k, t), Point::new(r, b - k)),
            (Self::LeftToRight, false) => (Point::new(l, t + k), Point::new(r - k, b)),
            (Self::RightToLeft, true) => (Point::new(r, t + k), Point::new(l + k, b)),
            (Self::RightToLeft, false) => (Point::new(r - k, t), Point::new(l, b - k)),
        }
    }
}

impl fmt::Display for DiagonalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for DiagonalType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| Error::invalid_argument(format!("unsupported diagonal type {value}")))
    }
}

impl FromStr for DiagonalType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| Error::invalid_argument(format!("unsupported diagonal type {s:?}")))
    }
}

/// Options for [`diagonal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiagonalOptions {
    pub cell_opts: StyleOpts,
}

impl DiagonalOptions {
    #[must_use]
    pub const fn cell_opts(mut self, opts: StyleOpts) -> Self {
        self.cell_opts = opts;
        self
    }
}

/// Draw a diagonal segment `width` lines thick across `area`.
///
/// The first line joins two opposite corners of `area`; further lines are
/// added alternately to its right and its left. `width` must be between 1
/// and the smaller side of `area`.
pub fn diagonal(
    bc: &mut BrailleCanvas,
    area: Rect,
    width: i32,
    dt: DiagonalType,
    opts: &DiagonalOptions,
) -> Result<()> {
    if area.is_empty() {
        return Err(Error::invalid_argument(format!(
            "diagonal segment area {area} must not be empty"
        )));
    }
    if area.has_negative() || !area.is_within(&bc.area()) {
        return Err(Error::out_of_bounds(format!(
            "diagonal segment area {area} falls outside of the braille canvas area {}",
            bc.area()
        )));
    }
    let max = area.dx().min(area.dy());
    if width < 1 || width > max {
        return Err(Error::invalid_argument(format!(
            "diagonal segment width({width}) must be in the range 1..={max} for area {area}"
        )));
    }

    let line_opts = BrailleLineOptions::default().cell_opts(opts.cell_opts);
    for i in 0..width {
        // 0, +1, -1, +2, -2, ...
        let k = (i + 1) / 2;
        let shift = if i % 2 == 1 { k } else { -k };
        let (start, end) = dt.line(area, shift);
        braille_line(bc, start, end, &line_opts)?;
    }
    Ok(())
}
