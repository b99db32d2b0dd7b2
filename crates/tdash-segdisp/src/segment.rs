#![forbid(unsafe_code)]

//! Horizontal and vertical segments with tapered ends.
//!
//! A segment is drawn as parallel pixel lines along its length. The middle
//! line (or the two middle lines for even thicknesses) spans the full
//! length; every line further out is shortened by one pixel at both ends per
//! step away from the middle, which gives the segment pointed ends:
//!
//! ```text
//!   ░███████░     thickness 3, length 9
//!   █████████
//!   ░███████░
//! ```

use std::fmt;
use std::str::FromStr;

use tdash_core::{Error, Point, Rect, Result};
use tdash_render::BrailleCanvas;
use tdash_render::cell::StyleOpts;
use tdash_render::drawing::{BrailleLineOptions, braille_line};

/// Orientation of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentType {
    /// Runs left to right.
    Horizontal,
    /// Runs top to bottom.
    Vertical,
}

impl SegmentType {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Name used by `Display` and `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for SegmentType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| Error::invalid_argument(format!("unsupported segment type {value}")))
    }
}

impl FromStr for SegmentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| Error::invalid_argument(format!("unsupported segment type {s:?}")))
    }
}

/// Options for [`hv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HvOptions {
    pub cell_opts: StyleOpts,
    /// Draw square ends for segments this thick or thinner.
    pub skip_slopes_lte: i32,
    /// On segments two pixels thick, shorten the second line instead of the
    /// first.
    pub reverse_slopes: bool,
}

impl HvOptions {
    #[must_use]
    pub const fn cell_opts(mut self, opts: StyleOpts) -> Self {
        self.cell_opts = opts;
        self
    }

    #[must_use]
    pub const fn skip_slopes_lte(mut self, thickness: i32) -> Self {
        self.skip_slopes_lte = thickness;
        self
    }

    #[must_use]
    pub const fn reverse_slopes(mut self) -> Self {
        self.reverse_slopes = true;
        self
    }
}

/// How far line `i` of a segment `thickness` lines thick is shortened at
/// each end.
fn inset(i: i32, thickness: i32, length: i32, opts: &HvOptions) -> i32 {
    if thickness <= opts.skip_slopes_lte || thickness < 2 || length < 3 {
        return 0;
    }
    let d = if thickness == 2 {
        let short = if opts.reverse_slopes { 1 } else { 0 };
        i32::from(i == short)
    } else if thickness % 2 == 1 {
        (i - thickness / 2).abs()
    } else {
        let (upper, lower) = (thickness / 2 - 1, thickness / 2);
        if i <= upper { upper - i } else { i - lower }
    };
    // Every line keeps at least one pixel.
    d.min((length - 1) / 2)
}

/// Draw a segment filling `area` on `bc`.
///
/// Horizontal segments are `area.dy()` lines thick, vertical ones
/// `area.dx()`. `area` must be non-empty and inside the pixel area.
pub fn hv(bc: &mut BrailleCanvas, area: Rect, st: SegmentType, opts: &HvOptions) -> Result<()> {
    if area.is_empty() {
        return Err(Error::invalid_argument(format!(
            "{st} segment area {area} must not be empty"
        )));
    }
    if area.has_negative() || !area.is_within(&bc.area()) {
        return Err(Error::out_of_bounds(format!(
            "{st} segment area {area} falls outside of the braille canvas area {}",
            bc.area()
        )));
    }

    let (thickness, length) = match st {
        SegmentType::Horizontal => (area.dy(), area.dx()),
        SegmentType::Vertical => (area.dx(), area.dy()),
    };
    let line_opts = BrailleLineOptions::default().cell_opts(opts.cell_opts);
    for i in 0..thickness {
        let d = inset(i, thickness, length, opts);
        let (start, end) = match st {
            SegmentType::Horizontal => (
                Point::new(area.min.x + d, area.min.y + i),
                Point::new(area.max.x - 1 - d, area.min.y + i),
            ),
            SegmentType::Vertical => (
                Point::new(area.min.x + i, area.min.y + d),
                Point::new(area.min.x + i, area.max.y - 1 - d),
            ),
        };
        braille_line(bc, start, end, &line_opts)?;
    }
    Ok(())
}
