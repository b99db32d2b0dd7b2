#![forbid(unsafe_code)]

//! Straight lines on the braille pixel grid.

use tdash_core::{Error, Point, Result};

use crate::braille::BrailleCanvas;
use crate::cell::StyleOpts;

/// Options for [`braille_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrailleLineOptions {
    pub cell_opts: StyleOpts,
    /// Lower the pixels on the line instead of raising them.
    pub clear: bool,
}

impl BrailleLineOptions {
    #[must_use]
    pub const fn cell_opts(mut self, opts: StyleOpts) -> Self {
        self.cell_opts = opts;
        self
    }

    #[must_use]
    pub const fn clear_pixels(mut self) -> Self {
        self.clear = true;
        self
    }
}

/// Pixels of the line between `start` and `end`, both included.
///
/// The endpoints are normalized before rasterizing, so swapping them yields
/// the same pixels.
pub fn line_points(start: Point, end: Point) -> Vec<Point> {
    let (dx, dy) = ((end.x - start.x).abs(), (end.y - start.y).abs());
    if dy < dx {
        if start.x <= end.x {
            line_low(start, end)
        } else {
            line_low(end, start)
        }
    } else if start.y <= end.y {
        line_high(start, end)
    } else {
        line_high(end, start)
    }
}

/// Mostly horizontal line, `a.x <= b.x`.
fn line_low(a: Point, b: Point) -> Vec<Point> {
    let dx = b.x - a.x;
    let (dy, step) = if b.y < a.y { (a.y - b.y, -1) } else { (b.y - a.y, 1) };
    let mut d = 2 * dy - dx;
    let mut y = a.y;
    let mut out = Vec::with_capacity(dx as usize + 1);
    for x in a.x..=b.x {
        out.push(Point::new(x, y));
        if d > 0 {
            y += step;
            d += 2 * (dy - dx);
        } else {
            d += 2 * dy;
        }
    }
    out
}

/// Mostly vertical line, `a.y <= b.y`.
fn line_high(a: Point, b: Point) -> Vec<Point> {
    let dy = b.y - a.y;
    let (dx, step) = if b.x < a.x { (a.x - b.x, -1) } else { (b.x - a.x, 1) };
    let mut d = 2 * dx - dy;
    let mut x = a.x;
    let mut out = Vec::with_capacity(dy as usize + 1);
    for y in a.y..=b.y {
        out.push(Point::new(x, y));
        if d > 0 {
            x += step;
            d += 2 * (dx - dy);
        } else {
            d += 2 * dx;
        }
    }
    out
}

/// Draw a line between two pixels of `bc`.
///
/// Both endpoints must lie inside the pixel area.
pub fn braille_line(
    bc: &mut BrailleCanvas,
    start: Point,
    end: Point,
    opts: &BrailleLineOptions,
) -> Result<()> {
    let area = bc.area();
    for p in [start, end] {
        if !area.contains(p) {
            return Err(Error::out_of_bounds(format!(
                "line endpoint {p} falls outside of the braille canvas area {area}"
            )));
        }
    }
    for p in line_points(start, end) {
        if opts.clear {
            bc.clear_pixel(p, &opts.cell_opts)?;
        } else {
            bc.set_pixel(p, &opts.cell_opts)?;
        }
    }
    Ok(())
}
