#![forbid(unsafe_code)]

//! Circles, discs and arcs on the braille pixel grid.

use rustc_hash::{FxHashMap, FxHashSet};
use tdash_core::trig::{angle_in_arc, circle_angle_at_point};
use tdash_core::{Error, Point, Rect, Result};

use crate::braille::BrailleCanvas;
use crate::cell::StyleOpts;

/// Options for [`braille_circle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrailleCircleOptions {
    pub cell_opts: StyleOpts,
    /// Fill the disc instead of drawing the outline.
    pub filled: bool,
    /// Lower the pixels instead of raising them.
    pub clear: bool,
    /// Only draw the counter-clockwise arc from the first to the second
    /// angle, in degrees.
    pub arc: Option<(i32, i32)>,
}

impl BrailleCircleOptions {
    #[must_use]
    pub const fn cell_opts(mut self, opts: StyleOpts) -> Self {
        self.cell_opts = opts;
        self
    }

    #[must_use]
    pub const fn filled(mut self) -> Self {
        self.filled = true;
        self
    }

    #[must_use]
    pub const fn clear_pixels(mut self) -> Self {
        self.clear = true;
        self
    }

    /// Restrict drawing to the arc between `start` and `end` degrees.
    ///
    /// Zero degrees points right and angles grow counter-clockwise; an arc
    /// with `start > end` passes through zero.
    #[must_use]
    pub const fn arc_only(mut self, start: i32, end: i32) -> Self {
        self.arc = Some((start, end));
        self
    }
}

/// Outline pixels of the circle of `radius` around `mid`, midpoint
/// algorithm.
pub fn circle_points(mid: Point, radius: i32) -> Vec<Point> {
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    let mut x = radius;
    let mut y = 0;
    let mut d = 1 - radius;
    while x >= y {
        for (ox, oy) in [
            (x, y),
            (-x, y),
            (x, -y),
            (-x, -y),
            (y, x),
            (-y, x),
            (y, -x),
            (-y, -x),
        ] {
            let p = Point::new(mid.x + ox, mid.y + oy);
            if seen.insert(p) {
                out.push(p);
            }
        }
        y += 1;
        if d < 0 {
            d += 2 * y + 1;
        } else {
            x -= 1;
            d += 2 * (y - x) + 1;
        }
    }
    out
}

/// Pixels of the disc bounded by the outline of [`circle_points`].
fn disc_points(mid: Point, radius: i32) -> Vec<Point> {
    let mut rows: FxHashMap<i32, (i32, i32)> = FxHashMap::default();
    for p in circle_points(mid, radius) {
        rows.entry(p.y)
            .and_modify(|(lo, hi)| {
                *lo = (*lo).min(p.x);
                *hi = (*hi).max(p.x);
            })
            .or_insert((p.x, p.x));
    }
    let mut out = Vec::new();
    for (y, (lo, hi)) in rows {
        out.extend((lo..=hi).map(|x| Point::new(x, y)));
    }
    out
}

fn validate(bc: &BrailleCanvas, mid: Point, radius: i32, opts: &BrailleCircleOptions) -> Result<()> {
    let area = bc.area();
    if !area.contains(mid) {
        return Err(Error::out_of_bounds(format!(
            "circle middle {mid} falls outside of the braille canvas area {area}"
        )));
    }
    if radius < 1 {
        return Err(Error::invalid_argument(format!(
            "circle radius({radius}) must be at least 1"
        )));
    }
    let bounds = Rect::new(
        mid.x - radius,
        mid.y - radius,
        mid.x + radius + 1,
        mid.y + radius + 1,
    );
    if bounds.has_negative() || !bounds.is_within(&area) {
        return Err(Error::out_of_bounds(format!(
            "circle of radius {radius} around {mid} spans {bounds}, outside of the braille canvas area {area}"
        )));
    }
    if let Some((start, end)) = opts.arc {
        for angle in [start, end] {
            if !(0..=360).contains(&angle) {
                return Err(Error::invalid_argument(format!(
                    "arc angle({angle}) must be in the range 0..=360"
                )));
            }
        }
        if start == end {
            return Err(Error::invalid_argument(format!(
                "arc start and end angles must differ, both are {start}"
            )));
        }
    }
    Ok(())
}

/// Draw a circle of `radius` pixels around `mid`.
///
/// The whole circle must fit inside the pixel area.
pub fn braille_circle(
    bc: &mut BrailleCanvas,
    mid: Point,
    radius: i32,
    opts: &BrailleCircleOptions,
) -> Result<()> {
    validate(bc, mid, radius, opts)?;
    let points = if opts.filled {
        disc_points(mid, radius)
    } else {
        circle_points(mid, radius)
    };
    // A full turn is the same as no restriction.
    let arc = opts.arc.filter(|&(s, e)| !matches!((s, e), (0, 360) | (360, 0)));
    for p in points {
        if let Some((start, end)) = arc
            && p != mid
        {
            let angle = circle_angle_at_point(p, mid);
            if !angle_in_arc(angle, start % 360, end % 360) {
                continue;
            }
        }
        if opts.clear {
            bc.clear_pixel(p, &opts.cell_opts)?;
        } else {
            bc.set_pixel(p, &opts.cell_opts)?;
        }
    }
    Ok(())
}
