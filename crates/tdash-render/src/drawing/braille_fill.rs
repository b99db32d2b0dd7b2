#![forbid(unsafe_code)]

//! Flood fill on the braille pixel grid.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use tdash_core::{Error, Point, Result};

use crate::braille::BrailleCanvas;
use crate::cell::StyleOpts;

/// Options for [`braille_fill`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrailleFillOptions {
    pub cell_opts: StyleOpts,
    /// Lower the reached pixels instead of raising them.
    pub clear: bool,
}

impl BrailleFillOptions {
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

const NEIGHBOURS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
];

/// Fill every pixel reachable from `start` without stepping onto a `border`
/// pixel or leaving the canvas.
///
/// Pixels are connected through their four sides only, so a border made of
/// diagonal steps (like the outline of a circle) still encloses its inside.
/// A border that does not enclose `start` lets the fill spread over all
/// connected pixels. Border pixels themselves are never touched; a `start`
/// on the border fills nothing.
///
/// Returns the number of pixels filled.
pub fn braille_fill(
    bc: &mut BrailleCanvas,
    start: Point,
    border: &[Point],
    opts: &BrailleFillOptions,
) -> Result<usize> {
    let area = bc.area();
    if !area.contains(start) {
        return Err(Error::out_of_bounds(format!(
            "fill start {start} falls outside of the braille canvas area {area}"
        )));
    }

    let mut visited: FxHashSet<Point> = border.iter().copied().collect();
    let mut queue = VecDeque::new();
    if visited.insert(start) {
        queue.push_back(start);
    }
    let mut filled = 0;
    while let Some(p) = queue.pop_front() {
        if opts.clear {
            bc.clear_pixel(p, &opts.cell_opts)?;
        } else {
            bc.set_pixel(p, &opts.cell_opts)?;
        }
        filled += 1;
        for step in NEIGHBOURS {
            let next = p + step;
            if area.contains(next) && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }
    tdash_core::debug!(%start, border = border.len(), filled, "braille fill");
    Ok(filled)
}
