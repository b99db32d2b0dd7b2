#![forbid(unsafe_code)]

//! Rectangle arithmetic used by widgets to carve up their canvas.
//!
//! Splits truncate toward zero, so a 50% split of an odd height gives the
//! extra row to the second half. Any half that ends up with no rows or
//! columns is returned as [`Rect::ZERO`].

use tdash_core::numbers::simplify_ratio;
use tdash_core::{Error, Point, Rect, Result};

/// Width and height of `rect`.
#[inline]
pub fn size(rect: Rect) -> Point {
    rect.size()
}

/// A zero-based rectangle of `size`.
pub fn from_size(size: Point) -> Result<Rect> {
    if size.is_negative() {
        return Err(Error::invalid_argument(format!(
            "cannot create an area from negative size {size}"
        )));
    }
    Ok(Rect::sized(size.x, size.y))
}

fn check_percent(name: &str, perc: i32) -> Result<()> {
    if !(0..=100).contains(&perc) {
        return Err(Error::invalid_argument(format!(
            "invalid {name} {perc}, must be in range 0 <= {name} <= 100"
        )));
    }
    Ok(())
}

fn check_cells(name: &str, cells: i32) -> Result<()> {
    if cells < 0 {
        return Err(Error::invalid_argument(format!(
            "invalid {name} {cells}, must be non-negative"
        )));
    }
    Ok(())
}

/// `len * perc / 100` without intermediate overflow.
#[inline]
fn percent_of(len: i32, perc: i32) -> i32 {
    // perc is in 0..=100 so the result never exceeds len.
    (i64::from(len) * i64::from(perc) / 100) as i32
}

/// Split `area` into a top part covering `height_perc` percent of its rows
/// and a bottom part with the rest.
pub fn hsplit(area: Rect, height_perc: i32) -> Result<(Rect, Rect)> {
    check_percent("height_perc", height_perc)?;
    let height = percent_of(area.dy(), height_perc);
    Ok(hsplit_at(area, height))
}

/// Split `area` into a left part covering `width_perc` percent of its
/// columns and a right part with the rest.
pub fn vsplit(area: Rect, width_perc: i32) -> Result<(Rect, Rect)> {
    check_percent("width_perc", width_perc)?;
    let width = percent_of(area.dx(), width_perc);
    Ok(vsplit_at(area, width))
}

/// Split off the first `cells` rows of `area`.
///
/// Zero cells yields `(ZERO, area)`; asking for all rows or more yields
/// `(area, ZERO)`.
pub fn hsplit_cells(area: Rect, cells: i32) -> Result<(Rect, Rect)> {
    check_cells("cells", cells)?;
    if cells == 0 {
        return Ok((Rect::ZERO, area));
    }
    if cells >= area.dy() {
        return Ok((area, Rect::ZERO));
    }
    Ok(hsplit_at(area, cells))
}

/// Split off the first `cells` columns of `area`.
///
/// Zero cells yields `(ZERO, area)`; asking for all columns or more yields
/// `(area, ZERO)`.
pub fn vsplit_cells(area: Rect, cells: i32) -> Result<(Rect, Rect)> {
    check_cells("cells", cells)?;
    if cells == 0 {
        return Ok((Rect::ZERO, area));
    }
    if cells >= area.dx() {
        return Ok((area, Rect::ZERO));
    }
    Ok(vsplit_at(area, cells))
}

fn hsplit_at(area: Rect, height: i32) -> (Rect, Rect) {
    let y = area.min.y + height;
    let top = Rect::new(area.min.x, area.min.y, area.max.x, y);
    let bottom = Rect::new(area.min.x, y, area.max.x, area.max.y);
    (collapse_rows(top), collapse_rows(bottom))
}

fn vsplit_at(area: Rect, width: i32) -> (Rect, Rect) {
    let x = area.min.x + width;
    let left = Rect::new(area.min.x, area.min.y, x, area.max.y);
    let right = Rect::new(x, area.min.y, area.max.x, area.max.y);
    (collapse_cols(left), collapse_cols(right))
}

#[inline]
fn collapse_rows(r: Rect) -> Rect {
    if r.dy() == 0 { Rect::ZERO } else { r }
}

#[inline]
fn collapse_cols(r: Rect) -> Rect {
    if r.dx() == 0 { Rect::ZERO } else { r }
}

/// `area` without its outermost ring of cells.
///
/// Areas narrower or shorter than two cells have nothing left.
pub fn exclude_border(area: Rect) -> Rect {
    const MIN_DIM: i32 = 2;
    if area.dx() < MIN_DIM || area.dy() < MIN_DIM {
        return Rect::ZERO;
    }
    Rect::new(area.min.x + 1, area.min.y + 1, area.max.x - 1, area.max.y - 1).canonical()
}

/// The largest rectangle anchored at `area.min` whose sides have exactly the
/// proportion `ratio` (`x:y`) and that fits inside `area`.
///
/// Returns [`Rect::ZERO`] when no such rectangle exists.
///
/// ```
/// use tdash_core::{Point, Rect};
/// use tdash_layout::area::with_ratio;
///
/// let fitted = with_ratio(Rect::new(0, 0, 10, 12), Point::new(6, 10));
/// assert_eq!(fitted, Rect::new(0, 0, 6, 10));
/// ```
pub fn with_ratio(area: Rect, ratio: Point) -> Rect {
    let ratio = simplify_ratio(ratio);
    if area.is_empty() || ratio.x <= 0 || ratio.y <= 0 {
        return Rect::ZERO;
    }
    let k = (area.dx() / ratio.x).min(area.dy() / ratio.y);
    if k == 0 {
        return Rect::ZERO;
    }
    Rect::new(
        area.min.x,
        area.min.y,
        area.min.x + ratio.x * k,
        area.min.y + ratio.y * k,
    )
}

/// Shrink `area` by the given number of cells on each side.
///
/// Shrinking past the opposite edge collapses to [`Rect::ZERO`].
pub fn shrink(area: Rect, top: i32, right: i32, bottom: i32, left: i32) -> Result<Rect> {
    for (name, v) in [("top", top), ("right", right), ("bottom", bottom), ("left", left)] {
        check_cells(name, v)?;
    }
    let min_x = area.min.x.saturating_add(left).min(area.max.x);
    let max_x = area.max.x.saturating_sub(right).max(min_x);
    let min_y = area.min.y.saturating_add(top).min(area.max.y);
    let max_y = area.max.y.saturating_sub(bottom).max(min_y);
    Ok(Rect::new(min_x, min_y, max_x, max_y).canonical())
}

/// Shrink `area` by a percentage of its size on each side.
///
/// Top and bottom are percentages of the height, left and right of the width.
pub fn shrink_percent(area: Rect, top: i32, right: i32, bottom: i32, left: i32) -> Result<Rect> {
    for (name, v) in [("top", top), ("right", right), ("bottom", bottom), ("left", left)] {
        check_percent(name, v)?;
    }
    shrink(
        area,
        percent_of(area.dy(), top),
        percent_of(area.dx(), right),
        percent_of(area.dy(), bottom),
        percent_of(area.dx(), left),
    )
}

/// Move `area` up by `cells` rows.
pub fn move_up(area: Rect, cells: i32) -> Result<Rect> {
    check_cells("cells", cells)?;
    if area.min.y < cells {
        return Err(Error::out_of_bounds(format!(
            "cannot move area {area} up by {cells} cells, it would have a negative coordinate"
        )));
    }
    Ok(area.translate(Point::new(0, -cells)))
}

/// Move `area` down by `cells` rows.
pub fn move_down(area: Rect, cells: i32) -> Result<Rect> {
    check_cells("cells", cells)?;
    if area.max.y.checked_add(cells).is_none() {
        return Err(Error::out_of_bounds(format!(
            "cannot move area {area} down by {cells} cells, the coordinate overflows"
        )));
    }
    Ok(area.translate(Point::new(0, cells)))
}

/// Move `area` left by `cells` columns.
pub fn move_left(area: Rect, cells: i32) -> Result<Rect> {
    check_cells("cells", cells)?;
    if area.min.x < cells {
        return Err(Error::out_of_bounds(format!(
            "cannot move area {area} left by {cells} cells, it would have a negative coordinate"
        )));
    }
    Ok(area.translate(Point::new(-cells, 0)))
}

/// Move `area` right by `cells` columns.
pub fn move_right(area: Rect, cells: i32) -> Result<Rect> {
    check_cells("cells", cells)?;
    if area.max.x.checked_add(cells).is_none() {
        return Err(Error::out_of_bounds(format!(
            "cannot move area {area} right by {cells} cells, the coordinate overflows"
        )));
    }
    Ok(area.translate(Point::new(cells, 0)))
}
