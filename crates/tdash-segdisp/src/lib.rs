#![forbid(unsafe_code)]

//! Segment-display geometry.
//!
//! Displays are drawn on a braille canvas. Their size follows the pixel area
//! they get: the thickness of a segment is a fixed share of the width, and
//! every gap, slope and diagonal inset derives from that thickness.
//!
//! - [`segment`]: straight horizontal and vertical segments with tapered ends.
//! - [`diagonal`]: thick diagonal strokes.
//! - [`sixteen`]: the 16-segment character display.

pub mod diagonal;
pub mod segment;
pub mod sixteen;

use tdash_core::numbers::round;
use tdash_core::{Error, Point, Rect, Result};
use tdash_layout::area;
use tdash_render::braille::{COL_MULT, ROW_MULT};
use tdash_render::{BrailleCanvas, Canvas};

/// Minimum number of cell columns a display needs.
pub const MIN_COLS: i32 = 6;
/// Minimum number of cell rows a display needs.
pub const MIN_ROWS: i32 = 5;

/// Width to height proportion of a display, in pixels.
pub const ASPECT_RATIO: Point = Point::new(3, 5);

/// Segment thickness in percent of the display width.
const SEGMENT_WIDTH_PERC: i32 = 9;

/// Thickness of one segment on a display occupying `pixel_area`.
///
/// Even thicknesses above three pixels are bumped to the next odd value so
/// that tapered ends meet in a single-pixel point.
///
/// ```
/// use tdash_core::Rect;
/// use tdash_segdisp::segment_size;
///
/// assert_eq!(segment_size(Rect::new(0, 0, 44, 50)), 5);
/// assert_eq!(segment_size(Rect::new(0, 0, 55, 50)), 5);
/// assert_eq!(segment_size(Rect::ZERO), 0);
/// ```
pub fn segment_size(pixel_area: Rect) -> i32 {
    let size = round(f64::from(pixel_area.dx()) * f64::from(SEGMENT_WIDTH_PERC) / 100.0) as i32;
    if size > 3 && size % 2 == 0 { size + 1 } else { size }
}

/// The part of `cell_area` one display occupies.
///
/// The result is anchored at `cell_area.min` and is smaller than
/// `cell_area` when it does not have the display's aspect ratio. Fails with
/// a fit error when `cell_area` is below [`MIN_COLS`] × [`MIN_ROWS`].
pub fn required(cell_area: Rect) -> Result<Rect> {
    let (cols, rows) = (cell_area.dx(), cell_area.dy());
    if cols < MIN_COLS || rows < MIN_ROWS {
        return Err(Error::does_not_fit(format!(
            "cell area {cell_area} is too small for a segment display, need at least {MIN_COLS}x{MIN_ROWS} cells"
        )));
    }
    let pixels = area::with_ratio(
        Rect::sized(cols * COL_MULT, rows * ROW_MULT),
        ASPECT_RATIO,
    );
    // Round up so partly used cells still belong to the display.
    let cw = (pixels.dx() + COL_MULT - 1) / COL_MULT;
    let ch = (pixels.dy() + ROW_MULT - 1) / ROW_MULT;
    Ok(Rect::new(
        cell_area.min.x,
        cell_area.min.y,
        cell_area.min.x + cw,
        cell_area.min.y + ch,
    ))
}

/// A braille canvas over the whole of `canvas`, and the pixel area with the
/// display aspect ratio where the display is drawn.
///
/// The braille canvas is meant to be copied back into `canvas`.
pub fn to_braille(canvas: &Canvas) -> Result<(BrailleCanvas, Rect)> {
    let bc = BrailleCanvas::with_widths(canvas.area(), canvas.widths().clone())?;
    let pixels = area::with_ratio(bc.area(), ASPECT_RATIO);
    Ok((bc, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tdash_core::ErrorKind;

    #[test]
    fn segment_size_scenarios() {
        let cases = [
            (0, 0),
            (10, 1),
            (30, 3),
            (44, 5),
            (55, 5),
            (60, 5),
            (66, 7),
            (100, 9),
        ];
        for (width, want) in cases {
            assert_eq!(segment_size(Rect::new(0, 0, width, 10)), want, "width {width}");
        }
    }

    #[test]
    fn required_keeps_aspect_ratio() {
        // 12x20 pixels is exactly 3:5.
        assert_eq!(required(Rect::new(0, 0, 6, 5)).unwrap(), Rect::new(0, 0, 6, 5));
        // 40x20 pixels fits 12x20.
        assert_eq!(required(Rect::new(2, 1, 22, 6)).unwrap(), Rect::new(2, 1, 8, 6));
        // 12x80 pixels fits 12x20.
        assert_eq!(required(Rect::new(0, 0, 6, 20)).unwrap(), Rect::new(0, 0, 6, 5));
    }

    #[test]
    fn required_rounds_partial_cells_up() {
        // 16x40 pixels fits 15x25, which needs 7.5x6.25 cells.
        assert_eq!(required(Rect::new(0, 0, 8, 10)).unwrap(), Rect::new(0, 0, 8, 7));
        assert_eq!(required(Rect::new(4, 2, 12, 12)).unwrap(), Rect::new(4, 2, 12, 9));
    }

    #[test]
    fn required_rejects_small_areas() {
        for bad in [Rect::new(0, 0, 5, 5), Rect::new(0, 0, 6, 4), Rect::ZERO] {
            let err = required(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DoesNotFit, "{bad}");
        }
    }

    #[test]
    fn to_braille_covers_canvas() {
        let canvas = Canvas::new(Rect::new(3, 3, 9, 8)).unwrap();
        let (bc, pixels) = to_braille(&canvas).unwrap();
        assert_eq!(bc.cell_area(), canvas.area());
        assert_eq!(bc.offset(), canvas.area());
        assert_eq!(pixels, Rect::new(0, 0, 12, 20));
    }
}
