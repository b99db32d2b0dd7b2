#![forbid(unsafe_code)]

//! The marker drawn by widgets whose canvas is too small.

use tdash_core::Result;

use crate::canvas::Canvas;
use crate::cell::StyleOpts;

/// Rune signalling that the terminal needs to be resized.
pub const RESIZE_NEEDED: char = '⇄';

/// Replace everything on `canvas` with the resize marker.
///
/// Widgets draw this instead of failing when their area is below their
/// minimum size; see [`tdash_core::Error::is_does_not_fit`].
pub fn resize_needed(canvas: &mut Canvas) -> Result<()> {
    canvas.clear();
    let area = canvas.area();
    canvas.set_area_cells(area, RESIZE_NEEDED, &StyleOpts::new())
}
