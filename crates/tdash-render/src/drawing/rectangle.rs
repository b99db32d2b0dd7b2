#![forbid(unsafe_code)]

//! Solid rectangles of one rune.

use tdash_core::{Error, Rect, Result};

use crate::canvas::Canvas;
use crate::cell::StyleOpts;

/// Options for [`rectangle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectangleOptions {
    /// Rune the rectangle is filled with, a space by default.
    pub rune: char,
    pub cell_opts: StyleOpts,
}

impl Default for RectangleOptions {
    fn default() -> Self {
        Self {
            rune: ' ',
            cell_opts: StyleOpts::new(),
        }
    }
}

impl RectangleOptions {
    #[must_use]
    pub const fn rune(mut self, rune: char) -> Self {
        self.rune = rune;
        self
    }

    #[must_use]
    pub const fn cell_opts(mut self, opts: StyleOpts) -> Self {
        self.cell_opts = opts;
        self
    }
}

/// Fill `rect` with a single rune.
///
/// The rune must be a single column wide.
pub fn rectangle(canvas: &mut Canvas, rect: Rect, opts: &RectangleOptions) -> Result<()> {
    if canvas.widths().rune_width(opts.rune) != 1 {
        return Err(Error::invalid_argument(format!(
            "rectangle rune {:?} must be exactly one cell wide",
            opts.rune
        )));
    }
    canvas.set_area_cells(rect, opts.rune, &opts.cell_opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::PackedRgba;
    use tdash_core::{ErrorKind, Point};

    fn canvas(w: i32, h: i32) -> Canvas {
        Canvas::new(Rect::new(0, 0, w, h)).unwrap()
    }

    #[test]
    fn fills_with_rune() {
        let mut c = canvas(4, 3);
        let opts = RectangleOptions::default().rune('#');
        rectangle(&mut c, Rect::new(1, 1, 3, 3), &opts).unwrap();
        assert_eq!(c.buffer().to_plain_text(), "    \n ## \n ## ");
    }

    #[test]
    fn default_rune_is_space_with_style() {
        let mut c = canvas(2, 1);
        let opts = RectangleOptions::default().cell_opts(StyleOpts::new().bg(PackedRgba::BLUE));
        let area = c.area();
        rectangle(&mut c, area, &opts).unwrap();
        let cell = c.cell(Point::new(1, 0)).unwrap();
        assert_eq!(cell.rune(), Some(' '));
        assert_eq!(cell.style.bg, Some(PackedRgba::BLUE));
    }

    #[test]
    fn rejects_wide_and_zero_width_runes() {
        let mut c = canvas(4, 1);
        for rune in ['界', '\u{301}'] {
            let area = c.area();
            let err = rectangle(&mut c, area, &RectangleOptions::default().rune(rune))
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{rune:?}");
        }
    }

    #[test]
    fn rect_outside_fails() {
        let mut c = canvas(2, 2);
        let err = rectangle(&mut c, Rect::new(1, 1, 3, 2), &RectangleOptions::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    }
}
