#![forbid(unsafe_code)]

//! Braille sub-cell canvas.
//!
//! Every terminal cell is treated as a 2×4 dot matrix. The dots of a cell
//! are packed into a single rune of the Unicode braille block, whose code
//! point is `U+2800 + mask`:
//!
//! ```text
//!  col 0   col 1
//! ┌──────┬──────┐
//! │ 0x01 │ 0x08 │  row 0
//! │ 0x02 │ 0x10 │  row 1
//! │ 0x04 │ 0x20 │  row 2
//! │ 0x40 │ 0x80 │  row 3
//! └──────┴──────┘
//! ```
//!
//! Pixel edits only become visible in a destination after
//! [`BrailleCanvas::copy_to`] or [`BrailleCanvas::apply`].

use tdash_core::{Error, Point, Rect, Result};
use tdash_text::RuneWidths;

use crate::canvas::Canvas;
use crate::cell::{Cell, CellContent, StyleOpts};
use crate::terminal::Terminal;

/// Pixel columns per cell.
pub const COL_MULT: i32 = 2;
/// Pixel rows per cell.
pub const ROW_MULT: i32 = 4;

/// First rune of the braille block, no dots raised.
pub const BRAILLE_BLANK: char = '\u{2800}';
/// Braille rune with all eight dots raised.
pub const BRAILLE_FULL: char = '\u{28FF}';

/// Bit of the rune mask for pixel `[x % 2][y % 4]`.
const BRAILLE_BITS: [[u32; 4]; 2] = [[0x01, 0x02, 0x04, 0x40], [0x08, 0x10, 0x20, 0x80]];

/// Whether `c` lies in the braille patterns block.
#[inline]
pub const fn is_braille(c: char) -> bool {
    matches!(c, BRAILLE_BLANK..=BRAILLE_FULL)
}

/// The dot mask of a cell, `None` unless it holds a braille rune.
fn cell_mask(cell: &Cell) -> Option<u32> {
    cell.rune()
        .filter(|&c| is_braille(c))
        .map(|c| u32::from(c) - u32::from(BRAILLE_BLANK))
}

/// Convert a pixel to its owning cell.
#[inline]
pub const fn cell_point(pixel: Point) -> Point {
    Point::new(pixel.x / COL_MULT, pixel.y / ROW_MULT)
}

#[inline]
const fn pixel_bit(pixel: Point) -> u32 {
    BRAILLE_BITS[(pixel.x % COL_MULT) as usize][(pixel.y % ROW_MULT) as usize]
}

#[derive(Debug, Clone, Copy)]
enum PixelOp {
    Set,
    Clear,
    Toggle,
}

/// A pixel grid twice as wide and four times as tall as its cell area.
///
/// # Example
///
/// ```
/// use tdash_core::{Point, Rect};
/// use tdash_render::braille::BrailleCanvas;
/// use tdash_render::cell::StyleOpts;
///
/// let mut bc = BrailleCanvas::new(Rect::new(0, 0, 1, 1)).unwrap();
/// bc.set_pixel(Point::new(1, 3), &StyleOpts::new()).unwrap();
/// assert_eq!(bc.cell(Point::new(0, 0)).unwrap().rune(), Some('\u{2880}'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrailleCanvas {
    canvas: Canvas,
}

impl BrailleCanvas {
    /// Create a braille canvas covering `cell_area` of its destination.
    pub fn new(cell_area: Rect) -> Result<Self> {
        Ok(Self {
            canvas: Canvas::new(cell_area)?,
        })
    }

    /// Create a braille canvas laying out runes with `widths`.
    pub fn with_widths(cell_area: Rect, widths: RuneWidths) -> Result<Self> {
        Ok(Self {
            canvas: Canvas::with_widths(cell_area, widths)?,
        })
    }

    /// Size in pixels.
    #[inline]
    pub fn size(&self) -> Point {
        let cells = self.canvas.size();
        Point::new(cells.x * COL_MULT, cells.y * ROW_MULT)
    }

    /// Zero-based pixel area.
    #[inline]
    pub fn area(&self) -> Rect {
        let size = self.size();
        Rect::sized(size.x, size.y)
    }

    /// Zero-based cell area.
    #[inline]
    pub fn cell_area(&self) -> Rect {
        self.canvas.area()
    }

    /// The destination area this canvas covers, in cells.
    #[inline]
    pub fn offset(&self) -> Rect {
        self.canvas.offset()
    }

    /// The underlying cell canvas.
    #[inline]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Bounds-checked read of the cell at `p` (cell coordinates).
    pub fn cell(&self, p: Point) -> Result<Cell> {
        self.canvas.cell(p)
    }

    fn check_pixel(&self, p: Point) -> Result<()> {
        if !self.area().contains(p) {
            return Err(Error::out_of_bounds(format!(
                "pixel {p} falls outside of the braille canvas area {}",
                self.area()
            )));
        }
        Ok(())
    }

    fn modify(&mut self, p: Point, op: PixelOp, opts: &StyleOpts) -> Result<()> {
        self.check_pixel(p)?;
        let cp = cell_point(p);
        let cell = self.canvas.cell(cp)?;
        let bit = pixel_bit(p);
        let mask = match (op, cell_mask(&cell)) {
            (PixelOp::Clear, None) => return Ok(()),
            (PixelOp::Clear, Some(m)) => m & !bit,
            (PixelOp::Set, m) => m.unwrap_or(0) | bit,
            (PixelOp::Toggle, m) => m.unwrap_or(0) ^ bit,
        };
        // A cell without raised dots goes back to empty so that clearing the
        // last pixel restores an untouched cell.
        let content = match mask {
            0 => CellContent::EMPTY,
            m => CellContent::from_char(
                char::from_u32(u32::from(BRAILLE_BLANK) + m).unwrap_or(BRAILLE_BLANK),
            ),
        };
        self.canvas
            .buffer_mut()
            .put(cp, content, cell.style.apply(opts))?;
        Ok(())
    }

    /// Raise the dot at pixel `p`, keeping the other dots of its cell.
    ///
    /// `opts` are applied onto the style of the owning cell.
    pub fn set_pixel(&mut self, p: Point, opts: &StyleOpts) -> Result<()> {
        self.modify(p, PixelOp::Set, opts)
    }

    /// Lower the dot at pixel `p`.
    ///
    /// A no-op when the owning cell holds no braille rune.
    pub fn clear_pixel(&mut self, p: Point, opts: &StyleOpts) -> Result<()> {
        self.modify(p, PixelOp::Clear, opts)
    }

    /// Flip the dot at pixel `p`.
    pub fn toggle_pixel(&mut self, p: Point, opts: &StyleOpts) -> Result<()> {
        self.modify(p, PixelOp::Toggle, opts)
    }

    /// Whether the dot at pixel `p` is raised.
    pub fn pixel(&self, p: Point) -> Result<bool> {
        self.check_pixel(p)?;
        let cell = self.canvas.cell(cell_point(p))?;
        Ok(cell_mask(&cell).is_some_and(|m| m & pixel_bit(p) != 0))
    }

    /// Replace the style of the cell at `p` (cell coordinates), keeping its
    /// dots.
    pub fn set_cell_opts(&mut self, p: Point, opts: &StyleOpts) -> Result<()> {
        self.canvas.set_cell_opts(p, opts)
    }

    /// Replace the style of every cell in `rect` (cell coordinates).
    pub fn set_area_cell_opts(&mut self, rect: Rect, opts: &StyleOpts) -> Result<()> {
        self.canvas.set_area_cell_opts(rect, opts)
    }

    /// Lower every dot and reset every cell style.
    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    /// Copy the cells into `dst` at this canvas's offset.
    pub fn copy_to(&self, dst: &mut Canvas) -> Result<()> {
        self.canvas.copy_to(dst)
    }

    /// Write the cells onto `term` at this canvas's offset.
    pub fn apply<T: Terminal + ?Sized>(&self, term: &mut T) -> Result<()> {
        self.canvas.apply(term)
    }
}
