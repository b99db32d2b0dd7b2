#![forbid(unsafe_code)]

//! Canvas: a widget's private drawing surface.
//!
//! A canvas owns a [`Buffer`] addressed from `(0, 0)` and remembers the area
//! of its destination it covers. Widgets draw into the canvas and the result
//! becomes visible only once it is copied into a parent canvas with
//! [`Canvas::copy_to`] or applied onto a terminal with [`Canvas::apply`].

use tdash_core::{Error, Point, Rect, Result};
use tdash_text::RuneWidths;

use crate::buffer::Buffer;
use crate::cell::{Cell, StyleOpts};
use crate::terminal::Terminal;

/// A drawing surface for one area of a destination.
///
/// # Example
///
/// ```
/// use tdash_core::{Point, Rect};
/// use tdash_render::canvas::Canvas;
/// use tdash_render::cell::StyleOpts;
/// use tdash_render::terminal::HeadlessTerminal;
///
/// let mut canvas = Canvas::new(Rect::new(1, 0, 3, 1)).unwrap();
/// canvas.set_cell(Point::new(0, 0), 'o', &StyleOpts::new()).unwrap();
/// canvas.set_cell(Point::new(1, 0), 'k', &StyleOpts::new()).unwrap();
///
/// let mut term = HeadlessTerminal::new(Point::new(4, 1)).unwrap();
/// canvas.apply(&mut term).unwrap();
/// assert_eq!(term.to_plain_text(), " ok ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    offset: Rect,
    buffer: Buffer,
}

impl Canvas {
    /// Create a canvas for `area` of its destination.
    ///
    /// Fails on negative coordinates or an empty area.
    pub fn new(area: Rect) -> Result<Self> {
        Self::with_widths(area, RuneWidths::default())
    }

    /// Create a canvas laying out runes with `widths`.
    pub fn with_widths(area: Rect, widths: RuneWidths) -> Result<Self> {
        if area.has_negative() {
            return Err(Error::out_of_bounds(format!(
                "canvas area {area} cannot have negative coordinates"
            )));
        }
        if area.is_empty() {
            return Err(Error::invalid_argument(format!(
                "canvas area {area} must not be empty"
            )));
        }
        Ok(Self {
            offset: area,
            buffer: Buffer::with_widths(area.size(), widths)?,
        })
    }

    /// Width and height in cells.
    #[inline]
    pub fn size(&self) -> Point {
        self.buffer.size()
    }

    /// The zero-based area of the canvas.
    #[inline]
    pub fn area(&self) -> Rect {
        self.buffer.area()
    }

    /// The area of the destination this canvas covers.
    #[inline]
    pub fn offset(&self) -> Rect {
        self.offset
    }

    #[inline]
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    #[inline]
    pub fn widths(&self) -> &RuneWidths {
        self.buffer.widths()
    }

    #[inline]
    pub(crate) fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    /// Reset every cell to the default rune and style.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Write `rune` at `p`, applying `opts` onto the existing style.
    ///
    /// Returns 1, or 2 when a full-width rune also took the next cell.
    pub fn set_cell(&mut self, p: Point, rune: char, opts: &StyleOpts) -> Result<usize> {
        self.buffer.set_cell(p, rune, opts)
    }

    /// Replace the style at `p` with the default style updated by `opts`.
    pub fn set_cell_opts(&mut self, p: Point, opts: &StyleOpts) -> Result<()> {
        self.buffer.set_cell_opts(p, opts)
    }

    fn check_within(&self, rect: Rect) -> Result<()> {
        if rect.has_negative() || !rect.is_within(&self.area()) {
            return Err(Error::out_of_bounds(format!(
                "unable to use area {rect}, it must fit inside the canvas area {}",
                self.area()
            )));
        }
        Ok(())
    }

    /// Fill `rect` with `rune` row by row.
    ///
    /// A full-width rune that no longer fits in the rest of a row of `rect`
    /// is not written there.
    pub fn set_area_cells(&mut self, rect: Rect, rune: char, opts: &StyleOpts) -> Result<()> {
        self.check_within(rect)?;
        let rw = self.buffer.cell_width(rune);
        for y in rect.min.y..rect.max.y {
            let mut x = rect.min.x;
            while x < rect.max.x {
                if x + rw > rect.max.x {
                    break;
                }
                let cells = self.set_cell(Point::new(x, y), rune, opts)?;
                x += cells as i32;
            }
        }
        Ok(())
    }

    /// Replace the style of every cell in `rect`.
    pub fn set_area_cell_opts(&mut self, rect: Rect, opts: &StyleOpts) -> Result<()> {
        self.check_within(rect)?;
        for y in rect.min.y..rect.max.y {
            for x in rect.min.x..rect.max.x {
                self.set_cell_opts(Point::new(x, y), opts)?;
            }
        }
        Ok(())
    }

    /// Bounds-checked read of the cell at `p`.
    pub fn cell(&self, p: Point) -> Result<Cell> {
        self.buffer.cell(p)
    }

    /// Copy every cell into `dst` at this canvas's offset.
    ///
    /// The offset area must lie inside `dst.area()`. Cells of `dst` outside
    /// the offset area are left alone. Fails without writing anything when a
    /// rune of this canvas takes a different number of cells in `dst`.
    pub fn copy_to(&self, dst: &mut Canvas) -> Result<()> {
        if !self.offset.is_within(&dst.area()) {
            tdash_core::debug!(src = %self.offset, dst = %dst.area(), "canvas copy does not fit");
            return Err(Error::does_not_fit(format!(
                "the canvas area {} doesn't fit or lie inside the destination canvas area {}",
                self.offset,
                dst.area()
            )));
        }
        self.check_widths(|rune| dst.buffer.cell_width(rune), "destination canvas")?;
        self.for_each_head(|p, cell| {
            dst.buffer.put(p, cell.content, cell.style).map(drop)
        })
    }

    /// Write every cell into the terminal's back buffer at this canvas's
    /// offset.
    ///
    /// Fails without writing anything when the offset area does not fit the
    /// terminal's current size or when the terminal measures a rune of this
    /// canvas differently. Empty cells are written as spaces.
    pub fn apply<T: Terminal + ?Sized>(&self, term: &mut T) -> Result<()> {
        let size = term.size();
        let term_area = Rect::sized(size.x.max(0), size.y.max(0));
        if !self.offset.is_within(&term_area) {
            tdash_core::debug!(canvas = %self.offset, terminal = %size, "canvas does not fit the terminal");
            return Err(Error::does_not_fit(format!(
                "the canvas area {} doesn't fit onto the terminal of size {size}",
                self.offset
            )));
        }
        self.check_widths(|rune| term.cell_width(rune), "terminal")?;
        self.for_each_head(|p, cell| term.set_cell(p, cell.rune().unwrap_or(' '), &cell.style))
    }

    /// Check that every rune takes as many cells at the destination as it
    /// does here, so the copied layout lines up cell for cell.
    fn check_widths(&self, dst_width: impl Fn(char) -> i32, dst: &str) -> Result<()> {
        for cell in self.buffer.cells() {
            let Some(rune) = cell.rune() else { continue };
            let (here, there) = (self.buffer.cell_width(rune), dst_width(rune));
            if here != there {
                tdash_core::debug!(?rune, here, there, "rune width differs at destination");
                return Err(Error::invalid_argument(format!(
                    "rune {rune:?} takes {here} cells on the canvas but {there} on the {dst}, their rune widths differ"
                )));
            }
        }
        Ok(())
    }

    /// Visit every cell except placeholders, translated to destination
    /// coordinates.
    fn for_each_head(&self, mut f: impl FnMut(Point, &Cell) -> Result<()>) -> Result<()> {
        let origin = self.offset.min;
        let width = self.buffer.width();
        for (i, cell) in self.buffer.cells().iter().enumerate() {
            if cell.is_continuation() {
                continue;
            }
            let i = i as i32;
            f(origin + Point::new(i % width, i / width), cell)?;
        }
        Ok(())
    }
}
