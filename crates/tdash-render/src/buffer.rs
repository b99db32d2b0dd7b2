#![forbid(unsafe_code)]

//! Buffer grid storage.
//!
//! The `Buffer` is a fixed-size 2D grid of [`Cell`]s addressed by
//! `Point { x: column, y: row }`.
//!
//! # Layout
//!
//! Cells are stored in row-major order: `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation
//! 3. A full-width rune is followed in its row by exactly one
//!    [`CellContent::CONTINUATION`] cell; no continuation exists without
//!    its head

use tdash_core::{Error, Point, Rect, Result};
use tdash_text::RuneWidths;

use crate::cell::{Cell, CellContent, CellStyle, StyleOpts};

/// A 2D grid of terminal cells.
///
/// # Example
///
/// ```
/// use tdash_core::Point;
/// use tdash_render::buffer::Buffer;
/// use tdash_render::cell::StyleOpts;
///
/// let mut buffer = Buffer::new(Point::new(4, 1)).unwrap();
/// assert_eq!(buffer.set_cell(Point::new(0, 0), '界', &StyleOpts::new()).unwrap(), 2);
/// assert!(buffer.is_continuation(Point::new(1, 0)).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    widths: RuneWidths,
}

impl Buffer {
    /// Create a buffer of `size` columns and rows with default rune widths.
    ///
    /// Fails unless both dimensions are positive.
    pub fn new(size: Point) -> Result<Self> {
        Self::with_widths(size, RuneWidths::default())
    }

    /// Create a buffer measuring runes with `widths`.
    pub fn with_widths(size: Point, widths: RuneWidths) -> Result<Self> {
        if size.x < 1 || size.y < 1 {
            return Err(Error::invalid_argument(format!(
                "buffer size {size} must be positive in both dimensions"
            )));
        }
        let len = size.x as usize * size.y as usize;
        Ok(Self {
            width: size.x,
            height: size.y,
            cells: vec![Cell::default(); len],
            widths,
        })
    }

    /// Number of columns.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Columns and rows.
    #[inline]
    pub const fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Zero-based rectangle covering the whole buffer.
    #[inline]
    pub const fn area(&self) -> Rect {
        Rect::sized(self.width, self.height)
    }

    /// The rune widths this buffer lays runes out with.
    #[inline]
    pub fn widths(&self) -> &RuneWidths {
        &self.widths
    }

    /// Columns `rune` occupies in this buffer.
    ///
    /// Zero-width runes still occupy their own cell.
    #[inline]
    pub fn cell_width(&self, rune: char) -> i32 {
        if self.widths.rune_width(rune) >= 2 { 2 } else { 1 }
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height {
            Some(p.y as usize * self.width as usize + p.x as usize)
        } else {
            None
        }
    }

    fn checked_index(&self, p: Point) -> Result<usize> {
        self.index(p).ok_or_else(|| {
            Error::out_of_bounds(format!("point {p} falls outside of the buffer area {}", self.area()))
        })
    }

    /// Get a reference to the cell at `p`, `None` outside the buffer.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Bounds-checked copy of the cell at `p`.
    pub fn cell(&self, p: Point) -> Result<Cell> {
        let i = self.checked_index(p)?;
        Ok(self.cells[i])
    }

    /// Whether `p` is the placeholder behind a full-width rune.
    pub fn is_continuation(&self, p: Point) -> Result<bool> {
        let i = self.checked_index(p)?;
        Ok(self.cells[i].is_continuation())
    }

    /// Number of cells from `p` to the end of its row, `p` included.
    pub fn remaining_width(&self, p: Point) -> Result<i32> {
        self.checked_index(p)?;
        Ok(self.width - p.x)
    }

    /// Write `rune` at `p`, applying `opts` onto the cell's current style.
    ///
    /// Returns the number of cells the rune occupies. Fails when `p` is a
    /// continuation placeholder or when a full-width rune does not fit in
    /// the rest of the row.
    pub fn set_cell(&mut self, p: Point, rune: char, opts: &StyleOpts) -> Result<usize> {
        let i = self.checked_index(p)?;
        if self.cells[i].is_continuation() {
            return Err(Error::out_of_bounds(format!(
                "cannot set rune {rune:?} at point {p}, it is occupied by the full-width rune in the previous cell"
            )));
        }
        let style = self.cells[i].style.apply(opts);
        self.put(p, CellContent::from_char(rune), style)
    }

    /// Replace the style at `p` with the default style updated by `opts`.
    ///
    /// The rune is kept. Empty `opts` reset the cell to the default style.
    pub fn set_cell_opts(&mut self, p: Point, opts: &StyleOpts) -> Result<()> {
        let i = self.checked_index(p)?;
        self.cells[i].style = CellStyle::default().apply(opts);
        Ok(())
    }

    /// Write `content` with exactly `style` at `p`.
    ///
    /// Unlike [`Buffer::set_cell`], writing onto a placeholder is allowed: the
    /// full-width rune owning it is removed first. Used when compositing one
    /// grid onto another.
    pub fn put(&mut self, p: Point, content: CellContent, style: CellStyle) -> Result<usize> {
        let i = self.checked_index(p)?;
        let cells = match content.as_char() {
            Some(c) => self.cell_width(c),
            None => 1,
        };
        let remaining = self.width - p.x;
        if cells > remaining {
            return Err(Error::out_of_bounds(format!(
                "cannot set {content:?} of width {cells} at point {p}, only {remaining} cells remain in the row"
            )));
        }

        self.release(p);
        self.cells[i] = Cell { content, style };
        if cells == 2 {
            let tail = Point::new(p.x + 1, p.y);
            self.release(tail);
            let t = i + 1;
            self.cells[t] = Cell {
                content: CellContent::CONTINUATION,
                style,
            };
        }
        Ok(cells as usize)
    }

    /// Detach `p` from any full-width rune it belongs to, so it can be
    /// overwritten without leaving a stale head or placeholder behind.
    fn release(&mut self, p: Point) {
        let Some(i) = self.index(p) else { return };
        if self.cells[i].is_continuation() {
            // The head is always directly to the left.
            if p.x > 0 {
                self.cells[i - 1] = Cell::default();
            }
            self.cells[i] = Cell::default();
            return;
        }
        if let Some(c) = self.cells[i].rune()
            && self.cell_width(c) == 2
            && p.x + 1 < self.width
            && self.cells[i + 1].is_continuation()
        {
            self.cells[i + 1] = Cell::default();
        }
    }

    /// Reset every cell to the default.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cells of row `y`, `None` outside the buffer.
    #[inline]
    pub fn row_cells(&self, y: i32) -> Option<&[Cell]> {
        if y < 0 || y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        self.cells.get(start..start + self.width as usize)
    }

    /// Runes of every row joined by newlines. Empty cells read as spaces and
    /// placeholders are skipped.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for y in 0..self.height {
            if y > 0 {
                out.push('\n');
            }
            for cell in self.row_cells(y).unwrap_or_default() {
                if cell.is_continuation() {
                    continue;
                }
                out.push(cell.rune().unwrap_or(' '));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{PackedRgba, StyleFlags};
    use tdash_core::ErrorKind;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn buf(w: i32, h: i32) -> Buffer {
        Buffer::new(p(w, h)).unwrap()
    }

    #[test]
    fn buffer_creation() {
        let b = buf(3, 2);
        assert_eq!(b.size(), p(3, 2));
        assert_eq!(b.area(), Rect::new(0, 0, 3, 2));
        assert_eq!(b.cells().len(), 6);
        assert!(b.cells().iter().all(Cell::is_empty));
    }

    #[test]
    fn buffer_rejects_non_positive_size() {
        for size in [p(0, 1), p(1, 0), p(-1, 3)] {
            assert_eq!(Buffer::new(size).unwrap_err().kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn row_cells_outside_is_none() {
        let mut b = buf(3, 2);
        b.set_cell(p(1, 1), 'r', &StyleOpts::new()).unwrap();
        let row = b.row_cells(1).unwrap();
        assert_eq!(row.len(), 3);
        assert_eq!(row[1].rune(), Some('r'));
        assert!(b.row_cells(2).is_none());
        assert!(b.row_cells(-1).is_none());
    }

    #[test]
    fn set_and_get() {
        let mut b = buf(3, 2);
        assert_eq!(b.set_cell(p(2, 1), 'x', &StyleOpts::new()).unwrap(), 1);
        assert_eq!(b.cell(p(2, 1)).unwrap().rune(), Some('x'));
        assert_eq!(b.get(p(2, 1)).and_then(Cell::rune), Some('x'));
        assert!(b.get(p(3, 1)).is_none());
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let mut b = buf(3, 2);
        for bad in [p(3, 0), p(0, 2), p(-1, 0)] {
            let err = b.set_cell(bad, 'x', &StyleOpts::new()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::OutOfBounds);
            assert!(b.cell(bad).is_err());
        }
    }

    #[test]
    fn set_cell_merges_style() {
        let mut b = buf(2, 1);
        b.set_cell(p(0, 0), 'a', &StyleOpts::new().fg(PackedRgba::RED)).unwrap();
        b.set_cell(p(0, 0), 'b', &StyleOpts::new().bold()).unwrap();
        let cell = b.cell(p(0, 0)).unwrap();
        assert_eq!(cell.rune(), Some('b'));
        assert_eq!(cell.style.fg, Some(PackedRgba::RED));
        assert!(cell.style.flags.contains(StyleFlags::BOLD));
    }

    #[test]
    fn set_cell_opts_replaces_style() {
        let mut b = buf(2, 1);
        b.set_cell(p(0, 0), 'a', &StyleOpts::new().fg(PackedRgba::RED).bold()).unwrap();
        b.set_cell_opts(p(0, 0), &StyleOpts::new().bg(PackedRgba::BLUE)).unwrap();
        let cell = b.cell(p(0, 0)).unwrap();
        assert_eq!(cell.rune(), Some('a'));
        assert_eq!(cell.style.fg, None);
        assert_eq!(cell.style.bg, Some(PackedRgba::BLUE));
        assert!(cell.style.flags.is_empty());

        b.set_cell_opts(p(0, 0), &StyleOpts::new()).unwrap();
        assert_eq!(b.cell(p(0, 0)).unwrap().style, CellStyle::default());
    }

    #[test]
    fn wide_rune_reserves_next_cell() {
        let mut b = buf(3, 1);
        assert_eq!(b.set_cell(p(0, 0), '界', &StyleOpts::new()).unwrap(), 2);
        assert!(b.is_continuation(p(1, 0)).unwrap());
        assert!(!b.is_continuation(p(2, 0)).unwrap());
        let err = b.set_cell(p(1, 0), 'x', &StyleOpts::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    }

    #[test]
    fn wide_rune_at_row_end_fails() {
        let mut b = buf(3, 1);
        let err = b.set_cell(p(2, 0), '界', &StyleOpts::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
        assert!(b.cell(p(2, 0)).unwrap().is_empty());
    }

    #[test]
    fn overwriting_wide_head_clears_placeholder() {
        let mut b = buf(3, 1);
        b.set_cell(p(0, 0), '界', &StyleOpts::new()).unwrap();
        assert_eq!(b.set_cell(p(0, 0), 'a', &StyleOpts::new()).unwrap(), 1);
        assert!(!b.is_continuation(p(1, 0)).unwrap());
        assert_eq!(b.to_plain_text(), "a  ");
    }

    #[test]
    fn wide_rune_over_wide_head_clears_its_placeholder() {
        let mut b = buf(4, 1);
        b.set_cell(p(1, 0), '界', &StyleOpts::new()).unwrap();
        b.set_cell(p(0, 0), '世', &StyleOpts::new()).unwrap();
        assert!(b.is_continuation(p(1, 0)).unwrap());
        assert!(!b.is_continuation(p(2, 0)).unwrap());
        assert_eq!(b.to_plain_text(), "世  ");
    }

    #[test]
    fn put_over_placeholder_removes_owner() {
        let mut b = buf(3, 1);
        b.set_cell(p(0, 0), '界', &StyleOpts::new()).unwrap();
        b.put(p(1, 0), CellContent::from_char('x'), CellStyle::default()).unwrap();
        assert!(b.cell(p(0, 0)).unwrap().is_empty());
        assert_eq!(b.to_plain_text(), " x ");
    }

    #[test]
    fn zero_width_rune_takes_one_cell() {
        let mut b = buf(2, 1);
        assert_eq!(b.set_cell(p(0, 0), '\u{301}', &StyleOpts::new()).unwrap(), 1);
    }

    #[test]
    fn overrides_change_layout() {
        let widths = RuneWidths::new().with_override('a', 2).unwrap();
        let mut b = Buffer::with_widths(p(3, 1), widths).unwrap();
        assert_eq!(b.set_cell(p(0, 0), 'a', &StyleOpts::new()).unwrap(), 2);
        assert_eq!(b.remaining_width(p(1, 0)).unwrap(), 2);
    }

    #[test]
    fn clear_resets_all() {
        let mut b = buf(2, 2);
        b.set_cell(p(1, 1), 'z', &StyleOpts::new().bold()).unwrap();
        b.clear();
        assert!(b.cells().iter().all(|c| *c == Cell::default()));
    }

    #[test]
    fn plain_text_dump() {
        let mut b = buf(3, 2);
        b.set_cell(p(0, 0), 'a', &StyleOpts::new()).unwrap();
        b.set_cell(p(1, 1), '界', &StyleOpts::new()).unwrap();
        assert_eq!(b.to_plain_text(), "a  \n 界");
    }
}
