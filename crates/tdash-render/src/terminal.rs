#![forbid(unsafe_code)]

//! The terminal sink canvases are applied onto.
//!
//! Real backends (raw mode, escape sequences, input) live outside the
//! rendering core. [`HeadlessTerminal`] is an in-memory implementation for
//! tests and off-screen rendering.

use tdash_core::{Point, Result};
use tdash_text::RuneWidths;

use crate::buffer::Buffer;
use crate::cell::{Cell, CellContent, CellStyle};

/// Destination of a frame.
///
/// The size may change between frames; callers query it right before
/// applying and writes outside it fail instead of being clipped.
pub trait Terminal {
    /// Current size in cells.
    fn size(&self) -> Point;

    /// Write `rune` with `style` into the back buffer.
    fn set_cell(&mut self, p: Point, rune: char, style: &CellStyle) -> Result<()>;

    /// Cells `rune` occupies on this terminal, 1 or 2.
    fn cell_width(&self, rune: char) -> i32;
}

/// A terminal backed by an in-memory [`Buffer`].
#[derive(Debug, Clone)]
pub struct HeadlessTerminal {
    buffer: Buffer,
}

impl HeadlessTerminal {
    /// Create a terminal of `size` cells.
    pub fn new(size: Point) -> Result<Self> {
        Self::with_widths(size, RuneWidths::default())
    }

    /// Create a terminal laying out runes with `widths`.
    pub fn with_widths(size: Point, widths: RuneWidths) -> Result<Self> {
        Ok(Self {
            buffer: Buffer::with_widths(size, widths)?,
        })
    }

    /// Change the size, discarding the back buffer content.
    pub fn resize(&mut self, size: Point) -> Result<()> {
        self.buffer = Buffer::with_widths(size, self.buffer.widths().clone())?;
        Ok(())
    }

    /// Cell at `p`.
    pub fn cell(&self, p: Point) -> Result<Cell> {
        self.buffer.cell(p)
    }

    /// Reset every cell.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// The back buffer.
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Rows of runes joined by newlines.
    pub fn to_plain_text(&self) -> String {
        self.buffer.to_plain_text()
    }
}

impl Terminal for HeadlessTerminal {
    fn size(&self) -> Point {
        self.buffer.size()
    }

    fn set_cell(&mut self, p: Point, rune: char, style: &CellStyle) -> Result<()> {
        self.buffer.put(p, CellContent::from_char(rune), *style)?;
        Ok(())
    }

    fn cell_width(&self, rune: char) -> i32 {
        self.buffer.cell_width(rune)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{PackedRgba, StyleOpts};

    #[test]
    fn writes_and_reads_back() {
        let mut term = HeadlessTerminal::new(Point::new(3, 2)).unwrap();
        let style = CellStyle::default().apply(&StyleOpts::new().fg(PackedRgba::GREEN));
        term.set_cell(Point::new(1, 1), 'q', &style).unwrap();
        let cell = term.cell(Point::new(1, 1)).unwrap();
        assert_eq!(cell.rune(), Some('q'));
        assert_eq!(cell.style, style);
        assert_eq!(term.to_plain_text(), "   \n q ");
    }

    #[test]
    fn cell_width_follows_overrides() {
        let widths = RuneWidths::new().with_override('a', 2).unwrap();
        let term = HeadlessTerminal::with_widths(Point::new(2, 1), widths).unwrap();
        assert_eq!(term.cell_width('a'), 2);
        assert_eq!(term.cell_width('b'), 1);
        assert_eq!(term.cell_width('界'), 2);
    }

    #[test]
    fn writes_outside_fail() {
        let mut term = HeadlessTerminal::new(Point::new(2, 2)).unwrap();
        assert!(term.set_cell(Point::new(2, 0), 'x', &CellStyle::default()).is_err());
    }

    #[test]
    fn resize_discards_content() {
        let mut term = HeadlessTerminal::new(Point::new(2, 2)).unwrap();
        term.set_cell(Point::new(0, 0), 'x', &CellStyle::default()).unwrap();
        term.resize(Point::new(4, 1)).unwrap();
        assert_eq!(term.size(), Point::new(4, 1));
        assert_eq!(term.to_plain_text(), "    ");
        assert!(term.resize(Point::new(0, 1)).is_err());
    }

    #[test]
    fn clear_resets() {
        let mut term = HeadlessTerminal::new(Point::new(2, 1)).unwrap();
        term.set_cell(Point::new(0, 0), '界', &CellStyle::default()).unwrap();
        term.clear();
        assert!(term.buffer().cells().iter().all(Cell::is_empty));
    }
}
