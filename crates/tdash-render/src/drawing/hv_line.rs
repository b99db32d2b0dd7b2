#![forbid(unsafe_code)]

//! Horizontal and vertical lines drawn with box-drawing characters.
//!
//! All lines of one batch are merged before anything is drawn: every cell
//! records which of its four sides a line leaves through, and the glyph is
//! picked from that set. Corners, T-junctions and crosses therefore appear
//! wherever lines of the batch meet, whatever order they were passed in.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use rustc_hash::FxHashMap;
use tdash_core::{Error, Point, Result};

use crate::canvas::Canvas;
use crate::cell::StyleOpts;

/// Box-drawing characters of one line style.
///
/// The junction names follow the side that carries the stem, so `tee_up` is
/// `┴` (a horizontal line with a stem going up).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxChars {
    /// Vertical run, `│` in the light style.
    pub vertical: char,
    /// Horizontal run, `─` in the light style.
    pub horizontal: char,
    /// Top left corner, `┌` in the light style.
    pub top_left: char,
    /// Top right corner, `┐` in the light style.
    pub top_right: char,
    /// Bottom left corner, `└` in the light style.
    pub bottom_left: char,
    /// Bottom right corner, `┘` in the light style.
    pub bottom_right: char,
    /// Horizontal line with a stem going up, `┴` in the light style.
    pub tee_up: char,
    /// Horizontal line with a stem going down, `┬` in the light style.
    pub tee_down: char,
    /// Vertical line with a stem going left, `┤` in the light style.
    pub tee_left: char,
    /// Vertical line with a stem going right, `├` in the light style.
    pub tee_right: char,
    /// Crossing, `┼` in the light style.
    pub cross: char,
}

impl BoxChars {
    /// Single thin lines with square corners.
    pub const LIGHT: Self = Self {
        vertical: '│',
        horizontal: '─',
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        tee_up: '┴',
        tee_down: '┬',
        tee_left: '┤',
        tee_right: '├',
        cross: '┼',
    };

    /// Double lines.
    pub const DOUBLE: Self = Self {
        vertical: '║',
        horizontal: '═',
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        tee_up: '╩',
        tee_down: '╦',
        tee_left: '╣',
        tee_right: '╠',
        cross: '╬',
    };

    /// Single thin lines with rounded corners.
    pub const ROUND: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        ..Self::LIGHT
    };

    /// The glyph for a cell with lines leaving through `sides`.
    fn glyph(&self, sides: Sides) -> char {
        let up = sides.contains(Sides::UP);
        let down = sides.contains(Sides::DOWN);
        let left = sides.contains(Sides::LEFT);
        let right = sides.contains(Sides::RIGHT);
        match (up, down, left, right) {
            (true, true, true, true) => self.cross,
            (true, false, true, true) => self.tee_up,
            (false, true, true, true) => self.tee_down,
            (true, true, true, false) => self.tee_left,
            (true, true, false, true) => self.tee_right,
            (false, true, false, true) => self.top_left,
            (false, true, true, false) => self.top_right,
            (true, false, false, true) => self.bottom_left,
            (true, false, true, false) => self.bottom_right,
            (false, false, _, _) => self.horizontal,
            (_, _, false, false) => self.vertical,
        }
    }
}

/// Style of the drawn lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineStyle {
    /// No line; rejected by the drawing functions.
    None,
    /// `─ │ ┌`
    #[default]
    Light,
    /// `═ ║ ╔`
    Double,
    /// `─ │ ╭`
    Round,
}

impl LineStyle {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 4] = [Self::None, Self::Light, Self::Double, Self::Round];

    /// Name used by `Display` and `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Light => "light",
            Self::Double => "double",
            Self::Round => "round",
        }
    }

    /// The characters of this style, `None` for [`LineStyle::None`].
    pub const fn chars(self) -> Option<&'static BoxChars> {
        match self {
            Self::None => None,
            Self::Light => Some(&BoxChars::LIGHT),
            Self::Double => Some(&BoxChars::DOUBLE),
            Self::Round => Some(&BoxChars::ROUND),
        }
    }

    pub(crate) fn require_chars(self) -> Result<&'static BoxChars> {
        self.chars().ok_or_else(|| {
            Error::invalid_argument(format!("line style {self} cannot be drawn"))
        })
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for LineStyle {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| Error::invalid_argument(format!("unsupported line style {value}")))
    }
}

impl FromStr for LineStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.name() == s)
            .ok_or_else(|| Error::invalid_argument(format!("unsupported line style {s:?}")))
    }
}

bitflags! {
    /// Sides of a cell a line leaves through.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct Sides: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

/// One horizontal or vertical line, both end cells included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HvLine {
    /// First end cell.
    pub start: Point,
    /// Last end cell, on the same row or column as `start`.
    pub end: Point,
    /// Applied after the batch options on every cell of this line.
    pub cell_opts: Option<StyleOpts>,
}

impl HvLine {
    /// A line from `start` to `end` without its own cell options.
    pub const fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            cell_opts: None,
        }
    }

    #[must_use]
    pub const fn cell_opts(mut self, opts: StyleOpts) -> Self {
        self.cell_opts = Some(opts);
        self
    }

    const fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }
}

/// Options for [`hv_lines`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HvLineOptions {
    /// Box-drawing characters to use.
    pub line_style: LineStyle,
    /// Applied to every cell of the batch.
    pub cell_opts: StyleOpts,
}

impl HvLineOptions {
    #[must_use]
    pub const fn line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }

    #[must_use]
    pub const fn cell_opts(mut self, opts: StyleOpts) -> Self {
        self.cell_opts = opts;
        self
    }
}

fn validate(canvas: &Canvas, line: &HvLine) -> Result<()> {
    let area = canvas.area();
    if !area.contains(line.start) || !area.contains(line.end) {
        return Err(Error::out_of_bounds(format!(
            "line {}-{} falls outside of the canvas area {area}",
            line.start, line.end
        )));
    }
    if line.start == line.end {
        return Err(Error::invalid_argument(format!(
            "line {}-{} has zero length",
            line.start, line.end
        )));
    }
    if line.start.x != line.end.x && line.start.y != line.end.y {
        return Err(Error::invalid_argument(format!(
            "line {}-{} is neither horizontal nor vertical",
            line.start, line.end
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, Default)]
struct CellLines {
    sides: Sides,
    opts: StyleOpts,
}

impl Default for Sides {
    fn default() -> Self {
        Self::empty()
    }
}

/// Draw `lines` onto `canvas`, joining them where they meet.
///
/// Every line is validated before any cell is written: lines must be
/// horizontal or vertical, at least two cells long and inside the canvas.
pub fn hv_lines(canvas: &mut Canvas, lines: &[HvLine], opts: &HvLineOptions) -> Result<()> {
    let chars = opts.line_style.require_chars()?;
    for line in lines {
        validate(canvas, line)?;
    }

    let mut cells: FxHashMap<Point, CellLines> = FxHashMap::default();
    for line in lines {
        let line_opts = match &line.cell_opts {
            Some(o) => opts.cell_opts.merge(o),
            None => opts.cell_opts,
        };
        let (low, high, before, after) = if line.is_horizontal() {
            let (a, b) = ordered(line.start.x, line.end.x);
            (a, b, Sides::LEFT, Sides::RIGHT)
        } else {
            let (a, b) = ordered(line.start.y, line.end.y);
            (a, b, Sides::UP, Sides::DOWN)
        };
        for i in low..=high {
            let p = if line.is_horizontal() {
                Point::new(i, line.start.y)
            } else {
                Point::new(line.start.x, i)
            };
            let entry = cells.entry(p).or_default();
            if i > low {
                entry.sides |= before;
            }
            if i < high {
                entry.sides |= after;
            }
            entry.opts = entry.opts.merge(&line_opts);
        }
    }

    tdash_core::debug!(lines = lines.len(), cells = cells.len(), "drawing hv lines");
    for (p, cell) in cells {
        canvas.set_cell(p, chars.glyph(cell.sides), &cell.opts)?;
    }
    Ok(())
}

const fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b { (a, b) } else { (b, a) }
}
