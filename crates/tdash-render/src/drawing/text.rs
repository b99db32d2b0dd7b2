#![forbid(unsafe_code)]

//! Single-line text, horizontal or vertical.

use std::borrow::Cow;

use tdash_core::{Error, Point, Result};
use tdash_text::{ELLIPSIS, OverrunMode, trim_text};

use crate::canvas::Canvas;
use crate::cell::StyleOpts;

/// Options for [`text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextOptions {
    /// Column where the text must stop (exclusive). Zero means the right
    /// edge of the canvas.
    pub max_x: i32,
    pub overrun: OverrunMode,
    pub cell_opts: StyleOpts,
}

impl TextOptions {
    #[must_use]
    pub const fn max_x(mut self, max_x: i32) -> Self {
        self.max_x = max_x;
        self
    }

    #[must_use]
    pub const fn overrun(mut self, mode: OverrunMode) -> Self {
        self.overrun = mode;
        self
    }

    #[must_use]
    pub const fn cell_opts(mut self, opts: StyleOpts) -> Self {
        self.cell_opts = opts;
        self
    }
}

/// Options for [`vertical_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerticalTextOptions {
    /// Row where the text must stop (exclusive). Zero means the bottom edge
    /// of the canvas.
    pub max_y: i32,
    pub overrun: OverrunMode,
    pub cell_opts: StyleOpts,
}

impl VerticalTextOptions {
    #[must_use]
    pub const fn max_y(mut self, max_y: i32) -> Self {
        self.max_y = max_y;
        self
    }

    #[must_use]
    pub const fn overrun(mut self, mode: OverrunMode) -> Self {
        self.overrun = mode;
        self
    }

    #[must_use]
    pub const fn cell_opts(mut self, opts: StyleOpts) -> Self {
        self.cell_opts = opts;
        self
    }
}

fn check_start(canvas: &Canvas, start: Point) -> Result<()> {
    if !canvas.area().contains(start) {
        return Err(Error::out_of_bounds(format!(
            "text start {start} falls outside of the canvas area {}",
            canvas.area()
        )));
    }
    Ok(())
}

/// Resolve a `max` bound against the canvas `limit` and the `start`
/// coordinate on the same axis. Returns the number of cells available.
fn available(name: &str, max: i32, limit: i32, start: i32) -> Result<usize> {
    if max < 0 || max > limit {
        return Err(Error::invalid_argument(format!(
            "{name}({max}) must be in the range 0..={limit}"
        )));
    }
    let max = if max == 0 { limit } else { max };
    if max <= start {
        return Err(Error::invalid_argument(format!(
            "{name}({max}) must be greater than the start coordinate {start}"
        )));
    }
    Ok((max - start) as usize)
}

/// Draw `text` left to right starting at `start`.
///
/// Full-width runes take two columns. Text that does not fit before
/// `max_x` is handled according to the overrun mode.
///
/// ```
/// use tdash_core::{Point, Rect};
/// use tdash_render::canvas::Canvas;
/// use tdash_render::drawing::{TextOptions, text};
/// use tdash_text::OverrunMode;
///
/// let mut c = Canvas::new(Rect::new(0, 0, 4, 1)).unwrap();
/// let opts = TextOptions::default().overrun(OverrunMode::ThreeDot);
/// text(&mut c, "hello", Point::new(0, 0), &opts).unwrap();
/// assert_eq!(c.buffer().to_plain_text(), "hel…");
/// ```
pub fn text(canvas: &mut Canvas, text: &str, start: Point, opts: &TextOptions) -> Result<()> {
    check_start(canvas, start)?;
    let cells = available("max_x", opts.max_x, canvas.size().x, start.x)?;
    let widths = canvas.widths().clone();
    widths.validate_text(text)?;
    let fitted = trim_text(text, cells, opts.overrun, &widths)?;

    let mut cur = start;
    for c in fitted.chars() {
        let written = canvas.set_cell(cur, c, &opts.cell_opts)?;
        cur.x += written as i32;
    }
    Ok(())
}

/// Keep at most `rows` runes of `text`, one rune per row.
fn trim_rows<'a>(text: &'a str, rows: usize, mode: OverrunMode) -> Result<Cow<'a, str>> {
    let count = text.chars().count();
    if count <= rows {
        return Ok(Cow::Borrowed(text));
    }
    match mode {
        OverrunMode::Strict => Err(Error::invalid_argument(format!(
            "text {text:?} takes {count} rows, only {rows} available in overrun mode {mode}"
        ))),
        OverrunMode::Trim => Ok(Cow::Owned(text.chars().take(rows).collect())),
        OverrunMode::ThreeDot => Ok(Cow::Owned(
            text.chars()
                .take(rows - 1)
                .chain(std::iter::once(ELLIPSIS))
                .collect(),
        )),
    }
}

/// Draw `text` top to bottom starting at `start`, one rune per row.
pub fn vertical_text(
    canvas: &mut Canvas,
    text: &str,
    start: Point,
    opts: &VerticalTextOptions,
) -> Result<()> {
    check_start(canvas, start)?;
    let rows = available("max_y", opts.max_y, canvas.size().y, start.y)?;
    canvas.widths().validate_text(text)?;
    let fitted = trim_rows(text, rows, opts.overrun)?;

    for (i, c) in fitted.chars().enumerate() {
        let p = Point::new(start.x, start.y + i as i32);
        canvas.set_cell(p, c, &opts.cell_opts)?;
    }
    Ok(())
}
