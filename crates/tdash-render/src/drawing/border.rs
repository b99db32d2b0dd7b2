#![forbid(unsafe_code)]

//! Rectangle borders with an optional title on the top edge.

use std::borrow::Cow;

use smallvec::SmallVec;
use tdash_core::{Error, Point, Rect, Result};
use tdash_layout::align::{self, Horizontal, Vertical};
use tdash_text::{OverrunMode, RuneWidths, trim_text};

use super::hv_line::{HvLine, HvLineOptions, LineStyle, hv_lines};
use super::text::{TextOptions, text};
use crate::canvas::Canvas;
use crate::cell::StyleOpts;

/// Options for [`border`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BorderOptions {
    pub line_style: LineStyle,
    pub cell_opts: StyleOpts,
    pub title: Option<String>,
    pub title_align: Horizontal,
    pub title_overrun: OverrunMode,
    pub title_cell_opts: StyleOpts,
}

impl BorderOptions {
    #[must_use]
    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }

    #[must_use]
    pub fn cell_opts(mut self, opts: StyleOpts) -> Self {
        self.cell_opts = opts;
        self
    }

    /// Title drawn over the top edge, between the corners.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>, overrun: OverrunMode) -> Self {
        self.title = Some(title.into());
        self.title_overrun = overrun;
        self
    }

    #[must_use]
    pub fn title_align(mut self, align: Horizontal) -> Self {
        self.title_align = align;
        self
    }

    #[must_use]
    pub fn title_cell_opts(mut self, opts: StyleOpts) -> Self {
        self.title_cell_opts = opts;
        self
    }
}

/// Draw a border along the edges of `rect`.
///
/// `rect` must lie inside the canvas and be at least two cells in both
/// dimensions.
pub fn border(canvas: &mut Canvas, rect: Rect, opts: &BorderOptions) -> Result<()> {
    if !rect.is_within(&canvas.area()) {
        return Err(Error::out_of_bounds(format!(
            "border area {rect} falls outside of the canvas area {}",
            canvas.area()
        )));
    }
    if rect.dx() < 2 || rect.dy() < 2 {
        return Err(Error::invalid_argument(format!(
            "border area {rect} must be at least 2x2 cells"
        )));
    }
    let widths = canvas.widths().clone();
    let title = match &opts.title {
        Some(title) => Some(place_title(rect, title, opts, &widths)?),
        None => None,
    };

    let (l, t) = (rect.min.x, rect.min.y);
    let (r, b) = (rect.max.x - 1, rect.max.y - 1);
    let lines: SmallVec<[HvLine; 4]> = SmallVec::from_buf([
        HvLine::new(Point::new(l, t), Point::new(r, t)),
        HvLine::new(Point::new(l, b), Point::new(r, b)),
        HvLine::new(Point::new(l, t), Point::new(l, b)),
        HvLine::new(Point::new(r, t), Point::new(r, b)),
    ]);
    let line_opts = HvLineOptions::default()
        .line_style(opts.line_style)
        .cell_opts(opts.cell_opts);
    hv_lines(canvas, &lines, &line_opts)?;

    if let Some((fitted, start)) = title {
        let text_opts = TextOptions::default()
            .max_x(rect.max.x - 1)
            .overrun(OverrunMode::Trim)
            .cell_opts(opts.cell_opts.merge(&opts.title_cell_opts));
        text(canvas, &fitted, start, &text_opts)?;
    }
    Ok(())
}

/// Fit `title` onto the top edge between the corners and find where it
/// starts.
fn place_title<'a>(
    rect: Rect,
    title: &'a str,
    opts: &BorderOptions,
    widths: &RuneWidths,
) -> Result<(Cow<'a, str>, Point)> {
    let space = Rect::new(rect.min.x + 1, rect.min.y, rect.max.x - 1, rect.min.y + 1);
    if space.is_empty() {
        return Err(Error::invalid_argument(format!(
            "border area {rect} leaves no room for the title {title:?}"
        )));
    }
    widths.validate_text(title)?;
    let fitted = trim_text(title, space.dx() as usize, opts.title_overrun, widths)?;
    let start = align::text(space, &fitted, opts.title_align, Vertical::Top, widths)?;
    Ok((fitted, start))
}
