#![forbid(unsafe_code)]

//! tdash public facade crate.
//!
//! Re-exports the rendering core of a terminal dashboard: geometry and
//! errors, rune widths, layout math, cell canvases with their drawing
//! primitives, and segment displays. Most users only need the [`prelude`].
//!
//! # Example
//! ```
//! use tdash::prelude::*;
//!
//! let mut term = HeadlessTerminal::new(Point::new(4, 3)).unwrap();
//! let mut canvas = Canvas::new(Rect::new(0, 0, 4, 3)).unwrap();
//! let area = canvas.area();
//! border(&mut canvas, area, &BorderOptions::default()).unwrap();
//! text(&mut canvas, "hi", Point::new(1, 1), &TextOptions::default()).unwrap();
//! canvas.apply(&mut term).unwrap();
//! assert_eq!(term.to_plain_text(), "┌──┐\n│hi│\n└──┘");
//! ```

// --- Core re-exports -------------------------------------------------------

pub use tdash_core::{Error, ErrorKind, Point, Rect, Result};

// --- Text re-exports -------------------------------------------------------

pub use tdash_text::{OverrunMode, RuneWidths, WidthCache, trim_text};

// --- Layout re-exports -----------------------------------------------------

pub use tdash_layout::{Horizontal, Vertical};

// --- Render re-exports -----------------------------------------------------

pub use tdash_render::{
    BrailleCanvas, Buffer, Canvas, Cell, CellContent, CellStyle, HeadlessTerminal, PackedRgba,
    StyleFlags, StyleOpts, Terminal,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BrailleCanvas, Canvas, Error, ErrorKind, HeadlessTerminal, Horizontal, OverrunMode,
        PackedRgba, Point, Rect, Result, StyleOpts, Terminal, Vertical,
    };

    pub use tdash_render::drawing::*;

    pub use crate::{core, layout, render, segdisp, text};
}

pub use tdash_core as core;
pub use tdash_layout as layout;
pub use tdash_render as render;
pub use tdash_segdisp as segdisp;
pub use tdash_text as text;
