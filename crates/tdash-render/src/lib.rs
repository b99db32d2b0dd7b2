#![forbid(unsafe_code)]

//! Render kernel: cells, buffers, canvases, the braille pixel canvas, and
//! drawing primitives.
//!
//! A widget draws into its own [`Canvas`](canvas::Canvas), optionally through
//! a [`BrailleCanvas`](braille::BrailleCanvas) copied back into it, and the
//! finished canvas is applied onto a [`Terminal`](terminal::Terminal).

pub mod braille;
pub mod buffer;
pub mod canvas;
pub mod cell;
pub mod drawing;
pub mod terminal;

pub use braille::BrailleCanvas;
pub use buffer::Buffer;
pub use canvas::Canvas;
pub use cell::{Cell, CellContent, CellStyle, PackedRgba, StyleFlags, StyleOpts};
pub use terminal::{HeadlessTerminal, Terminal};
