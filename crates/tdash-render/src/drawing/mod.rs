#![forbid(unsafe_code)]

//! Drawing primitives.
//!
//! Cell primitives ([`hv_lines`], [`border`], [`rectangle`], [`text`],
//! [`vertical_text`], [`resize_needed`]) draw onto a [`Canvas`]; pixel
//! primitives ([`braille_line`], [`braille_circle`], [`braille_fill`]) draw
//! onto a [`BrailleCanvas`]. Every primitive validates its arguments before
//! writing, and takes an options struct whose `Default` is the common case.
//!
//! [`Canvas`]: crate::canvas::Canvas
//! [`BrailleCanvas`]: crate::braille::BrailleCanvas

pub mod border;
pub mod braille_circle;
pub mod braille_fill;
pub mod braille_line;
pub mod hv_line;
pub mod rectangle;
pub mod resize;
pub mod text;

pub use border::{BorderOptions, border};
pub use braille_circle::{BrailleCircleOptions, braille_circle, circle_points};
pub use braille_fill::{BrailleFillOptions, braille_fill};
pub use braille_line::{BrailleLineOptions, braille_line, line_points};
pub use hv_line::{BoxChars, HvLine, HvLineOptions, LineStyle, hv_lines};
pub use rectangle::{RectangleOptions, rectangle};
pub use resize::{RESIZE_NEEDED, resize_needed};
pub use text::{TextOptions, VerticalTextOptions, text, vertical_text};
