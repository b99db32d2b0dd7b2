#![forbid(unsafe_code)]

//! Layout math shared by every widget.
//!
//! - [`area`] - percentage and cell splits, border exclusion, shrinking,
//!   aspect-ratio fitting, translation
//! - [`align`] - placement of rectangles and text inside a rectangle
//!
//! # Example
//! ```
//! use tdash_core::Rect;
//! use tdash_layout::align::{self, Horizontal, Vertical};
//! use tdash_layout::area;
//!
//! let canvas = Rect::new(0, 0, 20, 10);
//! let (top, bottom) = area::hsplit(canvas, 30).unwrap();
//! assert_eq!(top, Rect::new(0, 0, 20, 3));
//! assert_eq!(bottom, Rect::new(0, 3, 20, 10));
//!
//! let inner = area::exclude_border(bottom);
//! let label = Rect::new(0, 0, 4, 1);
//! let placed = align::rectangle(inner, label.translate(inner.min), Horizontal::Center, Vertical::Middle).unwrap();
//! assert_eq!(placed, Rect::new(8, 6, 12, 7));
//! ```

pub mod align;
pub mod area;

pub use align::{Horizontal, Vertical};
