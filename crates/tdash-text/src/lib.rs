#![forbid(unsafe_code)]

//! Text measurement for the tdash rendering core.
//!
//! - [`RuneWidths`] - rune width classifier with overrides and East-Asian mode
//! - [`trim_text`] - fit text into a number of columns per [`OverrunMode`]
//! - [`WidthCache`] - LRU cache for text width measurements
//!
//! # Example
//! ```
//! use tdash_text::{OverrunMode, RuneWidths, trim_text};
//!
//! let widths = RuneWidths::new();
//! assert_eq!(widths.str_width("Hello, 世界"), 11);
//! let cut = trim_text("Hello, 世界", 8, OverrunMode::ThreeDot, &widths).unwrap();
//! assert_eq!(cut, "Hello, …");
//! ```

pub mod width;
pub mod width_cache;

pub use width::{ELLIPSIS, OverrunMode, RuneWidths, rune_width, str_width, trim_text};
pub use width_cache::{CacheStats, WidthCache};
