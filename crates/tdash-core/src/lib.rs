#![forbid(unsafe_code)]

//! Core: geometry, numeric helpers, the shared error type, and logging.

pub mod error;
pub mod geometry;
pub mod logging;
pub mod numbers;
pub mod trig;

pub use error::{Error, ErrorKind, Result};
pub use geometry::{Point, Rect};

#[cfg(feature = "tracing")]
pub use logging::debug;
