#![forbid(unsafe_code)]

//! Error type shared by every tdash crate.
//!
//! Failures are always returned to the immediate caller. Widgets typically
//! propagate [`ErrorKind::OutOfBounds`] and [`ErrorKind::InvalidArgument`]
//! upward and react to [`ErrorKind::DoesNotFit`] by drawing a resize marker.

use core::fmt;

/// Classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A point or rectangle lies outside the addressable area.
    OutOfBounds,
    /// An argument is outside its accepted domain.
    InvalidArgument,
    /// A source does not fit into its destination.
    DoesNotFit,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OutOfBounds => "out of bounds",
            Self::InvalidArgument => "invalid argument",
            Self::DoesNotFit => "does not fit",
        };
        f.write_str(name)
    }
}

/// Rendering core error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bounds violation, including negative coordinates.
    OutOfBounds(String),
    /// Out-of-range enum, percentage, radius, width, malformed text, or a
    /// degenerate / non-orthogonal line.
    InvalidArgument(String),
    /// Destination too small for the source.
    DoesNotFit(String),
}

impl Error {
    /// Build an [`Error::OutOfBounds`].
    pub fn out_of_bounds(msg: impl Into<String>) -> Self {
        Self::OutOfBounds(msg.into())
    }

    /// Build an [`Error::InvalidArgument`].
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build an [`Error::DoesNotFit`].
    pub fn does_not_fit(msg: impl Into<String>) -> Self {
        Self::DoesNotFit(msg.into())
    }

    /// The kind of failure.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfBounds(_) => ErrorKind::OutOfBounds,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::DoesNotFit(_) => ErrorKind::DoesNotFit,
        }
    }

    /// Whether this is a capacity failure that should become a resize marker.
    pub const fn is_does_not_fit(&self) -> bool {
        matches!(self, Self::DoesNotFit(_))
    }

    /// The human readable detail message.
    pub fn message(&self) -> &str {
        match self {
            Self::OutOfBounds(msg) | Self::InvalidArgument(msg) | Self::DoesNotFit(msg) => msg,
        }
    }

    /// Prefix the message with additional context, keeping the kind.
    #[must_use]
    pub fn context(self, ctx: impl fmt::Display) -> Self {
        match self {
            Self::OutOfBounds(msg) => Self::OutOfBounds(format!("{ctx}: {msg}")),
            Self::InvalidArgument(msg) => Self::InvalidArgument(format!("{ctx}: {msg}")),
            Self::DoesNotFit(msg) => Self::DoesNotFit(format!("{ctx}: {msg}")),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.message())
    }
}

impl std::error::Error for Error {}

/// Standard result type for tdash APIs.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = Error::out_of_bounds("point (5,5) outside (0,0)-(2,2)");
        assert_eq!(
            err.to_string(),
            "out of bounds: point (5,5) outside (0,0)-(2,2)"
        );
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Error::invalid_argument("x").kind(), ErrorKind::InvalidArgument);
        assert_eq!(Error::does_not_fit("x").kind(), ErrorKind::DoesNotFit);
        assert!(Error::does_not_fit("x").is_does_not_fit());
        assert!(!Error::out_of_bounds("x").is_does_not_fit());
    }

    #[test]
    fn context_keeps_kind() {
        let err = Error::invalid_argument("radius 0").context("braille circle");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.message(), "braille circle: radius 0");
    }
}
