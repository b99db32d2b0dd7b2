#![forbid(unsafe_code)]

//! Cell types and style options.
//!
//! A [`Cell`] is one terminal character position: its [`CellContent`] and a
//! resolved [`CellStyle`]. Styles are opaque to the rendering core; colours
//! and flags are stored and copied, never interpreted.
//!
//! Style changes are expressed as [`StyleOpts`]: a set of directives that
//! overwrite only the fields they name when applied onto a style.

/// Cell content: a rune, nothing, or the placeholder behind a wide rune.
///
/// # Special Values
///
/// - `EMPTY` (0x0): Empty cell
/// - `CONTINUATION` (0x7FFF_FFFF): Second column of a full-width rune
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct CellContent(u32);

impl CellContent {
    /// Empty cell content (no rune).
    pub const EMPTY: Self = Self(0);

    /// Placeholder for the column consumed by a full-width rune in the
    /// previous cell.
    ///
    /// Outside the Unicode scalar range so it never collides with a rune.
    pub const CONTINUATION: Self = Self(0x7FFF_FFFF);

    /// Content holding `c`.
    ///
    /// `'\0'` is stored as [`CellContent::EMPTY`].
    #[inline]
    pub const fn from_char(c: char) -> Self {
        Self(c as u32)
    }

    /// Check if this is a continuation placeholder.
    #[inline]
    pub const fn is_continuation(self) -> bool {
        self.0 == Self::CONTINUATION.0
    }

    /// Check if this cell holds no rune.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    /// The rune, if any.
    ///
    /// Returns `None` for empty and continuation content.
    #[inline]
    pub fn as_char(self) -> Option<char> {
        if self.is_empty() || self.is_continuation() {
            None
        } else {
            char::from_u32(self.0)
        }
    }

    /// Raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl Default for CellContent {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<char> for CellContent {
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

impl core::fmt::Debug for CellContent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_empty() {
            write!(f, "CellContent::EMPTY")
        } else if self.is_continuation() {
            write!(f, "CellContent::CONTINUATION")
        } else if let Some(c) = self.as_char() {
            write!(f, "CellContent::Char({c:?})")
        } else {
            write!(f, "CellContent::Invalid({:#x})", self.0)
        }
    }
}

/// A colour packed as `0xRRGGBBAA`.
///
/// Passed through untouched; the core performs no colour arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Create an opaque RGB color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create an RGBA color with explicit alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }
}

bitflags::bitflags! {
    /// 8-bit cell style flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StyleFlags: u8 {
        /// Bold / increased intensity.
        const BOLD          = 0b0000_0001;
        /// Dim / decreased intensity.
        const DIM           = 0b0000_0010;
        /// Italic text.
        const ITALIC        = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE     = 0b0000_1000;
        /// Blinking text.
        const BLINK         = 0b0001_0000;
        /// Reverse video (swap fg/bg).
        const REVERSE       = 0b0010_0000;
        /// Strikethrough text.
        const STRIKETHROUGH = 0b0100_0000;
        /// Hidden / invisible text.
        const HIDDEN        = 0b1000_0000;
    }
}

impl Default for StyleFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// The resolved style of a cell.
///
/// `None` colours mean the terminal's default colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    /// Foreground colour.
    pub fg: Option<PackedRgba>,
    /// Background colour.
    pub bg: Option<PackedRgba>,
    /// Attributes such as bold or underline.
    pub flags: StyleFlags,
}

impl CellStyle {
    /// This style updated by `opts`.
    #[inline]
    #[must_use]
    pub fn apply(self, opts: &StyleOpts) -> Self {
        Self {
            fg: opts.fg.or(self.fg),
            bg: opts.bg.or(self.bg),
            flags: (self.flags | opts.set_flags) - opts.unset_flags,
        }
    }
}

/// Style directives applied onto a [`CellStyle`].
///
/// Fields left unset keep the value of the style they are applied onto.
/// Chaining the same directive twice keeps the later value.
///
/// ```
/// use tdash_render::cell::{CellStyle, PackedRgba, StyleFlags, StyleOpts};
///
/// let opts = StyleOpts::new().fg(PackedRgba::RED).bold().fg(PackedRgba::BLUE);
/// let style = CellStyle::default().apply(&opts);
/// assert_eq!(style.fg, Some(PackedRgba::BLUE));
/// assert!(style.flags.contains(StyleFlags::BOLD));
/// assert_eq!(style.bg, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleOpts {
    fg: Option<PackedRgba>,
    bg: Option<PackedRgba>,
    set_flags: StyleFlags,
    unset_flags: StyleFlags,
}

impl StyleOpts {
    /// The empty option set.
    #[inline]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            set_flags: StyleFlags::empty(),
            unset_flags: StyleFlags::empty(),
        }
    }

    /// Whether no directive is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::new()
    }

    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Turn `flags` on.
    #[must_use]
    pub fn flags(mut self, flags: StyleFlags) -> Self {
        self.set_flags |= flags;
        self.unset_flags -= flags;
        self
    }

    /// Turn `flags` off.
    #[must_use]
    pub fn without_flags(mut self, flags: StyleFlags) -> Self {
        self.unset_flags |= flags;
        self.set_flags -= flags;
        self
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.flags(StyleFlags::BOLD)
    }

    #[must_use]
    pub fn dim(self) -> Self {
        self.flags(StyleFlags::DIM)
    }

    #[must_use]
    pub fn italic(self) -> Self {
        self.flags(StyleFlags::ITALIC)
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.flags(StyleFlags::UNDERLINE)
    }

    #[must_use]
    pub fn blink(self) -> Self {
        self.flags(StyleFlags::BLINK)
    }

    #[must_use]
    pub fn reverse(self) -> Self {
        self.flags(StyleFlags::REVERSE)
    }

    #[must_use]
    pub fn strikethrough(self) -> Self {
        self.flags(StyleFlags::STRIKETHROUGH)
    }

    /// Combine with `later`; directives in `later` win.
    #[must_use]
    pub fn merge(self, later: &StyleOpts) -> Self {
        Self {
            fg: later.fg.or(self.fg),
            bg: later.bg.or(self.bg),
            set_flags: (self.set_flags - later.unset_flags) | later.set_flags,
            unset_flags: (self.unset_flags - later.set_flags) | later.unset_flags,
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    /// The rune, or the empty or continuation marker.
    pub content: CellContent,
    /// How the content is rendered.
    pub style: CellStyle,
}

impl Cell {
    /// A continuation placeholder with the default style.
    pub const CONTINUATION: Self = Self {
        content: CellContent::CONTINUATION,
        style: CellStyle {
            fg: None,
            bg: None,
            flags: StyleFlags::empty(),
        },
    };

    /// A default-styled cell holding `c`.
    #[inline]
    pub const fn from_char(c: char) -> Self {
        Self {
            content: CellContent::from_char(c),
            style: CellStyle {
                fg: None,
                bg: None,
                flags: StyleFlags::empty(),
            },
        }
    }

    /// The rune, `None` for empty and continuation cells.
    #[inline]
    pub fn rune(&self) -> Option<char> {
        self.content.as_char()
    }

    /// Whether this cell is the right half of a full-width rune.
    #[inline]
    pub const fn is_continuation(&self) -> bool {
        self.content.is_continuation()
    }

    /// Whether nothing was written here.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// This cell with `style` replacing its style.
    #[must_use]
    pub const fn with_style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }
}
