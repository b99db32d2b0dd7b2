#![forbid(unsafe_code)]

//! Rune width classification.
//!
//! A rune occupies zero, one, or two terminal columns. The answer depends on
//! the terminal's East-Asian context and on any widths the application forces
//! for specific runes, so both live in an explicit [`RuneWidths`] value that
//! is passed to every measurement instead of in process-wide state.
//!
//! # Example
//! ```
//! use tdash_text::width::RuneWidths;
//!
//! let widths = RuneWidths::new();
//! assert_eq!(widths.str_width("ab界"), 4);
//!
//! let forced = RuneWidths::new().with_override('a', 2).unwrap();
//! assert_eq!(forced.str_width("ab"), 3);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tdash_core::{Error, Result};
use unicode_width::UnicodeWidthChar;

/// The rune drawn in place of text that was cut off.
pub const ELLIPSIS: char = '…';

/// Runes the rendering core draws itself. They stay one column wide even in
/// an East-Asian context, otherwise box drawing and braille would misalign.
fn is_core_glyph(c: char) -> bool {
    matches!(c, '\u{2500}'..='\u{257F}' | '\u{2800}'..='\u{28FF}' | ELLIPSIS | '⇄')
}

/// Rune width configuration.
///
/// Cloning is cheap; the override table is shared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuneWidths {
    east_asian: bool,
    overrides: Arc<FxHashMap<char, u8>>,
}

impl RuneWidths {
    /// Widths for a terminal without East-Asian context and no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count East-Asian ambiguous runes as two columns.
    #[must_use]
    pub fn east_asian(mut self, enabled: bool) -> Self {
        self.east_asian = enabled;
        self
    }

    /// Force `rune` to occupy `width` columns.
    ///
    /// Only widths 1 and 2 are accepted.
    pub fn with_override(mut self, rune: char, width: u8) -> Result<Self> {
        if !(1..=2).contains(&width) {
            return Err(Error::invalid_argument(format!(
                "rune width override for {rune:?} must be 1 or 2, got {width}"
            )));
        }
        tracing::debug!(rune = ?rune, width, "rune width override");
        Arc::make_mut(&mut self.overrides).insert(rune, width);
        Ok(self)
    }

    /// Force the width of every rune in `overrides`.
    pub fn with_overrides(self, overrides: impl IntoIterator<Item = (char, u8)>) -> Result<Self> {
        overrides
            .into_iter()
            .try_fold(self, |acc, (rune, width)| acc.with_override(rune, width))
    }

    /// Whether ambiguous runes count as two columns.
    #[inline]
    #[must_use]
    pub fn is_east_asian(&self) -> bool {
        self.east_asian
    }

    /// Number of columns `rune` occupies.
    #[must_use]
    pub fn rune_width(&self, rune: char) -> usize {
        if let Some(&w) = self.overrides.get(&rune) {
            return usize::from(w);
        }
        if is_core_glyph(rune) {
            return 1;
        }
        if rune.is_control() {
            return 0;
        }
        let w = if self.east_asian {
            rune.width_cjk()
        } else {
            rune.width()
        };
        w.unwrap_or(0)
    }

    /// Number of columns `text` occupies.
    #[must_use]
    pub fn str_width(&self, text: &str) -> usize {
        text.chars().map(|c| self.rune_width(c)).sum()
    }

    /// Check that `text` can be drawn on a single row.
    ///
    /// Rejects newlines, control characters, and runes without display width.
    pub fn validate_text(&self, text: &str) -> Result<()> {
        for (i, c) in text.chars().enumerate() {
            if c == '\n' {
                return Err(Error::invalid_argument(format!(
                    "text {text:?} contains a newline at rune {i}"
                )));
            }
            if c.is_control() {
                return Err(Error::invalid_argument(format!(
                    "text {text:?} contains control character {c:?} at rune {i}"
                )));
            }
            if self.rune_width(c) == 0 {
                return Err(Error::invalid_argument(format!(
                    "text {text:?} contains zero-width rune {c:?} at rune {i}"
                )));
            }
        }
        Ok(())
    }
}

/// Width of `rune` with the default [`RuneWidths`].
#[inline]
#[must_use]
pub fn rune_width(rune: char) -> usize {
    RuneWidths::new().rune_width(rune)
}

/// Width of `text` with the default [`RuneWidths`].
#[inline]
#[must_use]
pub fn str_width(text: &str) -> usize {
    RuneWidths::new().str_width(text)
}

/// What to do with text longer than the space available for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverrunMode {
    /// Fail.
    #[default]
    Strict,
    /// Cut the text off at the last whole rune that fits.
    Trim,
    /// Cut the text off and mark the cut with [`ELLIPSIS`].
    ThreeDot,
}

impl OverrunMode {
    /// All modes.
    pub const ALL: [Self; 3] = [Self::Strict, Self::Trim, Self::ThreeDot];

    /// Stable lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Trim => "trim",
            Self::ThreeDot => "three_dot",
        }
    }
}

impl fmt::Display for OverrunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for OverrunMode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| Error::invalid_argument(format!("unsupported overrun mode {value}")))
    }
}

impl FromStr for OverrunMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| Error::invalid_argument(format!("unsupported overrun mode {s:?}")))
    }
}

/// Fit `text` into `max_cells` columns according to `mode`.
///
/// Text that already fits is returned unchanged. Full-width runes are never
/// cut in half, so a trimmed result may be one column short of `max_cells`.
pub fn trim_text<'a>(
    text: &'a str,
    max_cells: usize,
    mode: OverrunMode,
    widths: &RuneWidths,
) -> Result<Cow<'a, str>> {
    if max_cells < 1 {
        return Err(Error::invalid_argument(format!(
            "max_cells({max_cells}) must be positive"
        )));
    }
    let cells = widths.str_width(text);
    if cells <= max_cells {
        return Ok(Cow::Borrowed(text));
    }
    if mode == OverrunMode::Strict {
        return Err(Error::invalid_argument(format!(
            "text {text:?} takes {cells} cells, only {max_cells} available in overrun mode {mode}"
        )));
    }

    let mut out = String::with_capacity(text.len());
    let mut cur = 0;
    for c in text.chars() {
        let rw = widths.rune_width(c);
        if cur + rw >= max_cells {
            match mode {
                OverrunMode::Trim if cur + rw == max_cells => out.push(c),
                OverrunMode::ThreeDot => out.push(ELLIPSIS),
                _ => {}
            }
            break;
        }
        out.push(c);
        cur += rw;
    }
    Ok(Cow::Owned(out))
}
