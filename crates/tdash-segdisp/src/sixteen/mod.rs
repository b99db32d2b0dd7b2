#![forbid(unsafe_code)]

//! A 16-segment display.
//!
//! Segment placement:
//!
//! ```text
//!    A1      A2
//!   ----- -----
//!  |\    |    /|
//! F| H   J   K |B
//!  |  \  |  /  |
//!   -G1-- --G2-
//!  |  /  |  \  |
//! E| N   M   L |C
//!  |/    |    \|
//!   ----- -----
//!    D1      D2
//! ```

mod attrs;

pub use attrs::Attributes;

use std::fmt;
use std::str::FromStr;

use tdash_core::{Error, Result};
use tdash_render::{BrailleCanvas, Canvas};
use tdash_render::cell::StyleOpts;

use crate::diagonal::{self, DiagonalOptions, DiagonalType};
use crate::segment::{self, HvOptions, SegmentType};
use crate::to_braille;

/// One of the sixteen segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Segment {
    /// Top bar, left half.
    A1,
    /// Top bar, right half.
    A2,
    /// Right edge, upper half.
    B,
    /// Right edge, lower half.
    C,
    /// Bottom bar, left half.
    D1,
    /// Bottom bar, right half.
    D2,
    /// Left edge, lower half.
    E,
    /// Left edge, upper half.
    F,
    /// Middle bar, left half.
    G1,
    /// Middle bar, right half.
    G2,
    /// Upper left diagonal, `\`.
    H,
    /// Centre column, upper half.
    J,
    /// Upper right diagonal, `/`.
    K,
    /// Lower right diagonal, `\`.
    L,
    /// Centre column, lower half.
    M,
    /// Lower left diagonal, `/`.
    N,
}

/// How a segment is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A horizontal or vertical bar with tapered ends.
    Straight(SegmentType),
    /// A thick diagonal stroke across its box.
    Diagonal(DiagonalType),
}

impl Segment {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::A1,
        Self::A2,
        Self::B,
        Self::C,
        Self::D1,
        Self::D2,
        Self::E,
        Self::F,
        Self::G1,
        Self::G2,
        Self::H,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
    ];

    /// Name used by `Display` and `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::B => "B",
            Self::C => "C",
            Self::D1 => "D1",
            Self::D2 => "D2",
            Self::E => "E",
            Self::F => "F",
            Self::G1 => "G1",
            Self::G2 => "G2",
            Self::H => "H",
            Self::J => "J",
            Self::K => "K",
            Self::L => "L",
            Self::M => "M",
            Self::N => "N",
        }
    }

    /// How this segment is drawn.
    pub const fn shape(self) -> Shape {
        match self {
            Self::A1 | Self::A2 | Self::G1 | Self::G2 | Self::D1 | Self::D2 => {
                Shape::Straight(SegmentType::Horizontal)
            }
            Self::B | Self::C | Self::E | Self::F | Self::J | Self::M => {
                Shape::Straight(SegmentType::Vertical)
            }
            Self::H | Self::L => Shape::Diagonal(DiagonalType::LeftToRight),
            Self::K | Self::N => Shape::Diagonal(DiagonalType::RightToLeft),
        }
    }

    const fn bit(self) -> u16 {
        1 << self as u16
    }

    /// Straight-segment options so that the tapered ends of neighbouring
    /// segments point at each other.
    fn hv_options(self, cell_opts: StyleOpts) -> HvOptions {
        let opts = HvOptions::default().cell_opts(cell_opts);
        match self {
            Self::A1 | Self::A2 | Self::F | Self::E => opts.reverse_slopes(),
            Self::J | Self::M => opts.skip_slopes_lte(2),
            _ => opts,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Segment {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| Error::invalid_argument(format!("unsupported segment {value}")))
    }
}

impl FromStr for Segment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|seg| seg.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid_argument(format!("unsupported segment {s:?}")))
    }
}

/// Segments lit to show `c`, `None` when the display cannot show it.
fn char_segments(c: char) -> Option<&'static [Segment]> {
    use Segment::*;

    let segs: &'static [Segment] = match c.to_ascii_uppercase() {
        ' ' => &[],
        '0' => &[A1, A2, B, C, D1, D2, E, F, K, N],
        '1' => &[B, C],
        '2' => &[A1, A2, B, G1, G2, E, D1, D2],
        '3' => &[A1, A2, B, C, D1, D2, G2],
        '4' => &[F, G1, G2, B, C],
        '5' | 'S' => &[A1, A2, F, G1, G2, C, D1, D2],
        '6' => &[A1, A2, F, G1, G2, C, D1, D2, E],
        '7' => &[A1, A2, B, C],
        '8' => &[A1, A2, B, C, D1, D2, E, F, G1, G2],
        '9' => &[A1, A2, B, C, D1, D2, F, G1, G2],
        'A' => &[A1, A2, B, C, E, F, G1, G2],
        'B' => &[A1, A2, B, C, D1, D2, J, M, G2],
        'C' => &[A1, A2, F, E, D1, D2],
        'D' => &[A1, A2, B, C, D1, D2, J, M],
        'E' => &[A1, A2, F, E, D1, D2, G1],
        'F' => &[A1, A2, F, E, G1],
        'G' => &[A1, A2, F, E, D1, D2, C, G2],
        'H' => &[F, E, B, C, G1, G2],
        'I' => &[A1, A2, J, M, D1, D2],
        'J' => &[B, C, D1, D2, E],
        'K' => &[F, E, G1, K, L],
        'L' => &[F, E, D1, D2],
        'M' => &[F, E, B, C, H, K],
        'N' => &[F, E, B, C, H, L],
        'O' => &[A1, A2, B, C, D1, D2, E, F],
        'P' => &[A1, A2, B, F, E, G1, G2],
        'Q' => &[A1, A2, B, C, D1, D2, E, F, L],
        'R' => &[A1, A2, B, F, E, G1, G2, L],
        'T' => &[A1, A2, J, M],
        'U' => &[F, E, D1, D2, C, B],
        'V' => &[F, E, N, K],
        'W' => &[F, E, B, C, N, L],
        'X' => &[H, K, N, L],
        'Y' => &[H, K, M],
        'Z' => &[A1, A2, K, N, D1, D2],
        '-' => &[G1, G2],
        '+' => &[G1, G2, J, M],
        '*' => &[G1, G2, J, M, H, K, N, L],
        '/' => &[K, N],
        '\\' => &[H, L],
        '_' => &[D1, D2],
        '=' => &[G1, G2, D1, D2],
        '<' => &[K, L],
        '>' => &[H, N],
        '[' => &[A1, F, E, D1],
        ']' => &[A2, B, C, D2],
        '\'' => &[J],
        '|' => &[J, M],
        '$' => &[A1, A2, F, G1, G2, C, D1, D2, J, M],
        _ => return None,
    };
    Some(segs)
}

/// Whether the display can show `c`. Letters are shown in upper case.
pub fn supports(c: char) -> bool {
    char_segments(c).is_some()
}

/// Characters of `s` the display cannot show, in order of appearance.
pub fn unsupported(s: &str) -> Vec<char> {
    s.chars().filter(|&c| !supports(c)).collect()
}

/// Options for [`Display::draw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayOptions {
    /// Applied to every cell a lit segment touches.
    pub cell_opts: StyleOpts,
}

impl DisplayOptions {
    #[must_use]
    pub const fn cell_opts(mut self, opts: StyleOpts) -> Self {
        self.cell_opts = opts;
        self
    }
}

/// A single 16-segment character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Display {
    lit: u16,
}

impl Display {
    /// A display with every segment off.
    pub const fn new() -> Self {
        Self { lit: 0 }
    }

    /// Turn `s` on.
    pub fn set_segment(&mut self, s: Segment) {
        self.lit |= s.bit();
    }

    /// Turn `s` off.
    pub fn clear_segment(&mut self, s: Segment) {
        self.lit &= !s.bit();
    }

    /// Flip `s`.
    pub fn toggle_segment(&mut self, s: Segment) {
        self.lit ^= s.bit();
    }

    /// Whether `s` is on.
    pub fn is_set(&self, s: Segment) -> bool {
        self.lit & s.bit() != 0
    }

    /// Lit segments in [`Segment::ALL`] order.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        Segment::ALL.into_iter().filter(|&s| self.is_set(s))
    }

    /// Turn every segment off.
    pub fn clear(&mut self) {
        self.lit = 0;
    }

    /// Light exactly the segments that show `c`.
    ///
    /// Letters are case-insensitive. On error the display is left as it was.
    ///
    /// ```
    /// use tdash_segdisp::sixteen::{Display, Segment};
    ///
    /// let mut d = Display::new();
    /// d.set_character('1').unwrap();
    /// assert!(d.is_set(Segment::B) && d.is_set(Segment::C));
    /// assert_eq!(d.segments().count(), 2);
    /// assert!(d.set_character('~').is_err());
    /// ```
    pub fn set_character(&mut self, c: char) -> Result<()> {
        let segs = char_segments(c).ok_or_else(|| {
            Error::invalid_argument(format!(
                "character {c:?} is not supported by the 16-segment display"
            ))
        })?;
        self.clear();
        for &s in segs {
            self.set_segment(s);
        }
        Ok(())
    }

    /// Draw the display onto `canvas`, replacing its content.
    ///
    /// The display takes the largest part of the canvas with its aspect
    /// ratio, anchored at the top left. Fails with a fit error when the
    /// canvas is too small.
    pub fn draw(&self, canvas: &mut Canvas, opts: &DisplayOptions) -> Result<()> {
        let (mut bc, pixels) = to_braille(canvas)?;
        let attrs = Attributes::new(pixels)?;
        tdash_core::debug!(
            segments = self.lit.count_ones(),
            size = attrs.segment_size(),
            area = %pixels,
            "drawing 16-segment display"
        );
        for s in self.segments() {
            draw_segment(&mut bc, &attrs, s, opts)?;
        }
        bc.copy_to(canvas)
    }
}

/// Draw a single `segment` of the display laid out by `attrs` onto `bc`.
pub fn draw_segment(
    bc: &mut BrailleCanvas,
    attrs: &Attributes,
    segment: Segment,
    opts: &DisplayOptions,
) -> Result<()> {
    let area = attrs.segment_area(segment);
    match segment.shape() {
        Shape::Straight(st) => segment::hv(bc, area, st, &segment.hv_options(opts.cell_opts)),
        Shape::Diagonal(dt) => {
            let dopts = DiagonalOptions::default().cell_opts(opts.cell_opts);
            diagonal::diagonal(bc, area, attrs.diagonal_width(segment), dt, &dopts)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tdash_core::{ErrorKind, Point, Rect};

    #[test]
    fn segment_bits_are_independent() {
        let mut d = Display::new();
        for s in Segment::ALL {
            d.set_segment(s);
            assert!(d.is_set(s));
        }
        assert_eq!(d.segments().count(), 16);
        d.clear_segment(Segment::G1);
        d.toggle_segment(Segment::K);
        assert!(!d.is_set(Segment::G1));
        assert!(!d.is_set(Segment::K));
        assert!(d.is_set(Segment::G2));
        d.toggle_segment(Segment::K);
        assert!(d.is_set(Segment::K));
        d.clear();
        assert_eq!(d, Display::new());
    }

    #[test]
    fn characters_light_expected_segments() {
        let mut d = Display::new();
        d.set_character('-').unwrap();
        assert_eq!(d.segments().collect::<Vec<_>>(), vec![Segment::G1, Segment::G2]);

        d.set_character('x').unwrap();
        assert_eq!(
            d.segments().collect::<Vec<_>>(),
            vec![Segment::H, Segment::K, Segment::L, Segment::N]
        );

        d.set_character('8').unwrap();
        assert_eq!(d.segments().count(), 10);
        assert!(!d.is_set(Segment::J));

        d.set_character(' ').unwrap();
        assert_eq!(d.segments().count(), 0);
    }

    #[test]
    fn lower_and_upper_case_match() {
        for c in 'a'..='z' {
            let (mut lo, mut up) = (Display::new(), Display::new());
            lo.set_character(c).unwrap();
            up.set_character(c.to_ascii_uppercase()).unwrap();
            assert_eq!(lo, up, "{c}");
        }
    }

    #[test]
    fn unsupported_character_keeps_state() {
        let mut d = Display::new();
        d.set_character('7').unwrap();
        let before = d;
        let err = d.set_character('#').unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(d, before);
        assert_eq!(unsupported("a#b~c"), vec!['#', '~']);
        assert!(supports('Q') && supports('9') && !supports('é'));
    }

    #[test]
    fn segment_conversions() {
        assert_eq!(Segment::try_from(0).unwrap(), Segment::A1);
        assert_eq!(Segment::try_from(15).unwrap(), Segment::N);
        assert!(Segment::try_from(16).is_err());
        assert_eq!("g2".parse::<Segment>().unwrap(), Segment::G2);
        assert!("Z".parse::<Segment>().is_err());
        assert_eq!(Segment::D1.to_string(), "D1");
    }

    #[test]
    fn draw_fails_on_small_canvas() {
        let mut canvas = Canvas::new(Rect::new(0, 0, 5, 5)).unwrap();
        let mut d = Display::new();
        d.set_character('8').unwrap();
        let err = d.draw(&mut canvas, &DisplayOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DoesNotFit);
    }

    #[test]
    fn draw_lights_only_chosen_segments() {
        let mut canvas = Canvas::new(Rect::new(0, 0, 15, 13)).unwrap();
        let mut d = Display::new();
        d.set_segment(Segment::F);
        d.draw(&mut canvas, &DisplayOptions::default()).unwrap();

        // Pixel area 30x50: F spans x 0..3, y 3..23 which is cells x 0..=1,
        // y 0..=5.
        let lit = |x, y| canvas.cell(Point::new(x, y)).unwrap().rune().is_some_and(|r| r != ' ');
        assert!(lit(0, 2) && lit(1, 2));
        assert!(!lit(7, 2));
        assert!(!lit(0, 10));
    }
}
