#![forbid(unsafe_code)]

//! Geometry of a 16-segment display.
//!
//! Three columns (left, middle, right) hold the vertical segments and three
//! bands (top, middle, bottom) hold the horizontal ones. Each straight
//! segment runs between the columns or bands it connects to and stops short
//! of them so that at least `visible_gap` blank pixels separate it from its
//! neighbours in every direction, diagonals included. Tapered segments
//! (odd thickness of three or more) may reach past the edge of the
//! neighbouring column by the slope peak since their pointed ends keep the
//! gap along the slope. The diagonals sit in the four boxes left between the
//! columns and bands, inset by the diagonal buffer.

use tdash_core::numbers::round;
use tdash_core::{Error, Rect, Result};
use tdash_render::braille::{COL_MULT, ROW_MULT};

use super::{Segment, Shape};
use crate::segment::SegmentType;
use crate::{ASPECT_RATIO, MIN_COLS, MIN_ROWS, segment_size};

/// Gap between adjacent segments in percent of the segment thickness.
const GAP_PERC: i32 = 20;
/// Diagonal inset in percent of the gap.
const DIA_BUF_PERC: f64 = 40.0;

/// Pixel geometry of one display, derived from the area it is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attributes {
    area: Rect,
    seg_size: i32,
    visible_gap: i32,
    slope_peak: i32,
    dia_buf: i32,
    /// Left edges of the left, middle and right columns.
    cols: [i32; 3],
    /// Top edges of the top, middle and bottom bands.
    rows: [i32; 3],
}

impl Attributes {
    /// Compute the geometry for a display filling `pixel_area`.
    ///
    /// Fails with a fit error when the area is smaller than
    /// [`MIN_COLS`] × [`MIN_ROWS`] cells worth of pixels.
    pub fn new(pixel_area: Rect) -> Result<Self> {
        let (min_w, min_h) = (MIN_COLS * COL_MULT, MIN_ROWS * ROW_MULT);
        if pixel_area.dx() < min_w || pixel_area.dy() < min_h {
            return Err(Error::does_not_fit(format!(
                "pixel area {pixel_area} is too small for a segment display, need at least {min_w}x{min_h} pixels"
            )));
        }
        let seg = segment_size(pixel_area).max(1);
        let visible_gap = (seg * GAP_PERC / 100).max(1);
        let dia_buf = (round(f64::from(visible_gap) * DIA_BUF_PERC / 100.0) as i32).max(1);
        let Rect { min, max } = pixel_area;
        let attrs = Self {
            area: pixel_area,
            seg_size: seg,
            visible_gap,
            slope_peak: seg / 2,
            dia_buf,
            cols: [min.x, min.x + (pixel_area.dx() - seg) / 2, max.x - seg],
            rows: [min.y, min.y + (pixel_area.dy() - seg) / 2, max.y - seg],
        };
        if let Some(s) = Segment::ALL.into_iter().find(|&s| !attrs.has_room_for(s)) {
            return Err(Error::does_not_fit(format!(
                "pixel area {pixel_area} leaves no room for segment {s}, the area is too far from the {}:{} display ratio",
                ASPECT_RATIO.x, ASPECT_RATIO.y
            )));
        }
        Ok(attrs)
    }

    /// The pixel area the display fills.
    #[inline]
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Thickness of every segment.
    #[inline]
    pub fn segment_size(&self) -> i32 {
        self.seg_size
    }

    /// Pixels left blank between two segments that meet.
    #[inline]
    pub fn visible_gap(&self) -> i32 {
        self.visible_gap
    }

    /// Distance from the edge of a segment to the point of its tapered end.
    #[inline]
    pub fn slope_peak(&self) -> i32 {
        self.slope_peak
    }

    /// Inset of the diagonal segments from their neighbours.
    #[inline]
    pub fn diagonal_buffer(&self) -> i32 {
        self.dia_buf
    }

    /// How far a segment end may reach past the edge of the column or band
    /// it stops at. Only pointed ends, which need an odd thickness of at
    /// least three, can do so without closing the gap.
    fn reach(&self) -> i32 {
        if self.seg_size >= 3 && self.seg_size % 2 == 1 {
            self.slope_peak
        } else {
            0
        }
    }

    /// Span between the column or band starting at `a` and the one starting
    /// at `b`, leaving `visible_gap` blank pixels to both.
    fn between(&self, a: i32, b: i32) -> (i32, i32) {
        let reach = self.reach();
        (
            a + self.seg_size - reach + self.visible_gap,
            b + reach - self.visible_gap,
        )
    }

    fn horizontal(&self, band: usize, from_col: usize) -> Rect {
        let (x0, x1) = self.between(self.cols[from_col], self.cols[from_col + 1]);
        let y = self.rows[band];
        Rect::new(x0, y, x1, y + self.seg_size)
    }

    fn vertical(&self, col: usize, from_band: usize) -> Rect {
        let (y0, y1) = self.between(self.rows[from_band], self.rows[from_band + 1]);
        let x = self.cols[col];
        Rect::new(x, y0, x + self.seg_size, y1)
    }

    /// The box between columns `col` and `col + 1` and bands `band` and
    /// `band + 1`, inset by the diagonal buffer.
    fn diagonal_box(&self, col: usize, band: usize) -> Rect {
        let b = self.dia_buf;
        Rect::new(
            self.cols[col] + self.seg_size + b,
            self.rows[band] + self.seg_size + b,
            self.cols[col + 1] - b,
            self.rows[band + 1] - b,
        )
        .canonical()
    }

    /// Whether `segment` gets a non-empty rectangle and, for straight
    /// segments, one at least as long as it is thick so the tapered ends
    /// keep their full slope.
    fn has_room_for(&self, segment: Segment) -> bool {
        let area = self.segment_area(segment);
        match segment.shape() {
            _ if area.is_empty() => false,
            Shape::Straight(SegmentType::Horizontal) => area.dx() >= self.seg_size,
            Shape::Straight(SegmentType::Vertical) => area.dy() >= self.seg_size,
            Shape::Diagonal(_) => true,
        }
    }

    /// The pixel rectangle of `segment`.
    pub fn segment_area(&self, segment: Segment) -> Rect {
        match segment {
            Segment::A1 => self.horizontal(0, 0),
            Segment::A2 => self.horizontal(0, 1),
            Segment::G1 => self.horizontal(1, 0),
            Segment::G2 => self.horizontal(1, 1),
            Segment::D1 => self.horizontal(2, 0),
            Segment::D2 => self.horizontal(2, 1),
            Segment::F => self.vertical(0, 0),
            Segment::E => self.vertical(0, 1),
            Segment::J => self.vertical(1, 0),
            Segment::M => self.vertical(1, 1),
            Segment::B => self.vertical(2, 0),
            Segment::C => self.vertical(2, 1),
            Segment::H => self.diagonal_box(0, 0),
            Segment::K => self.diagonal_box(1, 0),
            Segment::N => self.diagonal_box(0, 1),
            Segment::L => self.diagonal_box(1, 1),
        }
    }

    /// Thickness of a diagonal segment, bounded by its box.
    pub fn diagonal_width(&self, segment: Segment) -> i32 {
        let area = self.segment_area(segment);
        self.seg_size.min(area.dx()).min(area.dy()).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tdash_core::ErrorKind;

    #[test]
    fn derived_sizes() {
        let cases = [
            // (width, height, seg, gap, peak, dia_buf)
            (12, 20, 1, 1, 0, 1),
            (30, 50, 3, 1, 1, 1),
            (60, 100, 5, 1, 2, 1),
            (120, 200, 11, 2, 5, 1),
            (300, 500, 27, 5, 13, 2),
        ];
        for (w, h, seg, gap, peak, buf) in cases {
            let a = Attributes::new(Rect::new(0, 0, w, h)).unwrap();
            assert_eq!(a.segment_size(), seg, "{w}x{h}");
            assert_eq!(a.visible_gap(), gap, "{w}x{h}");
            assert_eq!(a.slope_peak(), peak, "{w}x{h}");
            assert_eq!(a.diagonal_buffer(), buf, "{w}x{h}");
        }
    }

    #[test]
    fn segment_areas_for_medium_display() {
        // seg 3, gap 1, peak 1; columns at 0, 13, 27; bands at 0, 23, 47.
        let a = Attributes::new(Rect::new(0, 0, 30, 50)).unwrap();
        assert_eq!(a.segment_area(Segment::A1), Rect::new(3, 0, 13, 3));
        assert_eq!(a.segment_area(Segment::A2), Rect::new(16, 0, 27, 3));
        assert_eq!(a.segment_area(Segment::G1), Rect::new(3, 23, 13, 26));
        assert_eq!(a.segment_area(Segment::D2), Rect::new(16, 47, 27, 50));
        assert_eq!(a.segment_area(Segment::F), Rect::new(0, 3, 3, 23));
        assert_eq!(a.segment_area(Segment::E), Rect::new(0, 26, 3, 47));
        assert_eq!(a.segment_area(Segment::J), Rect::new(13, 3, 16, 23));
        assert_eq!(a.segment_area(Segment::C), Rect::new(27, 26, 30, 47));
        assert_eq!(a.segment_area(Segment::H), Rect::new(4, 4, 12, 22));
        assert_eq!(a.segment_area(Segment::K), Rect::new(17, 4, 26, 22));
        assert_eq!(a.segment_area(Segment::N), Rect::new(4, 27, 12, 46));
        assert_eq!(a.segment_area(Segment::L), Rect::new(17, 27, 26, 46));
        assert_eq!(a.diagonal_width(Segment::H), 3);
    }

    #[test]
    fn square_ended_segments_stop_a_gap_before_their_neighbours() {
        // seg 2, gap 1; columns at 0, 8, 16; bands at 0, 14, 28.
        let a = Attributes::new(Rect::new(0, 0, 18, 30)).unwrap();
        assert_eq!(a.segment_area(Segment::A1), Rect::new(3, 0, 7, 2));
        assert_eq!(a.segment_area(Segment::A2), Rect::new(11, 0, 15, 2));
        assert_eq!(a.segment_area(Segment::F), Rect::new(0, 3, 2, 13));
        assert_eq!(a.segment_area(Segment::M), Rect::new(8, 17, 10, 27));
    }

    #[test]
    fn segments_stay_inside_and_apart() {
        for (w, h) in [(12, 20), (18, 30), (30, 50), (63, 105), (150, 250)] {
            let area = Rect::new(4, 8, 4 + w, 8 + h);
            let a = Attributes::new(area).unwrap();
            for s in Segment::ALL {
                let r = a.segment_area(s);
                assert!(!r.is_empty(), "{s} empty at {w}x{h}");
                assert!(r.is_within(&area), "{s} {r} outside {area}");
            }
            // Segments sharing a band never overlap.
            let (a1, a2) = (a.segment_area(Segment::A1), a.segment_area(Segment::A2));
            assert!(a1.max.x <= a2.min.x, "{w}x{h}");
            let (f, e) = (a.segment_area(Segment::F), a.segment_area(Segment::E));
            assert!(f.max.y <= e.min.y, "{w}x{h}");
        }
    }

    #[test]
    fn too_small_area_does_not_fit() {
        // The last two are large enough but too flat for the segments.
        for area in [
            Rect::new(0, 0, 11, 20),
            Rect::new(0, 0, 12, 19),
            Rect::new(0, 0, 40, 20),
            Rect::new(0, 0, 200, 20),
        ] {
            let err = Attributes::new(area).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DoesNotFit);
        }
    }
}
