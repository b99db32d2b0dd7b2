//! Property-based tests for the drawing primitives.
//!
//! 1. Crossing hv-lines join into a cross whatever their order.
//! 2. Braille lines are the same in both directions and connected.
//! 3. Flood fill stays inside an enclosing rectangle border.

use proptest::prelude::*;
use tdash_core::{Point, Rect};
use tdash_render::braille::BrailleCanvas;
use tdash_render::canvas::Canvas;
use tdash_render::drawing::{
    BrailleFillOptions, HvLine, HvLineOptions, LineStyle, braille_fill, hv_lines, line_points,
};

// ═════════════════════════════════════════════════════════════════════════
// 1. hv-lines
// ═════════════════════════════════════════════════════════════════════════

fn cross_strategy() -> impl Strategy<Value = (HvLine, HvLine, Point)> {
    // Both lines pass strictly through the crossing point.
    (1i32..9, 1i32..9).prop_flat_map(|(cx, cy)| {
        (0..cx, cx + 1..10, 0..cy, cy + 1..10).prop_map(move |(x0, x1, y0, y1)| {
            (
                HvLine::new(Point::new(x0, cy), Point::new(x1, cy)),
                HvLine::new(Point::new(cx, y1), Point::new(cx, y0)),
                Point::new(cx, cy),
            )
        })
    })
}

proptest! {
    #[test]
    fn crossing_lines_make_a_cross(
        (h, v, at) in cross_strategy(),
        style in prop::sample::select(vec![LineStyle::Light, LineStyle::Double, LineStyle::Round]),
    ) {
        let opts = HvLineOptions::default().line_style(style);
        let mut a = Canvas::new(Rect::new(0, 0, 10, 10)).unwrap();
        let mut b = a.clone();
        hv_lines(&mut a, &[h, v], &opts).unwrap();
        hv_lines(&mut b, &[v, h], &opts).unwrap();
        prop_assert_eq!(a.buffer(), b.buffer());
        let cross = style.chars().unwrap().cross;
        prop_assert_eq!(a.cell(at).unwrap().rune(), Some(cross));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Braille lines
// ═════════════════════════════════════════════════════════════════════════

fn point_strategy() -> impl Strategy<Value = Point> {
    (0i32..60, 0i32..60).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn line_is_direction_symmetric(a in point_strategy(), b in point_strategy()) {
        let mut fwd = line_points(a, b);
        let mut back = line_points(b, a);
        fwd.sort_by_key(|p| (p.y, p.x));
        back.sort_by_key(|p| (p.y, p.x));
        prop_assert_eq!(fwd, back);
    }

    #[test]
    fn line_is_connected_and_ends_at_endpoints(a in point_strategy(), b in point_strategy()) {
        let pts = line_points(a, b);
        prop_assert!(pts.contains(&a) && pts.contains(&b));
        let len = (b.x - a.x).abs().max((b.y - a.y).abs()) as usize + 1;
        prop_assert_eq!(pts.len(), len);
        for w in pts.windows(2) {
            prop_assert!((w[0].x - w[1].x).abs() <= 1 && (w[0].y - w[1].y).abs() <= 1);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Flood fill
// ═════════════════════════════════════════════════════════════════════════

fn box_border(min: Point, max: Point) -> Vec<Point> {
    let mut out = Vec::new();
    for x in min.x..=max.x {
        out.extend([Point::new(x, min.y), Point::new(x, max.y)]);
    }
    for y in min.y..=max.y {
        out.extend([Point::new(min.x, y), Point::new(max.x, y)]);
    }
    out
}

proptest! {
    #[test]
    fn fill_stays_inside_border(
        x0 in 0i32..10, y0 in 0i32..10, w in 2i32..10, h in 2i32..10,
        sx in 0i32..100, sy in 0i32..100,
    ) {
        // 12x6 cells = 24x24 pixels.
        let mut bc = BrailleCanvas::new(Rect::new(0, 0, 12, 6)).unwrap();
        let (min, max) = (Point::new(x0, y0), Point::new(x0 + w, y0 + h));
        let border = box_border(min, max);
        let start = Point::new(x0 + 1 + sx % (w - 1), y0 + 1 + sy % (h - 1));
        let filled = braille_fill(&mut bc, start, &border, &BrailleFillOptions::default()).unwrap();
        prop_assert_eq!(filled, ((w - 1) * (h - 1)) as usize);
        for y in 0..24 {
            for x in 0..24 {
                let inside = x > min.x && x < max.x && y > min.y && y < max.y;
                prop_assert_eq!(bc.pixel(Point::new(x, y)).unwrap(), inside);
            }
        }
    }
}
