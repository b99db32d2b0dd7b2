//! Property tests for alignment.
//!
//! For every inner rectangle within an outer one and all nine alignment
//! combinations the aligned rectangle keeps its size, stays inside the outer
//! rectangle, is flush with the requested edges and centred within the
//! truncation bias otherwise.

use proptest::prelude::*;
use tdash_core::Rect;
use tdash_layout::align::{Horizontal, Vertical, rectangle};

fn nested_strategy() -> impl Strategy<Value = (Rect, Rect)> {
    (0i32..50, 0i32..50, 1i32..40, 1i32..40)
        .prop_flat_map(|(x, y, w, h)| {
            let outer = Rect::new(x, y, x + w, y + h);
            (Just(outer), 0..w, 0..h, 1..=w, 1..=h)
        })
        .prop_map(|(outer, ix, iy, iw, ih)| {
            let iw = iw.min(outer.dx() - ix);
            let ih = ih.min(outer.dy() - iy);
            let min = outer.min;
            (outer, Rect::new(min.x + ix, min.y + iy, min.x + ix + iw, min.y + iy + ih))
        })
}

proptest! {
    #[test]
    fn aligned_rect_keeps_size_and_containment((outer, inner) in nested_strategy()) {
        for h in Horizontal::ALL {
            for v in Vertical::ALL {
                let got = rectangle(outer, inner, h, v).unwrap();
                prop_assert_eq!(got.size(), inner.size());
                prop_assert!(got.is_within(&outer), "{} not within {} ({} {})", got, outer, h, v);

                match h {
                    Horizontal::Left => prop_assert_eq!(got.min.x, outer.min.x),
                    Horizontal::Right => prop_assert_eq!(got.max.x, outer.max.x),
                    Horizontal::Center => {
                        let left = got.min.x - outer.min.x;
                        let right = outer.max.x - got.max.x;
                        prop_assert!(right == left || right == left + 1);
                    }
                }
                match v {
                    Vertical::Top => prop_assert_eq!(got.min.y, outer.min.y),
                    Vertical::Bottom => prop_assert_eq!(got.max.y, outer.max.y),
                    Vertical::Middle => {
                        let top = got.min.y - outer.min.y;
                        let bottom = outer.max.y - got.max.y;
                        prop_assert!(bottom == top || bottom == top + 1);
                    }
                }
            }
        }
    }
}
