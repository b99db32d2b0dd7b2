//! Property-based invariant tests for geometry and numeric primitives.
//!
//! 1. Intersection is commutative and fits within both inputs.
//! 2. Union is commutative and contains both non-empty inputs.
//! 3. Contains agrees with intersection.
//! 4. Translation preserves size.
//! 5. Ratio simplification yields coprime components of the same proportion.
//! 6. Circle points map back to their angle.

use proptest::prelude::*;
use tdash_core::geometry::{Point, Rect};
use tdash_core::numbers::{gcd, simplify_ratio};
use tdash_core::trig::{circle_angle_at_point, circle_point_at_angle};

// ── Helpers ─────────────────────────────────────────────────────────────

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (0i32..=500, 0i32..=500, 0i32..=500, 0i32..=500)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, x + w, y + h))
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (0i32..=1000, 0i32..=1000).prop_map(|(x, y)| Point::new(x, y))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Intersection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn intersection_commutative(a in rect_strategy(), b in rect_strategy()) {
        prop_assert_eq!(a.intersection(&b), b.intersection(&a));
    }

    #[test]
    fn intersection_within_both(a in rect_strategy(), b in rect_strategy()) {
        let i = a.intersection(&b);
        prop_assert!(i.is_within(&a), "{} not within {}", i, a);
        prop_assert!(i.is_within(&b), "{} not within {}", i, b);
    }

    #[test]
    fn intersection_idempotent(a in rect_strategy()) {
        prop_assert_eq!(a.intersection(&a), a.canonical());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Union
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn union_commutative(a in rect_strategy(), b in rect_strategy()) {
        // Two empty operands resolve to whichever was passed second.
        prop_assume!(!a.is_empty() || !b.is_empty());
        prop_assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn union_contains_inputs(a in rect_strategy(), b in rect_strategy()) {
        let u = a.union(&b);
        prop_assert!(a.is_within(&u));
        prop_assert!(b.is_within(&u));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Contains vs intersection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn contains_matches_intersection(
        a in rect_strategy(),
        b in rect_strategy(),
        p in point_strategy(),
    ) {
        let both = a.contains(p) && b.contains(p);
        prop_assert_eq!(both, a.intersection(&b).contains(p));
    }

    #[test]
    fn area_is_dx_times_dy(a in rect_strategy()) {
        prop_assert_eq!(a.area(), i64::from(a.dx()) * i64::from(a.dy()));
        prop_assert!(a.dx() >= 0 && a.dy() >= 0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Translation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn translate_preserves_size(a in rect_strategy(), p in point_strategy()) {
        let moved = a.translate(p);
        prop_assert_eq!(moved.size(), a.size());
        prop_assert_eq!(moved.min, a.min + p);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Ratios
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn simplified_ratio_is_coprime(x in 1i32..=10_000, y in 1i32..=10_000) {
        let r = simplify_ratio(Point::new(x, y));
        prop_assert_eq!(gcd(r.x, r.y), 1);
        // Same proportion: x * r.y == y * r.x.
        prop_assert_eq!(i64::from(x) * i64::from(r.y), i64::from(y) * i64::from(r.x));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Trigonometry
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn circle_point_round_trips(deg in 0i32..360, radius in 200i32..=1000) {
        let mid = Point::new(2000, 2000);
        let p = circle_point_at_angle(deg, mid, radius);
        let back = circle_angle_at_point(p, mid);
        let diff = (back - deg).rem_euclid(360);
        prop_assert!(diff <= 1 || diff >= 359, "{} -> {} -> {}", deg, p, back);
    }
}
