#![forbid(unsafe_code)]

//! Numeric helpers: ratios, rounding, and angle conversion.

use crate::geometry::Point;

/// Greatest common divisor of `|a|` and `|b|`. `gcd(0, 0) == 0`.
pub fn gcd(a: i32, b: i32) -> i32 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    // Only i32::MIN paired with 0 or itself exceeds i32::MAX.
    i32::try_from(a).unwrap_or(i32::MAX)
}

/// Reduce a `(numerator, denominator)` ratio to lowest terms.
///
/// Signs are preserved and `(0, 0)` is returned unchanged.
pub fn simplify_ratio(ratio: Point) -> Point {
    let g = gcd(ratio.x, ratio.y);
    if g == 0 {
        return ratio;
    }
    Point::new(ratio.x / g, ratio.y / g)
}

/// Smallest and largest value of `values`, or `None` when empty.
pub fn min_max<T: PartialOrd + Copy>(values: &[T]) -> Option<(T, T)> {
    let (first, rest) = values.split_first()?;
    let mut lo = *first;
    let mut hi = *first;
    for &v in rest {
        if v < lo {
            lo = v;
        }
        if v > hi {
            hi = v;
        }
    }
    Some((lo, hi))
}

/// Round half away from zero.
#[inline]
pub fn round(x: f64) -> f64 {
    x.round()
}

/// Round `x` up so that it keeps `places` non-zero decimal places after the
/// leading zeros of its fractional part.
///
/// Returns the rounded value together with the number of zero decimal places
/// that precede the first non-zero decimal digit. Values without a fractional
/// part are returned unchanged with `0`. With `places == 0` the value is not
/// rounded, only the leading zeros are counted.
///
/// ```
/// use tdash_core::numbers::round_to_non_zero_places;
///
/// assert_eq!(round_to_non_zero_places(1.5, 1), (1.5, 0));
/// assert_eq!(round_to_non_zero_places(0.012345, 2), (0.013, 1));
/// ```
pub fn round_to_non_zero_places(x: f64, places: usize) -> (f64, usize) {
    if x == 0.0 || !x.is_finite() {
        return (x, 0);
    }
    let fraction = (x - x.trunc()).abs();
    if fraction == 0.0 {
        return (x, 0);
    }

    let mut to_non_zero = 1.0_f64;
    let mut zeros = 0usize;
    while fraction * to_non_zero < 1.0 {
        to_non_zero *= 10.0;
        zeros += 1;
    }
    // `zeros` counted the multiplication that produced the first non-zero
    // digit as well.
    let leading = zeros.saturating_sub(1);
    if places == 0 {
        return (x, leading);
    }

    let mult = to_non_zero * 10f64.powi(i32::try_from(places).unwrap_or(i32::MAX) - 1);
    ((x * mult).ceil() / mult, leading)
}

/// Convert degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Convert radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn simplify_ratio_reduces_and_keeps_sign() {
        assert_eq!(simplify_ratio(Point::new(6, 10)), Point::new(3, 5));
        assert_eq!(simplify_ratio(Point::new(-6, 10)), Point::new(-3, 5));
        assert_eq!(simplify_ratio(Point::new(3, 5)), Point::new(3, 5));
        assert_eq!(simplify_ratio(Point::ZERO), Point::ZERO);
        assert_eq!(simplify_ratio(Point::new(0, 4)), Point::new(0, 1));
    }

    #[test]
    fn min_max_values() {
        assert_eq!(min_max(&[3, -1, 7, 2]), Some((-1, 7)));
        assert_eq!(min_max(&[1.5, 0.5]), Some((0.5, 1.5)));
        assert_eq!(min_max::<i32>(&[]), None);
    }

    #[test]
    fn round_half_away_from_zero() {
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(-2.5), -3.0);
        assert_eq!(round(3.96), 4.0);
    }

    #[test]
    fn non_zero_places() {
        assert_eq!(round_to_non_zero_places(0.0, 2), (0.0, 0));
        assert_eq!(round_to_non_zero_places(3.0, 2), (3.0, 0));
        assert_eq!(round_to_non_zero_places(1.5, 1), (1.5, 0));
        assert_eq!(round_to_non_zero_places(0.012345, 2), (0.013, 1));
        assert_eq!(round_to_non_zero_places(0.012345, 0), (0.012345, 1));
    }

    #[test]
    fn angle_conversion() {
        assert!((degrees_to_radians(180.0) - core::f64::consts::PI).abs() < 1e-12);
        assert!((radians_to_degrees(core::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-12);
    }
}
