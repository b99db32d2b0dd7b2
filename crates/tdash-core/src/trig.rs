#![forbid(unsafe_code)]

//! Circle trigonometry on the screen coordinate system.
//!
//! Angles are whole degrees, `0` at three o'clock, growing counter-clockwise.
//! The Y axis grows downward, so a point above the centre has a smaller `y`.

use crate::geometry::Point;
use crate::numbers::{degrees_to_radians, radians_to_degrees, round};

/// The point on the circle of `radius` around `mid` at `degrees`.
pub fn circle_point_at_angle(degrees: i32, mid: Point, radius: i32) -> Point {
    let rad = degrees_to_radians(f64::from(degrees));
    let r = f64::from(radius);
    let dx = round(r * rad.cos()) as i32;
    let dy = round(r * rad.sin()) as i32;
    Point::new(mid.x + dx, mid.y - dy)
}

/// The angle in degrees `[0, 360)` of `point` as seen from `mid`.
///
/// `mid` itself is reported as `0`.
pub fn circle_angle_at_point(point: Point, mid: Point) -> i32 {
    let adj = f64::from(point.x - mid.x);
    let opp = f64::from(mid.y - point.y);
    if opp == 0.0 {
        return if adj >= 0.0 { 0 } else { 180 };
    }
    let deg = round(radians_to_degrees(opp.atan2(adj))) as i32;
    deg.rem_euclid(360)
}

/// Whether `angle` lies on the counter-clockwise arc from `start` to `end`,
/// both inclusive.
///
/// An arc with `start > end` wraps through zero.
pub fn angle_in_arc(angle: i32, start: i32, end: i32) -> bool {
    if start <= end {
        (start..=end).contains(&angle)
    } else {
        angle >= start || angle <= end
    }
}
