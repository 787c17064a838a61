//! Segment and side primitives used by the obstruction test
//!
//! Both functions work on plane coordinates (see [`crate::grid::hex`]).

use glam::DVec2;

use crate::sight::constants::COINCIDENT_DIST_SQ;

/// Does `c` project onto segment `a`-`b`?
///
/// True iff `0 <= (c - a)·(b - a) <= |b - a|²`. Only the projection is
/// checked: `c` may sit anywhere off the line as long as its foot falls
/// within the segment's span. Both bounds are inclusive.
pub fn within_span(a: DVec2, b: DVec2, c: DVec2) -> bool {
    let ab = b - a;
    let inner = (c - a).dot(ab);
    0.0 <= inner && inner <= ab.length_squared()
}

/// Cross product of `c - a` against the direction `a -> b`
///
/// The sign tells which side of the directed line `c` is on.
pub fn signed_side(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    (c.x - a.x) * (b.y - a.y) - (c.y - a.y) * (b.x - a.x)
}

/// Are two edge points the same point?
pub fn coincident(a: DVec2, b: DVec2) -> bool {
    a.distance_squared(b) < COINCIDENT_DIST_SQ
}

/// Which side of a directed sight line a point falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    OnLine,
    Right,
}

impl Side {
    /// Classify a [`signed_side`] value with a dead zone of `epsilon`
    pub fn classify(d: f64, epsilon: f64) -> Self {
        if d < -epsilon {
            Side::Left
        } else if d > epsilon {
            Side::Right
        } else {
            Side::OnLine
        }
    }

    pub fn of(a: DVec2, b: DVec2, c: DVec2, epsilon: f64) -> Self {
        Self::classify(signed_side(a, b, c), epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sight::constants::SIDE_EPSILON;

    fn v(x: f64, y: f64) -> DVec2 {
        DVec2::new(x, y)
    }

    #[test]
    fn test_span_includes_endpoints() {
        let a = v(0.0, 0.0);
        let b = v(4.0, 0.0);
        assert!(within_span(a, b, a));
        assert!(within_span(a, b, b));
        assert!(within_span(a, b, v(2.0, 0.0)));
    }

    #[test]
    fn test_span_excludes_beyond_ends() {
        let a = v(0.0, 0.0);
        let b = v(4.0, 0.0);
        assert!(!within_span(a, b, v(-0.01, 0.0)));
        assert!(!within_span(a, b, v(4.01, 0.0)));
    }

    #[test]
    fn test_span_ignores_perpendicular_offset() {
        // Far off the line, but its projection lands mid-segment
        let a = v(0.0, 0.0);
        let b = v(4.0, 0.0);
        assert!(within_span(a, b, v(2.0, 100.0)));
        assert!(within_span(a, b, v(2.0, -100.0)));
    }

    #[test]
    fn test_signed_side_sign() {
        let a = v(0.0, 0.0);
        let b = v(1.0, 0.0);
        // (c.x-a.x)*(b.y-a.y) - (c.y-a.y)*(b.x-a.x) = -c.y
        assert_eq!(signed_side(a, b, v(0.5, 1.0)), -1.0);
        assert_eq!(signed_side(a, b, v(0.5, -2.0)), 2.0);
        assert_eq!(signed_side(a, b, v(7.0, 0.0)), 0.0);
    }

    #[test]
    fn test_side_dead_zone() {
        assert_eq!(Side::classify(-0.5, SIDE_EPSILON), Side::Left);
        assert_eq!(Side::classify(0.5, SIDE_EPSILON), Side::Right);
        assert_eq!(Side::classify(0.1, SIDE_EPSILON), Side::OnLine);
        assert_eq!(Side::classify(-0.1, SIDE_EPSILON), Side::OnLine);
        assert_eq!(Side::classify(0.0, SIDE_EPSILON), Side::OnLine);
    }

    #[test]
    fn test_coincident_tolerates_rounding() {
        let a = v(1.0, 0.0);
        assert!(coincident(a, v(1.0 + 1e-12, -1e-12)));
        assert!(!coincident(a, v(1.001, 0.0)));
    }
}
