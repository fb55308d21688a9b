// Polar projection utilities shared by both diagram generators

use crate::types::Point;
use std::f64::consts::PI;

// ============================================================================
// ANGLE NORMALIZATION
// ============================================================================

// Map any finite angle into [0, 2pi)
//
// Field-line twists run past a full turn (t0 + 3.6 rad), so generators feed
// raw accumulated angles through here to keep the stored-angle invariant.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(2.0 * PI)
}

// ============================================================================
// ELLIPTICAL PROJECTION
// ============================================================================

// Project a polar sample onto the canvas under an elliptical squash
//
// x = center.x + radius * cos(angle)
// y = center.y + radius * sin(angle) * squash
//
// The squash factor scales only the vertical component, turning circles into
// the foreshortened ellipses that give the plates their perspective look.
// Total over all finite inputs: radius 0 collapses to the center, squash 0
// collapses to a horizontal line, neither is an error.
#[inline]
pub fn project(center: Point, angle: f64, radius: f64, squash: f64) -> Point {
    let a = normalize_angle(angle);
    Point::new(
        center.x + radius * a.cos(),
        center.y + radius * a.sin() * squash,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_project_angle_zero() {
        let c = Point::new(500.0, 350.0);
        let p = project(c, 0.0, 140.0, 0.55);
        assert!((p.x - 640.0).abs() < EPS);
        assert!((p.y - 350.0).abs() < EPS);
    }

    #[test]
    fn test_project_quarter_turn_applies_squash() {
        let c = Point::new(0.0, 0.0);
        let p = project(c, PI / 2.0, 100.0, 0.55);
        assert!(p.x.abs() < EPS);
        assert!((p.y - 55.0).abs() < EPS);
    }

    #[test]
    fn test_project_squash_zero_is_legal() {
        // Degenerates to a horizontal line, must not error or produce NaN
        let c = Point::new(10.0, 20.0);
        let p = project(c, 1.2345, 50.0, 0.0);
        assert!(p.is_finite());
        assert!((p.y - 20.0).abs() < EPS);
    }

    #[test]
    fn test_project_radius_zero_is_center() {
        let c = Point::new(3.0, 4.0);
        let p = project(c, 2.0, 0.0, 0.55);
        assert!((p.x - 3.0).abs() < EPS);
        assert!((p.y - 4.0).abs() < EPS);
    }

    #[test]
    fn test_normalize_angle_range() {
        for &a in &[-7.0, -PI, 0.0, 1.0, 2.0 * PI, 9.5, 123.456] {
            let n = normalize_angle(a);
            assert!((0.0..2.0 * PI).contains(&n), "angle {} escaped range", n);
        }
    }

    #[test]
    fn test_normalize_preserves_projection() {
        // Normalizing inside project() must not move the projected point
        let c = Point::new(500.0, 350.0);
        let raw = 3.6 + 2.0 * PI;
        let a = project(c, raw, 230.0, 0.55);
        let b = project(c, 3.6, 230.0, 0.55);
        assert!((a.x - b.x).abs() < EPS);
        assert!((a.y - b.y).abs() < EPS);
    }
}
