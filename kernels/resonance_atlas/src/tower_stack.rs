// Fresnel tower generator: stacked light cones, crown lights, moon mirrors

use crate::projection::project;
use crate::scene::{ConeSegment, Label, MarkerPoint, Polyline, Stroke, TextAnchor};
use crate::types::{Point, TowerParams, CROWN_LIGHTS, TOWER_SEGMENTS};
use std::f64::consts::PI;

// ============================================================================
// PALETTE
// ============================================================================

// Cone fills, bottom to top: the 1-2-3 cadence twice (gold, blue, green,
// then the primed red, sky, emerald repeat)
const CONE_FILLS: [&str; TOWER_SEGMENTS] = [
    "#f59e0b", "#2563eb", "#22c55e", "#b91c1c", "#0ea5e9", "#10b981",
];

// Bronze rim drawn across each cone's base
const RIM_STROKE: &str = "#8c6d49";

// Crown lights share the torus palette; moons are the small blue mirrors
const LIGHT_FILL: &str = "#fde68a";
const LIGHT_STROKE: &str = "#b45309";
const MOON_FILL: &str = "#60a5fa";

// Label inks
const INK_DARK: &str = "#3f3f46";
const INK_SOFT: &str = "#52525b";
const INK_SKY: &str = "#075985";
const INK_AMBER: &str = "#92400e";
const INK_EMERALD: &str = "#065f46";

// ============================================================================
// BASELINE STACKING
// ============================================================================

// Baseline screen-Y for every segment, as an explicit prefix sum
//
// base(0) = base_y; base(i) = base_y - sum of height[j] * packing for j < i.
// Each cone's base rests on the packed (not full) accumulated height of the
// cones beneath it, so the stack telescopes instead of sitting flush.
// Strictly monotonically decreasing whenever all heights are positive.
pub fn baselines(params: &TowerParams) -> [f64; TOWER_SEGMENTS] {
    let mut out = [0.0; TOWER_SEGMENTS];
    let mut packed = 0.0;
    for i in 0..TOWER_SEGMENTS {
        out[i] = params.base_y - packed;
        packed += params.heights[i] * params.packing;
    }
    out
}

// Peak screen-Y for every segment
//
// The bottom cone rises its full height; every later peak coincides with the
// packed cumulative sum through its own height, continuing the telescoped
// silhouette.
pub fn peaks(params: &TowerParams) -> [f64; TOWER_SEGMENTS] {
    let mut out = [0.0; TOWER_SEGMENTS];
    let mut packed = 0.0;
    for i in 0..TOWER_SEGMENTS {
        packed += params.heights[i] * params.packing;
        out[i] = if i == 0 {
            params.base_y - params.heights[0]
        } else {
            params.base_y - packed
        };
    }
    out
}

// ============================================================================
// CONE SEGMENTS
// ============================================================================

// The six stacked cones, bottom to top
//
// Each is an isosceles triangle: peak on the tower axis, base corners at
// +- radius[i] around it. Opacity rises toward the top of the stack so the
// small inner cones read through the large outer ones.
pub fn cone_segments(params: &TowerParams) -> Vec<ConeSegment> {
    let bases = baselines(params);
    let tops = peaks(params);

    (0..TOWER_SEGMENTS)
        .map(|i| {
            let radius = params.radii[i];
            ConeSegment {
                index: i,
                peak: Point::new(params.center_x, tops[i]),
                base_left: Point::new(params.center_x - radius, bases[i]),
                base_right: Point::new(params.center_x + radius, bases[i]),
                fill: CONE_FILLS[i],
                opacity: 0.18 + 0.06 * (TOWER_SEGMENTS - i) as f64,
            }
        })
        .collect()
}

// Bronze rim across a cone's base
pub fn rim_line(cone: &ConeSegment) -> Polyline {
    Polyline {
        points: vec![cone.base_left, cone.base_right],
        stroke: Stroke {
            color: RIM_STROKE,
            width: 1.0,
            opacity: 0.4,
        },
    }
}

// ============================================================================
// CROWN AND MIRRORS
// ============================================================================

// Angular position of crown slot i
#[inline]
fn crown_angle(i: usize) -> f64 {
    (i as f64 / CROWN_LIGHTS as f64) * 2.0 * PI
}

// The twelve crown lights on the ellipse above the tower
pub fn crown_lights(params: &TowerParams) -> Vec<MarkerPoint> {
    (0..CROWN_LIGHTS)
        .map(|i| MarkerPoint {
            center: project(
                params.crown_center(),
                crown_angle(i),
                params.crown_radius,
                params.crown_squash,
            ),
            radius: 5.0,
            fill: LIGHT_FILL,
            stroke: Some(Stroke {
                color: LIGHT_STROKE,
                width: 0.6,
                opacity: 1.0,
            }),
            opacity: 1.0,
        })
        .collect()
}

// The moon mirrors: one small blue mark per crown slot, at the same position
// as its light
pub fn moon_mirrors(params: &TowerParams) -> Vec<MarkerPoint> {
    (0..CROWN_LIGHTS)
        .map(|i| MarkerPoint {
            center: project(
                params.crown_center(),
                crown_angle(i),
                params.crown_radius,
                params.crown_squash,
            ),
            radius: 2.4,
            fill: MOON_FILL,
            stroke: None,
            opacity: 0.7,
        })
        .collect()
}

// ============================================================================
// LABELS
// ============================================================================

// The 2-1-3 cadence tags climbing the stack
//
// Hand-anchored offsets from the reference plate; decorative text keyed to
// segment index, not derived from the cone geometry.
pub fn cadence_labels(params: &TowerParams) -> Vec<Label> {
    let cx = params.center_x;
    let by = params.base_y;

    vec![
        Label::new(Point::new(cx, by - 50.0), "1", INK_AMBER, TextAnchor::Middle),
        Label::new(
            Point::new(cx - 180.0, by - 160.0),
            "2",
            INK_SKY,
            TextAnchor::Middle,
        ),
        Label::new(
            Point::new(cx + 180.0, by - 260.0),
            "3",
            INK_EMERALD,
            TextAnchor::Middle,
        ),
        Label::new(
            Point::new(cx, by - 420.0),
            "1′",
            INK_DARK,
            TextAnchor::Middle,
        ),
        Label::new(
            Point::new(cx - 120.0, by - 500.0),
            "2′",
            INK_SKY,
            TextAnchor::Middle,
        ),
        Label::new(
            Point::new(cx + 120.0, by - 560.0),
            "3′",
            INK_EMERALD,
            TextAnchor::Middle,
        ),
    ]
}

// Caption beneath the crown
pub fn caption(params: &TowerParams) -> Label {
    Label::new(
        Point::new(params.center_x, params.base_y - 610.0),
        "Fresnel Tower · gestapelte Lichtkegel · Monde als Spiegelpunkte · 12 Lichter",
        INK_SOFT,
        TextAnchor::Middle,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_baseline_concrete_values() {
        // base(0) = 760; base(1) = 760 - 120 * 0.9 = 652
        let p = TowerParams::default();
        let bases = baselines(&p);

        assert!((bases[0] - 760.0).abs() < EPS);
        assert!((bases[1] - 652.0).abs() < EPS);
        // base(2) subtracts the packed second height too
        assert!((bases[2] - (652.0 - 90.0)).abs() < EPS);
    }

    #[test]
    fn test_baselines_strictly_decreasing() {
        let p = TowerParams::default();
        let bases = baselines(&p);

        for i in 1..TOWER_SEGMENTS {
            assert!(
                bases[i] < bases[i - 1],
                "segment {} base {} must sit above segment {} base {}",
                i,
                bases[i],
                i - 1,
                bases[i - 1]
            );
        }
    }

    #[test]
    fn test_peaks_rise_above_their_bases() {
        let p = TowerParams::default();
        let bases = baselines(&p);
        let tops = peaks(&p);

        assert!((tops[0] - (760.0 - 120.0)).abs() < EPS);
        for i in 0..TOWER_SEGMENTS {
            assert!(tops[i] < bases[i], "peak must be above the base");
        }
    }

    #[test]
    fn test_cone_geometry() {
        let p = TowerParams::default();
        let cones = cone_segments(&p);

        assert_eq!(cones.len(), TOWER_SEGMENTS);
        for (i, cone) in cones.iter().enumerate() {
            assert_eq!(cone.index, i);
            // Isosceles: base corners symmetric around the axis
            assert!((cone.peak.x - 500.0).abs() < EPS);
            assert!((cone.base_left.x - (500.0 - p.radii[i])).abs() < EPS);
            assert!((cone.base_right.x - (500.0 + p.radii[i])).abs() < EPS);
            assert!((cone.base_left.y - cone.base_right.y).abs() < EPS);
        }
    }

    #[test]
    fn test_opacity_rises_up_the_stack() {
        let p = TowerParams::default();
        let cones = cone_segments(&p);

        // 0.18 + 0.06 * (6 - i): bottom cone most transparent
        assert!((cones[0].opacity - 0.54).abs() < EPS);
        assert!((cones[5].opacity - 0.24).abs() < EPS);
        for i in 1..TOWER_SEGMENTS {
            assert!(cones[i].opacity < cones[i - 1].opacity);
        }
    }

    #[test]
    fn test_rim_spans_the_base() {
        let p = TowerParams::default();
        let cone = &cone_segments(&p)[0];
        let rim = rim_line(cone);

        assert_eq!(rim.points.len(), 2);
        assert!((rim.points[0].x - cone.base_left.x).abs() < EPS);
        assert!((rim.points[1].x - cone.base_right.x).abs() < EPS);
        assert!((rim.points[0].y - cone.base_y()).abs() < EPS);
    }

    #[test]
    fn test_crown_pairs_lights_with_moons() {
        let p = TowerParams::default();
        let lights = crown_lights(&p);
        let moons = moon_mirrors(&p);

        assert_eq!(lights.len(), CROWN_LIGHTS);
        assert_eq!(moons.len(), CROWN_LIGHTS);
        // Mirrors share their slot's position but are smaller and blue
        for (light, moon) in lights.iter().zip(&moons) {
            assert_eq!(light.center, moon.center);
            assert!(moon.radius < light.radius);
            assert!(moon.stroke.is_none());
        }
        // First slot sits on the +x axis of the crown ellipse
        assert!((lights[0].center.x - (500.0 + 270.0)).abs() < EPS);
        assert!((lights[0].center.y - (760.0 - 520.0)).abs() < EPS);
    }

    #[test]
    fn test_crown_deterministic() {
        let p = TowerParams::default();
        assert_eq!(crown_lights(&p), crown_lights(&p));
    }

    #[test]
    fn test_all_coordinates_finite() {
        let p = TowerParams::default();
        for cone in cone_segments(&p) {
            assert!(cone.peak.is_finite());
            assert!(cone.base_left.is_finite());
            assert!(cone.base_right.is_finite());
        }
        for marker in crown_lights(&p).iter().chain(moon_mirrors(&p).iter()) {
            assert!(marker.center.is_finite());
        }
    }

    #[test]
    fn test_cadence_labels() {
        let p = TowerParams::default();
        let tags = cadence_labels(&p);

        assert_eq!(tags.len(), 6);
        assert_eq!(tags[0].text, "1");
        assert_eq!(tags[3].text, "1′");
        // Anchors climb the tower
        assert!(tags[5].anchor.y < tags[0].anchor.y);
    }
}
