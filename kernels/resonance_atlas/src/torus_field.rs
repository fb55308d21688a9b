// Torus field generator: twisted field lines, ring outlines, drifts, crown

use crate::projection::project;
use crate::scene::{Label, MarkerPoint, Polyline, RingOutline, Stroke, TextAnchor};
use crate::types::{Point, TorusFieldParams, CROWN_LIGHTS};
use std::f64::consts::PI;

// ============================================================================
// PALETTE
// ============================================================================

// Ring outlines: muted slate, with the middle ring picked out in amber
const RING_STROKE: &str = "#7f8c8d";
const GOLDEN_STROKE: &str = "#f59e0b";

// Counter-rotating field line sets alternate amber/blue
const LINE_AMBER: &str = "#f59e0b";
const LINE_BLUE: &str = "#2563eb";

// Drift segments: sky, with every third in green
const DRIFT_SKY: &str = "#0ea5e9";
const DRIFT_GREEN: &str = "#22c55e";

// Crown lights: pale gold fill, bronze stroke
const LIGHT_FILL: &str = "#fde68a";
const LIGHT_STROKE: &str = "#b45309";

// Label inks
const INK_DARK: &str = "#3f3f46";
const INK_SOFT: &str = "#52525b";
const INK_SKY: &str = "#075985";
const INK_AMBER: &str = "#92400e";

// ============================================================================
// GEOMETRY CONSTANTS
// ============================================================================

// Angular twist added over the full length of one field line (radians)
//
// Roughly 206 degrees of slow spiral per line, which makes adjacent lines
// cross and gives the woven torus-surface look.
const FIELD_LINE_TWIST: f64 = 3.6;

// Drift segments run from just inside the outer ring to just past it
const DRIFT_INNER_INSET: f64 = 6.0;
const DRIFT_OUTER_REACH: f64 = 28.0;

// Small angular offset between a drift's endpoints, slanting it
const DRIFT_SLANT: f64 = 0.08;

// Crown lights sit this far outside the outer ring
const CROWN_REACH: f64 = 24.0;

// ============================================================================
// RING OUTLINES
// ============================================================================

// The three concentric ring outlines: outer (R), hole (R - r), and the
// golden middle ring (R - r/2) drawn heavier
//
// Ordering invariant: outer > golden > hole for any 0 < r < R.
pub fn ring_outlines(params: &TorusFieldParams) -> Vec<RingOutline> {
    let slate = Stroke {
        color: RING_STROKE,
        width: 1.2,
        opacity: 1.0,
    };
    let golden = Stroke {
        color: GOLDEN_STROKE,
        width: 2.2,
        opacity: 1.0,
    };

    [
        (params.outer_radius, slate),
        (params.hole_radius(), slate),
        (params.golden_radius(), golden),
    ]
    .into_iter()
    .map(|(rx, stroke)| RingOutline {
        center: params.center,
        rx,
        ry: rx * params.squash,
        stroke,
    })
    .collect()
}

// ============================================================================
// FIELD LINES
// ============================================================================

// Angle along field line i at parameter u in [0, 1]
#[inline]
fn line_angle(params: &TorusFieldParams, i: usize, u: f64) -> f64 {
    let t0 = (i as f64 / params.line_count as f64) * 2.0 * PI;
    t0 + u * FIELD_LINE_TWIST
}

// Radius along a field line at parameter u in [0, 1]
//
// Sweeps from R - r at the start out to R + r at the end, crossing R at the
// midpoint, tracing the torus cross-section.
#[inline]
fn line_radius(params: &TorusFieldParams, u: f64) -> f64 {
    params.outer_radius - params.inner_radius * (u * PI).cos()
}

// The twisted field-line polylines
//
// Each line is fully determined by its start angle and the fixed
// twist/squash formula; lines share no state. Presentation rides along on
// the stroke: even indices amber, odd blue, every sixth line emphasized with
// a heavier width.
pub fn field_lines(params: &TorusFieldParams) -> Vec<Polyline> {
    let mut lines = Vec::with_capacity(params.line_count);

    for i in 0..params.line_count {
        let mut points = Vec::with_capacity(params.samples_per_line);
        for k in 0..params.samples_per_line {
            let u = k as f64 / (params.samples_per_line - 1) as f64;
            let point = project(
                params.center,
                line_angle(params, i, u),
                line_radius(params, u),
                params.squash,
            );
            points.push(point);
        }

        let color = if i % 2 == 0 { LINE_AMBER } else { LINE_BLUE };
        let width = if i % 6 == 0 { 1.5 } else { 0.8 };
        lines.push(Polyline {
            points,
            stroke: Stroke {
                color,
                width,
                opacity: 0.25,
            },
        });
    }

    lines
}

// ============================================================================
// DRIFT SEGMENTS
// ============================================================================

// Short slanted segments crossing the outer ring rim
//
// Each runs from radius R - 6 at angle a to radius R + 28 at angle a + 0.08;
// the angular offset tilts them all the same way around the ring. Every
// third segment is tagged green, the rest sky.
pub fn drift_segments(params: &TorusFieldParams) -> Vec<Polyline> {
    let mut drifts = Vec::with_capacity(params.drift_count);

    for i in 0..params.drift_count {
        let a = (i as f64 / params.drift_count as f64) * 2.0 * PI;
        let start = project(
            params.center,
            a,
            params.outer_radius - DRIFT_INNER_INSET,
            params.squash,
        );
        let end = project(
            params.center,
            a + DRIFT_SLANT,
            params.outer_radius + DRIFT_OUTER_REACH,
            params.squash,
        );

        let color = if i % 3 == 0 { DRIFT_GREEN } else { DRIFT_SKY };
        drifts.push(Polyline {
            points: vec![start, end],
            stroke: Stroke {
                color,
                width: 1.0,
                opacity: 0.35,
            },
        });
    }

    drifts
}

// ============================================================================
// CROWN MARKERS
// ============================================================================

// The twelve lights ringing the torus at radius R + 24
pub fn crown_markers(params: &TorusFieldParams) -> Vec<MarkerPoint> {
    (0..CROWN_LIGHTS)
        .map(|i| {
            let a = (i as f64 / CROWN_LIGHTS as f64) * 2.0 * PI;
            MarkerPoint {
                center: project(
                    params.center,
                    a,
                    params.outer_radius + CROWN_REACH,
                    params.squash,
                ),
                radius: 5.0,
                fill: LIGHT_FILL,
                stroke: Some(Stroke {
                    color: LIGHT_STROKE,
                    width: 0.6,
                    opacity: 1.0,
                }),
                opacity: 1.0,
            }
        })
        .collect()
}

// ============================================================================
// LABELS
// ============================================================================

// Decorative annotations for the torus plate
//
// Anchors track the ring geometry; the texts themselves are fixed plate
// captions.
pub fn labels(params: &TorusFieldParams) -> Vec<Label> {
    let cx = params.center.x;
    let cy = params.center.y;
    let r_outer = params.outer_radius;

    vec![
        Label::new(
            Point::new(cx, cy - params.golden_radius() * params.squash - 18.0),
            "Goldener Ring · Erde (1)",
            INK_DARK,
            TextAnchor::Middle,
        ),
        Label::new(
            Point::new(cx - r_outer + 8.0, cy),
            "2 ↺",
            INK_SKY,
            TextAnchor::Start,
        ),
        Label::new(
            Point::new(cx + r_outer - 24.0, cy),
            "3 ↻",
            INK_AMBER,
            TextAnchor::Start,
        ),
        Label::new(
            Point::new(cx, cy + (r_outer + 48.0) * params.squash),
            "Torus · Gegenrotationen · 2–1–3",
            INK_SOFT,
            TextAnchor::Middle,
        ),
    ]
}
