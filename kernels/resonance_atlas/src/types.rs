// Type definitions for the resonance atlas diagrams

use serde::Serialize;

// ============================================================================
// DOMAIN CONSTANTS
// ============================================================================

// Number of crown lights ringing each diagram
//
// The "12 lights / 12 zodiacs" count is part of the diagram's meaning, not a
// tuning knob, so it is a fixed constant rather than a parameter field.
pub const CROWN_LIGHTS: usize = 12;

// Parchment background shared by both plates
pub const PARCHMENT: &str = "#f8f5f0";

// ============================================================================
// SHARED VALUE TYPES
// ============================================================================

// A 2D point in canvas coordinates (y grows downward, SVG convention)
//
// Pure value type: no identity, compared and copied freely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    // True when both coordinates are finite real numbers
    //
    // A non-finite coordinate anywhere in a built scene is an implementation
    // bug (see validation), never a legitimate runtime condition.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// ============================================================================
// DISPLAY FLAGS
// ============================================================================

// Caller-owned visibility toggles
//
// The host UI owns these two booleans; the kernel just reads them on each
// build. Turning flows off skips field lines and drift segments entirely
// (they are never computed); turning labels off produces zero text elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub show_labels: bool,
    pub show_flows: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            show_labels: true,
            show_flows: true,
        }
    }
}

// ============================================================================
// TORUS FIELD PARAMETERS
// ============================================================================

// Parameters for the torus field plate
//
// Precondition (documented, not checked): radii positive with
// inner_radius < outer_radius, counts >= 1, squash >= 0. Out-of-range values
// give undefined visual output; the generators stay total pure functions and
// never panic on them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusFieldParams {
    // Canvas center of the torus projection
    pub center: Point,

    // Outer radius R of the torus ring (projection)
    pub outer_radius: f64,

    // Inner radius r (the hole)
    pub inner_radius: f64,

    // Number of twisted field lines
    pub line_count: usize,

    // Samples per field line (polyline vertex count)
    pub samples_per_line: usize,

    // Vertical scale simulating perspective foreshortening
    //
    // squash = 0 is legal and degenerates every ring to a horizontal line.
    pub squash: f64,

    // Number of short drift segments around the rim
    pub drift_count: usize,
}

impl Default for TorusFieldParams {
    // Reference plate: 1000x700 canvas, ring centered at (500, 350)
    fn default() -> Self {
        Self {
            center: Point::new(500.0, 350.0),
            outer_radius: 230.0,
            inner_radius: 90.0,
            line_count: 24,
            samples_per_line: 221,
            squash: 0.55,
            drift_count: 18,
        }
    }
}

impl TorusFieldParams {
    // Radius of the distinguished golden middle ring
    #[inline]
    pub fn golden_radius(&self) -> f64 {
        self.outer_radius - self.inner_radius / 2.0
    }

    // Radius of the inner ring outline (the hole)
    #[inline]
    pub fn hole_radius(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }
}

// ============================================================================
// FRESNEL TOWER PARAMETERS
// ============================================================================

// Number of stacked cone segments in the tower
pub const TOWER_SEGMENTS: usize = 6;

// Parameters for the Fresnel tower plate
//
// The height/radius tables are fixed constants of this diagram. They are
// exposed as fields so a host can build variants, but the six-entry defaults
// below must be preserved to match the reference plate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TowerParams {
    // Horizontal center of the tower
    pub center_x: f64,

    // Screen-Y of the bottom cone's base
    pub base_y: f64,

    // Cone heights, bottom to top
    pub heights: [f64; TOWER_SEGMENTS],

    // Cone half-widths, bottom to top
    pub radii: [f64; TOWER_SEGMENTS],

    // Multiplier (< 1) applied to each height when accumulating the next
    // segment's base, nesting the cones into each other
    pub packing: f64,

    // Crown ellipse radius around the tower top
    pub crown_radius: f64,

    // Vertical squash of the crown ellipse
    pub crown_squash: f64,

    // Height of the crown center above base_y
    pub crown_lift: f64,
}

impl Default for TowerParams {
    // Reference plate: 1000x900 canvas, base line at y = 760
    fn default() -> Self {
        Self {
            center_x: 500.0,
            base_y: 760.0,
            heights: [120.0, 100.0, 80.0, 64.0, 52.0, 42.0],
            radii: [240.0, 200.0, 160.0, 128.0, 104.0, 86.0],
            packing: 0.9,
            crown_radius: 270.0,
            crown_squash: 0.35,
            crown_lift: 520.0,
        }
    }
}

impl TowerParams {
    // Center of the crown ellipse
    #[inline]
    pub fn crown_center(&self) -> Point {
        Point::new(self.center_x, self.base_y - self.crown_lift)
    }
}

// ============================================================================
// COMBINED PARAMETER SET
// ============================================================================

// Parameter sets for both plates, as handed to the scene assembler
#[derive(Debug, Clone, Copy, Default)]
pub struct AtlasParams {
    pub torus: TorusFieldParams,
    pub tower: TowerParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ring_radii_ordering() {
        let p = TorusFieldParams::default();
        assert!(p.outer_radius > p.golden_radius());
        assert!(p.golden_radius() > p.hole_radius());
        assert!(p.hole_radius() > 0.0);
    }

    #[test]
    fn test_default_view_shows_everything() {
        let v = ViewOptions::default();
        assert!(v.show_labels);
        assert!(v.show_flows);
    }

    #[test]
    fn test_tower_tables_have_six_entries() {
        let p = TowerParams::default();
        assert_eq!(p.heights.len(), TOWER_SEGMENTS);
        assert_eq!(p.radii.len(), TOWER_SEGMENTS);
        // Tables shrink monotonically, bottom to top
        for i in 1..TOWER_SEGMENTS {
            assert!(p.heights[i] < p.heights[i - 1]);
            assert!(p.radii[i] < p.radii[i - 1]);
        }
    }

    #[test]
    fn test_crown_center_is_above_base() {
        let p = TowerParams::default();
        assert!(p.crown_center().y < p.base_y);
    }
}
