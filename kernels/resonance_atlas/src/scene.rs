// Scene assembly and drawable element model

use crate::types::{AtlasParams, Point, TorusFieldParams, TowerParams, ViewOptions, PARCHMENT};
use crate::{torus_field, tower_stack};
use serde::Serialize;

// ============================================================================
// CANVAS EXTENTS
// ============================================================================

// Reference viewBox for the torus plate
pub const TORUS_CANVAS: (u32, u32) = (1000, 700);

// Reference viewBox for the tower plate
pub const TOWER_CANVAS: (u32, u32) = (1000, 900);

// ============================================================================
// DRAWABLE ELEMENTS
// ============================================================================

// Stroke presentation carried alongside geometry
//
// Style is computed once at generation time and stored on the element, so a
// renderer never re-derives which line was emphasized or alternately colored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
    pub opacity: f64,
}

// A concentric ring outline, rendered as an ellipse
//
// Purely derived from a radius and the squash factor; holds no state of its
// own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingOutline {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
    pub stroke: Stroke,
}

// An open polyline (>= 2 points), rendered as connected segments
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub stroke: Stroke,
}

// A "light" or "moon" marker: filled circle with optional contrasting stroke
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerPoint {
    pub center: Point,
    pub radius: f64,
    pub fill: &'static str,
    pub stroke: Option<Stroke>,
    pub opacity: f64,
}

// One tapering cone of the tower stack, an isosceles triangle
//
// base_left.y == base_right.y is the segment's baseline; the next segment's
// baseline is derived from the cumulative packed heights, never from this
// value after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConeSegment {
    pub index: usize,
    pub peak: Point,
    pub base_left: Point,
    pub base_right: Point,
    pub fill: &'static str,
    pub opacity: f64,
}

impl ConeSegment {
    // Screen-Y of this segment's baseline
    #[inline]
    pub fn base_y(&self) -> f64 {
        self.base_left.y
    }
}

// Horizontal alignment of a text label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
}

// Decorative text annotation; no behavioral role
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub anchor: Point,
    pub text: String,
    pub color: &'static str,
    pub size: f64,
    pub align: TextAnchor,
}

impl Label {
    pub fn new(anchor: Point, text: &str, color: &'static str, align: TextAnchor) -> Self {
        Self {
            anchor,
            text: text.to_string(),
            color,
            size: 12.0,
            align,
        }
    }
}

// A single drawable, in paint order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Ring(RingOutline),
    Line(Polyline),
    Marker(MarkerPoint),
    Cone(ConeSegment),
    Text(Label),
}

// ============================================================================
// SCENE
// ============================================================================

// An ordered list of drawables plus canvas extents
//
// Built fresh on every call and immutable afterwards; consumers only iterate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: &'static str,
    pub elements: Vec<Element>,
}

impl Scene {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: PARCHMENT,
            elements: Vec::new(),
        }
    }

    // Count of label elements (used by manifest and tests)
    pub fn label_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, Element::Text(_)))
            .count()
    }

    // Count of polyline elements
    pub fn line_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, Element::Line(_)))
            .count()
    }
}

// ============================================================================
// ASSEMBLY
// ============================================================================

// Assemble the torus field plate
//
// Paint order matches the reference plate: ring outlines, then (when flows
// are shown) field lines and drift segments, then the crown lights, then
// labels. With show_flows off, the flow geometry is skipped entirely rather
// than computed and discarded.
pub fn assemble_torus(params: &TorusFieldParams, view: ViewOptions) -> Scene {
    let (w, h) = TORUS_CANVAS;
    let mut scene = Scene::new(w, h);

    for ring in torus_field::ring_outlines(params) {
        scene.elements.push(Element::Ring(ring));
    }

    if view.show_flows {
        for line in torus_field::field_lines(params) {
            scene.elements.push(Element::Line(line));
        }
        for drift in torus_field::drift_segments(params) {
            scene.elements.push(Element::Line(drift));
        }
    }

    for light in torus_field::crown_markers(params) {
        scene.elements.push(Element::Marker(light));
    }

    if view.show_labels {
        for label in torus_field::labels(params) {
            scene.elements.push(Element::Text(label));
        }
    }

    scene
}

// Assemble the Fresnel tower plate
//
// Paint order: each cone followed by its base rim, cadence labels, the crown
// lights, their moon mirrors, and finally the caption.
pub fn assemble_tower(params: &TowerParams, view: ViewOptions) -> Scene {
    let (w, h) = TOWER_CANVAS;
    let mut scene = Scene::new(w, h);

    for cone in tower_stack::cone_segments(params) {
        let rim = tower_stack::rim_line(&cone);
        scene.elements.push(Element::Cone(cone));
        scene.elements.push(Element::Line(rim));
    }

    if view.show_labels {
        for label in tower_stack::cadence_labels(params) {
            scene.elements.push(Element::Text(label));
        }
    }

    for light in tower_stack::crown_lights(params) {
        scene.elements.push(Element::Marker(light));
    }
    for moon in tower_stack::moon_mirrors(params) {
        scene.elements.push(Element::Marker(moon));
    }

    if view.show_labels {
        scene
            .elements
            .push(Element::Text(tower_stack::caption(params)));
    }

    scene
}

// Both plates of the atlas, torus first
#[derive(Debug, Clone)]
pub struct Atlas {
    pub torus: Scene,
    pub tower: Scene,
}

// Build both plates from one parameter set
//
// Pure in its inputs; repeated calls with identical parameters yield
// bit-identical scenes.
pub fn build(params: &AtlasParams, view: ViewOptions) -> Atlas {
    Atlas {
        torus: assemble_torus(&params.torus, view),
        tower: assemble_tower(&params.tower, view),
    }
}

// ============================================================================
// MANIFEST METADATA
// ============================================================================

// Per-plate entry in the generated manifest
#[derive(Debug, Clone, Serialize)]
pub struct PlateEntry {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub elements: usize,
    pub svg_url: String,
}

impl PlateEntry {
    pub fn new(name: &str, scene: &Scene) -> Self {
        Self {
            name: name.to_string(),
            width: scene.width,
            height: scene.height,
            elements: scene.elements.len(),
            svg_url: format!("{}.svg", name),
        }
    }
}

// Manifest metadata for a generation run
//
// Serialized to JSON next to the SVG assets so a frontend can discover them.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub show_labels: bool,
    pub show_flows: bool,
    pub plates: Vec<PlateEntry>,
}

impl Manifest {
    pub fn new(view: ViewOptions) -> Self {
        Self {
            show_labels: view.show_labels,
            show_flows: view.show_flows,
            plates: Vec::new(),
        }
    }
}
