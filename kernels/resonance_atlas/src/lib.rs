// Resonance Atlas Diagram Kernel
//
// This library generates the two decorative vector plates of the resonance
// field atlas (the torus field and the Fresnel tower) from small numeric
// parameter sets. All computation is pure and deterministic: a parameter set
// plus two visibility flags fully determines the scene, every coordinate is
// a finite f64, and scenes are rebuilt fresh on each call.

pub mod gallery;
pub mod projection;
pub mod scene;
pub mod svg;
pub mod torus_field;
pub mod tower_stack;
pub mod types;
pub mod validation;
pub mod wasm;

pub use gallery::{plates, Plate, PlateAsset};
pub use scene::{
    assemble_torus, assemble_tower, build, Atlas, ConeSegment, Element, Label, Manifest,
    MarkerPoint, PlateEntry, Polyline, RingOutline, Scene, Stroke, TextAnchor,
};
pub use svg::render_svg;
pub use types::{
    AtlasParams, Point, TorusFieldParams, TowerParams, ViewOptions, CROWN_LIGHTS, TOWER_SEGMENTS,
};
pub use validation::{audit, SceneAudit};
