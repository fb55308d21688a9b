// Web embedding surface: rendered SVG strings for the host page

use crate::gallery;
use crate::scene::{assemble_torus, assemble_tower};
use crate::svg::render_svg;
use crate::types::{TorusFieldParams, TowerParams, ViewOptions};
use wasm_bindgen::prelude::*;

// Render the torus field plate with the default parameter set.
// Returns a standalone SVG document for direct DOM insertion.
#[wasm_bindgen]
pub fn torus_svg(show_labels: bool, show_flows: bool) -> String {
    let view = ViewOptions {
        show_labels,
        show_flows,
    };
    render_svg(&assemble_torus(&TorusFieldParams::default(), view))
}

// Render the Fresnel tower plate with the default parameter set.
// The flows flag does not affect the tower, so only labels are toggled.
#[wasm_bindgen]
pub fn tower_svg(show_labels: bool) -> String {
    let view = ViewOptions {
        show_labels,
        show_flows: true,
    };
    render_svg(&assemble_tower(&TowerParams::default(), view))
}

// The plate gallery as JSON for the host's card list
#[wasm_bindgen]
pub fn gallery_json() -> String {
    // Static data over derived serializers; this cannot fail
    serde_json::to_string(&gallery::plates()).expect("gallery serializes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_torus_svg_respects_flags() {
        let full = torus_svg(true, true);
        let bare = torus_svg(false, false);

        assert!(full.contains("<polyline"));
        assert!(full.contains("<text"));
        assert!(!bare.contains("<polyline"));
        assert!(!bare.contains("<text"));
    }

    #[test]
    fn test_tower_svg_has_cones() {
        let svg = tower_svg(true);
        assert_eq!(svg.matches("<polygon").count(), 6);
    }

    #[test]
    fn test_gallery_json_is_array() {
        let json = gallery_json();
        assert!(json.starts_with('['));
        assert!(json.contains("v7"));
    }
}
