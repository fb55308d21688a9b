// Scene auditing and invariant checking

use crate::scene::{Element, Scene};
use crate::types::Point;

// ============================================================================
// SCENE AUDIT
// ============================================================================

// Summary of a built scene: element counts, coordinate extents, finiteness
//
// A non-finite coordinate is an implementation bug in a generator, never a
// runtime condition to recover from; the audit exists so tests and the CLI
// can surface one immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneAudit {
    pub rings: usize,
    pub lines: usize,
    pub markers: usize,
    pub cones: usize,
    pub labels: usize,
    pub points: usize,
    pub all_finite: bool,
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl SceneAudit {
    pub fn element_count(&self) -> usize {
        self.rings + self.lines + self.markers + self.cones + self.labels
    }

    pub fn report(&self) -> String {
        format!(
            "Scene audit: {} elements ({} rings, {} lines, {} markers, {} cones, {} labels), {} points, x [{:.1}, {:.1}], y [{:.1}, {:.1}], finite={}",
            self.element_count(),
            self.rings,
            self.lines,
            self.markers,
            self.cones,
            self.labels,
            self.points,
            self.min_x,
            self.max_x,
            self.min_y,
            self.max_y,
            self.all_finite
        )
    }
}

// Walk every coordinate of every element in a scene
fn each_point(scene: &Scene, mut visit: impl FnMut(Point)) {
    for element in &scene.elements {
        match element {
            Element::Ring(ring) => visit(ring.center),
            Element::Line(line) => {
                for &p in &line.points {
                    visit(p);
                }
            }
            Element::Marker(marker) => visit(marker.center),
            Element::Cone(cone) => {
                visit(cone.peak);
                visit(cone.base_left);
                visit(cone.base_right);
            }
            Element::Text(label) => visit(label.anchor),
        }
    }
}

// Audit a built scene
pub fn audit(scene: &Scene) -> SceneAudit {
    let mut out = SceneAudit {
        all_finite: true,
        min_x: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        min_y: f64::INFINITY,
        max_y: f64::NEG_INFINITY,
        ..SceneAudit::default()
    };

    for element in &scene.elements {
        match element {
            Element::Ring(_) => out.rings += 1,
            Element::Line(_) => out.lines += 1,
            Element::Marker(_) => out.markers += 1,
            Element::Cone(_) => out.cones += 1,
            Element::Text(_) => out.labels += 1,
        }
    }

    each_point(scene, |p| {
        out.points += 1;
        if !p.is_finite() {
            out.all_finite = false;
        }
        out.min_x = out.min_x.min(p.x);
        out.max_x = out.max_x.max(p.x);
        out.min_y = out.min_y.min(p.y);
        out.max_y = out.max_y.max(p.y);
    });

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{assemble_torus, assemble_tower};
    use crate::types::{TorusFieldParams, TowerParams, ViewOptions};

    #[test]
    fn test_torus_audit_counts() {
        let scene = assemble_torus(&TorusFieldParams::default(), ViewOptions::default());
        let audit = audit(&scene);

        assert_eq!(audit.rings, 3);
        assert_eq!(audit.lines, 24 + 18);
        assert_eq!(audit.markers, 12);
        assert_eq!(audit.labels, 4);
        assert_eq!(audit.element_count(), scene.elements.len());
        assert!(audit.all_finite);
    }

    #[test]
    fn test_tower_audit_counts() {
        let scene = assemble_tower(&TowerParams::default(), ViewOptions::default());
        let audit = audit(&scene);

        assert_eq!(audit.cones, 6);
        assert_eq!(audit.lines, 6);
        assert_eq!(audit.markers, 24);
        assert_eq!(audit.labels, 7);
        assert!(audit.all_finite);
    }

    #[test]
    fn test_extents_stay_on_canvas() {
        let scene = assemble_torus(&TorusFieldParams::default(), ViewOptions::default());
        let audit = audit(&scene);

        assert!(audit.min_x >= 0.0);
        assert!(audit.max_x <= 1000.0);
        assert!(audit.min_y >= 0.0);
        assert!(audit.max_y <= 700.0);
    }

    #[test]
    fn test_report_mentions_counts() {
        let scene = assemble_tower(&TowerParams::default(), ViewOptions::default());
        let report = audit(&scene).report();

        assert!(report.contains("6 cones"));
        assert!(report.contains("finite=true"));
    }
}
