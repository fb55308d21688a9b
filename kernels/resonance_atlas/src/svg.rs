// SVG serialization of assembled scenes

use crate::scene::{Element, Scene, TextAnchor};

// ============================================================================
// DOCUMENT RENDERING
// ============================================================================

// Render a scene to a standalone SVG document
//
// Elements are written in scene order, which is paint order. Output is
// deterministic: identical scenes give byte-identical documents.
pub fn render_svg(scene: &Scene) -> String {
    let mut body = String::new();

    for element in &scene.elements {
        match element {
            Element::Ring(ring) => body.push_str(&format!(
                r##"  <ellipse cx="{:.2}" cy="{:.2}" rx="{:.2}" ry="{:.2}" fill="none" stroke="{}" stroke-width="{}" stroke-opacity="{}"/>
"##,
                ring.center.x,
                ring.center.y,
                ring.rx,
                ring.ry,
                ring.stroke.color,
                ring.stroke.width,
                ring.stroke.opacity
            )),
            Element::Line(line) => {
                let points = line
                    .points
                    .iter()
                    .map(|p| format!("{:.2},{:.2}", p.x, p.y))
                    .collect::<Vec<_>>()
                    .join(" ");
                body.push_str(&format!(
                    r##"  <polyline points="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}"/>
"##,
                    points, line.stroke.color, line.stroke.opacity, line.stroke.width
                ));
            }
            Element::Marker(marker) => {
                let stroke = match marker.stroke {
                    Some(s) => format!(r##" stroke="{}" stroke-width="{}""##, s.color, s.width),
                    None => String::new(),
                };
                body.push_str(&format!(
                    r##"  <circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}"{} opacity="{}"/>
"##,
                    marker.center.x, marker.center.y, marker.radius, marker.fill, stroke, marker.opacity
                ));
            }
            Element::Cone(cone) => body.push_str(&format!(
                r##"  <polygon points="{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}" fill="{}" opacity="{:.2}"/>
"##,
                cone.peak.x,
                cone.peak.y,
                cone.base_left.x,
                cone.base_left.y,
                cone.base_right.x,
                cone.base_right.y,
                cone.fill,
                cone.opacity
            )),
            Element::Text(label) => {
                let anchor = match label.align {
                    TextAnchor::Middle => r##" text-anchor="middle""##,
                    TextAnchor::Start => "",
                };
                body.push_str(&format!(
                    r##"  <text x="{:.2}" y="{:.2}"{} font-size="{}" fill="{}">{}</text>
"##,
                    label.anchor.x, label.anchor.y, anchor, label.size, label.color, label.text
                ));
            }
        }
    }

    format!(
        r##"<svg viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">
  <rect x="0" y="0" width="{}" height="{}" fill="{}"/>
{}</svg>
"##,
        scene.width, scene.height, scene.width, scene.height, scene.background, body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{assemble_torus, assemble_tower};
    use crate::types::{TorusFieldParams, TowerParams, ViewOptions};

    #[test]
    fn test_torus_document_structure() {
        let scene = assemble_torus(&TorusFieldParams::default(), ViewOptions::default());
        let svg = render_svg(&scene);

        assert!(svg.starts_with(r#"<svg viewBox="0 0 1000 700""#));
        assert!(svg.ends_with("</svg>\n"));
        // Parchment background
        assert!(svg.contains(r##"fill="#f8f5f0""##));
        // One ellipse per ring outline
        assert_eq!(svg.matches("<ellipse").count(), 3);
        // Field lines + drifts
        assert_eq!(svg.matches("<polyline").count(), 24 + 18);
        assert_eq!(svg.matches("<circle").count(), 12);
        assert_eq!(svg.matches("<text").count(), 4);
    }

    #[test]
    fn test_tower_document_structure() {
        let scene = assemble_tower(&TowerParams::default(), ViewOptions::default());
        let svg = render_svg(&scene);

        assert!(svg.starts_with(r#"<svg viewBox="0 0 1000 900""#));
        assert_eq!(svg.matches("<polygon").count(), 6);
        // 6 rim lines
        assert_eq!(svg.matches("<polyline").count(), 6);
        // 12 lights + 12 moons
        assert_eq!(svg.matches("<circle").count(), 24);
        // 6 cadence tags + caption
        assert_eq!(svg.matches("<text").count(), 7);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let scene = assemble_torus(&TorusFieldParams::default(), ViewOptions::default());
        assert_eq!(render_svg(&scene), render_svg(&scene));
    }

    #[test]
    fn test_flows_off_renders_no_polylines() {
        let view = ViewOptions {
            show_labels: true,
            show_flows: false,
        };
        let svg = render_svg(&assemble_torus(&TorusFieldParams::default(), view));
        assert_eq!(svg.matches("<polyline").count(), 0);
    }

    #[test]
    fn test_marker_stroke_is_optional() {
        let scene = assemble_tower(&TowerParams::default(), ViewOptions::default());
        let svg = render_svg(&scene);

        // Lights carry a bronze stroke, moons render without one
        assert!(svg.contains(r##"fill="#fde68a" stroke="#b45309""##));
        assert!(svg.contains(r##"fill="#60a5fa" opacity="0.7""##));
    }
}
