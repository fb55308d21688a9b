// Static plate gallery: labels and resource paths for the precomputed assets

use serde::Serialize;

// ============================================================================
// GALLERY DATA
// ============================================================================

// One downloadable asset attached to a plate card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlateAsset {
    pub label: &'static str,
    pub href: &'static str,
}

// One plate card in the gallery
//
// The kernel neither reads nor validates the hrefs; they are opaque
// pass-through links owned by whatever host serves the assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plate {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub assets: Vec<PlateAsset>,
}

// The curated plate series, v3 through v7
pub fn plates() -> Vec<Plate> {
    vec![
        Plate {
            title: "v3 · Copper-Etch Base",
            subtitle: "Kupferstich-Grundkarte",
            assets: vec![
                PlateAsset {
                    label: "Preview v3 (PNG)",
                    href: "sandbox:/mnt/data/resonance_field_III_fresnel_epicycles_v3.png",
                },
                PlateAsset {
                    label: "Script v3 (Python)",
                    href: "sandbox:/mnt/data/resonance_field_III_v3.py",
                },
            ],
        },
        Plate {
            title: "v4 · Riemann & Spindel",
            subtitle: "Halo-Skala + Uranus–Neptun-Achse",
            assets: vec![
                PlateAsset {
                    label: "Preview v4 (PNG)",
                    href: "sandbox:/mnt/data/resonance_field_IV_v4.png",
                },
                PlateAsset {
                    label: "Script v4 (Python)",
                    href: "sandbox:/mnt/data/resonance_field_IV_v4.py",
                },
            ],
        },
        Plate {
            title: "v5 · 2↔3 Gegenrotation",
            subtitle: "THoTH-Knoten, Ganymed",
            assets: vec![
                PlateAsset {
                    label: "Preview v5 (PNG)",
                    href: "sandbox:/mnt/data/resonance_field_V_v5.png",
                },
                PlateAsset {
                    label: "Script v5 (Python)",
                    href: "sandbox:/mnt/data/resonance_field_V_v5.py",
                },
            ],
        },
        Plate {
            title: "v6 · Io/φ & Arrokoth",
            subtitle: "Pink Double-Shell & Phi-Knoten",
            assets: vec![
                PlateAsset {
                    label: "Preview v6 (PNG)",
                    href: "sandbox:/mnt/data/resonance_field_VI_v6.png",
                },
                PlateAsset {
                    label: "Script v6 (Python)",
                    href: "sandbox:/mnt/data/resonance_field_VI_v6.py",
                },
            ],
        },
        Plate {
            title: "v7 · 2^n · V–6 · Belts",
            subtitle: "A3-PDF, SVG-Layer, ASCII",
            assets: vec![
                PlateAsset {
                    label: "A3 PDF (Vektor)",
                    href: "sandbox:/mnt/data/resonance_field_VII_v7_A3.pdf",
                },
                PlateAsset {
                    label: "SVG mit Layern",
                    href: "sandbox:/mnt/data/resonance_field_VII_v7_layers.svg",
                },
                PlateAsset {
                    label: "ASCII Schematic",
                    href: "sandbox:/mnt/data/resonance_field_VII_v7_ascii.txt",
                },
                PlateAsset {
                    label: "Script v7 (Python)",
                    href: "sandbox:/mnt/data/resonance_field_VII_v7.py",
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_has_five_plates() {
        let plates = plates();
        assert_eq!(plates.len(), 5);
        // Every card carries at least a preview and a script
        for plate in &plates {
            assert!(plate.assets.len() >= 2);
        }
        // The v7 card also links the layered SVG and ASCII schematic
        assert_eq!(plates[4].assets.len(), 4);
    }

    #[test]
    fn test_gallery_serializes() {
        let json = serde_json::to_string(&plates()).expect("gallery serializes");
        assert!(json.contains("Copper-Etch Base"));
        assert!(json.contains("resonance_field_VII_v7.py"));
    }
}
