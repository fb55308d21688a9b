// Resonance Atlas Plate Generator CLI
//
// This binary renders the torus field and Fresnel tower plates to SVG, plus
// a manifest and the gallery index, so a static site can serve them without
// running any geometry code itself.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

use resonance_atlas::*;

/// CLI arguments for the plate generator
#[derive(Parser, Debug)]
#[command(name = "generate")]
#[command(about = "Generate resonance atlas SVG plates and manifest", long_about = None)]
struct Args {
    /// Diagram to generate ("torus", "tower", "both")
    #[arg(short, long, default_value = "both")]
    diagram: String,

    /// Output directory for generated assets
    #[arg(short, long, default_value = "public/atlas")]
    output: PathBuf,

    /// Omit text labels from the plates
    #[arg(long, default_value_t = false)]
    no_labels: bool,

    /// Omit field lines and drift segments from the torus plate
    #[arg(long, default_value_t = false)]
    no_flows: bool,

    /// Also export full scene geometry as JSON (for inspection/analysis)
    #[arg(long, default_value_t = false)]
    export_scene: bool,
}

/// Which plates to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DiagramChoice {
    Torus,
    Tower,
    Both,
}

impl DiagramChoice {
    fn includes_torus(self) -> bool {
        matches!(self, Self::Torus | Self::Both)
    }

    fn includes_tower(self) -> bool {
        matches!(self, Self::Tower | Self::Both)
    }
}

/// Parse the diagram choice from the CLI string
fn parse_diagram(diagram: &str) -> Result<DiagramChoice, String> {
    match diagram {
        "torus" => Ok(DiagramChoice::Torus),
        "tower" => Ok(DiagramChoice::Tower),
        "both" => Ok(DiagramChoice::Both),
        _ => Err(format!(
            "Invalid diagram: '{}'. Must be one of: torus, tower, both",
            diagram
        )),
    }
}

/// Write one plate: SVG, optional scene JSON, returning its manifest entry
fn write_plate(
    name: &str,
    scene: &Scene,
    output_dir: &Path,
    export_scene: bool,
) -> std::io::Result<PlateEntry> {
    let svg = render_svg(scene);
    let svg_path = output_dir.join(format!("{}.svg", name));
    fs::write(&svg_path, &svg)?;
    println!(
        "  ✓ Wrote {}: {} ({:.1} KB)",
        name,
        svg_path.display(),
        svg.len() as f64 / 1_000.0
    );

    if export_scene {
        let json = serde_json::to_string_pretty(scene)?;
        let json_path = output_dir.join(format!("{}.json", name));
        fs::write(&json_path, &json)?;
        println!(
            "  ✓ Wrote {} scene geometry: {} ({:.1} KB)",
            name,
            json_path.display(),
            json.len() as f64 / 1_000.0
        );
    }

    Ok(PlateEntry::new(name, scene))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args = Args::parse();

    let choice = parse_diagram(&args.diagram).map_err(|e| e.to_string())?;

    let view = ViewOptions {
        show_labels: !args.no_labels,
        show_flows: !args.no_flows,
    };

    // Print configuration
    println!("\nResonance Atlas Plate Generator");
    println!("=======================================");
    println!("  Build: {} ({})", env!("BUILD_GIT_SHA"), env!("BUILD_RUSTC_VERSION"));
    println!("  Diagram: {}", args.diagram);
    println!("  Labels: {}", view.show_labels);
    println!("  Flows: {}", view.show_flows);
    println!("  Export scene geometry: {}", args.export_scene);
    println!("=======================================\n");

    // Build scenes, render, audit, write
    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("█▓▒░ "),
    );

    pb.set_message("Building scenes...");
    let atlas = build(&AtlasParams::default(), view);
    pb.inc(1);

    pb.set_message("Auditing geometry...");
    let torus_audit = audit(&atlas.torus);
    let tower_audit = audit(&atlas.tower);
    if !torus_audit.all_finite || !tower_audit.all_finite {
        return Err("scene audit found non-finite coordinates".into());
    }
    pb.inc(1);

    pb.set_message("Writing plates...");
    fs::create_dir_all(&args.output)?;
    let mut manifest = Manifest::new(view);
    println!();
    if choice.includes_torus() {
        manifest.plates.push(write_plate(
            "torus_field",
            &atlas.torus,
            &args.output,
            args.export_scene,
        )?);
    }
    if choice.includes_tower() {
        manifest.plates.push(write_plate(
            "fresnel_tower",
            &atlas.tower,
            &args.output,
            args.export_scene,
        )?);
    }
    pb.inc(1);

    pb.set_message("Writing manifest and gallery...");
    let manifest_path = args.output.join("manifest.json");
    fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;
    println!("  ✓ Wrote manifest: {}", manifest_path.display());

    let gallery_path = args.output.join("gallery.json");
    fs::write(&gallery_path, serde_json::to_string_pretty(&plates())?)?;
    println!("  ✓ Wrote gallery index: {}", gallery_path.display());
    pb.inc(1);

    pb.finish_with_message("✓ Generation complete");

    // Print statistics
    println!("\n📊 Statistics:");
    if choice.includes_torus() {
        println!("  Torus: {}", torus_audit.report());
    }
    if choice.includes_tower() {
        println!("  Tower: {}", tower_audit.report());
    }

    println!("\n✨ Generation complete!");
    println!("📁 Output: {}\n", args.output.display());

    Ok(())
}
