/// Diagnostic tool to verify the scan → tree → layout pipeline
use std::path::PathBuf;
use std::sync::mpsc;

use treemap_placer::layout::{place, PlacerConfig, Rect};
use treemap_placer::scanner;
use treemap_placer::tree::{self, TreeConfig};

const CANVAS_W: f64 = 1920.0;
const CANVAS_H: f64 = 1080.0;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("treemap_placer=debug".parse()?),
        )
        .init();

    let scan_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    println!("=== DIAGNOSTIC: Tree → Layout Pipeline ===");
    println!("Scanning: {}", scan_path.display());

    // Scan
    let (tx, rx) = mpsc::channel();
    let entries = scanner::scan(&scan_path, tx)?;
    let scan_errors = scanner::drain_progress(&rx);
    println!(
        "\n[1] Scan completed: {} entries, {} unreadable",
        entries.len(),
        scan_errors
    );

    // Build tree
    let tree_config = TreeConfig::default();
    let folders = tree::build_tree(&entries, &scan_path, &tree_config);
    let base = tree::base_folder(&folders);
    let base_folder = folders.get(base);
    println!(
        "\n[2] Tree built: {} folders, {} files; base '{}' ({:.2} GB)",
        folders.folder_count(),
        folders.file_count(),
        base_folder.path.display(),
        base_folder.size as f64 / 1_073_741_824.0
    );

    let inputs = tree::layout_inputs(&folders, &tree_config);
    let node_count: usize = inputs.iter().map(|n| n.count()).sum();
    println!("    Layout input: {} top-level nodes, {} total", inputs.len(), node_count);

    // Compute layout, with and without container decoration
    let plain = place(&inputs, CANVAS_W, CANVAS_H, &PlacerConfig::default())?;
    let decorated_config = PlacerConfig {
        render_containers: true,
        ..PlacerConfig::default()
    };
    let decorated = place(&inputs, CANVAS_W, CANVAS_H, &decorated_config)?;
    let container_count = decorated.iter().filter(|b| b.is_container).count();
    println!(
        "\n[3] Layout computed: {} boxes plain, {} boxes with {} containers",
        plain.len(),
        decorated.len(),
        container_count
    );

    // Show top 10 largest rectangles
    println!("\n[4] Top 10 largest boxes by area:");
    let mut sorted = plain.clone();
    sorted.sort_by(|a, b| b.rect.area().total_cmp(&a.rect.area()));
    for (i, b) in sorted.iter().take(10).enumerate() {
        println!(
            "    [{}] '{}' - rect: {:.1}x{:.1} ({:.0}px²) at ({:.1}, {:.1}) - depth {}",
            i,
            b.label,
            b.rect.w,
            b.rect.h,
            b.rect.area(),
            b.rect.x,
            b.rect.y,
            b.depth
        );
    }

    // Check for anomalies
    println!("\n[5] Checking for anomalies:");
    let canvas = Rect::new(0.0, 0.0, CANVAS_W, CANVAS_H);
    let area_sum: f64 = plain.iter().map(|b| b.rect.area()).sum();
    println!("    Total box area: {:.0}px²", area_sum);
    println!("    Canvas area:    {:.0}px²", canvas.area());
    println!("    Coverage: {:.3}%", area_sum / canvas.area() * 100.0);

    let out_of_bounds = plain
        .iter()
        .filter(|b| !canvas.contains_rect(&b.rect, 1e-6))
        .count();
    let degenerate = plain.iter().filter(|b| !b.rect.is_non_degenerate()).count();
    println!("    Out of bounds: {}", out_of_bounds);
    println!("    Degenerate:    {}", degenerate);

    let mut worst_aspect = 1.0f64;
    for b in &plain {
        let aspect = (b.rect.w / b.rect.h).max(b.rect.h / b.rect.w);
        worst_aspect = worst_aspect.max(aspect);
    }
    println!("    Worst aspect ratio: {:.2}", worst_aspect);

    Ok(())
}
