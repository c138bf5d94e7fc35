use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::{Context, Result};

use treemap_placer::layout::{PlacerConfig, TreeMapPlacer};
use treemap_placer::scanner;
use treemap_placer::tree::{self, TreeConfig};

/// Usage: treemap-placer [--containers] [path] [width] [height]
struct Args {
    scan_path: PathBuf,
    width: f64,
    height: f64,
    render_containers: bool,
}

fn parse_args() -> Result<Args> {
    let mut render_containers = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--containers" {
            render_containers = true;
        } else {
            positional.push(arg);
        }
    }

    let mut positional = positional.into_iter();
    let scan_path = positional
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let width = match positional.next() {
        Some(w) => w.parse::<f64>().with_context(|| format!("invalid width '{w}'"))?,
        None => 1920.0,
    };
    let height = match positional.next() {
        Some(h) => h.parse::<f64>().with_context(|| format!("invalid height '{h}'"))?,
        None => 1080.0,
    };

    Ok(Args {
        scan_path,
        width,
        height,
        render_containers,
    })
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("treemap_placer=info".parse()?),
        )
        .init();

    let args = parse_args()?;
    tracing::info!(
        "treemap-placer starting, scan path: {:?}, canvas {}x{}",
        args.scan_path,
        args.width,
        args.height
    );

    let (tx, rx) = mpsc::channel();
    let entries = scanner::scan(&args.scan_path, tx)
        .with_context(|| format!("scanning {}", args.scan_path.display()))?;
    scanner::drain_progress(&rx);

    let tree_config = TreeConfig::default();
    let folders = tree::build_tree(&entries, &args.scan_path, &tree_config);
    let inputs = tree::layout_inputs(&folders, &tree_config);

    let mut placer = TreeMapPlacer::new(PlacerConfig::default());
    placer.set_render_containers(args.render_containers);
    let boxes = placer
        .place(&inputs, args.width, args.height)
        .context("laying out scan results")?;

    for b in &boxes {
        let kind = if b.is_container { "container" } else { "leaf" };
        println!(
            "{:.2}\t{:.2}\t{:.2}\t{:.2}\t{}\t{}\t{}",
            b.rect.x,
            b.rect.y,
            b.rect.w,
            b.rect.h,
            b.depth,
            kind,
            b.item.hover_text()
        );
    }

    Ok(())
}
