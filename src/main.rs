mod settings;

use std::io::{self, Write};

use anyhow::Context;
use tracing::{debug, info, warn};
use tracing_subscriber::{self, EnvFilter};

use tile_geometry::{GridSampler, Point, Polygon, TracingObserver};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| settings::DEFAULT_CONFIG_PATH.to_string());
    info!(path = %path, "Tile layout started");

    let settings = settings::load_settings(&path)?;
    let sampler = settings.layout.sampler()?;
    let outline = settings.layout.outline()?;
    debug!(?sampler, vertices = outline.len(), "Layout settings validated");

    let anchors = run(&sampler, &outline);
    report(&anchors).context("Failed to write anchors to stdout")?;

    info!("Tile layout finished.");
    Ok(())
}

fn run(sampler: &GridSampler, outline: &Polygon) -> Vec<Point> {
    if let Some(bounds) = outline.bounding_box() {
        info!(
            %bounds,
            width = bounds.width(),
            height = bounds.height(),
            tile_size = sampler.tile_size().get(),
            fit = ?sampler.fit(),
            orientation = ?sampler.orientation_rule(),
            "Sampling outline"
        );
    }

    let anchors = sampler.generate_points_observed(outline.vertices(), &mut TracingObserver);
    if anchors.is_empty() {
        warn!("No tile fits inside the outline. Check the tile size against the outline extent.");
    } else {
        info!(count = anchors.len(), "Tile anchors generated");
    }
    anchors
}

fn report(anchors: &[Point]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for anchor in anchors {
        writeln!(out, "{},{}", anchor.x, anchor.y)?;
    }
    out.flush()
}
