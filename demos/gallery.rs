//! Walks every sample footprint and reports its mortar-slice layout.
//!
//! ```text
//! cargo run --example gallery
//! RUST_LOG=brickwork=debug cargo run --example gallery   # include skip events
//! ```

use brickwork::{samples, BrickInfo, BrickWall, Result};
use tracing::info;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for brickwork.
    // Override with RUST_LOG env var (e.g. RUST_LOG=brickwork=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("gallery=info".parse().unwrap_or_default())
        .add_directive("brickwork=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let brick = BrickInfo::new(1.0, 0.75, 1.0 / 20.0)?;

    for (name, points) in samples::all() {
        for winding in [false, true] {
            let wall = BrickWall::new(points.clone(), winding, brick);
            let slices = wall.mortar_slices()?;
            info!(
                sample = name,
                winding,
                vertices = points.len(),
                slices = slices.len(),
                "coursed sample footprint"
            );
        }
    }

    Ok(())
}
