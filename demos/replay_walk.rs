//! Replay a recorded walk and print progress as it changes.
//!
//! ```text
//! cargo run --example replay_walk -- test-data/walks/full_circuit.yaml [route.yaml] [speed]
//! ```
//!
//! Without a route file the built-in Girivalam circuit is used.

use anyhow::{Context, Result, ensure};
use futures::StreamExt;
use girivalam::{ReplayProvider, TrackingSession, UpdateRate, WaypointRoute};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let walk_path = args.next().context("usage: replay_walk <walk.yaml> [route.yaml] [speed]")?;

    let route = match args.next() {
        Some(path) => WaypointRoute::load(&path).with_context(|| format!("loading route {}", path))?,
        None => WaypointRoute::girivalam()?,
    };
    let speed: f64 = match args.next() {
        Some(raw) => raw.parse().with_context(|| format!("invalid speed '{}'", raw))?,
        None => 1.0,
    };
    ensure!(speed.is_finite() && speed > 0.0, "speed must be a positive number, got {}", speed);

    let provider = ReplayProvider::new(&walk_path)
        .with_context(|| format!("opening walk {}", walk_path))?
        .with_speed(speed);
    let session = TrackingSession::start(Arc::new(route), provider);
    let route = Arc::clone(session.route());

    let mut updates = session.subscribe(UpdateRate::Native);
    let mut last_checkpoint = None;
    while let Some(progress) = updates.next().await {
        if last_checkpoint == Some(progress.nearest_waypoint_index) {
            continue;
        }
        last_checkpoint = Some(progress.nearest_waypoint_index);

        let waypoint = route.waypoint_at(progress.nearest_waypoint_index)?;
        println!(
            "[{}/{}] {:<16} {:>5.1}%  {:>5.2} km done, {:>5.2} km left{}",
            progress.checkpoint_number(),
            progress.waypoint_count,
            waypoint.display_name(false),
            progress.progress_percent,
            progress.completed_distance_km,
            progress.remaining_distance_km,
            progress
                .estimated_remaining_minutes
                .map(|m| format!(", ~{:.0} min", m))
                .unwrap_or_default(),
        );
    }

    let stats = session.finished().await;
    info!("Replay finished: {} accepted, {} rejected", stats.accepted, stats.rejected);
    Ok(())
}
