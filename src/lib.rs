//! Route-progress tracking for the Girivalam pilgrimage circuit.
//!
//! Girivalam turns a stream of device position fixes into progress along the
//! 14 km walk around Arunachala: which of the eight lingam shrines the walker
//! is nearest, how far they have come and how much remains.
//!
//! # Features
//!
//! - **Route model**: validated, ordered waypoints loaded from YAML or the
//!   built-in circuit
//! - **Progress tracker**: a small Idle/Tracking state machine that maps one
//!   sample to one [`RouteProgress`]
//! - **Sessions**: a background task that feeds samples from any
//!   [`SampleProvider`] into a tracker and publishes progress to subscribers
//! - **Replay**: recorded walks play back at their original rate for testing
//!   and demos
//!
//! ## Example (push samples from a device)
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use futures::StreamExt;
//! use girivalam::{Girivalam, LocationSample, UpdateRate, WaypointRoute};
//!
//! #[tokio::main]
//! async fn main() -> girivalam::Result<()> {
//!     let route = Arc::new(WaypointRoute::girivalam()?);
//!     let (session, sender) = Girivalam::channel(route);
//!     let mut progress = session.subscribe(UpdateRate::Native);
//!
//!     sender.send(LocationSample::now(12.2150, 79.0750)).await?;
//!
//!     if let Some(p) = progress.next().await {
//!         println!("Checkpoint {} of {}, {:.0}%", p.checkpoint_number(), p.waypoint_count, p.progress_percent);
//!     }
//!     Ok(())
//! }
//! ```

// Core types and error handling
mod error;
pub mod geo;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

// Route model and progress computation
pub mod route;
pub mod tracker;

// Stream-based tracking architecture
pub mod driver;
pub mod provider;
pub mod providers;
pub mod session;
pub mod stream;

// Core exports
pub use error::*;
pub use geo::GeoPoint;
pub use types::*;

pub use route::{RouteConfig, WaypointRoute};
pub use tracker::{ProgressTracker, TrackerState};

// Main API exports
pub use driver::TrackingStats;
pub use provider::SampleProvider;
pub use providers::{ChannelProvider, RecordedWalk, ReplayProvider, SampleSender};
pub use session::TrackingSession;

use std::path::Path;
use std::sync::Arc;

/// Unified entry point for starting tracking sessions.
///
/// Every constructor spawns the tracking task, so it must be called from
/// within a tokio runtime.
///
/// # Examples
///
/// ## Recorded walk
/// ```rust,no_run
/// use std::sync::Arc;
/// use girivalam::{Girivalam, WaypointRoute};
///
/// #[tokio::main]
/// async fn main() -> girivalam::Result<()> {
///     let route = Arc::new(WaypointRoute::girivalam()?);
///     let session = Girivalam::replay(route, "walk.yaml")?;
///     let stats = session.finished().await;
///     println!("{} samples accepted", stats.accepted);
///     Ok(())
/// }
/// ```
pub struct Girivalam;

impl Girivalam {
    /// Track samples from any provider.
    pub fn track<P>(route: Arc<WaypointRoute>, provider: P) -> TrackingSession
    where
        P: SampleProvider,
    {
        TrackingSession::start(route, provider)
    }

    /// Replay a recorded walk file against `route`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid walk, or
    /// declares a non-positive sample rate.
    pub fn replay<P: AsRef<Path>>(route: Arc<WaypointRoute>, path: P) -> Result<TrackingSession> {
        let provider = ReplayProvider::new(path)?;
        Ok(TrackingSession::start(route, provider))
    }

    /// Start a session fed by pushed samples.
    ///
    /// The session ends once every [`SampleSender`] clone is dropped or the
    /// session is stopped.
    pub fn channel(route: Arc<WaypointRoute>) -> (TrackingSession, SampleSender) {
        let (sender, provider) = ChannelProvider::new(providers::DEFAULT_CHANNEL_CAPACITY);
        (TrackingSession::start(route, provider), sender)
    }
}
