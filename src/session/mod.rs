//! Tracking sessions
//!
//! A [`TrackingSession`] is the handle to a running [`Driver`] task. It owns the
//! receiving side of the progress channel and the cancellation token; dropping
//! it stops the task.

use futures::{Stream, StreamExt};
use std::sync::Arc;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::driver::{Driver, TrackingStats};
use crate::provider::SampleProvider;
use crate::route::WaypointRoute;
use crate::stream::ThrottleExt;
use crate::types::{RouteProgress, UpdateRate};


/// Handle to one walker's live progress tracking
pub struct TrackingSession {
    /// Progress watch receiver
    progress: watch::Receiver<Option<Arc<RouteProgress>>>,

    /// Sample counters
    stats: watch::Receiver<TrackingStats>,

    route: Arc<WaypointRoute>,

    /// Provider sample rate
    sample_hz: f64,

    /// Cancellation token for stopping the task
    cancel: CancellationToken,
}

impl TrackingSession {
    /// Start tracking samples from `provider` against `route`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<P>(route: Arc<WaypointRoute>, provider: P) -> Self
    where
        P: SampleProvider,
    {
        let sample_hz = provider.sample_rate_hz();
        let channels = Driver::spawn(Arc::clone(&route), provider);

        info!("Tracking session started on '{}' ({}Hz)", route.name(), sample_hz);

        Self {
            progress: channels.progress,
            stats: channels.stats,
            route,
            sample_hz,
            cancel: channels.cancel,
        }
    }

    /// Subscribe to progress updates.
    ///
    /// The stream yields the current progress (if any) immediately, then every
    /// new value, and ends when the session stops or its source runs dry.
    pub fn subscribe(&self, rate: UpdateRate) -> impl Stream<Item = Arc<RouteProgress>> + 'static {
        let updates = WatchStream::new(self.progress.clone()).filter_map(|opt| async move { opt });

        match rate.throttle_interval(self.sample_hz) {
            None => updates.boxed(),
            Some(period) => updates.throttle(period).boxed(),
        }
    }

    /// Most recent accepted progress
    pub fn current_progress(&self) -> Option<Arc<RouteProgress>> {
        self.progress.borrow().clone()
    }

    /// Sample counters so far
    pub fn stats(&self) -> TrackingStats {
        *self.stats.borrow()
    }

    /// Wait until the sample source ends or the session is stopped
    pub async fn finished(&self) -> TrackingStats {
        let mut stats = self.stats.clone();
        if stats.wait_for(|s| s.finished).await.is_err() {
            debug!("Tracking task ended without a final report");
        }
        let last = *stats.borrow();
        last
    }

    pub fn route(&self) -> &Arc<WaypointRoute> {
        &self.route
    }

    pub fn sample_hz(&self) -> f64 {
        self.sample_hz
    }

    /// Stop accepting samples. The last progress value stays readable.
    pub fn stop(&self) {
        debug!("Stopping tracking session");
        self.cancel.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.cancel.is_cancelled() || self.stats.borrow().finished
    }
}

impl Drop for TrackingSession {
    fn drop(&mut self) {
        debug!("Dropping tracking session");
        self.cancel.cancel();
    }
}
