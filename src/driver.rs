//! Driver spawns and manages the tracking task

use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, trace, warn};

use crate::TrackingError;
use crate::provider::SampleProvider;
use crate::route::WaypointRoute;
use crate::tracker::ProgressTracker;
use crate::types::RouteProgress;

/// Consecutive provider failures tolerated before the task gives up
const MAX_PROVIDER_ERRORS: u32 = 10;

/// Running totals for a tracking task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackingStats {
    /// Samples that produced a progress value
    pub accepted: u64,
    /// Samples rejected for invalid coordinates
    pub rejected: u64,
    /// Whether the task has finished
    pub finished: bool,
}

/// Result of spawning the driver task
pub struct DriverChannels {
    /// Latest accepted progress
    pub progress: watch::Receiver<Option<Arc<RouteProgress>>>,
    /// Sample counters
    pub stats: watch::Receiver<TrackingStats>,
    /// Cancellation token for graceful shutdown
    pub cancel: CancellationToken,
}

/// Driver spawns the task that applies samples to a tracker
///
/// The spawned task owns both the provider and the [`ProgressTracker`], so
/// every sample is applied by a single writer in arrival order.
pub struct Driver;

impl Driver {
    /// Spawn the tracking task for the given route and provider
    pub fn spawn<P>(route: Arc<WaypointRoute>, provider: P) -> DriverChannels
    where
        P: SampleProvider,
    {
        let (progress_tx, progress_rx) = watch::channel(None);
        let (stats_tx, stats_rx) = watch::channel(TrackingStats::default());
        let cancel = CancellationToken::new();

        let cancel_task = cancel.clone();
        tokio::spawn(async move {
            Self::tracking_task(route, provider, progress_tx, stats_tx, cancel_task).await;
        });

        DriverChannels { progress: progress_rx, stats: stats_rx, cancel }
    }

    async fn tracking_task<P>(
        route: Arc<WaypointRoute>,
        mut provider: P,
        progress_tx: watch::Sender<Option<Arc<RouteProgress>>>,
        stats_tx: watch::Sender<TrackingStats>,
        cancel: CancellationToken,
    ) where
        P: SampleProvider,
    {
        info!("Tracking task started for route '{}'", route.name());
        let mut tracker = ProgressTracker::new(route);
        tracker.start();

        let mut stats = TrackingStats::default();
        let mut error_count = 0u32;

        loop {
            let result = tokio::select! {
                _ = cancel.cancelled() => {
                    info!("Tracking task cancelled");
                    break;
                }
                result = provider.next_sample() => result,
            };

            match result {
                Ok(Some(sample)) => {
                    error_count = 0;

                    match tracker.update(sample) {
                        Ok(progress) => {
                            stats.accepted += 1;
                            trace!(
                                "Sample {}: checkpoint {}/{}, {:.1}%",
                                stats.accepted,
                                progress.checkpoint_number(),
                                progress.waypoint_count,
                                progress.progress_percent
                            );

                            if progress_tx.send(Some(Arc::new(progress))).is_err() {
                                debug!("Progress receiver dropped, shutting down");
                                break;
                            }
                        }
                        Err(TrackingError::InvalidCoordinate { latitude, longitude }) => {
                            // Last good progress stays published
                            stats.rejected += 1;
                            warn!("Skipping invalid sample ({}, {})", latitude, longitude);
                        }
                        Err(e) => {
                            error!("Tracker failed: {}", e);
                            break;
                        }
                    }
                    let _ = stats_tx.send(stats);
                }
                Ok(None) => {
                    info!("Sample source ended after {} samples", stats.accepted + stats.rejected);
                    break;
                }
                Err(e) => {
                    error_count += 1;
                    error!("Provider error ({}/{}): {}", error_count, MAX_PROVIDER_ERRORS, e);

                    if error_count >= MAX_PROVIDER_ERRORS {
                        error!("Too many provider errors, shutting down");
                        break;
                    }

                    // Exponential backoff: 100ms, 200ms, 400ms, ...
                    let backoff = std::time::Duration::from_millis(50 * (1 << error_count.min(5)));
                    tokio::select! {
                        _ = cancel.cancelled() => break,
                        _ = tokio::time::sleep(backoff) => {}
                    }
                }
            }
        }

        // Close the source before reporting completion
        drop(provider);
        tracker.stop();
        stats.finished = true;
        let _ = stats_tx.send(stats);

        info!(
            "Tracking task ended ({} accepted, {} rejected)",
            stats.accepted, stats.rejected
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;
    use crate::test_utils::{sample_at, three_waypoint_route};
    use crate::types::LocationSample;
    use std::collections::VecDeque;
    use std::time::Duration;

    /// Scripted provider: yields each entry once, then ends
    struct ScriptedProvider {
        script: VecDeque<Result<LocationSample>>,
    }

    #[async_trait::async_trait]
    impl SampleProvider for ScriptedProvider {
        async fn next_sample(&mut self) -> Result<Option<LocationSample>> {
            match self.script.pop_front() {
                Some(Ok(sample)) => Ok(Some(sample)),
                Some(Err(e)) => Err(e),
                None => Ok(None),
            }
        }

        fn sample_rate_hz(&self) -> f64 {
            1.0
        }
    }

    async fn wait_finished(stats: &mut watch::Receiver<TrackingStats>) -> TrackingStats {
        let finished = tokio::time::timeout(Duration::from_secs(5), stats.wait_for(|s| s.finished))
            .await
            .expect("driver did not finish")
            .expect("stats channel closed");
        *finished
    }

    #[tokio::test]
    async fn invalid_samples_are_skipped_and_last_progress_kept() {
        let provider = ScriptedProvider {
            script: VecDeque::from(vec![
                Ok(sample_at(0.0, 0.045)),
                Ok(sample_at(95.0, 0.0)),
            ]),
        };

        let mut channels = Driver::spawn(Arc::new(three_waypoint_route()), provider);
        let stats = wait_finished(&mut channels.stats).await;

        assert_eq!(stats.accepted, 1);
        assert_eq!(stats.rejected, 1);

        let progress = channels.progress.borrow().clone().expect("progress published");
        assert_eq!(progress.nearest_waypoint_index, 1);
    }

    #[tokio::test]
    async fn provider_errors_are_retried() {
        let provider = ScriptedProvider {
            script: VecDeque::from(vec![
                Err(TrackingError::parse_error("fix", "garbled NMEA sentence")),
                Ok(sample_at(0.0, 0.09)),
            ]),
        };

        let mut channels = Driver::spawn(Arc::new(three_waypoint_route()), provider);
        let stats = wait_finished(&mut channels.stats).await;

        assert_eq!(stats.accepted, 1);
        let progress = channels.progress.borrow().clone().expect("progress published");
        assert_eq!(progress.nearest_waypoint_index, 2);
        assert!(progress.is_complete());
    }

    #[tokio::test]
    async fn cancellation_stops_a_waiting_task() {
        let (_sender, provider) = crate::providers::ChannelProvider::new(1);
        let mut channels = Driver::spawn(Arc::new(three_waypoint_route()), provider);

        channels.cancel.cancel();
        let stats = wait_finished(&mut channels.stats).await;
        assert_eq!(stats.accepted, 0);
        assert!(channels.progress.borrow().is_none());
    }
}
