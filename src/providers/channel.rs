//! Push-style provider fed by the device positioning layer

use tokio::sync::mpsc;
use tracing::debug;

use crate::provider::SampleProvider;
use crate::types::LocationSample;
use crate::{Result, TrackingError};

/// Default number of samples buffered between the device and the driver
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Handle used by the positioning layer to push samples into a session
#[derive(Debug, Clone)]
pub struct SampleSender {
    tx: mpsc::Sender<LocationSample>,
}

impl SampleSender {
    /// Push a sample, waiting for buffer space if the tracker is behind.
    ///
    /// Fails with [`TrackingError::SessionClosed`] once the session has stopped.
    pub async fn send(&self, sample: LocationSample) -> Result<()> {
        self.tx.send(sample).await.map_err(|_| TrackingError::SessionClosed)
    }

    /// Push a sample without waiting; usable from a synchronous location callback.
    ///
    /// A full buffer drops the sample rather than blocking the caller.
    pub fn try_send(&self, sample: LocationSample) -> Result<bool> {
        match self.tx.try_send(sample) {
            Ok(()) => Ok(true),
            Err(mpsc::error::TrySendError::Full(_)) => {
                debug!("Sample buffer full, dropping fix");
                Ok(false)
            }
            Err(mpsc::error::TrySendError::Closed(_)) => Err(TrackingError::SessionClosed),
        }
    }

    /// Whether the receiving session has gone away
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Provider that yields samples pushed through a [`SampleSender`]
///
/// The source ends when every sender has been dropped.
pub struct ChannelProvider {
    rx: mpsc::Receiver<LocationSample>,
    sample_rate_hz: f64,
}

impl ChannelProvider {
    /// Create a connected sender/provider pair
    pub fn new(capacity: usize) -> (SampleSender, Self) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (SampleSender { tx }, Self { rx, sample_rate_hz: 1.0 })
    }

    /// Declare how often the device delivers fixes (defaults to 1 Hz)
    pub fn with_sample_rate(mut self, hz: f64) -> Self {
        if hz.is_finite() && hz > 0.0 {
            self.sample_rate_hz = hz;
        }
        self
    }
}

#[async_trait::async_trait]
impl SampleProvider for ChannelProvider {
    async fn next_sample(&mut self) -> Result<Option<LocationSample>> {
        Ok(self.rx.recv().await)
    }

    fn sample_rate_hz(&self) -> f64 {
        self.sample_rate_hz
    }
}
