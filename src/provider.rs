//! Provider trait for location sources

use crate::Result;
use crate::types::LocationSample;

/// Source of location samples
///
/// Providers abstract over where fixes come from (a device pushing through a
/// channel, a recorded walk) and handle their own pacing. The tracker never
/// polls or schedules sample acquisition itself.
#[async_trait::async_trait]
pub trait SampleProvider: Send + 'static {
    /// Get the next location sample
    ///
    /// Returns:
    /// - `Ok(Some(sample))` - New sample available
    /// - `Ok(None)` - Source ended (normal termination)
    /// - `Err(e)` - Acquisition failed; the driver retries with backoff
    async fn next_sample(&mut self) -> Result<Option<LocationSample>>;

    /// Expected sample rate in Hz, used to normalize subscriber update rates
    fn sample_rate_hz(&self) -> f64;
}
