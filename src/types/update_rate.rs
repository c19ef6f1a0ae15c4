//! Update rate control for progress subscriptions

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How often a subscriber wants progress updates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum UpdateRate {
    /// Every accepted sample
    Native,

    /// At most this many updates per second.
    /// Rates at or above the sample rate collapse to Native.
    Max(u32),
}

impl UpdateRate {
    /// Resolve the requested rate against the provider's sample rate
    pub fn normalize(self, sample_hz: f64) -> Self {
        match self {
            UpdateRate::Native => UpdateRate::Native,
            UpdateRate::Max(0) => UpdateRate::Native,
            UpdateRate::Max(hz) if hz as f64 >= sample_hz => UpdateRate::Native,
            UpdateRate::Max(hz) => UpdateRate::Max(hz),
        }
    }

    /// Minimum spacing between updates, if throttling applies
    pub fn throttle_interval(self, sample_hz: f64) -> Option<Duration> {
        match self.normalize(sample_hz) {
            UpdateRate::Native => None,
            UpdateRate::Max(hz) => Some(Duration::from_secs_f64(1.0 / hz as f64)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_request_collapses_to_native() {
        assert_eq!(UpdateRate::Max(5).normalize(1.0), UpdateRate::Native);
        assert_eq!(UpdateRate::Max(1).normalize(1.0), UpdateRate::Native);
        assert_eq!(UpdateRate::Max(0).normalize(10.0), UpdateRate::Native);
    }

    #[test]
    fn slow_request_throttles() {
        assert_eq!(UpdateRate::Max(2).normalize(10.0), UpdateRate::Max(2));
        assert_eq!(
            UpdateRate::Max(4).throttle_interval(10.0),
            Some(Duration::from_millis(250))
        );
        assert_eq!(UpdateRate::Native.throttle_interval(10.0), None);
    }
}
