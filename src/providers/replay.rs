//! Replay provider for recorded walks
//!
//! A recorded walk is a YAML file of location samples:
//!
//! ```yaml
//! sample_rate_hz: 1.0
//! samples:
//!   - position: { latitude: 12.2300, longitude: 79.0800 }
//!     captured_at: 2025-01-13T22:00:00Z
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::time::{Duration, Interval, MissedTickBehavior, interval};
use tracing::{debug, info, trace};

use crate::provider::SampleProvider;
use crate::types::LocationSample;
use crate::{Result, TrackingError};

/// Playback speed bounds
const MIN_SPEED: f64 = 0.1;
const MAX_SPEED: f64 = 100.0;

fn default_sample_rate() -> f64 {
    1.0
}

/// Time between samples at the given rate and speed
fn pacing_period(sample_rate_hz: f64, speed: f64) -> Result<Duration> {
    let period = Duration::try_from_secs_f64(1.0 / (sample_rate_hz * speed)).map_err(|e| {
        TrackingError::parse_error(
            "RecordedWalk",
            format!("sample rate {}Hz at {}x has no usable period: {}", sample_rate_hz, speed, e),
        )
    })?;

    if period.is_zero() {
        return Err(TrackingError::parse_error(
            "RecordedWalk",
            format!("sample rate {}Hz at {}x is too fast to pace", sample_rate_hz, speed),
        ));
    }
    Ok(period)
}

/// A sequence of samples captured during a walk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedWalk {
    /// Rate at which the samples were captured
    #[serde(default = "default_sample_rate")]
    pub sample_rate_hz: f64,
    pub samples: Vec<LocationSample>,
}

impl RecordedWalk {
    pub fn new(samples: Vec<LocationSample>) -> Self {
        Self { sample_rate_hz: default_sample_rate(), samples }
    }

    /// Parse a recorded walk from YAML text
    pub fn parse(yaml: &str) -> Result<Self> {
        let walk: Self = serde_yaml_ng::from_str(yaml)
            .map_err(|e| TrackingError::parse_error("RecordedWalk deserialization", e.to_string()))?;
        walk.validate()?;
        Ok(walk)
    }

    /// Check that the sample rate can be paced at every playback speed
    pub fn validate(&self) -> Result<()> {
        if !self.sample_rate_hz.is_finite() || self.sample_rate_hz <= 0.0 {
            return Err(TrackingError::parse_error(
                "RecordedWalk",
                format!("sample rate must be positive, got {}", self.sample_rate_hz),
            ));
        }

        // The period shrinks monotonically with speed, so the bounds cover the range
        pacing_period(self.sample_rate_hz, MIN_SPEED)?;
        pacing_period(self.sample_rate_hz, MAX_SPEED)?;
        Ok(())
    }

    /// Read and parse a recorded walk file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| TrackingError::file_error(path.to_path_buf(), e))?;
        Self::parse(&yaml)
    }
}

/// Provider that replays a recorded walk at its capture rate
pub struct ReplayProvider {
    walk: RecordedWalk,

    /// Index of the next sample to emit
    position: usize,

    /// Playback speed multiplier (1.0 = real time)
    speed: f64,

    /// Created on first use so the provider can be built outside a runtime
    interval: Option<Interval>,
}

impl ReplayProvider {
    /// Create a replay provider from a walk file
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let walk = RecordedWalk::load(path)?;

        info!(
            "Opened recorded walk {}: {} samples at {}Hz",
            path.display(),
            walk.samples.len(),
            walk.sample_rate_hz
        );

        Self::from_walk(walk)
    }

    /// Create a replay provider from an in-memory walk
    ///
    /// Fails with [`TrackingError::Parse`] if the walk's sample rate cannot be paced.
    pub fn from_walk(walk: RecordedWalk) -> Result<Self> {
        walk.validate()?;
        Ok(Self { walk, position: 0, speed: 1.0, interval: None })
    }

    /// Set playback speed. Non-finite speeds fall back to real time.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = if speed.is_finite() { speed.clamp(MIN_SPEED, MAX_SPEED) } else { 1.0 };
        // Rebuilt with the new period on the next sample
        self.interval = None;
        debug!("Playback speed set to {}x", self.speed);
    }

    /// Builder form of [`set_speed`](Self::set_speed)
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.set_speed(speed);
        self
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Number of samples not yet emitted
    pub fn remaining(&self) -> usize {
        self.walk.samples.len().saturating_sub(self.position)
    }

    fn sample_period(&self) -> Result<Duration> {
        pacing_period(self.walk.sample_rate_hz, self.speed)
    }
}

#[async_trait::async_trait]
impl SampleProvider for ReplayProvider {
    async fn next_sample(&mut self) -> Result<Option<LocationSample>> {
        let Some(sample) = self.walk.samples.get(self.position).copied() else {
            debug!("Reached end of recorded walk");
            return Ok(None);
        };

        let period = self.sample_period()?;
        let pacing = self.interval.get_or_insert_with(|| {
            let mut pacing = interval(period);
            pacing.set_missed_tick_behavior(MissedTickBehavior::Delay);
            pacing
        });
        pacing.tick().await;

        self.position += 1;
        trace!("Replaying sample {}/{}", self.position, self.walk.samples.len());

        Ok(Some(sample))
    }

    fn sample_rate_hz(&self) -> f64 {
        self.walk.sample_rate_hz * self.speed
    }
}
