//! Stream utilities for progress subscriptions

mod throttle;

pub use throttle::{Throttle, ThrottleExt};
