//! Core data types for route-progress tracking.
//!
//! - [`Waypoint`] is one checkpoint of the route, with its cumulative distance
//! - [`LocationSample`] is a single device position fix
//! - [`RouteProgress`] is the value derived from a sample against the route
//! - [`UpdateRate`] controls how often subscribers see new progress
//!
//! ```rust
//! use girivalam::geo::GeoPoint;
//! use girivalam::types::Waypoint;
//!
//! let start = Waypoint::new(
//!     "indra-lingam",
//!     "Indra Lingam",
//!     GeoPoint::new(12.2300, 79.0800).unwrap(),
//!     0,
//!     0.0,
//! );
//! assert_eq!(start.display_name(true), "Indra Lingam");
//! ```

mod progress;
mod sample;
mod update_rate;
mod waypoint;

pub use progress::RouteProgress;
pub use sample::LocationSample;
pub use update_rate::UpdateRate;
pub use waypoint::{AudioGuide, Waypoint};
