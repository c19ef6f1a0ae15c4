//! Sample provider implementations

pub mod channel;
pub mod replay;

pub use channel::{ChannelProvider, DEFAULT_CHANNEL_CAPACITY, SampleSender};
pub use replay::{RecordedWalk, ReplayProvider};
