pub mod accumulator;
pub mod axes;
pub mod power;
pub mod tracks;

pub use accumulator::{diminish, marginal, ScoreTerm, WeightedScore};
pub use axes::{depth_axis, physical_axis, AxisContext, AxisScore};
pub use power::{polarity, power_frame, FrameSignals};
pub use tracks::{base_tracks, capacity_guard};
