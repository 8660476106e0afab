//! Synastry compatibility scoring.
//!
//! Two [`ChartProfile`]s go in, one [`MatchResult`] comes out. Every optional
//! chart field degrades gracefully: absent data drops out of the weighted
//! sums instead of pulling them toward zero.

pub mod aspects;
pub mod chart;
pub mod config;
pub mod engine;
pub mod error;
pub mod modifiers;
pub mod palace;
pub mod relations;
pub mod result;
pub mod scoring;

pub use chart::{ChartProfile, Point, Sign, Tier};
pub use engine::{compute_match, compute_match_with_palace, compute_match_with_source};
pub use error::{ConfigError, PalaceError};
pub use palace::{PalaceSynastry, PalaceSynastrySource, TrackMultipliers};
pub use result::{MatchResult, Quadrant, Spiciness, Track, TrackScores};
