pub mod calculator;
pub mod karmic;
pub mod types;

pub use calculator::{
    angular_distance, compare, compare_exact, exact_aspect, exact_match, mirrored, mirrored_exact,
    observe, observe_exact, resolve_aspect, sign_aspect, sign_distance,
};
pub use karmic::{karmic_triggers, KarmicTriggers};
pub use types::{AspectKind, AspectMode, AspectObservation, ExactAspect};
