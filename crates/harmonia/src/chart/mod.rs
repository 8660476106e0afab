pub mod rulers;
pub mod types;

pub use rulers::{rules, sign_ruler};
pub use types::{
    AttachmentStyle, Branch, ChartProfile, ConflictStyle, DominancePreference, ElementBalance,
    FiveElement, HouseCusp, Point, PointPosition, Sign, Tier, WesternElement,
};
