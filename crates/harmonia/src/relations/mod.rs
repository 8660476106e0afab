pub mod branches;
pub mod elements;

pub use branches::{branch_relation, seasonal_complement, BranchRelation, BranchTrackModifier};
pub use elements::{element_relation, ElementRelation};
