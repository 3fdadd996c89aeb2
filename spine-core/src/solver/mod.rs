//! Per-joint constraint solvers driven by [`crate::chain::SpineChain`].

pub mod angle;
pub mod distance;

pub use angle::AngleCorrector;
pub use distance::{DistanceSolve, DistanceSolver, SolveBranch};
