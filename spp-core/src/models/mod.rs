//! Contains the set packing problem definition and its solution representation.

mod problem;
pub use self::problem::*;

mod solution;
pub use self::solution::*;
