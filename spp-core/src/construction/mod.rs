//! The construction module contains the greedy randomized procedure which builds a feasible
//! solution from scratch.

mod greedy_randomized;
pub use self::greedy_randomized::*;
