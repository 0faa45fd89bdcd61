//! Module provides various helper functionality.

pub mod analyze;
pub mod check;
pub mod solve;
