//! Contains functionality to configure and run the solver on many instances.

pub mod config;

#[cfg(not(target_arch = "wasm32"))]
pub mod interruption;

mod runner;
pub use self::runner::*;
