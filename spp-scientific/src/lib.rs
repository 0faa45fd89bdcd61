//! Scientific crate contains logic to read set packing problems used to benchmark different
//! SPP related algorithms and to write their solutions.
//!
//!
//! # Supported formats
//!
//! - **orlib**: OR-library style text format: amount of constraints and items, item weights and,
//!   for every constraint, a list of (1-based) items which consume it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub use spp_core as core;

pub mod common;
pub mod orlib;
