//! A crate contains command line extensions of the Set Packing Problem solver: configuration
//! file support, repeated runs over many instances with their analysis, and reporting.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

pub use spp_core as core;
pub use spp_scientific as scientific;

pub mod extensions;
