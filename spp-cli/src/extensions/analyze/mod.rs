//! Contains functionality to analyze results of repeated runs and to report them.

mod analysis;
pub use self::analysis::*;

mod report;
pub use self::report::*;
