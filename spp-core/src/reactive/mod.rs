//! This module contains the reactive control loop: iterations of construction and improvement
//! are run in batches and the distribution of the greediness parameter is adapted between them.

mod alpha_pool;
pub use self::alpha_pool::AlphaPool;

mod config;
pub use self::config::*;

mod control;
pub use self::control::*;

mod history;
pub use self::history::RunHistory;
