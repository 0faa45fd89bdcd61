//! A core crate contains the main building blocks of a reactive GRASP (Greedy Randomized Adaptive
//! Search Procedure) for the Set Packing Problem (SPP).
//!
//! # Problem
//!
//! Given `m` unit-capacity constraints and `n` weighted items, where each item consumes a unit of
//! some subset of constraints, select a subset of items which maximizes the total weight without
//! exceeding capacity of any constraint.
//!
//! # Algorithm
//!
//! Every iteration builds a feasible solution with a randomized greedy construction, parametrized
//! by a greediness value `alpha`, and improves it with a variable neighborhood descent over three
//! exchange neighborhoods. The value of `alpha` is sampled from a discrete distribution which is
//! periodically adapted to favor values producing better solutions.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use spp_core::prelude::*;
//!
//! // three constraints, four items: item 2 conflicts with items 0 and 1, best packing is {0, 1, 3}
//! let instance = Arc::new(Instance::from_matrix(
//!     &[vec![1, 0, 1, 0], vec![0, 1, 1, 0], vec![0, 0, 0, 1]],
//!     vec![5, 4, 6, 3],
//!     vec![5., 4., 6., 3.],
//! ));
//!
//! let config = GraspConfigBuilder::default().with_iterations(20).with_update_period(5).build()?;
//! let environment = Arc::new(Environment::new_with_seed(42));
//!
//! let result = ReactiveGrasp::new(instance, config, environment).run();
//!
//! assert_eq!(result.best.map(|solution| solution.cost()), Some(12));
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub mod construction;
pub mod models;
pub mod prelude;
pub mod reactive;
pub mod search;
pub mod utils;
