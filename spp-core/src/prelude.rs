//! This module reimports commonly used types.

pub use crate::models::{Cost, Instance, Solution};

pub use crate::construction::construct;

pub use crate::search::{MoveOperator, VariableNeighborhoodDescent, improve};

pub use crate::reactive::{
    AlphaPool, GraspConfig, GraspConfigBuilder, GraspResult, ReactiveGrasp, RunHistory, run_reactive_grasp,
};

pub use crate::utils::{
    DefaultRandom, Environment, Float, GenericError, GenericResult, InfoLogger, Parallelism, Quota, Random,
    SeededRandom, TimeQuota, compare_floats,
};
