#[path = "../../../spp-core/tests/helpers/macros.rs"]
#[macro_use]
pub mod macros;

use crate::extensions::solve::config::{Config, SearchConfig};
use spp_core::prelude::*;
use spp_scientific::orlib::{OrlibProblem, UtilityKind};
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

pub const TOY_PROBLEM_PATH: &str = "../data/spp/toy.dat";
pub const RANDOM_PROBLEM_PATH: &str = "../data/spp/random_20x40.dat";
pub const FULL_CONFIG_PATH: &str = "../data/config/config.full.json";

pub fn create_problem(path: &str) -> Instance {
    BufReader::new(File::open(path).unwrap()).read_orlib(UtilityKind::Weight).unwrap()
}

pub fn create_test_config(iterations: usize, update_period: usize, runs: usize) -> Config {
    let mut config = Config {
        grasp: Some(SearchConfig {
            iterations: Some(iterations),
            update_period: Some(update_period),
            ..SearchConfig::default()
        }),
        seed: Some(42),
        ..Config::default()
    };
    config.analysis_mut().runs = Some(runs);
    config.parallelism_mut().threads = Some(2);

    config
}

pub fn create_silent_environment(seed: u64) -> Arc<Environment> {
    Arc::new(Environment { seed: Some(seed), logger: Arc::new(|_| {}), ..Environment::default() })
}
