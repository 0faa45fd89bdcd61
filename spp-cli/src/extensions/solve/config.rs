//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

extern crate serde_json;

use serde::Deserialize;
use spp_core::prelude::*;
use spp_scientific::orlib::UtilityKind;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// Default amount of worker threads.
pub const DEFAULT_THREADS: usize = 10;
/// Default amount of runs per instance.
pub const DEFAULT_RUNS: usize = 1;
/// Default amount of checkpoints used to analyze runs.
pub const DEFAULT_DIVISIONS: usize = 20;

/// An algorithm configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct Config {
    /// Specifies reactive GRASP configuration.
    pub grasp: Option<SearchConfig>,
    /// Specifies parallelism configuration.
    pub parallelism: Option<ParallelismConfig>,
    /// Specifies multi run analysis configuration.
    pub analysis: Option<AnalysisConfig>,
    /// Specifies how instances are interpreted.
    pub instance: Option<InstanceConfig>,
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
    /// Specifies random seed: results are reproducible when set.
    pub seed: Option<u64>,
}

/// A reactive GRASP configuration.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    /// Amount of iterations per run. Default is 200.
    pub iterations: Option<usize>,
    /// Candidate alpha values. Default is 0.0, 0.1, .., 0.9, 0.95.
    pub alphas: Option<Vec<Float>>,
    /// Amount of iterations between probability updates. Default is 50.
    pub update_period: Option<usize>,
    /// Amplification exponent of probability update. Default is 4.
    pub delta: Option<Float>,
    /// Specifies whether local search uses best improvement. Default is true.
    pub deep: Option<bool>,
}

/// A parallelism configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct ParallelismConfig {
    /// Specifies whether iterations are run in parallel. Default is true.
    pub enabled: Option<bool>,
    /// Amount of worker threads. Default is 10.
    pub threads: Option<usize>,
}

/// A multi run analysis configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct AnalysisConfig {
    /// Amount of independent runs per instance. Default is 1.
    pub runs: Option<usize>,
    /// Amount of iteration checkpoints. Default is 20.
    pub divisions: Option<usize>,
}

/// An instance configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct InstanceConfig {
    /// Specifies item utility used by greedy construction. Default is weight.
    pub utility: Option<UtilityType>,
}

/// Specifies item utility type.
#[derive(Clone, Copy, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum UtilityType {
    /// Utility equals weight.
    Weight,
    /// Utility equals weight divided by amount of consumed constraints.
    Density,
}

/// A logging configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
}

/// Run settings which are not part of a single search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSettings {
    /// Amount of independent runs per instance.
    pub runs: usize,
    /// Amount of iteration checkpoints.
    pub divisions: usize,
    /// Item utility kind.
    pub utility: UtilityKind,
}

impl Config {
    /// Returns reactive GRASP section, inserting the default one if missing.
    pub fn grasp_mut(&mut self) -> &mut SearchConfig {
        self.grasp.get_or_insert_with(SearchConfig::default)
    }

    /// Returns parallelism section, inserting the default one if missing.
    pub fn parallelism_mut(&mut self) -> &mut ParallelismConfig {
        self.parallelism.get_or_insert_with(ParallelismConfig::default)
    }

    /// Returns analysis section, inserting the default one if missing.
    pub fn analysis_mut(&mut self) -> &mut AnalysisConfig {
        self.analysis.get_or_insert_with(AnalysisConfig::default)
    }

    /// Returns logging section, inserting the default one if missing.
    pub fn logging_mut(&mut self) -> &mut LoggingConfig {
        self.logging.get_or_insert_with(LoggingConfig::default)
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates a reactive GRASP configuration with initial alpha probabilities.
pub fn create_grasp_config(config: &Config, probabilities: Option<Vec<Float>>) -> GenericResult<GraspConfig> {
    let mut builder = GraspConfigBuilder::default().with_probabilities(probabilities);

    if let Some(grasp) = config.grasp.as_ref() {
        if let Some(iterations) = grasp.iterations {
            builder = builder.with_iterations(iterations);
        }
        if let Some(alphas) = grasp.alphas.clone() {
            builder = builder.with_alphas(alphas);
        }
        if let Some(update_period) = grasp.update_period {
            builder = builder.with_update_period(update_period);
        }
        if let Some(delta) = grasp.delta {
            builder = builder.with_delta(delta);
        }
        if let Some(deep) = grasp.deep {
            builder = builder.with_deep(deep);
        }
    }

    let is_parallel = config.parallelism.as_ref().and_then(|parallelism| parallelism.enabled).unwrap_or(true);

    builder.with_parallel(is_parallel).build()
}

/// Creates an environment with optional quota.
pub fn create_environment(config: &Config, quota: Option<Arc<dyn Quota + Send + Sync>>) -> Environment {
    let threads =
        config.parallelism.as_ref().and_then(|parallelism| parallelism.threads).unwrap_or(DEFAULT_THREADS);
    let is_logging_enabled = config.logging.as_ref().is_some_and(|logging| logging.enabled);

    let logger: InfoLogger = if is_logging_enabled { Arc::new(|msg| println!("{msg}")) } else { Arc::new(|_| {}) };

    Environment {
        seed: config.seed,
        quota,
        parallelism: Parallelism::new(threads),
        logger,
        ..Environment::default()
    }
}

/// Creates run settings.
pub fn create_run_settings(config: &Config) -> GenericResult<RunSettings> {
    let runs = config.analysis.as_ref().and_then(|analysis| analysis.runs).unwrap_or(DEFAULT_RUNS);
    let divisions = config.analysis.as_ref().and_then(|analysis| analysis.divisions).unwrap_or(DEFAULT_DIVISIONS);

    if runs == 0 {
        return Err("amount of runs must be positive".into());
    }

    if divisions == 0 {
        return Err("amount of divisions must be positive".into());
    }

    let utility = match config.instance.as_ref().and_then(|instance| instance.utility) {
        Some(UtilityType::Density) => UtilityKind::Density,
        Some(UtilityType::Weight) | None => UtilityKind::Weight,
    };

    Ok(RunSettings { runs, divisions, utility })
}
