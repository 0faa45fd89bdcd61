#[cfg(test)]
#[path = "../../tests/unit/reactive/config_test.rs"]
mod config_test;

use crate::utils::{Float, GenericError, GenericResult};

/// Default amount of iterations.
pub const DEFAULT_ITERATIONS: usize = 200;
/// Default candidate alpha values.
pub const DEFAULT_ALPHAS: [Float; 11] = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 0.95];
/// Default amount of iterations between probability updates.
pub const DEFAULT_UPDATE_PERIOD: usize = 50;
/// Default amplification exponent of the probability update.
pub const DEFAULT_DELTA: Float = 4.;

/// A configuration of the reactive GRASP.
#[derive(Clone, Debug)]
pub struct GraspConfig {
    /// Total amount of iterations.
    pub iterations: usize,
    /// Candidate alpha values.
    pub alphas: Vec<Float>,
    /// Initial selection probabilities of alpha values.
    pub probabilities: Vec<Float>,
    /// Amount of iterations in one batch: probabilities are updated after each batch.
    pub update_period: usize,
    /// Amplification exponent applied to normalized batch means.
    pub delta: Float,
    /// Specifies whether iterations of a batch run on the thread pool.
    pub is_parallel: bool,
    /// Specifies whether local search uses best improvement instead of first improvement.
    pub is_deep: bool,
}

/// Provides configurable way to build reactive GRASP configuration using fluent interface style.
pub struct GraspConfigBuilder {
    iterations: usize,
    alphas: Vec<Float>,
    probabilities: Option<Vec<Float>>,
    update_period: usize,
    delta: Float,
    is_parallel: bool,
    is_deep: bool,
}

impl Default for GraspConfigBuilder {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            alphas: DEFAULT_ALPHAS.to_vec(),
            probabilities: None,
            update_period: DEFAULT_UPDATE_PERIOD,
            delta: DEFAULT_DELTA,
            is_parallel: true,
            is_deep: true,
        }
    }
}

impl GraspConfigBuilder {
    /// Sets amount of iterations. Default is 200, at least two iterations are run.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets candidate alpha values. Default is 0.0, 0.1, .., 0.9, 0.95.
    pub fn with_alphas(mut self, alphas: Vec<Float>) -> Self {
        self.alphas = alphas;
        self
    }

    /// Sets initial probabilities of alpha values. Default is uniform distribution.
    pub fn with_probabilities(mut self, probabilities: Option<Vec<Float>>) -> Self {
        self.probabilities = probabilities;
        self
    }

    /// Sets amount of iterations between probability updates. Default is 50. A period longer than
    /// the run is replaced by a tenth of iterations.
    pub fn with_update_period(mut self, update_period: usize) -> Self {
        self.update_period = update_period;
        self
    }

    /// Sets amplification exponent. Default is 4.
    pub fn with_delta(mut self, delta: Float) -> Self {
        self.delta = delta;
        self
    }

    /// Sets whether iterations are run in parallel. Default is true.
    pub fn with_parallel(mut self, is_parallel: bool) -> Self {
        self.is_parallel = is_parallel;
        self
    }

    /// Sets whether local search uses best improvement. Default is true.
    pub fn with_deep(mut self, is_deep: bool) -> Self {
        self.is_deep = is_deep;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> GenericResult<GraspConfig> {
        if self.alphas.is_empty() {
            return Err("no alpha values are specified".into());
        }

        if let Some(alpha) = self.alphas.iter().find(|alpha| !(0. ..=1.).contains(*alpha)) {
            return Err(format!("alpha value must be in [0, 1], got: {alpha}").into());
        }

        if !self.delta.is_finite() || self.delta < 0. {
            return Err(format!("delta must be non-negative and finite, got: {}", self.delta).into());
        }

        let probabilities = match self.probabilities {
            Some(probabilities) => {
                validate_probabilities(probabilities.as_slice(), self.alphas.len())?;
                probabilities
            }
            None => vec![1. / self.alphas.len() as Float; self.alphas.len()],
        };

        let iterations = self.iterations.max(2);
        let update_period = match self.update_period.max(1) {
            period if period > iterations => iterations.div_ceil(10),
            period => period,
        };

        Ok(GraspConfig {
            iterations,
            alphas: self.alphas,
            probabilities,
            update_period,
            delta: self.delta,
            is_parallel: self.is_parallel,
            is_deep: self.is_deep,
        })
    }
}

fn validate_probabilities(probabilities: &[Float], size: usize) -> GenericResult<()> {
    if probabilities.len() != size {
        return Err(GenericError::from(format!(
            "amount of probabilities ({}) does not match amount of alpha values ({size})",
            probabilities.len()
        )));
    }

    if probabilities.iter().any(|probability| !probability.is_finite() || *probability < 0.) {
        return Err("probabilities must be non-negative and finite".into());
    }

    Ok(())
}
