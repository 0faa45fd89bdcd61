#[cfg(test)]
#[path = "../../tests/unit/reactive/alpha_pool_test.rs"]
mod alpha_pool_test;

use crate::models::Cost;
use crate::utils::{Float, Random};

/// Keeps candidate greediness values with their selection probabilities and collects objective
/// samples of the current batch to adapt the probabilities.
#[derive(Clone, Debug)]
pub struct AlphaPool {
    alphas: Vec<Float>,
    probabilities: Vec<Float>,
    delta: Float,
    samples: Vec<(Cost, usize)>,
    range: Option<(Cost, Cost)>,
}

impl AlphaPool {
    /// Creates a new instance of `AlphaPool` with uniform probabilities.
    pub fn new(alphas: Vec<Float>, delta: Float) -> Self {
        let probabilities = vec![1. / alphas.len().max(1) as Float; alphas.len()];
        Self::new_with_probabilities(alphas, probabilities, delta)
    }

    /// Creates a new instance of `AlphaPool` with given probabilities which are expected to be
    /// aligned with alpha values.
    pub fn new_with_probabilities(alphas: Vec<Float>, probabilities: Vec<Float>, delta: Float) -> Self {
        assert_eq!(alphas.len(), probabilities.len());

        let samples = vec![(0, 0); alphas.len()];
        Self { alphas, probabilities, delta, samples, range: None }
    }

    /// Returns candidate alpha values.
    pub fn alphas(&self) -> &[Float] {
        self.alphas.as_slice()
    }

    /// Returns alpha value with given index.
    pub fn alpha(&self, idx: usize) -> Float {
        self.alphas[idx]
    }

    /// Returns current selection probabilities.
    pub fn probabilities(&self) -> &[Float] {
        self.probabilities.as_slice()
    }

    /// Samples an index of alpha value using inverse cumulative distribution.
    pub fn sample(&self, random: &dyn Random) -> usize {
        let last_idx = self.alphas.len() - 1;

        if self.probabilities.iter().all(|&probability| probability == 0.) {
            return random.uniform_int(0, last_idx as i32) as usize;
        }

        let threshold = random.uniform_real(0., 1.);
        let mut cumulative = 0.;

        self.probabilities
            .iter()
            .position(|&probability| {
                cumulative += probability;
                threshold < cumulative
            })
            .unwrap_or(last_idx)
    }

    /// Adds the objective value obtained with alpha of given index to the current batch samples.
    pub fn accept(&mut self, alpha_idx: usize, cost: Cost) {
        let (sum, count) = &mut self.samples[alpha_idx];
        *sum += cost;
        *count += 1;

        self.range = Some(self.range.map_or((cost, cost), |(min, max)| (min.min(cost), max.max(cost))));
    }

    /// Recomputes probabilities from the batch samples and clears them. Alpha values which produce
    /// better solutions on average get higher probabilities. Returns false when probabilities are
    /// kept unchanged.
    pub fn update(&mut self) -> bool {
        let Some((min, max)) = self.range.take() else {
            return false;
        };

        let samples = std::mem::replace(&mut self.samples, vec![(0, 0); self.alphas.len()]);
        let valuations = samples
            .iter()
            .map(|&(sum, count)| {
                let mean = if count > 0 { sum as Float / count as Float } else { min as Float };
                let fraction = if max == min { 0. } else { (mean - min as Float) / (max - min) as Float };

                fraction.abs().powf(self.delta)
            })
            .collect::<Vec<_>>();

        let total = valuations.iter().sum::<Float>();
        if total == 0. || !total.is_finite() {
            return false;
        }

        self.probabilities = valuations
            .into_iter()
            .map(|valuation| valuation / total)
            .map(|probability| if probability.is_nan() { 0. } else { probability })
            .collect();

        true
    }
}
