#[cfg(test)]
#[path = "../../../tests/unit/extensions/analyze/analysis_test.rs"]
mod analysis_test;

use serde::Serialize;
use spp_core::prelude::*;
use spp_core::utils::{get_mean_iter, get_mean_slice, get_stdev};
use std::time::Duration;

/// Statistics of best objective values over runs at a specific iteration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Checkpoint {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Minimum over runs.
    pub min: Cost,
    /// Mean over runs.
    pub mean: Float,
    /// Maximum over runs.
    pub max: Cost,
}

/// Keeps the history of the last run.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LastRun {
    /// Objective values of constructed solutions.
    pub initial: Vec<Cost>,
    /// Objective values after local search.
    pub improved: Vec<Cost>,
    /// Best objective values found so far.
    pub best: Vec<Cost>,
    /// Alpha values used by iterations.
    pub alphas: Vec<Float>,
    /// Alpha probabilities at the end of the run.
    pub probabilities: Vec<Float>,
}

/// Analysis of all runs on a single instance.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceAnalysis {
    /// Instance name.
    pub name: String,
    /// Amount of runs with at least one iteration.
    pub runs: usize,
    /// Best objective value of the first iteration, minimum over runs.
    pub min_first: Option<Cost>,
    /// Best objective value of the run, mean over runs.
    pub mean_best: Option<Float>,
    /// Best objective value of the run, standard deviation over runs.
    pub stdev_best: Option<Float>,
    /// Best objective value of the run, maximum over runs.
    pub max_best: Option<Cost>,
    /// Average run duration in seconds.
    pub average_time: Float,
    /// Candidate alpha values.
    pub alphas: Vec<Float>,
    /// Statistics at evenly spaced iterations.
    pub checkpoints: Vec<Checkpoint>,
    /// The last run.
    pub last_run: Option<LastRun>,
}

/// Collects results of many runs on the same instance.
pub struct RunAnalyzer {
    name: String,
    alphas: Vec<Float>,
    checkpoints: Vec<usize>,
    values: Vec<Vec<Cost>>,
    firsts: Vec<Cost>,
    bests: Vec<Cost>,
    durations: Vec<Duration>,
    last_run: Option<LastRun>,
}

impl RunAnalyzer {
    /// Creates a new instance of `RunAnalyzer`.
    pub fn new(name: &str, alphas: Vec<Float>, iterations: usize, divisions: usize) -> Self {
        let checkpoints = get_checkpoints(iterations, divisions);

        Self {
            name: name.to_string(),
            alphas,
            values: vec![Vec::default(); checkpoints.len()],
            checkpoints,
            firsts: vec![],
            bests: vec![],
            durations: vec![],
            last_run: None,
        }
    }

    /// Adds a run result. A run without iterations affects only the average time. When a run was
    /// stopped early, its last best value is used for later checkpoints.
    pub fn add_run(&mut self, result: &GraspResult) {
        self.durations.push(result.duration);

        let history = &result.history;
        let (Some(&first), Some(&best)) = (history.best.first(), history.best.last()) else {
            return;
        };

        self.firsts.push(first);
        self.bests.push(best);
        self.checkpoints.iter().zip(self.values.iter_mut()).for_each(|(&iteration, values)| {
            values.push(history.best.get(iteration - 1).copied().unwrap_or(best));
        });

        self.last_run = Some(LastRun {
            initial: history.initial.clone(),
            improved: history.improved.clone(),
            best: history.best.clone(),
            alphas: history.alphas.iter().map(|&idx| self.alphas[idx]).collect(),
            probabilities: result.probabilities.clone(),
        });
    }

    /// Finishes analysis.
    pub fn analyze(self) -> InstanceAnalysis {
        let checkpoints = self
            .checkpoints
            .iter()
            .zip(self.values.iter())
            .filter(|(_, values)| !values.is_empty())
            .map(|(&iteration, values)| Checkpoint {
                iteration,
                min: values.iter().copied().min().unwrap_or_default(),
                mean: get_mean_iter(values.iter().map(|&value| value as Float)),
                max: values.iter().copied().max().unwrap_or_default(),
            })
            .collect();

        let bests = self.bests.iter().map(|&best| best as Float).collect::<Vec<_>>();

        InstanceAnalysis {
            name: self.name,
            runs: self.bests.len(),
            min_first: self.firsts.iter().copied().min(),
            mean_best: (!bests.is_empty()).then(|| get_mean_slice(bests.as_slice())),
            stdev_best: (!bests.is_empty()).then(|| get_stdev(bests.as_slice())),
            max_best: self.bests.iter().copied().max(),
            average_time: get_mean_iter(self.durations.iter().map(|duration| duration.as_secs_f64())),
            alphas: self.alphas,
            checkpoints,
            last_run: self.last_run,
        }
    }
}

/// Returns `divisions` evenly spaced 1-based iterations from the first to the last one, the amount
/// is limited by the amount of iterations.
pub fn get_checkpoints(iterations: usize, divisions: usize) -> Vec<usize> {
    let divisions = divisions.min(iterations);

    match divisions {
        0 => vec![],
        1 => vec![iterations],
        _ => (0..divisions).map(|idx| 1 + idx * (iterations - 1) / (divisions - 1)).collect(),
    }
}
