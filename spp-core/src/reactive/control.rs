#[cfg(test)]
#[path = "../../tests/unit/reactive/control_test.rs"]
mod control_test;

use super::*;
use crate::construction::construct;
use crate::models::{Cost, Instance, Solution};
use crate::search::VariableNeighborhoodDescent;
use crate::utils::{Environment, Float, ThreadPool, Timer, parallel_into_collect};
use std::sync::Arc;
use std::time::Duration;

/// A result of the reactive GRASP run.
#[derive(Clone, Debug)]
pub struct GraspResult {
    /// Objective values per executed iteration.
    pub history: RunHistory,
    /// Probabilities of alpha values at the end of the run.
    pub probabilities: Vec<Float>,
    /// The best solution found, the earliest one is kept on ties.
    pub best: Option<Solution>,
    /// Amount of executed iterations: less than configured when the quota is reached.
    pub iterations: usize,
    /// Elapsed time.
    pub duration: Duration,
}

/// Runs the reactive GRASP: each iteration samples alpha, builds a greedy randomized solution
/// and improves it with local search. Iterations are run in batches, alpha probabilities are
/// updated between batches only, so iterations of one batch are independent from each other.
pub struct ReactiveGrasp {
    instance: Arc<Instance>,
    config: GraspConfig,
    environment: Arc<Environment>,
    descent: VariableNeighborhoodDescent,
}

struct IterationResult {
    alpha_idx: usize,
    initial: Cost,
    solution: Solution,
}

impl ReactiveGrasp {
    /// Creates a new instance of `ReactiveGrasp` with default local search.
    pub fn new(instance: Arc<Instance>, config: GraspConfig, environment: Arc<Environment>) -> Self {
        Self { instance, config, environment, descent: VariableNeighborhoodDescent::default() }
    }

    /// Sets a custom local search.
    pub fn with_descent(mut self, descent: VariableNeighborhoodDescent) -> Self {
        self.descent = descent;
        self
    }

    /// Runs the search.
    pub fn run(self) -> GraspResult {
        let timer = Timer::start();
        let logger = self.environment.logger.clone();
        let config = &self.config;

        (logger)(&format!(
            "configured to use iterations: {}, alphas: {:?}, update period: {}, delta: {}, parallel: {}, deep: {}",
            config.iterations, config.alphas, config.update_period, config.delta, config.is_parallel, config.is_deep
        ));

        let thread_pool = if config.is_parallel { self.create_thread_pool() } else { None };

        let mut alpha_pool =
            AlphaPool::new_with_probabilities(config.alphas.clone(), config.probabilities.clone(), config.delta);
        let mut history = RunHistory::with_capacity(config.iterations);
        let update_period = config.update_period.max(1);
        let mut best: Option<Solution> = None;

        for (batch_idx, start) in (0..config.iterations).step_by(update_period).enumerate() {
            if self.environment.is_quota_reached() {
                (logger)(&format!("stopped after {start} iterations: quota is reached"));
                break;
            }

            let tasks = (start..(start + update_period).min(config.iterations)).collect::<Vec<_>>();
            let results = match thread_pool.as_ref() {
                Some(thread_pool) => thread_pool.execute(|| {
                    parallel_into_collect(tasks, |iteration| self.run_iteration(iteration, &alpha_pool))
                }),
                None => tasks.into_iter().map(|iteration| self.run_iteration(iteration, &alpha_pool)).collect(),
            };

            results.into_iter().for_each(|IterationResult { alpha_idx, initial, solution }| {
                alpha_pool.accept(alpha_idx, solution.cost());
                history.push(alpha_idx, initial, solution.cost());

                if best.as_ref().is_none_or(|best| solution.cost() > best.cost()) {
                    best = Some(solution);
                }
            });

            alpha_pool.update();

            (logger)(&format!(
                "batch {batch_idx}: iterations: {}, best: {}, probabilities: [{}]",
                history.len(),
                history.best_cost().unwrap_or_default(),
                format_probabilities(alpha_pool.probabilities())
            ));
        }

        let duration = timer.elapsed();
        (logger)(&format!(
            "finished {} iterations in {}ms, best: {}",
            history.len(),
            duration.as_millis(),
            history.best_cost().unwrap_or_default()
        ));

        GraspResult {
            iterations: history.len(),
            history,
            probabilities: alpha_pool.probabilities().to_vec(),
            best,
            duration,
        }
    }

    fn run_iteration(&self, iteration: usize, alpha_pool: &AlphaPool) -> IterationResult {
        let random = self.environment.task_random(iteration);

        let alpha_idx = alpha_pool.sample(random.as_ref());
        let mut solution = construct(self.instance.as_ref(), alpha_pool.alpha(alpha_idx), random.as_ref());
        let initial = solution.cost();

        self.descent.improve(self.instance.as_ref(), &mut solution, self.config.is_deep);

        IterationResult { alpha_idx, initial, solution }
    }

    fn create_thread_pool(&self) -> Option<ThreadPool> {
        match self.environment.parallelism.create_thread_pool() {
            Ok(thread_pool) => Some(thread_pool),
            Err(err) => {
                (self.environment.logger)(&format!("{err}, iterations are run sequentially"));
                None
            }
        }
    }
}

/// Runs the reactive GRASP with default local search.
pub fn run_reactive_grasp(instance: Arc<Instance>, config: GraspConfig, environment: Arc<Environment>) -> GraspResult {
    ReactiveGrasp::new(instance, config, environment).run()
}

fn format_probabilities(probabilities: &[Float]) -> String {
    probabilities.iter().map(|probability| format!("{probability:.3}")).collect::<Vec<_>>().join(", ")
}
