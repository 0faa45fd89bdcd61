#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use crate::utils::*;
use std::sync::Arc;

/// A logger type which is called with various information.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Specifies how many worker threads are used to run iterations in parallel.
#[derive(Clone, Debug)]
pub struct Parallelism {
    threads: usize,
}

impl Parallelism {
    /// Creates a new instance of `Parallelism` with given amount of threads.
    pub fn new(threads: usize) -> Self {
        Self { threads: threads.max(1) }
    }

    /// Creates a new instance of `Parallelism` which uses all available cpus.
    pub fn new_with_cpus() -> Self {
        Self::new(get_cpus())
    }

    /// Returns amount of worker threads.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Creates a thread pool with the configured amount of threads.
    pub fn create_thread_pool(&self) -> GenericResult<ThreadPool> {
        ThreadPool::new(self.threads)
    }
}

impl Default for Parallelism {
    fn default() -> Self {
        Self::new_with_cpus()
    }
}

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator used when no seed is specified.
    pub random: Arc<dyn Random + Send + Sync>,

    /// A seed which makes the search reproducible: every iteration gets its own generator derived
    /// from the seed and the iteration index.
    pub seed: Option<u64>,

    /// A global quota, checked before each batch of iterations.
    pub quota: Option<Arc<dyn Quota + Send + Sync>>,

    /// Keeps data parallelism settings.
    pub parallelism: Parallelism,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(
        random: Arc<dyn Random + Send + Sync>,
        quota: Option<Arc<dyn Quota + Send + Sync>>,
        parallelism: Parallelism,
        logger: InfoLogger,
    ) -> Self {
        Self { random, seed: None, quota, parallelism, logger }
    }

    /// Creates a new instance of `Environment` which produces repeatable results.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    /// Returns a random generator for the task (iteration) with given index. Tasks never share a
    /// seeded generator, so results do not depend on how tasks are scheduled.
    pub fn task_random(&self, task: usize) -> Arc<dyn Random + Send + Sync> {
        match self.seed {
            Some(seed) => Arc::new(SeededRandom::new_for_task(seed, task)),
            None => self.random.clone(),
        }
    }

    /// Returns true if the quota is specified and reached.
    pub fn is_quota_reached(&self) -> bool {
        self.quota.as_ref().is_some_and(|quota| quota.is_reached())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(
            Arc::new(DefaultRandom::default()),
            None,
            Parallelism::default(),
            Arc::new(|msg| println!("{msg}")),
        )
    }
}

/// Returns amount of CPUs.
#[cfg(not(target_arch = "wasm32"))]
pub fn get_cpus() -> usize {
    num_cpus::get()
}

/// Returns amount of CPUs.
#[cfg(target_arch = "wasm32")]
pub fn get_cpus() -> usize {
    1
}
