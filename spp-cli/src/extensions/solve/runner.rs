#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/runner_test.rs"]
mod runner_test;

use super::config::*;
use crate::extensions::analyze::{InstanceAnalysis, RunAnalyzer};
use spp_core::prelude::*;
use spp_scientific::orlib::{OrlibProblem, UtilityKind};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A result of solving one instance multiple times.
pub struct InstanceSolution {
    /// Analysis of all runs.
    pub analysis: InstanceAnalysis,
    /// The best solution over all runs.
    pub best: Option<Solution>,
}

/// Expands given paths into a sorted list of problem files: a directory path is replaced by
/// files it contains.
pub fn get_problem_paths(paths: &[String]) -> GenericResult<Vec<PathBuf>> {
    paths.iter().try_fold(Vec::default(), |mut acc, path| {
        let path = Path::new(path);

        if path.is_dir() {
            let mut files = std::fs::read_dir(path)
                .map_err(|err| format!("cannot read directory '{}': '{err}'", path.display()))?
                .filter_map(|entry| entry.ok().map(|entry| entry.path()))
                .filter(|path| path.is_file())
                .collect::<Vec<_>>();
            files.sort();
            acc.extend(files);
        } else {
            acc.push(path.to_path_buf());
        }

        Ok(acc)
    })
}

/// Reads an instance from the file.
pub fn read_problem_file(path: &Path, utility: UtilityKind) -> GenericResult<Instance> {
    let file = File::open(path).map_err(|err| format!("cannot open problem file '{}': '{err}'", path.display()))?;

    BufReader::new(file)
        .read_orlib(utility)
        .map_err(|err| format!("cannot read problem from '{}': '{err}'", path.display()).into())
}

/// Solves the instance `runs` times. Alpha probabilities start uniform and are carried from one
/// run to the next one. When seed is set, each run gets its own seed derived from it. No more
/// runs are started once the quota is reached.
pub fn solve_instance(
    name: &str,
    instance: Arc<Instance>,
    config: &Config,
    environment: Arc<Environment>,
) -> GenericResult<InstanceSolution> {
    let settings = create_run_settings(config)?;
    let grasp_config = create_grasp_config(config, None)?;
    let logger = environment.logger.clone();

    let mut analyzer = RunAnalyzer::new(name, grasp_config.alphas.clone(), grasp_config.iterations, settings.divisions);
    let mut probabilities = None;
    let mut best: Option<Solution> = None;

    for run in 0..settings.runs {
        if run > 0 && environment.is_quota_reached() {
            (logger)(&format!("{name}: skipped {} runs: quota is reached", settings.runs - run));
            break;
        }

        let grasp_config = create_grasp_config(config, probabilities.take())?;
        let run_environment = Arc::new(Environment {
            seed: environment.seed.map(|seed| seed.wrapping_add(run as u64)),
            ..environment.as_ref().clone()
        });

        let result = run_reactive_grasp(instance.clone(), grasp_config, run_environment);

        (logger)(&format!(
            "{name}: run {} of {}: iterations: {}, best: {}",
            run + 1,
            settings.runs,
            result.iterations,
            result.history.best_cost().map_or("none".to_string(), |cost| cost.to_string())
        ));

        analyzer.add_run(&result);
        probabilities = Some(result.probabilities);

        if let Some(solution) = result.best {
            if best.as_ref().is_none_or(|best| solution.cost() > best.cost()) {
                best = Some(solution);
            }
        }
    }

    Ok(InstanceSolution { analysis: analyzer.analyze(), best })
}
