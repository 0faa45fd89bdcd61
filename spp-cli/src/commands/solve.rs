#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use spp_cli::extensions::analyze::{SolveReport, write_history_csv, write_json_report};
use spp_cli::extensions::solve::config::*;
use spp_cli::extensions::solve::interruption::create_interruption_quota;
use spp_cli::extensions::solve::{get_problem_paths, read_problem_file, solve_instance};
use spp_core::prelude::{Instance, Solution};
use spp_scientific::orlib::write_orlib_solution;
use std::io::BufReader;
use std::sync::Arc;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const CONFIG_ARG_NAME: &str = "config";
const ITERATIONS_ARG_NAME: &str = "iterations";
const RUNS_ARG_NAME: &str = "runs";
const THREADS_ARG_NAME: &str = "threads";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const LOG_ARG_NAME: &str = "log";
const SEQUENTIAL_ARG_NAME: &str = "sequential";
const SHALLOW_ARG_NAME: &str = "shallow";
const TIME_ARG_NAME: &str = "max-time";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const OUT_HISTORY_ARG_NAME: &str = "out-history";
const OUT_SOLUTION_ARG_NAME: &str = "out-solution";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves Set Packing Problem instances with reactive GRASP")
        .arg(
            Arg::new(PROBLEM_ARG_NAME)
                .help("Sets problem files or directories with problem files")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ITERATIONS_ARG_NAME)
                .help("Specifies amount of iterations per run")
                .short('n')
                .long(ITERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RUNS_ARG_NAME)
                .help("Specifies amount of independent runs per instance")
                .short('r')
                .long(RUNS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(THREADS_ARG_NAME)
                .help("Specifies amount of worker threads")
                .long(THREADS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior")
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(SEQUENTIAL_ARG_NAME)
                .help("Runs iterations of a batch sequentially")
                .long(SEQUENTIAL_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(SHALLOW_ARG_NAME)
                .help("Uses first improvement instead of best improvement in local search")
                .long(SHALLOW_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time algorithm run in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for json report output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_HISTORY_ARG_NAME)
                .help("Specifies path to file for csv output of the last run history")
                .long(OUT_HISTORY_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_SOLUTION_ARG_NAME)
                .help("Specifies path to file for the best solution output, only for a single problem")
                .long(OUT_SOLUTION_ARG_NAME)
                .required(false),
        )
}

/// Runs solver commands.
pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let problem_paths = matches
        .get_many::<String>(PROBLEM_ARG_NAME)
        .map(|paths| paths.cloned().collect::<Vec<_>>())
        .unwrap_or_default();

    let config = get_config(matches)?;
    let max_time = parse_int_value::<usize>(matches, TIME_ARG_NAME, "max time")?;

    let settings = create_run_settings(&config).map_err(|err| format!("cannot use config: '{err}'"))?;
    let problem_paths = get_problem_paths(problem_paths.as_slice()).map_err(|err| err.to_string())?;

    if problem_paths.is_empty() {
        return Err("no problem files found".to_string());
    }

    let out_solution = matches.get_one::<String>(OUT_SOLUTION_ARG_NAME);
    if out_solution.is_some() && problem_paths.len() != 1 {
        return Err(format!("solution output expects a single problem, got: {}", problem_paths.len()));
    }

    let quota = create_interruption_quota(max_time).map_err(|err| err.to_string())?;
    let environment = Arc::new(create_environment(&config, Some(quota)));

    let mut analyses = Vec::with_capacity(problem_paths.len());
    let mut best: Option<(Arc<Instance>, Solution)> = None;

    for path in problem_paths.iter() {
        let name =
            path.file_name().map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().to_string());
        let instance = Arc::new(read_problem_file(path, settings.utility).map_err(|err| err.to_string())?);

        let solution = solve_instance(name.as_str(), instance.clone(), &config, environment.clone())
            .map_err(|err| format!("cannot solve '{name}': '{err}'"))?;

        analyses.push(solution.analysis);
        best = solution.best.map(|solution| (instance, solution));
    }

    if let Some(path) = out_solution {
        let (instance, solution) = best.ok_or_else(|| "cannot find any solution".to_string())?;
        let mut writer = out_writer_func(Some(create_file(path, "out solution")?));
        write_orlib_solution(instance.as_ref(), &solution, &mut writer).map_err(|err| err.to_string())?;
    }

    if let Some(path) = matches.get_one::<String>(OUT_HISTORY_ARG_NAME) {
        write_history_csv(analyses.as_slice(), out_writer_func(Some(create_file(path, "out history")?)))?;
    }

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    write_json_report(&SolveReport { instances: analyses }, out_writer_func(out_result))
}

fn get_config(matches: &ArgMatches) -> Result<Config, String> {
    let mut config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))?,
        None => Config::default(),
    };

    if let Some(iterations) = parse_int_value::<usize>(matches, ITERATIONS_ARG_NAME, "iterations")? {
        config.grasp_mut().iterations = Some(iterations);
    }

    if let Some(runs) = parse_int_value::<usize>(matches, RUNS_ARG_NAME, "runs")? {
        config.analysis_mut().runs = Some(runs);
    }

    if let Some(threads) = parse_int_value::<usize>(matches, THREADS_ARG_NAME, "threads")? {
        config.parallelism_mut().threads = Some(threads);
    }

    if let Some(seed) = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "seed")? {
        config.seed = Some(seed);
    }

    if matches.get_flag(LOG_ARG_NAME) {
        config.logging_mut().enabled = true;
    }

    if matches.get_flag(SEQUENTIAL_ARG_NAME) {
        config.parallelism_mut().enabled = Some(false);
    }

    if matches.get_flag(SHALLOW_ARG_NAME) {
        config.grasp_mut().deep = Some(false);
    }

    Ok(config)
}
