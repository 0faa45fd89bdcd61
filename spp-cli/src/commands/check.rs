#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::{Arg, Command};
use spp_cli::extensions::check::check_orlib_solution;
use spp_core::utils::GenericError;
use std::io::BufReader;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const SOLUTION_ARG_NAME: &str = "SOLUTION";

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Provides the way to check solution feasibility")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file").required(true).index(1))
        .arg(Arg::new(SOLUTION_ARG_NAME).help("Sets the solution file").required(true).index(2))
}

pub fn run_check(matches: &ArgMatches) -> Result<(), String> {
    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem file is not specified")?;
    let solution_path = matches.get_one::<String>(SOLUTION_ARG_NAME).ok_or("solution file is not specified")?;

    let problem_reader = BufReader::new(open_file(problem_path, "problem")?);
    let solution_reader = BufReader::new(open_file(solution_path, "solution")?);

    check_orlib_solution(problem_reader, solution_reader)
        .map_err(|errs| format!("checker found {} errors:\n{}", errs.len(), GenericError::join_many(&errs, "\n")))
}
