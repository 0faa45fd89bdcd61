//! A helper module which contains functionality to run feasibility checks on solution.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/check/check_test.rs"]
mod check_test;

use spp_core::utils::GenericError;
use spp_scientific::orlib::{OrlibProblem, UtilityKind, check_solution, read_orlib_solution};
use std::io::{BufReader, Read};

/// Checks that the solution is feasible for the OR-library problem and its declared objective
/// value is correct.
pub fn check_orlib_solution<P: Read, S: Read>(
    problem_reader: BufReader<P>,
    solution_reader: BufReader<S>,
) -> Result<(), Vec<GenericError>> {
    let instance = problem_reader
        .read_orlib(UtilityKind::Weight)
        .map_err(|err| vec![GenericError::from(format!("cannot read problem: '{err}'"))])?;

    let record = read_orlib_solution(solution_reader)
        .map_err(|err| vec![GenericError::from(format!("cannot read solution: '{err}'"))])?;

    check_solution(&instance, &record).map(|_| ())
}
