#[cfg(test)]
#[path = "../../tests/unit/orlib/checker_test.rs"]
mod checker_test;

use crate::common::TokenReader;
use spp_core::models::{Cost, Instance, Solution};
use spp_core::utils::{GenericError, GenericResult};
use std::io::{BufReader, Read};

/// A solution stored outside of the solver: a declared objective value and selected items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionRecord {
    /// Declared objective value.
    pub cost: Cost,
    /// 0-based indices of selected items.
    pub items: Vec<usize>,
}

/// Reads a solution written by [`write_orlib_solution`](crate::orlib::write_orlib_solution).
pub fn read_orlib_solution<R: Read>(reader: BufReader<R>) -> GenericResult<SolutionRecord> {
    let mut tokens = TokenReader::new(reader);
    let cost = tokens.next::<Cost>("objective value")?;

    let mut items = Vec::default();
    while !tokens.is_empty()? {
        let item = tokens.next::<usize>("selected item")?;
        if item == 0 {
            return Err("selected item index must be 1-based".into());
        }

        items.push(item - 1);
    }

    Ok(SolutionRecord { cost, items })
}

/// Checks that the recorded solution is feasible for the instance and its declared objective
/// value matches selected items. Returns all found violations, items are reported 1-based.
pub fn check_solution(instance: &Instance, record: &SolutionRecord) -> Result<Solution, Vec<GenericError>> {
    let mut errors: Vec<GenericError> = vec![];
    let mut solution = Solution::empty(instance);

    record.items.iter().for_each(|&item| {
        let index = item + 1;

        if item >= instance.items() {
            errors.push(format!("unknown item: {index}").into());
        } else if solution.is_selected(item) {
            errors.push(format!("item {index} is selected twice").into());
        } else if !solution.can_add(instance, item) {
            errors.push(format!("item {index} violates capacity of a constraint").into());
        } else {
            solution.add(instance, item);
        }
    });

    if errors.is_empty() && solution.cost() != record.cost {
        errors.push(format!("objective mismatch: declared {}, actual {}", record.cost, solution.cost()).into());
    }

    if errors.is_empty() { Ok(solution) } else { Err(errors) }
}
