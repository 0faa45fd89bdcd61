use crate::common::write_text_solution;
use spp_core::models::{Instance, Solution};
use spp_core::utils::GenericResult;
use std::io::{BufWriter, Write};

/// Writes the solution in OR-library style: objective value followed by sorted 1-based indices
/// of selected items.
pub fn write_orlib_solution<W: Write>(
    instance: &Instance,
    solution: &Solution,
    writer: &mut BufWriter<W>,
) -> GenericResult<()> {
    write_text_solution(instance, solution, writer).map_err(|err| format!("cannot write solution: '{err}'").into())
}
