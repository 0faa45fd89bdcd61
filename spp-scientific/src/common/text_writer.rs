use spp_core::models::{Instance, Solution};
use std::io::{BufWriter, Write};

/// Writes the solution as objective value on the first line followed by a line with sorted
/// 1-based indices of selected items.
pub fn write_text_solution<W: Write>(
    instance: &Instance,
    solution: &Solution,
    writer: &mut BufWriter<W>,
) -> Result<(), std::io::Error> {
    debug_assert_eq!(instance.items(), solution.selection().len());

    let items = solution.selected().map(|item| (item + 1).to_string()).collect::<Vec<_>>().join(" ");

    writer.write_all(format!("{}\n{items}\n", solution.cost()).as_bytes())?;
    writer.flush()
}
