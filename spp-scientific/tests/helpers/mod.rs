#[path = "../../../spp-core/tests/helpers/macros.rs"]
#[macro_use]
pub mod macros;

mod orlib;
pub use self::orlib::OrlibBuilder;

use crate::orlib::{OrlibProblem, UtilityKind};
use spp_core::models::Instance;
use std::fs::File;
use std::io::BufReader;

pub fn get_test_resource(resource_path: &str) -> std::io::Result<File> {
    let mut path = std::env::current_dir()?;
    path.push("tests");
    path.push(resource_path);

    File::open(path)
}

pub fn create_toy_problem() -> Instance {
    BufReader::new(get_test_resource("../../data/spp/toy.dat").unwrap()).read_orlib(UtilityKind::Weight).unwrap()
}
