use crate::extensions::analyze::{SolveReport, write_json_report};
use crate::extensions::solve::config::{create_environment, read_config};
use crate::extensions::solve::{read_problem_file, solve_instance};
use crate::helpers::*;
use spp_scientific::orlib::{UtilityKind, read_orlib_solution, write_orlib_solution};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::sync::Arc;

#[test]
fn can_solve_problem_using_full_config() {
    let instance = Arc::new(read_problem_file(RANDOM_PROBLEM_PATH.as_ref(), UtilityKind::Weight).unwrap());
    let mut config = read_config(BufReader::new(File::open(FULL_CONFIG_PATH).unwrap())).unwrap();
    config.grasp_mut().iterations = Some(20);
    config.grasp_mut().update_period = Some(5);
    let environment = Arc::new(create_environment(&config, None));

    let solution = solve_instance("random", instance.clone(), &config, environment).unwrap();

    assert_eq!(solution.analysis.runs, 2);
    assert_eq!(solution.analysis.checkpoints.len(), 20);
    let best = solution.best.unwrap();
    assert!(best.is_feasible(instance.as_ref()));
    assert_eq!(solution.analysis.max_best, Some(best.cost()));
}

#[test]
fn can_write_solution_and_report_to_files() {
    let instance = Arc::new(read_problem_file(TOY_PROBLEM_PATH.as_ref(), UtilityKind::Weight).unwrap());
    let config = create_test_config(10, 5, 1);
    let solution_file = tempfile::NamedTempFile::new().unwrap();
    let report_file = tempfile::NamedTempFile::new().unwrap();

    let solution = solve_instance("toy", instance.clone(), &config, create_silent_environment(5)).unwrap();
    let best = solution.best.unwrap();
    write_orlib_solution(instance.as_ref(), &best, &mut BufWriter::new(solution_file.reopen().unwrap())).unwrap();
    write_json_report(
        &SolveReport { instances: vec![solution.analysis] },
        BufWriter::new(report_file.reopen().unwrap()),
    )
    .unwrap();

    let record = read_orlib_solution(BufReader::new(File::open(solution_file.path()).unwrap())).unwrap();
    assert_eq!(record.cost, 12);
    assert_eq!(record.items, vec![0, 1, 3]);
    let report: serde_json::Value =
        serde_json::from_reader(BufReader::new(File::open(report_file.path()).unwrap())).unwrap();
    assert_eq!(report["instances"][0]["maxBest"], 12);
}
