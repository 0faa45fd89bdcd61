use super::*;

const TOY_PROBLEM_PATH: &str = "../data/spp/toy.dat";
const RANDOM_PROBLEM_PATH: &str = "../data/spp/random_20x40.dat";
const FULL_CONFIG_PATH: &str = "../data/config/config.full.json";

struct DummyWrite {}

impl Write for DummyWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn run_solve_with_out_writer(matches: &ArgMatches) -> Result<(), String> {
    run_solve(matches, |file| match file {
        Some(file) => BufWriter::new(Box::new(file)),
        None => BufWriter::new(Box::new(DummyWrite {})),
    })
}

fn get_toy_matches(params: &[&str]) -> ArgMatches {
    let args = [&["solve", TOY_PROBLEM_PATH], params].concat();

    get_solve_app().try_get_matches_from(args).unwrap()
}

#[test]
fn can_solve_problem_with_iteration_limit() {
    run_solve_with_out_writer(&get_toy_matches(&["--iterations", "10", "--seed", "1"])).unwrap();
}

#[test]
fn can_solve_multiple_problems_sequentially() {
    let args = vec!["solve", TOY_PROBLEM_PATH, RANDOM_PROBLEM_PATH, "-n", "10", "--runs", "2", "--sequential"];
    let matches = get_solve_app().try_get_matches_from(args).unwrap();

    run_solve_with_out_writer(&matches).unwrap();
}

#[test]
fn can_solve_problem_using_config_with_overrides() {
    let matches = get_toy_matches(&["--config", FULL_CONFIG_PATH, "-n", "10", "--shallow", "--threads", "2"]);

    run_solve_with_out_writer(&matches).unwrap();
}

#[test]
fn can_write_solution_and_history() {
    let solution_file = tempfile::NamedTempFile::new().unwrap();
    let history_file = tempfile::NamedTempFile::new().unwrap();
    let result_file = tempfile::NamedTempFile::new().unwrap();
    let matches = get_toy_matches(&[
        "-n",
        "10",
        "--out-solution",
        solution_file.path().to_str().unwrap(),
        "--out-history",
        history_file.path().to_str().unwrap(),
        "--out-result",
        result_file.path().to_str().unwrap(),
    ]);

    run_solve_with_out_writer(&matches).unwrap();

    let solution = std::fs::read_to_string(solution_file.path()).unwrap();
    assert_eq!(solution, "12\n1 2 4\n");
    let history = std::fs::read_to_string(history_file.path()).unwrap();
    assert_eq!(history.lines().count(), 11);
    let result = std::fs::read_to_string(result_file.path()).unwrap();
    assert!(result.contains("\"maxBest\": 12"));
}

#[test]
fn can_reject_solution_output_for_many_problems() {
    let solution_file = tempfile::NamedTempFile::new().unwrap();
    let args = vec![
        "solve",
        TOY_PROBLEM_PATH,
        RANDOM_PROBLEM_PATH,
        "--out-solution",
        solution_file.path().to_str().unwrap(),
    ];
    let matches = get_solve_app().try_get_matches_from(args).unwrap();

    let result = run_solve_with_out_writer(&matches);

    assert_eq!(result, Err("solution output expects a single problem, got: 2".to_string()));
}

#[test]
fn can_require_problem_path() {
    get_solve_app().try_get_matches_from(vec!["solve"]).unwrap_err();
}

#[test]
fn can_return_error_on_invalid_numbers() {
    for arg in ["--iterations", "--runs", "--threads", "--seed", "--max-time"] {
        let result = run_solve_with_out_writer(&get_toy_matches(&[arg, "abc"]));

        assert!(result.unwrap_err().starts_with("cannot get integer value"), "{arg}");
    }
}

#[test]
fn can_return_error_on_missing_problem_file() {
    let matches = get_solve_app().try_get_matches_from(vec!["solve", "../data/spp/unknown.dat"]).unwrap();

    let result = run_solve_with_out_writer(&matches);

    assert!(result.unwrap_err().starts_with("cannot open problem file"));
}

#[test]
fn can_return_error_on_missing_config_file() {
    let result = run_solve_with_out_writer(&get_toy_matches(&["--config", "../data/config/unknown.json"]));

    assert!(result.unwrap_err().starts_with("cannot open config file"));
}
