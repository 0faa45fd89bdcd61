//! A command line interface to *Set Packing Problem* solver.
//!

mod commands;

use self::commands::check::{get_check_app, run_check};
use self::commands::create_write_buffer;
use self::commands::solve::{get_solve_app, run_solve};
use clap::Command;
use std::process;

fn main() {
    let matches = get_app().get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        Some(("check", check_matches)) => run_check(check_matches),
        Some((name, _)) => Err(format!("unknown subcommand: '{name}'")),
        None => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn get_app() -> Command {
    Command::new("Set Packing Problem Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to Set Packing Problem solver")
        .subcommand(get_solve_app())
        .subcommand(get_check_app())
}
