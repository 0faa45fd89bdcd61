#[cfg(test)]
#[path = "../../tests/unit/orlib/reader_test.rs"]
mod reader_test;

use crate::common::TokenReader;
use spp_core::models::{Cost, Instance};
use spp_core::utils::{Float, GenericError, GenericResult};
use std::io::{BufReader, Read};
use std::str::FromStr;

/// Specifies how item utility (a ranking key of the greedy construction) is derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UtilityKind {
    /// Utility equals item weight.
    #[default]
    Weight,
    /// Utility is item weight divided by amount of constraints the item consumes.
    Density,
}

impl UtilityKind {
    /// Evaluates utilities of items given their weights and consumed constraints.
    pub fn evaluate(&self, weights: &[Cost], columns: &[Vec<usize>]) -> Vec<Float> {
        match self {
            UtilityKind::Weight => weights.iter().map(|&weight| weight as Float).collect(),
            UtilityKind::Density => weights
                .iter()
                .zip(columns.iter())
                .map(|(&weight, column)| weight as Float / column.len().max(1) as Float)
                .collect(),
        }
    }
}

impl FromStr for UtilityKind {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "weight" => Ok(UtilityKind::Weight),
            "density" => Ok(UtilityKind::Density),
            _ => Err(format!("unknown utility kind: '{value}', expected 'weight' or 'density'").into()),
        }
    }
}

/// A trait to read set packing problem in OR-library format.
pub trait OrlibProblem {
    /// Reads the problem and derives item utilities of given kind.
    fn read_orlib(self, utility: UtilityKind) -> GenericResult<Instance>;
}

impl<R: Read> OrlibProblem for BufReader<R> {
    fn read_orlib(self, utility: UtilityKind) -> GenericResult<Instance> {
        read_orlib_format(self, utility)
    }
}

impl OrlibProblem for String {
    fn read_orlib(self, utility: UtilityKind) -> GenericResult<Instance> {
        read_orlib_format(BufReader::new(self.as_bytes()), utility)
    }
}

fn read_orlib_format<R: Read>(reader: BufReader<R>, utility: UtilityKind) -> GenericResult<Instance> {
    let mut tokens = TokenReader::new(reader);

    let constraints = tokens.next::<usize>("amount of constraints")?;
    let items = tokens.next::<usize>("amount of items")?;
    let weights = tokens.next_many::<Cost>(items, "item weight")?;

    let mut columns = vec![Vec::<usize>::new(); items];
    for constraint in 1..=constraints {
        let size = tokens.next::<usize>(format!("size of constraint {constraint}").as_str())?;

        for item in tokens.next_many::<usize>(size, format!("item of constraint {constraint}").as_str())? {
            if !(1..=items).contains(&item) {
                return Err(format!("item {item} of constraint {constraint} is out of range 1..={items}").into());
            }

            columns[item - 1].push(constraint - 1);
        }
    }

    if !tokens.is_empty()? {
        return Err("unexpected data after the last constraint".into());
    }

    let utilities = utility.evaluate(weights.as_slice(), columns.as_slice());
    let instance = Instance::new(constraints, columns, weights, utilities);
    instance.validate()?;

    Ok(instance)
}
