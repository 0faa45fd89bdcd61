#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::utils::{Float, GenericResult};

/// An objective (weight) value type.
pub type Cost = i64;

/// Represents an immutable set packing problem instance: `m` unit capacity constraints and `n`
/// weighted items where each item consumes one unit of some constraints.
#[derive(Clone, Debug)]
pub struct Instance {
    constraints: usize,
    columns: Vec<Vec<usize>>,
    weights: Vec<Cost>,
    utilities: Vec<Float>,
}

impl Instance {
    /// Creates a new instance of `Instance` using sparse columns of the incidence matrix: for each
    /// item, a list of constraint indices it consumes.
    pub fn new(constraints: usize, columns: Vec<Vec<usize>>, weights: Vec<Cost>, utilities: Vec<Float>) -> Self {
        let columns = columns
            .into_iter()
            .map(|mut column| {
                column.sort_unstable();
                column.dedup();
                column
            })
            .collect();

        Self { constraints, columns, weights, utilities }
    }

    /// Creates a new instance of `Instance` using a dense binary incidence matrix where rows are
    /// constraints and columns are items.
    pub fn from_matrix(matrix: &[Vec<u8>], weights: Vec<Cost>, utilities: Vec<Float>) -> Self {
        let columns = (0..weights.len())
            .map(|item| {
                matrix
                    .iter()
                    .enumerate()
                    .filter(|(_, row)| row.get(item).is_some_and(|&value| value != 0))
                    .map(|(constraint, _)| constraint)
                    .collect()
            })
            .collect();

        Self::new(matrix.len(), columns, weights, utilities)
    }

    /// Returns amount of constraints (`m`).
    pub fn constraints(&self) -> usize {
        self.constraints
    }

    /// Returns amount of items (`n`).
    pub fn items(&self) -> usize {
        self.columns.len()
    }

    /// Returns sorted indices of constraints consumed by the item.
    pub fn item_constraints(&self, item: usize) -> &[usize] {
        self.columns[item].as_slice()
    }

    /// Returns true if the item consumes the constraint.
    pub fn consumes(&self, constraint: usize, item: usize) -> bool {
        self.columns[item].binary_search(&constraint).is_ok()
    }

    /// Returns true if two items share at least one constraint.
    pub fn conflicts(&self, first: usize, second: usize) -> bool {
        let (mut left, mut right) = (self.columns[first].iter().peekable(), self.columns[second].iter().peekable());

        while let (Some(&&a), Some(&&b)) = (left.peek(), right.peek()) {
            match a.cmp(&b) {
                std::cmp::Ordering::Less => {
                    left.next();
                }
                std::cmp::Ordering::Greater => {
                    right.next();
                }
                std::cmp::Ordering::Equal => return true,
            }
        }

        false
    }

    /// Returns the weight (objective coefficient) of the item.
    pub fn weight(&self, item: usize) -> Cost {
        self.weights[item]
    }

    /// Returns all weights.
    pub fn weights(&self) -> &[Cost] {
        self.weights.as_slice()
    }

    /// Returns the utility (ranking key) of the item.
    pub fn utility(&self, item: usize) -> Float {
        self.utilities[item]
    }

    /// Returns all utilities.
    pub fn utilities(&self) -> &[Float] {
        self.utilities.as_slice()
    }

    /// Checks that instance dimensions are consistent. The search itself does not call it, so it
    /// should be done by the caller once the instance is created.
    pub fn validate(&self) -> GenericResult<()> {
        let items = self.items();

        if items == 0 || self.constraints == 0 {
            return Err(format!("empty instance: {} constraints, {} items", self.constraints, items).into());
        }

        if self.weights.len() != items || self.utilities.len() != items {
            return Err(format!(
                "inconsistent dimensions: {items} items, {} weights, {} utilities",
                self.weights.len(),
                self.utilities.len()
            )
            .into());
        }

        if let Some(item) = self.weights.iter().position(|&weight| weight < 0) {
            return Err(format!("negative weight of item {item}").into());
        }

        if let Some(item) = self.utilities.iter().position(|utility| !utility.is_finite()) {
            return Err(format!("non finite utility of item {item}").into());
        }

        if let Some(item) = self.columns.iter().position(|column| column.iter().any(|&c| c >= self.constraints)) {
            return Err(format!("item {item} refers to unknown constraint").into());
        }

        Ok(())
    }
}
