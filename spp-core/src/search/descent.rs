#[cfg(test)]
#[path = "../../tests/unit/search/descent_test.rs"]
mod descent_test;

use super::*;
use std::sync::Arc;

/// A variable neighborhood descent: each pass applies every operator while it improves and then
/// falls back to the next one. Passes are repeated until the solution is a local optimum for all
/// operators.
pub struct VariableNeighborhoodDescent {
    operators: Vec<Arc<dyn MoveOperator + Send + Sync>>,
}

impl VariableNeighborhoodDescent {
    /// Creates a new instance of `VariableNeighborhoodDescent`. Operators are explored in the
    /// given order: an operator is applied repeatedly while it improves, then the next one is tried.
    pub fn new(operators: Vec<Arc<dyn MoveOperator + Send + Sync>>) -> Self {
        Self { operators }
    }

    /// Improves the solution until it becomes a local optimum with respect to all operators.
    /// Returns true if the objective value has increased.
    pub fn improve(&self, instance: &Instance, solution: &mut Solution, is_deep: bool) -> bool {
        let initial_cost = solution.cost();

        loop {
            let mut is_restart_needed = false;
            let mut level = 0;

            while let Some(operator) = self.operators.get(level) {
                if operator.try_apply(instance, solution, is_deep) {
                    // a move found by a later operator can open moves for the earlier ones
                    is_restart_needed |= level > 0;
                } else {
                    level += 1;
                }
            }

            if !is_restart_needed {
                break;
            }
        }

        solution.cost() > initial_cost
    }
}

impl Default for VariableNeighborhoodDescent {
    fn default() -> Self {
        Self::new(vec![
            Arc::new(TwoOneExchange::default()),
            Arc::new(OneOneExchange::default()),
            Arc::new(ZeroOneExchange::default()),
        ])
    }
}

/// Improves the solution using the default descent over two-for-one, one-for-one and zero-for-one
/// exchanges. Returns true if the objective value has increased.
pub fn improve(instance: &Instance, solution: &mut Solution, is_deep: bool) -> bool {
    VariableNeighborhoodDescent::default().improve(instance, solution, is_deep)
}
