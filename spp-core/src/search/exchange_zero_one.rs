#[cfg(test)]
#[path = "../../tests/unit/search/exchange_zero_one_test.rs"]
mod exchange_zero_one_test;

use super::*;

/// A zero-for-one exchange (addition): selects one more item which fits into free constraints.
#[derive(Default)]
pub struct ZeroOneExchange {}

impl MoveOperator for ZeroOneExchange {
    fn try_apply(&self, instance: &Instance, solution: &mut Solution, is_deep: bool) -> bool {
        let state = &*solution;
        let moves = (0..instance.items())
            .filter(|&item| instance.weight(item) > 0 && state.can_add(instance, item))
            .map(|item| (instance.weight(item), item));

        match select_move(moves, is_deep) {
            Some(item) => {
                solution.add(instance, item);
                true
            }
            None => false,
        }
    }
}
