#[cfg(test)]
#[path = "../../tests/unit/search/exchange_one_one_test.rs"]
mod exchange_one_one_test;

use super::*;

/// A one-for-one exchange: replaces one selected item with a heavier unselected one which fits
/// once the first is removed.
#[derive(Default)]
pub struct OneOneExchange {}

impl MoveOperator for OneOneExchange {
    fn try_apply(&self, instance: &Instance, solution: &mut Solution, is_deep: bool) -> bool {
        let state = &*solution;
        let moves = state.selected().flat_map(|removed| {
            let removed_weight = instance.weight(removed);

            (0..instance.items())
                .filter(move |&added| {
                    instance.weight(added) > removed_weight && state.fits_without(instance, added, removed)
                })
                .map(move |added| (instance.weight(added) - removed_weight, (removed, added)))
        });

        match select_move(moves, is_deep) {
            Some((removed, added)) => {
                solution.remove(instance, removed);
                solution.add(instance, added);
                true
            }
            None => false,
        }
    }
}
