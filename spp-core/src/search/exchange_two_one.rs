#[cfg(test)]
#[path = "../../tests/unit/search/exchange_two_one_test.rs"]
mod exchange_two_one_test;

use super::*;
use std::cmp::Reverse;

/// A two-for-one exchange: replaces one selected item with two mutually compatible unselected
/// items which fit once the first is removed and weigh more in total.
#[derive(Default)]
pub struct TwoOneExchange {}

struct Exchange {
    gain: Cost,
    removed: usize,
    added: (usize, usize),
}

impl MoveOperator for TwoOneExchange {
    fn try_apply(&self, instance: &Instance, solution: &mut Solution, is_deep: bool) -> bool {
        let mut best: Option<Exchange> = None;

        'search: for removed in solution.selected().collect::<Vec<_>>() {
            let removed_weight = instance.weight(removed);

            let mut fitting = (0..instance.items())
                .filter(|&item| solution.fits_without(instance, item, removed))
                .collect::<Vec<_>>();
            fitting.sort_by_key(|&item| Reverse(instance.weight(item)));

            for (idx, &first) in fitting.iter().enumerate() {
                let first_weight = instance.weight(first);

                // NOTE items are sorted by weight, so no later pair can be improving
                if fitting.get(idx + 1).is_none_or(|&second| first_weight + instance.weight(second) <= removed_weight)
                {
                    break;
                }

                for &second in fitting[idx + 1..].iter() {
                    let gain = first_weight + instance.weight(second) - removed_weight;
                    if gain <= 0 || best.as_ref().is_some_and(|best| best.gain >= gain) {
                        break;
                    }

                    if instance.conflicts(first, second) {
                        continue;
                    }

                    best = Some(Exchange { gain, removed, added: (first, second) });

                    if !is_deep {
                        break 'search;
                    }
                }
            }
        }

        match best {
            Some(Exchange { removed, added: (first, second), .. }) => {
                solution.remove(instance, removed);
                solution.add(instance, first);
                solution.add(instance, second);
                true
            }
            None => false,
        }
    }
}
