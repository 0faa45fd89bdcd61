#[cfg(test)]
#[path = "../../tests/unit/construction/greedy_randomized_test.rs"]
mod greedy_randomized_test;

use crate::models::{Instance, Solution};
use crate::utils::{Float, Random, argsort_desc};

/// Builds a feasible solution by repeatedly picking a random item from the restricted candidate
/// list (RCL) and selecting it if all its constraints are still free.
///
/// `alpha` controls the RCL size: with `0` it contains only the best ranked unprocessed item (pure
/// greedy), with `1` it contains every unprocessed item (pure random).
pub fn construct(instance: &Instance, alpha: Float, random: &dyn Random) -> Solution {
    let mut solution = Solution::empty(instance);
    let mut ranked = argsort_desc(instance.utilities());

    while !ranked.is_empty() && !solution.is_saturated() {
        let candidates = restricted_candidates(instance, ranked.as_slice(), alpha).len();
        let index = if candidates > 0 { random.uniform_int(0, candidates as i32 - 1) as usize } else { 0 };

        let item = ranked.remove(index);
        if solution.can_add(instance, item) {
            solution.add(instance, item);
        }
    }

    solution
}

/// Returns the restricted candidate list: all items from `ranked` (unprocessed items sorted by
/// utility in descending order) which utility is not lower than the threshold defined by `alpha`.
pub fn restricted_candidates<'a>(instance: &Instance, ranked: &'a [usize], alpha: Float) -> &'a [usize] {
    let (Some(&best), Some(&worst)) = (ranked.first(), ranked.last()) else {
        return &[];
    };

    let (u_max, u_min) = (instance.utility(best), instance.utility(worst));
    let limit = match alpha {
        alpha if alpha <= 0. => u_max,
        alpha if alpha >= 1. => u_min,
        alpha => u_max - alpha * (u_max - u_min),
    };

    let size = ranked.partition_point(|&item| instance.utility(item) >= limit);

    &ranked[..size]
}
