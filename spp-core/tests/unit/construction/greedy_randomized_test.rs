use super::*;
use crate::helpers::models::{create_instance, create_random_instance, create_toy_instance};
use crate::helpers::utils::{EchoRandom, FakeRandom};
use crate::utils::SeededRandom;

#[test]
fn can_construct_greedy_solution_for_toy_instance() {
    let instance = create_toy_instance();

    let solution = construct(&instance, 0., &EchoRandom::new(false));

    assert_eq!(solution.selection(), &[false, false, true, true]);
    assert_eq!(solution.cost(), 9);
    assert_eq!(solution.load(), &[1, 1, 1]);
}

#[test]
fn can_pick_random_candidates_with_max_alpha() {
    let instance = create_toy_instance();
    // ranked: [2, 0, 1, 3], picks: 0 (rcl index 1), then 3 (rcl index 2 of [2, 1, 3]), then 2 (rejected), then 1
    let random = FakeRandom::new(vec![1, 2, 0, 0], vec![]);

    let solution = construct(&instance, 1., &random);

    assert_eq!(solution.selection(), &[true, true, false, true]);
    assert_eq!(solution.cost(), 12);
}

#[test]
fn can_stop_when_all_constraints_are_saturated() {
    // item 1 saturates everything, so items 0 and 2 are never processed
    let instance = create_instance(&[vec![1, 1, 0], vec![0, 1, 1]], &[1, 10, 2]);
    let random = FakeRandom::new(vec![0], vec![]);

    let solution = construct(&instance, 0., &random);

    assert_eq!(solution.selection(), &[false, true, false]);
    assert!(solution.is_saturated());
}

parameterized_test! {can_get_restricted_candidates, (alpha, expected), {
    can_get_restricted_candidates_impl(alpha, expected);
}}

can_get_restricted_candidates! {
    case01_greedy: (0., vec![2]),
    case02_half: (0.5, vec![2, 0]),
    case03_almost_all: (0.99, vec![2, 0, 1]),
    case04_random: (1., vec![2, 0, 1, 3]),
    case05_below_range: (-1., vec![2]),
}

fn can_get_restricted_candidates_impl(alpha: Float, expected: Vec<usize>) {
    let instance = create_toy_instance();
    let ranked = vec![2, 0, 1, 3];

    assert_eq!(restricted_candidates(&instance, ranked.as_slice(), alpha), expected.as_slice());
}

#[test]
fn can_get_empty_restricted_candidates_for_no_items() {
    assert!(restricted_candidates(&create_toy_instance(), &[], 0.5).is_empty());
}

#[test]
fn can_admit_ties_of_best_utility_with_zero_alpha() {
    let instance = create_instance(&[vec![1, 1, 1]], &[3, 3, 1]);

    assert_eq!(restricted_candidates(&instance, &[0, 1, 2], 0.), &[0, 1]);
}

#[test]
fn can_always_construct_feasible_solutions() {
    let random = SeededRandom::new(3);

    (0..20).for_each(|seed| {
        let instance = create_random_instance(25, 80, 5, seed);

        [0., 0.1, 0.5, 0.9, 1.].iter().for_each(|&alpha| {
            let solution = construct(&instance, alpha, &random);

            assert!(solution.is_feasible(&instance));
            assert!(solution.load().iter().all(|&load| load <= 1));
            // construction is maximal: nothing can be added afterwards
            assert!((0..instance.items()).all(|item| !solution.can_add(&instance, item)));
        });
    });
}
