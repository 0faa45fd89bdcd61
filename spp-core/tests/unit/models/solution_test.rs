use super::*;
use crate::helpers::models::{create_random_instance, create_toy_instance};

#[test]
fn can_add_and_remove_items() {
    let instance = create_toy_instance();
    let mut solution = Solution::empty(&instance);

    solution.add(&instance, 2);
    assert_eq!(solution.cost(), 6);
    assert_eq!(solution.load(), &[1, 1, 0]);
    assert!(!solution.can_add(&instance, 0));
    assert!(!solution.can_add(&instance, 2));
    assert!(solution.can_add(&instance, 3));

    solution.add(&instance, 3);
    assert!(solution.is_saturated());
    assert_eq!(solution.selected().collect::<Vec<_>>(), vec![2, 3]);

    solution.remove(&instance, 2);
    assert_eq!(solution.cost(), 3);
    assert_eq!(solution.load(), &[0, 0, 1]);
    assert!(!solution.is_saturated());
    assert_eq!(solution.selection(), &[false, false, false, true]);
    assert!(solution.is_feasible(&instance));
}

#[test]
fn can_check_fit_after_removal() {
    let instance = create_toy_instance();
    let solution = Solution::with_items(&instance, &[2, 3]).expect("cannot create solution");

    assert!(solution.fits_without(&instance, 0, 2));
    assert!(solution.fits_without(&instance, 1, 2));
    assert!(!solution.fits_without(&instance, 0, 3));
    assert!(!solution.fits_without(&instance, 2, 3));
}

parameterized_test! {can_reject_invalid_items, (items, expected), {
    can_reject_invalid_items_impl(items, expected);
}}

can_reject_invalid_items! {
    case01_unknown: (vec![0, 4], "unknown item: 4"),
    case02_duplicate: (vec![3, 3], "item 3 is selected twice"),
    case03_conflict: (vec![0, 2], "item 2 violates capacity of a constraint"),
}

fn can_reject_invalid_items_impl(items: Vec<usize>, expected: &str) {
    let instance = create_toy_instance();

    assert_eq!(Solution::with_items(&instance, items.as_slice()), Err(expected.into()));
}

#[test]
fn can_keep_cached_values_consistent_with_random_moves() {
    let instance = create_random_instance(30, 60, 4, 17);
    let mut solution = Solution::empty(&instance);

    for item in 0..instance.items() {
        if solution.can_add(&instance, item) {
            solution.add(&instance, item);
        } else if item % 3 == 0 {
            let conflicting = solution.selected().find(|&selected| instance.conflicts(selected, item));
            if let Some(conflicting) = conflicting {
                solution.remove(&instance, conflicting);
            }
        }

        assert!(solution.is_feasible(&instance));
    }
}
