use super::*;
use crate::helpers::models::{create_instance, create_toy_instance};

parameterized_test! {can_add_item, (is_deep, expected), {
    can_add_item_impl(is_deep, expected);
}}

can_add_item! {
    case01_first_improvement: (false, vec![0]),
    case02_best_improvement: (true, vec![1]),
}

fn can_add_item_impl(is_deep: bool, expected: Vec<usize>) {
    let instance = create_instance(&[vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]], &[1, 5, 5]);
    let mut solution = Solution::empty(&instance);

    let is_applied = ZeroOneExchange::default().try_apply(&instance, &mut solution, is_deep);

    assert!(is_applied);
    assert_eq!(solution.selected().collect::<Vec<_>>(), expected);
}

#[test]
fn can_skip_items_without_weight() {
    let instance = create_instance(&[vec![1, 0], vec![0, 1]], &[3, 0]);
    let mut solution = Solution::with_items(&instance, &[0]).expect("cannot create solution");

    assert!(!ZeroOneExchange::default().try_apply(&instance, &mut solution, true));
    assert_eq!(solution.cost(), 3);
}

#[test]
fn can_detect_maximal_solution() {
    let instance = create_toy_instance();
    let mut solution = Solution::with_items(&instance, &[2, 3]).expect("cannot create solution");

    assert!(!ZeroOneExchange::default().try_apply(&instance, &mut solution, false));
    assert_eq!(solution.selected().collect::<Vec<_>>(), vec![2, 3]);
}
