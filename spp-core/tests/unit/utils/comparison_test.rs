use super::*;

#[test]
fn can_compare_floats_with_nan() {
    assert_eq!(compare_floats(1., 2.), Ordering::Less);
    assert_eq!(compare_floats(2., 2.), Ordering::Equal);
    assert_eq!(compare_floats(Float::NAN, 2.), Ordering::Greater);
    assert_eq!(compare_floats(2., Float::NAN), Ordering::Less);
    assert_eq!(compare_floats(Float::NAN, Float::NAN), Ordering::Equal);
}

#[test]
fn can_argsort_in_descending_order() {
    assert_eq!(argsort_desc(&[5., 4., 6., 3.]), vec![2, 0, 1, 3]);
}

#[test]
fn can_keep_original_order_of_equal_values() {
    assert_eq!(argsort_desc(&[1., 3., 1., 3.]), vec![1, 3, 0, 2]);
    assert!(argsort_desc(&[]).is_empty());
}
