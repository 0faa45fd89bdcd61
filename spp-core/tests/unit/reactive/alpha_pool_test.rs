use super::*;
use crate::helpers::utils::FakeRandom;

fn create_pool_with_samples(samples: &[(usize, Cost)], delta: Float) -> AlphaPool {
    let mut pool = AlphaPool::new(vec![0., 0.5, 1.], delta);
    samples.iter().for_each(|&(alpha_idx, cost)| pool.accept(alpha_idx, cost));

    pool
}

#[test]
fn can_create_uniform_probabilities() {
    let pool = AlphaPool::new(vec![0., 0.5, 1.], 4.);

    assert_eq!(pool.probabilities(), &[1. / 3., 1. / 3., 1. / 3.]);
    assert_eq!(pool.alpha(1), 0.5);
}

#[test]
fn can_update_probabilities_from_batch_means() {
    let mut pool = create_pool_with_samples(&[(0, 10), (1, 20), (2, 30), (1, 20)], 4.);

    let is_updated = pool.update();

    let probabilities = pool.probabilities();
    assert!(is_updated);
    assert_eq!(probabilities[0], 0.);
    assert!(probabilities[2] > probabilities[1]);
    assert!((probabilities[1] - 0.0625 / 1.0625).abs() < 1E-9);
    assert!((probabilities.iter().sum::<Float>() - 1.).abs() < 1E-9);
}

#[test]
fn can_use_batch_minimum_for_alpha_without_samples() {
    let mut pool = create_pool_with_samples(&[(0, 10), (0, 20), (2, 20)], 1.);

    pool.update();

    // means: 15, none (10 as batch minimum), 20
    let probabilities = pool.probabilities();
    assert!((probabilities[0] - 1. / 3.).abs() < 1E-9);
    assert_eq!(probabilities[1], 0.);
    assert!((probabilities[2] - 2. / 3.).abs() < 1E-9);
}

parameterized_test! {can_keep_previous_probabilities_when_valuations_are_zero, samples, {
    can_keep_previous_probabilities_when_valuations_are_zero_impl(samples);
}}

can_keep_previous_probabilities_when_valuations_are_zero! {
    case01_same_objective: vec![(0, 5), (1, 5), (2, 5)],
    case02_single_sample: vec![(1, 7)],
    case03_no_samples: vec![],
}

fn can_keep_previous_probabilities_when_valuations_are_zero_impl(samples: Vec<(usize, Cost)>) {
    let original = vec![0.1, 0.6, 0.3];
    let mut pool = AlphaPool::new_with_probabilities(vec![0., 0.5, 1.], original.clone(), 4.);
    samples.iter().for_each(|&(alpha_idx, cost)| pool.accept(alpha_idx, cost));

    let is_updated = pool.update();

    assert!(!is_updated);
    assert_eq!(
        pool.probabilities().iter().map(|p| p.to_bits()).collect::<Vec<_>>(),
        original.iter().map(|p| p.to_bits()).collect::<Vec<_>>()
    );
}

#[test]
fn can_clear_samples_after_update() {
    let mut pool = create_pool_with_samples(&[(0, 10), (2, 30)], 4.);
    assert!(pool.update());
    let probabilities = pool.probabilities().to_vec();

    assert!(!pool.update());
    assert_eq!(pool.probabilities(), probabilities.as_slice());
}

#[test]
fn can_get_same_probabilities_regardless_of_sample_order() {
    let samples = vec![(0, 13), (1, 21), (2, 34), (1, 8), (0, 55), (2, 3), (1, 89)];
    let reversed = samples.iter().rev().cloned().collect::<Vec<_>>();

    let mut original = create_pool_with_samples(samples.as_slice(), 4.);
    let mut reversed = create_pool_with_samples(reversed.as_slice(), 4.);
    original.update();
    reversed.update();

    assert_eq!(original.probabilities(), reversed.probabilities());
}

#[test]
fn can_get_uniform_probabilities_with_zero_delta() {
    let mut pool = create_pool_with_samples(&[(0, 10), (1, 20)], 0.);

    pool.update();

    assert_eq!(pool.probabilities(), &[1. / 3., 1. / 3., 1. / 3.]);
}

parameterized_test! {can_sample_alpha, (probabilities, threshold, expected), {
    can_sample_alpha_impl(probabilities, threshold, expected);
}}

can_sample_alpha! {
    case01_first: (vec![0.2, 0.3, 0.5], 0.1, 0),
    case02_boundary: (vec![0.2, 0.3, 0.5], 0.2, 1),
    case03_last: (vec![0.2, 0.3, 0.5], 0.75, 2),
    case04_skip_zero: (vec![0., 1., 0.], 0., 1),
    case05_rounding: (vec![0.3, 0.3, 0.3], 0.95, 2),
}

fn can_sample_alpha_impl(probabilities: Vec<Float>, threshold: Float, expected: usize) {
    let pool = AlphaPool::new_with_probabilities(vec![0., 0.5, 1.], probabilities, 4.);

    let alpha_idx = pool.sample(&FakeRandom::new(vec![], vec![threshold]));

    assert_eq!(alpha_idx, expected);
}

#[test]
fn can_sample_uniformly_when_probabilities_are_zero() {
    let pool = AlphaPool::new_with_probabilities(vec![0., 0.5, 1.], vec![0., 0., 0.], 4.);

    let alpha_idx = pool.sample(&FakeRandom::new(vec![1], vec![]));

    assert_eq!(alpha_idx, 1);
}
