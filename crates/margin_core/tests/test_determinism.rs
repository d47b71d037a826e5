//! Evaluation is pure: repeatable bit-for-bit and safe to run in parallel.

use std::thread;

use margin_core::{
    Label, LabelField, MarginSchedule, Outcome, RateTable, default_schedule,
    evaluate_margin_indicators,
};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_public_types_are_send_and_sync() {
    assert_send_sync::<MarginSchedule>();
    assert_send_sync::<RateTable>();
    assert_send_sync::<Label>();
    assert_send_sync::<LabelField>();
    assert_send_sync::<Outcome>();
}

fn sample_inputs() -> Vec<(f64, i64, i64)> {
    let amounts = [0.0, 7.25, 20.0, 20.01, 49.99, 50.0, 73.1, 100.0, 199.5, 200.01, 4_321.0];
    let mut inputs = Vec::new();
    for amount in amounts {
        for predicted in 0..=1 {
            for actual in 0..=1 {
                inputs.push((amount, predicted, actual));
            }
        }
    }
    inputs
}

fn bits_for(inputs: &[(f64, i64, i64)]) -> Vec<u64> {
    inputs
        .iter()
        .map(|&(amount, predicted, actual)| {
            evaluate_margin_indicators(amount, predicted, actual)
                .expect("valid input")
                .to_bits()
        })
        .collect()
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let inputs = sample_inputs();
    let first = bits_for(&inputs);
    for _ in 0..10 {
        assert_eq!(bits_for(&inputs), first);
    }
}

#[test]
fn test_parallel_evaluation_matches_sequential() {
    let inputs = sample_inputs();
    let expected = bits_for(&inputs);

    let results: Vec<Vec<u64>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| bits_for(&inputs)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("worker thread panicked"))
            .collect()
    });

    for got in results {
        assert_eq!(got, expected);
    }
}

#[test]
fn test_default_schedule_is_shared_and_standard() {
    let a = default_schedule();
    let b = default_schedule();
    assert!(std::ptr::eq(a, b));
    assert_eq!(*a, MarginSchedule::standard());
}
