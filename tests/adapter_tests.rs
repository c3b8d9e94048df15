//! Integration tests for the streaming adapters.
//!
//! Adapters are composed with each other and with generators from other
//! modules here; per-adapter edge cases live next to each adapter.

#![cfg(feature = "adapter")]

use resumable::adapter::{
    accumulate, chain, compress, count, cycle, drop_while, filter, filter_negated, flatten, map,
    map_n, map2, pairwise, repeat, slice, star_apply, take_while, zip, zip2,
};
use resumable::generator::{GeneratorState, generate};
use rstest::rstest;
use std::cell::RefCell;
use std::rc::Rc;

// =============================================================================
// Chaining
// =============================================================================

#[rstest]
fn test_chain_yields_first_source_then_second() {
    let values: Vec<i32> = chain([vec![1, 2, 3], vec![4, 5]]).collect();
    assert_eq!(values, vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn test_chain_of_no_sources_completes_immediately() {
    let mut generator = chain(Vec::<Vec<i32>>::new());
    assert_eq!(generator.resume(), Ok(GeneratorState::Complete));
    assert!(generator.resume().unwrap_err().is_exhausted());
}

#[rstest]
fn test_chain_macro_mixes_source_types() {
    let values: Vec<u32> = resumable::chain![
        vec![1u32, 2],
        generate([3u32]),
        count(4u32, 1).take(2),
        repeat(9u32, Some(1)),
    ]
    .collect();
    assert_eq!(values, vec![1, 2, 3, 4, 5, 9]);
}

#[rstest]
fn test_chain_over_generators_is_lazy() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let first_log = Rc::clone(&log);
    let second_log = Rc::clone(&log);
    let first = map(
        move |x: i32| {
            first_log.borrow_mut().push(x);
            x
        },
        [1, 2],
    );
    let second = map(
        move |x: i32| {
            second_log.borrow_mut().push(x);
            x
        },
        [3, 4],
    );
    let mut generator = chain([first.boxed(), second.boxed()]);

    assert_eq!(generator.next(), Some(1));
    assert_eq!(*log.borrow(), vec![1]);
    assert_eq!(generator.next(), Some(2));
    assert_eq!(generator.next(), Some(3));
    assert_eq!(*log.borrow(), vec![1, 2, 3]);
}

#[rstest]
fn test_flatten_over_infinite_outer_source() {
    let blocks = map(|start: u32| start * 10..start * 10 + 2, count(0, 1));
    let values: Vec<u32> = flatten(blocks).take(5).collect();
    assert_eq!(values, vec![0, 1, 10, 11, 20]);
}

// =============================================================================
// Selection
// =============================================================================

#[rstest]
#[case(vec![], vec![], vec![])]
#[case(vec![1, 2, 3, 4], vec![2, 4], vec![1, 3])]
#[case(vec![5, 7], vec![], vec![5, 7])]
fn test_filter_and_negation_partition_source(
    #[case] source: Vec<i32>,
    #[case] expected_even: Vec<i32>,
    #[case] expected_odd: Vec<i32>,
) {
    let is_even = |x: &i32| x % 2 == 0;
    assert_eq!(filter(is_even, source.clone()).collect::<Vec<_>>(), expected_even);
    assert_eq!(filter_negated(is_even, source).collect::<Vec<_>>(), expected_odd);
}

#[rstest]
fn test_take_while_never_pulls_past_failing_element() {
    let pulled = Rc::new(RefCell::new(Vec::new()));
    let record = Rc::clone(&pulled);
    let source = count(1, 1).inspect(move |x: &u32| record.borrow_mut().push(*x));

    let mut generator = take_while(|x: &u32| *x < 3, source);
    assert_eq!(generator.by_ref().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(generator.next(), None);
    assert_eq!(*pulled.borrow(), vec![1, 2, 3]);
}

#[rstest]
fn test_drop_while_forwards_everything_after_first_failure() {
    let values: Vec<i32> = drop_while(|x: &i32| *x < 3, [1, 2, 3, 1, 4]).collect();
    assert_eq!(values, vec![3, 1, 4]);
}

#[rstest]
fn test_compress_keeps_truthy_selectors() {
    assert_eq!(compress([1, 2, 3, 4, 5, 6], [1, 0, 1, 0, 1, 1]), vec![1, 3, 5, 6]);
}

#[rstest]
fn test_compress_accepts_generator_inputs() {
    let selectors = cycle([true, false]);
    assert_eq!(compress(count(0, 1).take(7), selectors), vec![0, 2, 4, 6]);
}

#[rstest]
fn test_compress_with_optional_selectors() {
    let selectors = [Some(()), None, Some(())];
    assert_eq!(compress("xyz".chars(), selectors), vec!['x', 'z']);
}

#[rstest]
fn test_slice_of_infinite_source_completes() {
    let mut generator = slice(count(0u64, 1), 5, Some(8), 1);
    assert_eq!(generator.by_ref().collect::<Vec<_>>(), vec![5, 6, 7]);
    assert!(generator.resume().unwrap_err().is_exhausted());
}

// =============================================================================
// Mapping
// =============================================================================

#[rstest]
fn test_map_n_stops_at_shortest_source() {
    let products: Vec<i64> = map_n(
        |tuple: Vec<i64>| tuple.into_iter().product(),
        [vec![1, 2, 3], vec![4, 5, 6], vec![7, 8]],
    )
    .collect();
    assert_eq!(products, vec![28, 80]);
}

#[rstest]
fn test_map_n_with_infinite_sources() {
    let sums: Vec<u32> = map_n(
        |tuple: Vec<u32>| tuple.iter().sum(),
        [count(0, 1), count(100, 100)],
    )
    .take(3)
    .collect();
    assert_eq!(sums, vec![100, 201, 302]);
}

#[rstest]
fn test_zip_of_no_sources_completes() {
    assert_eq!(zip(Vec::<Vec<u8>>::new()).count(), 0);
}

#[rstest]
fn test_zip_produces_tuples() {
    let rows: Vec<Vec<i32>> = zip([vec![1, 2], vec![3, 4], vec![5, 6]]).collect();
    assert_eq!(rows, vec![vec![1, 3, 5], vec![2, 4, 6]]);
}

#[rstest]
fn test_zip2_and_map2_over_different_types() {
    let pairs: Vec<(char, u32)> = zip2("ab".chars(), count(1, 1)).collect();
    assert_eq!(pairs, vec![('a', 1), ('b', 2)]);

    let repeated: Vec<String> = map2(
        |letter: char, times: usize| letter.to_string().repeat(times),
        "xy".chars(),
        [2, 3],
    )
    .collect();
    assert_eq!(repeated, vec!["xx", "yyy"]);
}

#[rstest]
fn test_star_apply_unpacks_tuples() {
    let labels: Vec<String> = star_apply(
        |name: &str, count: usize, flag: bool| format!("{name}{count}{flag}"),
        [("a", 1, true), ("b", 2, false)],
    )
    .collect();
    assert_eq!(labels, vec!["a1true", "b2false"]);
}

#[rstest]
fn test_star_apply_with_nullary_function() {
    let mut calls = 0;
    let values: Vec<i32> = star_apply(
        || {
            calls += 1;
            calls
        },
        [(), (), ()],
    )
    .collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[rstest]
fn test_accumulate_and_pairwise_compose() {
    let totals = accumulate(|total, x| total + x, [1, 2, 3, 4]);
    let differences: Vec<i32> = pairwise(totals).map(|(a, b)| b - a).collect();
    assert_eq!(differences, vec![2, 3, 4]);
}

// =============================================================================
// Unbounded Sources
// =============================================================================

#[rstest]
fn test_cycle_resumed_seven_times() {
    let mut generator = cycle([1, 2, 3]);
    let values: Vec<i32> = (0..7)
        .map(|_| match generator.resume() {
            Ok(GeneratorState::Yielded(value)) => value,
            other => panic!("cycle stopped early: {other:?}"),
        })
        .collect();
    assert_eq!(values, vec![1, 2, 3, 1, 2, 3, 1]);
}

#[rstest]
fn test_cycle_over_generator_source() {
    let values: Vec<u8> = cycle(take_while(|x: &u8| *x < 2, count(0, 1))).take(5).collect();
    assert_eq!(values, vec![0, 1, 0, 1, 0]);
}

#[rstest]
fn test_repeat_forever_is_bounded_by_consumer() {
    let mut generator = repeat("tick", None);
    for _ in 0..1_000 {
        assert_eq!(generator.next(), Some("tick"));
    }
    assert_eq!(generator.emitted(), 1_000);
}

#[rstest]
fn test_count_with_float_step() {
    let values: Vec<f32> = count(0.5f32, 0.5).take(4).collect();
    assert_eq!(values, vec![0.5, 1.0, 1.5, 2.0]);
}
