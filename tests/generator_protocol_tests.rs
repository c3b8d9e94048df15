//! Integration tests for the resumption protocol of the generator core.
//!
//! Covers the completion signal, exhaustion errors, poisoning, the fused
//! iterator surface, and fiber-encoded bodies.

use resumable::generator::{
    BoxGenerator, Coroutine, ExhaustedError, Fiber, Generator, GeneratorError, GeneratorState,
    GeneratorStatus, generate,
};
use rstest::rstest;
use std::cell::Cell;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

/// A hand-written body counting from zero to `end` in steps of `step`.
struct Stepper {
    current: u32,
    end: u32,
    step: u32,
}

impl Coroutine for Stepper {
    type Yield = u32;

    fn resume(&mut self) -> GeneratorState<u32> {
        if self.current >= self.end {
            return GeneratorState::Complete;
        }
        let value = self.current;
        self.current += self.step;
        GeneratorState::Yielded(value)
    }

    fn name(&self) -> &'static str {
        "stepper"
    }
}

fn stepper(end: u32, step: u32) -> Generator<Stepper> {
    Generator::new(Stepper {
        current: 0,
        end,
        step,
    })
}

// =============================================================================
// Completion and Exhaustion
// =============================================================================

#[rstest]
fn test_custom_coroutine_follows_protocol() {
    let mut generator = stepper(5, 2);
    assert_eq!(generator.status(), GeneratorStatus::Created);
    assert_eq!(generator.resume(), Ok(GeneratorState::Yielded(0)));
    assert_eq!(generator.status(), GeneratorStatus::Suspended);
    assert_eq!(generator.resume(), Ok(GeneratorState::Yielded(2)));
    assert_eq!(generator.resume(), Ok(GeneratorState::Yielded(4)));
    assert_eq!(generator.resume(), Ok(GeneratorState::Complete));
    assert_eq!(generator.status(), GeneratorStatus::Complete);
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(10)]
fn test_exhaustion_is_reported_every_time(#[case] attempts: usize) {
    let mut generator = stepper(2, 1);
    let _: Vec<u32> = generator.by_ref().collect();

    for _ in 0..attempts {
        assert_eq!(
            generator.resume(),
            Err(GeneratorError::Exhausted(ExhaustedError {
                generator_name: "stepper",
                emitted: 2,
            }))
        );
    }
}

#[rstest]
fn test_exhaustion_message_names_generator() {
    let mut generator = generate([1, 2, 3]);
    while generator.next().is_some() {}
    let message = generator.resume().unwrap_err().to_string();
    assert!(message.contains("iterable"), "{message}");
    assert!(message.contains("3 values emitted"), "{message}");
}

#[rstest]
fn test_empty_generator_completes_on_first_resumption() {
    let mut generator = generate(Vec::<String>::new());
    assert_eq!(generator.resume(), Ok(GeneratorState::Complete));
    assert_eq!(generator.emitted(), 0);
    assert!(generator.resume().unwrap_err().is_exhausted());
}

#[rstest]
fn test_driving_loop_matches_manual_resumption() {
    let mut manual = Vec::new();
    let mut generator = stepper(10, 3);
    while let Ok(GeneratorState::Yielded(value)) = generator.resume() {
        manual.push(value);
    }

    let driven: Vec<u32> = stepper(10, 3).collect();
    assert_eq!(manual, driven);
}

#[rstest]
fn test_iterator_is_fused_after_completion() {
    let mut generator = generate("ab".chars());
    assert_eq!(generator.next(), Some('a'));
    assert_eq!(generator.next(), Some('b'));
    assert_eq!(generator.next(), None);
    assert_eq!(generator.next(), None);
    assert!(generator.is_complete());
}

// =============================================================================
// Laziness and Interleaving
// =============================================================================

#[rstest]
fn test_body_runs_only_on_resumption() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let mut generator = Generator::from_fn(move || {
        counter.set(counter.get() + 1);
        (counter.get() <= 2).then(|| counter.get())
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(generator.next(), Some(1));
    assert_eq!(calls.get(), 1);
    assert_eq!(generator.next(), Some(2));
    assert_eq!(generator.next(), None);
    assert_eq!(calls.get(), 3);
    assert_eq!(generator.next(), None);
    assert_eq!(calls.get(), 3);
}

#[rstest]
fn test_interleaved_generators_keep_their_own_sequences() {
    let mut evens = stepper(8, 2);
    let mut threes = stepper(10, 3);
    let mut interleaved = Vec::new();
    loop {
        let left = evens.next();
        let right = threes.next();
        if left.is_none() && right.is_none() {
            break;
        }
        interleaved.push((left, right));
    }
    assert_eq!(
        interleaved,
        vec![
            (Some(0), Some(0)),
            (Some(2), Some(3)),
            (Some(4), Some(6)),
            (Some(6), Some(9)),
        ]
    );
}

// =============================================================================
// Poisoning
// =============================================================================

#[rstest]
fn test_panic_in_body_poisons_only_that_generator() {
    let mut faulty = Generator::from_fn(|| -> Option<u8> { panic!("body failed") });
    let healthy = generate([1u8, 2]);

    let outcome = catch_unwind(AssertUnwindSafe(|| faulty.resume()));
    assert!(outcome.is_err());
    assert_eq!(faulty.status(), GeneratorStatus::Running);
    assert!(matches!(
        faulty.resume(),
        Err(GeneratorError::Poisoned {
            generator_name: "from_fn"
        })
    ));
    assert_eq!(faulty.next(), None);

    assert_eq!(healthy.collect::<Vec<_>>(), vec![1, 2]);
}

// =============================================================================
// Type Erasure
// =============================================================================

#[rstest]
fn test_boxed_generators_share_one_type() {
    let generators: Vec<BoxGenerator<'static, u32>> = vec![
        stepper(3, 1).boxed(),
        generate(vec![7, 8]).boxed(),
        Fiber::once(42).into_generator().boxed(),
    ];
    let values: Vec<u32> = generators.into_iter().flatten().collect();
    assert_eq!(values, vec![0, 1, 2, 7, 8, 42]);
}

// =============================================================================
// Fiber Bodies
// =============================================================================

fn fibonacci(current: u64, next: u64) -> Fiber<u64> {
    Fiber::emit(current, move || fibonacci(next, current + next))
}

fn collatz(value: u64) -> Fiber<u64> {
    if value == 1 {
        Fiber::once(1)
    } else if value % 2 == 0 {
        Fiber::emit(value, move || collatz(value / 2))
    } else {
        Fiber::emit(value, move || collatz(3 * value + 1))
    }
}

#[rstest]
fn test_fiber_keeps_local_state_in_closures() {
    let values: Vec<u64> = fibonacci(0, 1).into_generator().take(10).collect();
    assert_eq!(values, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
}

#[rstest]
fn test_fiber_completes_then_reports_exhaustion() {
    let mut generator = collatz(6).into_generator();
    let values: Vec<u64> = generator.by_ref().collect();
    assert_eq!(values, vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);
    assert_eq!(generator.emitted(), 9);
    assert!(generator.resume().unwrap_err().is_exhausted());
}

#[rstest]
fn test_long_suspend_chain_does_not_overflow() {
    fn skip(remaining: u32) -> Fiber<u32> {
        if remaining == 0 {
            Fiber::once(0)
        } else {
            Fiber::suspend(move || skip(remaining - 1))
        }
    }

    let mut generator = skip(200_000).into_generator();
    assert_eq!(generator.resume(), Ok(GeneratorState::Yielded(0)));
    assert_eq!(generator.resume(), Ok(GeneratorState::Complete));
}

#[rstest]
fn test_fiber_then_sequences_bodies() {
    let body = collatz(4).then(|| Fiber::once(99));
    let values: Vec<u64> = body.into_generator().collect();
    assert_eq!(values, vec![4, 2, 1, 99]);
}
