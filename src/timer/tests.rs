//! Timing semantics checked against a `ManualClock`, where every call's cost
//! is known exactly.

use std::{sync::Arc, time::Duration};

use crate::{time::ManualClock, util::test_subscriber::EventHook};

use super::*;

fn reps(n: u64) -> Reps {
    Reps::new(n).unwrap()
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Returns a target that advances `clock` by the next cost (in milliseconds,
/// cycling) and returns its call index.
fn costed<'a>(clock: &'a ManualClock, costs: &'a [u64]) -> impl FnMut() -> usize + 'a {
    let mut calls = 0;
    move || {
        clock.advance(ms(costs[calls % costs.len()]));
        calls += 1;
        calls - 1
    }
}

#[test]
fn total_returns_last_result() {
    let timer: Timer = Timer::default();

    let m = timer.total(reps(3), || 1 + 1);
    assert_eq!(m.result, 2);
    assert!(m.secs() >= 0.0);
}

#[test]
fn total_calls_in_order() {
    let timer: Timer = Timer::default();
    let mut seen = Vec::new();

    let m = timer.total(reps(4), || {
        seen.push(seen.len());
        seen.len()
    });

    assert_eq!(seen, [0, 1, 2, 3]);
    assert_eq!(m.result, 4);
}

#[test]
fn total_sums_costs() {
    let clock = ManualClock::new();
    let timer = Timer::new(&clock);

    let m = timer.total(reps(4), costed(&clock, &[1, 2, 3, 4]));
    assert_eq!(m.duration, ms(10));
    assert_eq!(m.result, 3);
}

#[test]
fn total_reads_clock_twice() {
    let clock = ManualClock::with_tick(Duration::from_nanos(1));
    let timer = Timer::new(&clock);

    for n in [1, 10, 1000] {
        let m = timer.total(reps(n), || ());
        assert_eq!(m.duration, Duration::from_nanos(1), "reps = {n}");
    }
}

#[test]
fn bestof_takes_fastest_call() {
    let clock = ManualClock::new();
    let timer = Timer::new(&clock);

    let m = timer.bestof(reps(5), costed(&clock, &[5, 3, 8, 4, 7]));
    assert_eq!(m.duration, ms(3));

    // The result comes from the last call, not the fastest one.
    assert_eq!(m.result, 4);
}

#[test]
fn bestof_matches_self_recorded_costs() {
    let clock = ManualClock::new();
    let timer = Timer::new(&clock);
    let mut recorded = Vec::new();
    let mut cost = 1;

    let m = timer.bestof(reps(5), || {
        // Vary the cost between calls.
        let this = (cost * cost) % 11 + 1;
        cost += 1;

        let start = clock.peek();
        clock.advance(ms(this));
        recorded.push(clock.peek() - start);
    });

    assert_eq!(recorded.len(), 5);
    assert_eq!(Some(&m.duration), recorded.iter().min());
}

#[test]
fn bestof_within_call_bounds() {
    let clock = ManualClock::new();
    let timer = Timer::new(&clock);
    let costs = [9, 2, 6, 2, 11, 5];

    let m = timer.bestof(reps(costs.len() as u64), costed(&clock, &costs));

    let fastest = ms(*costs.iter().min().unwrap());
    let slowest = ms(*costs.iter().max().unwrap());
    assert!(m.duration >= fastest && m.duration <= slowest);
}

#[test]
fn single_rep_modes_agree() {
    let total_clock = ManualClock::new();
    let bestof_clock = ManualClock::new();

    let total = Timer::new(&total_clock).total(Reps::ONE, costed(&total_clock, &[7]));
    let bestof = Timer::new(&bestof_clock).bestof(Reps::ONE, costed(&bestof_clock, &[7]));

    assert_eq!(total, bestof);
}

#[test]
fn bestof_not_above_average() {
    let clock = ManualClock::new();
    let timer = Timer::new(&clock);
    let n = 5;

    let bestof = timer.bestof(reps(n), costed(&clock, &[4]));
    let total = timer.total(reps(n), costed(&clock, &[4]));

    assert!(bestof.duration <= total.duration / n as u32);
}

#[test]
fn bestoftotal_composes() {
    let costs = [3, 1, 4, 1, 5, 9, 2, 6];

    for (outer, inner) in [(1, 1), (3, 2), (4, 5)] {
        let composed_clock = ManualClock::new();
        let timer = Timer::new(&composed_clock);
        let mut target = costed(&composed_clock, &costs);
        let composed = timer.bestof(reps(outer), || timer.total(reps(inner), &mut target));

        let clock = ManualClock::new();
        let m = Timer::new(&clock).bestoftotal(reps(outer), reps(inner), costed(&clock, &costs));

        assert_eq!(m.duration, composed.duration, "outer = {outer}, inner = {inner}");
        assert_eq!(m.result, composed.result.result);
        assert_eq!(m.result as u64, outer * inner - 1);
    }
}

#[test]
fn logging_is_not_timed() {
    let clock = Arc::new(ManualClock::new());

    // Every log event costs 1ms of clock time.
    let hook = EventHook::new({
        let clock = Arc::clone(&clock);
        move |_| clock.advance(ms(1))
    });

    hook.with(|| {
        let timer = Timer::new(&*clock);
        let cost = || clock.advance(Duration::from_micros(1));

        assert_eq!(timer.total(reps(3), cost).duration, Duration::from_micros(3));
        assert_eq!(timer.bestof(reps(3), cost).duration, Duration::from_micros(1));

        let start = clock.peek();
        let m = timer.bestoftotal(reps(3), reps(3), cost);
        assert_eq!(m.duration, Duration::from_micros(3));

        // One event for the whole measurement, emitted after timing.
        assert_eq!(clock.peek() - start, Duration::from_micros(9) + ms(1));
    });
}

mod errors {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct ValueError(usize);

    fn fail_on(call: usize) -> impl FnMut() -> Result<usize, ValueError> {
        let mut calls = 0;
        move || {
            calls += 1;
            if calls == call {
                Err(ValueError(calls))
            } else {
                Ok(calls)
            }
        }
    }

    #[test]
    fn total_stops_at_first_error() {
        let timer: Timer = Timer::default();
        let mut calls = 0;
        let mut target = fail_on(2);

        let result = timer.try_total(reps(5), || {
            calls += 1;
            target()
        });

        assert_eq!(result, Err(ValueError(2)));
        assert_eq!(calls, 2);
    }

    #[test]
    fn bestof_stops_at_first_error() {
        let timer: Timer = Timer::default();

        assert_eq!(timer.try_bestof(reps(5), fail_on(3)), Err(ValueError(3)));
        assert!(timer.try_bestof(reps(2), fail_on(3)).is_ok());
    }

    #[test]
    fn bestoftotal_propagates_inner_error() {
        let timer: Timer = Timer::default();

        // Fails within the second `total`.
        assert_eq!(timer.try_bestoftotal(reps(3), reps(4), fail_on(6)), Err(ValueError(6)));

        let m = timer.try_bestoftotal(reps(2), reps(2), fail_on(5)).unwrap();
        assert_eq!(m.result, 4);
    }

    #[test]
    #[should_panic(expected = "target panicked")]
    fn panics_unwind_through() {
        let timer: Timer = Timer::default();
        timer.total(reps(3), || panic!("target panicked"));
    }
}
