//! Property-based tests: the bounds invariant and status agreement under
//! arbitrary key sequences and configurations.

use proptest::prelude::*;

use tally::counter::{Counter, CounterError, Status};
use tally::key::KeyMsg;
use tally::program::Model;
use tally::{Msg, TallyApp};

/// Valid configurations: the floor at or below zero, the ceiling above it,
/// and a starting value inside the range.
fn config() -> impl Strategy<Value = (i32, i32, i32)> {
    (-50..=0i32, 1..=50i32)
        .prop_flat_map(|(lower, upper)| (Just(lower), Just(upper), lower..=upper))
}

proptest! {
    #[test]
    fn value_stays_within_bounds(
        (lower, upper, start) in config(),
        presses in prop::collection::vec(prop::sample::select(vec!['+', '-', 'r']), 0..200),
    ) {
        let counter = Counter::with_config(start, lower, upper).unwrap();
        let mut app = TallyApp::with_counter(counter);

        for ch in presses {
            app.update(Msg::Key(KeyMsg::from_char(ch)));
            let value = app.counter().value();
            prop_assert!(value >= lower && value <= upper,
                "value {} escaped [{}, {}]", value, lower, upper);
        }
    }

    #[test]
    fn status_always_agrees_with_value(
        (lower, upper, start) in config(),
        presses in prop::collection::vec(prop::sample::select(vec!['+', '-', 'r']), 0..200),
    ) {
        let counter = Counter::with_config(start, lower, upper).unwrap();
        let mut app = TallyApp::with_counter(counter);

        for ch in presses {
            app.update(Msg::Key(KeyMsg::from_char(ch)));
            let value = app.counter().value();
            let expected = if value == upper {
                Status::AtMax
            } else if value == lower {
                Status::AtMin
            } else {
                Status::Idle
            };
            prop_assert_eq!(app.counter().status(), expected);
        }
    }

    #[test]
    fn gate_mirrors_status(
        (lower, upper, start) in config(),
        presses in prop::collection::vec(prop::sample::select(vec!['+', '-', 'r']), 0..200),
    ) {
        let counter = Counter::with_config(start, lower, upper).unwrap();
        let mut app = TallyApp::with_counter(counter);

        for ch in presses {
            app.update(Msg::Key(KeyMsg::from_char(ch)));
            let status = app.counter().status();
            prop_assert_eq!(app.keys().increment.enabled(), status != Status::AtMax);
            prop_assert_eq!(app.keys().decrement.enabled(), status != Status::AtMin);
            prop_assert_eq!(app.keys().reset.enabled(), app.counter().value() != 0);
        }
    }

    #[test]
    fn reset_from_nonzero_shows_confirmation(
        (lower, upper, start) in config(),
        presses in prop::collection::vec(prop::sample::select(vec!['+', '-', 'r']), 0..200),
    ) {
        let counter = Counter::with_config(start, lower, upper).unwrap();
        let mut app = TallyApp::with_counter(counter);

        for ch in presses {
            let was_nonzero = app.counter().value() != 0;
            app.update(Msg::Key(KeyMsg::from_char(ch)));
            if ch == 'r' && was_nonzero {
                prop_assert_eq!(app.counter().value(), 0);
                prop_assert!(app.confirmation().visible());
            }
        }
    }

    #[test]
    fn programmatic_increment_rejects_at_ceiling(
        (lower, upper, start) in config(),
    ) {
        let mut counter = Counter::with_config(start, lower, upper).unwrap();

        loop {
            match counter.increment() {
                Ok(value) => prop_assert!(value <= upper),
                Err(err) => {
                    prop_assert_eq!(err, CounterError::AtUpperBound { bound: upper });
                    prop_assert_eq!(counter.value(), upper);
                    prop_assert_eq!(counter.status(), Status::AtMax);
                    break;
                }
            }
        }
    }

    #[test]
    fn programmatic_decrement_rejects_at_floor(
        (lower, upper, start) in config(),
    ) {
        let mut counter = Counter::with_config(start, lower, upper).unwrap();

        loop {
            match counter.decrement() {
                Ok(value) => prop_assert!(value >= lower),
                Err(err) => {
                    prop_assert_eq!(err, CounterError::AtLowerBound { bound: lower });
                    prop_assert_eq!(counter.value(), lower);
                    prop_assert_eq!(counter.status(), Status::AtMin);
                    break;
                }
            }
        }
    }
}
