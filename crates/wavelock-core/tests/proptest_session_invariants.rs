//! Property-based invariant tests for the gesture-input session.
//!
//! These tests verify structural invariants of `Session::tick`:
//!
//! 1. The entry buffer never exceeds the secret length
//! 2. No panics on arbitrary sample sequences
//! 3. Determinism: the same sample stream yields the same outcome stream
//! 4. `Unlocked` is terminal and sticky
//! 5. `Denied` always leaves the buffer empty
//! 6. A pattern-lock session only ever reports `Continue`
//! 7. Consecutive appends never carry the same label

use proptest::prelude::*;
use wavelock_core::geometry::Point;
use wavelock_core::{LockConfig, LockType, Outcome, Session};

// ── Strategies ──────────────────────────────────────────────────────────

/// One tick's input: a detection gap or a fingertip somewhere in (or a bit
/// outside) the reference frame.
fn sample_strategy() -> impl Strategy<Value = Option<Point>> {
    prop_oneof![
        1 => Just(None),
        4 => (-50.0f32..700.0, -50.0f32..530.0).prop_map(|(x, y)| Some(Point::new(x, y))),
        // Bias toward actual keypad centers so appends happen often.
        4 => (0u8..9).prop_map(|i| {
            let x = 150.0 + f32::from(i % 3) * 100.0;
            let y = 100.0 + f32::from(i / 3) * 100.0;
            Some(Point::new(x, y))
        }),
    ]
}

fn stream_strategy() -> impl Strategy<Value = Vec<Option<Point>>> {
    prop::collection::vec(sample_strategy(), 0..200)
}

fn secret_strategy() -> impl Strategy<Value = String> {
    "[1-9]{1,6}"
}

fn run(session: &mut Session, stream: &[Option<Point>]) -> Vec<Outcome> {
    stream.iter().map(|s| session.tick(*s)).collect()
}

proptest! {
    #[test]
    fn entered_never_exceeds_secret_length(
        secret in secret_strategy(),
        stream in stream_strategy(),
    ) {
        let config = LockConfig::new(LockType::Number, &secret).unwrap();
        let mut session = Session::new(&config);
        for sample in &stream {
            session.tick(*sample);
            prop_assert!(session.entered().len() <= secret.len());
        }
    }

    #[test]
    fn same_stream_same_outcomes(
        secret in secret_strategy(),
        stream in stream_strategy(),
    ) {
        let config = LockConfig::new(LockType::Number, &secret).unwrap();
        let mut a = Session::new(&config);
        let mut b = Session::new(&config);
        prop_assert_eq!(run(&mut a, &stream), run(&mut b, &stream));
    }

    #[test]
    fn unlocked_is_sticky(
        secret in secret_strategy(),
        stream in stream_strategy(),
    ) {
        let config = LockConfig::new(LockType::Number, &secret).unwrap();
        let mut session = Session::new(&config);
        let mut unlocked = false;
        for sample in &stream {
            let outcome = session.tick(*sample);
            if unlocked {
                prop_assert_eq!(outcome, Outcome::Unlocked);
            }
            if outcome == Outcome::Unlocked {
                unlocked = true;
                prop_assert!(session.is_unlocked());
            }
        }
    }

    #[test]
    fn denied_leaves_buffer_empty(
        secret in secret_strategy(),
        stream in stream_strategy(),
    ) {
        let config = LockConfig::new(LockType::Number, &secret).unwrap();
        let mut session = Session::new(&config);
        for sample in &stream {
            if session.tick(*sample) == Outcome::Denied {
                prop_assert!(session.entered().is_empty());
            }
        }
    }

    #[test]
    fn pattern_lock_only_continues(
        secret in secret_strategy(),
        stream in stream_strategy(),
    ) {
        let config = LockConfig::new(LockType::Pattern, &secret).unwrap();
        let mut session = Session::new(&config);
        for sample in &stream {
            prop_assert_eq!(session.tick(*sample), Outcome::Continue);
        }
        prop_assert!(session.entered().is_empty());
    }

    #[test]
    fn no_consecutive_duplicate_appends(
        secret in secret_strategy(),
        stream in stream_strategy(),
    ) {
        let config = LockConfig::new(LockType::Number, &secret).unwrap();
        let mut session = Session::new(&config);
        let mut previous_len = 0;
        let mut last_label: Option<char> = None;
        for sample in &stream {
            let outcome = session.tick(*sample);
            let entered = session.entered();
            if entered.len() > previous_len {
                // Exactly one append per tick, never repeating the label it
                // follows.
                prop_assert_eq!(entered.len(), previous_len + 1);
                let appended = entered[entered.len() - 1];
                if previous_len > 0 {
                    prop_assert_ne!(Some(appended), last_label);
                }
                last_label = Some(appended);
            }
            if outcome == Outcome::Denied {
                // Buffer reset also resets the debounce history we track.
                last_label = None;
            }
            previous_len = entered.len();
        }
    }
}
