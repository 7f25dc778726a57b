//! Typing Test rules — pure functions, fully testable.

use super::state::TypingState;

/// Append a typed character and re-judge. Returns `true` when this
/// keystroke completed the snippet exactly (terminal by completion).
pub fn type_char(state: &mut TypingState, c: char) -> bool {
    if !state.session.is_running() {
        return false;
    }
    state.typed.push(c);
    recompute(state);

    if state.typed == state.target {
        state.completed = true;
        return state.session.finish();
    }
    false
}

/// Remove the last typed character and re-judge. Completion is checked on
/// every input change, so deleting a trailing typo can finish the run too.
pub fn backspace(state: &mut TypingState) -> bool {
    if !state.session.is_running() {
        return false;
    }
    state.typed.pop();
    recompute(state);

    if state.typed == state.target {
        state.completed = true;
        return state.session.finish();
    }
    false
}

/// One second off the clock. Returns `true` when the clock ran out
/// (terminal by expiry).
pub fn countdown_step(state: &mut TypingState) -> bool {
    if !state.session.is_running() {
        return false;
    }
    state.time_left = state.time_left.saturating_sub(1);
    recompute(state);
    if state.time_left == 0 {
        return state.session.finish();
    }
    false
}

/// Recompute WPM and accuracy from the current input and elapsed time.
///
/// WPM counts every typed character (right or wrong) at five characters
/// per word over elapsed minutes; with no elapsed time it reads 0.
/// Accuracy is the positional match ratio; empty input reads 100.
fn recompute(state: &mut TypingState) {
    let typed_len = state.typed.chars().count();

    let elapsed_min = state.elapsed_secs() as f64 / 60.0;
    state.wpm = if elapsed_min > 0.0 {
        ((typed_len as f64 / 5.0) / elapsed_min).round() as u32
    } else {
        0
    };

    if typed_len == 0 {
        state.accuracy = 100;
        return;
    }
    let correct = state
        .typed
        .chars()
        .zip(state.target.chars())
        .filter(|(a, b)| a == b)
        .count();
    state.accuracy = ((correct as f64 / typed_len as f64) * 100.0).round() as u32;
}


#[cfg(test)]
mod proptests {
    use super::super::state::{TypingState, TIME_LIMIT_SECS};
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Accuracy stays in [0,100] and completion fires iff the input
        /// equals the target exactly, under arbitrary keystrokes,
        /// backspaces, and clock ticks.
        #[test]
        fn prop_accuracy_bounds_and_completion(
            seed in 1u32..u32::MAX,
            ops in proptest::collection::vec(
                prop_oneof![
                    proptest::char::range(' ', '~').prop_map(Some),
                    Just(None), // backspace
                ],
                1..200,
            ),
            ticks in 0u32..TIME_LIMIT_SECS,
        ) {
            let mut s = TypingState::new(seed);
            s.begin_run();
            for _ in 0..ticks {
                countdown_step(&mut s);
            }
            for op in ops {
                let completed_now = match op {
                    Some(c) => type_char(&mut s, c),
                    None => backspace(&mut s),
                };
                prop_assert!(s.accuracy <= 100);
                if completed_now {
                    prop_assert_eq!(s.typed.as_str(), s.target);
                    prop_assert!(s.session.is_terminal());
                    break;
                } else {
                    prop_assert_ne!(s.typed.as_str(), s.target);
                }
            }
        }
    }
}
