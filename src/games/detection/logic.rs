//! Detection-demo churn rules — pure functions, fully testable.

use super::state::{spawn_box, DetectionState, KEEP_CHANCE, MAX_BOXES};

/// One 200ms churn tick: drop some boxes, add one, refresh the readouts,
/// count the tick toward the total, and run the countdown. Returns `true`
/// when the feed stopped itself this tick.
pub fn step(state: &mut DetectionState) -> bool {
    if !state.session.is_running() {
        return false;
    }

    let rng = &mut state.rng;
    state.boxes.retain(|_| rng.next_f64() < KEEP_CHANCE);
    let fresh = spawn_box(rng);
    state.boxes.push(fresh);
    state.boxes.truncate(MAX_BOXES);

    state.fps = 25 + state.rng.gen_range(10);
    state.session.add_score(1);

    state.ticks_left = state.ticks_left.saturating_sub(1);
    if state.ticks_left == 0 {
        return state.session.finish();
    }
    false
}

/// Stop a running feed early (the on-screen stop button).
pub fn stop_feed(state: &mut DetectionState) -> bool {
    state.session.finish()
}
