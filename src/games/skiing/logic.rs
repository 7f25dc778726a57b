//! Ski Slalom rules — pure functions, fully testable.

use super::state::{
    spawn_gate, SkiingState, BAND_BOTTOM, BAND_TOP, GATE_POINTS, GATE_WIDTH, MAX_X, MIN_X,
    MOVE_STEP, RECYCLE_Y, SPEED_CAP, SPEED_STEP,
};

/// Steer the skier one step left (negative) or right (positive).
pub fn steer(state: &mut SkiingState, dir: f64) {
    if !state.session.is_running() {
        return;
    }
    state.skier_x = (state.skier_x + dir * MOVE_STEP).clamp(MIN_X, MAX_X);
}

/// Advance the slope by one tick: scroll gates, judge the one in the
/// skier's band, recycle gates past the bottom edge. Returns `true` when
/// this tick performed the terminal transition (missed gate).
pub fn step(state: &mut SkiingState) -> bool {
    if !state.session.is_running() {
        return false;
    }

    for gate in &mut state.gates {
        gate.y += state.speed;
    }

    // Judge gates inside the skier's band. Passing scores and speeds up;
    // missing ends the run.
    let skier_x = state.skier_x;
    let mut missed = false;
    let mut passed_count = 0u32;
    for gate in &mut state.gates {
        if !gate.passed && gate.y > BAND_TOP && gate.y < BAND_BOTTOM {
            if skier_x >= gate.x && skier_x <= gate.x + GATE_WIDTH {
                gate.passed = true;
                passed_count += 1;
            } else {
                missed = true;
            }
        }
    }
    for _ in 0..passed_count {
        state.session.add_score(GATE_POINTS);
        state.speed = (state.speed + SPEED_STEP).min(SPEED_CAP);
    }
    if missed {
        return state.session.finish();
    }

    // Recycle: each gate past the bottom edge is replaced by a fresh one
    // at the top, so the lookahead count never changes.
    for i in 0..state.gates.len() {
        if state.gates[i].y > RECYCLE_Y {
            state.gates[i] = spawn_gate(&mut state.rng, -100.0);
        }
    }

    false
}
