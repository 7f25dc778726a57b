//! Memory Match rules — pure functions, fully testable.

use super::state::{
    Judgement, MemoryState, MATCH_DELAY_TICKS, MISMATCH_DELAY_TICKS, PAIRS,
};

/// Flip a card face up. Ignored while a judgement is pending, for matched
/// or already-selected cards, and outside a running session — all of
/// which are illegal inputs, not errors.
pub fn select_card(state: &mut MemoryState, idx: usize) {
    if !state.session.is_running() || state.pending.is_some() || idx >= state.cards.len() {
        return;
    }
    if state.cards[idx].matched || state.selection.contains(&idx) {
        return;
    }

    state.cards[idx].face_up = true;
    state.selection.push(idx);

    if state.selection.len() == 2 {
        state.moves += 1;
        let (first, second) = (state.selection[0], state.selection[1]);
        let is_match = state.cards[first].symbol == state.cards[second].symbol;
        state.pending = Some(Judgement {
            first,
            second,
            is_match,
            ticks_left: if is_match {
                MATCH_DELAY_TICKS
            } else {
                MISMATCH_DELAY_TICKS
            },
        });
    }
}

/// Advance one 100ms tick: count elapsed time and wait out a pending
/// judgement. Returns `true` when this tick completed the winning match.
pub fn step(state: &mut MemoryState) -> bool {
    if !state.session.is_running() {
        return false;
    }
    state.elapsed_ticks += 1;

    let Some(pending) = &mut state.pending else {
        return false;
    };
    pending.ticks_left = pending.ticks_left.saturating_sub(1);
    if pending.ticks_left > 0 {
        return false;
    }

    let Judgement {
        first,
        second,
        is_match,
        ..
    } = *pending;
    state.pending = None;
    state.selection.clear();

    if is_match {
        state.cards[first].matched = true;
        state.cards[first].face_up = false;
        state.cards[second].matched = true;
        state.cards[second].face_up = false;
        state.matches += 1;
        if state.matches as usize == PAIRS {
            return state.session.finish();
        }
    } else {
        state.cards[first].face_up = false;
        state.cards[second].face_up = false;
    }
    false
}
