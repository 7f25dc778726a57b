//! Snake rules — pure functions, fully testable.

use super::state::{Cell, Direction, SnakeState, FOOD_POINTS, GRID_SIZE};

/// Queue a direction change for the next step. A change that reverses
/// straight back into the body is ignored (illegal input, not an error),
/// and the buffer holds one change at most, so key repeat cannot skip the
/// reversal check.
pub fn queue_direction(state: &mut SnakeState, dir: Direction) {
    if !state.session.is_running() {
        return;
    }
    let effective = state.pending.unwrap_or(state.direction);
    if dir.is_reverse_of(effective) {
        return;
    }
    state.pending = Some(dir);
}

/// Advance the snake by one cell. Returns `true` when this step performed
/// the terminal transition (wall or self collision).
pub fn step(state: &mut SnakeState) -> bool {
    if !state.session.is_running() {
        return false;
    }

    if let Some(dir) = state.pending.take() {
        state.direction = dir;
    }

    let head = match state.body.front() {
        Some(h) => *h,
        None => return false,
    };
    let (dx, dy) = state.direction.delta();
    let new_head = Cell {
        x: head.x + dx,
        y: head.y + dy,
    };

    let hit_wall = new_head.x < 0
        || new_head.x >= GRID_SIZE
        || new_head.y < 0
        || new_head.y >= GRID_SIZE;
    if hit_wall || state.body.contains(&new_head) {
        return state.session.finish();
    }

    state.body.push_front(new_head);
    if new_head == state.food {
        state.session.add_score(FOOD_POINTS);
        // Fresh food at a random cell. The spawn does not avoid the body
        // (accepted simplification): food under the snake sits there until
        // the tail moves off.
        state.food = Cell {
            x: state.rng.gen_range(GRID_SIZE as u32) as i32,
            y: state.rng.gen_range(GRID_SIZE as u32) as i32,
        };
    } else {
        state.body.pop_back();
    }
    false
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        /// Body length changes by exactly +1 on a food step and 0 otherwise,
        /// for arbitrary interleavings of direction input and ticks.
        #[test]
        fn prop_length_changes_only_on_food(
            seed in 1u32..u32::MAX,
            moves in proptest::collection::vec(arb_direction(), 1..200),
        ) {
            let mut s = SnakeState::new(seed);
            s.begin_run();
            for dir in moves {
                queue_direction(&mut s, dir);
                let len_before = s.body.len();
                let score_before = s.session.score();
                let head_before = *s.body.front().unwrap();
                let was_food = {
                    let (dx, dy) = s.pending.unwrap_or(s.direction).delta();
                    Cell { x: head_before.x + dx, y: head_before.y + dy } == s.food
                };
                step(&mut s);
                if !s.session.is_running() {
                    break;
                }
                if was_food {
                    prop_assert_eq!(s.body.len(), len_before + 1);
                    prop_assert_eq!(s.session.score(), score_before + FOOD_POINTS);
                } else {
                    prop_assert_eq!(s.body.len(), len_before);
                    prop_assert_eq!(s.session.score(), score_before);
                }
            }
        }

        /// After any running step, the head is inside the grid and does not
        /// overlap the rest of the body.
        #[test]
        fn prop_head_valid_while_running(
            seed in 1u32..u32::MAX,
            moves in proptest::collection::vec(arb_direction(), 1..300),
        ) {
            let mut s = SnakeState::new(seed);
            s.begin_run();
            for dir in moves {
                queue_direction(&mut s, dir);
                step(&mut s);
                if !s.session.is_running() {
                    break;
                }
                let head = *s.body.front().unwrap();
                prop_assert!((0..GRID_SIZE).contains(&head.x));
                prop_assert!((0..GRID_SIZE).contains(&head.y));
                prop_assert!(!s.body.iter().skip(1).any(|c| *c == head));
            }
        }

        /// Score is monotone while running and frozen after terminal.
        #[test]
        fn prop_score_monotone_then_frozen(
            seed in 1u32..u32::MAX,
            moves in proptest::collection::vec(arb_direction(), 1..300),
        ) {
            let mut s = SnakeState::new(seed);
            s.begin_run();
            let mut last_score = 0;
            let mut frozen_at: Option<u32> = None;
            for dir in moves {
                queue_direction(&mut s, dir);
                step(&mut s);
                match frozen_at {
                    None => {
                        prop_assert!(s.session.score() >= last_score);
                        last_score = s.session.score();
                        if s.session.is_terminal() {
                            frozen_at = Some(last_score);
                        }
                    }
                    Some(frozen) => prop_assert_eq!(s.session.score(), frozen),
                }
            }
        }
    }
}
