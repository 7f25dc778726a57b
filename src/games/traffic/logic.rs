//! Traffic Dodge rules — pure functions, fully testable.

use super::state::{
    lane_center, spawn_vehicle, TrafficState, COLLISION_DIST, DETECT_POINTS, FIELD_H, LANES,
    SPAWN_CHANCE, SPEED_CAP, SPEED_STEP,
};

/// Change lanes by -1 (left) or +1 (right), clamped to the road.
pub fn change_lane(state: &mut TrafficState, dir: i32) {
    if !state.session.is_running() {
        return;
    }
    let lane = state.player_lane as i32 + dir;
    state.player_lane = lane.clamp(0, LANES as i32 - 1) as usize;
}

/// Advance the road by one tick: scroll vehicles, check for a crash,
/// despawn-and-tally vehicles past the bottom edge, maybe spawn a new
/// one. Returns `true` when this tick performed the terminal transition.
pub fn step(state: &mut TrafficState) -> bool {
    if !state.session.is_running() {
        return false;
    }

    for v in &mut state.vehicles {
        v.y += state.speed;
    }

    // Crash check: center distance to any vehicle under the threshold.
    let px = lane_center(state.player_lane);
    let py = super::state::PLAYER_Y;
    let crashed = state.vehicles.iter().any(|v| {
        let vx = lane_center(v.lane);
        let dx = px - vx;
        let dy = py - v.y;
        (dx * dx + dy * dy).sqrt() < COLLISION_DIST
    });
    if crashed {
        return state.session.finish();
    }

    // Vehicles that cleared the bottom edge count as detections.
    let before = state.vehicles.len();
    state.vehicles.retain(|v| v.y <= FIELD_H);
    let removed = (before - state.vehicles.len()) as u32;
    if removed > 0 {
        state.detected += removed;
        state.session.add_score(removed * DETECT_POINTS);
        state.speed = (state.speed + SPEED_STEP).min(SPEED_CAP);
    }

    if state.rng.next_f64() < SPAWN_CHANCE {
        let v = spawn_vehicle(&mut state.rng);
        state.vehicles.push(v);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::super::state::{TrafficState, Vehicle, VehicleKind, PLAYER_Y, START_SPEED};
    use super::*;

    fn running_state() -> TrafficState {
        let mut s = TrafficState::new(21);
        s.begin_run();
        s
    }

    #[test]
    fn vehicles_scroll_by_speed() {
        let mut s = running_state();
        s.vehicles = vec![Vehicle {
            lane: 0,
            y: 100.0,
            kind: VehicleKind::Car,
        }];
        step(&mut s);
        assert_eq!(s.vehicles[0].y, 100.0 + START_SPEED);
    }

    #[test]
    fn same_lane_proximity_is_a_crash() {
        let mut s = running_state();
        s.player_lane = 1;
        s.vehicles = vec![Vehicle {
            lane: 1,
            y: PLAYER_Y - 30.0 - START_SPEED,
            kind: VehicleKind::Car,
        }];
        assert!(step(&mut s));
        assert!(s.session.is_terminal());
    }

    #[test]
    fn adjacent_lane_is_safe_at_same_height() {
        // Lane centers are ~133px apart, well over the 40px threshold.
        let mut s = running_state();
        s.player_lane = 1;
        s.vehicles = vec![Vehicle {
            lane: 0,
            y: PLAYER_Y - START_SPEED,
            kind: VehicleKind::Car,
        }];
        assert!(!step(&mut s));
        assert!(s.session.is_running());
    }

    #[test]
    fn despawn_tallies_scores_and_speeds_up() {
        let mut s = running_state();
        s.vehicles = vec![
            Vehicle {
                lane: 0,
                y: FIELD_H - 1.0,
                kind: VehicleKind::Car,
            },
            Vehicle {
                lane: 2,
                y: FIELD_H - 2.0,
                kind: VehicleKind::Truck,
            },
        ];
        step(&mut s);
        assert_eq!(s.detected, 2);
        assert_eq!(s.session.score(), 2 * DETECT_POINTS);
        assert!((s.speed - (START_SPEED + SPEED_STEP)).abs() < 1e-9);
        assert!(s.vehicles.len() <= 1); // only a fresh spawn may remain
    }

    #[test]
    fn speed_capped() {
        let mut s = running_state();
        s.speed = SPEED_CAP - 0.01;
        s.vehicles = vec![Vehicle {
            lane: 0,
            y: FIELD_H - 1.0,
            kind: VehicleKind::Car,
        }];
        step(&mut s);
        assert!(s.speed <= SPEED_CAP);
    }

    #[test]
    fn lane_changes_clamped() {
        let mut s = running_state();
        change_lane(&mut s, -1);
        change_lane(&mut s, -1);
        change_lane(&mut s, -1);
        assert_eq!(s.player_lane, 0);
        change_lane(&mut s, 1);
        change_lane(&mut s, 1);
        change_lane(&mut s, 1);
        change_lane(&mut s, 1);
        assert_eq!(s.player_lane, 2);
    }

    #[test]
    fn lane_change_ignored_when_not_running() {
        let mut s = TrafficState::new(21);
        change_lane(&mut s, 1);
        assert_eq!(s.player_lane, 1);
    }

    #[test]
    fn ticks_after_terminal_change_nothing() {
        let mut s = running_state();
        s.vehicles = vec![Vehicle {
            lane: 1,
            y: PLAYER_Y - START_SPEED,
            kind: VehicleKind::Car,
        }];
        step(&mut s);
        assert!(s.session.is_terminal());
        let vehicles = s.vehicles.clone();
        let detected = s.detected;
        assert!(!step(&mut s));
        assert_eq!(s.vehicles, vehicles);
        assert_eq!(s.detected, detected);
    }
}

#[cfg(test)]
mod proptests {
    use super::super::state::TrafficState;
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Speed is monotone non-decreasing and capped, the player stays
        /// on the road, and score tracks detections exactly, under
        /// arbitrary lane changes.
        #[test]
        fn prop_speed_and_score_invariants(
            seed in 1u32..u32::MAX,
            inputs in proptest::collection::vec(-1i32..=1, 1..500),
        ) {
            let mut s = TrafficState::new(seed);
            s.begin_run();
            let mut last_speed = s.speed;
            for dir in inputs {
                change_lane(&mut s, dir);
                step(&mut s);
                prop_assert!(s.speed >= last_speed);
                prop_assert!(s.speed <= SPEED_CAP + 1e-9);
                prop_assert!(s.player_lane < LANES);
                prop_assert_eq!(s.session.score(), s.detected * DETECT_POINTS);
                last_speed = s.speed;
                if s.session.is_terminal() {
                    break;
                }
            }
        }
    }
}
