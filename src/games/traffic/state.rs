//! Traffic Dodge game state.
//!
//! Same 400×600 virtual field as the slalom, split into three lanes. The
//! player snaps between lane centers; vehicles scroll down and are
//! "detected" (tallied and scored) when they leave the bottom edge.

use crate::leaderboard::ScoreEntry;
use crate::rng::Rng32;
use crate::session::Session;

pub const FIELD_W: f64 = 400.0;
pub const FIELD_H: f64 = 600.0;
pub const LANES: usize = 3;
pub const LANE_WIDTH: f64 = FIELD_W / LANES as f64;
/// Player's fixed vertical position.
pub const PLAYER_Y: f64 = FIELD_H - 100.0;
/// Collision threshold: center distance under this is a crash.
pub const COLLISION_DIST: f64 = 40.0;
/// Vehicles spawn above the field at this y.
pub const SPAWN_Y: f64 = -60.0;
/// Chance per tick of spawning a vehicle.
pub const SPAWN_CHANCE: f64 = 0.03;
/// Chance a spawned vehicle is a truck.
pub const TRUCK_CHANCE: f64 = 0.3;

pub const START_SPEED: f64 = 3.0;
pub const SPEED_CAP: f64 = 7.0;
pub const SPEED_STEP: f64 = 0.05;
/// Points per vehicle that scrolls off the bottom edge.
pub const DETECT_POINTS: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VehicleKind {
    Car,
    Truck,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
    pub lane: usize,
    pub y: f64,
    pub kind: VehicleKind,
}

/// Horizontal center of a lane.
pub fn lane_center(lane: usize) -> f64 {
    lane as f64 * LANE_WIDTH + LANE_WIDTH / 2.0
}

pub struct TrafficState {
    pub session: Session,
    pub player_lane: usize,
    pub vehicles: Vec<Vehicle>,
    /// Scroll speed in virtual px per tick. Grows as vehicles despawn.
    pub speed: f64,
    /// Vehicles that made it past the bottom edge.
    pub detected: u32,
    pub rng: Rng32,
    /// Cached top-10 board for display.
    pub board: Vec<ScoreEntry>,
}

impl TrafficState {
    pub fn new(seed: u32) -> Self {
        Self {
            session: Session::new(),
            player_lane: 1,
            vehicles: Vec::new(),
            speed: START_SPEED,
            detected: 0,
            rng: Rng32::new(seed),
            board: Vec::new(),
        }
    }

    /// Reset entity state and enter Running with one vehicle on the road.
    pub fn begin_run(&mut self) {
        self.session.start();
        self.player_lane = 1;
        self.speed = START_SPEED;
        self.detected = 0;
        self.vehicles = vec![spawn_vehicle(&mut self.rng)];
    }
}

pub fn spawn_vehicle(rng: &mut Rng32) -> Vehicle {
    let lane = rng.gen_range(LANES as u32) as usize;
    let kind = if rng.next_f64() < TRUCK_CHANCE {
        VehicleKind::Truck
    } else {
        VehicleKind::Car
    };
    Vehicle {
        lane,
        y: SPAWN_Y,
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_run_resets_and_seeds_traffic() {
        let mut s = TrafficState::new(9);
        s.begin_run();
        assert!(s.session.is_running());
        assert_eq!(s.player_lane, 1);
        assert_eq!(s.vehicles.len(), 1);
        assert_eq!(s.vehicles[0].y, SPAWN_Y);
        assert_eq!(s.detected, 0);
    }

    #[test]
    fn spawned_vehicles_use_valid_lanes() {
        let mut rng = Rng32::new(2);
        for _ in 0..200 {
            let v = spawn_vehicle(&mut rng);
            assert!(v.lane < LANES);
        }
    }

    #[test]
    fn lane_centers() {
        assert!((lane_center(0) - 400.0 / 6.0).abs() < 1e-9);
        assert!((lane_center(1) - 200.0).abs() < 1e-9);
    }
}
