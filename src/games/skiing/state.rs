//! Ski Slalom game state.
//!
//! The simulation runs in a 400×600 virtual-pixel field; rendering
//! projects it onto terminal cells. Keeping the field in virtual units
//! keeps the rule constants independent of the terminal size.

use crate::leaderboard::ScoreEntry;
use crate::rng::Rng32;
use crate::session::Session;

pub const FIELD_W: f64 = 400.0;
pub const FIELD_H: f64 = 600.0;
pub const GATE_WIDTH: f64 = 120.0;
/// Gates kept ahead of the player at all times.
pub const GATE_COUNT: usize = 3;
/// Horizontal movement per arrow press.
pub const MOVE_STEP: f64 = 15.0;
/// Skier x is clamped to this range.
pub const MIN_X: f64 = 20.0;
pub const MAX_X: f64 = FIELD_W - 20.0;
/// The skier sits in this vertical band; a gate is judged when it scrolls
/// into it.
pub const BAND_TOP: f64 = FIELD_H - 100.0;
pub const BAND_BOTTOM: f64 = FIELD_H - 50.0;
/// Gates past this line are recycled to the top.
pub const RECYCLE_Y: f64 = FIELD_H + 50.0;

pub const START_SPEED: f64 = 3.0;
pub const SPEED_CAP: f64 = 8.0;
pub const SPEED_STEP: f64 = 0.1;
pub const GATE_POINTS: u32 = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct Gate {
    /// Left edge of the gate span.
    pub x: f64,
    pub y: f64,
    pub passed: bool,
}

pub struct SkiingState {
    pub session: Session,
    /// Skier center x.
    pub skier_x: f64,
    pub gates: Vec<Gate>,
    /// Scroll speed in virtual px per tick. Grows with each passed gate.
    pub speed: f64,
    pub rng: Rng32,
    /// Cached top-10 board for display.
    pub board: Vec<ScoreEntry>,
}

impl SkiingState {
    pub fn new(seed: u32) -> Self {
        Self {
            session: Session::new(),
            skier_x: FIELD_W / 2.0,
            gates: Vec::new(),
            speed: START_SPEED,
            rng: Rng32::new(seed),
            board: Vec::new(),
        }
    }

    /// Reset entity state and enter Running.
    pub fn begin_run(&mut self) {
        self.session.start();
        self.skier_x = FIELD_W / 2.0;
        self.speed = START_SPEED;
        self.gates = (0..GATE_COUNT)
            .map(|i| spawn_gate(&mut self.rng, -100.0 - 200.0 * i as f64))
            .collect();
    }
}

/// A fresh gate at the given vertical position, with a random horizontal
/// span kept 20px off the field edges.
pub fn spawn_gate(rng: &mut Rng32, y: f64) -> Gate {
    let x = rng.next_f64() * (FIELD_W - GATE_WIDTH - 40.0) + 20.0;
    Gate {
        x,
        y,
        passed: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_run_spawns_the_lookahead() {
        let mut s = SkiingState::new(5);
        s.begin_run();
        assert!(s.session.is_running());
        assert_eq!(s.gates.len(), GATE_COUNT);
        assert_eq!(s.gates[0].y, -100.0);
        assert_eq!(s.gates[1].y, -300.0);
        assert_eq!(s.gates[2].y, -500.0);
        assert!(s.gates.iter().all(|g| !g.passed));
    }

    #[test]
    fn spawned_gates_fit_the_field() {
        let mut rng = Rng32::new(1);
        for _ in 0..200 {
            let g = spawn_gate(&mut rng, -100.0);
            assert!(g.x >= 20.0);
            assert!(g.x + GATE_WIDTH <= FIELD_W - 20.0);
        }
    }
}
