//! Snake game state.

use std::collections::VecDeque;

use crate::leaderboard::ScoreEntry;
use crate::rng::Rng32;
use crate::session::Session;

/// Board is a square grid of this many cells per side.
pub const GRID_SIZE: i32 = 20;
/// Points per food eaten.
pub const FOOD_POINTS: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_reverse_of(self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }
}

pub struct SnakeState {
    pub session: Session,
    /// Body cells, head first. Never empty while a run exists.
    pub body: VecDeque<Cell>,
    /// Direction currently being travelled.
    pub direction: Direction,
    /// At most one buffered direction change, applied at the next step.
    /// Buffering (instead of mutating `direction` immediately) means a
    /// burst of key-repeat events inside one tick cannot fold the snake
    /// back onto itself.
    pub pending: Option<Direction>,
    pub food: Cell,
    pub rng: Rng32,
    /// Personal best, loaded from storage at mount.
    pub best: Option<u32>,
    /// Cached top-10 board for display.
    pub board: Vec<ScoreEntry>,
}

impl SnakeState {
    pub fn new(seed: u32) -> Self {
        Self {
            session: Session::new(),
            body: VecDeque::from([Cell { x: 10, y: 10 }]),
            direction: Direction::Right,
            pending: None,
            food: Cell { x: 15, y: 15 },
            rng: Rng32::new(seed),
            best: None,
            board: Vec::new(),
        }
    }

    /// Reset entity state and enter Running. Restart and first start are
    /// the same operation.
    pub fn begin_run(&mut self) {
        self.session.start();
        self.body = VecDeque::from([Cell { x: 10, y: 10 }]);
        self.direction = Direction::Right;
        self.pending = None;
        self.food = Cell {
            x: self.rng.gen_range(GRID_SIZE as u32) as i32,
            y: self.rng.gen_range(GRID_SIZE as u32) as i32,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStatus;

    #[test]
    fn initial_state() {
        let s = SnakeState::new(1);
        assert_eq!(s.session.status(), SessionStatus::Idle);
        assert_eq!(s.body.len(), 1);
        assert_eq!(s.body[0], Cell { x: 10, y: 10 });
        assert_eq!(s.direction, Direction::Right);
    }

    #[test]
    fn begin_run_resets_everything() {
        let mut s = SnakeState::new(1);
        s.begin_run();
        s.body.push_front(Cell { x: 11, y: 10 });
        s.session.add_score(30);
        s.session.finish();

        s.begin_run();
        assert!(s.session.is_running());
        assert_eq!(s.session.score(), 0);
        assert_eq!(s.body.len(), 1);
        assert!(s.pending.is_none());
        let f = s.food;
        assert!((0..GRID_SIZE).contains(&f.x) && (0..GRID_SIZE).contains(&f.y));
    }

    #[test]
    fn reverse_detection() {
        assert!(Direction::Up.is_reverse_of(Direction::Down));
        assert!(Direction::Left.is_reverse_of(Direction::Right));
        assert!(!Direction::Up.is_reverse_of(Direction::Left));
        assert!(!Direction::Up.is_reverse_of(Direction::Up));
    }
}
