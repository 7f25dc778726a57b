//! Snake — grid snake with wall and self collision.

pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::games::Game;
use crate::input::{Arrow, ClickState, InputEvent};

use state::{Direction, SnakeState};

/// Click action: begin a run (start screen and game-over overlay).
pub const START_RUN: u16 = 10;

pub struct SnakeGame {
    pub state: SnakeState,
}

impl SnakeGame {
    pub fn new(seed: u32) -> Self {
        #[allow(unused_mut)]
        let mut state = SnakeState::new(seed);

        #[cfg(target_arch = "wasm32")]
        {
            state.best = crate::leaderboard::load_best("snake");
            state.board = crate::leaderboard::fetch("snake");
        }

        Self { state }
    }

    /// Enter-terminal effects: personal best and the shared board, once.
    fn on_terminal(&mut self) {
        let score = self.state.session.score();
        if self.state.best.map_or(true, |b| score > b) {
            self.state.best = Some(score);
            #[cfg(target_arch = "wasm32")]
            crate::leaderboard::store_best("snake", score);
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.state.board = crate::leaderboard::record("snake", score, "You");
        }
    }
}

impl Game for SnakeGame {
    fn id(&self) -> &'static str {
        "snake"
    }

    fn title(&self) -> &'static str {
        "Snake"
    }

    fn tick_interval_ms(&self) -> u32 {
        150
    }

    fn is_active(&self) -> bool {
        self.state.session.is_running()
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Arrow(arrow) if self.state.session.is_running() => {
                let dir = match arrow {
                    Arrow::Up => Direction::Up,
                    Arrow::Down => Direction::Down,
                    Arrow::Left => Direction::Left,
                    Arrow::Right => Direction::Right,
                };
                logic::queue_direction(&mut self.state, dir);
                true
            }
            InputEvent::Enter | InputEvent::Char(' ') | InputEvent::Char('r')
                if !self.state.session.is_running() =>
            {
                self.state.begin_run();
                true
            }
            InputEvent::Click(START_RUN) if !self.state.session.is_running() => {
                self.state.begin_run();
                true
            }
            _ => false,
        }
    }

    fn tick(&mut self, delta_ticks: u32) {
        for _ in 0..delta_ticks {
            if logic::step(&mut self.state) {
                self.on_terminal();
                break;
            }
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}
