//! Ski Slalom — thread the gates, gain speed, don't miss.

pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::games::Game;
use crate::input::{Arrow, ClickState, InputEvent};

use state::SkiingState;

/// Click action: begin a run.
pub const START_RUN: u16 = 10;

pub struct SkiingGame {
    pub state: SkiingState,
}

impl SkiingGame {
    pub fn new(seed: u32) -> Self {
        #[allow(unused_mut)]
        let mut state = SkiingState::new(seed);

        #[cfg(target_arch = "wasm32")]
        {
            state.board = crate::leaderboard::fetch("skiing");
        }

        Self { state }
    }

    fn on_terminal(&mut self) {
        #[cfg(target_arch = "wasm32")]
        {
            self.state.board =
                crate::leaderboard::record("skiing", self.state.session.score(), "You");
        }
    }
}

impl Game for SkiingGame {
    fn id(&self) -> &'static str {
        "skiing"
    }

    fn title(&self) -> &'static str {
        "Ski Slalom"
    }

    fn tick_interval_ms(&self) -> u32 {
        16
    }

    fn is_active(&self) -> bool {
        self.state.session.is_running()
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Arrow(Arrow::Left) if self.state.session.is_running() => {
                logic::steer(&mut self.state, -1.0);
                true
            }
            InputEvent::Arrow(Arrow::Right) if self.state.session.is_running() => {
                logic::steer(&mut self.state, 1.0);
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

#[cfg(test)]
mod tests {
    use super::state::{MIN_X, MOVE_STEP};
    use super::*;

    #[test]
    fn enter_starts_a_run() {
        let mut game = SkiingGame::new(3);
        assert!(game.handle_input(&InputEvent::Enter));
        assert!(game.is_active());
    }

    #[test]
    fn arrows_steer_while_running() {
        let mut game = SkiingGame::new(3);
        game.handle_input(&InputEvent::Enter);
        let x = game.state.skier_x;
        assert!(game.handle_input(&InputEvent::Arrow(Arrow::Left)));
        assert_eq!(game.state.skier_x, x - MOVE_STEP);
        assert!(game.handle_input(&InputEvent::Arrow(Arrow::Right)));
        assert_eq!(game.state.skier_x, x);
    }

    #[test]
    fn steering_ignored_before_start() {
        let mut game = SkiingGame::new(3);
        assert!(!game.handle_input(&InputEvent::Arrow(Arrow::Left)));
    }

    #[test]
    fn missed_gate_ends_run_via_tick() {
        let mut game = SkiingGame::new(3);
        game.handle_input(&InputEvent::Enter);
        game.state.skier_x = MIN_X;
        // Run long enough for a gate well off the skier to reach the band.
        game.state.gates[0].x = 260.0;
        game.state.gates[1].x = 260.0;
        game.state.gates[2].x = 260.0;
        game.tick(600);
        assert!(game.state.session.is_terminal());
        assert!(!game.is_active());
    }
}
