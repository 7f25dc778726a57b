//! Traffic Dodge — three lanes, zero collisions, every dodged vehicle
//! counts as a detection.

pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::games::Game;
use crate::input::{Arrow, ClickState, InputEvent};

use state::TrafficState;

/// Click action: begin a run.
pub const START_RUN: u16 = 10;

pub struct TrafficGame {
    pub state: TrafficState,
}

impl TrafficGame {
    pub fn new(seed: u32) -> Self {
        #[allow(unused_mut)]
        let mut state = TrafficState::new(seed);

        #[cfg(target_arch = "wasm32")]
        {
            state.board = crate::leaderboard::fetch("traffic");
        }

        Self { state }
    }

    fn on_terminal(&mut self) {
        // The board tracks vehicles detected, matching the on-screen
        // headline stat rather than the derived score.
        #[cfg(target_arch = "wasm32")]
        {
            self.state.board = crate::leaderboard::record("traffic", self.state.detected, "You");
        }
    }
}

impl Game for TrafficGame {
    fn id(&self) -> &'static str {
        "traffic"
    }

    fn title(&self) -> &'static str {
        "Traffic Dodge"
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
                logic::change_lane(&mut self.state, -1);
                true
            }
            InputEvent::Arrow(Arrow::Right) if self.state.session.is_running() => {
                logic::change_lane(&mut self.state, 1);
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
