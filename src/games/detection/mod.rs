//! AI Detection Demo — a simulated object-detection feed.
//!
//! Real camera capture is not available in the terminal build; asking for
//! it surfaces a notice and falls back to the simulated feed, so the
//! denial path degrades instead of failing.

pub mod actions;
pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::games::Game;
use crate::input::{ClickState, InputEvent};

use actions::{START_DEMO, START_WEBCAM, STOP_FEED};
use state::DetectionState;

pub struct DetectionGame {
    pub state: DetectionState,
}

impl DetectionGame {
    pub fn new(seed: u32) -> Self {
        Self {
            state: DetectionState::new(seed),
        }
    }

    fn start_demo(&mut self) {
        self.state.notice = None;
        self.state.begin_run();
    }

    fn start_webcam(&mut self) {
        self.state.notice = Some(
            "Camera capture isn't available here — running the simulated feed.".to_string(),
        );
        self.state.begin_run();
    }
}

impl Game for DetectionGame {
    fn id(&self) -> &'static str {
        "detection"
    }

    fn title(&self) -> &'static str {
        "AI Detection Demo"
    }

    fn tick_interval_ms(&self) -> u32 {
        200
    }

    fn is_active(&self) -> bool {
        self.state.session.is_running()
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Enter | InputEvent::Char('d') | InputEvent::Click(START_DEMO)
                if !self.state.session.is_running() =>
            {
                self.start_demo();
                true
            }
            InputEvent::Char('w') | InputEvent::Click(START_WEBCAM)
                if !self.state.session.is_running() =>
            {
                self.start_webcam();
                true
            }
            InputEvent::Char('s') | InputEvent::Click(STOP_FEED)
                if self.state.session.is_running() =>
            {
                logic::stop_feed(&mut self.state);
                true
            }
            _ => false,
        }
    }

    fn tick(&mut self, delta_ticks: u32) {
        for _ in 0..delta_ticks {
            if logic::step(&mut self.state) {
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
    use super::*;

    #[test]
    fn demo_mode_starts_clean() {
        let mut game = DetectionGame::new(5);
        assert!(game.handle_input(&InputEvent::Enter));
        assert!(game.is_active());
        assert!(game.state.notice.is_none());
    }

    #[test]
    fn webcam_request_falls_back_with_a_notice() {
        let mut game = DetectionGame::new(5);
        assert!(game.handle_input(&InputEvent::Char('w')));
        assert!(game.is_active());
        assert!(game.state.notice.is_some());
    }

    #[test]
    fn demo_after_webcam_clears_the_notice() {
        let mut game = DetectionGame::new(5);
        game.handle_input(&InputEvent::Char('w'));
        game.handle_input(&InputEvent::Char('s'));
        game.handle_input(&InputEvent::Char('d'));
        assert!(game.state.notice.is_none());
    }

    #[test]
    fn stop_only_works_while_running() {
        let mut game = DetectionGame::new(5);
        assert!(!game.handle_input(&InputEvent::Char('s')));
        game.handle_input(&InputEvent::Enter);
        assert!(game.handle_input(&InputEvent::Char('s')));
        assert!(!game.is_active());
    }

    #[test]
    fn feed_counts_while_ticking() {
        let mut game = DetectionGame::new(5);
        game.handle_input(&InputEvent::Enter);
        game.tick(5);
        assert_eq!(game.state.total(), 5);
    }
}
