//! Typing Test — 30 seconds against a code snippet.

pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::games::Game;
use crate::input::{ClickState, InputEvent};

use state::TypingState;

/// Click action: begin a run.
pub const START_RUN: u16 = 10;

pub struct TypingGame {
    pub state: TypingState,
}

impl TypingGame {
    pub fn new(seed: u32) -> Self {
        #[allow(unused_mut)]
        let mut state = TypingState::new(seed);

        #[cfg(target_arch = "wasm32")]
        {
            state.best_wpm = crate::leaderboard::load_best("typing");
            state.board = crate::leaderboard::fetch("typing");
        }

        Self { state }
    }

    /// Enter-terminal effects: final WPM goes to the board and, when it
    /// improves, to the personal best.
    fn on_terminal(&mut self) {
        let wpm = self.state.wpm;
        if self.state.best_wpm.map_or(true, |b| wpm > b) {
            self.state.best_wpm = Some(wpm);
            #[cfg(target_arch = "wasm32")]
            crate::leaderboard::store_best("typing", wpm);
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.state.board = crate::leaderboard::record("typing", wpm, "You");
        }
    }
}

impl Game for TypingGame {
    fn id(&self) -> &'static str {
        "typing"
    }

    fn title(&self) -> &'static str {
        "Typing Test"
    }

    fn tick_interval_ms(&self) -> u32 {
        1000
    }

    fn is_active(&self) -> bool {
        self.state.session.is_running()
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Char(c) if self.state.session.is_running() => {
                if logic::type_char(&mut self.state, *c) {
                    self.on_terminal();
                }
                true
            }
            InputEvent::Backspace if self.state.session.is_running() => {
                if logic::backspace(&mut self.state) {
                    self.on_terminal();
                }
                true
            }
            InputEvent::Enter | InputEvent::Char('r')
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
            if logic::countdown_step(&mut self.state) {
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
    use super::state::TIME_LIMIT_SECS;
    use super::*;

    #[test]
    fn enter_starts_a_run() {
        let mut game = TypingGame::new(2);
        assert!(game.handle_input(&InputEvent::Enter));
        assert!(game.is_active());
    }

    #[test]
    fn chars_append_while_running() {
        let mut game = TypingGame::new(2);
        game.handle_input(&InputEvent::Enter);
        assert!(game.handle_input(&InputEvent::Char('c')));
        assert_eq!(game.state.typed, "c");
        assert!(game.handle_input(&InputEvent::Backspace));
        assert!(game.state.typed.is_empty());
    }

    #[test]
    fn chars_ignored_before_start() {
        let mut game = TypingGame::new(2);
        assert!(!game.handle_input(&InputEvent::Char('c')));
    }

    #[test]
    fn r_restarts_only_after_the_run() {
        let mut game = TypingGame::new(2);
        game.handle_input(&InputEvent::Enter);
        // While running, 'r' is a keystroke, not a restart.
        game.handle_input(&InputEvent::Char('r'));
        assert_eq!(game.state.typed, "r");
        assert!(game.is_active());

        game.tick(TIME_LIMIT_SECS);
        assert!(game.state.session.is_terminal());
        game.handle_input(&InputEvent::Char('r'));
        assert!(game.is_active());
        assert!(game.state.typed.is_empty());
    }

    #[test]
    fn expiry_records_best_wpm() {
        let mut game = TypingGame::new(2);
        game.handle_input(&InputEvent::Enter);
        game.tick(6);
        let prefix: String = game.state.target.chars().take(10).collect();
        for c in prefix.chars() {
            game.handle_input(&InputEvent::Char(c));
        }
        game.tick(TIME_LIMIT_SECS);
        assert!(game.state.session.is_terminal());
        assert_eq!(game.state.best_wpm, Some(game.state.wpm));
    }

    #[test]
    fn completion_ends_the_run_early() {
        let mut game = TypingGame::new(2);
        game.handle_input(&InputEvent::Enter);
        game.tick(1);
        let target = game.state.target;
        for c in target.chars() {
            game.handle_input(&InputEvent::Char(c));
        }
        assert!(game.state.session.is_terminal());
        assert!(game.state.completed);
    }
}
