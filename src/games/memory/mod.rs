//! Memory Match — flip cards, match all eight pairs, beat your time.

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

use actions::{CARD_BASE, START_RUN};
use state::{MemoryState, CARD_COUNT};

pub struct MemoryGame {
    pub state: MemoryState,
}

impl MemoryGame {
    pub fn new(seed: u32) -> Self {
        #[allow(unused_mut)]
        let mut state = MemoryState::new(seed);

        #[cfg(target_arch = "wasm32")]
        {
            state.best_time_secs = crate::leaderboard::load_best("memory");
        }

        Self { state }
    }

    /// Enter-terminal effects: a faster time becomes the new best.
    fn on_terminal(&mut self) {
        let secs = self.state.elapsed_secs();
        if self.state.best_time_secs.map_or(true, |b| secs < b) {
            self.state.best_time_secs = Some(secs);
            #[cfg(target_arch = "wasm32")]
            crate::leaderboard::store_best("memory", secs);
        }
    }
}

impl Game for MemoryGame {
    fn id(&self) -> &'static str {
        "memory"
    }

    fn title(&self) -> &'static str {
        "Memory Match"
    }

    fn tick_interval_ms(&self) -> u32 {
        100
    }

    fn is_active(&self) -> bool {
        self.state.session.is_running()
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Click(id)
                if (CARD_BASE..CARD_BASE + CARD_COUNT as u16).contains(id)
                    && self.state.session.is_running() =>
            {
                logic::select_card(&mut self.state, (*id - CARD_BASE) as usize);
                true
            }
            // Keyboard fallback: a..p addresses the 16 cards row by row.
            InputEvent::Char(c @ 'a'..='p') if self.state.session.is_running() => {
                logic::select_card(&mut self.state, (*c as u8 - b'a') as usize);
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
    use super::state::MATCH_DELAY_TICKS;
    use super::*;

    #[test]
    fn enter_starts_a_run() {
        let mut game = MemoryGame::new(6);
        assert!(game.handle_input(&InputEvent::Enter));
        assert!(game.is_active());
        assert_eq!(game.state.cards.len(), CARD_COUNT);
    }

    #[test]
    fn clicks_select_cards() {
        let mut game = MemoryGame::new(6);
        game.handle_input(&InputEvent::Enter);
        assert!(game.handle_input(&InputEvent::Click(CARD_BASE + 5)));
        assert!(game.state.cards[5].face_up);
    }

    #[test]
    fn letter_keys_select_cards() {
        let mut game = MemoryGame::new(6);
        game.handle_input(&InputEvent::Enter);
        assert!(game.handle_input(&InputEvent::Char('c')));
        assert!(game.state.cards[2].face_up);
    }

    #[test]
    fn card_input_ignored_before_start() {
        let mut game = MemoryGame::new(6);
        assert!(!game.handle_input(&InputEvent::Click(CARD_BASE)));
    }

    #[test]
    fn winning_updates_best_time() {
        let mut game = MemoryGame::new(6);
        game.handle_input(&InputEvent::Enter);

        // Play out all pairs by peeking at the dealt deck.
        for symbol in super::state::SYMBOLS {
            let indices: Vec<usize> = (0..CARD_COUNT)
                .filter(|&i| game.state.cards[i].symbol == symbol)
                .collect();
            logic::select_card(&mut game.state, indices[0]);
            logic::select_card(&mut game.state, indices[1]);
            game.tick(MATCH_DELAY_TICKS);
        }
        assert!(game.state.session.is_terminal());
        assert_eq!(game.state.best_time_secs, Some(game.state.elapsed_secs()));
    }

    #[test]
    fn slower_win_keeps_old_best() {
        let mut game = MemoryGame::new(6);
        game.state.best_time_secs = Some(0);
        game.handle_input(&InputEvent::Enter);
        game.state.elapsed_ticks = 500;
        game.on_terminal();
        assert_eq!(game.state.best_time_secs, Some(0));
    }
}
