//! Game trait and game selection logic.

pub mod detection;
pub mod memory;
pub mod skiing;
pub mod snake;
pub mod traffic;
pub mod typing;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};

/// Trait that all games implement.
///
/// The shell owns one [`crate::time::TickClock`] per mounted game, armed
/// while [`is_active`](Game::is_active) is true; `tick` is only ever
/// called with ticks produced by that clock, so a session that left the
/// running state stops mutating entities deterministically.
pub trait Game {
    /// Stable identifier used in persistence keys (`leaderboard_<id>`).
    fn id(&self) -> &'static str;

    /// Display title for the menu and title bar.
    fn title(&self) -> &'static str;

    /// Fixed interval between simulation ticks, in milliseconds.
    fn tick_interval_ms(&self) -> u32;

    /// Whether a run is in progress (drives the shell's clock arming).
    fn is_active(&self) -> bool;

    /// Handle an input event. Returns true if the event was consumed.
    fn handle_input(&mut self, event: &InputEvent) -> bool;

    /// Advance game logic by `delta_ticks` discrete ticks.
    fn tick(&mut self, delta_ticks: u32);

    /// Render the game into the given area.
    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>);
}

/// Which game the player has selected (or is choosing).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameChoice {
    Snake,
    Skiing,
    Traffic,
    Memory,
    Typing,
    Detection,
}

impl GameChoice {
    pub fn all() -> [GameChoice; 6] {
        [
            GameChoice::Snake,
            GameChoice::Skiing,
            GameChoice::Traffic,
            GameChoice::Memory,
            GameChoice::Typing,
            GameChoice::Detection,
        ]
    }

    /// Menu label. Matches the mounted game's `title()`.
    pub fn title(&self) -> &'static str {
        match self {
            GameChoice::Snake => "Snake",
            GameChoice::Skiing => "Ski Slalom",
            GameChoice::Traffic => "Traffic Dodge",
            GameChoice::Memory => "Memory Match",
            GameChoice::Typing => "Typing Test",
            GameChoice::Detection => "AI Detection Demo",
        }
    }

    /// One-line menu description.
    pub fn tagline(&self) -> &'static str {
        match self {
            GameChoice::Snake => "Eat, grow, don't bite yourself",
            GameChoice::Skiing => "Thread the gates, gain speed",
            GameChoice::Traffic => "Three lanes, zero collisions",
            GameChoice::Memory => "Match all eight pairs",
            GameChoice::Typing => "30 seconds of code typing",
            GameChoice::Detection => "Simulated object detection feed",
        }
    }
}

/// Top-level application state.
pub enum AppState {
    /// Showing the game selection menu.
    Menu,
    /// Playing a game.
    Playing { game: Box<dyn Game> },
}

/// Create a game instance from a choice. `seed` feeds the game's RNG so a
/// fresh mount gets fresh spawns/shuffles.
pub fn create_game(choice: &GameChoice, seed: u32) -> Box<dyn Game> {
    match choice {
        GameChoice::Snake => Box::new(snake::SnakeGame::new(seed)),
        GameChoice::Skiing => Box::new(skiing::SkiingGame::new(seed)),
        GameChoice::Traffic => Box::new(traffic::TrafficGame::new(seed)),
        GameChoice::Memory => Box::new(memory::MemoryGame::new(seed)),
        GameChoice::Typing => Box::new(typing::TypingGame::new(seed)),
        GameChoice::Detection => Box::new(detection::DetectionGame::new(seed)),
    }
}
