//! Typing Test game state.

use crate::leaderboard::ScoreEntry;
use crate::rng::Rng32;
use crate::session::Session;

pub const TIME_LIMIT_SECS: u32 = 30;

/// Snippets the test picks from at random.
pub const SNIPPETS: [&str; 5] = [
    "const hello = () => console.log('Hello World');",
    "for (let i = 0; i < 10; i++) { sum += i; }",
    "function fibonacci(n) { return n <= 1 ? n : fibonacci(n-1) + fibonacci(n-2); }",
    "async function fetchData() { const res = await fetch(url); return res.json(); }",
    "const sorted = arr.sort((a, b) => a - b);",
];

pub struct TypingState {
    pub session: Session,
    /// Text to type, chosen at session start.
    pub target: &'static str,
    /// What the player has typed so far.
    pub typed: String,
    pub time_left: u32,
    pub wpm: u32,
    /// Positional match ratio in percent, 100 for empty input.
    pub accuracy: u32,
    /// Whether the run ended with an exact match (vs the clock).
    pub completed: bool,
    /// Personal best WPM, loaded from storage at mount.
    pub best_wpm: Option<u32>,
    pub rng: Rng32,
    /// Cached top-10 board for display.
    pub board: Vec<ScoreEntry>,
}

impl TypingState {
    pub fn new(seed: u32) -> Self {
        Self {
            session: Session::new(),
            target: SNIPPETS[0],
            typed: String::new(),
            time_left: TIME_LIMIT_SECS,
            wpm: 0,
            accuracy: 100,
            completed: false,
            best_wpm: None,
            rng: Rng32::new(seed),
            board: Vec::new(),
        }
    }

    /// Pick a fresh snippet and enter Running.
    pub fn begin_run(&mut self) {
        self.session.start();
        self.target = SNIPPETS[self.rng.gen_range(SNIPPETS.len() as u32) as usize];
        self.typed.clear();
        self.time_left = TIME_LIMIT_SECS;
        self.wpm = 0;
        self.accuracy = 100;
        self.completed = false;
    }

    pub fn elapsed_secs(&self) -> u32 {
        TIME_LIMIT_SECS - self.time_left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_run_resets_the_test() {
        let mut s = TypingState::new(3);
        s.begin_run();
        assert!(s.session.is_running());
        assert!(s.typed.is_empty());
        assert_eq!(s.time_left, TIME_LIMIT_SECS);
        assert_eq!(s.accuracy, 100);
        assert_eq!(s.wpm, 0);
        assert!(SNIPPETS.contains(&s.target));
    }

    #[test]
    fn snippet_choice_follows_the_rng() {
        // Two states with different seeds should (for these seeds) pick
        // different snippets; pinned to keep the RNG wiring honest.
        let mut a = TypingState::new(1);
        let mut b = TypingState::new(5);
        a.begin_run();
        b.begin_run();
        assert_ne!(a.target, b.target);
    }
}
