//! Memory Match game state.

use crate::rng::Rng32;
use crate::session::Session;

pub const PAIRS: usize = 8;
pub const CARD_COUNT: usize = PAIRS * 2;
/// One symbol per pair, terminal-width-safe glyphs.
pub const SYMBOLS: [char; PAIRS] = ['λ', 'Σ', 'Δ', 'Ω', 'π', 'μ', '∴', '⊕'];

/// Ticks run at 100ms.
pub const TICKS_PER_SEC: u32 = 10;
/// A matched pair locks in after this delay.
pub const MATCH_DELAY_TICKS: u32 = 5;
/// A mismatched pair flips back after this longer delay.
pub const MISMATCH_DELAY_TICKS: u32 = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct MemoryCard {
    pub symbol: char,
    pub face_up: bool,
    pub matched: bool,
}

/// A two-card comparison waiting out its reveal delay. While one is
/// pending, further selections are ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Judgement {
    pub first: usize,
    pub second: usize,
    pub is_match: bool,
    pub ticks_left: u32,
}

pub struct MemoryState {
    pub session: Session,
    pub cards: Vec<MemoryCard>,
    /// Indices of face-up, unmatched cards awaiting comparison. At most 2.
    pub selection: Vec<usize>,
    pub pending: Option<Judgement>,
    pub moves: u32,
    /// Matched pairs so far. Win at [`PAIRS`].
    pub matches: u32,
    pub elapsed_ticks: u32,
    /// Fastest win in seconds, loaded from storage at mount.
    pub best_time_secs: Option<u32>,
    pub rng: Rng32,
}

impl MemoryState {
    pub fn new(seed: u32) -> Self {
        Self {
            session: Session::new(),
            cards: Vec::new(),
            selection: Vec::new(),
            pending: None,
            moves: 0,
            matches: 0,
            elapsed_ticks: 0,
            best_time_secs: None,
            rng: Rng32::new(seed),
        }
    }

    /// Shuffle a fresh deck and enter Running.
    pub fn begin_run(&mut self) {
        self.session.start();
        let mut symbols: Vec<char> = SYMBOLS.iter().chain(SYMBOLS.iter()).copied().collect();
        self.rng.shuffle(&mut symbols);
        self.cards = symbols
            .into_iter()
            .map(|symbol| MemoryCard {
                symbol,
                face_up: false,
                matched: false,
            })
            .collect();
        self.selection.clear();
        self.pending = None;
        self.moves = 0;
        self.matches = 0;
        self.elapsed_ticks = 0;
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_ticks / TICKS_PER_SEC
    }
}

/// `m:ss` display for elapsed/best times.
pub fn format_time(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_run_deals_a_full_shuffled_deck() {
        let mut s = MemoryState::new(8);
        s.begin_run();
        assert!(s.session.is_running());
        assert_eq!(s.cards.len(), CARD_COUNT);
        assert!(s.cards.iter().all(|c| !c.face_up && !c.matched));

        // Every symbol appears exactly twice.
        for symbol in SYMBOLS {
            let count = s.cards.iter().filter(|c| c.symbol == symbol).count();
            assert_eq!(count, 2, "symbol {symbol} appears {count} times");
        }
    }

    #[test]
    fn different_seeds_give_different_deals() {
        let mut a = MemoryState::new(1);
        let mut b = MemoryState::new(2);
        a.begin_run();
        b.begin_run();
        let order_a: Vec<char> = a.cards.iter().map(|c| c.symbol).collect();
        let order_b: Vec<char> = b.cards.iter().map(|c| c.symbol).collect();
        assert_ne!(order_a, order_b);
    }

    #[test]
    fn time_formatting() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(59), "0:59");
        assert_eq!(format_time(60), "1:00");
        assert_eq!(format_time(125), "2:05");
    }
}
