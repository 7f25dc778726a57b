//! Semantic action IDs for Memory Match click targets.

/// Begin or restart a run (start screen and win overlay).
pub const START_RUN: u16 = 10;
/// One target per card: `CARD_BASE + index` for indices `0..16`.
pub const CARD_BASE: u16 = 100;
