//! Semantic action IDs for the detection demo's click targets.

/// Start (or restart) the simulated feed.
pub const START_DEMO: u16 = 10;
/// Attempt webcam capture; falls back to the simulated feed.
pub const START_WEBCAM: u16 = 11;
/// Stop a running feed early.
pub const STOP_FEED: u16 = 12;
