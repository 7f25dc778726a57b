//! Simulated object-detection demo state.
//!
//! There is no real model behind this: boxes churn pseudo-randomly over a
//! virtual 400×400 frame with plausible labels and confidences, the way
//! the portfolio demos an edge-AI pipeline without shipping one.

use crate::rng::Rng32;
use crate::session::Session;

pub const FRAME_SIZE: f64 = 400.0;
/// At most this many boxes on screen.
pub const MAX_BOXES: usize = 5;
/// Chance a live box survives a churn tick.
pub const KEEP_CHANCE: f64 = 0.7;
/// The feed runs this many 200ms ticks (10 seconds), then stops itself.
pub const RUN_TICKS: u32 = 50;

/// Label catalog with base confidence per class.
pub const CATALOG: [(&str, f64); 5] = [
    ("Person", 0.95),
    ("Car", 0.92),
    ("Dog", 0.88),
    ("Bicycle", 0.85),
    ("Phone", 0.91),
];

#[derive(Clone, Debug, PartialEq)]
pub struct DetectionBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Index into [`CATALOG`].
    pub class: usize,
    pub confidence: f64,
}

pub struct DetectionState {
    pub session: Session,
    pub boxes: Vec<DetectionBox>,
    /// Simulated frames-per-second readout.
    pub fps: u32,
    /// Ticks until the feed stops itself.
    pub ticks_left: u32,
    /// User-facing notice, e.g. the webcam-unavailable fallback message.
    pub notice: Option<String>,
    pub rng: Rng32,
}

impl DetectionState {
    pub fn new(seed: u32) -> Self {
        Self {
            session: Session::new(),
            boxes: Vec::new(),
            fps: 0,
            ticks_left: RUN_TICKS,
            notice: None,
            rng: Rng32::new(seed),
        }
    }

    /// Clear the frame and enter Running for a fresh feed.
    pub fn begin_run(&mut self) {
        self.session.start();
        self.boxes.clear();
        self.fps = 0;
        self.ticks_left = RUN_TICKS;
    }

    /// Detections counted so far (one per processed tick).
    pub fn total(&self) -> u32 {
        self.session.score()
    }
}

pub fn spawn_box(rng: &mut Rng32) -> DetectionBox {
    let class = rng.gen_range(CATALOG.len() as u32) as usize;
    let (_, base_confidence) = CATALOG[class];
    DetectionBox {
        x: rng.next_f64() * FRAME_SIZE,
        y: rng.next_f64() * FRAME_SIZE,
        w: 60.0 + rng.next_f64() * 80.0,
        h: 60.0 + rng.next_f64() * 80.0,
        class,
        // Jitter of ±0.025 around the class baseline.
        confidence: base_confidence + (rng.next_f64() * 0.05 - 0.025),
    }
}
