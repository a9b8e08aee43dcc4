//! End-to-end recognition harness
//!
//! Wires the stabilizer, text composer, and session recorder together the
//! way a real frontend does: one call per tracking frame, confirmed events
//! folded into text and recorded with a frame-derived timestamp.

use manus_core::{HandFrame, Landmark, SessionTime, StabilizerConfig, SymbolEvent};
use manus_gesture::{GestureStabilizer, TrackerState};
use manus_text::{SessionRecorder, SessionSummary, TextComposer};

/// Nominal camera frame interval used for simulated timestamps
const FRAME_INTERVAL_MS: i64 = 33;

/// A simulated recognition frontend
pub struct RecognitionHarness {
    stabilizer: GestureStabilizer,
    composer: TextComposer,
    recorder: SessionRecorder,
    frame_count: u64,
}

impl RecognitionHarness {
    pub fn new() -> Self {
        Self::with_config(StabilizerConfig::default())
    }

    pub fn with_config(config: StabilizerConfig) -> Self {
        let mut recorder = SessionRecorder::new();
        recorder
            .start(SessionTime::ZERO)
            .expect("fresh recorder starts");

        Self {
            stabilizer: GestureStabilizer::new(config),
            composer: TextComposer::new(),
            recorder,
            frame_count: 0,
        }
    }

    fn now(&self) -> SessionTime {
        SessionTime::from_millis(self.frame_count as i64 * FRAME_INTERVAL_MS)
    }

    /// Process one frame; `None` is the hand-absent sentinel
    pub fn feed(&mut self, frame: Option<&HandFrame>) -> Option<SymbolEvent> {
        self.frame_count += 1;
        let event = self.stabilizer.advance(frame);
        if let Some(ref event) = event {
            self.composer.apply(event);
            self.recorder
                .record(event, self.now())
                .expect("session active while feeding");
        }
        event
    }

    /// Process one untrusted landmark slice
    pub fn feed_raw(&mut self, landmarks: &[Landmark]) -> Option<SymbolEvent> {
        self.frame_count += 1;
        let event = self.stabilizer.advance_raw(landmarks);
        if let Some(ref event) = event {
            self.composer.apply(event);
            self.recorder
                .record(event, self.now())
                .expect("session active while feeding");
        }
        event
    }

    /// Feed the same frame `n` times, collecting any events
    pub fn feed_repeated(&mut self, frame: &HandFrame, n: u32) -> Vec<SymbolEvent> {
        (0..n).filter_map(|_| self.feed(Some(frame))).collect()
    }

    /// Signal hand loss for one frame
    pub fn drop_hand(&mut self) {
        self.feed(None);
    }

    pub fn text(&self) -> &str {
        self.composer.contents()
    }

    pub fn tracker_state(&self) -> TrackerState {
        self.stabilizer.state()
    }

    pub fn frames_fed(&self) -> u64 {
        self.frame_count
    }

    /// End the session, returning the composed text and summary
    pub fn finish(mut self) -> (String, SessionSummary) {
        let summary = self
            .recorder
            .end(self.now())
            .expect("session active until finish");
        (self.composer.contents().to_owned(), summary)
    }
}

impl Default for RecognitionHarness {
    fn default() -> Self {
        Self::new()
    }
}
