//! Temporal stabilization
//!
//! A per-session state machine that consumes one static classification per
//! frame and emits a sparse sequence of confirmed symbol events. Jitter is
//! rejected three ways: a hard confidence floor before anything enters the
//! vote, a majority vote over a short window of accepted results, and a
//! hold requirement plus post-emission cooldown.
//!
//! Counters are defined in frame units, not wall-clock time, so the caller
//! must feed every tracking frame in order with none skipped or reordered.
//! The state must be exclusively owned by one frame-processing call at a
//! time; drive one stabilizer per tracked hand.

use std::collections::VecDeque;

use tracing::debug;

use manus_core::{HandFrame, Landmark, StabilizerConfig, Symbol, SymbolEvent};

use crate::{classify_pose, extract_features};

/// Stabilizer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    /// No hand, or just reset
    Idle,
    /// At least one accepted frame since the last reset
    Tracking,
}

/// Per-session temporal stabilizer
#[derive(Debug)]
pub struct GestureStabilizer {
    config: StabilizerConfig,

    /// Recent accepted classifications, oldest first
    window: VecDeque<(Symbol, f32)>,

    /// Majority symbol from the previous frame's window evaluation
    last_candidate: Option<Symbol>,

    /// Consecutive frames the current candidate has held the majority
    hold_count: u32,

    /// Most recently emitted symbol; cleared only by reset
    last_emitted: Option<Symbol>,

    /// Frames left in the post-emission quiet period
    cooldown_remaining: u32,

    state: TrackerState,
}

impl GestureStabilizer {
    pub fn new(config: StabilizerConfig) -> Self {
        let window = VecDeque::with_capacity(config.window_capacity);
        Self {
            config,
            window,
            last_candidate: None,
            hold_count: 0,
            last_emitted: None,
            cooldown_remaining: 0,
            state: TrackerState::Idle,
        }
    }

    /// Advance one frame; `None` input is the hand-absent sentinel.
    ///
    /// Returns a confirmed event for at most one frame in every
    /// hold-plus-cooldown span; every other call returns nothing.
    pub fn advance(&mut self, frame: Option<&HandFrame>) -> Option<SymbolEvent> {
        let frame = match frame {
            Some(frame) => frame,
            None => {
                self.reset();
                return None;
            }
        };

        if self.cooldown_remaining > 0 {
            self.cooldown_remaining -= 1;
            return None;
        }

        let result = classify_pose(&extract_features(frame));
        let symbol = match result.symbol {
            Some(symbol) if result.confidence >= self.config.accept_floor => symbol,
            // Low-confidence noise is discarded outright, never averaged in
            _ => return None,
        };

        self.state = TrackerState::Tracking;
        self.window.push_back((symbol, result.confidence));
        if self.window.len() > self.config.window_capacity {
            self.window.pop_front();
        }

        let (majority, mean_confidence) = self.majority();

        if self.last_candidate == Some(majority) {
            self.hold_count += 1;
        } else {
            self.last_candidate = Some(majority);
            self.hold_count = 1;
        }

        if self.hold_count >= self.config.hold_frames && self.last_emitted != Some(majority) {
            self.last_emitted = Some(majority);
            self.cooldown_remaining = self.config.cooldown_frames;
            self.hold_count = 0;
            debug!(symbol = %majority, confidence = mean_confidence, "symbol confirmed");
            return Some(SymbolEvent::new(majority, mean_confidence));
        }

        None
    }

    /// Advance on an untrusted landmark slice.
    ///
    /// Any slice that is not exactly 21 points is malformed input and is
    /// treated as hand-absent: full reset, no event. This is policy, not an
    /// error path.
    pub fn advance_raw(&mut self, landmarks: &[Landmark]) -> Option<SymbolEvent> {
        match HandFrame::new(landmarks) {
            Ok(frame) => self.advance(Some(&frame)),
            Err(_) => {
                self.reset();
                None
            }
        }
    }

    /// Force the state machine to idle: window cleared, counters zeroed,
    /// candidate and last-emitted symbol forgotten.
    pub fn reset(&mut self) {
        if self.state == TrackerState::Tracking {
            debug!("stabilizer reset");
        }
        self.window.clear();
        self.last_candidate = None;
        self.hold_count = 0;
        self.last_emitted = None;
        self.cooldown_remaining = 0;
        self.state = TrackerState::Idle;
    }

    /// Current majority over the window, with the mean confidence of the
    /// winning symbol's occurrences. `None` while the window is empty.
    /// Ties go to the symbol seen first in window insertion order.
    pub fn window_majority(&self) -> Option<(Symbol, f32)> {
        if self.window.is_empty() {
            return None;
        }
        Some(self.majority())
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn hold_count(&self) -> u32 {
        self.hold_count
    }

    pub fn cooldown_remaining(&self) -> u32 {
        self.cooldown_remaining
    }

    pub fn last_emitted(&self) -> Option<Symbol> {
        self.last_emitted
    }

    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    fn majority(&self) -> (Symbol, f32) {
        // Tallies in first-seen order; the strict comparison below makes
        // the earliest-seen symbol win all ties.
        let mut tallies: Vec<(Symbol, u32, f32)> = Vec::new();
        for &(symbol, confidence) in &self.window {
            match tallies.iter_mut().find(|(s, _, _)| *s == symbol) {
                Some(entry) => {
                    entry.1 += 1;
                    entry.2 += confidence;
                }
                None => tallies.push((symbol, 1, confidence)),
            }
        }

        let mut best = tallies[0];
        for &entry in &tallies[1..] {
            if entry.1 > best.1 {
                best = entry;
            }
        }

        (best.0, best.2 / best.1 as f32)
    }
}

impl Default for GestureStabilizer {
    fn default() -> Self {
        Self::new(StabilizerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manus_core::{HandJoint, LANDMARK_COUNT};
    use proptest::prelude::*;

    // Minimal poses: a fist reading as A and a spread pair reading as V.
    // The test-harness crate carries the full pose bank; these two are
    // enough to exercise the state machine.

    fn fist_a() -> HandFrame {
        let mut p = [Landmark::zero(); LANDMARK_COUNT];
        p[HandJoint::Wrist.index()] = Landmark::new(0.50, 0.80, 0.0);
        p[HandJoint::ThumbCmc.index()] = Landmark::new(0.56, 0.75, 0.0);
        p[HandJoint::ThumbMcp.index()] = Landmark::new(0.55, 0.70, 0.0);
        p[HandJoint::ThumbIp.index()] = Landmark::new(0.57, 0.78, 0.0);
        p[HandJoint::ThumbTip.index()] = Landmark::new(0.60, 0.85, 0.0);

        let xs = [0.44f32, 0.48, 0.52, 0.56];
        let fingers = [
            (HandJoint::IndexMcp, HandJoint::IndexPip, HandJoint::IndexDip, HandJoint::IndexTip),
            (HandJoint::MiddleMcp, HandJoint::MiddlePip, HandJoint::MiddleDip, HandJoint::MiddleTip),
            (HandJoint::RingMcp, HandJoint::RingPip, HandJoint::RingDip, HandJoint::RingTip),
            (HandJoint::PinkyMcp, HandJoint::PinkyPip, HandJoint::PinkyDip, HandJoint::PinkyTip),
        ];
        for (i, (mcp, pip, dip, tip)) in fingers.into_iter().enumerate() {
            p[mcp.index()] = Landmark::new(xs[i], 0.60, 0.0);
            p[pip.index()] = Landmark::new(xs[i], 0.62, 0.0);
            p[dip.index()] = Landmark::new(xs[i], 0.66, 0.0);
            p[tip.index()] = Landmark::new(xs[i], 0.68, 0.0);
        }
        HandFrame::from_array(p)
    }

    fn spread_v() -> HandFrame {
        let mut p = fist_a().landmarks().to_owned();
        p[HandJoint::ThumbTip.index()] = Landmark::new(0.58, 0.72, 0.0);
        p[HandJoint::IndexPip.index()] = Landmark::new(0.40, 0.50, 0.0);
        p[HandJoint::IndexDip.index()] = Landmark::new(0.40, 0.45, 0.0);
        p[HandJoint::IndexTip.index()] = Landmark::new(0.40, 0.40, 0.0);
        p[HandJoint::MiddlePip.index()] = Landmark::new(0.48, 0.50, 0.0);
        p[HandJoint::MiddleDip.index()] = Landmark::new(0.48, 0.45, 0.0);
        p[HandJoint::MiddleTip.index()] = Landmark::new(0.48, 0.40, 0.0);
        HandFrame::from_array(p)
    }

    fn feed(stabilizer: &mut GestureStabilizer, frame: &HandFrame, n: u32) -> Vec<SymbolEvent> {
        (0..n)
            .filter_map(|_| stabilizer.advance(Some(frame)))
            .collect()
    }

    #[test]
    fn test_emits_on_twentieth_steady_frame() {
        let mut stabilizer = GestureStabilizer::default();
        let frame = fist_a();

        let early = feed(&mut stabilizer, &frame, 19);
        assert!(early.is_empty());
        assert_eq!(stabilizer.state(), TrackerState::Tracking);

        let event = stabilizer.advance(Some(&frame)).expect("20th frame emits");
        assert_eq!(event.symbol, Symbol::A);
        assert!(event.confidence >= 0.80);
        assert_eq!(stabilizer.cooldown_remaining(), 30);
        assert_eq!(stabilizer.hold_count(), 0);
    }

    #[test]
    fn test_cooldown_and_last_emitted_block_repeat() {
        let mut stabilizer = GestureStabilizer::default();
        let frame = fist_a();

        assert_eq!(feed(&mut stabilizer, &frame, 20).len(), 1);

        // 30 frames consumed by cooldown, then one more past expiry:
        // the same symbol never re-emits while tracking continues
        assert!(feed(&mut stabilizer, &frame, 31).is_empty());
        assert_eq!(stabilizer.cooldown_remaining(), 0);
        assert_eq!(stabilizer.last_emitted(), Some(Symbol::A));

        // ... and holding much longer still stays quiet
        assert!(feed(&mut stabilizer, &frame, 60).is_empty());
    }

    #[test]
    fn test_hand_loss_allows_reemission() {
        let mut stabilizer = GestureStabilizer::default();
        let frame = fist_a();

        assert_eq!(feed(&mut stabilizer, &frame, 20).len(), 1);

        assert!(stabilizer.advance(None).is_none());
        assert_eq!(stabilizer.state(), TrackerState::Idle);
        assert_eq!(stabilizer.last_emitted(), None);

        let again = feed(&mut stabilizer, &frame, 20);
        assert_eq!(again.len(), 1);
        assert_eq!(again[0].symbol, Symbol::A);
    }

    #[test]
    fn test_malformed_input_resets_at_any_state() {
        let mut stabilizer = GestureStabilizer::default();
        let frame = fist_a();

        feed(&mut stabilizer, &frame, 7);
        assert_eq!(stabilizer.hold_count(), 7);

        assert!(stabilizer.advance_raw(&[Landmark::zero(); 20]).is_none());
        assert_eq!(stabilizer.state(), TrackerState::Idle);
        assert_eq!(stabilizer.window_len(), 0);
        assert_eq!(stabilizer.hold_count(), 0);

        assert!(stabilizer.advance_raw(&[]).is_none());
        assert_eq!(stabilizer.state(), TrackerState::Idle);

        // The next valid frame starts hold-counting from 1
        assert!(stabilizer.advance(Some(&frame)).is_none());
        assert_eq!(stabilizer.hold_count(), 1);
    }

    #[test]
    fn test_majority_mean_confidence_over_mixed_window() {
        let mut stabilizer = GestureStabilizer::default();
        let a = fist_a();
        let v = spread_v();

        // 6 V results and 4 A results, all individually above the floor
        feed(&mut stabilizer, &v, 6);
        feed(&mut stabilizer, &a, 4);
        assert_eq!(stabilizer.window_len(), 10);

        let (majority, confidence) = stabilizer.window_majority().unwrap();
        assert_eq!(majority, Symbol::V);
        // Mean of the six V confidences only
        assert!((confidence - 0.93).abs() < 1e-6);
    }

    #[test]
    fn test_candidate_change_resets_hold() {
        let mut stabilizer = GestureStabilizer::default();
        let a = fist_a();
        let v = spread_v();

        feed(&mut stabilizer, &a, 10);
        assert_eq!(stabilizer.hold_count(), 10);

        // Flood with V until the majority flips; hold restarts at 1 then
        feed(&mut stabilizer, &v, 6);
        assert_eq!(stabilizer.window_majority().unwrap().0, Symbol::V);
        assert!(stabilizer.hold_count() < 10);
    }

    #[test]
    fn test_window_is_bounded() {
        let mut stabilizer = GestureStabilizer::default();
        let frame = fist_a();
        feed(&mut stabilizer, &frame, 50);
        assert!(stabilizer.window_len() <= 10);
    }

    #[test]
    fn test_reset_is_idempotent_when_idle() {
        let mut stabilizer = GestureStabilizer::default();
        stabilizer.reset();
        assert_eq!(stabilizer.state(), TrackerState::Idle);
        assert!(stabilizer.window_majority().is_none());
    }

    proptest! {
        // Events only ever carry repertoire symbols at or above the floor,
        // and arbitrary garbage never panics the pipeline
        #[test]
        fn prop_events_respect_confidence_floor(
            frames in proptest::collection::vec(
                proptest::collection::vec((0.0f32..1.0, 0.0f32..1.0, -0.2f32..0.2), 0..24),
                0..64,
            )
        ) {
            let mut stabilizer = GestureStabilizer::default();
            for raw in &frames {
                let landmarks: Vec<Landmark> =
                    raw.iter().map(|&(x, y, z)| Landmark::new(x, y, z)).collect();
                if let Some(event) = stabilizer.advance_raw(&landmarks) {
                    prop_assert!(event.confidence >= 0.80);
                }
            }
        }
    }
}
