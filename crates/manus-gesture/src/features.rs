//! Geometric feature extraction
//!
//! Pure function of a single frame; no state, no side effects. Everything
//! the rule engine consults is computed here once: finger extension flags,
//! fingertip distances, and the scale-invariant thumb reference distances.
//!
//! Image space has y growing downward, so "up" means a smaller y.

use manus_core::{HandFrame, HandJoint, Landmark};

/// Vertical margin a fingertip must clear above its base knuckle to count
/// as extended
pub const EXTENSION_MARGIN: f32 = 0.05;

/// Derived features for one frame
#[derive(Debug, Clone, Copy)]
pub struct HandFeatures {
    // Extension flags: tip meaningfully above the base knuckle
    pub index_up: bool,
    pub middle_up: bool,
    pub ring_up: bool,
    pub pinky_up: bool,

    // Fold flags: tip below the middle joint
    pub index_down: bool,
    pub middle_down: bool,
    pub ring_down: bool,
    pub pinky_down: bool,

    /// Number of extended non-thumb fingers (0-4)
    pub up_count: u8,

    // Curl flags: tip below its own base knuckle
    pub index_curled: bool,
    pub middle_curled: bool,

    // 3D fingertip distances
    pub thumb_index_dist: f32,
    pub thumb_middle_dist: f32,

    // Adjacent fingertip spreads (x axis only)
    pub index_middle_spread: f32,
    pub middle_ring_spread: f32,
    pub ring_pinky_spread: f32,

    // Thumb extension references, compared as ratios for scale invariance
    pub thumb_wrist_dist: f32,
    pub thumb_mcp_wrist_dist: f32,

    // Raw positions the rules consult directly
    pub wrist: Landmark,
    pub thumb_tip: Landmark,
    pub index_mcp: Landmark,
    pub index_tip: Landmark,
    pub middle_mcp: Landmark,
    pub middle_tip: Landmark,
}

impl HandFeatures {
    /// All four non-thumb fingers folded below their middle joints
    #[inline]
    pub fn all_down(&self) -> bool {
        self.index_down && self.middle_down && self.ring_down && self.pinky_down
    }
}

/// Extract the feature record from one frame
pub fn extract_features(frame: &HandFrame) -> HandFeatures {
    let wrist = *frame.joint(HandJoint::Wrist);
    let thumb_tip = *frame.joint(HandJoint::ThumbTip);
    let thumb_mcp = *frame.joint(HandJoint::ThumbMcp);

    let index_mcp = *frame.joint(HandJoint::IndexMcp);
    let index_pip = *frame.joint(HandJoint::IndexPip);
    let index_tip = *frame.joint(HandJoint::IndexTip);

    let middle_mcp = *frame.joint(HandJoint::MiddleMcp);
    let middle_pip = *frame.joint(HandJoint::MiddlePip);
    let middle_tip = *frame.joint(HandJoint::MiddleTip);

    let ring_mcp = *frame.joint(HandJoint::RingMcp);
    let ring_pip = *frame.joint(HandJoint::RingPip);
    let ring_tip = *frame.joint(HandJoint::RingTip);

    let pinky_mcp = *frame.joint(HandJoint::PinkyMcp);
    let pinky_pip = *frame.joint(HandJoint::PinkyPip);
    let pinky_tip = *frame.joint(HandJoint::PinkyTip);

    let index_up = index_tip.y < index_mcp.y - EXTENSION_MARGIN;
    let middle_up = middle_tip.y < middle_mcp.y - EXTENSION_MARGIN;
    let ring_up = ring_tip.y < ring_mcp.y - EXTENSION_MARGIN;
    let pinky_up = pinky_tip.y < pinky_mcp.y - EXTENSION_MARGIN;

    let up_count =
        index_up as u8 + middle_up as u8 + ring_up as u8 + pinky_up as u8;

    HandFeatures {
        index_up,
        middle_up,
        ring_up,
        pinky_up,
        index_down: index_tip.y > index_pip.y,
        middle_down: middle_tip.y > middle_pip.y,
        ring_down: ring_tip.y > ring_pip.y,
        pinky_down: pinky_tip.y > pinky_pip.y,
        up_count,
        index_curled: index_tip.y > index_mcp.y,
        middle_curled: middle_tip.y > middle_mcp.y,
        thumb_index_dist: thumb_tip.distance(&index_tip),
        thumb_middle_dist: thumb_tip.distance(&middle_tip),
        index_middle_spread: (index_tip.x - middle_tip.x).abs(),
        middle_ring_spread: (middle_tip.x - ring_tip.x).abs(),
        ring_pinky_spread: (ring_tip.x - pinky_tip.x).abs(),
        thumb_wrist_dist: thumb_tip.distance(&wrist),
        thumb_mcp_wrist_dist: thumb_mcp.distance(&wrist),
        wrist,
        thumb_tip,
        index_mcp,
        index_tip,
        middle_mcp,
        middle_tip,
    }
}
