//! Hand frames - one detector observation per time step
//!
//! A `HandFrame` is the validated, fixed-size container the classification
//! core operates on. Anything that is not exactly 21 landmarks never becomes
//! a `HandFrame`; at the stabilizer boundary such input is the defined
//! "hand absent" variant, not an exception.

use crate::{HandJoint, Landmark, ManusError, ManusResult};

/// Number of landmarks in a valid frame
pub const LANDMARK_COUNT: usize = 21;

/// Skeleton topology - joint index pairs forming the hand wireframe.
/// Consumed by external overlay renderers; the core itself never draws.
pub const HAND_CONNECTIONS: [(usize, usize); 23] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    (0, 5),
    (5, 6),
    (6, 7),
    (7, 8),
    (0, 9),
    (9, 10),
    (10, 11),
    (11, 12),
    (0, 13),
    (13, 14),
    (14, 15),
    (15, 16),
    (0, 17),
    (17, 18),
    (18, 19),
    (19, 20),
    (5, 9),
    (9, 13),
    (13, 17),
];

/// The ordered set of 21 landmarks for one hand at one time step.
///
/// Immutable once built; the core never retains one beyond the call that
/// receives it.
#[derive(Debug, Clone, PartialEq)]
pub struct HandFrame {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl HandFrame {
    /// Build a frame from a landmark slice.
    ///
    /// Rejects any slice that is not exactly 21 points.
    pub fn new(landmarks: &[Landmark]) -> ManusResult<Self> {
        if landmarks.len() != LANDMARK_COUNT {
            return Err(ManusError::InvalidLandmarkCount {
                expected: LANDMARK_COUNT,
                actual: landmarks.len(),
            });
        }

        let mut points = [Landmark::zero(); LANDMARK_COUNT];
        points.copy_from_slice(landmarks);
        Ok(Self { landmarks: points })
    }

    /// Build a frame from an owned array (infallible by construction)
    pub fn from_array(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    /// Get a landmark by joint
    #[inline]
    pub fn joint(&self, joint: HandJoint) -> &Landmark {
        &self.landmarks[joint.index()]
    }

    /// All landmarks in anatomical order
    #[inline]
    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.landmarks
    }

    /// Axis-aligned bounding box over all landmarks, padded and clamped
    /// to the nominal `[0, 1]` image space.
    pub fn bounding_box(&self, padding: f32) -> BoundingBox {
        let mut min_x = 1.0f32;
        let mut min_y = 1.0f32;
        let mut max_x = 0.0f32;
        let mut max_y = 0.0f32;

        for lm in &self.landmarks {
            min_x = min_x.min(lm.x);
            min_y = min_y.min(lm.y);
            max_x = max_x.max(lm.x);
            max_y = max_y.max(lm.y);
        }

        BoundingBox {
            min_x: (min_x - padding).max(0.0),
            min_y: (min_y - padding).max(0.0),
            max_x: (max_x + padding).min(1.0),
            max_y: (max_y + padding).min(1.0),
        }
    }
}

/// Normalized 2D bounding box for a tracked hand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl BoundingBox {
    #[inline]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_hand() -> Vec<Landmark> {
        (0..LANDMARK_COUNT)
            .map(|i| Landmark::new(0.1 + i as f32 * 0.02, 0.5, 0.0))
            .collect()
    }

    #[test]
    fn test_frame_rejects_wrong_count() {
        let short = vec![Landmark::zero(); 20];
        let err = HandFrame::new(&short).unwrap_err();
        match err {
            ManusError::InvalidLandmarkCount { expected, actual } => {
                assert_eq!(expected, 21);
                assert_eq!(actual, 20);
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(HandFrame::new(&[]).is_err());
    }

    #[test]
    fn test_frame_joint_lookup() {
        let frame = HandFrame::new(&flat_hand()).unwrap();
        assert_eq!(frame.joint(HandJoint::Wrist).x, 0.1);
        let thumb_tip = frame.joint(HandJoint::ThumbTip);
        assert!((thumb_tip.x - (0.1 + 4.0 * 0.02)).abs() < 1e-6);
    }

    #[test]
    fn test_connections_index_bounds() {
        for (a, b) in HAND_CONNECTIONS {
            assert!(a < LANDMARK_COUNT);
            assert!(b < LANDMARK_COUNT);
        }
    }

    #[test]
    fn test_bounding_box_clamped() {
        let frame = HandFrame::new(&flat_hand()).unwrap();
        let bb = frame.bounding_box(0.05);

        assert!(bb.min_x >= 0.0 && bb.max_x <= 1.0);
        assert!(bb.min_y >= 0.0 && bb.max_y <= 1.0);
        assert!(bb.width() > 0.0);
        assert!(bb.height() > 0.0);
    }
}
