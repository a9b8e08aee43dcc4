//! Synthetic hand-pose simulator
//!
//! Canonical landmark frames for every statically recognizable symbol, plus
//! jitter and malformed-input generators. The geometry is a right hand seen
//! by the camera: wrist low in the image, knuckle row at y = 0.6, raised
//! fingertips near y = 0.4.

use rand::Rng;

use manus_core::{HandFrame, HandJoint, Landmark, Symbol, LANDMARK_COUNT};

const WRIST: (f32, f32) = (0.50, 0.80);
const FINGER_XS: [f32; 4] = [0.44, 0.48, 0.52, 0.56];

fn finger_joints(i: usize) -> [HandJoint; 4] {
    [
        [
            HandJoint::IndexMcp,
            HandJoint::IndexPip,
            HandJoint::IndexDip,
            HandJoint::IndexTip,
        ],
        [
            HandJoint::MiddleMcp,
            HandJoint::MiddlePip,
            HandJoint::MiddleDip,
            HandJoint::MiddleTip,
        ],
        [
            HandJoint::RingMcp,
            HandJoint::RingPip,
            HandJoint::RingDip,
            HandJoint::RingTip,
        ],
        [
            HandJoint::PinkyMcp,
            HandJoint::PinkyPip,
            HandJoint::PinkyDip,
            HandJoint::PinkyTip,
        ],
    ][i]
}

/// All fingers curled into a fist, thumb resting high
fn base_hand() -> [Landmark; LANDMARK_COUNT] {
    let mut p = [Landmark::zero(); LANDMARK_COUNT];
    p[HandJoint::Wrist.index()] = Landmark::new(WRIST.0, WRIST.1, 0.0);
    p[HandJoint::ThumbCmc.index()] = Landmark::new(0.56, 0.75, 0.0);
    p[HandJoint::ThumbMcp.index()] = Landmark::new(0.55, 0.70, 0.0);
    p[HandJoint::ThumbIp.index()] = Landmark::new(0.53, 0.66, 0.0);
    p[HandJoint::ThumbTip.index()] = Landmark::new(0.58, 0.72, 0.0);
    for i in 0..4 {
        curl(&mut p, i);
    }
    p
}

fn curl(p: &mut [Landmark; LANDMARK_COUNT], i: usize) {
    let [mcp, pip, dip, tip] = finger_joints(i);
    let x = FINGER_XS[i];
    p[mcp.index()] = Landmark::new(x, 0.60, 0.0);
    p[pip.index()] = Landmark::new(x, 0.62, 0.0);
    p[dip.index()] = Landmark::new(x, 0.66, 0.0);
    p[tip.index()] = Landmark::new(x, 0.68, 0.0);
}

fn raise(p: &mut [Landmark; LANDMARK_COUNT], i: usize) {
    let [mcp, pip, dip, tip] = finger_joints(i);
    let x = FINGER_XS[i];
    p[mcp.index()] = Landmark::new(x, 0.60, 0.0);
    p[pip.index()] = Landmark::new(x, 0.50, 0.0);
    p[dip.index()] = Landmark::new(x, 0.45, 0.0);
    p[tip.index()] = Landmark::new(x, 0.40, 0.0);
}

fn half_curl(p: &mut [Landmark; LANDMARK_COUNT], i: usize) {
    let [mcp, pip, dip, tip] = finger_joints(i);
    let x = FINGER_XS[i];
    p[mcp.index()] = Landmark::new(x, 0.60, 0.0);
    p[pip.index()] = Landmark::new(x, 0.61, 0.0);
    p[dip.index()] = Landmark::new(x - 0.01, 0.60, 0.0);
    p[tip.index()] = Landmark::new(x - 0.02, 0.58, 0.0);
}

fn thumb(p: &mut [Landmark; LANDMARK_COUNT], x: f32, y: f32) {
    p[HandJoint::ThumbTip.index()] = Landmark::new(x, y, 0.0);
}

fn tip(p: &mut [Landmark; LANDMARK_COUNT], joint: HandJoint, x: f32, y: f32) {
    p[joint.index()] = Landmark::new(x, y, 0.0);
}

/// Symbols the simulator can pose (the full static repertoire)
pub fn supported_symbols() -> &'static [Symbol] {
    &[
        Symbol::A,
        Symbol::B,
        Symbol::C,
        Symbol::D,
        Symbol::E,
        Symbol::F,
        Symbol::G,
        Symbol::I,
        Symbol::L,
        Symbol::M,
        Symbol::N,
        Symbol::O,
        Symbol::Q,
        Symbol::R,
        Symbol::S,
        Symbol::U,
        Symbol::V,
        Symbol::W,
        Symbol::X,
        Symbol::Y,
        Symbol::Space,
    ]
}

/// Canonical frame for one symbol, or `None` for symbols with no static
/// pose (motion letters, DELETE)
pub fn pose(symbol: Symbol) -> Option<HandFrame> {
    let mut p = base_hand();

    match symbol {
        Symbol::A => thumb(&mut p, 0.60, 0.85),
        Symbol::S => thumb(&mut p, 0.46, 0.55),
        Symbol::E => thumb(&mut p, 0.46, 0.60),
        Symbol::M => thumb(&mut p, 0.46, 0.66),

        Symbol::B => {
            for i in 0..4 {
                raise(&mut p, i);
            }
            thumb(&mut p, 0.47, 0.62);
        }
        Symbol::Space => {
            for i in 0..4 {
                raise(&mut p, i);
            }
            tip(&mut p, HandJoint::IndexTip, 0.38, 0.40);
            tip(&mut p, HandJoint::MiddleTip, 0.43, 0.40);
            tip(&mut p, HandJoint::RingTip, 0.475, 0.40);
            tip(&mut p, HandJoint::PinkyTip, 0.51, 0.40);
            thumb(&mut p, 0.47, 0.43);
        }

        Symbol::L => {
            raise(&mut p, 0);
            thumb(&mut p, 0.56, 0.62);
        }
        Symbol::D => {
            raise(&mut p, 0);
            thumb(&mut p, 0.47, 0.66);
        }
        Symbol::X => {
            raise(&mut p, 0);
            thumb(&mut p, 0.48, 0.52);
        }
        Symbol::G => {
            tip(&mut p, HandJoint::IndexPip, 0.38, 0.56);
            tip(&mut p, HandJoint::IndexDip, 0.34, 0.54);
            tip(&mut p, HandJoint::IndexTip, 0.30, 0.52);
            thumb(&mut p, 0.28, 0.70);
        }

        Symbol::Y => {
            raise(&mut p, 3);
            thumb(&mut p, 0.70, 0.65);
        }
        Symbol::I => {
            raise(&mut p, 3);
            thumb(&mut p, 0.52, 0.70);
        }

        Symbol::U => {
            raise(&mut p, 0);
            raise(&mut p, 1);
            tip(&mut p, HandJoint::IndexTip, 0.44, 0.40);
            tip(&mut p, HandJoint::MiddleTip, 0.46, 0.40);
        }
        Symbol::V => {
            raise(&mut p, 0);
            raise(&mut p, 1);
            tip(&mut p, HandJoint::IndexTip, 0.40, 0.40);
        }
        Symbol::R => {
            raise(&mut p, 0);
            raise(&mut p, 1);
            tip(&mut p, HandJoint::MiddleTip, 0.475, 0.40);
        }

        Symbol::W => {
            for i in 0..3 {
                raise(&mut p, i);
            }
        }
        Symbol::F => {
            for i in 1..4 {
                raise(&mut p, i);
            }
            thumb(&mut p, 0.42, 0.64);
        }

        Symbol::C => {
            for i in 0..4 {
                half_curl(&mut p, i);
            }
            thumb(&mut p, 0.34, 0.52);
        }
        Symbol::O => {
            for i in 0..4 {
                half_curl(&mut p, i);
            }
            thumb(&mut p, 0.44, 0.60);
        }

        Symbol::N => {
            tip(&mut p, HandJoint::IndexPip, 0.44, 0.50);
            tip(&mut p, HandJoint::IndexDip, 0.44, 0.51);
            tip(&mut p, HandJoint::IndexTip, 0.44, 0.52);
            thumb(&mut p, 0.30, 0.83);
        }
        Symbol::Q => {
            tip(&mut p, HandJoint::IndexPip, 0.44, 0.62);
            tip(&mut p, HandJoint::IndexTip, 0.44, 0.65);
            tip(&mut p, HandJoint::MiddlePip, 0.48, 0.60);
            tip(&mut p, HandJoint::MiddleTip, 0.48, 0.59);
            thumb(&mut p, 0.58, 0.75);
        }

        _ => return None,
    }

    Some(HandFrame::from_array(p))
}

/// A pose no rule matches (open hand, thumb clear, fingers neither together
/// nor spread)
pub fn unknown_pose() -> HandFrame {
    let mut p = base_hand();
    for i in 0..4 {
        raise(&mut p, i);
    }
    tip(&mut p, HandJoint::IndexTip, 0.44, 0.40);
    tip(&mut p, HandJoint::MiddleTip, 0.47, 0.40);
    tip(&mut p, HandJoint::RingTip, 0.50, 0.40);
    tip(&mut p, HandJoint::PinkyTip, 0.53, 0.40);
    thumb(&mut p, 0.60, 0.45);
    HandFrame::from_array(p)
}

/// Perturb every landmark by up to `amplitude` in x and y, simulating
/// detector jitter. Canonical poses survive amplitudes up to ~0.002.
pub fn jitter<R: Rng>(frame: &HandFrame, rng: &mut R, amplitude: f32) -> HandFrame {
    let mut points = *frame.landmarks();
    for point in &mut points {
        point.x += rng.gen_range(-amplitude..=amplitude);
        point.y += rng.gen_range(-amplitude..=amplitude);
    }
    HandFrame::from_array(points)
}

/// A fully random frame; usually classifies as UNKNOWN
pub fn noise_frame<R: Rng>(rng: &mut R) -> HandFrame {
    let mut points = [Landmark::zero(); LANDMARK_COUNT];
    for point in &mut points {
        *point = Landmark::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0), 0.0);
    }
    HandFrame::from_array(points)
}

/// Malformed input: the first `len` landmarks of a valid frame
pub fn truncated(frame: &HandFrame, len: usize) -> Vec<Landmark> {
    frame.landmarks()[..len.min(LANDMARK_COUNT)].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_supported_symbol_has_a_pose() {
        for &symbol in supported_symbols() {
            assert!(pose(symbol).is_some(), "missing pose for {symbol}");
        }
    }

    #[test]
    fn test_unposeable_symbols_return_none() {
        for symbol in [Symbol::J, Symbol::K, Symbol::Z, Symbol::Delete] {
            assert!(pose(symbol).is_none());
        }
    }

    #[test]
    fn test_jitter_keeps_frame_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        let frame = pose(Symbol::A).unwrap();
        let shaken = jitter(&frame, &mut rng, 0.002);
        assert_eq!(shaken.landmarks().len(), LANDMARK_COUNT);
        assert_ne!(shaken, frame);
    }

    #[test]
    fn test_truncated_is_malformed() {
        let frame = pose(Symbol::B).unwrap();
        assert_eq!(truncated(&frame, 20).len(), 20);
        assert_eq!(truncated(&frame, 0).len(), 0);
    }
}
