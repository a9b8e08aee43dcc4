//! Static pose classification
//!
//! A deterministic, priority-ordered rule chain over the feature record.
//! The first matching rule wins and later rules are never evaluated; the
//! ordering is part of the contract because rule conditions overlap. Each
//! rule carries a fixed confidence constant; the temporal stabilizer's
//! acceptance floor assumes these exact values.
//!
//! There are no error conditions: every frame classifies, defaulting to
//! UNKNOWN.

use manus_core::{Classification, Symbol};

use crate::HandFeatures;

// Per-rule confidence constants
const CONF_S: f32 = 0.92;
const CONF_A: f32 = 0.93;
const CONF_E: f32 = 0.91;
const CONF_T: f32 = 0.88;
const CONF_M: f32 = 0.85;
const CONF_B: f32 = 0.94;
const CONF_SPACE: f32 = 0.90;
const CONF_L: f32 = 0.93;
const CONF_D: f32 = 0.92;
const CONF_X: f32 = 0.86;
const CONF_Y: f32 = 0.94;
const CONF_I: f32 = 0.93;
const CONF_U: f32 = 0.92;
const CONF_V: f32 = 0.93;
const CONF_R: f32 = 0.87;
const CONF_W: f32 = 0.92;
const CONF_F: f32 = 0.91;
const CONF_C: f32 = 0.89;
const CONF_O: f32 = 0.90;
const CONF_G: f32 = 0.87;
const CONF_H: f32 = 0.86;
const CONF_N: f32 = 0.84;
const CONF_Q: f32 = 0.83;
const CONF_P: f32 = 0.84;

/// Classify one frame's features into a symbol
pub fn classify_pose(f: &HandFeatures) -> Classification {
    let only_index_up = f.index_up && !f.middle_up && !f.ring_up && !f.pinky_up;
    let index_middle_up = f.index_up && f.middle_up && !f.ring_up && !f.pinky_up;

    // Closed fist family: disambiguate by thumb position
    if f.up_count == 0 && f.all_down() {
        if f.thumb_tip.y < f.index_mcp.y - 0.02 {
            return Classification::new(Symbol::S, CONF_S);
        }

        if f.thumb_tip.y > f.wrist.y + 0.04 && f.thumb_tip.x > f.index_mcp.x - 0.03 {
            return Classification::new(Symbol::A, CONF_A);
        }

        if f.thumb_tip.y > f.index_mcp.y - 0.02 && f.thumb_tip.y < f.index_mcp.y + 0.03 {
            return Classification::new(Symbol::E, CONF_E);
        }

        if f.thumb_tip.x < f.index_mcp.x && f.thumb_tip.y < f.index_mcp.y + 0.02 {
            return Classification::new(Symbol::T, CONF_T);
        }

        return Classification::new(Symbol::M, CONF_M);
    }

    // All four fingers extended
    if f.up_count == 4 {
        let thumb_hidden = f.thumb_tip.y > f.index_mcp.y - 0.02;
        if thumb_hidden {
            return Classification::new(Symbol::B, CONF_B);
        }

        let all_spread = f.index_middle_spread > 0.04
            && f.middle_ring_spread > 0.03
            && f.ring_pinky_spread > 0.03;
        if all_spread {
            return Classification::new(Symbol::Space, CONF_SPACE);
        }
    }

    // Index alone
    if only_index_up {
        let thumb_out = (f.thumb_tip.x - f.index_mcp.x).abs() > 0.08;
        let thumb_level = (f.thumb_tip.y - f.index_mcp.y).abs() < 0.04;
        if thumb_out && thumb_level {
            return Classification::new(Symbol::L, CONF_L);
        }

        if f.thumb_middle_dist < 0.05 {
            return Classification::new(Symbol::D, CONF_D);
        }

        if !thumb_out {
            return Classification::new(Symbol::X, CONF_X);
        }
    }

    // Pinky alone
    if !f.index_up && !f.middle_up && !f.ring_up && f.pinky_up {
        let thumb_out = f.thumb_wrist_dist > f.thumb_mcp_wrist_dist * 1.3;
        if thumb_out {
            return Classification::new(Symbol::Y, CONF_Y);
        }
        return Classification::new(Symbol::I, CONF_I);
    }

    // Index and middle pair
    if index_middle_up {
        if f.index_middle_spread < 0.025 {
            return Classification::new(Symbol::U, CONF_U);
        }

        if f.index_middle_spread > 0.045 {
            return Classification::new(Symbol::V, CONF_V);
        }

        return Classification::new(Symbol::R, CONF_R);
    }

    // Three up, pinky folded
    if f.index_up && f.middle_up && f.ring_up && !f.pinky_up {
        return Classification::new(Symbol::W, CONF_W);
    }

    // Three up, index folded: thumb pinches the index tip
    if !f.index_up && f.middle_up && f.ring_up && f.pinky_up && f.thumb_index_dist < 0.06 {
        return Classification::new(Symbol::F, CONF_F);
    }

    // No finger extended, not necessarily folded: curved-hand shapes
    if f.up_count == 0 {
        let c_shape = f.thumb_index_dist > 0.07 && f.thumb_index_dist < 0.13;
        let thumb_out = f.thumb_wrist_dist > f.thumb_mcp_wrist_dist * 1.2;
        if c_shape && thumb_out {
            return Classification::new(Symbol::C, CONF_C);
        }

        if f.thumb_index_dist < 0.05 {
            return Classification::new(Symbol::O, CONF_O);
        }
    }

    // Index alone, pointing sideways
    if only_index_up {
        let sideways = f.index_tip.x < f.index_mcp.x - 0.06;
        let thumb_aligned = (f.thumb_tip.x - f.index_tip.x).abs() < 0.04;
        if sideways && thumb_aligned {
            return Classification::new(Symbol::G, CONF_G);
        }
    }

    // Index and middle sideways and together
    if index_middle_up {
        let sideways = f.index_tip.x < f.index_mcp.x - 0.05;
        let together = f.index_middle_spread < 0.03;
        if sideways && together {
            return Classification::new(Symbol::H, CONF_H);
        }
    }

    // All folded with the thumb tucked under
    if f.all_down() {
        let thumb_under = f.thumb_tip.y > f.wrist.y + 0.02 && f.thumb_tip.x < f.middle_mcp.x;
        if thumb_under {
            return Classification::new(Symbol::N, CONF_N);
        }
    }

    // Index curled over, remaining fingers not extended
    if f.index_curled && !f.middle_up && !f.ring_up && !f.pinky_up {
        return Classification::new(Symbol::Q, CONF_Q);
    }

    if f.index_curled && f.middle_curled && !f.ring_up && !f.pinky_up {
        return Classification::new(Symbol::P, CONF_P);
    }

    Classification::unknown()
}
