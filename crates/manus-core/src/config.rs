//! Configuration types
//!
//! Stabilizer constants are part of the interoperability contract: the
//! defaults below are the exact values every deployment runs with. The
//! config struct exists so tests and tuning experiments have one place to
//! look, not to invite per-user drift.

/// Temporal stabilizer tuning
#[derive(Debug, Clone)]
pub struct StabilizerConfig {
    /// Minimum per-frame confidence for a result to enter the vote window
    pub accept_floor: f32,

    /// Sliding window capacity (accepted classifications)
    pub window_capacity: usize,

    /// Consecutive majority frames required before emission
    pub hold_frames: u32,

    /// Quiet frames enforced after each emission
    pub cooldown_frames: u32,
}

impl Default for StabilizerConfig {
    fn default() -> Self {
        Self {
            accept_floor: 0.80,
            window_capacity: 10,
            hold_frames: 20,
            cooldown_frames: 30,
        }
    }
}

/// Display text size preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl TextSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextSize::Small => "small",
            TextSize::Medium => "medium",
            TextSize::Large => "large",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "small" => Some(TextSize::Small),
            "medium" => Some(TextSize::Medium),
            "large" => Some(TextSize::Large),
            _ => None,
        }
    }
}

/// Per-user display preferences
///
/// These belong to the surrounding application (overlay rendering, text
/// display); they do not alter the stabilizer's acceptance floor.
#[derive(Debug, Clone)]
pub struct UserPreferences {
    /// Display-side confidence threshold for showing a live candidate
    pub confidence_threshold: f32,

    /// Draw the landmark overlay
    pub show_landmarks: bool,

    /// Composed-text display size
    pub text_size: TextSize,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.85,
            show_landmarks: true,
            text_size: TextSize::Medium,
        }
    }
}
