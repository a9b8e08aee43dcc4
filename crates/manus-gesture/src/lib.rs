//! MANUS Gesture - The classification core
//!
//! Turns a per-frame stream of 21 hand landmarks into a sparse sequence of
//! confirmed symbol events. Three stages, consumed leaves-first:
//!
//! - Feature extraction: stateless geometry over one frame
//! - Static classification: priority-ordered rules, first match wins
//! - Temporal stabilization: majority vote, hold counting, cooldown
//!
//! The pipeline is synchronous and single-threaded per session: one frame is
//! fully processed before the next is accepted. Callers tracking multiple
//! hands instantiate one stabilizer per hand.

pub mod features;
pub mod rules;
pub mod stabilizer;

pub use features::*;
pub use rules::*;
pub use stabilizer::*;
