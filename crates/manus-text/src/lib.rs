//! MANUS Text - What happens after a symbol is confirmed
//!
//! The classification core stops at confirmed symbol events; this crate is
//! the consuming side: folding events into accumulated text and keeping
//! per-session recognition bookkeeping for an external persistence layer.

pub mod composer;
pub mod session;

pub use composer::*;
pub use session::*;
