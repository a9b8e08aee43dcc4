//! MANUS Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout MANUS:
//! - Hand geometry (Landmark, HandJoint, HandFrame)
//! - Symbols and classification results
//! - Session time primitives
//! - Configuration and errors

pub mod config;
pub mod error;
pub mod frame;
pub mod landmark;
pub mod symbol;
pub mod time;

pub use config::*;
pub use error::*;
pub use frame::*;
pub use landmark::*;
pub use symbol::*;
pub use time::*;
