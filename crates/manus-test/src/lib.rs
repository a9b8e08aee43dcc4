//! MANUS Test Harness - Synthetic poses and end-to-end validation
//!
//! This crate provides:
//! - A pose simulator: canonical landmark frames for the static repertoire,
//!   jitter injection, and malformed-input generators
//! - A recognition harness wiring stabilizer, composer, and recorder
//!   together the way a real frontend would
//! - The end-to-end integration suite

pub mod harness;
pub mod simulator;

pub use harness::*;
pub use simulator::*;
