//! Simulation engine for Broadside.
//!
//! Explicit-Euler integrators for ship propulsion and shell flight, plus
//! Monte-Carlo dispersion statistics. Headless and deterministic for a
//! fixed seed.

pub mod ballistics;
pub mod dispersion;
pub mod drag;
pub mod engine;
pub mod propulsion;

pub use broadside_core as core;
pub use engine::{SimConfig, Simulator};

#[cfg(test)]
mod tests;
