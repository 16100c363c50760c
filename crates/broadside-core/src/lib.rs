//! Core types and definitions for the Broadside simulation engine.
//!
//! This crate defines the vocabulary shared by the integrators and their
//! host: ship and shell input records, throttle commands, result records,
//! diagnostics, constants, and the error type. It performs no I/O.

pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod throttle;
pub mod types;

pub use error::SimError;
