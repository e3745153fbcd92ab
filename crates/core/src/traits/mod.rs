//! Core traits for platform-agnostic robot functionality.
//!
//! This module provides trait abstractions that decouple the movement core
//! from platform-specific implementations (hardware timers, host clocks).
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Platform implementations live outside this crate

pub mod time;

pub use time::{MockTime, TimeSource};
