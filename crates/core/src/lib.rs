//! quadbot_core - Pure no_std movement logic for the QuadBot quadruped robot
//!
//! This crate contains the platform-agnostic gait engine and control-app
//! protocol that can be tested on host without any feature flags or HAL
//! dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Platform services injected via traits
//!
//! # Modules
//!
//! - [`traits`]: Platform-agnostic trait abstractions (TimeSource)
//! - [`joint`]: The eight leg joints, servo pulse math, and calibration data
//! - [`gait`]: Gait identifiers, step tables, and the gait catalog
//! - [`sequencer`]: Non-blocking state machine that plays gaits
//! - [`protocol`]: Control-app wire format, commands, and link supervision
//! - [`routine`]: Scripted demo choreography for standalone running

#![no_std]

pub mod gait;
pub mod joint;
pub mod protocol;
pub mod routine;
pub mod sequencer;
pub mod traits;
