//! Reelpress - supervised HandBrakeCLI encoding
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod encode;
pub mod queue;
pub mod stopwatch;
