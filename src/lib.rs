//! Library entry point.
//!
//! `sim` is the engine-independent game core; `plugins` wire it into a Bevy app.
//! Integration tests in `tests/` are compiled as separate crates and import
//! this public surface.

pub mod common;
pub mod game;
pub mod plugins;
pub mod sim;
