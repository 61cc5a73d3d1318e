//! Screen-space feedback: the debug overlay toggle and the HUD.

pub mod debug_overlay;
pub mod hud;
