//! Feature plugins.

use bevy::prelude::*;

pub mod core;
pub mod cues;
pub mod obstacles;
pub mod player;
pub mod ui;
pub mod world;

// Render-only
pub mod camera;
pub mod lighting;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    world::plugin(app);
    obstacles::plugin(app);
    player::plugin(app);
    cues::plugin(app);
    ui::debug_overlay::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    lighting::plugin(app);
    camera::plugin(app);
    ui::hud::plugin(app);
    ui::debug_overlay::render_plugin(app);
}

/// Register all plugins (full app).
pub fn register_all(app: &mut App) {
    register_gameplay(app);
    register_render(app);
}
