//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - `StatesPlugin` so `GameState` and `DespawnOnExit` work.
//! - we then call `bevy_flap::game::configure_headless` to install gameplay plugins.
//!
//! Time advances by a fixed 1/60 s per `update()` so every run sees the same frames.

#![allow(dead_code)]

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy_flap::common::tunables::Tunables;
use bevy_flap::plugins::core::{InputAction, Session};
use bevy_flap::sim::Action;

pub const FRAME: Duration = Duration::from_nanos(16_666_667);

pub fn app_headless() -> App {
    app_with_tunables(Tunables {
        seed: Some(0xF1A9),
        ..Tunables::default()
    })
}

pub fn app_with_tunables(tunables: Tunables) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.insert_resource(tunables);

    bevy_flap::game::configure_headless(&mut app);
    app
}

pub fn send(app: &mut App, action: Action) {
    app.world_mut().write_message(InputAction(action));
}

pub fn session(app: &App) -> &Session {
    app.world().resource::<Session>()
}

pub fn run_frames(app: &mut App, n: usize) {
    for _ in 0..n {
        app.update();
    }
}
