//! Test helpers.
//!
//! `World::run_system_once` (via the `RunSystemOnce` trait) executes a single system
//! without building a schedule. Systems that use `Commands` only enqueue changes, so
//! we `flush()` before returning and assertions see the spawned entities.

use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::core::Session;
use crate::sim::Game;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// A world holding default tunables and a session seeded with `seed`.
pub fn world_with_session(seed: u64) -> World {
    let mut world = World::new();
    let tunables = Tunables::default();
    let game = Game::with_seed(tunables.clone(), seed).expect("default tunables are valid");
    world.insert_resource(tunables);
    world.insert_resource(Session(game));
    world
}
