//! Core plugin: tunables, the session resource and the per-frame pipeline.
//!
//! ```text
//!   Update (variable dt), chained, only in GameState::InGame
//!   ┌───────────────┐   ┌──────────────────────────┐   ┌───────────────────────┐
//!   │ Input         │──▶│ Simulate                 │──▶│ Present               │
//!   │ InputAction   │   │ step_session (one call)  │   │ sprites, HUD, gizmos  │
//!   └───────────────┘   └──────────────────────────┘   └───────────────────────┘
//!                                    │
//!                                    └──▶ AudioCue messages
//! ```
//!
//! Tunables inserted before this plugin runs are kept. Invalid tunables are a
//! startup bug: we log the reason and panic.

pub mod messages;

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::sim::{Backdrop, Game};

pub use messages::{AudioCue, InputAction};

/// The running session. Systems read it through `Deref`.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct Session(pub Game);

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSystems {
    Input,
    Simulate,
    Present,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>();
    let tunables = app.world().resource::<Tunables>().clone();

    let game = match Game::new(tunables) {
        Ok(game) => game,
        Err(err) => {
            error!("refusing to start with invalid tunables: {err}");
            panic!("invalid tunables: {err}");
        }
    };

    app.insert_resource(ClearColor(backdrop_color(game.backdrop())))
        .insert_resource(Session(game))
        .add_message::<InputAction>()
        .add_message::<AudioCue>()
        .configure_sets(
            Update,
            (
                FrameSystems::Input,
                FrameSystems::Simulate,
                FrameSystems::Present,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(Update, step_session.in_set(FrameSystems::Simulate));
}

/// Advance the session by exactly one frame.
pub fn step_session(
    time: Res<Time>,
    mut session: ResMut<Session>,
    mut actions: MessageReader<InputAction>,
    mut out: MessageWriter<AudioCue>,
) {
    let cues = session.step(time.delta_secs(), actions.read().map(|a| a.0));
    for cue in cues.iter() {
        out.write(AudioCue(cue));
    }
}

pub fn backdrop_color(backdrop: Backdrop) -> Color {
    match backdrop {
        Backdrop::Day => Color::srgb(0.31, 0.75, 0.79),
        Backdrop::Night => Color::srgb(0.05, 0.16, 0.26),
    }
}
