//! Global state machine.
//!
//! `GameState` is the app-level Bevy state that scopes spawned entities. The round
//! phase (Ready / Playing / GameOver) is owned by the session itself; systems
//! that care about it use [`in_phase`] instead of a second Bevy state.

use bevy::prelude::*;

use crate::plugins::core::Session;
use crate::sim::Phase;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}

/// Run condition: the session exists and is in `phase`.
pub fn in_phase(phase: Phase) -> impl FnMut(Option<Res<Session>>) -> bool + Clone {
    move |session: Option<Res<Session>>| session.is_some_and(|s| s.phase() == phase)
}
