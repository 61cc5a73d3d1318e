//! Buffered messages around the session.
//!
//! Same producer → queue → consumer shape everywhere:
//! - input systems write [`InputAction`] intent
//! - `step_session` is the only consumer and feeds the actions to the session
//! - the cues raised by that step go back out as [`AudioCue`] for anyone listening

use bevy::prelude::*;

use crate::sim::{Action, Cue};

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputAction(pub Action);

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AudioCue(pub Cue);
