//! Engine-independent gameplay core.
//!
//! Nothing in here touches the ECS. A [`Game`] is advanced by calling
//! [`Game::step`] once per frame with the elapsed time and the logical actions
//! sampled for that frame; Bevy systems only feed it and read it back.

pub mod collision;
pub mod cues;
pub mod floor;
pub mod flyer;
pub mod game;
pub mod obstacles;

pub use cues::{Cue, Cues};
pub use game::{Action, Backdrop, Game, Phase};
