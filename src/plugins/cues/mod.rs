//! Cue consumer. Playback lives outside this crate; here cues are logged and tallied.

use bevy::prelude::*;

use crate::plugins::core::{AudioCue, FrameSystems};
use crate::sim::Cue;

/// Running count of every cue seen since startup.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct CueTally {
    pub flap: u32,
    pub hit: u32,
    pub die: u32,
    pub point: u32,
}

impl CueTally {
    pub fn record(&mut self, cue: Cue) {
        let slot = match cue {
            Cue::Flap => &mut self.flap,
            Cue::Hit => &mut self.hit,
            Cue::Die => &mut self.die,
            Cue::Point => &mut self.point,
        };
        *slot += 1;
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<CueTally>()
        .add_systems(Update, consume_cues.in_set(FrameSystems::Present));
}

fn consume_cues(mut cues: MessageReader<AudioCue>, mut tally: ResMut<CueTally>) {
    for AudioCue(cue) in cues.read() {
        debug!("cue: {}", cue.tag());
        tally.record(*cue);
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::message::Messages;
    use bevy::prelude::*;

    use super::CueTally;
    use crate::common::test_utils::run_system_once;
    use crate::plugins::core::AudioCue;
    use crate::sim::Cue;

    #[test]
    fn tallies_each_message() {
        let mut world = World::new();
        world.init_resource::<CueTally>();
        world.init_resource::<Messages<AudioCue>>();
        world.write_message(AudioCue(Cue::Hit));
        world.write_message(AudioCue(Cue::Die));
        world.write_message(AudioCue(Cue::Point));

        run_system_once(&mut world, super::consume_cues);

        let tally = world.resource::<CueTally>();
        assert_eq!(
            *tally,
            CueTally {
                flap: 0,
                hit: 1,
                die: 1,
                point: 1
            }
        );
    }
}
