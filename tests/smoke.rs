mod common;

use bevy::prelude::*;
use bevy_flap::plugins::obstacles::{Barrier, ObstaclePool};
use bevy_flap::plugins::player::FlyerSprite;
use bevy_flap::plugins::world::FloorTile;
use bevy_flap::sim::Phase;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();
    common::run_frames(&mut app, 3);
    assert_eq!(common::session(&app).phase(), Phase::Ready);
}

#[test]
fn entering_in_game_spawns_scene() {
    let mut app = common::app_headless();
    app.update();

    let world = app.world_mut();
    assert_eq!(world.query::<&FlyerSprite>().iter(world).count(), 1);
    assert_eq!(world.query::<&FloorTile>().iter(world).count(), 2);

    let capacity = world.resource::<ObstaclePool>().capacity;
    assert_eq!(world.query::<&Barrier>().iter(world).count(), capacity * 2);
}

#[test]
#[should_panic(expected = "invalid tunables")]
fn invalid_tunables_refuse_to_boot() {
    let _app = common::app_with_tunables(bevy_flap::common::tunables::Tunables {
        horizontal_gap: 0.0,
        ..Default::default()
    });
}
