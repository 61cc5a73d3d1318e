//! Camera plugin (render-only).
//!
//! The world is a fixed logical viewport, so the camera never moves: it sits on the
//! world centre with a fixed vertical scale of `world_height` units. Wider windows
//! show more sky to the sides rather than stretching the playfield.

use bevy::camera::ScalingMode;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;

#[derive(Component)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera);
}

fn spawn_camera(mut commands: Commands, tunables: Res<Tunables>) {
    let projection = OrthographicProjection {
        scaling_mode: ScalingMode::FixedVertical {
            viewport_height: tunables.world_height,
        },
        ..OrthographicProjection::default_2d()
    };

    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        Projection::from(projection),
        FireflyConfig::default(),
        Transform::from_xyz(tunables.world_width * 0.5, tunables.world_height * 0.5, 999.0),
        DespawnOnExit(GameState::InGame),
    ));
}
