//! World plugin: the scrolling floor strip and the sky colour.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::{GameState, in_phase};
use crate::plugins::core::{FrameSystems, Session, backdrop_color};
use crate::sim::Phase;

const FLOOR_Z: f32 = 2.0;

/// Index into the session floor's tile offsets.
#[derive(Component, Clone, Copy, Debug)]
pub struct FloorTile(pub usize);

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_floor)
        .add_systems(
            Update,
            (
                // The strip is frozen after a crash.
                sync_floor.run_if(not(in_phase(Phase::GameOver))),
                sync_backdrop,
            )
                .in_set(FrameSystems::Present),
        );
}

/// Solid-colour tiles, alternating shade so the scroll is visible without assets.
fn spawn_floor(mut commands: Commands, session: Res<Session>) {
    let floor = session.floor();
    let size = Vec2::new(floor.tile_width(), session.settings().floor_height);

    floor.tiles().iter().enumerate().for_each(|(i, &x)| {
        let color = if i % 2 == 0 {
            Color::srgb(0.87, 0.84, 0.58)
        } else {
            Color::srgb(0.82, 0.78, 0.52)
        };
        commands.spawn((
            Name::new(format!("FloorTile{i}")),
            FloorTile(i),
            Sprite::from_color(color, size),
            Transform::from_translation(Vec3::new(x + size.x * 0.5, size.y * 0.5, FLOOR_Z)),
            DespawnOnExit(GameState::InGame),
        ));
    });
}

fn sync_floor(session: Res<Session>, mut q: Query<(&FloorTile, &mut Transform)>) {
    let floor = session.floor();
    let half = floor.tile_width() * 0.5;

    for (tile, mut tf) in &mut q {
        if let Some(&x) = floor.tiles().get(tile.0) {
            tf.translation.x = x + half;
        }
    }
}

fn sync_backdrop(session: Res<Session>, mut clear: ResMut<ClearColor>) {
    let color = backdrop_color(session.backdrop());
    if clear.0 != color {
        clear.0 = color;
    }
}
