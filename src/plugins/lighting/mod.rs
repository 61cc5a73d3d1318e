//! Lighting plugin (Firefly) (render-only).
//!
//! One point light rides with the flyer. Its reach scales with the world height and
//! its tint follows the round's backdrop: pale by day, lantern-warm at night.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::core::{FrameSystems, Session};
use crate::plugins::player::{FlyerSprite, sync_flyer};
use crate::sim::Backdrop;

/// Fraction of the world height the light reaches.
const REACH: f32 = 0.35;

#[derive(Component)]
pub struct FlyerLight;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(GameState::InGame), setup)
        .add_systems(
            Update,
            (follow_flyer, tint_for_backdrop)
                .in_set(FrameSystems::Present)
                .after(sync_flyer),
        );
}

fn setup(mut commands: Commands, tunables: Res<Tunables>, session: Res<Session>) {
    commands.spawn((
        Name::new("FlyerLight"),
        FlyerLight,
        PointLight2d {
            color: light_color(session.backdrop()),
            range: light_range(&tunables),
            ..default()
        },
        Transform::from_xyz(
            tunables.flyer_x,
            tunables.flyer_start_y,
            10.0,
        ),
        DespawnOnExit(GameState::InGame),
    ));
}

fn follow_flyer(
    q_flyer: Query<&Transform, (With<FlyerSprite>, Without<FlyerLight>)>,
    mut q_light: Query<&mut Transform, (With<FlyerLight>, Without<FlyerSprite>)>,
) {
    let (Ok(tf_flyer), Ok(mut tf_light)) = (q_flyer.single(), q_light.single_mut()) else {
        return;
    };
    tf_light.translation.x = tf_flyer.translation.x;
    tf_light.translation.y = tf_flyer.translation.y;
}

fn tint_for_backdrop(session: Res<Session>, mut q_light: Query<&mut PointLight2d, With<FlyerLight>>) {
    if !session.is_changed() {
        return;
    }
    let color = light_color(session.backdrop());
    for mut light in &mut q_light {
        if light.color != color {
            light.color = color;
        }
    }
}

pub fn light_range(t: &Tunables) -> f32 {
    t.world_height * REACH
}

pub fn light_color(backdrop: Backdrop) -> Color {
    match backdrop {
        Backdrop::Day => Color::srgb(1.0, 0.97, 0.9),
        Backdrop::Night => Color::srgb(1.0, 0.8, 0.5),
    }
}

#[cfg(test)]
mod tests {
    use super::{light_color, light_range};
    use crate::common::tunables::Tunables;
    use crate::sim::Backdrop;

    #[test]
    fn range_scales_with_world_height() {
        let t = Tunables::default();
        let tall = Tunables { world_height: t.world_height * 2.0, ..t.clone() };
        assert!((light_range(&tall) - 2.0 * light_range(&t)).abs() < 1e-4);
        assert!(light_range(&t) < t.world_height);
    }

    #[test]
    fn night_light_is_warmer_than_day() {
        let day = light_color(Backdrop::Day).to_srgba();
        let night = light_color(Backdrop::Night).to_srgba();
        assert!(night.blue < day.blue);
    }
}
