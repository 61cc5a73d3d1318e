//! Player plugin: input sampling and the flyer sprite.
//!
//! Pipeline:
//! - Update / Input: sample keyboard, mouse and touch, write `InputAction` messages
//! - Update / Present: copy the session's flyer into the sprite transform
//!
//! Input resources are optional so the same systems run in headless apps, where
//! tests write `InputAction` messages directly instead.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::core::{FrameSystems, InputAction, Session};
use crate::sim::Action;
use crate::sim::flyer::FlyerSkin;

#[derive(Component)]
pub struct FlyerSprite;

/// Wing overlay; its vertical offset follows the flap animation frame.
#[derive(Component)]
pub struct Wing;

const FLYER_Z: f32 = 3.0;
const WING_OFFSETS: [f32; 4] = [2.0, 0.0, -2.0, 0.0];

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(Update, gather_input.in_set(FrameSystems::Input))
        .add_systems(Update, sync_flyer.in_set(FrameSystems::Present));
}

fn spawn(mut commands: Commands, session: Res<Session>) {
    let flyer = session.flyer();
    let size = flyer.size();

    commands
        .spawn((
            Name::new("Flyer"),
            FlyerSprite,
            Sprite::from_color(skin_color(flyer.skin()), size),
            Transform::from_translation(center(flyer.position(), size).extend(FLYER_Z)),
            DespawnOnExit(GameState::InGame),
        ))
        .with_children(|parent| {
            parent.spawn((
                Name::new("Wing"),
                Wing,
                Sprite::from_color(Color::srgb(0.95, 0.95, 0.9), Vec2::new(size.x * 0.4, 3.0)),
                Transform::from_xyz(-size.x * 0.2, 0.0, 0.1),
            ));
        });
}

fn gather_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    mut out: MessageWriter<InputAction>,
) {
    let key = |code: KeyCode| keys.as_ref().is_some_and(|k| k.just_pressed(code));

    let flap = key(KeyCode::Space)
        || key(KeyCode::ArrowUp)
        || mouse.as_ref().is_some_and(|m| m.just_pressed(MouseButton::Left))
        || touches.as_ref().is_some_and(|t| t.any_just_pressed());

    // One flap per frame no matter how many devices fired.
    if flap {
        out.write(InputAction(Action::Flap));
    }
    if key(KeyCode::KeyR) {
        out.write(InputAction(Action::Reset));
    }
    if key(KeyCode::F3) || key(KeyCode::KeyD) {
        out.write(InputAction(Action::ToggleDebugOverlay));
    }
}

pub(crate) fn sync_flyer(
    session: Res<Session>,
    mut q_flyer: Query<(&mut Transform, &mut Sprite), (With<FlyerSprite>, Without<Wing>)>,
    mut q_wing: Query<&mut Transform, (With<Wing>, Without<FlyerSprite>)>,
) {
    let flyer = session.flyer();

    if let Ok((mut tf, mut sprite)) = q_flyer.single_mut() {
        let c = center(flyer.position(), flyer.size());
        tf.translation.x = c.x;
        tf.translation.y = c.y;
        tf.rotation = Quat::from_rotation_z(flyer.rotation().to_radians());
        sprite.color = skin_color(flyer.skin());
    }

    if let Ok(mut tf_wing) = q_wing.single_mut() {
        let frame = flyer.animation_phase() as usize % WING_OFFSETS.len();
        tf_wing.translation.y = WING_OFFSETS[frame];
    }
}

/// Sprites are centered; the core tracks the bottom-left corner.
pub fn center(bottom_left: Vec2, size: Vec2) -> Vec2 {
    bottom_left + size * 0.5
}

pub fn skin_color(skin: FlyerSkin) -> Color {
    match skin {
        FlyerSkin::Yellow => Color::srgb(0.98, 0.8, 0.18),
        FlyerSkin::Blue => Color::srgb(0.3, 0.6, 0.95),
        FlyerSkin::Red => Color::srgb(0.9, 0.3, 0.25),
    }
}
