//! Obstacles plugin: a fixed pool of barrier sprite pairs mirroring the session's stream.
//!
//! The stream is small and bounded, so instead of spawning and despawning entities
//! as obstacles come and go we pre-spawn `capacity` slots (upper + lower sprite)
//! hidden, then every frame assign slot `i` to the `i`-th live obstacle and hide
//! the rest. No structural changes happen after `OnEnter`.
//!
//! ```text
//!   OnEnter(InGame): init_obstacle_pool  -> ObstaclePool { slots: [(upper, lower); N] }
//!   Update/Present:  sync_obstacles      -> Transform + Visibility + color per slot
//! ```

use bevy::log::warn_once;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::core::{FrameSystems, Session};
use crate::sim::obstacles::ObstacleVariant;

const OBSTACLE_Z: f32 = 1.0;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Barrier {
    Upper,
    Lower,
}

#[derive(Resource, Debug)]
pub struct ObstaclePool {
    pub slots: Vec<[Entity; 2]>,
    pub capacity: usize,
}

impl ObstaclePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }
}

pub fn plugin(app: &mut App) {
    app.insert_resource(ObstaclePool::new(8))
        .add_systems(OnEnter(GameState::InGame), init_obstacle_pool)
        .add_systems(Update, sync_obstacles.in_set(FrameSystems::Present));
}

pub fn init_obstacle_pool(
    mut commands: Commands,
    mut pool: ResMut<ObstaclePool>,
    session: Res<Session>,
) {
    let t = session.settings();
    let size = Vec2::new(t.pipe_width, t.pipe_height);
    let color = variant_color(session.obstacles().variant());

    pool.slots.clear();
    for i in 0..pool.capacity {
        let mut spawn = |barrier: Barrier| {
            commands
                .spawn((
                    Name::new(format!("Obstacle{i}/{barrier:?}")),
                    barrier,
                    Sprite::from_color(color, size),
                    Transform::from_xyz(0.0, 0.0, OBSTACLE_Z),
                    Visibility::Hidden,
                    DespawnOnExit(GameState::InGame),
                ))
                .id()
        };
        let slot = [spawn(Barrier::Upper), spawn(Barrier::Lower)];
        pool.slots.push(slot);
    }
    debug!("obstacle pool ready ({} slots)", pool.slots.len());
}

pub fn sync_obstacles(
    session: Res<Session>,
    pool: Res<ObstaclePool>,
    mut q: Query<(&mut Transform, &mut Visibility, &mut Sprite), With<Barrier>>,
) {
    let stream = session.obstacles();
    if stream.len() > pool.slots.len() {
        warn_once!(
            "obstacle pool exhausted: {} live obstacles, {} slots",
            stream.len(),
            pool.slots.len()
        );
    }
    let color = variant_color(stream.variant());

    let mut live = stream.iter();
    for slot in &pool.slots {
        let obstacle = live.next();
        let rects = obstacle.map(|o| [o.upper(), o.lower()]);

        for (k, &e) in slot.iter().enumerate() {
            let Ok((mut tf, mut vis, mut sprite)) = q.get_mut(e) else {
                continue;
            };
            match rects {
                Some(rects) => {
                    let c = rects[k].center();
                    tf.translation.x = c.x;
                    tf.translation.y = c.y;
                    sprite.color = color;
                    *vis = Visibility::Visible;
                }
                None => *vis = Visibility::Hidden,
            }
        }
    }
}

pub fn variant_color(variant: ObstacleVariant) -> Color {
    match variant {
        ObstacleVariant::Green => Color::srgb(0.45, 0.75, 0.2),
        ObstacleVariant::Red => Color::srgb(0.8, 0.3, 0.2),
    }
}
