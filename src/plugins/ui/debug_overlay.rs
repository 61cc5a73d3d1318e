//! Debug overlay.
//!
//! The toggle is gameplay-side (headless-safe): it only flips [`DebugOverlay`].
//! Drawing is render-only and lives behind [`render_plugin`], since gizmos need the
//! render infrastructure.

use bevy::prelude::*;

use crate::plugins::core::{FrameSystems, InputAction, Session};
use crate::sim::Action;
use crate::sim::collision::rect_xywh;

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DebugOverlay(pub bool);

pub fn plugin(app: &mut App) {
    app.init_resource::<DebugOverlay>()
        .add_systems(Update, toggle_overlay.in_set(FrameSystems::Simulate));
}

pub fn render_plugin(app: &mut App) {
    app.add_systems(
        Update,
        draw_boxes
            .in_set(FrameSystems::Present)
            .run_if(|overlay: Res<DebugOverlay>| overlay.0),
    );
}

fn toggle_overlay(mut actions: MessageReader<InputAction>, mut overlay: ResMut<DebugOverlay>) {
    let flips = actions
        .read()
        .filter(|a| a.0 == Action::ToggleDebugOverlay)
        .count();
    if flips % 2 == 1 {
        overlay.0 = !overlay.0;
        debug!("debug overlay {}", if overlay.0 { "on" } else { "off" });
    }
}

fn draw_boxes(session: Res<Session>, mut gizmos: Gizmos) {
    let mut rect = |r: Rect, color: Color| {
        gizmos.rect_2d(Isometry2d::from_translation(r.center()), r.size(), color);
    };

    for obstacle in session.obstacles().iter() {
        for barrier in obstacle.barriers() {
            rect(barrier, Color::srgb(1.0, 0.2, 0.2));
        }
        let zone = if obstacle.scored() {
            Color::srgb(0.4, 0.4, 0.4)
        } else {
            Color::srgb(0.2, 1.0, 0.3)
        };
        rect(obstacle.score_zone(), zone);
    }
    rect(session.floor().collision_rect(), Color::srgb(1.0, 0.6, 0.1));

    let flyer = session.flyer();
    rect(flyer.collision_box(), Color::srgb(0.2, 0.6, 1.0));
    let p = flyer.position();
    let s = flyer.size();
    rect(rect_xywh(p.x, p.y, s.x, s.y), Color::srgb(0.6, 0.6, 1.0));
}
