//! End-to-end round flow through the headless app: messages in, phase and cues out.

mod common;

use bevy::prelude::*;
use bevy_flap::plugins::cues::CueTally;
use bevy_flap::plugins::obstacles::Barrier;
use bevy_flap::plugins::player::FlyerSprite;
use bevy_flap::plugins::ui::debug_overlay::DebugOverlay;
use bevy_flap::sim::{Action, Phase};

fn tally(app: &App) -> CueTally {
    app.world().resource::<CueTally>().clone()
}

#[test]
fn flap_starts_the_round() {
    let mut app = common::app_headless();
    app.update();

    common::send(&mut app, Action::Flap);
    app.update();

    assert_eq!(common::session(&app).phase(), Phase::Playing);
    assert_eq!(tally(&app).flap, 1);
}

#[test]
fn unattended_round_crashes_once_then_restarts() {
    let mut app = common::app_headless();
    app.update();
    common::send(&mut app, Action::Flap);
    common::run_frames(&mut app, 180);

    let session = common::session(&app);
    assert_eq!(session.phase(), Phase::GameOver);
    assert!(session.show_game_over_panel());
    let t = tally(&app);
    assert_eq!((t.hit, t.die, t.point), (1, 1, 0));

    common::send(&mut app, Action::Flap);
    app.update();

    let session = common::session(&app);
    assert_eq!(session.phase(), Phase::Ready);
    assert_eq!(session.round(), 1);
    assert_eq!(session.score(), 0);
    // The restarting flap is not a flap cue.
    assert_eq!(tally(&app).flap, 1);
}

#[test]
fn reset_works_mid_round() {
    let mut app = common::app_headless();
    app.update();
    common::send(&mut app, Action::Flap);
    common::run_frames(&mut app, 10);
    assert_eq!(common::session(&app).phase(), Phase::Playing);

    common::send(&mut app, Action::Reset);
    app.update();

    assert_eq!(common::session(&app).phase(), Phase::Ready);
    assert_eq!(common::session(&app).round(), 1);
}

#[test]
fn flyer_sprite_tracks_the_session() {
    let mut app = common::app_headless();
    app.update();
    common::send(&mut app, Action::Flap);
    common::run_frames(&mut app, 5);

    let flyer = common::session(&app).flyer().clone();
    let world = app.world_mut();
    let tf = *world
        .query_filtered::<&Transform, With<FlyerSprite>>()
        .single(world)
        .unwrap();

    assert_eq!(tf.translation.truncate(), flyer.position() + flyer.size() * 0.5);
    assert_eq!(tf.rotation, Quat::from_rotation_z(flyer.rotation().to_radians()));
}

#[test]
fn visible_barriers_match_live_obstacles() {
    let mut app = common::app_headless();
    app.update();
    common::send(&mut app, Action::Flap);
    // Keep the flyer aloft so the stream grows past its first obstacle.
    for frame in 0..150 {
        if frame % 18 == 0 {
            common::send(&mut app, Action::Flap);
        }
        app.update();
        if common::session(&app).phase() != Phase::Playing {
            break;
        }
    }

    let live = common::session(&app).obstacles().len();
    let world = app.world_mut();
    let visible = world
        .query::<(&Barrier, &Visibility)>()
        .iter(world)
        .filter(|(_, v)| **v == Visibility::Visible)
        .count();
    assert_eq!(visible, live * 2);
}

#[test]
fn debug_toggle_is_cosmetic() {
    let mut app = common::app_headless();
    app.update();

    common::send(&mut app, Action::ToggleDebugOverlay);
    app.update();

    assert!(app.world().resource::<DebugOverlay>().0);
    assert_eq!(common::session(&app).phase(), Phase::Ready);
}

#[test]
fn same_seed_same_session() {
    let run = || {
        let mut app = common::app_headless();
        app.update();
        common::send(&mut app, Action::Flap);
        for frame in 0..240 {
            if frame % 20 == 0 {
                common::send(&mut app, Action::Flap);
            }
            app.update();
        }
        let s = common::session(&app);
        (
            s.phase(),
            s.score(),
            s.flyer().y(),
            s.obstacles().iter().map(|o| o.gap_center()).collect::<Vec<_>>(),
        )
    };

    assert_eq!(run(), run());
}
