//! HUD (render-only): score, phase banners and the debug readout.
//!
//! The strings are computed by plain functions over the session so they can be
//! checked without a window.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use super::debug_overlay::DebugOverlay;
use crate::common::state::GameState;
use crate::plugins::core::{FrameSystems, Session};
use crate::sim::{Game, Phase};

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HudText {
    Score,
    Banner,
    Debug,
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(Update, update_hud.in_set(FrameSystems::Present));
}

fn spawn_hud(mut commands: Commands) {
    let mut spawn = |kind: HudText, node: Node, size: f32| {
        commands.spawn((
            Name::new(format!("Hud/{kind:?}")),
            kind,
            Text::new(""),
            TextFont {
                font_size: size,
                ..default()
            },
            TextColor(Color::WHITE),
            node,
            DespawnOnExit(GameState::InGame),
        ));
    };

    spawn(
        HudText::Score,
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(8.0),
            left: Val::Percent(45.0),
            ..default()
        },
        48.0,
    );
    spawn(
        HudText::Banner,
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(35.0),
            left: Val::Percent(25.0),
            ..default()
        },
        36.0,
    );
    spawn(
        HudText::Debug,
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
        14.0,
    );
}

fn update_hud(
    session: Res<Session>,
    overlay: Option<Res<DebugOverlay>>,
    mut q: Query<(&HudText, &mut Text)>,
) {
    let overlay_on = overlay.is_some_and(|o| o.0);

    for (kind, mut text) in &mut q {
        let next = match kind {
            HudText::Score => score_text(&session),
            HudText::Banner => banner_text(&session),
            HudText::Debug if overlay_on => debug_text(&session),
            HudText::Debug => String::new(),
        };
        if text.0 != next {
            text.0 = next;
        }
    }
}

/// Live score, only while playing. After a crash the banner carries it.
pub fn score_text(game: &Game) -> String {
    match game.phase() {
        Phase::Playing => game.score().to_string(),
        Phase::Ready | Phase::GameOver => String::new(),
    }
}

pub fn banner_text(game: &Game) -> String {
    match game.phase() {
        Phase::Ready => "GET READY".to_string(),
        Phase::Playing => String::new(),
        Phase::GameOver if game.show_game_over_panel() => {
            format!("GAME OVER\nscore {}", game.score())
        }
        Phase::GameOver => String::new(),
    }
}

pub fn debug_text(game: &Game) -> String {
    let obstacles = game.obstacles();
    format!(
        "obstacles {} pending {} round {} seed {:#x}",
        obstacles.len(),
        obstacles.pending_triggers(),
        game.round(),
        game.seed()
    )
}

#[cfg(test)]
mod tests {
    use super::{banner_text, debug_text, score_text};
    use crate::common::tunables::Tunables;
    use crate::sim::{Action, Game, Phase};

    fn game() -> Game {
        Game::with_seed(Tunables::default(), 21).unwrap()
    }

    #[test]
    fn ready_shows_banner_not_score() {
        let g = game();
        assert_eq!(banner_text(&g), "GET READY");
        assert_eq!(score_text(&g), "");
    }

    #[test]
    fn playing_shows_score_only() {
        let mut g = game();
        g.step(0.0, [Action::Flap]);
        assert_eq!(banner_text(&g), "");
        assert_eq!(score_text(&g), "0");
    }

    #[test]
    fn game_over_banner_after_floor_crash() {
        let mut g = game();
        g.step(0.0, [Action::Flap]);
        for _ in 0..120 {
            g.step(1.0 / 60.0, []);
        }
        assert_eq!(g.phase(), Phase::GameOver);
        assert!(g.show_game_over_panel());
        assert_eq!(banner_text(&g), "GAME OVER\nscore 0");
        assert_eq!(score_text(&g), "");
    }

    #[test]
    fn debug_text_names_seed() {
        let g = game();
        assert!(debug_text(&g).contains("seed 0x15"));
    }
}
