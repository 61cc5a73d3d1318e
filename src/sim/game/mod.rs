//! Session state machine: owns every entity and runs the fixed per-frame order.
//!
//! ```text
//!   Ready ──Flap──▶ Playing ──collision──▶ GameOver ──Flap (settled)──▶ reset ─▶ Ready
//!     ▲                                                                          │
//!     └──────────────────────────── Reset (any phase) ───────────────────────────┘
//! ```
//!
//! Frame order inside [`Game::step`]: actions, obstacle maintenance (move, spawn,
//! recycle), flyer physics, floor scroll, flyer tilt/bob, collision box, collision
//! checks, score, die cue.

use bevy::log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::collision::overlaps_any;
use super::cues::{Cue, Cues};
use super::flyer::{Flyer, FlyerMode, FlyerSkin};
use super::floor::Floor;
use super::obstacles::{ObstacleStream, ObstacleVariant};
use crate::common::tunables::{SettingsError, Tunables};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Ready,
    Playing,
    GameOver,
}

impl Phase {
    pub fn flyer_mode(self) -> FlyerMode {
        match self {
            Self::Ready => FlyerMode::Idle,
            Self::Playing => FlyerMode::Active,
            Self::GameOver => FlyerMode::Falling,
        }
    }
}

/// Logical, edge-triggered input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Flap,
    /// Restart from Ready regardless of phase.
    Reset,
    /// Cosmetic only; the session ignores it.
    ToggleDebugOverlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    Day,
    Night,
}

impl Backdrop {
    pub fn pick(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) { Self::Day } else { Self::Night }
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    settings: Tunables,
    seed: u64,
    rng: ChaCha8Rng,

    phase: Phase,
    flyer: Flyer,
    obstacles: ObstacleStream,
    floor: Floor,
    backdrop: Backdrop,
    score: u32,
    round: u32,
    die_cue_played: bool,

    cues: Cues,
}

impl Game {
    /// Build a session, seeding from `settings.seed` or from entropy.
    pub fn new(settings: Tunables) -> Result<Self, SettingsError> {
        let seed = settings.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
        Self::with_seed(settings, seed)
    }

    pub fn with_seed(settings: Tunables, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (flyer, obstacles, floor, backdrop) = fresh_round(&settings, &mut rng);
        info!("session created (seed {seed:#018x})");

        Ok(Self {
            settings,
            seed,
            rng,
            phase: Phase::Ready,
            flyer,
            obstacles,
            floor,
            backdrop,
            score: 0,
            round: 0,
            die_cue_played: false,
            cues: Cues::default(),
        })
    }

    /// Recreate every entity and return to Ready.
    pub fn reset(&mut self) {
        let (flyer, obstacles, floor, backdrop) = fresh_round(&self.settings, &mut self.rng);
        self.flyer = flyer;
        self.obstacles = obstacles;
        self.floor = floor;
        self.backdrop = backdrop;
        self.score = 0;
        self.die_cue_played = false;
        self.round += 1;
        self.set_phase(Phase::Ready);
        info!("round {} ready", self.round);
    }

    /// Run one frame: apply `actions` in order, then advance by `dt` seconds.
    /// Returns the cues raised during this frame.
    pub fn step(&mut self, dt: f32, actions: impl IntoIterator<Item = Action>) -> &Cues {
        self.cues.clear();
        for action in actions {
            self.apply(action);
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.tick(dt);
        &self.cues
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Flap => match self.phase {
                Phase::Ready => {
                    self.set_phase(Phase::Playing);
                    self.flap();
                }
                Phase::Playing => self.flap(),
                Phase::GameOver => {
                    if self.is_settled() {
                        self.reset();
                    }
                }
            },
            Action::Reset => self.reset(),
            Action::ToggleDebugOverlay => {}
        }
    }

    fn flap(&mut self) {
        let ceiling = self.settings.world_height - self.settings.ceiling_margin;
        if let Some(cue) = self.flyer.try_flap(ceiling) {
            self.cues.push(cue);
        }
    }

    fn tick(&mut self, dt: f32) {
        let t = &self.settings;
        let mode = self.phase.flyer_mode();

        if self.phase == Phase::Playing {
            self.obstacles.advance(t.scroll_speed, dt);
            self.obstacles
                .spawn_if_needed(t.world_width, t.horizontal_gap, &mut self.rng);
            self.obstacles.recycle();
        }
        if mode.is_playing() {
            self.flyer.apply_physics(dt, t.rest_height(), t.ceiling());
        }
        if self.phase != Phase::GameOver {
            self.floor.advance(t.scroll_speed, dt);
        }
        self.flyer.advance_rotation(dt, mode.is_playing(), mode.is_dying());
        self.flyer.update_collision_box();

        if self.phase == Phase::Playing {
            self.resolve_collisions();
        }

        if self.phase == Phase::GameOver
            && !self.die_cue_played
            && self.flyer.rotation() < self.settings.die_rotation_threshold
        {
            self.die_cue_played = true;
            self.cues.push(Cue::Die);
        }
    }

    /// Any hit ends the round and skips the score check for this frame.
    fn resolve_collisions(&mut self) {
        let hitbox = self.flyer.collision_box();
        let targets = self
            .obstacles
            .barriers()
            .chain(std::iter::once(self.floor.collision_rect()));

        if overlaps_any(hitbox, targets) {
            self.cues.push(Cue::Hit);
            self.set_phase(Phase::GameOver);
            return;
        }

        if self.obstacles.check_score(hitbox) {
            self.score += 1;
            self.cues.push(Cue::Point);
            debug!("score {}", self.score);
        }
    }

    fn set_phase(&mut self, next: Phase) {
        if self.phase != next {
            info!("phase {:?} -> {:?} (score {})", self.phase, next, self.score);
            self.phase = next;
        }
    }

    /// Flyer resting at or below the floor's top surface.
    pub fn is_settled(&self) -> bool {
        self.flyer.y() <= self.floor.top()
    }

    /// The results panel is shown once the flyer has come to rest after a crash.
    pub fn show_game_over_panel(&self) -> bool {
        self.phase == Phase::GameOver && self.is_settled()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn flyer(&self) -> &Flyer {
        &self.flyer
    }

    pub fn obstacles(&self) -> &ObstacleStream {
        &self.obstacles
    }

    pub fn floor(&self) -> &Floor {
        &self.floor
    }

    pub fn backdrop(&self) -> Backdrop {
        self.backdrop
    }

    pub fn settings(&self) -> &Tunables {
        &self.settings
    }

    /// Cues from the most recent [`Game::step`].
    pub fn cues(&self) -> &Cues {
        &self.cues
    }

    #[cfg(test)]
    pub(crate) fn flyer_mut(&mut self) -> &mut Flyer {
        &mut self.flyer
    }
}

fn fresh_round(t: &Tunables, rng: &mut ChaCha8Rng) -> (Flyer, ObstacleStream, Floor, Backdrop) {
    let backdrop = Backdrop::pick(rng);
    let flyer = Flyer::new(t, FlyerSkin::pick(rng));
    let obstacles = ObstacleStream::new(t, ObstacleVariant::pick(rng), rng);
    (flyer, obstacles, Floor::new(t), backdrop)
}
