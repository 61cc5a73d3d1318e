//! The flying entity: vertical physics, flap impulse, rotation easing and idle bob.
//!
//! Coordinates are world units with the origin at the bottom-left corner of the
//! viewport; `(x, y)` is the bottom-left corner of the flyer sprite.

use bevy::math::{Rect, Vec2};
use rand::Rng;

use super::collision::rect_xywh;
use super::cues::Cue;
use crate::common::tunables::Tunables;

/// Flyer behaviour for the current game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlyerMode {
    /// Bobbing in place, waiting for the first flap.
    Idle,
    /// Gravity, flaps and velocity-driven tilt.
    Active,
    /// Gravity only, nose-diving.
    Falling,
}

impl FlyerMode {
    #[inline]
    pub fn is_playing(self) -> bool {
        !matches!(self, Self::Idle)
    }

    #[inline]
    pub fn is_dying(self) -> bool {
        matches!(self, Self::Falling)
    }
}

/// Cosmetic colour variant, picked once per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlyerSkin {
    Yellow,
    Blue,
    Red,
}

impl FlyerSkin {
    pub const ALL: [FlyerSkin; 3] = [Self::Yellow, Self::Blue, Self::Red];

    pub fn pick(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Target angle and easing rate (per second) for one tilt phase.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Tilt {
    angle: f32,
    rate: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flyer {
    pos: Vec2,
    size: Vec2,
    velocity: f32,
    /// Degrees, counter-clockwise, in `[-180, 180)`.
    rotation: f32,
    hitbox: Rect,
    skin: FlyerSkin,

    bob_base: f32,
    bob_time: f32,
    wing_time: f32,

    gravity: f32,
    flap_impulse: f32,
    inset: f32,
    bob_frequency: f32,
    bob_amplitude: f32,
    bob_band: (f32, f32),
    ascend: Tilt,
    descend: Tilt,
    dive: Tilt,
    wing_frame_secs: f32,
    wing_frames: u32,
}

impl Flyer {
    pub fn new(t: &Tunables, skin: FlyerSkin) -> Self {
        let mut flyer = Self {
            pos: Vec2::new(t.flyer_x, t.flyer_start_y),
            size: Vec2::new(t.flyer_width, t.flyer_height),
            velocity: 0.0,
            rotation: 0.0,
            hitbox: Rect::default(),
            skin,
            bob_base: t.flyer_start_y - t.flyer_height * 0.5,
            bob_time: 0.0,
            wing_time: 0.0,
            gravity: t.gravity,
            flap_impulse: t.flap_impulse,
            inset: t.hitbox_inset,
            bob_frequency: t.bob_frequency,
            bob_amplitude: t.bob_amplitude,
            bob_band: (t.rest_height(), t.ceiling()),
            ascend: Tilt { angle: t.ascend_angle, rate: t.ascend_rate },
            descend: Tilt { angle: t.descend_angle, rate: t.descend_rate },
            dive: Tilt { angle: t.dive_angle, rate: t.dive_rate },
            wing_frame_secs: t.wing_frame_secs,
            wing_frames: t.wing_frames,
        };
        flyer.update_collision_box();
        flyer
    }

    /// Semi-implicit Euler step followed by a clamp into `[floor_top, world_top]`.
    pub fn apply_physics(&mut self, dt: f32, floor_top: f32, world_top: f32) {
        self.velocity -= self.gravity * dt;
        self.pos.y += self.velocity * dt;
        self.pos.y = self.pos.y.clamp(floor_top, world_top);
    }

    /// Overwrites velocity with the flap impulse.
    pub fn flap(&mut self) -> Cue {
        self.velocity = self.flap_impulse;
        Cue::Flap
    }

    /// Flaps unless the flyer is already within reach of `ceiling`, in which case
    /// upward motion is simply cancelled.
    pub fn try_flap(&mut self, ceiling: f32) -> Option<Cue> {
        if self.pos.y < ceiling {
            Some(self.flap())
        } else {
            self.velocity = 0.0;
            None
        }
    }

    pub fn update_collision_box(&mut self) {
        let i = self.inset;
        self.hitbox = rect_xywh(
            self.pos.x + i,
            self.pos.y + i,
            self.size.x - 2.0 * i,
            self.size.y - 2.0 * i,
        );
    }

    /// Advance wing animation and tilt, or bob in place while not playing.
    pub fn advance_rotation(&mut self, dt: f32, is_playing: bool, is_dying: bool) {
        if !is_dying {
            self.wing_time += dt;
        }

        if !is_playing {
            self.bob_time += dt;
            let offset = (self.bob_time * self.bob_frequency).sin() * self.bob_amplitude;
            let (lo, hi) = self.bob_band;
            self.pos.y = (self.bob_base + offset).clamp(lo, hi);
            return;
        }

        let tilt = if self.velocity > 0.0 {
            self.ascend
        } else {
            self.descend
        };
        self.rotation = ease_angle(self.rotation, tilt.angle, tilt.rate * dt);
        // The dive pull stacks on top of the velocity tilt.
        if is_dying {
            self.rotation = ease_angle(self.rotation, self.dive.angle, self.dive.rate * dt);
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[inline]
    pub fn collision_box(&self) -> Rect {
        self.hitbox
    }

    #[inline]
    pub fn skin(&self) -> FlyerSkin {
        self.skin
    }

    /// Wing frame index for the sprite sheet.
    pub fn animation_phase(&self) -> u32 {
        (self.wing_time / self.wing_frame_secs) as u32 % self.wing_frames
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, y: f32, velocity: f32) {
        self.pos.y = y;
        self.velocity = velocity;
    }
}

/// Wrap an angle in degrees into `[-180, 180)`.
#[inline]
fn wrap_degrees(a: f32) -> f32 {
    (a + 180.0).rem_euclid(360.0) - 180.0
}

/// Move `from` toward `to` along the shorter arc by fraction `alpha` (clamped to 1).
#[inline]
pub fn ease_angle(from: f32, to: f32, alpha: f32) -> f32 {
    let delta = wrap_degrees(to - from);
    wrap_degrees(from + delta * alpha.clamp(0.0, 1.0))
}
