//! Tunable gameplay constants.
//!
//! `Tunables` is fixed for the lifetime of a session. It is validated once when a
//! [`Game`](crate::sim::Game) is built; nothing re-checks it per frame.

use std::fmt;

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Tunables {
    pub world_width: f32,
    pub world_height: f32,

    pub gravity: f32,
    pub flap_impulse: f32,
    /// A flap closer than this to the top of the world only kills velocity.
    pub ceiling_margin: f32,

    /// Leftward scroll shared by obstacles and floor. Must be negative.
    pub scroll_speed: f32,

    pub vertical_gap: f32,
    pub horizontal_gap: f32,
    pub pipe_width: f32,
    pub pipe_height: f32,
    pub gap_center_min: f32,
    pub gap_center_max: f32,
    pub score_zone_offset: f32,
    pub score_zone_width: f32,

    pub floor_height: f32,
    pub floor_sink: f32,
    pub floor_tile_width: f32,
    pub floor_tile_count: usize,

    pub flyer_x: f32,
    pub flyer_start_y: f32,
    pub flyer_width: f32,
    pub flyer_height: f32,
    pub hitbox_inset: f32,

    pub bob_frequency: f32,
    pub bob_amplitude: f32,

    pub ascend_angle: f32,
    pub ascend_rate: f32,
    pub descend_angle: f32,
    pub descend_rate: f32,
    pub dive_angle: f32,
    pub dive_rate: f32,
    pub die_rotation_threshold: f32,

    pub wing_frame_secs: f32,
    pub wing_frames: u32,

    /// `None` seeds the session RNG from entropy.
    pub seed: Option<u64>,
}

impl Default for Tunables {
    fn default() -> Self {
        let world_height = 256.0;
        Self {
            world_width: 144.0,
            world_height,

            gravity: 1080.0,
            flap_impulse: 252.0,
            ceiling_margin: 25.0,

            scroll_speed: -40.0,

            vertical_gap: 27.0,
            horizontal_gap: 70.0,
            pipe_width: 26.0,
            pipe_height: 160.0,
            gap_center_min: world_height / 2.0 - 20.0,
            gap_center_max: world_height / 2.0 + 70.0,
            score_zone_offset: 5.0,
            score_zone_width: 20.0,

            floor_height: 56.0,
            floor_sink: 5.0,
            floor_tile_width: 168.0,
            floor_tile_count: 2,

            flyer_x: 35.0,
            flyer_start_y: world_height / 2.0 + 10.0,
            flyer_width: 17.0,
            flyer_height: 12.0,
            hitbox_inset: 2.5,

            bob_frequency: 7.0,
            bob_amplitude: 2.0,

            ascend_angle: 30.0,
            ascend_rate: 30.0,
            descend_angle: -50.0,
            descend_rate: 3.0,
            dive_angle: -70.0,
            dive_rate: 10.0,
            die_rotation_threshold: 20.0,

            wing_frame_secs: 0.1,
            wing_frames: 4,

            seed: None,
        }
    }
}

/// A tunable that cannot produce a playable world.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    NotFinite(&'static str),
    NotPositive { field: &'static str, value: f32 },
    ScrollNotLeftward(f32),
    EmptyGapRange { min: f32, max: f32 },
    FloorTooShort { tiles: usize, tile_width: f32, world_width: f32 },
    SinkDeeperThanFloor { sink: f32, floor_height: f32 },
    HitboxSwallowed { inset: f32 },
    FlyerOutsideWorld { y: f32 },
    NoWingFrames,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite(field) => write!(f, "`{field}` must be finite"),
            Self::NotPositive { field, value } => {
                write!(f, "`{field}` must be positive (got {value})")
            }
            Self::ScrollNotLeftward(v) => {
                write!(f, "`scroll_speed` must be negative (got {v})")
            }
            Self::EmptyGapRange { min, max } => {
                write!(f, "gap centre range is empty ({min} > {max})")
            }
            Self::FloorTooShort { tiles, tile_width, world_width } => write!(
                f,
                "{tiles} floor tiles of width {tile_width} cannot wrap across a world {world_width} wide"
            ),
            Self::SinkDeeperThanFloor { sink, floor_height } => {
                write!(f, "`floor_sink` {sink} exceeds `floor_height` {floor_height}")
            }
            Self::HitboxSwallowed { inset } => {
                write!(f, "`hitbox_inset` {inset} leaves no collision box")
            }
            Self::FlyerOutsideWorld { y } => {
                write!(f, "`flyer_start_y` {y} lies outside the playable band")
            }
            Self::NoWingFrames => write!(f, "`wing_frames` must be at least 1"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl Tunables {
    /// Lowest `y` the flyer can reach: the floor top minus the allowed sink.
    #[inline]
    pub fn rest_height(&self) -> f32 {
        self.floor_height - self.floor_sink
    }

    /// Highest `y` the flyer can reach.
    #[inline]
    pub fn ceiling(&self) -> f32 {
        self.world_height - self.flyer_height
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let floats = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("gravity", self.gravity),
            ("flap_impulse", self.flap_impulse),
            ("ceiling_margin", self.ceiling_margin),
            ("scroll_speed", self.scroll_speed),
            ("vertical_gap", self.vertical_gap),
            ("horizontal_gap", self.horizontal_gap),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
            ("gap_center_min", self.gap_center_min),
            ("gap_center_max", self.gap_center_max),
            ("score_zone_offset", self.score_zone_offset),
            ("score_zone_width", self.score_zone_width),
            ("floor_height", self.floor_height),
            ("floor_sink", self.floor_sink),
            ("floor_tile_width", self.floor_tile_width),
            ("flyer_x", self.flyer_x),
            ("flyer_start_y", self.flyer_start_y),
            ("flyer_width", self.flyer_width),
            ("flyer_height", self.flyer_height),
            ("hitbox_inset", self.hitbox_inset),
            ("bob_frequency", self.bob_frequency),
            ("bob_amplitude", self.bob_amplitude),
            ("ascend_angle", self.ascend_angle),
            ("ascend_rate", self.ascend_rate),
            ("descend_angle", self.descend_angle),
            ("descend_rate", self.descend_rate),
            ("dive_angle", self.dive_angle),
            ("dive_rate", self.dive_rate),
            ("die_rotation_threshold", self.die_rotation_threshold),
            ("wing_frame_secs", self.wing_frame_secs),
        ];
        if let Some((field, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SettingsError::NotFinite(field));
        }

        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("gravity", self.gravity),
            ("flap_impulse", self.flap_impulse),
            ("vertical_gap", self.vertical_gap),
            ("horizontal_gap", self.horizontal_gap),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
            ("score_zone_width", self.score_zone_width),
            ("floor_height", self.floor_height),
            ("floor_tile_width", self.floor_tile_width),
            ("flyer_width", self.flyer_width),
            ("flyer_height", self.flyer_height),
            ("wing_frame_secs", self.wing_frame_secs),
        ];
        if let Some(&(field, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(SettingsError::NotPositive { field, value });
        }

        if self.scroll_speed >= 0.0 {
            return Err(SettingsError::ScrollNotLeftward(self.scroll_speed));
        }
        if self.gap_center_min > self.gap_center_max {
            return Err(SettingsError::EmptyGapRange {
                min: self.gap_center_min,
                max: self.gap_center_max,
            });
        }

        // A tile only wraps once fully off the left edge, so the strip needs one
        // spare tile beyond the visible width.
        let strip = self.floor_tile_count as f32 * self.floor_tile_width;
        if self.floor_tile_count < 2 || strip < self.world_width + self.floor_tile_width {
            return Err(SettingsError::FloorTooShort {
                tiles: self.floor_tile_count,
                tile_width: self.floor_tile_width,
                world_width: self.world_width,
            });
        }

        if self.floor_sink < 0.0 || self.floor_sink > self.floor_height {
            return Err(SettingsError::SinkDeeperThanFloor {
                sink: self.floor_sink,
                floor_height: self.floor_height,
            });
        }
        let min_side = self.flyer_width.min(self.flyer_height);
        if self.hitbox_inset < 0.0 || self.hitbox_inset * 2.0 >= min_side {
            return Err(SettingsError::HitboxSwallowed { inset: self.hitbox_inset });
        }
        if !(self.rest_height()..=self.ceiling()).contains(&self.flyer_start_y) {
            return Err(SettingsError::FlyerOutsideWorld { y: self.flyer_start_y });
        }
        if self.wing_frames == 0 {
            return Err(SettingsError::NoWingFrames);
        }

        Ok(())
    }
}
