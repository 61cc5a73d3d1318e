//! Gated obstacles and the stream that spawns, scrolls and recycles them.
//!
//! Every obstacle is a value: an `x` offset and a gap centre. Its barrier and
//! score-trigger rectangles are derived from those two numbers, so moving an
//! obstacle can never leave one of its rectangles behind.

use std::collections::VecDeque;

use bevy::math::Rect;
use rand::Rng;

use super::collision::{overlaps, rect_xywh};
use crate::common::tunables::Tunables;

/// Cosmetic barrier colour, shared by every obstacle of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleVariant {
    Green,
    Red,
}

impl ObstacleVariant {
    pub fn pick(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) { Self::Green } else { Self::Red }
    }
}

/// Shape shared by all obstacles of a stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleGeometry {
    pub width: f32,
    pub height: f32,
    /// Distance from the gap centre to each barrier.
    pub half_gap: f32,
    pub zone_offset: f32,
    pub zone_width: f32,
}

impl From<&Tunables> for ObstacleGeometry {
    fn from(t: &Tunables) -> Self {
        Self {
            width: t.pipe_width,
            height: t.pipe_height,
            half_gap: t.vertical_gap,
            zone_offset: t.score_zone_offset,
            zone_width: t.score_zone_width,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    x: f32,
    gap_center: f32,
    scored: bool,
    variant: ObstacleVariant,
    shape: ObstacleGeometry,
}

impl Obstacle {
    pub fn new(x: f32, gap_center: f32, variant: ObstacleVariant, shape: ObstacleGeometry) -> Self {
        Self { x, gap_center, scored: false, variant, shape }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn gap_center(&self) -> f32 {
        self.gap_center
    }

    #[inline]
    pub fn scored(&self) -> bool {
        self.scored
    }

    #[inline]
    pub fn variant(&self) -> ObstacleVariant {
        self.variant
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.shape.width
    }

    pub fn upper(&self) -> Rect {
        let s = self.shape;
        rect_xywh(self.x, self.gap_center + s.half_gap, s.width, s.height)
    }

    pub fn lower(&self) -> Rect {
        let s = self.shape;
        rect_xywh(self.x, self.gap_center - s.half_gap - s.height, s.width, s.height)
    }

    /// Trigger zone a little past the trailing edge, spanning three half-gaps
    /// centred on the gap.
    pub fn score_zone(&self) -> Rect {
        let s = self.shape;
        rect_xywh(
            self.x + s.width + s.zone_offset,
            self.gap_center - s.half_gap * 1.5,
            s.zone_width,
            s.half_gap * 3.0,
        )
    }

    pub fn barriers(&self) -> [Rect; 2] {
        [self.upper(), self.lower()]
    }

    #[inline]
    fn trailing_edge(&self) -> f32 {
        self.x + self.shape.width
    }
}

#[derive(Debug, Clone)]
pub struct ObstacleStream {
    obstacles: VecDeque<Obstacle>,
    shape: ObstacleGeometry,
    gap_min: f32,
    gap_max: f32,
    variant: ObstacleVariant,
}

impl ObstacleStream {
    /// A stream holding one seed obstacle at `world_width`.
    pub fn new(t: &Tunables, variant: ObstacleVariant, rng: &mut impl Rng) -> Self {
        let mut stream = Self {
            obstacles: VecDeque::with_capacity(8),
            shape: ObstacleGeometry::from(t),
            gap_min: t.gap_center_min,
            gap_max: t.gap_center_max,
            variant,
        };
        stream.push_at(t.world_width, rng);
        stream
    }

    fn push_at(&mut self, x: f32, rng: &mut impl Rng) {
        let gap_center = rng.gen_range(self.gap_min..=self.gap_max);
        self.obstacles
            .push_back(Obstacle::new(x, gap_center, self.variant, self.shape));
    }

    /// Scroll every obstacle (and therefore all of its rectangles).
    pub fn advance(&mut self, scroll_speed: f32, dt: f32) {
        let dx = scroll_speed * dt;
        for o in &mut self.obstacles {
            o.x += dx;
        }
    }

    /// Append a fresh obstacle at the right edge once the newest one has moved
    /// more than `horizontal_gap` into the world.
    pub fn spawn_if_needed(
        &mut self,
        world_width: f32,
        horizontal_gap: f32,
        rng: &mut impl Rng,
    ) -> bool {
        let due = self
            .obstacles
            .back()
            .is_none_or(|newest| newest.x < world_width - horizontal_gap);
        if due {
            self.push_at(world_width, rng);
        }
        due
    }

    /// Drop obstacles whose trailing edge has left the world on the left.
    /// Returns how many were removed.
    pub fn recycle(&mut self) -> usize {
        let mut removed = 0;
        while self
            .obstacles
            .front()
            .is_some_and(|oldest| oldest.trailing_edge() < 0.0)
        {
            self.obstacles.pop_front();
            removed += 1;
        }
        removed
    }

    /// Test the oldest unconsumed score zone only, consuming it on overlap.
    pub fn check_score(&mut self, flyer_box: Rect) -> bool {
        let Some(next) = self.obstacles.iter_mut().find(|o| !o.scored) else {
            return false;
        };
        if overlaps(flyer_box, next.score_zone()) {
            next.scored = true;
            true
        } else {
            false
        }
    }

    /// Every barrier rectangle, oldest obstacle first.
    pub fn barriers(&self) -> impl Iterator<Item = Rect> + '_ {
        self.obstacles.iter().flat_map(Obstacle::barriers)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Obstacle> + '_ {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn oldest(&self) -> Option<&Obstacle> {
        self.obstacles.front()
    }

    pub fn newest(&self) -> Option<&Obstacle> {
        self.obstacles.back()
    }

    /// Score zones not yet consumed.
    pub fn pending_triggers(&self) -> usize {
        self.obstacles.iter().filter(|o| !o.scored).count()
    }

    pub fn variant(&self) -> ObstacleVariant {
        self.variant
    }
}
