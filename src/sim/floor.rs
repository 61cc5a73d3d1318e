//! Scrolling floor strip: a ring of tiles plus one fixed collision rectangle.

use bevy::math::Rect;

use super::collision::rect_xywh;
use crate::common::tunables::Tunables;

#[derive(Debug, Clone, PartialEq)]
pub struct Floor {
    tiles: Vec<f32>,
    tile_width: f32,
    rect: Rect,
}

impl Floor {
    /// Tiles laid end to end from the origin.
    pub fn new(t: &Tunables) -> Self {
        let tiles = (0..t.floor_tile_count)
            .map(|i| i as f32 * t.floor_tile_width)
            .collect();
        Self {
            tiles,
            tile_width: t.floor_tile_width,
            rect: rect_xywh(0.0, 0.0, t.world_width, t.floor_height),
        }
    }

    /// Scroll the strip, moving any tile that has fully left the world to just
    /// past the current rightmost tile.
    ///
    /// The tiles form a contiguous ring of length `count * tile_width`, so the
    /// travel is reduced modulo that length first and each tile wraps at most once.
    pub fn advance(&mut self, scroll_speed: f32, dt: f32) {
        let strip = self.tile_width * self.tiles.len() as f32;
        let travel = scroll_speed * dt;
        if !travel.is_finite() || strip <= 0.0 {
            return;
        }
        let dx = travel % strip;

        for x in &mut self.tiles {
            *x += dx;
            if *x + self.tile_width < 0.0 {
                *x += strip;
            }
        }
    }

    /// Collision rectangle: the strip's full extent up to its top surface.
    #[inline]
    pub fn collision_rect(&self) -> Rect {
        self.rect
    }

    /// Height of the floor's top surface.
    #[inline]
    pub fn top(&self) -> f32 {
        self.rect.max.y
    }

    pub fn tiles(&self) -> &[f32] {
        &self.tiles
    }

    #[inline]
    pub fn tile_width(&self) -> f32 {
        self.tile_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// True if the union of tiles covers `[0, width]` with no hole.
    fn covers(floor: &Floor, width: f32) -> bool {
        let mut spans: Vec<(f32, f32)> = floor
            .tiles()
            .iter()
            .map(|&x| (x, x + floor.tile_width()))
            .collect();
        spans.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut reach = 0.0_f32;
        for (start, end) in spans {
            if start > reach + 1e-3 {
                break;
            }
            reach = reach.max(end);
        }
        reach >= width
    }

    #[test]
    fn canonical_layout() {
        let f = Floor::new(&Tunables::default());
        assert_eq!(f.tiles(), &[0.0, 168.0]);
        assert_eq!(f.top(), 56.0);
        assert_eq!(f.collision_rect().width(), 144.0);
    }

    #[test]
    fn wraps_a_tile_once_fully_past_origin() {
        let mut f = Floor::new(&Tunables::default());
        f.advance(-1.0, 168.0);
        assert_eq!(f.tiles(), &[-168.0, 0.0]);

        f.advance(-1.0, 1.0);
        assert_eq!(f.tiles(), &[167.0, -1.0]);
    }

    #[test]
    fn always_covers_visible_width() {
        let t = Tunables::default();
        let mut f = Floor::new(&t);
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        for _ in 0..50_000 {
            f.advance(t.scroll_speed, rng.gen_range(0.0..0.5));
            assert!(covers(&f, t.world_width), "{:?}", f.tiles());
        }
    }

    #[test]
    fn huge_step_returns_and_keeps_coverage() {
        let t = Tunables::default();
        let mut f = Floor::new(&t);
        f.advance(-40.0, 1.0e9);

        assert!(covers(&f, t.world_width), "{:?}", f.tiles());
        let mut xs = f.tiles().to_vec();
        xs.sort_by(f32::total_cmp);
        assert!((xs[1] - xs[0] - f.tile_width()).abs() < 1e-3, "{xs:?}");

        // Still scrolls normally afterwards.
        for _ in 0..1_000 {
            f.advance(t.scroll_speed, 1.0 / 60.0);
            assert!(covers(&f, t.world_width), "{:?}", f.tiles());
        }
    }

    #[test]
    fn collision_rect_does_not_scroll() {
        let mut f = Floor::new(&Tunables::default());
        let before = f.collision_rect();
        f.advance(-40.0, 3.0);
        assert_eq!(f.collision_rect(), before);
    }
}
