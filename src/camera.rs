//! Camera: an axis-aligned viewport that follows a target, clamps itself to
//! map bounds, and shakes on demand
//!
//! The camera's `pos.z` carries zoom/depth for hosts that want it; all
//! follow/clamp math runs on the x/y plane. Shake jitter comes from a seeded
//! PCG stream so replays stay reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::math::{Vec2, Vec3};
use crate::tilemap::{TileIndex, index_at};

#[derive(Debug, Clone)]
struct Shake {
    range: f64,
    rng: Pcg32,
}

/// Viewport camera state. Created once per scene and mutated every frame.
#[derive(Debug, Clone)]
pub struct Camera {
    /// World position of the viewport's top-left corner; z is zoom/depth
    pub pos: Vec3,
    /// Viewport size; z is unused by the core
    pub dimension: Vec3,
    min_index: TileIndex,
    max_index: TileIndex,
    shake: Option<Shake>,
}

impl Camera {
    pub fn new(pos: Vec3, dimension: Vec3) -> Self {
        Self {
            pos,
            dimension,
            min_index: TileIndex::new(0, 0),
            max_index: TileIndex::new(0, 0),
            shake: None,
        }
    }

    /// Re-center the viewport on the target's center. Ignored while shaking
    /// so the jitter and the follow don't fight over the position.
    pub fn follow(&mut self, target_pos: Vec2, target_dim: Vec2) {
        if self.shake.is_some() {
            return;
        }
        self.pos.x = target_pos.x + target_dim.x / 2.0 - self.dimension.x / 2.0;
        self.pos.y = target_pos.y + target_dim.y / 2.0 - self.dimension.y / 2.0;
    }

    /// Clamp the position so the viewport stays within `[min, max]` on each
    /// axis. When the viewport is larger than the extent, the far edge wins:
    /// the position pins to `max - dimension`, which may land below `min`.
    pub fn clamp_pos(&mut self, min: Vec2, max: Vec2) {
        let far = max - self.dimension.xy();
        if far.x < min.x || far.y < min.y {
            log::debug!(
                "viewport {}x{} exceeds clamp extent, pinning to far edge",
                self.dimension.x,
                self.dimension.y
            );
        }
        self.pos.x = self.pos.x.max(min.x).min(far.x);
        self.pos.y = self.pos.y.max(min.y).min(far.y);
    }

    /// Recompute the visible tile-index window for the current position:
    /// `floor(pos / tile)` through `ceil((pos + dimension) / tile)`.
    pub fn update_tile_window(&mut self, tile_size: Vec2) {
        let top_left = self.pos.xy();
        let bottom_right = top_left + self.dimension.xy();
        self.min_index = index_at(top_left, tile_size);
        self.max_index = TileIndex::new(
            (bottom_right.x / tile_size.x).ceil() as i64,
            (bottom_right.y / tile_size.y).ceil() as i64,
        );
    }

    /// Clamp the computed tile window into `[min, max]` so tile queries
    /// never reference rows/columns outside the map.
    pub fn clamp_tile_window(&mut self, min: TileIndex, max: TileIndex) {
        self.min_index.col = self.min_index.col.max(min.col).min(max.col);
        self.min_index.row = self.min_index.row.max(min.row).min(max.row);
        self.max_index.col = self.max_index.col.max(min.col).min(max.col);
        self.max_index.row = self.max_index.row.max(min.row).min(max.row);
    }

    /// The visible tile window, as last computed by
    /// [`update_tile_window`](Self::update_tile_window).
    #[inline]
    pub fn tile_window(&self) -> (TileIndex, TileIndex) {
        (self.min_index, self.max_index)
    }

    /// Begin shaking: every [`view_pos`](Self::view_pos) call jitters the
    /// position by up to `range` pixels per axis. `follow` is suppressed
    /// until [`shake_end`](Self::shake_end). The seed fixes the jitter
    /// stream.
    pub fn shake_start(&mut self, range: f64, seed: u64) {
        log::debug!("camera shake start, range {range}");
        self.shake = Some(Shake {
            range,
            rng: Pcg32::seed_from_u64(seed),
        });
    }

    pub fn shake_end(&mut self) {
        log::debug!("camera shake end");
        self.shake = None;
    }

    #[inline]
    pub fn is_shaking(&self) -> bool {
        self.shake.is_some()
    }

    /// A fresh jitter offset, bounded by the shake range per axis; zero when
    /// not shaking. Each call advances the stream.
    pub fn shake_offset(&mut self) -> Vec2 {
        match &mut self.shake {
            Some(shake) if shake.range > 0.0 => Vec2::new(
                shake.rng.random_range(-shake.range..=shake.range),
                shake.rng.random_range(-shake.range..=shake.range),
            ),
            _ => Vec2::ZERO,
        }
    }

    /// The position to draw from this frame: the clamped/followed position
    /// plus the current shake jitter.
    pub fn view_pos(&mut self) -> Vec2 {
        self.pos.xy() + self.shake_offset()
    }
}
