//! Collision detection and response against static tiles
//!
//! Resolution runs one axis at a time. The horizontal pass either accepts the
//! whole candidate move or rejects it; there is no sliding up to a wall. The
//! vertical pass then snaps to the first overlapping tile in level order.

use glam::Vec2;

use super::level::{Level, Tile};
use super::state::Player;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    #[inline]
    pub fn square(top_left: Vec2, side: f32) -> Self {
        Self::new(top_left, Vec2::splat(side))
    }

    /// Box covered by a tile
    #[inline]
    pub fn tile(tile: &Tile, block_size: i32) -> Self {
        Self::square(
            Vec2::new(tile.x as f32, tile.y as f32),
            block_size as f32,
        )
    }

    /// Strict overlap: boxes that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// First tile in level order overlapping `bounds`
pub fn first_overlap<'a>(level: &'a Level, bounds: &Aabb) -> Option<(usize, &'a Tile)> {
    let block_size = level.block_size();
    level
        .iter()
        .enumerate()
        .find(|(_, tile)| Aabb::tile(tile, block_size).overlaps(bounds))
}

/// Result of the horizontal pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalOutcome {
    /// Candidate accepted (including a zero-length move)
    Moved,
    /// Candidate overlapped a tile; position unchanged
    Blocked { tile: usize },
    /// Candidate left the window; position unchanged
    OutOfBounds,
}

/// Result of the vertical pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalContact {
    /// No overlap, candidate committed
    None,
    /// Moving down into a tile: snapped on top of it
    Landed { tile: usize },
    /// Moving up (or at rest) into a tile: snapped below it
    Bonked { tile: usize },
}

/// Outcome of both axis passes for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub horizontal: HorizontalOutcome,
    pub vertical: VerticalContact,
}

/// Accept or reject the whole horizontal move to `candidate_x`.
///
/// Rejected on any tile overlap at the current `y`, or when the left edge
/// would leave `[0, max_x]`. A rejected move leaves `x` untouched.
pub fn resolve_horizontal(
    player: &mut Player,
    candidate_x: f32,
    level: &Level,
    player_size: f32,
    max_x: f32,
) -> HorizontalOutcome {
    let candidate = Aabb::square(Vec2::new(candidate_x, player.pos.y), player_size);

    if let Some((index, _)) = first_overlap(level, &candidate) {
        return HorizontalOutcome::Blocked { tile: index };
    }
    if !(0.0..=max_x).contains(&candidate_x) {
        return HorizontalOutcome::OutOfBounds;
    }

    player.pos.x = candidate_x;
    HorizontalOutcome::Moved
}

/// Move along `vel.y` from the already-resolved `x`, recomputing `grounded`.
///
/// No clamp to the window here; falling out is the respawn guard's job.
pub fn resolve_vertical(player: &mut Player, level: &Level, player_size: f32) -> VerticalContact {
    player.grounded = false;

    let candidate_y = player.pos.y + player.vel.y;
    let candidate = Aabb::square(Vec2::new(player.pos.x, candidate_y), player_size);

    let Some((index, tile)) = first_overlap(level, &candidate) else {
        player.pos.y = candidate_y;
        return VerticalContact::None;
    };

    let falling = player.vel.y > 0.0;
    player.vel.y = 0.0;
    if falling {
        player.pos.y = tile.y as f32 - player_size;
        player.grounded = true;
        VerticalContact::Landed { tile: index }
    } else {
        player.pos.y = (tile.y + level.block_size()) as f32;
        VerticalContact::Bonked { tile: index }
    }
}

/// Reset a player that fell below the window. Returns true on respawn.
pub fn respawn_guard(player: &mut Player, window_height: f32, spawn: Vec2) -> bool {
    if player.pos.y > window_height {
        player.respawn(spawn);
        true
    } else {
        false
    }
}
