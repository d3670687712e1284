//! Draw requests for 2D rectangles

use serde::{Deserialize, Serialize};

use crate::sim::{Level, Player};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Background, tile and player colors
pub const CLEAR_COLOR: Color = Color::WHITE;
pub const TILE_COLOR: Color = Color::BLACK;
pub const PLAYER_COLOR: Color = Color::RED;

/// A filled rectangle in pixel space (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub color: Color,
}

impl DrawRect {
    /// Does the rect cover the pixel at `(px, py)`?
    #[inline]
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

/// Everything drawn in one tick, back to front
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub clear: Color,
    pub rects: Vec<DrawRect>,
}

impl Frame {
    /// The player rect, always drawn last
    pub fn player_rect(&self) -> Option<&DrawRect> {
        self.rects.last().filter(|r| r.color == PLAYER_COLOR)
    }
}

/// Build the frame for the current level and player.
///
/// Tiles first in level order, then the player with its position truncated
/// to whole pixels.
pub fn build_frame(level: &Level, player: &Player, player_size: f32) -> Frame {
    let block = level.block_size();
    let size = player_size as i32;

    let mut rects = Vec::with_capacity(level.len() + 1);
    rects.extend(level.iter().map(|tile| DrawRect {
        x: tile.x,
        y: tile.y,
        w: block,
        h: block,
        color: TILE_COLOR,
    }));
    rects.push(DrawRect {
        x: player.pos.x as i32,
        y: player.pos.y as i32,
        w: size,
        h: size,
        color: PLAYER_COLOR,
    });

    Frame {
        clear: CLEAR_COLOR,
        rects,
    }
}
