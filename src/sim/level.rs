//! Level geometry: an ordered, immutable list of square tiles
//!
//! Tile order is part of the collision contract. The vertical pass snaps to the
//! first overlapping tile in this order, not to the nearest one.

use serde::{Deserialize, Serialize};

/// A static square tile, identified by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
}

impl Tile {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Static collision geometry, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    block_size: i32,
    tiles: Box<[Tile]>,
}

/// Classic layout, resolver order preserved
const CLASSIC_ROWS: &[(i32, &[i32])] = &[
    // Ground floor
    (
        560,
        &[
            0, 40, 80, 120, 160, 200, 240, 280, 320, 360, 400, 440, 480, 520, 560, 600, 640, 680,
            720, 760,
        ],
    ),
    (480, &[200, 240, 280]),
    (400, &[400, 440]),
    (320, &[600, 640, 680]),
    (360, &[100, 140]),
    // Top platform
    (240, &[500, 540, 580]),
];

impl Level {
    pub fn new(block_size: i32, tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            block_size,
            tiles: tiles.into_iter().collect(),
        }
    }

    /// The built-in layout: a full-width floor and five platforms
    pub fn classic(block_size: i32) -> Self {
        Self::new(
            block_size,
            CLASSIC_ROWS
                .iter()
                .flat_map(|&(y, xs)| xs.iter().map(move |&x| Tile::new(x, y))),
        )
    }

    #[inline]
    pub fn block_size(&self) -> i32 {
        self.block_size
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl<'a> IntoIterator for &'a Level {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
