//! Player state and per-tick movement intent

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;

/// Derived contact state, read from `Player::grounded` at the end of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactState {
    Grounded,
    Airborne,
}

/// The player-controlled square
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    /// Set only by the vertical collision pass (and cleared by a jump)
    pub grounded: bool,
}

impl Player {
    /// A motionless, airborne player at the spawn point
    pub fn new(spawn: Vec2) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            grounded: false,
        }
    }

    /// Put the player back at the spawn point.
    ///
    /// Horizontal velocity is left alone; the next integration overwrites it.
    pub fn respawn(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.vel.y = 0.0;
    }

    /// Bounding box at the current position
    #[inline]
    pub fn bounds(&self, size: f32) -> Aabb {
        Aabb::square(self.pos, size)
    }

    pub fn contact_state(&self) -> ContactState {
        if self.grounded {
            ContactState::Grounded
        } else {
            ContactState::Airborne
        }
    }
}

/// Requested horizontal direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Horizontal {
    #[default]
    None,
    Left,
    Right,
}

impl Horizontal {
    /// Opposing directions cancel out
    pub fn from_keys(left: bool, right: bool) -> Self {
        match (left, right) {
            (true, false) => Horizontal::Left,
            (false, true) => Horizontal::Right,
            _ => Horizontal::None,
        }
    }

    /// Sign applied to the move speed
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Horizontal::None => 0.0,
            Horizontal::Left => -1.0,
            Horizontal::Right => 1.0,
        }
    }
}

/// What the player wants to do this tick. Rebuilt from input every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MovementIntent {
    pub horizontal: Horizontal,
    pub jump: bool,
}

impl MovementIntent {
    pub fn new(left: bool, right: bool, jump: bool) -> Self {
        Self {
            horizontal: Horizontal::from_keys(left, right),
            jump,
        }
    }
}
