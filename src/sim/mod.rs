//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed step only, constants are per tick
//! - Stable iteration order (level order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{
    Aabb, HorizontalOutcome, Resolution, VerticalContact, first_overlap, resolve_horizontal,
    resolve_vertical, respawn_guard,
};
pub use level::{Level, Tile};
pub use state::{ContactState, Horizontal, MovementIntent, Player};
pub use tick::{SimParams, TickReport, integrate, tick};
