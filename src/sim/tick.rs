//! Fixed-step simulation tick
//!
//! One call advances the player by exactly one step. There is no dt: every
//! constant is expressed per tick, so a slow host runs the game slower instead
//! of taking bigger steps.

use glam::Vec2;

use super::collision::{Resolution, resolve_horizontal, resolve_vertical, respawn_guard};
use super::level::Level;
use super::state::{MovementIntent, Player};
use crate::settings::Settings;

/// Physics parameters the tick reads, extracted once from `Settings`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    pub window_width: f32,
    pub window_height: f32,
    pub player_size: f32,
    pub gravity: f32,
    pub jump_strength: f32,
    pub move_speed: f32,
    pub spawn: Vec2,
}

impl SimParams {
    /// Largest x the player's left edge may occupy
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.window_width - self.player_size
    }
}

impl Default for SimParams {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for SimParams {
    fn from(settings: &Settings) -> Self {
        Self {
            window_width: settings.window_width,
            window_height: settings.window_height,
            player_size: settings.player_size,
            gravity: settings.gravity,
            jump_strength: settings.jump_strength,
            move_speed: settings.move_speed,
            spawn: settings.spawn,
        }
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub jumped: bool,
    pub resolution: Resolution,
    pub respawned: bool,
}

/// Update velocity from intent and gravity; returns the candidate x.
///
/// Horizontal velocity is replaced, never accumulated. A jump only fires when
/// grounded. Gravity is added every tick, even right after a jump and even
/// while resting; the vertical pass cancels it when standing on a tile.
pub fn integrate(player: &mut Player, intent: &MovementIntent, params: &SimParams) -> f32 {
    player.vel.x = intent.horizontal.sign() * params.move_speed;

    if intent.jump && player.grounded {
        player.vel.y = params.jump_strength;
        player.grounded = false;
    }

    player.vel.y += params.gravity;

    player.pos.x + player.vel.x
}

/// Advance the player by one tick against the level
pub fn tick(
    player: &mut Player,
    level: &Level,
    intent: &MovementIntent,
    params: &SimParams,
) -> TickReport {
    let jumped = intent.jump && player.grounded;
    let candidate_x = integrate(player, intent, params);

    let horizontal = resolve_horizontal(
        player,
        candidate_x,
        level,
        params.player_size,
        params.max_x(),
    );
    let vertical = resolve_vertical(player, level, params.player_size);
    let respawned = respawn_guard(player, params.window_height, params.spawn);

    TickReport {
        jumped,
        resolution: Resolution {
            horizontal,
            vertical,
        },
        respawned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::collision::{HorizontalOutcome, VerticalContact};
    use crate::sim::level::Tile;
    use crate::sim::state::Horizontal;

    fn resting_player() -> Player {
        // Standing on the classic floor with nothing overhead
        Player {
            pos: Vec2::new(20.0, 540.0),
            vel: Vec2::ZERO,
            grounded: true,
        }
    }

    #[test]
    fn test_horizontal_velocity_is_set_not_accumulated() {
        let params = SimParams::default();
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        player.vel.x = 3.0;

        let right = MovementIntent::new(false, true, false);
        assert_eq!(integrate(&mut player, &right, &params), 105.0);
        assert_eq!(player.vel.x, MOVE_SPEED);
        integrate(&mut player, &right, &params);
        assert_eq!(player.vel.x, MOVE_SPEED);

        let left = MovementIntent::new(true, false, false);
        assert_eq!(integrate(&mut player, &left, &params), 95.0);
        assert_eq!(player.vel.x, -MOVE_SPEED);

        let both = MovementIntent::new(true, true, false);
        assert_eq!(integrate(&mut player, &both, &params), 100.0);
        assert_eq!(player.vel.x, 0.0);
        assert_eq!(both.horizontal, Horizontal::None);
    }

    #[test]
    fn test_gravity_always_accumulates() {
        let params = SimParams::default();
        let mut player = resting_player();

        integrate(&mut player, &MovementIntent::default(), &params);
        assert_eq!(player.vel.y, 0.5);
        assert!(player.grounded);

        // The resolver cancels the bias on the resting contact
        let level = Level::classic(BLOCK_SIZE);
        let contact = resolve_vertical(&mut player, &level, PLAYER_SIZE);
        assert!(matches!(contact, VerticalContact::Landed { .. }));
        assert_eq!(player.vel.y, 0.0);
        assert_eq!(player.pos.y, 540.0);
    }

    #[test]
    fn test_jump_applies_impulse_then_gravity() {
        let params = SimParams::default();
        let mut player = resting_player();
        let jump = MovementIntent {
            jump: true,
            ..Default::default()
        };

        integrate(&mut player, &jump, &params);
        assert_eq!(player.vel.y, JUMP_STRENGTH + GRAVITY);
        assert!(!player.grounded);
    }

    #[test]
    fn test_jump_gated_when_airborne() {
        let params = SimParams::default();
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        player.vel.y = 2.0;
        let jump = MovementIntent {
            jump: true,
            ..Default::default()
        };

        integrate(&mut player, &jump, &params);
        assert_eq!(player.vel.y, 2.5);

        let level = Level::classic(BLOCK_SIZE);
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        let report = tick(&mut player, &level, &jump, &params);
        assert!(!report.jumped);
        assert_eq!(player.vel.y, GRAVITY);
    }

    #[test]
    fn test_resting_stability() {
        let params = SimParams::default();
        let level = Level::classic(BLOCK_SIZE);
        let mut player = resting_player();

        for _ in 0..1000 {
            let report = tick(&mut player, &level, &MovementIntent::default(), &params);
            assert!(matches!(
                report.resolution.vertical,
                VerticalContact::Landed { .. }
            ));
        }
        assert_eq!(player.pos, Vec2::new(20.0, 540.0));
        assert_eq!(player.vel, Vec2::ZERO);
        assert!(player.grounded);
    }

    #[test]
    fn test_jump_arc_lands_back_on_floor() {
        let params = SimParams::default();
        let level = Level::classic(BLOCK_SIZE);
        let mut player = resting_player();
        let jump = MovementIntent {
            jump: true,
            ..Default::default()
        };

        let report = tick(&mut player, &level, &jump, &params);
        assert!(report.jumped);
        assert!(!player.grounded);
        assert!(player.pos.y < 540.0);

        // Holding jump while airborne does nothing until landing
        let mut ticks = 1;
        while !player.grounded {
            tick(&mut player, &level, &jump, &params);
            ticks += 1;
            assert!(ticks < 200, "player never landed");
        }
        assert_eq!(player.pos.y, 540.0);
        assert!(ticks > 40);
    }

    #[test]
    fn test_walk_into_wall_is_rejected() {
        let params = SimParams::default();
        // Floor plus a wall tile sitting on it
        let level = Level::new(
            BLOCK_SIZE,
            [Tile::new(0, 560), Tile::new(40, 560), Tile::new(40, 520)],
        );
        let mut player = Player {
            pos: Vec2::new(18.0, 540.0),
            vel: Vec2::ZERO,
            grounded: true,
        };
        let right = MovementIntent::new(false, true, false);

        let report = tick(&mut player, &level, &right, &params);
        assert_eq!(
            report.resolution.horizontal,
            HorizontalOutcome::Blocked { tile: 2 }
        );
        assert_eq!(player.pos.x, 18.0);
        assert!(player.grounded);
    }

    #[test]
    fn test_falling_off_world_respawns() {
        let params = SimParams::default();
        let level = Level::new(BLOCK_SIZE, []);
        let mut player = Player {
            pos: Vec2::new(300.0, 595.0),
            vel: Vec2::new(0.0, 6.0),
            grounded: false,
        };

        let report = tick(&mut player, &level, &MovementIntent::default(), &params);
        assert!(report.respawned);
        assert_eq!(player.pos, Vec2::new(SPAWN_X, SPAWN_Y));
        assert_eq!(player.vel.y, 0.0);
    }

    #[test]
    fn test_determinism() {
        let params = SimParams::default();
        let level = Level::classic(BLOCK_SIZE);
        let mut a = Player::new(params.spawn);
        let mut b = Player::new(params.spawn);

        let inputs = [
            MovementIntent::new(false, true, false),
            MovementIntent::new(false, true, true),
            MovementIntent::new(true, false, false),
            MovementIntent::default(),
        ];
        for i in 0..500 {
            let intent = inputs[(i / 25) % inputs.len()];
            tick(&mut a, &level, &intent, &params);
            tick(&mut b, &level, &intent, &params);
        }
        assert_eq!(a, b);
    }
}
