//! Position integration, arena-bound clamping, knockback decay
//!
//! Axis-independent wall handling: each axis of a candidate move is
//! accepted or rejected on its own, so an entity blocked on one axis
//! still slides along the wall on the other.

use glam::Vec2;

use super::state::{Arena, Player};
use super::tick::InputState;
use crate::consts::{KNOCKBACK_DECAY, KNOCKBACK_EPSILON};

/// Advance the player one tick from the held movement directions.
///
/// Diagonal input is scaled by 1/sqrt(2) so diagonal travel matches
/// single-axis travel.
pub fn step_player(player: &mut Player, input: &InputState, arena: &Arena, dt: f32) {
    let dir = input.move_direction();
    player.vel = dir * player.speed;

    let candidate = player.pos + player.vel * dt;
    if arena.fits_x(candidate.x, player.size) {
        player.pos.x = candidate.x;
    }
    if arena.fits_y(candidate.y, player.size) {
        player.pos.y = candidate.y;
    }
}

/// Apply a knockback impulse to a position, then decay it.
///
/// The impulse shrinks by a fixed factor per tick and snaps to exactly
/// zero once an axis drops below the epsilon, so it cannot creep forever.
pub fn apply_knockback(knockback: &mut Vec2, pos: &mut Vec2, dt: f32) {
    if *knockback == Vec2::ZERO {
        return;
    }
    *pos += *knockback * dt;
    *knockback *= KNOCKBACK_DECAY;
    if knockback.x.abs() < KNOCKBACK_EPSILON {
        knockback.x = 0.0;
    }
    if knockback.y.abs() < KNOCKBACK_EPSILON {
        knockback.y = 0.0;
    }
}

/// Combine held direction booleans into a unit-or-zero movement vector
pub(crate) fn direction_vector(up: bool, down: bool, left: bool, right: bool) -> Vec2 {
    let mut dir = Vec2::ZERO;
    if up {
        dir.y -= 1.0;
    }
    if down {
        dir.y += 1.0;
    }
    if left {
        dir.x -= 1.0;
    }
    if right {
        dir.x += 1.0;
    }
    if dir.x != 0.0 && dir.y != 0.0 {
        dir *= std::f32::consts::FRAC_1_SQRT_2;
    }
    dir
}
