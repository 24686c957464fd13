//! Simulation tick
//!
//! The composition root: one call advances exactly one frame's worth of
//! simulation. The caller owns frame pacing and passes the elapsed time;
//! all countdown durations are expressed for a nominal 60 Hz frame.
//!
//! The input snapshot is read once per call. Input events that arrive
//! between ticks coalesce into the latest snapshot on the caller's side;
//! there is no event queue.

use glam::Vec2;

use super::combat::{self, FireChannel};
use super::movement;
use super::state::{GameState, WavePhase};
use super::waves;

/// Abstract input snapshot for a single tick.
///
/// Direction booleans are "currently held" flags; the core assumes no
/// particular raw key or pointer encoding beyond this shape.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub shoot_up: bool,
    pub shoot_down: bool,
    pub shoot_left: bool,
    pub shoot_right: bool,
    /// Pointer position in arena coordinates
    pub pointer: Vec2,
    pub pointer_pressed: bool,
}

impl InputState {
    /// Held movement directions folded into a unit-or-zero vector
    pub fn move_direction(&self) -> Vec2 {
        movement::direction_vector(self.move_up, self.move_down, self.move_left, self.move_right)
    }

    /// Held shoot directions folded into a unit vector, if any
    pub fn shoot_direction(&self) -> Option<Vec2> {
        let dir = movement::direction_vector(
            self.shoot_up,
            self.shoot_down,
            self.shoot_left,
            self.shoot_right,
        );
        (dir != Vec2::ZERO).then_some(dir)
    }
}

/// Advance the simulation by one frame.
///
/// A no-op while paused (state, timers, and positions freeze) or after
/// game over (terminal until [`GameState::restart`]). During the shopping
/// phase only the director runs; movement, shooting, and collision are
/// suspended until the shop closes.
pub fn tick(state: &mut GameState, input: &InputState, dt: f32) {
    if state.paused || state.game_over {
        return;
    }

    state.time_ticks += 1;
    state.clock_ms += f64::from(dt) * 1000.0;

    match state.wave_phase {
        WavePhase::Starting | WavePhase::Preparing | WavePhase::Fighting => {
            movement::step_player(&mut state.player, input, &state.arena, dt);

            if input.pointer_pressed {
                let aim = input.pointer - state.player.pos;
                combat::fire(state, FireChannel::Aim, aim);
            }
            if let Some(dir) = input.shoot_direction() {
                combat::fire(state, FireChannel::Directional, dir);
            }

            combat::update_bullets(state, dt);
            combat::update_enemies(state, dt);
            combat::resolve_collisions(state, dt);
            combat::sweep_dead(state);
        }
        WavePhase::Shopping => {}
    }

    waves::update(state, dt);
    state.normalize_order();
}
