//! Shardwave - a top-down arena shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, combat, waves, game state)
//! - `catalog`: Static registry of bullet modifier items
//!
//! Rendering, UI, and raw input plumbing live in consuming crates. This
//! crate exposes read-only simulation state plus explicit state-transition
//! entry points (`tick`, `fire`, `purchase`, `close_shop`, `restart`).

pub mod catalog;
pub mod sim;

pub use catalog::{Modifier, ModifierId, Rarity};
pub use sim::{GameState, InputState, tick};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Arena dimensions (px)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;
    pub const WALL_THICKNESS: f32 = 20.0;
    /// Bullets are culled this far outside the canvas
    pub const BULLET_CULL_MARGIN: f32 = 50.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 16.0;
    pub const PLAYER_MAX_HEALTH: f32 = 6.0;
    /// Base movement speed in px/sec (3 px per frame at 60 Hz)
    pub const PLAYER_SPEED: f32 = 180.0;
    pub const PLAYER_BASE_DAMAGE: f32 = 1.0;
    pub const PLAYER_BASE_FIRE_RATE: f32 = 1.0;
    /// Base bullet travel distance before expiry (px)
    pub const PLAYER_BASE_RANGE: f32 = 300.0;

    /// Milliseconds between shots at fire rate 1.0, per fire channel
    pub const BASE_FIRE_DELAY_MS: f64 = 200.0;

    /// Bullet defaults
    pub const BULLET_BASE_SIZE: f32 = 6.0;
    /// Bullet speed as a multiple of the player's movement speed
    pub const BULLET_SPEED_FACTOR: f32 = 8.0;
    /// Homing steering impulse added to velocity each tick (px/sec),
    /// never renormalized - homing bullets gain net speed over time
    pub const HOMING_STEER: f32 = 6.0;

    /// Explosion area radius and the damage multiplier at its edge
    pub const EXPLOSION_RADIUS: f32 = 60.0;
    pub const EXPLOSION_EDGE_FALLOFF: f32 = 0.3;

    /// Splitting: child count, damage/size scale, child speed (px/sec)
    pub const SPLIT_COUNT: u32 = 3;
    pub const SPLIT_DAMAGE_SCALE: f32 = 0.5;
    pub const SPLIT_SIZE_SCALE: f32 = 0.7;
    pub const SPLIT_SPEED: f32 = 240.0;

    /// Knockback impulse per point of the knockback stat (px/sec)
    pub const KNOCKBACK_IMPULSE: f32 = 60.0;
    /// Knockback geometric decay per tick
    pub const KNOCKBACK_DECAY: f32 = 0.9;
    /// Knockback snaps to zero below this, per axis (px/sec)
    pub const KNOCKBACK_EPSILON: f32 = 6.0;

    /// Poison health drain (hp/sec)
    pub const POISON_DRAIN: f32 = 1.2;
    /// Contact damage drain per point of enemy damage (hp/sec)
    pub const CONTACT_DAMAGE_RATE: f32 = 3.0;

    /// Wave phase countdowns (ms)
    pub const STARTING_DURATION_MS: f32 = 5000.0;
    pub const PREPARING_DURATION_MS: f32 = 3000.0;

    /// Economy
    pub const STARTING_MONEY: u32 = 50;
    pub const KILL_SCORE: u64 = 10;
    pub const WAVE_CLEAR_SCORE: u64 = 100;
    pub const SHOP_OFFER_COUNT: usize = 3;

    /// Hard cap on enemies per wave
    pub const MAX_WAVE_ENEMIES: u32 = 20;
}

/// Axis-aligned overlap test for two centered square hitboxes
#[inline]
pub fn aabb_overlap(pos_a: Vec2, size_a: f32, pos_b: Vec2, size_b: f32) -> bool {
    let half = (size_a + size_b) * 0.5;
    (pos_a.x - pos_b.x).abs() < half && (pos_a.y - pos_b.y).abs() < half
}

/// Unit vector for an angle in radians
#[inline]
pub fn angle_to_dir(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
