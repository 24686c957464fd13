//! Effect compositor
//!
//! Folds the player's held modifiers into one resolved stat/visual profile.
//! Pure and deterministic for a given ordered sequence; recomputed on every
//! firing event rather than cached, so held items stay an append-only
//! collection and no order-of-application state can go stale.

use serde::{Deserialize, Serialize};

use crate::catalog::{BulletShape, ModifierId};

/// Resolved combat stats. Baseline is the identity for each field's
/// combination rule: 1.0 for the multiplicative fields, false for the
/// boolean ones, 0 for the additive ones (multi_shot is based at 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub damage: f32,
    pub speed: f32,
    pub fire_rate: f32,
    pub size: f32,
    pub range: f32,
    pub piercing: bool,
    pub homing: bool,
    pub bouncing: bool,
    pub explosive: bool,
    pub poison: bool,
    pub freeze: bool,
    pub splitting: bool,
    pub multi_shot: u32,
    pub spread: f32,
    pub knockback: f32,
    pub life_steal: f32,
}

impl Default for ProfileStats {
    fn default() -> Self {
        Self {
            damage: 1.0,
            speed: 1.0,
            fire_rate: 1.0,
            size: 1.0,
            range: 1.0,
            piercing: false,
            homing: false,
            bouncing: false,
            explosive: false,
            poison: false,
            freeze: false,
            splitting: false,
            multi_shot: 1,
            spread: 0.0,
            knockback: 0.0,
            life_steal: 0.0,
        }
    }
}

/// Resolved visual hints, consumed only by rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileVisual {
    pub color: u32,
    pub trail: bool,
    pub glow: bool,
    pub particles: bool,
    pub size: f32,
    pub shape: BulletShape,
}

impl Default for ProfileVisual {
    fn default() -> Self {
        Self {
            color: 0xffffff,
            trail: false,
            glow: false,
            particles: false,
            size: 1.0,
            shape: BulletShape::Circle,
        }
    }
}

/// The combined effect of all currently held modifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedProfile {
    pub stats: ProfileStats,
    pub visual: ProfileVisual,
}

/// Fold a held-item sequence into one profile.
///
/// Duplicates compound: two "damage x2" items yield x4 damage, two
/// "multi shot +2" items yield 5 bullets, while boolean behaviors are
/// idempotent. That asymmetry is the build-diversity hook and must not be
/// "fixed".
pub fn resolve(items: &[ModifierId]) -> ResolvedProfile {
    let mut stats = ProfileStats::default();
    let mut visual = ProfileVisual::default();

    for id in items {
        let fx = &id.def().effects;

        // Multiplicative
        if let Some(damage) = fx.damage {
            stats.damage *= damage;
        }
        if let Some(speed) = fx.speed {
            stats.speed *= speed;
        }
        if let Some(fire_rate) = fx.fire_rate {
            stats.fire_rate *= fire_rate;
        }
        if let Some(size) = fx.size {
            stats.size *= size;
        }
        if let Some(range) = fx.range {
            stats.range *= range;
        }

        // Boolean (any holder enables)
        stats.piercing |= fx.piercing;
        stats.homing |= fx.homing;
        stats.bouncing |= fx.bouncing;
        stats.explosive |= fx.explosive;
        stats.poison |= fx.poison;
        stats.freeze |= fx.freeze;
        stats.splitting |= fx.splitting;

        // Additive (multi_shot contributes its count above the base shot)
        if let Some(multi_shot) = fx.multi_shot {
            stats.multi_shot += multi_shot.saturating_sub(1);
        }
        stats.spread += fx.spread;
        stats.knockback += fx.knockback;
        stats.life_steal += fx.life_steal;

        // Visual: color/shape last-writer-wins, booleans OR, size product
        let hints = &id.def().visual;
        if let Some(color) = hints.color {
            visual.color = color;
        }
        visual.trail |= hints.trail;
        visual.glow |= hints.glow;
        visual.particles |= hints.particles;
        if let Some(size) = hints.size {
            visual.size *= size;
        }
        if let Some(shape) = hints.shape {
            visual.shape = shape;
        }
    }

    ResolvedProfile { stats, visual }
}
