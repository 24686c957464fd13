//! Game state and core simulation types
//!
//! Everything a presentation layer reads between ticks lives here. The
//! whole tree is serializable so a harness can snapshot and restore runs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::profile::ProfileVisual;
use crate::catalog::ModifierId;
use crate::consts::*;

/// Wave-flow phase. `Starting` occurs exactly once, at game start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// Initial countdown before the first prepare step
    Starting,
    /// Short countdown before the next enemy batch spawns
    Preparing,
    /// Enemies alive; combat pipeline runs
    Fighting,
    /// Between-wave shop; simulation progression suspended
    Shopping,
}

/// The bounded arena. A single room; the walls are solid on all sides.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub wall: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            wall: WALL_THICKNESS,
        }
    }
}

impl Arena {
    /// Clamp a centered square hitbox inside the interior, per axis
    pub fn clamp(&self, pos: Vec2, size: f32) -> Vec2 {
        let half = size * 0.5;
        Vec2::new(
            pos.x.clamp(self.wall + half, self.width - self.wall - half),
            pos.y.clamp(self.wall + half, self.height - self.wall - half),
        )
    }

    /// Whether a centered hitbox would stay inside the interior on the x axis
    pub fn fits_x(&self, x: f32, size: f32) -> bool {
        let half = size * 0.5;
        x - half > self.wall && x + half < self.width - self.wall
    }

    /// Whether a centered hitbox would stay inside the interior on the y axis
    pub fn fits_y(&self, y: f32, size: f32) -> bool {
        let half = size * 0.5;
        y - half > self.wall && y + half < self.height - self.wall
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// True once a point is further than `margin` outside the canvas
    pub fn outside_margin(&self, pos: Vec2, margin: f32) -> bool {
        pos.x < -margin || pos.x > self.width + margin || pos.y < -margin || pos.y > self.height + margin
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub damage: f32,
    /// Movement speed (px/sec); also the base of bullet speed
    pub speed: f32,
    pub fire_rate: f32,
    pub size: f32,
    /// Held modifiers, append-only, duplicates allowed. The resolved
    /// profile is always recomputed from this list, never stored.
    pub items: Vec<ModifierId>,
    /// Last shot on the free-aim (pointer) channel, sim-clock ms
    pub last_aim_shot_ms: f64,
    /// Last shot on the fixed-direction (key) channel, sim-clock ms
    pub last_directional_shot_ms: f64,
}

impl Player {
    pub(crate) fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            damage: PLAYER_BASE_DAMAGE,
            speed: PLAYER_SPEED,
            fire_rate: PLAYER_BASE_FIRE_RATE,
            size: PLAYER_SIZE,
            items: Vec::new(),
            // Far enough in the past that the first shot is never gated.
            // Finite so the state tree stays JSON-safe.
            last_aim_shot_ms: -1.0e12,
            last_directional_shot_ms: -1.0e12,
        }
    }

    /// Heal by `amount`, clamped to max health
    pub fn heal(&mut self, amount: f32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    /// Drain health, clamped at zero. Returns true if this drop was lethal.
    pub fn hurt(&mut self, amount: f32) -> bool {
        self.health = (self.health - amount).max(0.0);
        self.health <= 0.0
    }
}

/// Enemy archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Basic,
    Fast,
    Tank,
}

impl EnemyKind {
    /// Hit points for this kind at the given wave
    pub fn health(self, wave: u32) -> f32 {
        match self {
            EnemyKind::Basic => (3 + wave / 3) as f32,
            EnemyKind::Fast => (2 + wave / 4) as f32,
            EnemyKind::Tank => (5 + wave / 2) as f32,
        }
    }

    /// Chase speed in px/sec (fast enemies gain 0.1 px/frame per wave)
    pub fn speed(self, wave: u32) -> f32 {
        match self {
            EnemyKind::Basic => 60.0,
            EnemyKind::Fast => 90.0 + wave as f32 * 6.0,
            EnemyKind::Tank => 30.0,
        }
    }

    pub fn size(self) -> f32 {
        match self {
            EnemyKind::Basic => 20.0,
            EnemyKind::Fast => 14.0,
            EnemyKind::Tank => 28.0,
        }
    }

    /// Body color hint, packed 0xRRGGBB
    pub fn color(self) -> u32 {
        match self {
            EnemyKind::Basic => 0xff4444,
            EnemyKind::Fast => 0xffff44,
            EnemyKind::Tank => 0xaa44ff,
        }
    }
}

/// An enemy entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub damage: f32,
    /// Chase speed (px/sec), fixed at spawn from kind and wave
    pub speed: f32,
    pub size: f32,
    pub color: u32,
    /// Impulse velocity from hits; decays geometrically each tick
    pub knockback: Vec2,
    /// Latched status flags set by bullet effects
    pub poisoned: bool,
    pub frozen: bool,
    /// Reserved; nothing sets this in current behavior
    pub stunned: bool,
}

impl Enemy {
    pub fn spawn(id: u32, kind: EnemyKind, wave: u32, pos: Vec2) -> Self {
        let health = kind.health(wave);
        Self {
            id,
            kind,
            pos,
            vel: Vec2::ZERO,
            health,
            max_health: health,
            damage: 1.0,
            speed: kind.speed(wave),
            size: kind.size(),
            color: kind.color(),
            knockback: Vec2::ZERO,
            poisoned: false,
            frozen: false,
            stunned: false,
        }
    }
}

/// A live bullet. Behavior flags are flattened out of the resolved profile
/// at fire time; the profile itself is never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage: f32,
    pub size: f32,
    /// Maximum travel distance (px) before expiry
    pub range: f32,
    pub distance_traveled: f32,
    pub piercing: bool,
    pub homing: bool,
    pub bouncing: bool,
    pub explosive: bool,
    pub poison: bool,
    pub freeze: bool,
    pub splitting: bool,
    /// Knockback stat applied to struck enemies (0 = none)
    pub knockback: f32,
    /// Health restored to the player per enemy hit
    pub life_steal: f32,
    /// Rendering hints only; the sim never reads these
    pub visual: ProfileVisual,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducible wave layouts and shop rotations
    pub seed: u64,
    pub player: Player,
    pub arena: Arena,
    /// Live enemies (sorted by id for determinism)
    pub enemies: Vec<Enemy>,
    /// Live bullets (sorted by id for determinism)
    pub bullets: Vec<Bullet>,
    pub score: u64,
    /// Terminal until `restart`; the tick body is a no-op while set
    pub game_over: bool,
    /// Freezes the entire simulation, timers included
    pub paused: bool,
    pub current_wave: u32,
    pub wave_phase: WavePhase,
    /// Countdown for the starting/preparing phases (ms)
    pub wave_timer_ms: f32,
    /// Mirrors the live enemy count during fighting
    pub enemies_remaining: u32,
    pub money: u32,
    /// The three offers of the current shop phase
    pub shop_items: Vec<ModifierId>,
    /// Offers bought this shop phase; cleared when a new shop opens
    pub purchased: Vec<ModifierId>,
    /// Accumulated simulation clock (ms); drives fire-channel rate limits
    pub clock_ms: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh run: wave 1, starting countdown, player centered
    pub fn new(seed: u64) -> Self {
        let arena = Arena::default();
        Self {
            seed,
            player: Player::new(arena.center()),
            arena,
            enemies: Vec::new(),
            bullets: Vec::new(),
            score: 0,
            game_over: false,
            paused: false,
            current_wave: 1,
            wave_phase: WavePhase::Starting,
            wave_timer_ms: STARTING_DURATION_MS,
            enemies_remaining: 0,
            money: STARTING_MONEY,
            shop_items: Vec::new(),
            purchased: Vec::new(),
            clock_ms: 0.0,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Replace the whole simulation tree with a fresh run on the same seed
    pub fn restart(&mut self) {
        *self = Self::new(self.seed);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Ensure entity vectors are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.enemies.sort_by_key(|e| e.id);
        self.bullets.sort_by_key(|b| b.id);
    }
}
