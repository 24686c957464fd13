//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit timestep only (the caller passes elapsed time per tick)
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod combat;
pub mod movement;
pub mod profile;
pub mod state;
pub mod tick;
pub mod waves;

pub use combat::{FireChannel, fire};
pub use profile::{ProfileStats, ProfileVisual, ResolvedProfile, resolve};
pub use state::{Arena, Bullet, Enemy, EnemyKind, GameState, Player, WavePhase};
pub use tick::{InputState, tick};
pub use waves::{PurchaseError, close_shop, enemy_count_for_wave, generate_wave, purchase};
