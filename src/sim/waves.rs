//! Wave director
//!
//! The phase state machine (starting -> preparing -> fighting -> shopping
//! -> preparing -> ...), enemy-batch generation, shop rotation, and the
//! economy payouts. Wave layouts and shop offers are deterministic per
//! (run seed, wave index): each draws a `Pcg32` stream from a golden-ratio
//! hash of the two, so re-running a seed reproduces the whole run.

use glam::Vec2;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use thiserror::Error;

use super::state::{Enemy, EnemyKind, GameState, WavePhase};
use crate::catalog::ModifierId;
use crate::consts::*;

/// Why a shop purchase was rejected. State is unchanged on rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("item is not offered in the current shop")]
    NotOffered,
    #[error("not enough money")]
    InsufficientFunds,
    #[error("offer already purchased this shop")]
    AlreadyPurchased,
}

/// Enemy batch size for a wave
#[inline]
pub fn enemy_count_for_wave(wave: u32) -> u32 {
    (wave * 3 + 5).min(MAX_WAVE_ENEMIES)
}

/// Advance the phase machine by one tick. Countdown phases burn `dt`;
/// fighting watches the live enemy count; shopping waits for
/// [`close_shop`].
pub fn update(state: &mut GameState, dt: f32) {
    match state.wave_phase {
        WavePhase::Starting => {
            state.wave_timer_ms -= dt * 1000.0;
            if state.wave_timer_ms <= 0.0 {
                state.wave_phase = WavePhase::Preparing;
                state.wave_timer_ms = PREPARING_DURATION_MS;
                log::info!("starting countdown over, preparing wave 1");
            }
        }
        WavePhase::Preparing => {
            state.wave_timer_ms -= dt * 1000.0;
            if state.wave_timer_ms <= 0.0 {
                generate_wave(state);
                state.wave_phase = WavePhase::Fighting;
            }
        }
        WavePhase::Fighting => {
            state.enemies_remaining = state.enemies.len() as u32;
            if state.enemies_remaining == 0 {
                open_shop(state);
            }
        }
        WavePhase::Shopping => {}
    }
}

/// Spawn the enemy batch for the current wave
pub fn generate_wave(state: &mut GameState) {
    let wave = state.current_wave;
    let mut rng = Pcg32::seed_from_u64(wave_seed(state.seed, wave));
    let count = enemy_count_for_wave(wave);
    log::info!("wave {wave}: spawning {count} enemies");

    for _ in 0..count {
        let kind = match rng.random_range(0..3u32) {
            0 => EnemyKind::Basic,
            1 => EnemyKind::Fast,
            _ => EnemyKind::Tank,
        };
        // Uniform over the interior; spawn overlap is permitted
        let half = kind.size() * 0.5;
        let pos = Vec2::new(
            rng.random_range(state.arena.wall + half..state.arena.width - state.arena.wall - half),
            rng.random_range(state.arena.wall + half..state.arena.height - state.arena.wall - half),
        );
        let id = state.next_entity_id();
        state.enemies.push(Enemy::spawn(id, kind, wave, pos));
    }
    state.enemies_remaining = count;
}

/// Wave cleared: pay out, roll offers, open the shop
fn open_shop(state: &mut GameState) {
    let wave = state.current_wave;
    let reward = 5 + wave * 5 / 4; // 5 + floor(wave * 1.25)
    state.money += reward;
    state.score += WAVE_CLEAR_SCORE * u64::from(wave);
    state.shop_items = roll_offers(state.seed, wave);
    state.purchased.clear();
    state.wave_phase = WavePhase::Shopping;
    log::info!(
        "wave {wave} cleared: +{reward} money, shop offers {:?}",
        state.shop_items
    );
}

/// Three distinct offers drawn from the catalog, deterministic per
/// (seed, wave)
fn roll_offers(seed: u64, wave: u32) -> Vec<ModifierId> {
    let mut rng = Pcg32::seed_from_u64(wave_seed(seed, wave).wrapping_mul(7919));
    let mut pool = ModifierId::ALL.to_vec();
    pool.shuffle(&mut rng);
    pool.truncate(SHOP_OFFER_COUNT);
    pool
}

fn wave_seed(seed: u64, wave: u32) -> u64 {
    u64::from(wave).wrapping_mul(2654435761).wrapping_add(seed)
}

/// Buy one of the current shop's offers.
///
/// Succeeds only while the offer is on display, affordable, and not yet
/// bought this shop phase. The same modifier id becomes purchasable again
/// in a later shop.
pub fn purchase(state: &mut GameState, id: ModifierId) -> Result<(), PurchaseError> {
    if state.wave_phase != WavePhase::Shopping || !state.shop_items.contains(&id) {
        return Err(PurchaseError::NotOffered);
    }
    if state.purchased.contains(&id) {
        return Err(PurchaseError::AlreadyPurchased);
    }
    let price = id.def().price;
    if state.money < price {
        return Err(PurchaseError::InsufficientFunds);
    }

    state.money -= price;
    state.player.items.push(id);
    state.purchased.push(id);
    log::debug!("purchased {:?} for {price}", id);
    Ok(())
}

/// Leave the shop: advance to the next wave's prepare countdown.
/// Ignored outside the shopping phase.
pub fn close_shop(state: &mut GameState) {
    if state.wave_phase != WavePhase::Shopping {
        return;
    }
    state.current_wave += 1;
    state.wave_timer_ms = PREPARING_DURATION_MS;
    state.wave_phase = WavePhase::Preparing;
    log::info!("shop closed, preparing wave {}", state.current_wave);
}
