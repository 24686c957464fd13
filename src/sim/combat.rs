//! Firing, bullet flight, collision resolution, and status application
//!
//! Collisions are a brute-force O(bullets x enemies) AABB pass per tick,
//! which is fine at this entity scale (<= 20 enemies, tens of bullets) but
//! is the first thing to revisit if wave sizes ever grow.
//!
//! Removals are two-pass mark-and-sweep: the read pass collects bullet ids
//! and damage, a second pass applies removals. A piercing bullet can
//! therefore hit several enemies in one tick without being consumed
//! mid-iteration, and a non-piercing bullet is removed exactly once no
//! matter how many enemies it overlaps.

use glam::Vec2;

use super::movement;
use super::profile::{self, ResolvedProfile};
use super::state::{Bullet, GameState};
use crate::consts::*;
use crate::{aabb_overlap, angle_to_dir};

/// The two independent fire channels, rate-limited separately
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireChannel {
    /// Free pointer aim
    Aim,
    /// Fixed-direction key shooting
    Directional,
}

/// Fire on a channel if its rate limit allows.
///
/// A zero-length aim vector is a silent no-op. One firing event resolves
/// the held-item profile once and spawns `max(1, multi_shot)` bullets in a
/// symmetric fan around the aim direction; all bullets of the event share
/// the same resolved stats and differ only in heading.
pub fn fire(state: &mut GameState, channel: FireChannel, aim: Vec2) {
    if aim.length_squared() < 1e-6 {
        return;
    }

    let profile = profile::resolve(&state.player.items);
    let rate = state.player.fire_rate * profile.stats.fire_rate;
    let delay = BASE_FIRE_DELAY_MS / f64::from(rate);
    let now = state.clock_ms;
    let last = match channel {
        FireChannel::Aim => state.player.last_aim_shot_ms,
        FireChannel::Directional => state.player.last_directional_shot_ms,
    };
    if now - last < delay {
        return;
    }

    spawn_fan(state, &profile, aim);

    match channel {
        FireChannel::Aim => state.player.last_aim_shot_ms = now,
        FireChannel::Directional => state.player.last_directional_shot_ms = now,
    }
}

fn spawn_fan(state: &mut GameState, profile: &ResolvedProfile, aim: Vec2) {
    let stats = &profile.stats;
    let count = stats.multi_shot.max(1);
    let base_angle = aim.y.atan2(aim.x);
    let speed = BULLET_SPEED_FACTOR * state.player.speed * stats.speed;
    let damage = state.player.damage * stats.damage;
    let size = BULLET_BASE_SIZE * stats.size * profile.visual.size;
    let range = PLAYER_BASE_RANGE * stats.range;
    let origin = state.player.pos;

    for i in 0..count {
        let offset = (i as f32 - (count as f32 - 1.0) / 2.0) * stats.spread;
        let id = state.next_entity_id();
        state.bullets.push(Bullet {
            id,
            pos: origin,
            vel: angle_to_dir(base_angle + offset) * speed,
            damage,
            size,
            range,
            distance_traveled: 0.0,
            piercing: stats.piercing,
            homing: stats.homing,
            bouncing: stats.bouncing,
            explosive: stats.explosive,
            poison: stats.poison,
            freeze: stats.freeze,
            splitting: stats.splitting,
            knockback: stats.knockback,
            life_steal: stats.life_steal,
            visual: profile.visual,
        });
    }
}

/// Advance, steer, bounce, and cull all live bullets
pub fn update_bullets(state: &mut GameState, dt: f32) {
    let GameState {
        bullets,
        enemies,
        arena,
        ..
    } = state;

    bullets.retain_mut(|bullet| {
        bullet.pos += bullet.vel * dt;
        bullet.distance_traveled += bullet.vel.length() * dt;

        // Homing: nudge velocity toward the nearest live enemy. The
        // impulse is never renormalized, so homing bullets pick up net
        // speed over time.
        if bullet.homing {
            let mut nearest: Option<(f32, Vec2)> = None;
            for enemy in enemies.iter() {
                let d2 = enemy.pos.distance_squared(bullet.pos);
                if nearest.is_none_or(|(best, _)| d2 < best) {
                    nearest = Some((d2, enemy.pos));
                }
            }
            if let Some((_, target)) = nearest {
                bullet.vel += (target - bullet.pos).normalize_or_zero() * HOMING_STEER;
            }
        }

        // Bouncing: per-axis inversion; a corner contact inverts both
        if bullet.bouncing {
            if bullet.pos.x <= arena.wall || bullet.pos.x >= arena.width - arena.wall {
                bullet.vel.x = -bullet.vel.x;
            }
            if bullet.pos.y <= arena.wall || bullet.pos.y >= arena.height - arena.wall {
                bullet.vel.y = -bullet.vel.y;
            }
        }

        bullet.distance_traveled < bullet.range
            && !arena.outside_margin(bullet.pos, BULLET_CULL_MARGIN)
    });
}

/// Knockback, chase AI, poison drain, and bound clamping for all enemies.
/// Frozen enemies skip the entire update (statues until thawed - which
/// current behavior never does).
pub fn update_enemies(state: &mut GameState, dt: f32) {
    let GameState {
        enemies,
        player,
        arena,
        ..
    } = state;

    for enemy in enemies.iter_mut() {
        if enemy.frozen {
            continue;
        }

        movement::apply_knockback(&mut enemy.knockback, &mut enemy.pos, dt);

        let dir = (player.pos - enemy.pos).normalize_or_zero();
        enemy.vel = dir * enemy.speed;
        enemy.pos += enemy.vel * dt;

        if enemy.poisoned {
            enemy.health -= POISON_DRAIN * dt;
        }

        enemy.pos = arena.clamp(enemy.pos, enemy.size);
    }
}

/// The per-tick collision pass: bullet x enemy hits, then enemy x player
/// contact damage.
pub fn resolve_collisions(state: &mut GameState, dt: f32) {
    let mut removed: Vec<u32> = Vec::new();
    let mut children: Vec<Bullet> = Vec::new();

    for bi in 0..state.bullets.len() {
        let bullet = state.bullets[bi].clone();
        for ei in 0..state.enemies.len() {
            let (enemy_pos, enemy_size) = {
                let enemy = &state.enemies[ei];
                (enemy.pos, enemy.size)
            };
            if !aabb_overlap(bullet.pos, bullet.size, enemy_pos, enemy_size) {
                continue;
            }

            if bullet.explosive {
                explode(state, &bullet);
            } else {
                strike(state, ei, &bullet);
            }

            if bullet.splitting {
                split(state, &bullet, &mut children);
            }

            if !bullet.piercing && !removed.contains(&bullet.id) {
                removed.push(bullet.id);
            }
        }
    }

    state.bullets.extend(children);
    if !removed.is_empty() {
        state.bullets.retain(|b| !removed.contains(&b.id));
    }

    // Contact damage: continuous drain while overlapping, so staying in
    // contact compounds. Each overlapping enemy contributes.
    let GameState {
        enemies,
        player,
        game_over,
        ..
    } = state;
    for enemy in enemies.iter() {
        if aabb_overlap(player.pos, player.size, enemy.pos, enemy.size)
            && player.hurt(enemy.damage * CONTACT_DAMAGE_RATE * dt)
        {
            *game_over = true;
        }
    }
}

/// Direct hit on a single enemy
fn strike(state: &mut GameState, ei: usize, bullet: &Bullet) {
    {
        let enemy = &mut state.enemies[ei];
        enemy.health -= bullet.damage;
        if bullet.poison {
            enemy.poisoned = true;
        }
        if bullet.freeze {
            enemy.frozen = true;
        }
        if bullet.knockback > 0.0 {
            let dir = (enemy.pos - bullet.pos).normalize_or_zero();
            if dir != Vec2::ZERO {
                // Overwrites any impulse still decaying - no stacking
                enemy.knockback = dir * bullet.knockback * KNOCKBACK_IMPULSE;
            }
        }
    }
    if bullet.life_steal > 0.0 {
        state.player.heal(bullet.life_steal);
    }
}

/// Area damage around the impact point. Damage falls off linearly with
/// distance down to `EXPLOSION_EDGE_FALLOFF` at the radius edge; statuses
/// apply to everything inside, knockback distance-scaled the same way.
fn explode(state: &mut GameState, bullet: &Bullet) {
    let mut victims = 0u32;
    for enemy in state.enemies.iter_mut() {
        let dist = enemy.pos.distance(bullet.pos);
        if dist > EXPLOSION_RADIUS {
            continue;
        }
        let falloff = 1.0 - (dist / EXPLOSION_RADIUS) * (1.0 - EXPLOSION_EDGE_FALLOFF);
        enemy.health -= bullet.damage * falloff;
        if bullet.poison {
            enemy.poisoned = true;
        }
        if bullet.freeze {
            enemy.frozen = true;
        }
        if bullet.knockback > 0.0 {
            let dir = (enemy.pos - bullet.pos).normalize_or_zero();
            if dir != Vec2::ZERO {
                enemy.knockback = dir * bullet.knockback * KNOCKBACK_IMPULSE * falloff;
            }
        }
        victims += 1;
    }
    // Life steal triggers once per enemy caught in the blast
    if bullet.life_steal > 0.0 && victims > 0 {
        state.player.heal(bullet.life_steal * victims as f32);
    }
}

/// Spawn the radial child fan of a splitting bullet. Children never
/// re-split, which bounds the recursion at one generation.
fn split(state: &mut GameState, parent: &Bullet, children: &mut Vec<Bullet>) {
    for i in 0..SPLIT_COUNT {
        let angle = std::f32::consts::TAU / SPLIT_COUNT as f32 * i as f32;
        let id = state.next_entity_id();
        children.push(Bullet {
            id,
            vel: angle_to_dir(angle) * SPLIT_SPEED,
            damage: parent.damage * SPLIT_DAMAGE_SCALE,
            size: parent.size * SPLIT_SIZE_SCALE,
            distance_traveled: 0.0,
            splitting: false,
            ..parent.clone()
        });
    }
}

/// Remove dead enemies and pay out kill rewards
pub fn sweep_dead(state: &mut GameState) {
    let before = state.enemies.len();
    state.enemies.retain(|e| e.health > 0.0);
    let killed = (before - state.enemies.len()) as u32;
    if killed == 0 {
        return;
    }
    let bounty = 1 + state.current_wave / 4;
    state.score += KILL_SCORE * u64::from(killed);
    state.money += bounty * killed;
    log::debug!(
        "swept {killed} dead enemies (+{} score, +{} money)",
        KILL_SCORE * u64::from(killed),
        bounty * killed
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ModifierId;
    use crate::consts::SIM_DT;
    use crate::sim::state::{Enemy, EnemyKind};

    fn arena_center_state() -> GameState {
        GameState::new(12345)
    }

    fn add_enemy(state: &mut GameState, pos: Vec2) -> u32 {
        let id = state.next_entity_id();
        let mut enemy = Enemy::spawn(id, EnemyKind::Basic, 1, pos);
        enemy.health = 10.0;
        enemy.max_health = 10.0;
        state.enemies.push(enemy);
        id
    }

    fn add_bullet(state: &mut GameState, pos: Vec2, vel: Vec2) -> u32 {
        let id = state.next_entity_id();
        state.bullets.push(Bullet {
            id,
            pos,
            vel,
            damage: 1.0,
            size: 6.0,
            range: 300.0,
            distance_traveled: 0.0,
            piercing: false,
            homing: false,
            bouncing: false,
            explosive: false,
            poison: false,
            freeze: false,
            splitting: false,
            knockback: 0.0,
            life_steal: 0.0,
            visual: Default::default(),
        });
        id
    }

    #[test]
    fn test_fire_is_rate_limited_per_channel() {
        let mut state = arena_center_state();
        fire(&mut state, FireChannel::Aim, Vec2::X);
        fire(&mut state, FireChannel::Aim, Vec2::X);
        assert_eq!(state.bullets.len(), 1, "second shot inside the delay");

        // The directional channel is independent of the aim channel
        fire(&mut state, FireChannel::Directional, Vec2::Y);
        assert_eq!(state.bullets.len(), 2);

        // After the base delay the aim channel opens again
        state.clock_ms += 200.0;
        fire(&mut state, FireChannel::Aim, Vec2::X);
        assert_eq!(state.bullets.len(), 3);
    }

    #[test]
    fn test_fire_rate_items_shorten_the_delay() {
        let mut state = arena_center_state();
        state.player.items.push(ModifierId::RapidFire);
        fire(&mut state, FireChannel::Aim, Vec2::X);
        state.clock_ms += 80.1; // 200 / 2.5 = 80 ms delay
        fire(&mut state, FireChannel::Aim, Vec2::X);
        assert_eq!(state.bullets.len(), 2);
    }

    #[test]
    fn test_zero_length_aim_is_a_noop() {
        let mut state = arena_center_state();
        fire(&mut state, FireChannel::Aim, Vec2::ZERO);
        assert!(state.bullets.is_empty());
        // And it must not consume the rate-limit window
        fire(&mut state, FireChannel::Aim, Vec2::X);
        assert_eq!(state.bullets.len(), 1);
    }

    #[test]
    fn test_multi_shot_spawns_symmetric_fan() {
        let mut state = arena_center_state();
        state.player.items.push(ModifierId::MultiShot);
        fire(&mut state, FireChannel::Aim, Vec2::X);
        assert_eq!(state.bullets.len(), 3);

        // Center bullet flies straight along the aim; the outer pair is
        // mirrored around it
        let angles: Vec<f32> = state
            .bullets
            .iter()
            .map(|b| b.vel.y.atan2(b.vel.x))
            .collect();
        assert!((angles[1]).abs() < 1e-4);
        assert!((angles[0] + angles[2]).abs() < 1e-4);
        assert!((angles[2] - 0.3).abs() < 1e-4);

        // All bullets of one event share the same stats
        assert!(state.bullets.iter().all(|b| b.damage == state.bullets[0].damage));
    }

    #[test]
    fn test_bullet_inherits_resolved_profile() {
        let mut state = arena_center_state();
        state.player.items.push(ModifierId::GiantTears);
        state.player.items.push(ModifierId::DamageUp);
        fire(&mut state, FireChannel::Aim, Vec2::X);
        let bullet = &state.bullets[0];
        // damage: 1 * 3 * 2; size: 6 * 2 (stat) * 2 (visual); speed scaled 0.7
        assert!((bullet.damage - 6.0).abs() < 1e-4);
        assert!((bullet.size - 24.0).abs() < 1e-4);
        assert!((bullet.vel.length() - 1440.0 * 0.7).abs() < 0.1);
        assert_eq!(bullet.visual.color, 0xff4444);
    }

    #[test]
    fn test_range_expiry_tick_count() {
        let mut state = arena_center_state();
        // 240 px/sec = 4 px per tick; range 300 -> 75 ticks
        let center = state.arena.center();
        add_bullet(&mut state, center, Vec2::new(240.0, 0.0));
        state.bullets[0].range = 300.0;
        let mut ticks = 0;
        while !state.bullets.is_empty() && ticks < 200 {
            update_bullets(&mut state, SIM_DT);
            ticks += 1;
        }
        assert!((74..=76).contains(&ticks), "expired after {ticks} ticks");
    }

    #[test]
    fn test_bullet_culled_outside_margin() {
        let mut state = arena_center_state();
        add_bullet(&mut state, Vec2::new(-49.0, 300.0), Vec2::new(-600.0, 0.0));
        state.bullets[0].range = 1.0e9;
        update_bullets(&mut state, SIM_DT);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_homing_steers_toward_nearest_enemy() {
        let mut state = arena_center_state();
        add_enemy(&mut state, Vec2::new(400.0, 500.0));
        add_enemy(&mut state, Vec2::new(4000.0, 300.0)); // farther, ignored
        let id = add_bullet(&mut state, Vec2::new(400.0, 300.0), Vec2::new(100.0, 0.0));
        state.bullets.last_mut().expect("just pushed").homing = true;
        update_bullets(&mut state, SIM_DT);
        let bullet = state.bullets.iter().find(|b| b.id == id).expect("bullet alive");
        assert!(bullet.vel.y > 0.0, "steered toward the enemy below");
        assert!((bullet.vel.y - HOMING_STEER).abs() < 0.5);
    }

    #[test]
    fn test_homing_is_inert_without_it() {
        let mut state = arena_center_state();
        add_enemy(&mut state, Vec2::new(400.0, 500.0));
        let id = add_bullet(&mut state, Vec2::new(400.0, 300.0), Vec2::new(100.0, 0.0));
        update_bullets(&mut state, SIM_DT);
        let bullet = state.bullets.iter().find(|b| b.id == id).expect("bullet alive");
        assert_eq!(bullet.vel.y, 0.0);
    }

    #[test]
    fn test_bouncing_inverts_wall_axis() {
        let mut state = arena_center_state();
        let id = add_bullet(&mut state, Vec2::new(25.0, 300.0), Vec2::new(-600.0, 50.0));
        {
            let bullet = state.bullets.last_mut().expect("just pushed");
            bullet.homing = false;
            bullet.bouncing = true;
        }
        update_bullets(&mut state, SIM_DT);
        let bullet = state.bullets.iter().find(|b| b.id == id).expect("bullet alive");
        assert!(bullet.vel.x > 0.0, "x inverted at the left wall");
        assert!(bullet.vel.y > 0.0, "y untouched");
    }

    #[test]
    fn test_piercing_hits_all_overlaps_and_survives() {
        let mut state = arena_center_state();
        let pos = Vec2::new(300.0, 300.0);
        add_enemy(&mut state, pos);
        add_enemy(&mut state, pos + Vec2::new(4.0, 0.0));
        add_enemy(&mut state, pos - Vec2::new(4.0, 0.0));
        add_bullet(&mut state, pos, Vec2::ZERO);
        state.bullets[0].piercing = true;

        resolve_collisions(&mut state, SIM_DT);

        assert_eq!(state.bullets.len(), 1, "piercing bullet survives");
        for enemy in &state.enemies {
            assert!((enemy.health - 9.0).abs() < 1e-4, "all three took damage");
        }
    }

    #[test]
    fn test_non_piercing_removed_exactly_once() {
        let mut state = arena_center_state();
        let pos = Vec2::new(300.0, 300.0);
        add_enemy(&mut state, pos);
        add_enemy(&mut state, pos + Vec2::new(4.0, 0.0));
        add_bullet(&mut state, pos, Vec2::ZERO);

        resolve_collisions(&mut state, SIM_DT);

        // Removed once; every overlap of this tick was still processed
        assert!(state.bullets.is_empty());
        for enemy in &state.enemies {
            assert!((enemy.health - 9.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_explosive_falloff_profile() {
        let mut state = arena_center_state();
        let center = Vec2::new(300.0, 300.0);
        let direct = add_enemy(&mut state, center);
        let edge = add_enemy(&mut state, center + Vec2::new(EXPLOSION_RADIUS, 0.0));
        let outside = add_enemy(&mut state, center + Vec2::new(EXPLOSION_RADIUS + 40.0, 0.0));
        add_bullet(&mut state, center, Vec2::ZERO);
        state.bullets[0].explosive = true;
        state.bullets[0].damage = 10.0;

        resolve_collisions(&mut state, SIM_DT);

        let health = |id: u32| {
            state
                .enemies
                .iter()
                .find(|e| e.id == id)
                .expect("enemy")
                .health
        };
        assert!((health(direct) - 0.0).abs() < 1e-3, "full damage at distance 0");
        assert!((health(edge) - 7.0).abs() < 1e-3, "0.3x damage at the radius edge");
        assert!((health(outside) - 10.0).abs() < 1e-3, "untouched beyond the radius");
    }

    #[test]
    fn test_explosion_applies_statuses_in_radius() {
        let mut state = arena_center_state();
        let center = Vec2::new(300.0, 300.0);
        add_enemy(&mut state, center);
        let near = add_enemy(&mut state, center + Vec2::new(40.0, 0.0));
        add_bullet(&mut state, center, Vec2::ZERO);
        {
            let bullet = &mut state.bullets[0];
            bullet.explosive = true;
            bullet.poison = true;
            bullet.freeze = true;
            bullet.knockback = 5.0;
        }

        resolve_collisions(&mut state, SIM_DT);

        let enemy = state.enemies.iter().find(|e| e.id == near).expect("enemy");
        assert!(enemy.poisoned && enemy.frozen);
        // Knockback points away from the blast, scaled by the falloff
        assert!(enemy.knockback.x > 0.0);
        let falloff = 1.0 - (40.0 / EXPLOSION_RADIUS) * 0.7;
        assert!((enemy.knockback.x - 5.0 * KNOCKBACK_IMPULSE * falloff).abs() < 0.5);
    }

    #[test]
    fn test_knockback_overwrites_previous_impulse() {
        let mut state = arena_center_state();
        let id = add_enemy(&mut state, Vec2::new(300.0, 300.0));
        state.enemies[0].knockback = Vec2::new(-999.0, -999.0);
        add_bullet(&mut state, Vec2::new(296.0, 300.0), Vec2::ZERO);
        state.bullets[0].knockback = 5.0;

        resolve_collisions(&mut state, SIM_DT);

        let enemy = state.enemies.iter().find(|e| e.id == id).expect("enemy");
        assert!((enemy.knockback.x - 5.0 * KNOCKBACK_IMPULSE).abs() < 1e-3);
        assert_eq!(enemy.knockback.y, 0.0);
    }

    #[test]
    fn test_life_steal_heals_once_per_enemy_hit() {
        let mut state = arena_center_state();
        state.player.health = 3.0;
        let pos = Vec2::new(300.0, 300.0);
        add_enemy(&mut state, pos);
        add_enemy(&mut state, pos + Vec2::new(4.0, 0.0));
        add_bullet(&mut state, pos, Vec2::ZERO);
        {
            let bullet = &mut state.bullets[0];
            bullet.piercing = true;
            bullet.life_steal = 0.1;
        }

        resolve_collisions(&mut state, SIM_DT);
        assert!((state.player.health - 3.2).abs() < 1e-4);
    }

    #[test]
    fn test_life_steal_clamps_to_max_health() {
        let mut state = arena_center_state();
        state.player.health = state.player.max_health - 0.05;
        add_enemy(&mut state, Vec2::new(300.0, 300.0));
        add_bullet(&mut state, Vec2::new(300.0, 300.0), Vec2::ZERO);
        state.bullets[0].life_steal = 0.1;

        resolve_collisions(&mut state, SIM_DT);
        assert_eq!(state.player.health, state.player.max_health);
    }

    #[test]
    fn test_splitting_spawns_radial_children() {
        let mut state = arena_center_state();
        add_enemy(&mut state, Vec2::new(300.0, 300.0));
        add_bullet(&mut state, Vec2::new(300.0, 300.0), Vec2::new(240.0, 0.0));
        {
            let bullet = &mut state.bullets[0];
            bullet.splitting = true;
            bullet.damage = 2.0;
        }

        resolve_collisions(&mut state, SIM_DT);

        // Parent consumed (not piercing), three children remain
        assert_eq!(state.bullets.len(), 3);
        for child in &state.bullets {
            assert!(!child.splitting, "children never re-split");
            assert!((child.damage - 1.0).abs() < 1e-4);
            assert!((child.vel.length() - SPLIT_SPEED).abs() < 1e-2);
            assert_eq!(child.distance_traveled, 0.0);
        }
        // Evenly divided radial pattern
        let mut angles: Vec<f32> = state
            .bullets
            .iter()
            .map(|b| b.vel.y.atan2(b.vel.x).rem_euclid(std::f32::consts::TAU))
            .collect();
        angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!((angles[1] - angles[0] - std::f32::consts::TAU / 3.0).abs() < 1e-3);
        assert!((angles[2] - angles[1] - std::f32::consts::TAU / 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_contact_damage_compounds_and_kills() {
        let mut state = arena_center_state();
        let player_pos = state.player.pos;
        add_enemy(&mut state, player_pos);
        resolve_collisions(&mut state, SIM_DT);
        let drained = state.player.max_health - state.player.health;
        assert!((drained - CONTACT_DAMAGE_RATE * SIM_DT).abs() < 1e-4);
        assert!(!state.game_over);

        // Staying in contact long enough is lethal
        resolve_collisions(&mut state, 10.0);
        assert_eq!(state.player.health, 0.0);
        assert!(state.game_over);
    }

    #[test]
    fn test_sweep_pays_score_and_bounty() {
        let mut state = arena_center_state();
        state.current_wave = 8;
        add_enemy(&mut state, Vec2::new(100.0, 100.0));
        add_enemy(&mut state, Vec2::new(200.0, 100.0));
        add_enemy(&mut state, Vec2::new(300.0, 100.0));
        state.enemies[0].health = 0.0;
        state.enemies[1].health = -2.5;

        let money = state.money;
        sweep_dead(&mut state);

        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.score, 20);
        // Bounty at wave 8 is 1 + 8/4 = 3 per kill
        assert_eq!(state.money, money + 6);
    }

    #[test]
    fn test_frozen_enemy_is_fully_suspended() {
        let mut state = arena_center_state();
        add_enemy(&mut state, Vec2::new(100.0, 100.0));
        {
            let enemy = &mut state.enemies[0];
            enemy.frozen = true;
            enemy.poisoned = true;
            enemy.knockback = Vec2::new(300.0, 0.0);
        }
        update_enemies(&mut state, SIM_DT);
        let enemy = &state.enemies[0];
        assert_eq!(enemy.pos, Vec2::new(100.0, 100.0));
        assert_eq!(enemy.health, 10.0, "no poison drain while frozen");
        assert_eq!(enemy.knockback, Vec2::new(300.0, 0.0));
    }

    #[test]
    fn test_poison_drains_over_time() {
        let mut state = arena_center_state();
        add_enemy(&mut state, Vec2::new(100.0, 100.0));
        state.enemies[0].poisoned = true;
        update_enemies(&mut state, 1.0);
        assert!((state.enemies[0].health - (10.0 - POISON_DRAIN)).abs() < 1e-3);
    }

    #[test]
    fn test_enemies_chase_the_player() {
        let mut state = arena_center_state();
        add_enemy(&mut state, Vec2::new(100.0, 300.0));
        let before = state.player.pos.distance(state.enemies[0].pos);
        update_enemies(&mut state, SIM_DT);
        let after = state.player.pos.distance(state.enemies[0].pos);
        assert!(after < before);
    }
}
