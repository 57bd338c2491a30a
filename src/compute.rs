//! Game-logic functions.
//!
//! Every function takes the state it mutates plus whatever context it needs
//! (held keys, playfield bounds, an RNG handle) as explicit parameters.
//! Randomness only ever comes through the injected RNG.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{
    Enemy, EnemyKind, GameState, GameStatus, Player, Projectile, Rect, ENEMY_LIVES,
    MUZZLE_OFFSET_X, MUZZLE_OFFSET_Y,
};
use crate::input::{HeldKeys, Key};

// ── Variant tables ───────────────────────────────────────────────────────────

/// Base sprite dimensions the variant is scaled from.
fn sprite_size(kind: EnemyKind) -> (f64, f64) {
    match kind {
        EnemyKind::Angler1 => (228.0, 169.0),
    }
}

fn sprite_scale(kind: EnemyKind) -> f64 {
    match kind {
        EnemyKind::Angler1 => 0.2,
    }
}

/// Fraction of the playfield height the variant may occupy.
fn vertical_band(kind: EnemyKind) -> f64 {
    match kind {
        EnemyKind::Angler1 => 0.9,
    }
}

/// The variant the spawn timer produces.
fn next_enemy_kind() -> EnemyKind {
    EnemyKind::Angler1
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state.
pub fn init_state(config: &GameConfig) -> GameState {
    GameState::new(config)
}

/// Create an enemy of `kind` at the right edge of the playfield.
pub fn spawn_enemy(
    kind: EnemyKind,
    playfield_width: f64,
    playfield_height: f64,
    rng: &mut impl Rng,
) -> Enemy {
    let (base_w, base_h) = sprite_size(kind);
    let scale = sprite_scale(kind);
    let (width, height) = (base_w * scale, base_h * scale);

    let speed_x = -(rng.gen::<f64>() * 1.5 + 0.5);
    // Playfields shorter than the sprite pin it to the top edge.
    let band = (playfield_height * vertical_band(kind) - height).max(0.0);
    let y = rng.gen::<f64>() * band;

    Enemy {
        kind,
        x: playfield_width,
        y,
        width,
        height,
        speed_x,
        lives: ENEMY_LIVES,
        score: ENEMY_LIVES as u32,
        marked_for_deletion: false,
    }
}

// ── Input-driven actions ─────────────────────────────────────────────────────

/// Fire one projectile from the player's muzzle if any ammo is left.
/// An empty magazine is a silent no-op.
pub fn player_shoot(state: &mut GameState) {
    if state.ammo == 0 {
        return;
    }
    let player = &mut state.player;
    player.projectiles.push(Projectile::new(
        player.x + MUZZLE_OFFSET_X,
        player.y + MUZZLE_OFFSET_Y,
    ));
    state.ammo -= 1;
}

// ── Entity updates ───────────────────────────────────────────────────────────

pub fn update_projectile(projectile: &mut Projectile, playfield_width: f64) {
    projectile.x += projectile.speed;
    if projectile.x > playfield_width * 0.8 {
        projectile.marked_for_deletion = true;
    }
}

/// Steer from the held keys (up wins over down), move, then advance and
/// prune the player's projectiles.
pub fn update_player(player: &mut Player, keys: &HeldKeys, playfield_width: f64) {
    player.speed_y = if keys.contains(Key::ArrowUp) {
        -player.max_speed
    } else if keys.contains(Key::ArrowDown) {
        player.max_speed
    } else {
        0.0
    };
    player.y += player.speed_y;

    for projectile in &mut player.projectiles {
        update_projectile(projectile, playfield_width);
    }
    prune_projectiles(&mut player.projectiles);
}

pub fn update_enemy(enemy: &mut Enemy) {
    enemy.x += enemy.speed_x;
    if enemy.x + enemy.width < 0.0 {
        enemy.marked_for_deletion = true;
    }
}

// ── Collision & compaction ───────────────────────────────────────────────────

/// Axis-aligned overlap test used for player↔enemy and projectile↔enemy.
pub fn check_collision(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

pub fn prune_projectiles(projectiles: &mut Vec<Projectile>) {
    projectiles.retain(|p| !p.marked_for_deletion);
}

pub fn prune_enemies(enemies: &mut Vec<Enemy>) {
    enemies.retain(|e| !e.marked_for_deletion);
}

/// Resolve every collision involving `enemy` for this frame.
/// Returns the points earned if this hit destroyed it.
fn resolve_enemy_collisions(enemy: &mut Enemy, player: &mut Player) -> Option<u32> {
    // Ramming destroys the enemy; the player takes no damage.
    if check_collision(&player.bounds(), &enemy.bounds()) {
        enemy.marked_for_deletion = true;
    }

    let mut destroyed = false;
    for projectile in &mut player.projectiles {
        if !check_collision(&projectile.bounds(), &enemy.bounds()) {
            continue;
        }
        let was_alive = enemy.lives > 0;
        enemy.lives -= 1;
        projectile.marked_for_deletion = true;
        if enemy.lives <= 0 {
            enemy.marked_for_deletion = true;
            if was_alive {
                destroyed = true;
            }
        }
    }

    destroyed.then_some(enemy.score)
}

// ── Per-frame update ─────────────────────────────────────────────────────────

/// Advance the session by `delta` milliseconds.
///
/// Movement and collisions keep running after the session is over; only the
/// clock, scoring and spawning stop.
pub fn update(state: &mut GameState, delta: f64, keys: &HeldKeys, rng: &mut impl Rng) {
    // ── 1. Session clock ─────────────────────────────────────────────────────
    if state.status == GameStatus::Running {
        state.game_time += delta;
        if state.game_time > state.time_limit {
            state.status = GameStatus::Over;
            tracing::info!(
                game_time = state.game_time,
                score = state.score,
                "time limit reached"
            );
        }
    }

    // ── 2. Player ────────────────────────────────────────────────────────────
    update_player(&mut state.player, keys, state.width);

    // ── 3. Ammo regeneration ─────────────────────────────────────────────────
    state.ammo_timer += delta;
    if state.ammo_timer > state.ammo_interval {
        if state.ammo < state.max_ammo {
            state.ammo += 1;
        }
        // Overshoot within the frame is dropped, not carried.
        state.ammo_timer = 0.0;
    }

    // ── 4. Enemies & collisions ──────────────────────────────────────────────
    for enemy in &mut state.enemies {
        update_enemy(enemy);
        let Some(points) = resolve_enemy_collisions(enemy, &mut state.player) else {
            continue;
        };
        tracing::debug!(kind = ?enemy.kind, points, "enemy destroyed");
        if state.status == GameStatus::Running {
            state.score += points;
            if state.score > state.winning_score {
                state.status = GameStatus::Over;
                tracing::info!(score = state.score, "winning score reached");
            }
        }
    }

    // ── 5. Compaction ────────────────────────────────────────────────────────
    prune_enemies(&mut state.enemies);
    prune_projectiles(&mut state.player.projectiles);

    // ── 6. Spawning ──────────────────────────────────────────────────────────
    if state.status == GameStatus::Running {
        state.enemy_timer += delta;
        if state.enemy_timer > state.enemy_interval {
            add_enemy(state, rng);
            state.enemy_timer = 0.0;
        }
    }
}

pub fn add_enemy(state: &mut GameState, rng: &mut impl Rng) {
    let kind = next_enemy_kind();
    let enemy = spawn_enemy(kind, state.width, state.height, rng);
    tracing::debug!(kind = ?enemy.kind, y = enemy.y, speed_x = enemy.speed_x, "enemy spawned");
    state.enemies.push(enemy);
}
