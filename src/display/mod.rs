//! Rendering layer.
//!
//! Each function receives a `Surface` and an immutable view of the game
//! state.  No game logic is performed; this module only translates state
//! into drawing calls.

pub mod hud;
pub mod terminal;

use std::io;

use crossterm::style::Color;

use crate::entities::{Enemy, EnemyKind, GameState, Player, Projectile};
use crate::surface::{Font, Surface};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Color = Color::White;
const C_PROJECTILE: Color = Color::Yellow;
const C_ENEMY_ANGLER: Color = Color::Red;
const C_ENEMY_LIVES: Color = Color::Black;

const LIVES_FONT: Font = Font::new(20.0, "Helvetica");

// ── Public entry point ────────────────────────────────────────────────────────

/// Draw one complete frame: player, then HUD, then enemies on top.
pub fn draw_game<S: Surface>(surface: &mut S, state: &GameState) -> io::Result<()> {
    draw_player(surface, &state.player)?;
    hud::draw(surface, state)?;
    for enemy in &state.enemies {
        draw_enemy(surface, enemy)?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<S: Surface>(surface: &mut S, player: &Player) -> io::Result<()> {
    surface.fill_rect(player.bounds(), C_PLAYER)?;
    for projectile in &player.projectiles {
        draw_projectile(surface, projectile)?;
    }
    Ok(())
}

fn draw_projectile<S: Surface>(surface: &mut S, projectile: &Projectile) -> io::Result<()> {
    surface.fill_rect(projectile.bounds(), C_PROJECTILE)
}

fn enemy_color(kind: EnemyKind) -> Color {
    match kind {
        EnemyKind::Angler1 => C_ENEMY_ANGLER,
    }
}

/// Body plus remaining lives, written at the enemy's top-left corner.
fn draw_enemy<S: Surface>(surface: &mut S, enemy: &Enemy) -> io::Result<()> {
    surface.fill_rect(enemy.bounds(), enemy_color(enemy.kind))?;
    surface.fill_text(
        &enemy.lives.to_string(),
        enemy.x,
        enemy.y,
        &LIVES_FONT,
        C_ENEMY_LIVES,
    )
}
