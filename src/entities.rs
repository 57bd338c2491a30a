//! All game entity types: plain data plus bounding-box accessors.
//!
//! Behaviour lives in `compute`; drawing lives in `display`.

use crate::config::GameConfig;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in playfield coordinates (origin top-left).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Strict AABB overlap: touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

// ── Enumerations ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Angler1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// Terminal; reached either by running out of time or by passing the
    /// winning score.
    Over,
}

/// Which way an `Over` session went; derived from the score, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

pub const PROJECTILE_WIDTH: f64 = 10.0;
pub const PROJECTILE_HEIGHT: f64 = 3.0;
pub const PROJECTILE_SPEED: f64 = 3.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub speed: f64,
    pub marked_for_deletion: bool,
}

impl Projectile {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            width: PROJECTILE_WIDTH,
            height: PROJECTILE_HEIGHT,
            speed: PROJECTILE_SPEED,
            marked_for_deletion: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Player & enemy ────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f64 = 120.0;
pub const PLAYER_HEIGHT: f64 = 190.0;
pub const PLAYER_START_X: f64 = 20.0;
pub const PLAYER_START_Y: f64 = 100.0;
pub const PLAYER_MAX_SPEED: f64 = 3.0;

/// Muzzle position relative to the player's origin.
pub const MUZZLE_OFFSET_X: f64 = 80.0;
pub const MUZZLE_OFFSET_Y: f64 = 30.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity applied on the last update (negative = up).
    pub speed_y: f64,
    pub max_speed: f64,
    pub projectiles: Vec<Projectile>,
}

impl Player {
    pub fn new() -> Self {
        Self {
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed_y: 0.0,
            max_speed: PLAYER_MAX_SPEED,
            projectiles: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

pub const ENEMY_LIVES: i32 = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal velocity per update; always negative (leftward).
    pub speed_x: f64,
    /// May go below zero when several projectiles land in the same frame.
    pub lives: i32,
    /// Points credited on destruction, fixed at spawn.
    pub score: u32,
    pub marked_for_deletion: bool,
}

impl Enemy {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session state.  Exactly one `Player`; enemies and timers are
/// mutated in place by `compute::update`.
#[derive(Clone, Debug)]
pub struct GameState {
    pub width: f64,
    pub height: f64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub enemy_timer: f64,
    pub enemy_interval: f64,
    pub ammo: u32,
    pub max_ammo: u32,
    pub ammo_timer: f64,
    pub ammo_interval: f64,
    pub status: GameStatus,
    pub score: u32,
    pub winning_score: u32,
    /// Milliseconds of play accumulated while `Running`.
    pub game_time: f64,
    pub time_limit: f64,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            player: Player::new(),
            enemies: Vec::new(),
            enemy_timer: 0.0,
            enemy_interval: config.enemy_interval,
            ammo: config.starting_ammo,
            max_ammo: config.max_ammo,
            ammo_timer: 0.0,
            ammo_interval: config.ammo_interval,
            status: GameStatus::Running,
            score: 0,
            winning_score: config.winning_score,
            game_time: 0.0,
            time_limit: config.time_limit,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// Win iff the score passed the winning score; meaningful once `Over`.
    pub fn outcome(&self) -> Outcome {
        if self.score > self.winning_score {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }
}
