//! Stellar Fury - a vertical arcade space shooter
//!
//! Core modules:
//! - `sim`: Simulation core (entities, spawning, collisions, scoring)
//! - `renderer`: Render sink seam and vertex tessellation
//! - `platform`: Input sources
//! - `persistence`: Single-integer high score storage
//! - `settings`: Serializable configuration

pub mod error;
pub mod highscores;
pub mod palette;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, PersistenceError};
pub use highscores::HighScore;
pub use settings::{QualityPreset, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal simulation rate used by the headless runner
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Largest step the simulation accepts (stall protection)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Default play area (logical pixels)
    pub const DEFAULT_PLAY_WIDTH: f32 = 800.0;
    pub const DEFAULT_PLAY_HEIGHT: f32 = 600.0;
    /// Smallest play area the spawner and boss bounce logic can work in
    pub const MIN_PLAY_WIDTH: f32 = 200.0;
    pub const MIN_PLAY_HEIGHT: f32 = 200.0;

    /// Player ship
    pub const PLAYER_HALF_EXTENTS: (f32, f32) = (20.0, 25.0);
    pub const PLAYER_SPEED: f32 = 300.0;
    pub const PLAYER_MAX_HEALTH: u32 = 5;
    /// Distance from the bottom edge where a new ship appears
    pub const PLAYER_SPAWN_OFFSET: f32 = 80.0;
    /// Clamp margins: wings reach 25px sideways, the nose 30px up
    pub const PLAYER_WING_MARGIN: f32 = 25.0;
    pub const PLAYER_NOSE_MARGIN: f32 = 30.0;
    pub const PLAYER_TAIL_MARGIN: f32 = 25.0;
    pub const MAX_WEAPON_LEVEL: u8 = 2;

    /// Player weapons
    pub const FIRE_COOLDOWN: f32 = 0.15;
    pub const CHARGE_CAP: f32 = 1.0;
    pub const PLAYER_SHOT_SPEED: f32 = 500.0;
    pub const SIDE_SHOT_SPEED_X: f32 = 150.0;
    pub const SIDE_SHOT_SPEED_Y: f32 = 480.0;
    pub const CHARGED_SHOT_SPEED: f32 = 800.0;
    pub const CHARGED_VOLLEY_SIZE: usize = 5;
    pub const CHARGED_VOLLEY_SPACING: f32 = 4.0;

    /// Projectiles
    pub const PROJECTILE_HALF_EXTENTS: (f32, f32) = (3.0, 6.0);
    pub const PROJECTILE_LIFETIME: f32 = 3.0;
    pub const PROJECTILE_MARGIN: f32 = 20.0;

    /// Power-ups
    pub const POWERUP_HALF_EXTENTS: (f32, f32) = (10.0, 10.0);
    pub const POWERUP_FALL_SPEED: f32 = 50.0;
    pub const HEAL_AMOUNT: u32 = 2;
    pub const SHIELD_DURATION: f32 = 10.0;
    pub const WEAPON_PICKUP_SCORE: u64 = 500;
    pub const HEALTH_PICKUP_SCORE: u64 = 200;
    pub const SHIELD_PICKUP_SCORE: u64 = 300;

    /// Enemies
    pub const ENEMY_SPAWN_Y: f32 = -50.0;
    pub const ENEMY_SPAWN_EDGE: f32 = 50.0;
    /// Enemies are gone once their center is this far below the bottom edge
    pub const ENEMY_EXIT_MARGIN: f32 = 100.0;
    pub const ENEMY_SHOT_OFFSET: f32 = 15.0;

    /// Boss
    pub const BOSS_HALF_EXTENTS: (f32, f32) = (50.0, 40.0);
    pub const BOSS_MAX_HEALTH: u32 = 100;
    pub const BOSS_SPEED: f32 = 100.0;
    pub const BOSS_ENRAGE_MULTIPLIER: f32 = 1.5;
    pub const BOSS_SPAWN_Y: f32 = -100.0;
    pub const BOSS_HOVER_Y: f32 = 120.0;
    pub const BOSS_ENTRY_SPEED: f32 = 60.0;
    pub const BOSS_MOVE_INTERVAL: f32 = 3.0;
    pub const BOSS_PHASE1_ATTACK_INTERVAL: f32 = 1.0;
    pub const BOSS_PHASE2_ATTACK_INTERVAL: f32 = 0.5;
    pub const BOSS_SCORE_THRESHOLD: u64 = 5000;
    pub const BOSS_DEFEAT_SCORE: u64 = 5000;

    /// Scoring
    pub const COMBO_WINDOW: f32 = 3.0;

    /// Difficulty curve
    pub const DIFFICULTY_START: f32 = 1.0;
    pub const DIFFICULTY_RATE: f32 = 0.02;
    pub const DIFFICULTY_CEILING: f32 = 5.0;
    pub const DIFFICULTY_AFTER_BOSS: f32 = 2.0;
    pub const BASE_SPAWN_INTERVAL: f32 = 3.0;
    pub const FIRST_SPAWN_DELAY: f32 = 1.0;

    /// Particles
    pub const DEFAULT_MAX_PARTICLES: usize = 200;
    pub const PARTICLE_DRAG: f32 = 0.98;
}

/// Clamp an externally measured frame delta into the range the simulation accepts
#[inline]
pub fn clamp_frame_dt(dt: f32, max_dt: f32) -> f32 {
    if dt.is_finite() { dt.clamp(0.0, max_dt) } else { 0.0 }
}

/// Unit vector for an angle in radians (0 = +x, screen y grows downward)
#[inline]
pub fn direction_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// Scale `dir` to `speed`, leaving zero-length input at zero
#[inline]
pub fn with_speed(dir: Vec2, speed: f32) -> Vec2 {
    dir.normalize_or_zero() * speed
}
