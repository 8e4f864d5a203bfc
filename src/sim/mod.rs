//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Externally supplied, clamped frame delta
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod boss;
pub mod collision;
pub mod enemy;
pub mod entity;
pub mod particle;
pub mod player;
pub mod powerup;
pub mod projectile;
pub mod starfield;
pub mod state;
pub mod tick;

pub use boss::{Boss, BossPhase};
pub use collision::Aabb;
pub use enemy::{Enemy, EnemyKind};
pub use entity::{Body, PlayBounds};
pub use particle::Particle;
pub use player::{DamageOutcome, FireState, Player, ShotKind};
pub use powerup::{PowerUp, PowerUpKind};
pub use projectile::{Owner, Projectile};
pub use starfield::{Star, Starfield};
pub use state::{BossGauge, GameEvent, GameMode, GameState, Hud};
pub use tick::{TickInput, resolve_collisions, tick};
