//! Pickups dropped by destroyed enemies

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Body, PlayBounds};
use crate::consts::{
    HEALTH_PICKUP_SCORE, POWERUP_FALL_SPEED, POWERUP_HALF_EXTENTS, SHIELD_PICKUP_SCORE,
    WEAPON_PICKUP_SCORE,
};
use crate::palette::{self, Color};

/// Power-up categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    WeaponUpgrade,
    HealthRestore,
    Shield,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::WeaponUpgrade,
        PowerUpKind::HealthRestore,
        PowerUpKind::Shield,
    ];

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn color(self) -> Color {
        match self {
            PowerUpKind::WeaponUpgrade => palette::WEAPON_PICKUP,
            PowerUpKind::HealthRestore => palette::HEALTH_PICKUP,
            PowerUpKind::Shield => palette::SHIELD_PICKUP,
        }
    }

    /// Flat bonus awarded on pickup (before the combo multiplier)
    pub fn score_bonus(self) -> u64 {
        match self {
            PowerUpKind::WeaponUpgrade => WEAPON_PICKUP_SCORE,
            PowerUpKind::HealthRestore => HEALTH_PICKUP_SCORE,
            PowerUpKind::Shield => SHIELD_PICKUP_SCORE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub body: Body,
    pub kind: PowerUpKind,
    /// Cosmetic pulse clock
    pub blink: f32,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, pos: Vec2) -> Self {
        let (hw, hh) = POWERUP_HALF_EXTENTS;
        Self {
            body: Body::new(pos, Vec2::new(hw, hh))
                .with_velocity(Vec2::new(0.0, POWERUP_FALL_SPEED))
                .with_color(kind.color()),
            kind,
            blink: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32, bounds: &PlayBounds) {
        if !self.body.active {
            return;
        }
        self.blink += dt * 10.0;
        self.body.advance(dt);
        if self.body.pos.y - self.body.half_extents.y > bounds.height() {
            self.body.deactivate();
        }
    }

    /// Glow intensity in 0..1
    pub fn pulse(&self) -> f32 {
        0.5 + 0.5 * self.blink.sin()
    }
}
