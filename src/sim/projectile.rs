//! Bullets fired by the player, enemies, and the boss

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Body, PlayBounds};
use crate::consts::{PROJECTILE_HALF_EXTENTS, PROJECTILE_LIFETIME, PROJECTILE_MARGIN};
use crate::palette;

/// Which side fired the projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Hostile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
    pub owner: Owner,
    pub damage: u32,
    /// Seconds until the projectile expires
    pub lifetime: f32,
}

impl Projectile {
    pub fn new(owner: Owner, pos: Vec2, vel: Vec2) -> Self {
        let color = match owner {
            Owner::Player => palette::PLAYER_SHOT,
            Owner::Hostile => palette::HOSTILE_SHOT,
        };
        let (hw, hh) = PROJECTILE_HALF_EXTENTS;
        Self {
            body: Body::new(pos, Vec2::new(hw, hh))
                .with_velocity(vel)
                .with_color(color),
            owner,
            damage: 1,
            lifetime: PROJECTILE_LIFETIME,
        }
    }

    pub fn player(pos: Vec2, vel: Vec2) -> Self {
        Self::new(Owner::Player, pos, vel)
    }

    pub fn hostile(pos: Vec2, vel: Vec2) -> Self {
        Self::new(Owner::Hostile, pos, vel)
    }

    pub fn update(&mut self, dt: f32, bounds: &PlayBounds) {
        if !self.body.active {
            return;
        }
        self.body.advance(dt);
        self.lifetime -= dt;
        if self.lifetime <= 0.0 || bounds.is_outside(self.body.pos, PROJECTILE_MARGIN) {
            self.body.deactivate();
        }
    }
}
