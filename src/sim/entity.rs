//! Shared entity record and play-area bounds
//!
//! Every game object embeds a `Body`. Behavior is selected by the owning
//! record's kind tag, never by the body itself.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::{MIN_PLAY_HEIGHT, MIN_PLAY_WIDTH};
use crate::error::ConfigError;
use crate::palette::{Color, WHITE};

/// Position, motion, extent, and liveness common to all entities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub half_extents: Vec2,
    /// False once the entity is dead or gone; purged at end of step
    pub active: bool,
    pub color: Color,
}

impl Body {
    pub fn new(pos: Vec2, half_extents: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            half_extents,
            active: true,
            color: WHITE,
        }
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Integrate position by velocity
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.half_extents)
    }

    /// True iff both bodies are active and their boxes intersect
    pub fn overlaps(&self, other: &Body) -> bool {
        self.active && other.active && self.aabb().intersects(&other.aabb())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

/// The rectangular logical area entities live in, origin at top-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayBounds {
    width: f32,
    height: f32,
}

impl PlayBounds {
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        let usable = width.is_finite()
            && height.is_finite()
            && width >= MIN_PLAY_WIDTH
            && height >= MIN_PLAY_HEIGHT;
        if !usable {
            return Err(ConfigError::DegeneratePlayArea { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True when `pos` lies outside the area grown by `margin` on every side
    pub fn is_outside(&self, pos: Vec2, margin: f32) -> bool {
        pos.x < -margin
            || pos.x > self.width + margin
            || pos.y < -margin
            || pos.y > self.height + margin
    }
}
