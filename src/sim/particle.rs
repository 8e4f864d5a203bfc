//! Cosmetic explosion particles
//!
//! Particles never take part in collision. The world caps how many can be
//! alive at once; requests past the cap are dropped.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::Body;
use crate::consts::PARTICLE_DRAG;
use crate::direction_from_angle;
use crate::palette::{Color, faded};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub body: Body,
    pub life: f32,
    pub max_life: f32,
    /// Edge length; shrinks over the particle's life
    pub size: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, life: f32, size: f32, color: Color) -> Self {
        let half = size / 2.0;
        Self {
            body: Body::new(pos, Vec2::splat(half))
                .with_velocity(vel)
                .with_color(color),
            life,
            max_life: life.max(f32::EPSILON),
            size,
        }
    }

    /// Remaining life as a fraction of the starting life
    pub fn life_fraction(&self) -> f32 {
        (self.life / self.max_life).clamp(0.0, 1.0)
    }

    /// Base color with alpha scaled by remaining life
    pub fn current_color(&self) -> Color {
        faded(self.body.color, self.life_fraction())
    }

    pub fn update(&mut self, dt: f32) {
        if !self.body.active {
            return;
        }
        self.body.advance(dt);
        self.body.vel *= PARTICLE_DRAG;

        self.life -= dt;
        if self.life <= 0.0 {
            self.body.deactivate();
        }

        self.size *= 0.99 + 0.01 * self.life_fraction();
        self.body.half_extents = Vec2::splat(self.size / 2.0);
    }
}

/// Push up to `count` particles bursting from `pos`, never exceeding `cap`
/// live particles. Returns how many were actually spawned.
pub fn spawn_explosion<R: Rng>(
    particles: &mut Vec<Particle>,
    cap: usize,
    rng: &mut R,
    pos: Vec2,
    count: usize,
    color: Color,
) -> usize {
    let room = cap.saturating_sub(particles.len());
    let spawned = count.min(room);

    for _ in 0..spawned {
        let angle = rng.random_range(0.0..TAU);
        let speed: f32 = rng.random_range(50.0..200.0);
        let life: f32 = rng.random_range(0.3..0.8);
        let size: f32 = rng.random_range(2.0..6.0);
        particles.push(Particle::new(
            pos,
            direction_from_angle(angle) * speed,
            life,
            size,
            color,
        ));
    }

    spawned
}
