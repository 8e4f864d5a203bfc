//! Regular enemies
//!
//! Three fixed variants. The variant picks stats at spawn time and selects
//! the movement and fire pattern each step.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Body, PlayBounds};
use super::projectile::Projectile;
use crate::consts::{ENEMY_EXIT_MARGIN, ENEMY_SHOT_OFFSET};
use crate::palette::{self, Color};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Sways side to side on a sine, single straight shot
    Drifter,
    /// Steers toward the horizontal center, faster straight shot
    Hunter,
    /// Slow and tough, drops a three-shot fan
    Bomber,
}

/// Per-variant starting stats
#[derive(Debug, Clone, Copy)]
pub struct EnemyStats {
    pub half_extents: Vec2,
    pub health: u32,
    pub score: u64,
    pub fire_cooldown: f32,
    pub color: Color,
    /// Chance a kill drops a power-up
    pub drop_chance: f64,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Drifter, EnemyKind::Hunter, EnemyKind::Bomber];

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn stats(self) -> EnemyStats {
        match self {
            EnemyKind::Drifter => EnemyStats {
                half_extents: Vec2::new(15.0, 15.0),
                health: 1,
                score: 100,
                fire_cooldown: 2.5,
                color: palette::DRIFTER,
                drop_chance: 0.08,
            },
            EnemyKind::Hunter => EnemyStats {
                half_extents: Vec2::new(17.5, 17.5),
                health: 2,
                score: 200,
                fire_cooldown: 1.5,
                color: palette::HUNTER,
                drop_chance: 0.12,
            },
            EnemyKind::Bomber => EnemyStats {
                half_extents: Vec2::new(25.0, 22.5),
                health: 4,
                score: 500,
                fire_cooldown: 3.0,
                color: palette::BOMBER,
                drop_chance: 0.30,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub body: Body,
    pub kind: EnemyKind,
    health: u32,
    max_health: u32,
    pub score_value: u64,
    fire_cooldown: f32,
    fire_timer: f32,
    /// Seconds since spawn; drives sway and animation
    pub anim: f32,
}

impl Enemy {
    pub fn new(id: u32, kind: EnemyKind, pos: Vec2) -> Self {
        let stats = kind.stats();
        Self {
            id,
            body: Body::new(pos, stats.half_extents).with_color(stats.color),
            kind,
            health: stats.health,
            max_health: stats.health,
            score_value: stats.score,
            fire_cooldown: stats.fire_cooldown,
            // Halfway to the first shot
            fire_timer: stats.fire_cooldown * 0.5,
            anim: 0.0,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn health_fraction(&self) -> f32 {
        self.health as f32 / self.max_health.max(1) as f32
    }

    /// Lower health; reaching zero deactivates the enemy
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            self.body.deactivate();
        }
    }

    /// Advance one step, pushing any shots to `shots`.
    ///
    /// Returns true if the enemy slipped past the bottom edge this step.
    pub fn update(&mut self, dt: f32, bounds: &PlayBounds, shots: &mut Vec<Projectile>) -> bool {
        if !self.body.active {
            return false;
        }
        self.anim += dt;

        self.body.vel = match self.kind {
            EnemyKind::Drifter => Vec2::new((self.anim * 2.0).sin() * 30.0, 80.0),
            EnemyKind::Hunter => {
                let offset = bounds.width() / 2.0 - self.body.pos.x;
                Vec2::new((offset * 0.5).clamp(-150.0, 150.0), 60.0)
            }
            EnemyKind::Bomber => Vec2::new((self.anim * 0.8).sin() * 20.0, 40.0),
        };

        self.fire_timer -= dt;
        if self.fire_timer <= 0.0 {
            self.fire_timer = self.fire_cooldown;
            self.fire(shots);
        }

        self.body.advance(dt);

        if self.body.pos.y > bounds.height() + ENEMY_EXIT_MARGIN {
            self.body.deactivate();
            return true;
        }
        false
    }

    fn fire(&self, shots: &mut Vec<Projectile>) {
        let muzzle = self.body.pos + Vec2::new(0.0, self.body.half_extents.y);
        match self.kind {
            EnemyKind::Drifter => shots.push(Projectile::hostile(muzzle, Vec2::new(0.0, 250.0))),
            EnemyKind::Hunter => shots.push(Projectile::hostile(muzzle, Vec2::new(0.0, 300.0))),
            EnemyKind::Bomber => {
                for i in -1..=1 {
                    let lane = i as f32;
                    shots.push(Projectile::hostile(
                        muzzle + Vec2::new(lane * ENEMY_SHOT_OFFSET, 0.0),
                        Vec2::new(lane * 50.0, 200.0),
                    ));
                }
            }
        }
    }
}
