//! The boss: a single large hostile with two phases
//!
//! Phase 1 wanders and fires a wide spread. Dropping below half health
//! enrages it (Phase 2) for good: faster, bobbing, firing jittered volleys.
//! Defeat is handled by the world, not here.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Body, PlayBounds};
use super::projectile::Projectile;
use crate::consts::*;
use crate::palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossPhase {
    Phase1,
    Phase2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub body: Body,
    pub phase: BossPhase,
    health: u32,
    max_health: u32,
    /// Base horizontal speed; scaled once on enrage
    speed: f32,
    move_timer: f32,
    attack_timer: f32,
    /// Still descending to the hover line
    entering: bool,
}

impl Boss {
    pub fn new(pos: Vec2) -> Self {
        let (hw, hh) = BOSS_HALF_EXTENTS;
        Self {
            body: Body::new(pos, Vec2::new(hw, hh))
                .with_velocity(Vec2::new(BOSS_SPEED, 0.0))
                .with_color(palette::BOSS_HULL),
            phase: BossPhase::Phase1,
            health: BOSS_MAX_HEALTH,
            max_health: BOSS_MAX_HEALTH,
            speed: BOSS_SPEED,
            move_timer: 0.0,
            attack_timer: 0.0,
            entering: pos.y < BOSS_HOVER_Y,
        }
    }

    /// Spawn position: centered, above the visible area
    pub fn spawn_point(bounds: &PlayBounds) -> Vec2 {
        Vec2::new(bounds.width() / 2.0, BOSS_SPAWN_Y)
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

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    pub fn is_entering(&self) -> bool {
        self.entering
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Advance one step, pushing shots to `shots`.
    ///
    /// Returns true on the step the boss enrages.
    pub fn update<R: Rng>(
        &mut self,
        dt: f32,
        bounds: &PlayBounds,
        rng: &mut R,
        shots: &mut Vec<Projectile>,
    ) -> bool {
        let enraged = self.check_enrage();

        if self.entering {
            self.body.vel.y = BOSS_ENTRY_SPEED;
            if self.body.pos.y >= BOSS_HOVER_Y {
                self.entering = false;
                self.body.vel.y = 0.0;
            }
        }

        if !self.entering {
            match self.phase {
                BossPhase::Phase1 => self.update_phase1(dt, rng, shots),
                BossPhase::Phase2 => self.update_phase2(dt, rng, shots),
            }
        }

        self.bounce(bounds);
        self.body.advance(dt);
        enraged
    }

    /// One-way switch to Phase 2 once health first drops below half
    fn check_enrage(&mut self) -> bool {
        if self.phase == BossPhase::Phase1 && self.health < self.max_health / 2 {
            self.phase = BossPhase::Phase2;
            self.speed *= BOSS_ENRAGE_MULTIPLIER;
            self.body.vel.x *= BOSS_ENRAGE_MULTIPLIER;
            return true;
        }
        false
    }

    fn update_phase1<R: Rng>(&mut self, dt: f32, rng: &mut R, shots: &mut Vec<Projectile>) {
        self.move_timer += dt;
        if self.move_timer > BOSS_MOVE_INTERVAL {
            self.move_timer = 0.0;
            // One in three: hold still to fire
            self.body.vel.x = if rng.random_range(0..3) == 0 {
                0.0
            } else if rng.random_bool(0.5) {
                self.speed
            } else {
                -self.speed
            };
        }

        self.attack_timer -= dt;
        if self.attack_timer <= 0.0 {
            self.attack_timer = BOSS_PHASE1_ATTACK_INTERVAL;
            let muzzle = self.muzzle();
            for i in -2..=2 {
                let lane = i as f32;
                shots.push(Projectile::hostile(
                    muzzle + Vec2::new(lane * 10.0, 0.0),
                    Vec2::new(lane * 30.0, 200.0),
                ));
            }
        }
    }

    fn update_phase2<R: Rng>(&mut self, dt: f32, rng: &mut R, shots: &mut Vec<Projectile>) {
        self.move_timer += dt;
        self.body.vel.y = (self.move_timer * 2.0).sin() * 50.0;
        if self.body.vel.x == 0.0 {
            self.body.vel.x = self.speed;
        }

        self.attack_timer -= dt;
        if self.attack_timer <= 0.0 {
            self.attack_timer = BOSS_PHASE2_ATTACK_INTERVAL;
            let muzzle = self.muzzle();
            for _ in 0..5 {
                let jitter: f32 = rng.random_range(-40.0..40.0);
                let drift: f32 = rng.random_range(-50.0..50.0);
                shots.push(Projectile::hostile(
                    muzzle + Vec2::new(jitter, 0.0),
                    Vec2::new(drift, 300.0),
                ));
            }
        }
    }

    fn muzzle(&self) -> Vec2 {
        self.body.pos + Vec2::new(0.0, self.body.half_extents.y)
    }

    /// Flip horizontal direction at either edge
    fn bounce(&mut self, bounds: &PlayBounds) {
        let half_w = self.body.half_extents.x;
        if self.body.pos.x < half_w && self.body.vel.x < 0.0 {
            self.body.vel.x = self.body.vel.x.abs();
        }
        if self.body.pos.x > bounds.width() - half_w && self.body.vel.x > 0.0 {
            self.body.vel.x = -self.body.vel.x.abs();
        }
    }
}
