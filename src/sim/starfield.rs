//! Scrolling parallax starfield
//!
//! Pure decoration. Draws from its own RNG stream so the star count (a
//! quality setting) never perturbs gameplay randomness.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::PlayBounds;
use crate::palette::{Color, rgba8};

/// Mixed into the world seed to derive the starfield stream
const STARFIELD_STREAM: u64 = 0x5741_5253_4649_454c;

/// Stars respawn just above the top edge
const RESPAWN_Y: f32 = -5.0;
/// How far past the bottom a star travels before respawning
const EXIT_MARGIN: f32 = 10.0;
/// Speed at which a star reaches full brightness
const FULL_BRIGHTNESS_SPEED: f32 = 150.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    /// 0..=255, dimmer for slower (more distant) stars
    pub brightness: u8,
    /// Edge length in pixels, 1..=3
    pub size: u8,
}

impl Star {
    /// Slightly blue-tinted grey
    pub fn color(&self) -> Color {
        let b = self.brightness;
        let blue = (b as f32 * 1.1).min(255.0) as u8;
        rgba8(b, b, blue, 255)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Starfield {
    stars: Vec<Star>,
    bounds: PlayBounds,
    #[serde(skip, default = "default_rng")]
    rng: Pcg32,
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(STARFIELD_STREAM)
}

impl Starfield {
    pub fn new(bounds: PlayBounds, count: usize, world_seed: u64) -> Self {
        let mut field = Self {
            stars: Vec::with_capacity(count),
            bounds,
            rng: Pcg32::seed_from_u64(world_seed ^ STARFIELD_STREAM),
        };
        for _ in 0..count {
            let star = field.spawn_star(true);
            field.stars.push(star);
        }
        field
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn update(&mut self, dt: f32) {
        let limit = self.bounds.height() + EXIT_MARGIN;
        for i in 0..self.stars.len() {
            self.stars[i].y += self.stars[i].speed * dt;
            if self.stars[i].y > limit {
                self.stars[i] = self.spawn_star(false);
            }
        }
    }

    /// A fresh star anywhere on screen, or at the top edge when respawning
    fn spawn_star(&mut self, anywhere: bool) -> Star {
        let fx: f32 = self.rng.random_range(0.0..1.0);
        let x = fx * self.bounds.width();
        let y = if anywhere {
            let fy: f32 = self.rng.random_range(0.0..1.0);
            fy * self.bounds.height()
        } else {
            RESPAWN_Y
        };
        let speed: f32 = self.rng.random_range(20.0..150.0);
        let base: f32 = self.rng.random_range(80..=255u8) as f32;
        let size = self.rng.random_range(1..=3u8);
        Star {
            x,
            y,
            speed,
            brightness: (base * (speed / FULL_BRIGHTNESS_SPEED)) as u8,
            size,
        }
    }
}
