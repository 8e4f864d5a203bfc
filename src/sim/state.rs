//! Game state and world bookkeeping
//!
//! Everything a step reads or writes lives in `GameState`. The per-step
//! pipeline itself is in `tick`.

use std::num::NonZeroU32;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::boss::{Boss, BossPhase};
use super::enemy::{Enemy, EnemyKind};
use super::entity::PlayBounds;
use super::particle::{Particle, spawn_explosion};
use super::player::{DamageOutcome, Player, ShotKind};
use super::powerup::{PowerUp, PowerUpKind};
use super::projectile::Projectile;
use super::starfield::Starfield;
use crate::consts::*;
use crate::error::ConfigError;
use crate::highscores::HighScore;
use crate::palette::Color;
use crate::settings::Settings;

/// Top-level game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Waiting for the first start press
    Menu,
    /// Active gameplay
    Playing,
    /// Simulation frozen, starfield still scrolls
    Paused,
    /// Run ended; last frame is kept for display
    GameOver,
}

/// Things that happened during a step, for audio and HUD hooks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RunStarted,
    ShotFired(ShotKind),
    EnemyKilled { id: u32, kind: EnemyKind, points: u64 },
    EnemyEscaped { id: u32, kind: EnemyKind },
    BossSpawned,
    BossEnraged,
    BossDefeated { points: u64 },
    PlayerHit(DamageOutcome),
    PowerUpCollected(PowerUpKind),
    GameOver { score: u64, new_high_score: bool },
}

/// Boss gauge for the HUD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BossGauge {
    pub health: u32,
    pub max_health: u32,
    pub fraction: f32,
    pub phase: BossPhase,
}

/// Everything a HUD needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub mode: GameMode,
    pub score: u64,
    pub high_score: u64,
    pub combo: u32,
    pub health: u32,
    pub max_health: u32,
    pub health_fraction: f32,
    pub weapon_level: u8,
    pub shield_time: f32,
    pub charge_fraction: f32,
    pub difficulty: f32,
    pub boss: Option<BossGauge>,
}

/// Complete world state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    bounds: PlayBounds,
    pub(crate) rng: Pcg32,

    pub mode: GameMode,
    pub score: u64,
    /// Consecutive scoring events inside the combo window
    pub combo: u32,
    /// Seconds until the combo lapses
    pub combo_timer: f32,
    /// Seconds until the next regular spawn
    pub spawn_timer: f32,
    pub difficulty: f32,
    /// Seconds of play in the current run
    pub run_time: f32,
    /// Boss already appeared this run
    pub boss_spawned: bool,
    /// Pause pressed outside of a run
    pub quit_requested: bool,

    pub player: Option<Player>,
    pub boss: Option<Boss>,
    /// Sorted by id (spawn order)
    pub enemies: Vec<Enemy>,
    /// Player and hostile shots, told apart by owner
    pub projectiles: Vec<Projectile>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub powerups: Vec<PowerUp>,
    pub starfield: Starfield,

    pub high_score: HighScore,
    /// Cleared at the start of every step
    pub events: Vec<GameEvent>,

    max_particles: usize,
    player_max_health: NonZeroU32,
    max_frame_dt: f32,
    next_id: u32,
}

impl GameState {
    /// Build a world in the menu. Settings are validated here.
    pub fn new(settings: &Settings, seed: u64) -> Result<Self, ConfigError> {
        let bounds = settings.play_bounds()?;
        let player_max_health = settings.max_health()?;
        let max_frame_dt = settings.frame_dt_cap()?;

        Ok(Self {
            seed,
            bounds,
            rng: Pcg32::seed_from_u64(seed),
            mode: GameMode::Menu,
            score: 0,
            combo: 0,
            combo_timer: 0.0,
            spawn_timer: FIRST_SPAWN_DELAY,
            difficulty: DIFFICULTY_START,
            run_time: 0.0,
            boss_spawned: false,
            quit_requested: false,
            player: None,
            boss: None,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            particles: Vec::new(),
            powerups: Vec::new(),
            starfield: Starfield::new(bounds, settings.star_count(), seed),
            high_score: HighScore::default(),
            events: Vec::new(),
            max_particles: settings.max_particles(),
            player_max_health,
            max_frame_dt,
            next_id: 1,
        })
    }

    /// Attach persistent high score tracking
    pub fn with_high_score(mut self, high_score: HighScore) -> Self {
        self.high_score = high_score;
        self
    }

    pub fn bounds(&self) -> &PlayBounds {
        &self.bounds
    }

    pub fn max_particles(&self) -> usize {
        self.max_particles
    }

    pub fn max_frame_dt(&self) -> f32 {
        self.max_frame_dt
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset everything but the high score and begin playing
    pub fn start_run(&mut self) {
        self.score = 0;
        self.combo = 0;
        self.combo_timer = 0.0;
        self.spawn_timer = FIRST_SPAWN_DELAY;
        self.difficulty = DIFFICULTY_START;
        self.run_time = 0.0;
        self.boss_spawned = false;

        self.boss = None;
        self.enemies.clear();
        self.projectiles.clear();
        self.particles.clear();
        self.powerups.clear();

        let spawn = Vec2::new(
            self.bounds.width() / 2.0,
            self.bounds.height() - PLAYER_SPAWN_OFFSET,
        );
        self.player = Some(Player::new(spawn, self.player_max_health));
        self.mode = GameMode::Playing;
        self.events.push(GameEvent::RunStarted);
        log::info!("Run started (seed {})", self.seed);
    }

    /// Award points through the combo multiplier
    pub fn add_score(&mut self, points: u64) {
        self.combo = self.combo.saturating_add(1);
        self.combo_timer = COMBO_WINDOW;
        self.score = self
            .score
            .saturating_add(points.saturating_mul(self.combo as u64));
    }

    /// Burst of particles at `pos`; silently truncated at the particle cap
    pub fn explode(&mut self, pos: Vec2, count: usize, color: Color) -> usize {
        spawn_explosion(
            &mut self.particles,
            self.max_particles,
            &mut self.rng,
            pos,
            count,
            color,
        )
    }

    /// One random enemy just above the visible area
    pub fn spawn_enemy(&mut self) {
        let kind = EnemyKind::random(&mut self.rng);
        let x: f32 = self
            .rng
            .random_range(ENEMY_SPAWN_EDGE..=self.bounds.width() - ENEMY_SPAWN_EDGE);
        let id = self.next_entity_id();
        log::debug!("Spawned {kind:?} #{id} at x={x:.0}");
        self.enemies
            .push(Enemy::new(id, kind, Vec2::new(x, ENEMY_SPAWN_Y)));
    }

    pub fn spawn_boss(&mut self) {
        self.boss = Some(Boss::new(Boss::spawn_point(&self.bounds)));
        self.boss_spawned = true;
        self.events.push(GameEvent::BossSpawned);
        log::info!("Boss incoming at score {}", self.score);
    }

    /// Maybe leave a power-up where an enemy died
    pub(crate) fn roll_drop(&mut self, kind: EnemyKind, pos: Vec2) {
        if self.rng.random_bool(kind.stats().drop_chance) {
            let drop = PowerUpKind::random(&mut self.rng);
            log::debug!("{kind:?} dropped {drop:?}");
            self.powerups.push(PowerUp::new(drop, pos));
        }
    }

    pub fn hud(&self) -> Hud {
        let (health, max_health, health_fraction, weapon_level, shield_time, charge_fraction) =
            match &self.player {
                Some(p) => (
                    p.health(),
                    p.max_health(),
                    p.health_fraction(),
                    p.weapon_level(),
                    p.shield_time(),
                    p.charge_fraction(),
                ),
                None => (0, self.player_max_health.get(), 0.0, 0, 0.0, 0.0),
            };
        Hud {
            mode: self.mode,
            score: self.score,
            high_score: self.high_score.best().max(self.score),
            combo: self.combo,
            health,
            max_health,
            health_fraction,
            weapon_level,
            shield_time,
            charge_fraction,
            difficulty: self.difficulty,
            boss: self.boss.as_ref().map(|b| BossGauge {
                health: b.health(),
                max_health: b.max_health(),
                fraction: b.health_fraction(),
                phase: b.phase,
            }),
        }
    }
}
