//! Input sources
//!
//! A window backend would poll the keyboard here. Headless runs use a fixed
//! script or the built-in autopilot.

use glam::Vec2;

use crate::consts::PLAYER_SPAWN_OFFSET;
use crate::sim::{GameMode, GameState, Owner, TickInput};

/// Produces one input snapshot per step
pub trait InputSource {
    fn next_input(&mut self, state: &GameState) -> TickInput;
}

/// Replays a fixed list of inputs, then idles (or loops)
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<TickInput>,
    cursor: usize,
    looping: bool,
}

impl ScriptedInput {
    pub fn new(frames: Vec<TickInput>) -> Self {
        Self {
            frames,
            cursor: 0,
            looping: false,
        }
    }

    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    pub fn is_finished(&self) -> bool {
        !self.looping && self.cursor >= self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_input(&mut self, _state: &GameState) -> TickInput {
        if self.frames.is_empty() {
            return TickInput::default();
        }
        if self.looping {
            self.cursor %= self.frames.len();
        }
        let input = self.frames.get(self.cursor).copied().unwrap_or_default();
        self.cursor += 1;
        input
    }
}

/// How close a hostile shot may get before the autopilot sidesteps
const DODGE_RANGE: f32 = 160.0;
const DODGE_WIDTH: f32 = 36.0;
/// Ignore horizontal error smaller than this
const DEADZONE: f32 = 8.0;
/// Steps of held fire before a charged release against the boss
const CHARGE_HOLD_STEPS: u64 = 65;

/// Simple heuristic pilot: dodge, chase pickups, line up under targets
#[derive(Debug, Clone)]
pub struct Autopilot {
    step: u64,
    /// Start a new run after game over
    pub restart: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new()
    }
}

impl Autopilot {
    pub fn new() -> Self {
        Self {
            step: 0,
            restart: false,
        }
    }

    pub fn with_restart(mut self, restart: bool) -> Self {
        self.restart = restart;
        self
    }

    fn fly(&self, state: &GameState) -> TickInput {
        let Some(player) = &state.player else {
            return TickInput::default();
        };
        let pos = player.body.pos;
        let mut input = TickInput::default();

        // Sidestep the nearest incoming hostile shot
        let threat = state
            .projectiles
            .iter()
            .filter(|s| s.owner == Owner::Hostile && s.body.active)
            .filter(|s| {
                let d = pos - s.body.pos;
                d.y > 0.0 && d.y < DODGE_RANGE && d.x.abs() < DODGE_WIDTH
            })
            .min_by(|a, b| {
                a.body
                    .pos
                    .distance_squared(pos)
                    .total_cmp(&b.body.pos.distance_squared(pos))
            });

        let target_x = if let Some(shot) = threat {
            let away = if shot.body.pos.x > pos.x { -1.0 } else { 1.0 };
            pos.x + away * DODGE_WIDTH * 2.0
        } else {
            self.pick_target(state, pos)
        };

        let dx = target_x - pos.x;
        input.left = dx < -DEADZONE;
        input.right = dx > DEADZONE;

        // Drift back to the home line near the bottom
        let home_y = state.bounds().height() - PLAYER_SPAWN_OFFSET;
        input.down = pos.y < home_y - DEADZONE;
        input.up = pos.y > home_y + DEADZONE;

        input.fire = match &state.boss {
            Some(boss) if !boss.is_entering() => self.step % (CHARGE_HOLD_STEPS + 5) < CHARGE_HOLD_STEPS,
            // Tap fire: press one step, release the next
            _ => self.step % 2 == 0,
        };
        input
    }

    /// Preferred x: nearest pickup, else the boss, else the lowest enemy
    fn pick_target(&self, state: &GameState, pos: Vec2) -> f32 {
        if let Some(p) = state
            .powerups
            .iter()
            .filter(|p| p.body.active)
            .min_by(|a, b| {
                a.body
                    .pos
                    .distance_squared(pos)
                    .total_cmp(&b.body.pos.distance_squared(pos))
            })
        {
            return p.body.pos.x;
        }
        if let Some(boss) = &state.boss {
            return boss.body.pos.x;
        }
        state
            .enemies
            .iter()
            .filter(|e| e.body.active && e.body.pos.y > 0.0)
            .max_by(|a, b| a.body.pos.y.total_cmp(&b.body.pos.y))
            .map(|e| e.body.pos.x)
            .unwrap_or(state.bounds().width() / 2.0)
    }
}

impl InputSource for Autopilot {
    fn next_input(&mut self, state: &GameState) -> TickInput {
        self.step += 1;
        match state.mode {
            GameMode::Menu => TickInput {
                start: true,
                ..Default::default()
            },
            GameMode::GameOver => TickInput {
                start: self.restart,
                ..Default::default()
            },
            GameMode::Paused => TickInput {
                pause: true,
                ..Default::default()
            },
            GameMode::Playing => self.fly(state),
        }
    }
}
