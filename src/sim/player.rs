//! The player's ship
//!
//! Movement is set directly from the input each step. Firing is a small
//! state machine: pressing fire starts charging, releasing it either lets
//! loose a charged volley (full charge) or a normal shot (cooldown permitting).

use std::num::NonZeroU32;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Body, PlayBounds};
use super::projectile::Projectile;
use super::tick::TickInput;
use crate::consts::*;
use crate::error::ConfigError;
use crate::palette;
use crate::with_speed;

/// Charge shorter than the cap by less than this still counts as full
/// (summed frame deltas rarely land exactly on 1.0)
const CHARGE_EPSILON: f32 = 1e-4;

/// Fire-control state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FireState {
    Idle,
    Charging { charge: f32 },
}

/// What a trigger release produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotKind {
    Normal,
    Charged,
}

/// Result of `Player::take_damage`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageOutcome {
    /// The shield soaked the hit and collapsed
    Absorbed,
    /// Health actually lost
    Dealt(u32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    health: u32,
    max_health: NonZeroU32,
    weapon_level: u8,
    /// Seconds of shield left; zero means no shield
    shield_time: f32,
    fire_cooldown: f32,
    fire: FireState,
    /// Engine glow animation clock
    pub engine_flicker: f32,
}

impl Player {
    pub fn new(pos: Vec2, max_health: NonZeroU32) -> Self {
        let (hw, hh) = PLAYER_HALF_EXTENTS;
        Self {
            body: Body::new(pos, Vec2::new(hw, hh)).with_color(palette::PLAYER),
            health: max_health.get(),
            max_health,
            weapon_level: 0,
            shield_time: 0.0,
            fire_cooldown: 0.0,
            fire: FireState::Idle,
            engine_flicker: 0.0,
        }
    }

    /// Build a player from an unchecked max-health value
    pub fn try_new(pos: Vec2, max_health: i64) -> Result<Self, ConfigError> {
        Ok(Self::new(pos, checked_max_health(max_health)?))
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health.get()
    }

    pub fn health_fraction(&self) -> f32 {
        self.health as f32 / self.max_health.get() as f32
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    pub fn weapon_level(&self) -> u8 {
        self.weapon_level
    }

    pub fn shield_active(&self) -> bool {
        self.shield_time > 0.0
    }

    pub fn shield_time(&self) -> f32 {
        self.shield_time
    }

    pub fn fire_state(&self) -> FireState {
        self.fire
    }

    /// Charge progress in 0..1 (zero while idle)
    pub fn charge_fraction(&self) -> f32 {
        match self.fire {
            FireState::Idle => 0.0,
            FireState::Charging { charge } => (charge / CHARGE_CAP).clamp(0.0, 1.0),
        }
    }

    /// Advance one step. Any projectiles fired are pushed to `shots`.
    pub fn update(
        &mut self,
        input: &TickInput,
        bounds: &PlayBounds,
        dt: f32,
        shots: &mut Vec<Projectile>,
    ) -> Option<ShotKind> {
        self.body.vel = with_speed(input.direction(), PLAYER_SPEED);
        self.body.advance(dt);
        self.clamp_to(bounds);

        if self.fire_cooldown > 0.0 {
            self.fire_cooldown = (self.fire_cooldown - dt).max(0.0);
        }
        if self.shield_time > 0.0 {
            self.shield_time = (self.shield_time - dt).max(0.0);
        }

        self.engine_flicker += dt * 10.0;

        self.update_trigger(input.fire, dt, shots)
    }

    fn update_trigger(
        &mut self,
        fire_held: bool,
        dt: f32,
        shots: &mut Vec<Projectile>,
    ) -> Option<ShotKind> {
        match (self.fire, fire_held) {
            (FireState::Idle, false) => None,
            (FireState::Idle, true) => {
                self.fire = FireState::Charging {
                    charge: dt.min(CHARGE_CAP),
                };
                None
            }
            (FireState::Charging { charge }, true) => {
                self.fire = FireState::Charging {
                    charge: (charge + dt).min(CHARGE_CAP),
                };
                None
            }
            (FireState::Charging { charge }, false) => {
                self.fire = FireState::Idle;
                if charge >= CHARGE_CAP - CHARGE_EPSILON {
                    self.fire_charged_volley(shots);
                    Some(ShotKind::Charged)
                } else if self.fire_cooldown <= 0.0 {
                    self.fire_normal_shot(shots);
                    Some(ShotKind::Normal)
                } else {
                    None
                }
            }
        }
    }

    fn muzzle(&self) -> Vec2 {
        self.body.pos - Vec2::new(0.0, self.body.half_extents.y)
    }

    fn fire_normal_shot(&mut self, shots: &mut Vec<Projectile>) {
        let muzzle = self.muzzle();
        shots.push(Projectile::player(
            muzzle,
            Vec2::new(0.0, -PLAYER_SHOT_SPEED),
        ));
        if self.weapon_level >= 1 {
            for side in [-1.0f32, 1.0] {
                shots.push(Projectile::player(
                    muzzle + Vec2::new(side * 10.0, 5.0),
                    Vec2::new(side * SIDE_SHOT_SPEED_X, -SIDE_SHOT_SPEED_Y),
                ));
            }
        }
        self.fire_cooldown = FIRE_COOLDOWN;
    }

    fn fire_charged_volley(&mut self, shots: &mut Vec<Projectile>) {
        let muzzle = self.muzzle();
        let mid = (CHARGED_VOLLEY_SIZE as f32 - 1.0) / 2.0;
        for i in 0..CHARGED_VOLLEY_SIZE {
            let offset = (i as f32 - mid) * CHARGED_VOLLEY_SPACING;
            shots.push(Projectile::player(
                muzzle + Vec2::new(offset, 0.0),
                Vec2::new(0.0, -CHARGED_SHOT_SPEED),
            ));
        }
        self.fire_cooldown = FIRE_COOLDOWN;
    }

    /// Keep the whole ship, wings included, inside the play area
    fn clamp_to(&mut self, bounds: &PlayBounds) {
        let pos = &mut self.body.pos;
        pos.x = pos
            .x
            .clamp(PLAYER_WING_MARGIN, bounds.width() - PLAYER_WING_MARGIN);
        pos.y = pos
            .y
            .clamp(PLAYER_NOSE_MARGIN, bounds.height() - PLAYER_TAIL_MARGIN);
    }

    pub fn take_damage(&mut self, amount: u32) -> DamageOutcome {
        if self.shield_active() {
            self.shield_time = 0.0;
            return DamageOutcome::Absorbed;
        }
        let dealt = amount.min(self.health);
        self.health -= dealt;
        if dealt > 0 {
            self.weapon_level = self.weapon_level.saturating_sub(1);
        }
        DamageOutcome::Dealt(dealt)
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = self
            .health
            .saturating_add(amount)
            .min(self.max_health.get());
    }

    pub fn activate_shield(&mut self, duration: f32) {
        self.shield_time = duration.max(0.0);
    }

    pub fn upgrade_weapon(&mut self) {
        self.weapon_level = (self.weapon_level + 1).min(MAX_WEAPON_LEVEL);
    }
}

/// Validate a configured max health: 1 through `u32::MAX`
pub fn checked_max_health(value: i64) -> Result<NonZeroU32, ConfigError> {
    if value <= 0 {
        return Err(ConfigError::NonPositiveMaxHealth { value });
    }
    u32::try_from(value)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(ConfigError::MaxHealthOutOfRange { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bounds() -> PlayBounds {
        PlayBounds::new(800.0, 600.0).unwrap()
    }

    fn player() -> Player {
        Player::try_new(Vec2::new(400.0, 520.0), PLAYER_MAX_HEALTH as i64).unwrap()
    }

    fn held(fire: bool) -> TickInput {
        TickInput {
            fire,
            ..Default::default()
        }
    }

    /// Hold fire for `seconds`, release, and collect what came out
    fn hold_and_release(p: &mut Player, seconds: f32) -> (Vec<ShotKind>, Vec<Projectile>) {
        let mut shots = Vec::new();
        let mut kinds = Vec::new();
        let steps = (seconds / SIM_DT).round() as usize;
        for _ in 0..steps {
            kinds.extend(p.update(&held(true), &bounds(), SIM_DT, &mut shots));
        }
        kinds.extend(p.update(&held(false), &bounds(), SIM_DT, &mut shots));
        (kinds, shots)
    }

    #[test]
    fn test_try_new_rejects_non_positive_health() {
        assert_eq!(
            Player::try_new(Vec2::ZERO, 0).unwrap_err(),
            ConfigError::NonPositiveMaxHealth { value: 0 }
        );
        assert!(Player::try_new(Vec2::ZERO, -4).is_err());
        assert_eq!(
            Player::try_new(Vec2::ZERO, i64::from(u32::MAX) + 1).unwrap_err(),
            ConfigError::MaxHealthOutOfRange {
                value: i64::from(u32::MAX) + 1
            }
        );
        assert_eq!(Player::try_new(Vec2::ZERO, 3).unwrap().health(), 3);
    }

    #[test]
    fn test_diagonal_speed_matches_axial() {
        let mut p = player();
        p.body.pos = Vec2::new(400.0, 300.0);
        let input = TickInput {
            up: true,
            right: true,
            ..Default::default()
        };
        p.update(&input, &bounds(), 0.01, &mut Vec::new());
        assert!((p.body.vel.length() - PLAYER_SPEED).abs() < 0.01);
        assert!(p.body.vel.x > 0.0 && p.body.vel.y < 0.0);
    }

    #[test]
    fn test_no_input_means_no_motion() {
        let mut p = player();
        let start = p.body.pos;
        p.update(&TickInput::default(), &bounds(), 0.1, &mut Vec::new());
        assert_eq!(p.body.vel, Vec2::ZERO);
        assert_eq!(p.body.pos, start);
    }

    #[test]
    fn test_position_clamped_with_wing_margin() {
        let mut p = player();
        let input = TickInput {
            left: true,
            up: true,
            ..Default::default()
        };
        for _ in 0..200 {
            p.update(&input, &bounds(), 0.05, &mut Vec::new());
        }
        assert_eq!(p.body.pos, Vec2::new(PLAYER_WING_MARGIN, PLAYER_NOSE_MARGIN));

        let input = TickInput {
            right: true,
            down: true,
            ..Default::default()
        };
        for _ in 0..200 {
            p.update(&input, &bounds(), 0.05, &mut Vec::new());
        }
        assert_eq!(
            p.body.pos,
            Vec2::new(800.0 - PLAYER_WING_MARGIN, 600.0 - PLAYER_TAIL_MARGIN)
        );
    }

    #[test]
    fn test_full_charge_fires_one_volley_and_no_normal_shot() {
        let mut p = player();
        let (kinds, shots) = hold_and_release(&mut p, 1.2);
        assert_eq!(kinds, vec![ShotKind::Charged]);
        assert_eq!(shots.len(), CHARGED_VOLLEY_SIZE);
        assert!(shots.iter().all(|s| s.body.vel.y <= -CHARGED_SHOT_SPEED + 0.01));
        assert_eq!(p.fire_state(), FireState::Idle);
    }

    #[test]
    fn test_exactly_one_second_counts_as_full_charge() {
        let mut p = player();
        let (kinds, _) = hold_and_release(&mut p, 1.0);
        assert_eq!(kinds, vec![ShotKind::Charged]);
    }

    #[test]
    fn test_short_press_fires_one_normal_shot() {
        let mut p = player();
        let (kinds, shots) = hold_and_release(&mut p, 0.3);
        assert_eq!(kinds, vec![ShotKind::Normal]);
        assert_eq!(shots.len(), 1);
        assert_eq!(p.charge_fraction(), 0.0);
    }

    #[test]
    fn test_release_during_cooldown_fires_nothing() {
        let mut p = player();
        let mut shots = Vec::new();
        p.update(&held(true), &bounds(), SIM_DT, &mut shots);
        assert_eq!(
            p.update(&held(false), &bounds(), SIM_DT, &mut shots),
            Some(ShotKind::Normal)
        );
        // Cooldown is 0.15s; tap again immediately
        p.update(&held(true), &bounds(), SIM_DT, &mut shots);
        assert_eq!(p.update(&held(false), &bounds(), SIM_DT, &mut shots), None);
        assert_eq!(shots.len(), 1);
        assert_eq!(p.fire_state(), FireState::Idle);
    }

    #[test]
    fn test_holding_never_fires() {
        let mut p = player();
        let mut shots = Vec::new();
        for _ in 0..120 {
            assert_eq!(p.update(&held(true), &bounds(), SIM_DT, &mut shots), None);
        }
        assert!(shots.is_empty());
        assert_eq!(p.charge_fraction(), 1.0);
    }

    #[test]
    fn test_weapon_level_adds_side_shots() {
        let mut p = player();
        p.upgrade_weapon();
        let (_, shots) = hold_and_release(&mut p, 0.1);
        assert_eq!(shots.len(), 3);
        let xs: Vec<f32> = shots.iter().map(|s| s.body.vel.x).collect();
        assert_eq!(xs, vec![0.0, -SIDE_SHOT_SPEED_X, SIDE_SHOT_SPEED_X]);
    }

    #[test]
    fn test_weapon_level_caps_at_two() {
        let mut p = player();
        for _ in 0..5 {
            p.upgrade_weapon();
        }
        assert_eq!(p.weapon_level(), MAX_WEAPON_LEVEL);
    }

    #[test]
    fn test_damage_drops_weapon_level() {
        let mut p = player();
        p.upgrade_weapon();
        p.upgrade_weapon();
        assert_eq!(p.take_damage(1), DamageOutcome::Dealt(1));
        assert_eq!(p.weapon_level(), 1);
        assert_eq!(p.health(), 4);
        assert_eq!(p.take_damage(0), DamageOutcome::Dealt(0));
        assert_eq!(p.weapon_level(), 1);
    }

    #[test]
    fn test_no_downgrade_without_health_lost() {
        let mut p = player();
        p.take_damage(p.max_health());
        p.upgrade_weapon();
        assert_eq!(p.take_damage(1), DamageOutcome::Dealt(0));
        assert_eq!(p.weapon_level(), 1);
    }

    #[test]
    fn test_shield_absorbs_and_collapses() {
        let mut p = player();
        p.upgrade_weapon();
        p.activate_shield(SHIELD_DURATION);
        assert_eq!(p.take_damage(3), DamageOutcome::Absorbed);
        assert_eq!(p.health(), PLAYER_MAX_HEALTH);
        assert_eq!(p.weapon_level(), 1);
        assert!(!p.shield_active());
    }

    #[test]
    fn test_shield_expires() {
        let mut p = player();
        p.activate_shield(0.5);
        for _ in 0..40 {
            p.update(&TickInput::default(), &bounds(), SIM_DT, &mut Vec::new());
        }
        assert!(!p.shield_active());
    }

    #[test]
    fn test_heal_capped_at_max() {
        let mut p = player();
        p.take_damage(3);
        p.heal(HEAL_AMOUNT);
        assert_eq!(p.health(), 4);
        p.heal(HEAL_AMOUNT);
        assert_eq!(p.health(), PLAYER_MAX_HEALTH);
    }

    proptest! {
        #[test]
        fn prop_unshielded_damage_floors_at_zero(start_damage in 0u32..6, n in 0u32..20) {
            let mut p = player();
            p.take_damage(start_damage);
            let before = p.health();
            p.take_damage(n);
            prop_assert_eq!(p.health(), before.saturating_sub(n));
        }

        #[test]
        fn prop_shielded_damage_leaves_health(n in 0u32..20) {
            let mut p = player();
            p.activate_shield(SHIELD_DURATION);
            p.take_damage(n);
            prop_assert_eq!(p.health(), PLAYER_MAX_HEALTH);
            prop_assert!(!p.shield_active());
        }
    }
}
