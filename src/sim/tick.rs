//! Per-frame simulation step
//!
//! Advances the world by one clamped delta. Within a step the order is
//! fixed: player, spawning, boss trigger, entity updates, collisions,
//! combo decay, pruning, difficulty.

use glam::Vec2;

use super::player::DamageOutcome;
use super::powerup::PowerUpKind;
use super::projectile::Owner;
use super::state::{GameEvent, GameMode, GameState};
use crate::clamp_frame_dt;
use crate::consts::*;
use crate::palette;

/// Input snapshot for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire held
    pub fire: bool,
    /// Pause / quit edge
    pub pause: bool,
    /// Start edge
    pub start: bool,
}

impl TickInput {
    /// Raw 8-way direction; opposite keys cancel. Not normalized.
    pub fn direction(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    let dt = clamp_frame_dt(dt, state.max_frame_dt());

    // Background scrolls in every mode
    state.starfield.update(dt);

    if input.start && matches!(state.mode, GameMode::Menu | GameMode::GameOver) {
        state.start_run();
        return;
    }

    if input.pause {
        match state.mode {
            GameMode::Playing => {
                state.mode = GameMode::Paused;
                log::debug!("Paused");
                return;
            }
            GameMode::Paused => {
                state.mode = GameMode::Playing;
                log::debug!("Resumed");
            }
            GameMode::Menu | GameMode::GameOver => {
                state.quit_requested = true;
                return;
            }
        }
    }

    if state.mode != GameMode::Playing {
        return;
    }

    step_playing(state, input, dt);
}

fn step_playing(state: &mut GameState, input: &TickInput, dt: f32) {
    debug_assert!(state.player.is_some(), "playing without a player");
    state.run_time += dt;

    // 1. Player
    let bounds = *state.bounds();
    let Some(player) = state.player.as_mut() else {
        return;
    };
    if let Some(kind) = player.update(input, &bounds, dt, &mut state.projectiles) {
        state.events.push(GameEvent::ShotFired(kind));
    }

    // 2. Death check
    if player.is_dead() {
        game_over(state);
        return;
    }

    // 3. Regular spawns pause while the boss is out
    if state.boss.is_none() {
        state.spawn_timer -= dt;
        if state.spawn_timer <= 0.0 {
            state.spawn_enemy();
            state.spawn_timer = BASE_SPAWN_INTERVAL / state.difficulty;
        }
    }

    // 4. Boss trigger, once per run
    if !state.boss_spawned && state.score >= BOSS_SCORE_THRESHOLD {
        state.spawn_boss();
        state.difficulty = DIFFICULTY_CEILING;
    }

    // 5. Advance everything else
    advance_entities(state, dt);

    // 6. Collisions
    resolve_collisions(state);

    // 7. Combo decay
    if state.combo_timer > 0.0 {
        state.combo_timer -= dt;
        if state.combo_timer <= 0.0 {
            state.combo_timer = 0.0;
            state.combo = 0;
        }
    }

    // 8. Prune
    prune_inactive(state);

    // 9. Difficulty
    state.difficulty = (state.difficulty + dt * DIFFICULTY_RATE).min(DIFFICULTY_CEILING);
}

fn game_over(state: &mut GameState) {
    state.mode = GameMode::GameOver;
    if let Some(pos) = state.player.as_ref().map(|p| p.body.pos) {
        state.explode(pos, 50, palette::DEATH_BURST);
    }
    let new_high_score = state.high_score.submit(state.score);
    state.events.push(GameEvent::GameOver {
        score: state.score,
        new_high_score,
    });
    log::info!(
        "Game over: score {} after {:.1}s",
        state.score,
        state.run_time
    );
}

fn advance_entities(state: &mut GameState, dt: f32) {
    let bounds = *state.bounds();

    for enemy in &mut state.enemies {
        if enemy.update(dt, &bounds, &mut state.projectiles) {
            log::debug!("{:?} #{} escaped", enemy.kind, enemy.id);
            state.events.push(GameEvent::EnemyEscaped {
                id: enemy.id,
                kind: enemy.kind,
            });
        }
    }

    let enraged_at = match state.boss.as_mut() {
        Some(boss) => boss
            .update(dt, &bounds, &mut state.rng, &mut state.projectiles)
            .then_some(boss.body.pos),
        None => None,
    };
    if let Some(pos) = enraged_at {
        log::info!("Boss enraged");
        state.explode(pos, 50, palette::ENRAGE_BURST);
        state.events.push(GameEvent::BossEnraged);
    }

    for shot in &mut state.projectiles {
        shot.update(dt, &bounds);
    }
    for particle in &mut state.particles {
        particle.update(dt);
    }
    for powerup in &mut state.powerups {
        powerup.update(dt, &bounds);
    }
}

/// Resolve every interaction for this step, in priority order
pub fn resolve_collisions(state: &mut GameState) {
    collect_powerups(state);
    player_shots_vs_boss(state);
    player_shots_vs_enemies(state);
    hostile_shots_vs_player(state);
    boss_contact(state);
    enemy_contact(state);
}

fn collect_powerups(state: &mut GameState) {
    for i in 0..state.powerups.len() {
        let Some(player) = state.player.as_mut() else {
            return;
        };
        let pickup = &mut state.powerups[i];
        if !pickup.body.overlaps(&player.body) {
            continue;
        }
        pickup.body.deactivate();
        let (kind, pos) = (pickup.kind, pickup.body.pos);

        match kind {
            PowerUpKind::WeaponUpgrade => player.upgrade_weapon(),
            PowerUpKind::HealthRestore => player.heal(HEAL_AMOUNT),
            PowerUpKind::Shield => player.activate_shield(SHIELD_DURATION),
        }
        state.add_score(kind.score_bonus());
        state.explode(pos, 20, kind.color());
        state.events.push(GameEvent::PowerUpCollected(kind));
        log::debug!("Picked up {kind:?}");
    }
}

fn player_shots_vs_boss(state: &mut GameState) {
    for i in 0..state.projectiles.len() {
        let Some(boss) = state.boss.as_mut() else {
            return;
        };
        let shot = &mut state.projectiles[i];
        if shot.owner != Owner::Player || !shot.body.overlaps(&boss.body) {
            continue;
        }
        shot.body.deactivate();
        boss.take_damage(shot.damage);
        let hit = shot.body.pos;
        let defeated = boss.is_defeated();
        let boss_pos = boss.body.pos;

        state.explode(hit, 5, palette::BOSS_HIT_SPARK);
        if defeated {
            state.boss = None;
            state.add_score(BOSS_DEFEAT_SCORE);
            state.explode(boss_pos, 200, palette::BOSS_DEATH_BURST);
            state.difficulty = DIFFICULTY_AFTER_BOSS;
            state.events.push(GameEvent::BossDefeated {
                points: BOSS_DEFEAT_SCORE,
            });
            log::info!("Boss defeated, score {}", state.score);
        }
    }
}

fn player_shots_vs_enemies(state: &mut GameState) {
    for i in 0..state.projectiles.len() {
        let shot = &state.projectiles[i];
        if shot.owner != Owner::Player || !shot.body.active {
            continue;
        }
        let Some(target) = state
            .enemies
            .iter()
            .position(|e| e.body.overlaps(&shot.body))
        else {
            continue;
        };
        let (damage, hit) = (shot.damage, shot.body.pos);
        state.projectiles[i].body.deactivate();

        let enemy = &mut state.enemies[target];
        enemy.take_damage(damage);
        let killed = !enemy.body.active;
        let (id, kind, points, pos) = (enemy.id, enemy.kind, enemy.score_value, enemy.body.pos);

        state.explode(hit, 5, palette::HIT_SPARK);
        if killed {
            state.add_score(points);
            state.explode(pos, 20, palette::ENEMY_BURST);
            state.roll_drop(kind, pos);
            state.events.push(GameEvent::EnemyKilled { id, kind, points });
        }
    }
}

fn hostile_shots_vs_player(state: &mut GameState) {
    for i in 0..state.projectiles.len() {
        let Some(player) = state.player.as_mut() else {
            return;
        };
        let shot = &mut state.projectiles[i];
        if shot.owner != Owner::Hostile || !shot.body.overlaps(&player.body) {
            continue;
        }
        shot.body.deactivate();
        let outcome = player.take_damage(shot.damage);
        let pos = player.body.pos;
        state.explode(pos, 10, palette::PLAYER_HIT_BURST);
        state.events.push(GameEvent::PlayerHit(outcome));
    }
}

/// Touching the boss hurts every step the overlap lasts
fn boss_contact(state: &mut GameState) {
    let (Some(player), Some(boss)) = (state.player.as_mut(), state.boss.as_ref()) else {
        return;
    };
    if player.body.overlaps(&boss.body) {
        let outcome = player.take_damage(1);
        state.events.push(GameEvent::PlayerHit(outcome));
    }
}

/// Ramming an enemy destroys it, unscored, at a cost of 2 health
fn enemy_contact(state: &mut GameState) {
    for i in 0..state.enemies.len() {
        let Some(player) = state.player.as_mut() else {
            return;
        };
        let enemy = &mut state.enemies[i];
        if !enemy.body.overlaps(&player.body) {
            continue;
        }
        enemy.body.deactivate();
        let pos = enemy.body.pos;
        let outcome = player.take_damage(2);
        state.explode(pos, 25, palette::COLLISION_BURST);
        state.events.push(GameEvent::PlayerHit(outcome));
    }
}

fn prune_inactive(state: &mut GameState) {
    state.enemies.retain(|e| e.body.active);
    state.projectiles.retain(|p| p.body.active);
    state.particles.retain(|p| p.body.active);
    state.powerups.retain(|p| p.body.active);
}

/// True if the outcome actually cost health
pub fn was_damaging(outcome: DamageOutcome) -> bool {
    matches!(outcome, DamageOutcome::Dealt(n) if n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::HighScore;
    use crate::settings::Settings;
    use crate::sim::boss::{Boss, BossPhase};
    use crate::sim::enemy::{Enemy, EnemyKind};
    use crate::sim::powerup::PowerUp;
    use crate::sim::projectile::Projectile;
    use proptest::prelude::*;

    fn playing(seed: u64) -> GameState {
        let mut state = GameState::new(&Settings::default(), seed).unwrap();
        state.start_run();
        // Keep regular spawns out of the way unless a test wants them
        state.spawn_timer = 1000.0;
        state.events.clear();
        state
    }

    fn player_pos(state: &GameState) -> Vec2 {
        state.player.as_ref().unwrap().body.pos
    }

    #[test]
    fn test_direction_cancels_opposites() {
        let input = TickInput {
            up: true,
            down: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(input.direction(), Vec2::new(1.0, 0.0));
        let input = TickInput {
            up: true,
            left: true,
            ..Default::default()
        };
        assert_eq!(input.direction(), Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn test_start_from_menu() {
        let mut state = GameState::new(&Settings::default(), 7).unwrap();
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.mode, GameMode::Menu);

        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &start, SIM_DT);
        assert_eq!(state.mode, GameMode::Playing);
        assert!(state.player.is_some());
        assert_eq!(state.events, vec![GameEvent::RunStarted]);
    }

    #[test]
    fn test_pause_in_menu_requests_quit() {
        let mut state = GameState::new(&Settings::default(), 7).unwrap();
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, SIM_DT);
        assert!(state.quit_requested);
        assert_eq!(state.mode, GameMode::Menu);
    }

    #[test]
    fn test_pause_freezes_world() {
        let mut state = playing(3);
        state.spawn_enemy();
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, SIM_DT);
        assert_eq!(state.mode, GameMode::Paused);

        let enemy_pos = state.enemies[0].body.pos;
        let (score, difficulty, time) = (state.score, state.difficulty, state.run_time);
        let star_y = state.starfield.stars()[0].y;
        let held = TickInput {
            right: true,
            fire: true,
            ..Default::default()
        };
        for _ in 0..30 {
            tick(&mut state, &held, SIM_DT);
        }
        assert_eq!(state.enemies[0].body.pos, enemy_pos);
        assert_eq!(player_pos(&state), Vec2::new(400.0, 520.0));
        assert_eq!((state.score, state.difficulty, state.run_time), (score, difficulty, time));
        assert_ne!(state.starfield.stars()[0].y, star_y, "stars keep moving");

        tick(&mut state, &pause, SIM_DT);
        assert_eq!(state.mode, GameMode::Playing);
        assert!(state.run_time > time);
    }

    #[test]
    fn test_frame_dt_is_clamped() {
        let mut state = playing(1);
        tick(&mut state, &TickInput::default(), 10.0);
        assert!((state.run_time - MAX_FRAME_DT).abs() < 1e-6);
    }

    #[test]
    fn test_spawner_uses_difficulty() {
        let mut state = playing(1);
        state.spawn_timer = 0.001;
        state.difficulty = 2.0;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.enemies.len(), 1);
        assert!((state.spawn_timer - BASE_SPAWN_INTERVAL / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_enemy_escape_not_scored() {
        let mut state = playing(1);
        state.add_score(100);
        let (score, combo) = (state.score, state.combo);
        state
            .enemies
            .push(Enemy::new(99, EnemyKind::Drifter, Vec2::new(100.0, 700.0)));
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.enemies.is_empty());
        assert_eq!((state.score, state.combo), (score, combo));
        assert!(state.events.contains(&GameEvent::EnemyEscaped {
            id: 99,
            kind: EnemyKind::Drifter
        }));
    }

    #[test]
    fn test_drifter_killed_in_one_pass() {
        let mut state = playing(1);
        let pos = Vec2::new(400.0, 300.0);
        state.enemies.push(Enemy::new(5, EnemyKind::Drifter, pos));
        state
            .projectiles
            .push(Projectile::player(pos, Vec2::new(0.0, -500.0)));

        resolve_collisions(&mut state);

        assert!(!state.enemies[0].body.active);
        assert!(!state.projectiles[0].body.active);
        assert_eq!((state.score, state.combo), (100, 1));
        assert!(state.events.contains(&GameEvent::EnemyKilled {
            id: 5,
            kind: EnemyKind::Drifter,
            points: 100
        }));
        // Hit spark plus kill burst
        assert_eq!(state.particles.len(), 25);
    }

    #[test]
    fn test_shot_hits_only_one_enemy() {
        let mut state = playing(1);
        let pos = Vec2::new(400.0, 300.0);
        state.enemies.push(Enemy::new(1, EnemyKind::Bomber, pos));
        state.enemies.push(Enemy::new(2, EnemyKind::Bomber, pos));
        state.projectiles.push(Projectile::player(pos, Vec2::ZERO));
        resolve_collisions(&mut state);
        assert_eq!(state.enemies[0].health(), 3);
        assert_eq!(state.enemies[1].health(), 4);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_combo_lapses_after_window() {
        let mut state = playing(1);
        state.add_score(100);
        for _ in 0..170 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.combo, 1);
        for _ in 0..20 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.combo, 0);
        state.add_score(100);
        assert_eq!(state.score, 200, "multiplier restarts at 1");
    }

    #[test]
    fn test_hostile_shot_hits_player() {
        let mut state = playing(1);
        let pos = player_pos(&state);
        state.projectiles.push(Projectile::hostile(pos, Vec2::ZERO));
        resolve_collisions(&mut state);
        assert_eq!(state.player.as_ref().unwrap().health(), PLAYER_MAX_HEALTH - 1);
        assert!(state.events.contains(&GameEvent::PlayerHit(DamageOutcome::Dealt(1))));
        assert_eq!(state.particles.len(), 10);
    }

    #[test]
    fn test_shield_absorbs_hostile_shot() {
        let mut state = playing(1);
        let pos = player_pos(&state);
        state.player.as_mut().unwrap().activate_shield(SHIELD_DURATION);
        state.projectiles.push(Projectile::hostile(pos, Vec2::ZERO));
        resolve_collisions(&mut state);
        let player = state.player.as_ref().unwrap();
        assert_eq!(player.health(), PLAYER_MAX_HEALTH);
        assert!(!player.shield_active());
        assert!(!was_damaging(DamageOutcome::Absorbed));
    }

    #[test]
    fn test_ramming_enemy() {
        let mut state = playing(1);
        let pos = player_pos(&state);
        state.enemies.push(Enemy::new(1, EnemyKind::Bomber, pos));
        resolve_collisions(&mut state);
        assert!(!state.enemies[0].body.active);
        assert_eq!(state.player.as_ref().unwrap().health(), PLAYER_MAX_HEALTH - 2);
        assert_eq!(state.score, 0, "ramming is not a kill");
        assert_eq!(state.particles.len(), 25);
    }

    #[test]
    fn test_powerup_pickup_effects() {
        let mut state = playing(1);
        let pos = player_pos(&state);
        state.player.as_mut().unwrap().take_damage(3);
        state
            .powerups
            .push(PowerUp::new(PowerUpKind::HealthRestore, pos));
        state
            .powerups
            .push(PowerUp::new(PowerUpKind::WeaponUpgrade, pos));
        resolve_collisions(&mut state);

        let player = state.player.as_ref().unwrap();
        assert_eq!(player.health(), PLAYER_MAX_HEALTH - 1);
        assert_eq!(player.weapon_level(), 1);
        // 200 at x1, then 500 at x2
        assert_eq!(state.score, 1200);
        assert!(state.powerups.iter().all(|p| !p.body.active));
    }

    #[test]
    fn test_shield_pickup() {
        let mut state = playing(1);
        let pos = player_pos(&state);
        state.powerups.push(PowerUp::new(PowerUpKind::Shield, pos));
        resolve_collisions(&mut state);

        let player = state.player.as_ref().unwrap();
        assert!(player.shield_active());
        assert_eq!(player.shield_time(), SHIELD_DURATION);
        assert_eq!(state.score, 300);
        assert_eq!(state.particles.len(), 20);
        assert_eq!(
            state.events,
            vec![GameEvent::PowerUpCollected(PowerUpKind::Shield)]
        );
    }

    #[test]
    fn test_kill_can_drop_powerup() {
        let mut state = playing(9);
        let pos = Vec2::new(400.0, 300.0);
        let kills = 300;
        for i in 0..kills {
            let mut bomber = Enemy::new(i, EnemyKind::Bomber, pos);
            bomber.take_damage(bomber.max_health() - 1);
            state.enemies.push(bomber);
            state.projectiles.push(Projectile::player(pos, Vec2::ZERO));
            resolve_collisions(&mut state);
            assert!(!state.enemies[0].body.active);
            state.enemies.clear();
            state.projectiles.clear();
        }

        let drops = state.powerups.len();
        assert!(drops > 0 && drops < kills as usize, "{drops} drops");
        assert!(state.powerups.iter().all(|p| p.body.pos == pos));
        for kind in PowerUpKind::ALL {
            assert!(state.powerups.iter().any(|p| p.kind == kind), "no {kind:?}");
        }
    }

    #[test]
    fn test_boss_enrage_in_world() {
        let mut state = playing(1);
        let mut boss = Boss::new(Vec2::new(400.0, BOSS_HOVER_Y));
        boss.take_damage(BOSS_MAX_HEALTH / 2 + 1);
        state.boss = Some(boss);

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.events, vec![GameEvent::BossEnraged]);
        assert_eq!(state.particles.len(), 50);
        assert_eq!(state.boss.as_ref().unwrap().phase, BossPhase::Phase2);

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(!state.events.contains(&GameEvent::BossEnraged));
    }

    #[test]
    fn test_boss_triggers_once() {
        let mut state = playing(1);
        state.score = BOSS_SCORE_THRESHOLD;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.boss.is_some());
        assert!(state.boss_spawned);
        assert_eq!(state.difficulty, DIFFICULTY_CEILING);
        assert!(state.events.contains(&GameEvent::BossSpawned));

        // No regular spawns while the boss is out
        state.spawn_timer = 0.0;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.enemies.is_empty());

        state.boss = None;
        state.spawn_timer = 1000.0;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.boss.is_none(), "boss appears once per run");
    }

    #[test]
    fn test_boss_defeat() {
        let mut state = playing(1);
        state.spawn_boss();
        state.difficulty = DIFFICULTY_CEILING;
        let boss = state.boss.as_mut().unwrap();
        boss.take_damage(BOSS_MAX_HEALTH - 1);
        let pos = boss.body.pos;
        state.projectiles.push(Projectile::player(pos, Vec2::ZERO));
        state.projectiles.push(Projectile::player(pos, Vec2::ZERO));

        resolve_collisions(&mut state);

        assert!(state.boss.is_none());
        assert_eq!(state.score, BOSS_DEFEAT_SCORE);
        assert_eq!(state.difficulty, DIFFICULTY_AFTER_BOSS);
        assert!(state.events.contains(&GameEvent::BossDefeated {
            points: BOSS_DEFEAT_SCORE
        }));
        assert!(!state.projectiles[0].body.active);
        assert!(state.projectiles[1].body.active, "second shot had nothing to hit");
    }

    #[test]
    fn test_boss_contact_is_continuous() {
        let mut state = playing(1);
        state.spawn_boss();
        let pos = player_pos(&state);
        state.boss.as_mut().unwrap().body.pos = pos;
        resolve_collisions(&mut state);
        resolve_collisions(&mut state);
        assert_eq!(state.player.as_ref().unwrap().health(), PLAYER_MAX_HEALTH - 2);
    }

    #[test]
    fn test_game_over_records_high_score() {
        let mut state = playing(1).with_high_score(HighScore::in_memory(500));
        state.score = 700;
        state.player.as_mut().unwrap().take_damage(PLAYER_MAX_HEALTH);
        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.mode, GameMode::GameOver);
        assert_eq!(state.high_score.best(), 700);
        assert_eq!(
            state.events,
            vec![GameEvent::GameOver {
                score: 700,
                new_high_score: true
            }]
        );

        // World is frozen afterwards
        let particles = state.particles.len();
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.mode, GameMode::GameOver);
        assert_eq!(state.particles.len(), particles);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = playing(1);
        state.player.as_mut().unwrap().take_damage(PLAYER_MAX_HEALTH);
        tick(&mut state, &TickInput::default(), SIM_DT);
        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &start, SIM_DT);
        assert_eq!(state.mode, GameMode::Playing);
        assert_eq!(state.player.as_ref().unwrap().health(), PLAYER_MAX_HEALTH);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_determinism() {
        let script = |step: u32| TickInput {
            left: step % 120 < 60,
            right: step % 120 >= 60,
            fire: step % 20 < 10,
            ..Default::default()
        };

        let run = |seed: u64| {
            let mut state = GameState::new(&Settings::default(), seed).unwrap();
            state.start_run();
            for step in 0..1200 {
                tick(&mut state, &script(step), SIM_DT);
            }
            state
        };

        let a = run(42);
        let b = run(42);
        assert_eq!(a.score, b.score);
        assert_eq!(a.mode, b.mode);
        assert_eq!(a.enemies.len(), b.enemies.len());
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.id, eb.id);
            assert_eq!(ea.body.pos, eb.body.pos);
        }
        assert_eq!(a.particles.len(), b.particles.len());
    }

    #[test]
    fn test_long_run_invariants() {
        let mut state = playing(9);
        state.spawn_timer = FIRST_SPAWN_DELAY;
        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        for step in 0..3600 {
            let input = TickInput {
                fire: step % 2 == 0,
                left: (step / 90) % 2 == 0,
                right: (step / 90) % 2 == 1,
                ..input
            };
            tick(&mut state, &input, SIM_DT);
            assert!(state.particles.len() <= state.max_particles());
            assert!(state.difficulty <= DIFFICULTY_CEILING);
            assert!(state.enemies.iter().all(|e| e.body.active));
            assert!(state.projectiles.iter().all(|p| p.body.active));
            if state.mode == GameMode::GameOver {
                break;
            }
        }
    }

    proptest! {
        #[test]
        fn prop_difficulty_monotonic_and_capped(
            dts in proptest::collection::vec(0.0f32..0.2, 1..300),
        ) {
            let mut state = playing(5);
            let mut last = state.difficulty;
            for dt in dts {
                tick(&mut state, &TickInput::default(), dt);
                prop_assert!(state.difficulty >= last);
                prop_assert!(state.difficulty <= DIFFICULTY_CEILING);
                last = state.difficulty;
            }
        }
    }
}
