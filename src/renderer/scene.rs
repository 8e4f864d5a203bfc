//! Scene description: world snapshot to primitives
//!
//! Back to front: stars, power-ups, shots, enemies, boss, player, particles,
//! then any mode overlay. Inactive entities are skipped.

use glam::Vec2;

use super::RenderSink;
use super::shapes::{polygon_outline, ring_outline};
use crate::palette::{self, Color, faded, rgba8, shaded};
use crate::sim::{
    Boss, BossPhase, Enemy, EnemyKind, GameMode, GameState, Player, PowerUp, PowerUpKind,
    Projectile,
};

const HEALTH_BAR_BG: Color = rgba8(255, 255, 255, 100);
const HEALTH_BAR_FILL: Color = rgba8(100, 255, 100, 255);
const BOMB_BAY: Color = rgba8(50, 50, 50, 255);

/// Emit the whole frame into `sink`
pub fn draw_frame<S: RenderSink + ?Sized>(state: &GameState, sink: &mut S) {
    let bounds = state.bounds();
    let screen_center = bounds.center();
    let screen_half = Vec2::new(bounds.width(), bounds.height()) / 2.0;

    sink.fill_rect(screen_center, screen_half, palette::BACKGROUND);

    for star in state.starfield.stars() {
        let pos = Vec2::new(star.x, star.y);
        if star.size <= 1 {
            sink.point(pos, star.color());
        } else {
            let half = star.size as f32 / 2.0;
            sink.fill_rect(pos + Vec2::splat(half), Vec2::splat(half), star.color());
        }
    }

    if state.mode == GameMode::Menu {
        return;
    }

    for powerup in state.powerups.iter().filter(|p| p.body.active) {
        draw_powerup(sink, powerup);
    }
    for shot in state.projectiles.iter().filter(|p| p.body.active) {
        draw_projectile(sink, shot);
    }
    for enemy in state.enemies.iter().filter(|e| e.body.active) {
        draw_enemy(sink, enemy);
    }
    if let Some(boss) = &state.boss {
        draw_boss(sink, boss, bounds.width());
    }
    if let Some(player) = state.player.as_ref().filter(|p| !p.is_dead()) {
        draw_player(sink, player);
    }
    for particle in state.particles.iter().filter(|p| p.body.active) {
        sink.fill_rect(
            particle.body.pos,
            particle.body.half_extents,
            particle.current_color(),
        );
    }

    match state.mode {
        GameMode::Paused => sink.fill_rect(screen_center, screen_half, palette::PAUSE_OVERLAY),
        GameMode::GameOver => {
            sink.fill_rect(screen_center, screen_half, palette::GAME_OVER_OVERLAY);
            sink.fill_rect(
                screen_center,
                Vec2::new(screen_half.x * 0.6, 24.0),
                palette::GAME_OVER_BANNER,
            );
        }
        GameMode::Menu | GameMode::Playing => {}
    }
}

fn draw_player<S: RenderSink + ?Sized>(sink: &mut S, player: &Player) {
    let pos = player.body.pos;
    let color = player.body.color;

    // Hull and nose
    sink.fill_rect(pos, Vec2::new(15.0, 20.0), color);
    sink.fill_rect(pos + Vec2::new(0.0, -22.5), Vec2::new(8.0, 7.5), color);

    // Wings
    for side in [-1.0f32, 1.0] {
        sink.fill_rect(
            pos + Vec2::new(side * 19.0, 10.0),
            Vec2::new(6.0, 10.0),
            palette::PLAYER_WING,
        );
    }

    // Engine glow
    let glow = (150.0 + 100.0 * player.engine_flicker.sin()) / 255.0;
    sink.fill_rect(
        pos + Vec2::new(0.0, 20.0),
        Vec2::new(8.0, 5.0),
        [1.0, glow.clamp(0.0, 1.0), 50.0 / 255.0, 1.0],
    );

    if player.shield_active() {
        ring_outline(sink, pos, 35.0, palette::SHIELD, 24);
        ring_outline(sink, pos, 34.0, palette::SHIELD, 24);
    }

    let charge = player.charge_fraction();
    if charge > 0.0 {
        let width = 30.0;
        let left = pos + Vec2::new(-width / 2.0, 32.0);
        sink.line(left, left + Vec2::new(width * charge, 0.0), palette::WHITE);
    }
}

fn draw_enemy<S: RenderSink + ?Sized>(sink: &mut S, enemy: &Enemy) {
    let pos = enemy.body.pos;
    let color = enemy.body.color;
    match enemy.kind {
        EnemyKind::Drifter => {
            sink.fill_rect(pos, Vec2::splat(12.0), color);
            sink.fill_rect(pos, Vec2::splat(6.0), shaded(color, 0.5));
        }
        EnemyKind::Hunter => {
            sink.fill_rect(pos, Vec2::new(15.0, 12.0), color);
            for side in [-1.0f32, 1.0] {
                sink.fill_rect(
                    pos + Vec2::new(side * 16.0, 2.5),
                    Vec2::new(4.0, 7.5),
                    color,
                );
            }
            let pulse = 0.5 + 0.5 * (enemy.anim * 5.0).sin();
            sink.fill_rect(
                pos + Vec2::new(0.0, -5.0),
                Vec2::splat(3.0),
                [1.0, pulse, 1.0, 1.0],
            );
        }
        EnemyKind::Bomber => {
            sink.fill_rect(pos, Vec2::new(22.0, 18.0), color);
            sink.fill_rect(
                pos + Vec2::new(0.0, -19.0),
                Vec2::new(12.0, 5.0),
                shaded(color, 1.2),
            );
            for i in -1..=1 {
                sink.fill_rect(
                    pos + Vec2::new(i as f32 * 12.0, 18.0),
                    Vec2::splat(4.0),
                    BOMB_BAY,
                );
            }
        }
    }

    if enemy.max_health() > 1 {
        health_bar(
            sink,
            pos + Vec2::new(0.0, -enemy.body.half_extents.y - 8.0),
            20.0,
            enemy.health_fraction(),
        );
    }
}

fn draw_boss<S: RenderSink + ?Sized>(sink: &mut S, boss: &Boss, screen_width: f32) {
    let pos = boss.body.pos;
    let half = boss.body.half_extents;

    sink.fill_rect(pos, half, boss.body.color);
    let core = match boss.phase {
        BossPhase::Phase1 => palette::BOSS_CORE_CALM,
        BossPhase::Phase2 => palette::BOSS_CORE_ENRAGED,
    };
    sink.fill_rect(pos, Vec2::splat(20.0), core);
    for side in [-1.0f32, 1.0] {
        sink.fill_rect(
            pos + Vec2::new(side * half.x, 20.0),
            Vec2::new(10.0, 20.0),
            palette::BOSS_CANNON,
        );
    }

    // Gauge across the top of the screen
    health_bar(
        sink,
        Vec2::new(screen_width / 2.0, 12.0),
        screen_width * 0.3,
        boss.health_fraction(),
    );
}

fn draw_projectile<S: RenderSink + ?Sized>(sink: &mut S, shot: &Projectile) {
    let body = &shot.body;
    sink.fill_rect(body.pos, body.half_extents * 2.0, faded(body.color, 0.3));
    sink.fill_rect(body.pos, body.half_extents, body.color);
}

fn draw_powerup<S: RenderSink + ?Sized>(sink: &mut S, powerup: &PowerUp) {
    let pos = powerup.body.pos;
    let half = powerup.body.half_extents;
    let color = powerup.body.color;

    sink.fill_rect(pos, half * 1.5, faded(color, 0.3 * powerup.pulse()));
    sink.fill_rect(pos, half, color);

    let glyph = palette::WHITE;
    let r = half.x * 0.6;
    match powerup.kind {
        PowerUpKind::WeaponUpgrade => {
            polygon_outline(
                sink,
                &[
                    pos + Vec2::new(0.0, -r),
                    pos + Vec2::new(r, r),
                    pos + Vec2::new(-r, r),
                ],
                glyph,
            );
        }
        PowerUpKind::HealthRestore => {
            sink.line(pos - Vec2::new(r, 0.0), pos + Vec2::new(r, 0.0), glyph);
            sink.line(pos - Vec2::new(0.0, r), pos + Vec2::new(0.0, r), glyph);
        }
        PowerUpKind::Shield => ring_outline(sink, pos, r, glyph, 12),
    }
}

fn health_bar<S: RenderSink + ?Sized>(sink: &mut S, center: Vec2, half_width: f32, fraction: f32) {
    let half_height = 2.0;
    sink.fill_rect(center, Vec2::new(half_width, half_height), HEALTH_BAR_BG);
    let filled = half_width * fraction.clamp(0.0, 1.0);
    if filled > 0.0 {
        sink.fill_rect(
            center - Vec2::new(half_width - filled, 0.0),
            Vec2::new(filled, half_height),
            HEALTH_BAR_FILL,
        );
    }
}
