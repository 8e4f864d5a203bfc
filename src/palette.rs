//! Colors for game elements
//!
//! RGBA in 0..1, the layout the vertex batch consumes directly.

pub type Color = [f32; 4];

/// Build a color from 8-bit channels
pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ]
}

/// Same color with alpha multiplied by `factor` (clamped to 0..1)
pub fn faded(color: Color, factor: f32) -> Color {
    [color[0], color[1], color[2], color[3] * factor.clamp(0.0, 1.0)]
}

/// Same color with RGB scaled by `factor`, alpha untouched
pub fn shaded(color: Color, factor: f32) -> Color {
    [
        (color[0] * factor).clamp(0.0, 1.0),
        (color[1] * factor).clamp(0.0, 1.0),
        (color[2] * factor).clamp(0.0, 1.0),
        color[3],
    ]
}

pub const BACKGROUND: Color = rgba8(10, 10, 20, 255);
pub const WHITE: Color = rgba8(255, 255, 255, 255);

pub const PLAYER: Color = rgba8(0, 200, 255, 255);
pub const PLAYER_WING: Color = rgba8(0, 150, 200, 255);
pub const SHIELD: Color = rgba8(0, 100, 255, 110);

pub const DRIFTER: Color = rgba8(255, 150, 50, 255);
pub const HUNTER: Color = rgba8(255, 50, 100, 255);
pub const BOMBER: Color = rgba8(150, 50, 255, 255);

pub const BOSS_HULL: Color = rgba8(150, 0, 0, 255);
pub const BOSS_CORE_CALM: Color = rgba8(255, 100, 0, 255);
pub const BOSS_CORE_ENRAGED: Color = rgba8(255, 0, 0, 255);
pub const BOSS_CANNON: Color = rgba8(50, 50, 50, 255);

pub const PLAYER_SHOT: Color = rgba8(0, 255, 200, 255);
pub const HOSTILE_SHOT: Color = rgba8(255, 100, 100, 255);

pub const WEAPON_PICKUP: Color = rgba8(0, 255, 255, 255);
pub const HEALTH_PICKUP: Color = rgba8(50, 255, 50, 255);
pub const SHIELD_PICKUP: Color = rgba8(0, 100, 255, 255);

/// Explosion tints
pub const HIT_SPARK: Color = rgba8(255, 200, 50, 150);
pub const BOSS_HIT_SPARK: Color = rgba8(255, 100, 0, 150);
pub const ENEMY_BURST: Color = rgba8(255, 150, 50, 255);
pub const COLLISION_BURST: Color = rgba8(255, 200, 50, 255);
pub const PLAYER_HIT_BURST: Color = rgba8(255, 100, 100, 255);
pub const DEATH_BURST: Color = rgba8(255, 200, 100, 255);
pub const ENRAGE_BURST: Color = rgba8(255, 50, 50, 255);
pub const BOSS_DEATH_BURST: Color = WHITE;

/// Screen overlays
pub const PAUSE_OVERLAY: Color = rgba8(0, 0, 0, 150);
pub const GAME_OVER_OVERLAY: Color = rgba8(0, 0, 0, 180);
pub const GAME_OVER_BANNER: Color = rgba8(255, 50, 50, 255);
