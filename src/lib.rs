//! Backfire - a boss-dodge arcade game
//!
//! The boss rains telegraphed bullet bursts on the player and litters the
//! arena with bombs; touching a bomb detonates it against the boss. Survive
//! until the boss's health runs out.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `render`: Draw-primitive capability consumed by the core
//! - `platform`: Presence/audio/haptics capability seams
//! - `settings`: key=value config persistence
//! - `besttimes`: Fastest-clear leaderboard

pub mod besttimes;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use besttimes::BestTimes;
pub use settings::Config;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the game's native cadence)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Margin kept clear around the playable area
    pub const SCREEN_PADDING: f32 = 20.0;
    /// Vertical strip at the top of the arena occupied by the boss
    pub const BOSS_STRIP_HEIGHT: f32 = 200.0;

    /// Player defaults
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;
    pub const PLAYER_SIZE: f32 = 24.0;
    pub const PLAYER_COLLISION_RADIUS: f32 = 16.0;
    /// Movement speed in px/s
    pub const PLAYER_SPEED: f32 = 300.0;

    /// Boss defaults
    pub const BOSS_MAX_HEALTH: f32 = 100.0;
    /// Passive regen below the threshold, Hard only (hp/s)
    pub const BOSS_REGEN_RATE: f32 = 2.0;
    /// Fraction of max health under which regen kicks in
    pub const BOSS_REGEN_THRESHOLD: f32 = 0.3;

    /// Bullet defaults
    pub const BULLET_RADIUS: f32 = 5.0;
    pub const BULLET_DAMAGE: f32 = 5.0;

    /// Bomb defaults
    pub const BOMB_DAMAGE: f32 = 20.0;
    pub const BOMB_SIZE: f32 = 40.0;
    pub const BOMB_COLLISION_RADIUS: f32 = 25.0;
    /// Seconds a bomb stays armed before fizzling out
    pub const BOMB_LIFETIME: f32 = 10.0;
    /// Pulse animation rate (rad/s), cosmetic only
    pub const BOMB_PULSE_RATE: f32 = 5.0;

    /// Spawner cadence
    pub const ATTACK_INTERVAL: f32 = 0.5;
    pub const BOMB_INTERVAL: f32 = 5.0;
    /// Per-axis jitter on burst placement, and half the velocity bias
    pub const ATTACK_OFFSET: f32 = 150.0;

    /// Screen shake amplitude applied when the player is hit
    pub const HIT_SHAKE: f32 = 6.0;
}

/// Unit direction vector for an angle given in degrees
#[inline]
pub fn dir_from_degrees(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.cos(), radians.sin())
}

/// Format a duration in seconds as mm:ss.cc for HUD display
pub fn format_time(seconds: f32) -> String {
    let minutes = (seconds / 60.0) as u32;
    let secs = (seconds as u32) % 60;
    let centis = ((seconds * 1000.0) as u32 % 1000) / 10;
    format!("{minutes:02}:{secs:02}.{centis:02}")
}
