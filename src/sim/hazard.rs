//! Bombs
//!
//! A bomb is a stationary, time-limited hazard dropped by the boss. Touching
//! it hurts the boss, not the player: the detonation is wired back into its
//! owner. Each bomb detonates at most once; contact forces its expiry into
//! the past so later frames see it as spent.

use glam::Vec2;

use crate::consts::*;
use crate::sim::collision::circles_overlap;
use crate::sim::state::{Boss, Player};

#[derive(Debug, Clone)]
pub struct Bomb {
    /// Fixed once created
    pub position: Vec2,
    /// Simulation time at which the bomb fizzles out
    pub expire_at: f32,
    /// Pulse animation phase, cosmetic only
    pub pulse: f32,
}

impl Bomb {
    pub fn new(position: Vec2, now: f32) -> Self {
        Self {
            position,
            expire_at: now + BOMB_LIFETIME,
            pulse: 0.0,
        }
    }

    pub fn is_alive(&self, now: f32) -> bool {
        now < self.expire_at
    }

    /// Visual scale derived from the pulse phase
    pub fn pulse_scale(&self) -> f32 {
        1.0 + self.pulse.sin() * 0.1
    }

    /// One frame: advance the pulse, detonate on player contact.
    /// Safe no-op once expired.
    pub fn update(&mut self, player: &Player, boss: &mut Boss, now: f32, dt: f32) {
        if !self.is_alive(now) {
            return;
        }

        self.pulse += BOMB_PULSE_RATE * dt;

        if circles_overlap(
            self.position,
            BOMB_COLLISION_RADIUS,
            player.position,
            PLAYER_COLLISION_RADIUS,
        ) {
            log::info!(
                "Bomb detonated at ({:.1}, {:.1})",
                self.position.x,
                self.position.y
            );
            self.explode(boss, now);
        }
    }

    /// Damage the boss and force immediate expiry; one-shot by construction.
    pub fn explode(&mut self, boss: &mut Boss, now: f32) {
        boss.take_damage(BOMB_DAMAGE);
        self.expire_at = now;
    }
}
