//! Boss attack bursts
//!
//! A burst telegraphs an area for a difficulty-scaled delay, then detonates
//! into a ring of bullets. The burst owns its bullets for their whole life:
//! it advances them, tests them against the player, and compacts the ones
//! that have gone inactive.

use glam::Vec2;

use crate::consts::*;
use crate::dir_from_degrees;
use crate::sim::collision::{circles_overlap, in_arena};
use crate::sim::state::{Difficulty, Player};

/// A single bullet fired by a burst detonation
#[derive(Debug, Clone)]
pub struct Bullet {
    pub position: Vec2,
    /// Unit vector, fixed at construction
    pub direction: Vec2,
    /// px/s
    pub speed: f32,
    pub active: bool,
}

impl Bullet {
    pub fn new(position: Vec2, direction: Vec2, speed: f32) -> Self {
        Self {
            position,
            direction,
            speed,
            active: true,
        }
    }

    /// Advance one frame; inactive bullets are permanent no-ops.
    /// Deactivates on leaving the arena rectangle.
    pub fn update(&mut self, arena: Vec2, dt: f32) {
        if !self.active {
            return;
        }
        self.position += self.direction * self.speed * dt;
        if !in_arena(self.position, arena) {
            self.active = false;
        }
    }
}

/// Telegraph size class of a burst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackSize {
    Small,
    Medium,
    Large,
}

impl AttackSize {
    /// Uniform draw support for the spawner
    pub fn from_index(index: u32) -> Self {
        match index % 3 {
            0 => AttackSize::Small,
            1 => AttackSize::Medium,
            _ => AttackSize::Large,
        }
    }

    /// Radius of the telegraph ring, also the bullet spawn offset
    pub fn telegraph_radius(&self) -> f32 {
        match self {
            AttackSize::Small => 25.0,
            AttackSize::Medium => 30.0,
            AttackSize::Large => 50.0,
        }
    }

    /// Unscaled telegraph duration in seconds; smallest detonates soonest
    pub fn base_delay(&self) -> f32 {
        match self {
            AttackSize::Small => 0.5,
            AttackSize::Medium => 1.0,
            AttackSize::Large => 1.5,
        }
    }

    /// Bullets emitted on detonation; not difficulty-scaled
    pub fn bullet_count(&self) -> u32 {
        match self {
            AttackSize::Small => 8,
            AttackSize::Medium => 10,
            AttackSize::Large => 12,
        }
    }

    /// Unscaled bullet speed in px/s; small bursts fire the fastest rings
    pub fn bullet_speed(&self) -> f32 {
        match self {
            AttackSize::Small => 360.0,
            AttackSize::Medium => 240.0,
            AttackSize::Large => 180.0,
        }
    }
}

/// An area-telegraphed attack: Telegraph -> Detonated -> Dead
#[derive(Debug, Clone)]
pub struct AttackBurst {
    /// Fixed once created
    pub position: Vec2,
    pub size: AttackSize,
    pub difficulty: Difficulty,
    /// Simulation time at which the telegraph detonates
    pub explode_at: f32,
    pub exploded: bool,
    /// Empty until detonation; only shrinks afterwards
    pub bullets: Vec<Bullet>,
}

impl AttackBurst {
    pub fn new(position: Vec2, size: AttackSize, difficulty: Difficulty, now: f32) -> Self {
        Self {
            position,
            size,
            difficulty,
            explode_at: now + size.base_delay() * difficulty.telegraph_scale(),
            exploded: false,
            bullets: Vec::new(),
        }
    }

    /// Alive from construction until detonated with no bullets left.
    /// Decay is monotonic: this can never flip back to true.
    pub fn is_alive(&self) -> bool {
        !self.exploded || !self.bullets.is_empty()
    }

    /// One frame of burst life: detonate when due, advance bullets, apply
    /// player hits, then compact inactive bullets in a single pass.
    pub fn update(&mut self, player: &mut Player, arena: Vec2, now: f32, dt: f32) {
        if !self.exploded && now > self.explode_at {
            self.explode();
        }

        for bullet in &mut self.bullets {
            bullet.update(arena, dt);
        }

        for bullet in &mut self.bullets {
            if bullet.active
                && circles_overlap(
                    bullet.position,
                    BULLET_RADIUS,
                    player.position,
                    PLAYER_COLLISION_RADIUS,
                )
            {
                log::info!(
                    "Bullet hit player at ({:.1}, {:.1})",
                    bullet.position.x,
                    bullet.position.y
                );
                player.take_damage(BULLET_DAMAGE);
                // a bullet only ever hits once
                bullet.active = false;
            }
        }

        self.bullets.retain(|b| b.active);
    }

    /// Detonate into a full ring of evenly spaced bullets
    pub fn explode(&mut self) {
        self.exploded = true;
        let count = self.size.bullet_count();
        let speed = self.size.bullet_speed() * self.difficulty.intensity();
        let angle_step = 360.0 / count as f32;

        self.bullets.reserve(count as usize);
        for i in 0..count {
            let direction = dir_from_degrees(angle_step * i as f32);
            let origin = self.position + direction * self.size.telegraph_radius();
            self.bullets.push(Bullet::new(origin, direction, speed));
        }
    }
}
