//! Game state and core simulation types
//!
//! The `GameState` owns every entity collection and all run bookkeeping;
//! nothing else holds simulation state between frames.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::attack::AttackBurst;
use crate::sim::hazard::Bomb;

/// Selected challenge level, threaded through constructors and update calls
/// rather than read from a global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Warning time scale for burst telegraphs. Longest on Easy: lower
    /// difficulty means more time to react before detonation.
    pub fn telegraph_scale(&self) -> f32 {
        match self {
            Difficulty::Easy => 2.0,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 0.5,
        }
    }

    /// Bullet speed scale.
    pub fn intensity(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.5,
        }
    }

    /// Upper bound on bursts spawned per attack tick.
    pub fn burst_cap(&self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Normal => 3,
            Difficulty::Hard => 5,
        }
    }

    /// Hard ignores the live-burst limit entirely.
    pub fn bypasses_burst_limit(&self) -> bool {
        matches!(self, Difficulty::Hard)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen with difficulty selection
    MainMenu,
    /// Active gameplay
    Playing,
    /// Simulation halted, rendering continues
    Paused,
    /// Player health hit zero
    GameOver,
    /// Boss health hit zero
    Win,
    /// Terminal: a required asset failed to load at startup
    AssetError,
}

/// Rectangle the player may occupy. Derived once from the arena size;
/// the top edge keeps the player out of the boss strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl MovementBounds {
    pub fn new(arena: Vec2) -> Self {
        Self {
            left: SCREEN_PADDING + PLAYER_SIZE,
            right: arena.x - SCREEN_PADDING - PLAYER_SIZE,
            top: BOSS_STRIP_HEIGHT + SCREEN_PADDING + PLAYER_SIZE,
            bottom: arena.y - SCREEN_PADDING - PLAYER_SIZE,
        }
    }

    /// Clamp a position into the bounds
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            pos.x.clamp(self.left, self.right),
            pos.y.clamp(self.top, self.bottom),
        )
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= self.left && pos.x <= self.right && pos.y >= self.top && pos.y <= self.bottom
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    pub previous_position: Vec2,
    /// Per-frame displacement, used by the spawner to lead the player
    pub velocity: Vec2,
    pub health: f32,
}

impl Player {
    pub fn new(bounds: &MovementBounds) -> Self {
        let mut player = Self {
            position: Vec2::ZERO,
            previous_position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            health: PLAYER_MAX_HEALTH,
        };
        player.init(bounds);
        player
    }

    /// Reset to full health at the center of the playable area
    pub fn init(&mut self, bounds: &MovementBounds) {
        self.health = PLAYER_MAX_HEALTH;
        self.position = bounds.center();
        self.previous_position = self.position;
        self.velocity = Vec2::ZERO;
    }

    /// Apply one frame of movement. `steer` is the raw input direction
    /// (union of held keys, stick, and pointer seek); it is normalized here
    /// so diagonals are no faster than cardinals.
    pub fn update(&mut self, steer: Vec2, bounds: &MovementBounds, dt: f32) {
        self.previous_position = self.position;
        if steer.length_squared() > 0.0 {
            self.position += steer.normalize() * PLAYER_SPEED * dt;
        }
        self.position = bounds.clamp(self.position);
        self.velocity = self.position - self.previous_position;
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }
}

/// The boss. It never moves; its health is whittled down by its own bombs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub health: f32,
}

impl Boss {
    pub fn new() -> Self {
        Self {
            health: BOSS_MAX_HEALTH,
        }
    }

    pub fn init(&mut self) {
        self.health = BOSS_MAX_HEALTH;
    }

    /// Passive regeneration: Hard only, below 30% health, never past max.
    /// A boss at exactly zero stays dead so the win transition can fire.
    pub fn update(&mut self, difficulty: Difficulty, dt: f32) {
        if difficulty == Difficulty::Hard
            && self.health > 0.0
            && self.health < BOSS_MAX_HEALTH * BOSS_REGEN_THRESHOLD
        {
            self.health = (self.health + BOSS_REGEN_RATE * dt).min(BOSS_MAX_HEALTH);
        }
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
        log::info!("Boss took {amount} damage, {} left", self.health);
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }
}

impl Default for Boss {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete game state. One instance owns every entity; the tick loop is
/// the only mutator.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub difficulty: Difficulty,
    /// Arena drawable size (width, height)
    pub arena: Vec2,
    pub bounds: MovementBounds,
    /// Simulation clock in seconds; advances only while Playing
    pub clock: f32,
    /// Clock value when the current run started
    pub run_start: f32,
    /// Clock value when the run ended, if it has
    pub run_end: Option<f32>,
    pub player: Player,
    pub boss: Boss,
    pub bursts: Vec<AttackBurst>,
    pub bombs: Vec<Bomb>,
    pub attack_timer: f32,
    pub bomb_timer: f32,
    /// Screen shake amplitude, cosmetic, decays each tick
    pub shake: f32,
    pub muted: bool,
    /// Set when the player asks to leave from the main menu
    pub quit_requested: bool,
}

impl GameState {
    pub fn new(seed: u64, arena: Vec2, difficulty: Difficulty) -> Self {
        let bounds = MovementBounds::new(arena);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::MainMenu,
            difficulty,
            arena,
            bounds,
            clock: 0.0,
            run_start: 0.0,
            run_end: None,
            player: Player::new(&bounds),
            boss: Boss::new(),
            bursts: Vec::new(),
            bombs: Vec::new(),
            attack_timer: 0.0,
            bomb_timer: 0.0,
            shake: 0.0,
            muted: false,
            quit_requested: false,
        }
    }

    /// Start (or restart) a run: clear entities, reset actors and timers,
    /// restart the elapsed-time clock.
    pub fn start_run(&mut self) {
        self.bursts.clear();
        self.bombs.clear();
        self.player.init(&self.bounds);
        self.boss.init();
        self.attack_timer = 0.0;
        self.bomb_timer = 0.0;
        self.run_start = self.clock;
        self.run_end = None;
        self.phase = GamePhase::Playing;
        log::info!(
            "Run started (difficulty {}, seed {})",
            self.difficulty.as_str(),
            self.seed
        );
    }

    /// End the run, freezing the elapsed-time clock.
    pub fn end_run(&mut self, outcome: GamePhase) {
        debug_assert!(matches!(outcome, GamePhase::GameOver | GamePhase::Win));
        self.run_end = Some(self.clock);
        self.phase = outcome;
    }

    /// Back to the title screen; shake is cancelled on the way out.
    pub fn to_main_menu(&mut self) {
        self.shake = 0.0;
        self.phase = GamePhase::MainMenu;
    }

    /// Enter the terminal asset-failure state.
    pub fn fail_asset_load(&mut self, what: &str) {
        log::error!("Asset load failed: {what}");
        self.phase = GamePhase::AssetError;
    }

    /// Seconds the current run has lasted. Frozen once the run ends and
    /// unaffected by pauses, since the clock only advances while Playing.
    pub fn elapsed(&self) -> f32 {
        self.run_end.unwrap_or(self.clock) - self.run_start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bounds() -> MovementBounds {
        MovementBounds::new(Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT))
    }

    #[test]
    fn test_bounds_geometry() {
        let b = bounds();
        assert_eq!(b.left, 44.0);
        assert_eq!(b.right, 756.0);
        assert_eq!(b.top, 244.0);
        assert_eq!(b.bottom, 556.0);
        assert!(b.contains(b.center()));
    }

    #[test]
    fn test_bounds_clamp() {
        let b = bounds();
        let clamped = b.clamp(Vec2::new(-50.0, 10_000.0));
        assert_eq!(clamped, Vec2::new(b.left, b.bottom));
        assert!(b.contains(clamped));
    }

    #[test]
    fn test_player_damage_clamps_at_zero() {
        let b = bounds();
        let mut player = Player::new(&b);
        player.take_damage(5.0);
        player.take_damage(5.0);
        player.take_damage(5.0);
        assert_eq!(player.health, 85.0);

        player.take_damage(1000.0);
        assert_eq!(player.health, 0.0);
        // Lethal damage is idempotent at zero
        player.take_damage(1000.0);
        assert_eq!(player.health, 0.0);
    }

    #[test]
    fn test_player_movement_normalized_and_clamped() {
        let b = bounds();
        let mut player = Player::new(&b);
        let start = player.position;

        // Diagonal input moves at the same speed as cardinal input
        player.update(Vec2::new(1.0, 1.0), &b, 1.0 / 60.0);
        let diagonal = (player.position - start).length();
        assert!((diagonal - PLAYER_SPEED / 60.0).abs() < 1e-3);

        // Velocity is the per-frame displacement
        assert!((player.velocity.length() - diagonal).abs() < 1e-6);

        // Pushing left forever pins the player at the bound
        for _ in 0..10_000 {
            player.update(Vec2::new(-1.0, 0.0), &b, 1.0 / 60.0);
        }
        assert_eq!(player.position.x, b.left);
    }

    #[test]
    fn test_boss_regen_hard_below_threshold() {
        let mut boss = Boss::new();
        boss.health = 29.0;
        boss.update(Difficulty::Hard, 1.0);
        assert_eq!(boss.health, 29.0 + BOSS_REGEN_RATE);
    }

    #[test]
    fn test_boss_regen_gates() {
        // No regen outside Hard
        let mut boss = Boss::new();
        boss.health = 29.0;
        boss.update(Difficulty::Normal, 1.0);
        assert_eq!(boss.health, 29.0);

        // No regen above the threshold
        boss.health = 31.0;
        boss.update(Difficulty::Hard, 1.0);
        assert_eq!(boss.health, 31.0);

        // A dead boss stays dead
        boss.health = 0.0;
        boss.update(Difficulty::Hard, 1.0);
        assert_eq!(boss.health, 0.0);

        // Regen never pushes past max
        boss.health = BOSS_MAX_HEALTH * BOSS_REGEN_THRESHOLD - 0.001;
        boss.update(Difficulty::Hard, 1_000_000.0);
        assert_eq!(boss.health, BOSS_MAX_HEALTH);
    }

    #[test]
    fn test_difficulty_tables() {
        assert_eq!(Difficulty::Normal.telegraph_scale(), 1.0);
        assert!(Difficulty::Easy.telegraph_scale() > Difficulty::Hard.telegraph_scale());
        assert_eq!(Difficulty::Hard.burst_cap(), 5);
        assert!(Difficulty::Hard.bypasses_burst_limit());
        assert!(!Difficulty::Easy.bypasses_burst_limit());
        assert_eq!(Difficulty::from_str("hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("nope"), None);
    }

    proptest! {
        #[test]
        fn prop_damage_never_negative(start in 0.0f32..=100.0, hits in proptest::collection::vec(0.0f32..=50.0, 0..32)) {
            let b = bounds();
            let mut player = Player::new(&b);
            player.health = start;
            for hit in hits {
                player.take_damage(hit);
                prop_assert!(player.health >= 0.0);
                prop_assert!(player.health <= start);
            }
        }

        #[test]
        fn prop_clamp_is_idempotent(x in -2000.0f32..2000.0, y in -2000.0f32..2000.0) {
            let b = bounds();
            let once = b.clamp(Vec2::new(x, y));
            prop_assert_eq!(once, b.clamp(once));
            prop_assert!(b.contains(once));
        }
    }
}
