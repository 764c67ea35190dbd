//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (insertion order, batch compaction)
//! - No rendering or platform dependencies

pub mod attack;
pub mod collision;
pub mod hazard;
pub mod spawn;
pub mod state;
pub mod tick;

pub use attack::{AttackBurst, AttackSize, Bullet};
pub use collision::circles_overlap;
pub use hazard::Bomb;
pub use state::{Boss, Difficulty, GamePhase, GameState, MovementBounds, Player};
pub use tick::{FrameInput, tick};
