//! Platform capability seams
//!
//! Optional subsystems (rich presence, music playback, controller rumble)
//! live behind small traits with no-op defaults, so the simulation and the
//! shell never branch on platform identity. A build that has the real
//! integration swaps in its own implementation; everything else runs the
//! `Null*` versions.

use crate::sim::state::{Difficulty, GamePhase};

/// Rich-presence style activity reporting (e.g. Discord)
pub trait Presence {
    fn set_activity(&mut self, phase: GamePhase, difficulty: Difficulty);
}

/// Default presence: logs the would-be activity and does nothing else
pub struct NullPresence;

impl Presence for NullPresence {
    fn set_activity(&mut self, phase: GamePhase, difficulty: Difficulty) {
        log::debug!("presence: {phase:?} ({})", difficulty.as_str());
    }
}

/// Background music control
pub trait AudioSink {
    fn play_music(&mut self);
    fn stop_music(&mut self);
    fn set_volume(&mut self, volume: f32);
}

/// Default audio sink: silence
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_music(&mut self) {}
    fn stop_music(&mut self) {}
    fn set_volume(&mut self, _volume: f32) {}
}

/// Controller vibration
pub trait Haptics {
    fn pulse(&mut self, strength: f32);
}

/// Default haptics: none
pub struct NullHaptics;

impl Haptics for NullHaptics {
    fn pulse(&mut self, _strength: f32) {}
}
