//! Game settings and preferences
//!
//! Persisted as key=value text lines next to the executable. Parsing is
//! field-by-field and forgiving: unknown keys and malformed or
//! out-of-range values are warned about and replaced with defaults,
//! never propagated as a hard failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::sim::state::Difficulty;

const DEFAULT_TARGET_FPS: u32 = 60;
const MAX_TARGET_FPS: u32 = 480;

/// Persisted configuration. The simulation core only reads `difficulty`
/// from this; the rest drives the shell.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub vsync: bool,
    pub target_fps: u32,
    pub fullscreen: bool,
    pub music_volume: f32,
    pub muted: bool,
    pub discord_presence: bool,
    pub screen_shake: bool,
    pub difficulty: Difficulty,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vsync: true,
            target_fps: DEFAULT_TARGET_FPS,
            fullscreen: false,
            music_volume: 1.0,
            muted: false,
            discord_presence: true,
            screen_shake: true,
            difficulty: Difficulty::Normal,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Apply one key=value pair. Unknown keys and unparsable values are
    /// warned and skipped; range checks happen later in `sanitize`.
    fn apply(&mut self, key: &str, value: &str) {
        match key {
            "vsync" => match parse_bool(value) {
                Some(v) => self.vsync = v,
                None => log::warn!("Bad value for vsync: {value}"),
            },
            "target_fps" => match value.parse() {
                Ok(v) => self.target_fps = v,
                Err(_) => log::warn!("Bad value for target_fps: {value}"),
            },
            "fullscreen" => match parse_bool(value) {
                Some(v) => self.fullscreen = v,
                None => log::warn!("Bad value for fullscreen: {value}"),
            },
            "music_volume" => match value.parse() {
                Ok(v) => self.music_volume = v,
                Err(_) => log::warn!("Bad value for music_volume: {value}"),
            },
            "muted" => match parse_bool(value) {
                Some(v) => self.muted = v,
                None => log::warn!("Bad value for muted: {value}"),
            },
            "discord_presence" => match parse_bool(value) {
                Some(v) => self.discord_presence = v,
                None => log::warn!("Bad value for discord_presence: {value}"),
            },
            "screen_shake" => match parse_bool(value) {
                Some(v) => self.screen_shake = v,
                None => log::warn!("Bad value for screen_shake: {value}"),
            },
            "difficulty" => match Difficulty::from_str(value) {
                Some(v) => self.difficulty = v,
                None => log::warn!("Bad value for difficulty: {value}"),
            },
            _ => log::warn!("Unknown setting: {key}"),
        }
    }

    /// Reset out-of-range fields to their defaults
    pub fn sanitize(&mut self) {
        if self.target_fps == 0 || self.target_fps > MAX_TARGET_FPS {
            log::warn!(
                "Invalid target_fps {}, resetting to {DEFAULT_TARGET_FPS}",
                self.target_fps
            );
            self.target_fps = DEFAULT_TARGET_FPS;
        }
        if !(0.0..=1.0).contains(&self.music_volume) {
            log::warn!(
                "Invalid music_volume {}, resetting to 1.0",
                self.music_volume
            );
            self.music_volume = 1.0;
        }
    }

    /// Parse from key=value lines; blank lines and `#` comments allowed
    pub fn from_lines(text: &str) -> Self {
        let mut config = Self::default();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.split_once('=') {
                Some((key, value)) => config.apply(key.trim(), value.trim()),
                None => log::warn!("Malformed settings line: {line}"),
            }
        }
        config.sanitize();
        config
    }

    /// Serialize to key=value lines
    pub fn to_lines(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("vsync={}\n", self.vsync as u8));
        out.push_str(&format!("target_fps={}\n", self.target_fps));
        out.push_str(&format!("fullscreen={}\n", self.fullscreen as u8));
        out.push_str(&format!("music_volume={}\n", self.music_volume));
        out.push_str(&format!("muted={}\n", self.muted as u8));
        out.push_str(&format!("discord_presence={}\n", self.discord_presence as u8));
        out.push_str(&format!("screen_shake={}\n", self.screen_shake as u8));
        out.push_str(&format!("difficulty={}\n", self.difficulty.as_str()));
        out
    }

    /// Load from a file; a missing or unreadable file yields defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_lines(&text)
            }
            Err(err) => {
                log::info!(
                    "No settings at {} ({err}), using defaults",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Save to a file
    pub fn save(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_lines())?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
