//! Backfire entry point
//!
//! Native shell for the simulation. Until a windowing front-end is wired
//! in, this runs the game headless in autopilot mode: it loads settings,
//! starts a run at the configured difficulty, lets the demo steering play
//! it out at the fixed timestep, and records the clear time if the
//! autopilot wins. All capability seams (presence, audio) use their no-op
//! implementations.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use backfire::consts::*;
use backfire::format_time;
use backfire::platform::{AudioSink, NullAudio, NullPresence, Presence};
use backfire::render::{self, Canvas, Color, Sprite};
use backfire::sim::{FrameInput, GamePhase, GameState, tick};
use backfire::{BestTimes, Config};

/// Draw surface for the headless demo: accepts every primitive, shows none
struct HeadlessCanvas;

impl Canvas for HeadlessCanvas {
    fn clear(&mut self, _color: Color) {}
    fn circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {}
    fn circle_lines(&mut self, _center: Vec2, _radius: f32, _color: Color) {}
    fn line(&mut self, _from: Vec2, _to: Vec2, _color: Color) {}
    fn sprite(&mut self, _sprite: Sprite, _center: Vec2, _size: Vec2) {}
    fn text(&mut self, _text: &str, _pos: Vec2, _size: f32, _color: Color) {}
}

const CONFIG_PATH: &str = "backfire.cfg";
const BEST_TIMES_PATH: &str = "best_times.json";

/// Demo cutoff: give up after five simulated minutes
const DEMO_TICK_LIMIT: u64 = 5 * 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Backfire starting (headless demo mode)");

    let config_path = Path::new(CONFIG_PATH);
    let config = Config::load(config_path);

    let times_path = Path::new(BEST_TIMES_PATH);
    let mut best_times = BestTimes::load(times_path);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let mut state = GameState::new(
        seed,
        Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        config.difficulty,
    );
    state.muted = config.muted;

    let mut presence = NullPresence;
    let mut audio = NullAudio;
    audio.set_volume(config.music_volume);

    // Start the run from the menu, then let the autopilot take over
    let mut input = FrameInput {
        confirm: true,
        autopilot: true,
        ..Default::default()
    };

    let mut canvas = HeadlessCanvas;
    let mut last_phase = state.phase;
    for ticks in 0..DEMO_TICK_LIMIT {
        // input handling and update, then draw: one frame, in order
        tick(&mut state, &input, SIM_DT);
        render::draw_frame(&state, &mut canvas);
        // one-shot inputs are consumed by the processed tick
        input.confirm = false;

        if state.phase != last_phase {
            on_phase_change(&state, &config, &mut presence, &mut audio);
            last_phase = state.phase;
            if matches!(state.phase, GamePhase::Win | GamePhase::GameOver) {
                break;
            }
        }

        // once per simulated second, a status line
        if ticks % 60 == 0 {
            log::debug!(
                "t={} player {:.0}hp boss {:.0}hp bursts {} bombs {}",
                format_time(state.elapsed()),
                state.player.health,
                state.boss.health,
                state.bursts.len(),
                state.bombs.len()
            );
        }
    }

    match state.phase {
        GamePhase::Win => {
            let elapsed = state.elapsed();
            println!(
                "Autopilot beat the boss on {} in {}",
                state.difficulty.as_str(),
                format_time(elapsed)
            );
            if let Some(rank) = best_times.add_time(elapsed, state.difficulty) {
                println!("New best time, rank {rank}");
                if let Err(err) = best_times.save(times_path) {
                    log::warn!("Could not save best times: {err}");
                }
            }
        }
        GamePhase::GameOver => {
            println!(
                "Autopilot went down on {} after {}",
                state.difficulty.as_str(),
                format_time(state.elapsed())
            );
        }
        _ => {
            println!(
                "Demo stopped after {} of simulated play",
                format_time(state.elapsed())
            );
        }
    }

    if let Err(err) = config.save(config_path) {
        log::warn!("Could not save settings: {err}");
    }
}

/// Map phase transitions onto the capability seams, the way a windowed
/// front-end would.
fn on_phase_change(
    state: &GameState,
    config: &Config,
    presence: &mut impl Presence,
    audio: &mut impl AudioSink,
) {
    if config.discord_presence {
        presence.set_activity(state.phase, state.difficulty);
    }

    if state.phase == GamePhase::Playing && !state.muted {
        audio.play_music();
    } else {
        audio.stop_music();
    }
}
