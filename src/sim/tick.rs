//! Per-frame simulation driver
//!
//! `tick` is the only entry point that mutates a `GameState`: it handles the
//! frame's logical input, runs one update pass in a fixed order (spawners,
//! player, boss, bursts, bombs, lifecycle compaction, win/loss checks), and
//! performs phase transitions. Paused and terminal phases early-return, so
//! a paused frame skips the entire update.

use glam::Vec2;

use crate::consts::*;
use crate::sim::spawn;
use crate::sim::state::{Difficulty, GamePhase, GameState};

/// Logical input snapshot for a single frame. The shell polls raw devices
/// once per frame and folds them into this; one-shot actions (pause,
/// confirm, ...) are cleared by the shell after each processed tick.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Held movement keys
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Gamepad stick axis, if any (each component in [-1, 1])
    pub stick: Option<Vec2>,
    /// Mouse-target seek position, if the player is steering by pointer
    pub pointer: Option<Vec2>,
    /// Start / resume (enter, space, gamepad south)
    pub confirm: bool,
    pub pause: bool,
    pub escape: bool,
    /// Restart after a finished run
    pub restart: bool,
    /// Toggle music mute
    pub mute: bool,
    /// Difficulty hotkey, main menu only
    pub select_difficulty: Option<Difficulty>,
    /// Demo mode: synthesize steering instead of reading movement input
    pub autopilot: bool,
}

/// Advance the game by one fixed timestep
pub fn tick(state: &mut GameState, input: &FrameInput, dt: f32) {
    // Terminal: only closing the application leaves this state
    if state.phase == GamePhase::AssetError {
        return;
    }

    if input.mute {
        state.muted = !state.muted;
        log::info!("Music {}", if state.muted { "muted" } else { "unmuted" });
    }

    match state.phase {
        GamePhase::MainMenu => {
            if let Some(difficulty) = input.select_difficulty {
                state.difficulty = difficulty;
            }
            if input.confirm {
                state.start_run();
            } else if input.escape {
                state.quit_requested = true;
            }
            return;
        }
        GamePhase::Playing => {
            if input.pause {
                log::info!("Game paused");
                state.phase = GamePhase::Paused;
                return;
            }
            if input.escape {
                state.to_main_menu();
                return;
            }
        }
        GamePhase::Paused => {
            if input.pause || input.confirm {
                log::info!("Game resumed");
                state.phase = GamePhase::Playing;
            } else if input.escape {
                state.to_main_menu();
            }
            // the resume frame itself does not simulate
            return;
        }
        GamePhase::GameOver | GamePhase::Win => {
            if input.restart {
                state.start_run();
            } else if input.escape {
                state.to_main_menu();
            }
            return;
        }
        GamePhase::AssetError => return,
    }

    // --- Playing update pass ---
    state.clock += dt;

    state.shake *= 0.9;
    if state.shake < 0.01 {
        state.shake = 0.0;
    }

    spawn::update_spawners(state, dt);

    let steer = if input.autopilot {
        autopilot_steer(state)
    } else {
        manual_steer(state, input)
    };
    let bounds = state.bounds;
    state.player.update(steer, &bounds, dt);

    state.boss.update(state.difficulty, dt);

    let health_before = state.player.health;

    // Bursts advance their own bullets and test them against the player
    {
        let GameState {
            bursts,
            player,
            arena,
            clock,
            ..
        } = state;
        for burst in bursts.iter_mut() {
            burst.update(player, *arena, *clock, dt);
        }
    }
    state.bursts.retain(|b| b.is_alive());

    // Bombs detonate against the boss on player contact
    {
        let GameState {
            bombs,
            player,
            boss,
            clock,
            ..
        } = state;
        for bomb in bombs.iter_mut() {
            bomb.update(player, boss, *clock, dt);
        }
    }
    let now = state.clock;
    state.bombs.retain(|b| b.is_alive(now));

    if state.player.health < health_before {
        state.shake = HIT_SHAKE;
    }

    if state.player.is_dead() {
        log::info!("Game over after {:.2}s", state.elapsed());
        state.end_run(GamePhase::GameOver);
    } else if state.boss.is_dead() {
        log::info!("Boss defeated in {:.2}s", state.elapsed());
        state.end_run(GamePhase::Win);
    }
}

/// Union of held keys, stick deflection, and pointer seek
fn manual_steer(state: &GameState, input: &FrameInput) -> Vec2 {
    let mut steer = Vec2::ZERO;
    if input.up {
        steer.y -= 1.0;
    }
    if input.down {
        steer.y += 1.0;
    }
    if input.left {
        steer.x -= 1.0;
    }
    if input.right {
        steer.x += 1.0;
    }

    if let Some(stick) = input.stick {
        // dead zone
        if stick.length() > 0.1 {
            steer += stick;
        }
    }

    if let Some(target) = input.pointer {
        let to_target = target - state.player.position;
        if to_target.length() > 4.0 {
            steer += to_target.normalize();
        }
    }

    steer
}

/// Demo steering: flee the nearest live threat, otherwise chase a bomb,
/// otherwise drift back to the middle of the playable area.
fn autopilot_steer(state: &GameState) -> Vec2 {
    let pos = state.player.position;

    let mut nearest_threat: Option<(Vec2, f32)> = None;
    let mut consider = |threat_pos: Vec2, danger_radius: f32| {
        let dist = pos.distance(threat_pos);
        if dist < danger_radius {
            match nearest_threat {
                Some((best, _)) if pos.distance(best) <= dist => {}
                _ => nearest_threat = Some((threat_pos, dist)),
            }
        }
    };

    for burst in &state.bursts {
        if !burst.exploded {
            consider(burst.position, burst.size.telegraph_radius() + 80.0);
        }
        for bullet in &burst.bullets {
            if bullet.active {
                consider(bullet.position, 60.0);
            }
        }
    }

    if let Some((threat, _)) = nearest_threat {
        let away = (pos - threat).normalize_or_zero();
        // bias back toward the middle so fleeing never pins us in a corner
        let home = (state.bounds.center() - pos).normalize_or_zero();
        return away + home * 0.3;
    }

    if let Some(bomb) = state
        .bombs
        .iter()
        .filter(|b| b.is_alive(state.clock))
        .min_by(|a, b| {
            pos.distance_squared(a.position)
                .total_cmp(&pos.distance_squared(b.position))
        })
    {
        return (bomb.position - pos).normalize_or_zero();
    }

    let home = state.bounds.center() - pos;
    if home.length() > 20.0 {
        home.normalize()
    } else {
        Vec2::ZERO
    }
}
