//! Frame rendering through an abstract draw surface
//!
//! The core never owns a window or a texture; it emits draw primitives
//! through the `Canvas` trait and lets the shell map them onto whatever
//! backend it set up. Scene order matches the simulation's layering:
//! bombs under bursts under the boss strip under the player, HUD last.

use glam::Vec2;

use crate::consts::*;
use crate::format_time;
use crate::sim::attack::AttackSize;
use crate::sim::state::{Difficulty, GamePhase, GameState};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

pub const BACKGROUND: Color = Color::rgb(10, 10, 10);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const GRAY: Color = Color::rgb(130, 130, 130);
pub const RED: Color = Color::rgb(230, 41, 55);
pub const DARK_RED: Color = Color::rgb(139, 0, 0);
pub const GREEN: Color = Color::rgb(0, 228, 48);
pub const YELLOW: Color = Color::rgb(253, 249, 0);
pub const BLUE: Color = Color::rgb(0, 121, 241);

/// Texture handles the shell resolved at startup; the core never loads
/// or frees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Player,
    Boss,
    Bomb,
}

/// Draw-primitive capability provided by the shell
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn circle_lines(&mut self, center: Vec2, radius: f32, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);
    /// Textured rectangle centered on `center`
    fn sprite(&mut self, sprite: Sprite, center: Vec2, size: Vec2);
    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
}

fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => GREEN,
        Difficulty::Normal => YELLOW,
        Difficulty::Hard => DARK_RED,
    }
}

fn telegraph_color(size: AttackSize) -> Color {
    match size {
        AttackSize::Small => RED,
        AttackSize::Medium => YELLOW,
        AttackSize::Large => BLUE,
    }
}

/// Draw one frame of the current state
pub fn draw_frame(state: &GameState, canvas: &mut impl Canvas) {
    canvas.clear(BACKGROUND);
    let center = state.arena / 2.0;
    let line = |i: f32| center.y + 25.0 * i;

    match state.phase {
        GamePhase::Playing | GamePhase::Paused => {
            draw_scene(state, canvas);
            if state.phase == GamePhase::Paused {
                canvas.text("Paused", Vec2::new(center.x, line(-2.0)), 20.0, WHITE);
                canvas.text(
                    "P resumes, ESC returns to the menu",
                    Vec2::new(center.x, line(0.0)),
                    20.0,
                    GRAY,
                );
            }
        }
        GamePhase::MainMenu => {
            canvas.text("BACKFIRE", Vec2::new(center.x, line(-4.0)), 20.0, WHITE);
            canvas.text(
                "Dodge the bursts. Walk into the bombs: they hurt the boss.",
                Vec2::new(center.x, line(-3.0)),
                20.0,
                GRAY,
            );
            canvas.text("Select difficulty", Vec2::new(center.x, line(-1.0)), 20.0, WHITE);
            for (i, d) in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard]
                .into_iter()
                .enumerate()
            {
                let label = format!("{}. {}", i + 1, d.as_str());
                canvas.text(
                    &label,
                    Vec2::new(center.x, line(1.0 + i as f32)),
                    20.0,
                    difficulty_color(d),
                );
                if d == state.difficulty {
                    canvas.text(
                        "-",
                        Vec2::new(center.x - 100.0, line(1.0 + i as f32)),
                        20.0,
                        difficulty_color(d),
                    );
                }
            }
            canvas.text(
                "ENTER or SPACE starts, ESC quits",
                Vec2::new(center.x, line(5.0)),
                20.0,
                GRAY,
            );
            canvas.text(
                "M toggles music",
                Vec2::new(center.x, line(6.0)),
                20.0,
                if state.muted { GRAY } else { WHITE },
            );
        }
        GamePhase::GameOver => {
            canvas.text("Defeated", Vec2::new(center.x, line(-2.0)), 20.0, RED);
            canvas.text(
                "The boss wore you down.",
                Vec2::new(center.x, line(0.0)),
                20.0,
                WHITE,
            );
            canvas.text(
                "R restarts, ESC returns to the menu",
                Vec2::new(center.x, line(4.0)),
                20.0,
                WHITE,
            );
        }
        GamePhase::Win => {
            canvas.text("Boss down!", Vec2::new(center.x, line(-2.0)), 20.0, GREEN);
            let time = format!("Clear time: {}", format_time(state.elapsed()));
            canvas.text(&time, Vec2::new(center.x, line(0.0)), 20.0, WHITE);
            canvas.text(
                state.difficulty.as_str(),
                Vec2::new(center.x, line(1.0)),
                20.0,
                difficulty_color(state.difficulty),
            );
            canvas.text(
                "R restarts, ESC returns to the menu",
                Vec2::new(center.x, line(4.0)),
                20.0,
                WHITE,
            );
        }
        GamePhase::AssetError => {
            canvas.text(
                "A required asset failed to load.",
                Vec2::new(center.x, line(-1.0)),
                20.0,
                RED,
            );
            canvas.text(
                "Check the assets directory and restart. Close the window to exit.",
                Vec2::new(center.x, line(1.0)),
                20.0,
                WHITE,
            );
        }
    }
}

fn draw_scene(state: &GameState, canvas: &mut impl Canvas) {
    for bomb in &state.bombs {
        // expired bombs waiting for compaction draw nothing
        if !bomb.is_alive(state.clock) {
            continue;
        }
        let size = Vec2::splat(BOMB_SIZE * bomb.pulse_scale());
        canvas.sprite(Sprite::Bomb, bomb.position, size);
    }

    for burst in &state.bursts {
        if !burst.exploded {
            canvas.circle_lines(
                burst.position,
                burst.size.telegraph_radius(),
                telegraph_color(burst.size),
            );
        }
        for bullet in &burst.bullets {
            if bullet.active {
                canvas.circle(bullet.position, BULLET_RADIUS, RED);
            }
        }
    }

    canvas.sprite(
        Sprite::Boss,
        Vec2::new(state.arena.x / 2.0, BOSS_STRIP_HEIGHT / 2.0),
        Vec2::new(state.arena.x, BOSS_STRIP_HEIGHT),
    );
    canvas.sprite(
        Sprite::Player,
        state.player.position,
        Vec2::splat(PLAYER_SIZE),
    );

    // HUD
    let time = format!("Time: {}", format_time(state.elapsed()));
    canvas.text(&time, Vec2::new(state.arena.x - 150.0, 15.0), 20.0, WHITE);
    let health = format!("Health: {:.0}", state.player.health);
    canvas.text(&health, Vec2::new(10.0, 12.5), 20.0, WHITE);
    let boss_health = format!("Boss Health: {:.0}", state.boss.health);
    canvas.text(&boss_health, Vec2::new(10.0, 45.0), 20.0, WHITE);
}
