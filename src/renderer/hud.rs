//! HUD text: score, objective banner, end-of-run messages

use glam::Vec2;

use super::{Color, DrawCmd, TextAlign};
use crate::config::GameConfig;
use crate::consts::*;
use crate::sim::{GamePhase, GameState};

fn text(text: String, pos: Vec2, size_px: f32, align: TextAlign, color: Color) -> DrawCmd {
    DrawCmd::Text {
        text,
        pos,
        size_px,
        align,
        color,
    }
}

fn centered(line: String, y_offset: f32, size_px: f32, color: Color) -> DrawCmd {
    let pos = Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0 + y_offset);
    text(line, pos, size_px, TextAlign::Center, color)
}

/// Score counter in the top-left corner
pub fn score_line(score: u32) -> DrawCmd {
    text(
        format!("Robbers Avoided: {score}"),
        Vec2::new(30.0, 70.0),
        40.0,
        TextAlign::Left,
        Color::WHITE,
    )
}

pub fn objective_text(config: &GameConfig) -> String {
    if config.has_goal_object {
        format!(
            "Objective: Avoid {} Robbers and Reach Coop!",
            config.winning_score
        )
    } else {
        format!("Objective: Avoid {} Robbers!", config.winning_score)
    }
}

/// Banner opacity after `playing_ms` of play: fully visible for the display
/// delay, then a linear fade to nothing
pub fn objective_alpha(playing_ms: f32) -> f32 {
    if playing_ms <= OBJECTIVE_DISPLAY_MS {
        return 1.0;
    }
    let fade = (playing_ms - OBJECTIVE_DISPLAY_MS) / OBJECTIVE_FADE_MS;
    (1.0 - fade).clamp(0.0, 1.0)
}

/// Phase-dependent text drawn over the playfield
pub fn overlay(state: &GameState) -> Vec<DrawCmd> {
    let mut lines = Vec::new();
    match state.phase {
        GamePhase::Idle => {
            lines.push(centered(objective_text(&state.config), -120.0, 40.0, Color::WHITE));
            lines.push(centered("Press Space to start".into(), 0.0, 80.0, Color::WHITE));
        }
        GamePhase::Playing => {
            let alpha = objective_alpha(state.playing_ms);
            if alpha > 0.0 {
                let color = Color::WHITE.with_alpha(alpha);
                lines.push(centered(objective_text(&state.config), -120.0, 40.0, color));
            }
        }
        GamePhase::GameOver => {
            lines.push(centered("Game Over!".into(), -100.0, 80.0, Color::WHITE));
            lines.push(centered(
                "Balkong Destroyer got robbed".into(),
                -40.0,
                40.0,
                Color::WHITE,
            ));
            lines.push(centered(
                format!("Ran away from {} Robbers!", state.score),
                30.0,
                40.0,
                Color::WHITE,
            ));
            lines.push(centered("Press Space to restart".into(), 100.0, 40.0, Color::WHITE));
        }
        GamePhase::Won => {
            let message = if state.config.has_goal_object {
                "Balkong Destroyer made it to Coop!"
            } else {
                "Balkong Destroyer got away from every Robber!"
            };
            lines.push(centered(message.into(), -80.0, 60.0, Color::WHITE));
            lines.push(centered("Press Space to restart".into(), 0.0, 40.0, Color::WHITE));
        }
    }
    lines
}
