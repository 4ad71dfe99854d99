//! Demo player
//!
//! Starts the game from Idle and times jumps so the player is at the top of
//! the arc while the next obstacle passes underneath.

use super::state::{GamePhase, GameState, Obstacle};

/// Whether the demo player would press confirm this tick. Never restarts.
pub fn wants_confirm(state: &GameState) -> bool {
    match state.phase {
        GamePhase::Idle => true,
        GamePhase::Playing => {
            state.player.grounded
                && next_threat(state).is_some_and(|o| in_jump_window(state, o))
        }
        GamePhase::GameOver | GamePhase::Won => false,
    }
}

/// Closest obstacle the player hasn't cleared yet
fn next_threat(state: &GameState) -> Option<&Obstacle> {
    let player_front = state.player.pos.x + state.player.size;
    state
        .obstacles
        .iter()
        .filter(|o| o.pos.x + o.size.x > state.player.pos.x && o.pos.x >= player_front)
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
}

/// Distance at which jumping centers the arc over the obstacle
fn jump_distance(state: &GameState, obstacle: &Obstacle) -> f32 {
    let player = &state.player;
    let ticks_to_apex = -player.jump_power / player.gravity;
    let overlap_span = player.size + obstacle.size.x;
    (state.obstacle_speed * ticks_to_apex - overlap_span / 2.0).max(0.0)
}

fn in_jump_window(state: &GameState, obstacle: &Obstacle) -> bool {
    let gap = obstacle.pos.x - (state.player.pos.x + state.player.size);
    gap <= jump_distance(state, obstacle)
}
