//! Per-frame simulation tick
//!
//! One call advances the game by one display frame. There is no fixed
//! timestep: gravity and speeds are applied once per call, so the game runs
//! faster on faster displays. Only the spawn clock uses real elapsed time.

use super::autopilot;
use super::collision::{Contact, obstacle_contact};
use super::spawn::{spawn_obstacle, update_spawner};
use super::state::{GameEvent, GamePhase, GameState, ObstacleKind};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// The confirm action (space): start, jump or restart depending on phase
    pub confirm: bool,
    /// Demo mode - start and jump automatically
    pub autopilot: bool,
}

/// Advance the game state by one frame. `elapsed_ms` drives the spawn clock.
pub fn tick(state: &mut GameState, input: &TickInput, elapsed_ms: f32) {
    let confirm = input.confirm || (input.autopilot && autopilot::wants_confirm(state));

    if confirm {
        match state.phase {
            GamePhase::Idle => {
                start_game(state);
                return;
            }
            GamePhase::Playing => {
                jump(state);
            }
            GamePhase::GameOver | GamePhase::Won => {
                restart_game(state);
                return;
            }
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;
    state.playing_ms += elapsed_ms;

    state.player.integrate();
    advance_obstacles(state);

    if state.phase == GamePhase::Playing {
        update_goal(state);
    }
    if state.phase == GamePhase::Playing {
        update_spawner(state, elapsed_ms);
    }
}

/// Idle -> Playing. Spawns the first obstacle right away.
pub fn start_game(state: &mut GameState) {
    if state.phase != GamePhase::Idle {
        return;
    }
    state.phase = GamePhase::Playing;
    state.playing_ms = 0.0;
    state.push_event(GameEvent::Started);
    log::info!("Game started (seed {})", state.seed);

    spawn_obstacle(state);
}

/// GameOver/Won -> Idle, with everything back to its initial value
pub fn restart_game(state: &mut GameState) {
    if !state.phase.is_terminal() {
        return;
    }
    state.spawner.cancel();
    state.reset();
    state.push_event(GameEvent::Restarted);
    log::info!("Game restarted");
}

/// Jump if playing and grounded. Returns whether the jump happened.
pub fn jump(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Playing || !state.player.jump() {
        return false;
    }
    state.push_event(GameEvent::Jumped);
    true
}

/// Scroll obstacles, resolve contacts, retire the ones past the left edge
fn advance_obstacles(state: &mut GameState) {
    let speed = state.obstacle_speed;
    let mut crashed = false;

    for obstacle in &mut state.obstacles {
        obstacle.advance(speed);
        match obstacle_contact(&state.player, obstacle) {
            Contact::Clear => {}
            Contact::Landing { top } => state.player.land_on(top),
            Contact::Fatal => crashed = true,
        }
    }

    let mut hazards_passed = 0;
    state.obstacles.retain(|obstacle| {
        if !obstacle.is_offscreen() {
            return true;
        }
        if obstacle.kind == ObstacleKind::Hazard {
            hazards_passed += 1;
        }
        false
    });

    let growth = state.config.obstacle_speed_growth;
    for _ in 0..hazards_passed {
        state.score += 1;
        state.obstacle_speed *= growth;
        state.goal.speed *= growth;
        state.push_event(GameEvent::HazardPassed { score: state.score });
    }
    if hazards_passed > 0 {
        log::debug!("Score {} (speed {:.2})", state.score, state.obstacle_speed);
    }

    if crashed {
        end_run(state, GamePhase::GameOver);
    }
}

/// Summon and move the goal; detect the win
fn update_goal(state: &mut GameState) {
    if state.score >= state.config.winning_score {
        if !state.config.has_goal_object {
            end_run(state, GamePhase::Won);
            return;
        }
        if !state.goal.active {
            state.goal.activate();
            state.push_event(GameEvent::GoalActivated);
            log::info!("Goal activated at score {}", state.score);
        }
    }

    if state.goal.active {
        state.goal.advance();
        if state.player.bounds().overlaps(&state.goal.bounds()) {
            end_run(state, GamePhase::Won);
        }
    }
}

/// Enter a terminal phase and stop spawning
fn end_run(state: &mut GameState, phase: GamePhase) {
    state.phase = phase;
    state.spawner.cancel();
    match phase {
        GamePhase::GameOver => {
            state.push_event(GameEvent::Crashed);
            log::info!("Game over with score {}", state.score);
        }
        GamePhase::Won => {
            state.push_event(GameEvent::Won);
            log::info!("Won after {} ticks", state.time_ticks);
        }
        _ => {}
    }
}
