//! Obstacle spawning
//!
//! Spawning runs on its own clock: a one-shot [`SpawnTimer`] that the
//! spawner re-arms after every spawn with a fresh random delay. Leaving the
//! Playing phase cancels it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState, Obstacle, ObstacleKind};
use crate::config::GameConfig;
use crate::consts::{CANVAS_WIDTH, HAZARD_SPRITES};

/// One-shot countdown (ms)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnTimer {
    remaining_ms: Option<f32>,
}

impl SpawnTimer {
    /// Schedule the next firing `delay_ms` from now, replacing any pending one
    pub fn arm(&mut self, delay_ms: f32) {
        self.remaining_ms = Some(delay_ms.max(0.0));
    }

    pub fn cancel(&mut self) {
        self.remaining_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.remaining_ms.is_some()
    }

    pub fn remaining_ms(&self) -> Option<f32> {
        self.remaining_ms
    }

    /// Count down. Returns true (and disarms) when the delay has elapsed.
    pub fn advance(&mut self, elapsed_ms: f32) -> bool {
        let Some(remaining) = self.remaining_ms.as_mut() else {
            return false;
        };
        *remaining -= elapsed_ms;
        if *remaining <= 0.0 {
            self.remaining_ms = None;
            true
        } else {
            false
        }
    }
}

/// Whether the spawner may keep producing obstacles
pub fn spawn_allowed(state: &GameState) -> bool {
    state.phase == GamePhase::Playing && !(state.config.has_goal_object && state.goal.active)
}

/// Delay before the next spawn. `gap` is the distance from the right edge
/// to where the previous spawn started (pixels); a short gap pushes the next
/// spawn back by the deficit, one millisecond per pixel.
pub fn next_spawn_delay<R: Rng>(rng: &mut R, config: &GameConfig, gap: Option<f32>) -> f32 {
    let (min, max) = (config.min_spawn_ms, config.max_spawn_ms);
    let mut delay = if min.is_finite() && max.is_finite() && max > min {
        rng.random_range(min..max)
    } else {
        min
    };
    if let Some(gap) = gap {
        if gap < config.min_obstacle_spacing {
            delay += config.min_obstacle_spacing - gap;
        }
    }
    delay
}

/// Platform probability usable by `random_bool`, whatever the config holds
fn platform_chance(config: &GameConfig) -> f64 {
    if !config.has_platforms || config.platform_chance.is_nan() {
        return 0.0;
    }
    config.platform_chance.clamp(0.0, 1.0)
}

/// Create one obstacle at the right edge and re-arm the timer
pub fn spawn_obstacle(state: &mut GameState) {
    let gap = state.last_spawn_initial_x.map(|x| CANVAS_WIDTH - x);

    let is_platform = state.rng.random_bool(platform_chance(&state.config));
    let id = state.next_entity_id();
    let obstacle = if is_platform {
        Obstacle::platform(id, CANVAS_WIDTH)
    } else {
        let sprite = state.rng.random_range(0..HAZARD_SPRITES);
        Obstacle::hazard(id, CANVAS_WIDTH, sprite)
    };
    log::debug!(
        "Spawned {:?} #{} (speed {:.2})",
        obstacle.kind,
        obstacle.id,
        state.obstacle_speed
    );
    state.last_spawn_initial_x = Some(obstacle.pos.x);
    state.obstacles.push(obstacle);

    let delay = next_spawn_delay(&mut state.rng, &state.config, gap);
    state.spawner.arm(delay);
}

/// Advance the spawn clock; spawn if it fires while spawning is allowed.
/// A firing outside the gate is dropped and the timer stays disarmed.
pub fn update_spawner(state: &mut GameState, elapsed_ms: f32) {
    if !state.spawner.advance(elapsed_ms) {
        return;
    }
    if spawn_allowed(state) {
        spawn_obstacle(state);
    } else {
        log::debug!("Spawner stopped");
    }
}

/// Count of spawned obstacles of a kind still on screen
pub fn active_count(state: &GameState, kind: ObstacleKind) -> usize {
    state.obstacles.iter().filter(|o| o.kind == kind).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn playing_state(config: GameConfig) -> GameState {
        let mut state = GameState::new(config, 42);
        state.phase = GamePhase::Playing;
        state
    }

    #[test]
    fn test_timer_fires_once() {
        let mut timer = SpawnTimer::default();
        assert!(!timer.advance(1000.0));

        timer.arm(50.0);
        assert!(!timer.advance(30.0));
        assert!(timer.advance(30.0));
        assert!(!timer.is_armed());
        assert!(!timer.advance(30.0));
    }

    #[test]
    fn test_timer_cancel() {
        let mut timer = SpawnTimer::default();
        timer.arm(10.0);
        timer.cancel();
        assert!(!timer.advance(100.0));
    }

    #[test]
    fn test_delay_within_range() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..200 {
            let delay = next_spawn_delay(&mut rng, &config, None);
            assert!(delay >= config.min_spawn_ms && delay < config.max_spawn_ms);
        }
    }

    #[test]
    fn test_short_gap_adds_deficit() {
        let config = GameConfig {
            min_spawn_ms: 1000.0,
            max_spawn_ms: 1000.0,
            ..GameConfig::default()
        };
        let mut rng = Pcg32::seed_from_u64(3);
        assert_eq!(next_spawn_delay(&mut rng, &config, Some(50.0)), 1150.0);
        assert_eq!(next_spawn_delay(&mut rng, &config, Some(500.0)), 1000.0);
    }

    #[test]
    fn test_spawn_at_right_edge_and_rearm() {
        let mut state = playing_state(GameConfig::default());
        spawn_obstacle(&mut state);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].pos.x, CANVAS_WIDTH);
        assert_eq!(state.last_spawn_initial_x, Some(CANVAS_WIDTH));
        assert!(state.spawner.is_armed());

        let first_delay = state.spawner.remaining_ms().unwrap();
        assert!(first_delay >= state.config.min_spawn_ms);
        assert!(first_delay < state.config.max_spawn_ms);

        // Every later spawn starts at the edge the previous one started from,
        // so the whole spacing is added whatever the earlier one did since
        let floor = state.config.min_spawn_ms + state.config.min_obstacle_spacing;
        let ceiling = state.config.max_spawn_ms + state.config.min_obstacle_spacing;
        for _ in 0..50 {
            for obstacle in &mut state.obstacles {
                obstacle.advance(state.obstacle_speed * 60.0);
            }
            spawn_obstacle(&mut state);
            let delay = state.spawner.remaining_ms().unwrap();
            assert!(delay >= floor && delay < ceiling, "delay {delay}");
        }
    }

    #[test]
    fn test_spacing_applies_over_a_long_run() {
        let mut state = GameState::new(GameConfig::default(), 7);
        crate::sim::tick::start_game(&mut state);
        let floor = state.config.min_spawn_ms + state.config.min_obstacle_spacing;
        // Keep the run going without a player in the way
        state.player.pos.y = -10_000.0;

        let mut spawns = 0;
        for _ in 0..3_600 {
            let before = state.obstacles.last().map(|o| o.id);
            crate::sim::tick::tick(&mut state, &Default::default(), 1000.0 / 60.0);
            state.player.pos.y = -10_000.0;
            state.player.vel_y = 0.0;
            let newest = state.obstacles.last().map(|o| o.id);
            if newest.is_some() && newest != before {
                spawns += 1;
                assert!(state.spawner.remaining_ms().unwrap() >= floor);
            }
            if state.phase != GamePhase::Playing {
                break;
            }
        }
        assert!(spawns > 10, "spawns: {spawns}");
    }

    #[test]
    fn test_out_of_range_tuning_does_not_panic() {
        let config = GameConfig {
            max_spawn_ms: f32::INFINITY,
            platform_chance: 1.5,
            ..GameConfig::default()
        };
        let mut state = playing_state(config);
        spawn_obstacle(&mut state);
        assert_eq!(active_count(&state, ObstacleKind::Platform), 1);
        assert_eq!(state.spawner.remaining_ms(), Some(800.0));

        state.config.platform_chance = f64::NAN;
        spawn_obstacle(&mut state);
        assert_eq!(active_count(&state, ObstacleKind::Hazard), 1);
    }

    #[test]
    fn test_classic_spawns_only_hazards() {
        let mut state = playing_state(GameConfig::from_variant(Variant::Classic));
        for _ in 0..100 {
            spawn_obstacle(&mut state);
        }
        assert_eq!(active_count(&state, ObstacleKind::Platform), 0);
        assert_eq!(active_count(&state, ObstacleKind::Hazard), 100);
    }

    #[test]
    fn test_coop_spawns_some_platforms() {
        let mut state = playing_state(GameConfig::default());
        for _ in 0..200 {
            spawn_obstacle(&mut state);
        }
        let platforms = active_count(&state, ObstacleKind::Platform);
        assert!(platforms > 20 && platforms < 120, "platforms: {platforms}");
    }

    #[test]
    fn test_gate_stops_rescheduling() {
        let mut state = playing_state(GameConfig::default());
        state.spawner.arm(10.0);
        state.goal.activate();

        update_spawner(&mut state, 20.0);
        assert!(state.obstacles.is_empty());
        assert!(!state.spawner.is_armed());
    }

    #[test]
    fn test_fires_while_playing() {
        let mut state = playing_state(GameConfig::default());
        state.spawner.arm(10.0);
        update_spawner(&mut state, 5.0);
        assert!(state.obstacles.is_empty());
        update_spawner(&mut state, 5.0);
        assert_eq!(state.obstacles.len(), 1);
        assert!(state.spawner.is_armed());
    }
}
