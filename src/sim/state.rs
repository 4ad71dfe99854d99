//! Game state and core simulation types
//!
//! Everything the simulation touches is owned by [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::spawn::SpawnTimer;
use crate::config::GameConfig;
use crate::consts::*;

/// Current phase of the game. Exactly one holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start input
    Idle,
    /// Active gameplay
    Playing,
    /// Player hit a hazard (or a platform from the wrong side)
    GameOver,
    /// Player reached the goal (or the winning score)
    Won,
}

impl GamePhase {
    /// Terminal phases only leave through a restart
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Won)
    }
}

/// Things that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Jumped,
    /// A hazard scrolled off the left edge
    HazardPassed { score: u32 },
    Crashed,
    GoalActivated,
    Won,
    Restarted,
}

/// Visual reference for an entity; the renderer maps these to images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Player,
    /// One of the hazard images (0-based)
    Spike(u8),
    Platform,
    Coop,
}

/// The player character. x never changes; y follows gravity and jumps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Side length of the player's square
    pub size: f32,
    /// Vertical velocity (positive = down)
    pub vel_y: f32,
    pub gravity: f32,
    pub jump_power: f32,
    /// Resting on the ground or a platform
    pub grounded: bool,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, GROUND_LINE),
            size: PLAYER_SIZE,
            vel_y: 0.0,
            gravity: config.gravity,
            jump_power: config.jump_power,
            grounded: true,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(self.size))
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    /// Leave the ground. Returns false (and does nothing) unless grounded.
    pub fn jump(&mut self) -> bool {
        if !self.grounded {
            return false;
        }
        self.vel_y = self.jump_power;
        self.grounded = false;
        true
    }

    /// Apply one tick of gravity, clamping to the ground line
    pub fn integrate(&mut self) {
        self.vel_y += self.gravity;
        self.pos.y += self.vel_y;
        self.grounded = false;

        if self.pos.y >= GROUND_LINE {
            self.pos.y = GROUND_LINE;
            self.vel_y = 0.0;
            self.grounded = true;
        }
    }

    /// Come to rest with feet on `top`
    pub fn land_on(&mut self, top: f32) {
        self.pos.y = top - self.size;
        self.vel_y = 0.0;
        self.grounded = true;
    }
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Fatal on any contact; scores when passed
    Hazard,
    /// Can be landed on from above
    Platform,
}

/// A scrolling obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub sprite: Sprite,
}

impl Obstacle {
    /// A hazard at `x`, resting on the ground
    pub fn hazard(id: u32, x: f32, sprite_index: u8) -> Self {
        Self {
            id,
            kind: ObstacleKind::Hazard,
            pos: Vec2::new(x, HAZARD_Y),
            size: Vec2::new(HAZARD_WIDTH, HAZARD_HEIGHT),
            sprite: Sprite::Spike(sprite_index),
        }
    }

    /// A platform at `x`, standing on the ground
    pub fn platform(id: u32, x: f32) -> Self {
        Self {
            id,
            kind: ObstacleKind::Platform,
            pos: Vec2::new(x, PLATFORM_Y),
            size: Vec2::new(PLATFORM_WIDTH, PLATFORM_HEIGHT),
            sprite: Sprite::Platform,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    pub fn advance(&mut self, speed: f32) {
        self.pos.x -= speed;
    }

    /// Fully past the left edge
    pub fn is_offscreen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

/// The coop: reaching it wins the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalObject {
    pub pos: Vec2,
    pub size: Vec2,
    pub active: bool,
    /// Pixels per tick
    pub speed: f32,
}

impl GoalObject {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(Self::start_x(), GOAL_Y),
            size: Vec2::new(GOAL_WIDTH, GOAL_HEIGHT),
            active: false,
            speed: config.goal_speed,
        }
    }

    fn start_x() -> f32 {
        CANVAS_WIDTH + GOAL_OFFSCREEN_OFFSET
    }

    /// Place off-screen to the right and start moving
    pub fn activate(&mut self) {
        self.active = true;
        self.pos.x = Self::start_x();
    }

    pub fn advance(&mut self) {
        if self.active {
            self.pos.x -= self.speed;
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub config: GameConfig,
    /// Seed the RNG was created from
    pub seed: u64,
    pub phase: GamePhase,
    /// Hazards passed this run
    pub score: u32,
    /// Current obstacle speed (pixels per tick)
    pub obstacle_speed: f32,
    pub player: Player,
    /// Active obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    pub goal: GoalObject,
    pub spawner: SpawnTimer,
    /// Where the most recent spawn started, for spacing
    pub last_spawn_initial_x: Option<f32>,
    /// Milliseconds spent in Playing this run
    pub playing_ms: f32,
    /// Simulation ticks spent in Playing this run
    pub time_ticks: u64,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new idle game
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Idle,
            score: 0,
            obstacle_speed: config.obstacle_speed,
            player: Player::new(&config),
            obstacles: Vec::new(),
            goal: GoalObject::new(&config),
            spawner: SpawnTimer::default(),
            last_spawn_initial_x: None,
            playing_ms: 0.0,
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            config,
        }
    }

    /// Return every entity, the score and the phase to construction-time
    /// values. The RNG keeps running so the next run differs.
    pub fn reset(&mut self) {
        let rng = self.rng.clone();
        let events = std::mem::take(&mut self.events);
        *self = Self::new(self.config.clone(), self.seed);
        self.rng = rng;
        self.events = events;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
