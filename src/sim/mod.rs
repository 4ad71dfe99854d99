//! Simulation module
//!
//! All gameplay logic lives here, free of rendering and platform code:
//! - One owned `GameState` per game
//! - Seeded RNG only
//! - Obstacles kept in spawn order

pub mod autopilot;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Contact, obstacle_contact};
pub use spawn::{SpawnTimer, spawn_allowed};
pub use state::{
    GameEvent, GamePhase, GameState, GoalObject, Obstacle, ObstacleKind, Player, Sprite,
};
pub use tick::{TickInput, jump, restart_game, start_game, tick};
