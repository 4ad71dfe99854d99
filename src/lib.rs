//! Coop Dash - A side-scrolling jump-and-dodge game
//!
//! Core modules:
//! - `sim`: Simulation (physics, collisions, spawning, game state)
//! - `driver`: Per-frame driver wiring input, simulation, audio and rendering
//! - `renderer`: Draw list and HUD handed to the host renderer
//! - `audio`: Event-driven audio channel control
//! - `config`: Game variants and tuning
//! - `settings`: Player preferences (volumes)

pub mod audio;
pub mod config;
pub mod driver;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use config::{ConfigError, GameConfig, Variant};
pub use driver::FrameDriver;
pub use settings::Settings;

/// Playfield geometry constants
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 1200.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;
    /// Everything is sized relative to this
    pub const SCALE: f32 = 1.5;

    /// Height of the ground strip at the bottom of the canvas
    pub const GROUND_HEIGHT: f32 = 10.0 * SCALE;
    /// Top edge of the ground strip
    pub const GROUND_TOP: f32 = CANVAS_HEIGHT - GROUND_HEIGHT;

    /// Player defaults
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_SIZE: f32 = 100.0 * SCALE;
    /// Player y when resting on the ground
    pub const GROUND_LINE: f32 = GROUND_TOP - PLAYER_SIZE;

    /// Hazard (spike) dimensions
    pub const HAZARD_WIDTH: f32 = 100.0 * SCALE;
    pub const HAZARD_HEIGHT: f32 = 80.0 * SCALE;
    /// Hazards sink one pixel into the ground
    pub const HAZARD_Y: f32 = GROUND_TOP - HAZARD_HEIGHT + 1.0;
    /// Number of distinct hazard sprites
    pub const HAZARD_SPRITES: u8 = 6;

    /// Platform dimensions
    pub const PLATFORM_WIDTH: f32 = 280.0 * SCALE;
    pub const PLATFORM_HEIGHT: f32 = 80.0 * SCALE;
    pub const PLATFORM_Y: f32 = GROUND_TOP - PLATFORM_HEIGHT;
    /// How far below a platform's top the player's feet may be and still land
    pub const LANDING_TOLERANCE: f32 = 10.0;

    /// Goal object (the coop)
    pub const GOAL_WIDTH: f32 = 600.0 * SCALE;
    pub const GOAL_HEIGHT: f32 = 400.0 * SCALE;
    pub const GOAL_Y: f32 = CANVAS_HEIGHT - GOAL_HEIGHT;
    /// Goal appears this far past the right edge
    pub const GOAL_OFFSCREEN_OFFSET: f32 = 300.0;

    /// Objective banner timing (ms)
    pub const OBJECTIVE_DISPLAY_MS: f32 = 2000.0;
    pub const OBJECTIVE_FADE_MS: f32 = 2000.0;

    /// Longest frame the driver will report to the simulation (ms)
    pub const MAX_FRAME_MS: f32 = 100.0;
}
