//! Draw list for the host renderer
//!
//! The host owns the canvas and the images. Each frame we describe what to
//! draw as a flat list of commands; sprites whose images have not finished
//! loading are replaced by solid rectangles.

pub mod hud;
pub mod shapes;

use glam::Vec2;

use crate::consts::*;
use crate::sim::{GameState, Sprite};

/// RGBA color, components 0.0 - 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 0.5, 0.0);
    pub const GOLD: Color = Color::rgb(1.0, 0.84, 0.0);
    /// Saddle brown ground strip
    pub const GROUND: Color = Color::rgb(0.545, 0.271, 0.075);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// One drawing instruction
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Clear the whole canvas
    Clear,
    /// Draw a loaded image scaled to the rectangle
    Sprite { sprite: Sprite, pos: Vec2, size: Vec2 },
    /// Solid rectangle
    Rect { pos: Vec2, size: Vec2, color: Color },
    /// Text anchored at `pos` (baseline)
    Text {
        text: String,
        pos: Vec2,
        size_px: f32,
        align: TextAlign,
        color: Color,
    },
}

/// Everything to draw for one frame, back to front
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCmd>,
}

impl DrawList {
    pub fn push(&mut self, cmd: DrawCmd) {
        self.commands.push(cmd);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text lines, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Host renderer collaborator
pub trait Renderer {
    fn draw(&mut self, frame: &DrawList);
}

/// Reports whether the image behind a sprite has finished loading
pub trait AssetStatus {
    fn is_ready(&self, sprite: Sprite) -> bool;
}

/// Every image is available
#[derive(Debug, Clone, Copy, Default)]
pub struct AllAssetsReady;

impl AssetStatus for AllAssetsReady {
    fn is_ready(&self, _sprite: Sprite) -> bool {
        true
    }
}

/// Nothing loaded yet; everything draws as a placeholder
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssetsReady;

impl AssetStatus for NoAssetsReady {
    fn is_ready(&self, _sprite: Sprite) -> bool {
        false
    }
}

/// Build the draw list for the current state
pub fn build_frame(state: &GameState, assets: &impl AssetStatus) -> DrawList {
    let mut frame = DrawList::default();
    frame.push(DrawCmd::Clear);

    let player = &state.player;
    frame.push(shapes::sprite_or_fallback(
        Sprite::Player,
        player.pos,
        Vec2::splat(player.size),
        assets,
    ));

    for obstacle in &state.obstacles {
        frame.push(shapes::sprite_or_fallback(
            obstacle.sprite,
            obstacle.pos,
            obstacle.size,
            assets,
        ));
    }

    frame.push(DrawCmd::Rect {
        pos: Vec2::new(0.0, GROUND_TOP),
        size: Vec2::new(CANVAS_WIDTH, GROUND_HEIGHT),
        color: Color::GROUND,
    });

    frame.push(hud::score_line(state.score));

    if state.goal.active {
        frame.push(shapes::sprite_or_fallback(
            Sprite::Coop,
            state.goal.pos,
            state.goal.size,
            assets,
        ));
    }

    for cmd in hud::overlay(state) {
        frame.push(cmd);
    }

    frame
}
