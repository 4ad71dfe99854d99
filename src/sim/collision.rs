//! Collision detection and response for axis-aligned boxes
//!
//! Everything in the playfield is a rectangle: the player's square, the
//! obstacles and the goal. Screen coordinates, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Obstacle, ObstacleKind, Player};
use crate::consts::LANDING_TOLERANCE;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    /// Strict overlap: boxes that only share an edge do not touch
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

/// Outcome of touching an obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
    /// No overlap
    Clear,
    /// Player came down onto a platform; rest on `top`
    Landing { top: f32 },
    /// Game over
    Fatal,
}

/// Classify the player's contact with an obstacle
pub fn obstacle_contact(player: &Player, obstacle: &Obstacle) -> Contact {
    let obstacle_box = obstacle.bounds();
    if !player.bounds().overlaps(&obstacle_box) {
        return Contact::Clear;
    }

    match obstacle.kind {
        ObstacleKind::Hazard => Contact::Fatal,
        ObstacleKind::Platform => {
            let top = obstacle_box.top();
            let from_above = player.bottom() <= top + LANDING_TOLERANCE;
            let descending = player.vel_y >= 0.0;
            if from_above && descending {
                Contact::Landing { top }
            } else {
                // Side or underside hit
                Contact::Fatal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::consts::*;

    fn player_at(y: f32, vel_y: f32) -> Player {
        let mut player = Player::new(&GameConfig::default());
        player.pos.y = y;
        player.vel_y = vel_y;
        player.grounded = false;
        player
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Aabb::new(Vec2::ZERO, Vec2::splat(10.0));
        let touching = Aabb::new(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        let inside = Aabb::new(Vec2::new(9.0, 9.0), Vec2::splat(10.0));
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_hazard_contact_is_fatal() {
        let player = player_at(GROUND_LINE, 0.0);
        let hazard = Obstacle::hazard(1, PLAYER_X + 10.0, 0);
        assert_eq!(obstacle_contact(&player, &hazard), Contact::Fatal);

        let far = Obstacle::hazard(2, CANVAS_WIDTH, 0);
        assert_eq!(obstacle_contact(&player, &far), Contact::Clear);
    }

    #[test]
    fn test_platform_landing_from_above() {
        // Feet 3px into the platform top while falling
        let player = player_at(PLATFORM_Y - PLAYER_SIZE + 3.0, 4.0);
        let platform = Obstacle::platform(1, PLAYER_X);
        assert_eq!(
            obstacle_contact(&player, &platform),
            Contact::Landing { top: PLATFORM_Y }
        );
    }

    #[test]
    fn test_platform_side_hit_is_fatal() {
        // Standing on the ground, platform slides into the player
        let player = player_at(GROUND_LINE, 0.0);
        let platform = Obstacle::platform(1, PLAYER_X + PLAYER_SIZE - 5.0);
        assert_eq!(obstacle_contact(&player, &platform), Contact::Fatal);
    }

    #[test]
    fn test_platform_rising_through_is_fatal() {
        // Feet within tolerance but still moving up
        let player = player_at(PLATFORM_Y - PLAYER_SIZE + 3.0, -2.0);
        let platform = Obstacle::platform(1, PLAYER_X);
        assert_eq!(obstacle_contact(&player, &platform), Contact::Fatal);
    }
}
