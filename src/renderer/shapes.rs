//! Sprite placement with placeholder fallback

use glam::Vec2;

use super::{AssetStatus, Color, DrawCmd};
use crate::sim::Sprite;

/// Placeholder color while a sprite's image is loading
pub fn fallback_color(sprite: Sprite) -> Color {
    match sprite {
        Sprite::Player => Color::BLUE,
        Sprite::Spike(_) => Color::RED,
        Sprite::Platform => Color::GREEN,
        Sprite::Coop => Color::GOLD,
    }
}

/// The sprite if its image is ready, otherwise a solid rectangle
pub fn sprite_or_fallback(
    sprite: Sprite,
    pos: Vec2,
    size: Vec2,
    assets: &impl AssetStatus,
) -> DrawCmd {
    if assets.is_ready(sprite) {
        DrawCmd::Sprite { sprite, pos, size }
    } else {
        DrawCmd::Rect {
            pos,
            size,
            color: fallback_color(sprite),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Only the player image has loaded
    struct PlayerOnly;

    impl AssetStatus for PlayerOnly {
        fn is_ready(&self, sprite: Sprite) -> bool {
            sprite == Sprite::Player
        }
    }

    #[test]
    fn test_per_sprite_readiness() {
        let pos = Vec2::new(10.0, 20.0);
        let size = Vec2::splat(5.0);

        assert_eq!(
            sprite_or_fallback(Sprite::Player, pos, size, &PlayerOnly),
            DrawCmd::Sprite {
                sprite: Sprite::Player,
                pos,
                size
            }
        );
        assert_eq!(
            sprite_or_fallback(Sprite::Spike(4), pos, size, &PlayerOnly),
            DrawCmd::Rect {
                pos,
                size,
                color: Color::RED
            }
        );
    }
}
