//! Game variants and tuning
//!
//! Both variants of the game run on the same simulation; everything that
//! differs between them lives in [`GameConfig`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Built-in game variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// Hazards only, constant speed, win on reaching the score
    Classic,
    /// Platforms, speed growth and the coop to reach at the end
    #[default]
    Coop,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::Coop => "Coop",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Variant::Classic),
            "coop" => Some(Variant::Coop),
            _ => None,
        }
    }
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    /// JSON could not be parsed into a config
    Parse(serde_json::Error),
    /// A field holds a value the simulation cannot run with
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid { field, reason } => {
                write!(f, "invalid config field `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Gameplay tuning. Speeds and accelerations are per tick, times in ms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Downward acceleration added to the player's velocity each tick
    pub gravity: f32,
    /// Velocity set on jump (negative = up)
    pub jump_power: f32,
    /// Speed multiplier applied each time a hazard is passed
    pub obstacle_speed_growth: f32,
    /// Score needed to win (or to summon the goal object)
    pub winning_score: u32,
    /// Spawn platforms as well as hazards
    pub has_platforms: bool,
    /// Winning requires reaching the goal object
    pub has_goal_object: bool,

    /// Starting obstacle speed (pixels per tick)
    pub obstacle_speed: f32,
    /// Starting goal object speed (pixels per tick)
    pub goal_speed: f32,
    /// Chance that a spawn is a platform (when platforms are enabled)
    pub platform_chance: f64,
    /// Spawn delay range (ms)
    pub min_spawn_ms: f32,
    pub max_spawn_ms: f32,
    /// Minimum horizontal gap between consecutive spawns (pixels)
    pub min_obstacle_spacing: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_variant(Variant::default())
    }
}

impl GameConfig {
    /// Create the config for a built-in variant
    pub fn from_variant(variant: Variant) -> Self {
        match variant {
            Variant::Coop => Self {
                gravity: 0.27,
                jump_power: -12.0,
                obstacle_speed_growth: 1.1,
                winning_score: 18,
                has_platforms: true,
                has_goal_object: true,
                obstacle_speed: 6.0,
                goal_speed: 6.0,
                platform_chance: 0.3,
                min_spawn_ms: 800.0,
                max_spawn_ms: 1700.0,
                min_obstacle_spacing: 200.0,
            },
            Variant::Classic => Self {
                gravity: 0.4,
                jump_power: -14.0,
                obstacle_speed_growth: 1.0,
                winning_score: 10,
                has_platforms: false,
                has_goal_object: false,
                obstacle_speed: 6.0,
                goal_speed: 6.0,
                platform_chance: 0.0,
                min_spawn_ms: 800.0,
                max_spawn_ms: 1700.0,
                min_obstacle_spacing: 200.0,
            },
        }
    }

    /// Parse and validate a JSON config. Missing fields take the default
    /// variant's values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason| Err(ConfigError::Invalid { field, reason });

        let floats = [
            ("gravity", self.gravity),
            ("jump_power", self.jump_power),
            ("obstacle_speed_growth", self.obstacle_speed_growth),
            ("obstacle_speed", self.obstacle_speed),
            ("goal_speed", self.goal_speed),
            ("min_spawn_ms", self.min_spawn_ms),
            ("max_spawn_ms", self.max_spawn_ms),
            ("min_obstacle_spacing", self.min_obstacle_spacing),
        ];
        if let Some(&(field, _)) = floats.iter().find(|(_, value)| !value.is_finite()) {
            return invalid(field, "must be a finite number");
        }
        if !(self.gravity > 0.0) {
            return invalid("gravity", "must be positive");
        }
        if !(self.jump_power < 0.0) {
            return invalid("jump_power", "must be negative (upward)");
        }
        if !(self.obstacle_speed_growth >= 1.0) {
            return invalid("obstacle_speed_growth", "must be at least 1.0");
        }
        if self.winning_score == 0 {
            return invalid("winning_score", "must be at least 1");
        }
        if !(self.obstacle_speed > 0.0) {
            return invalid("obstacle_speed", "must be positive");
        }
        if self.has_goal_object && !(self.goal_speed > 0.0) {
            return invalid("goal_speed", "must be positive");
        }
        if !(0.0..=1.0).contains(&self.platform_chance) {
            return invalid("platform_chance", "must be within 0.0..=1.0");
        }
        if !(self.min_spawn_ms > 0.0) {
            return invalid("min_spawn_ms", "must be positive");
        }
        if !(self.max_spawn_ms >= self.min_spawn_ms) {
            return invalid("max_spawn_ms", "must not be below min_spawn_ms");
        }
        if !(self.min_obstacle_spacing >= 0.0) {
            return invalid("min_obstacle_spacing", "must not be negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for variant in [Variant::Classic, Variant::Coop] {
            let config = GameConfig::from_variant(variant);
            assert!(config.validate().is_ok(), "{} preset", variant.as_str());
        }
    }

    #[test]
    fn test_variant_names() {
        assert_eq!(Variant::from_str("COOP"), Some(Variant::Coop));
        assert_eq!(Variant::from_str("classic"), Some(Variant::Classic));
        assert_eq!(Variant::from_str("arcade"), None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "winning_score": 3, "has_platforms": false }"#)
            .expect("valid config");
        assert_eq!(config.winning_score, 3);
        assert!(!config.has_platforms);
        assert_eq!(config.gravity, GameConfig::default().gravity);
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig::from_variant(Variant::Classic);
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = GameConfig::from_json(r#"{ "jump_power": 5.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "jump_power", .. }));

        let err = GameConfig::from_json(r#"{ "min_spawn_ms": 900, "max_spawn_ms": 100 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "max_spawn_ms", .. }));

        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_overflowing_floats() {
        // serde_json reads out-of-range f32 values as infinity
        let err = GameConfig::from_json(r#"{ "max_spawn_ms": 1e39 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "max_spawn_ms", .. }));

        let err = GameConfig::from_json(r#"{ "obstacle_speed": 1e40 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "obstacle_speed", .. }));

        let err = GameConfig::from_json(r#"{ "platform_chance": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "platform_chance", .. }));
    }
}
