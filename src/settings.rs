//! Player preferences
//!
//! Kept apart from [`GameConfig`](crate::GameConfig): settings change how the
//! game sounds, never how it plays.

use serde::{Deserialize, Serialize};

/// Player preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0), applies to the jump cue
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0), applies to the looping tracks
    pub music_volume: f32,
    /// Silence everything
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            sfx_volume: 1.0,
            music_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, falling back to defaults
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings.clamped()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable settings ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Copy with every volume clamped to 0.0 - 1.0
    pub fn clamped(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        self
    }

    /// Effective effect volume
    pub fn effective_sfx(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Effective music volume
    pub fn effective_music(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_volumes() {
        let settings = Settings {
            master_volume: 0.5,
            sfx_volume: 0.5,
            music_volume: 1.0,
            muted: false,
        };
        assert!((settings.effective_sfx() - 0.25).abs() < 1e-6);
        assert!((settings.effective_music() - 0.5).abs() < 1e-6);

        let muted = Settings { muted: true, ..settings };
        assert_eq!(muted.effective_sfx(), 0.0);
        assert_eq!(muted.effective_music(), 0.0);
    }

    #[test]
    fn test_from_json_clamps_and_falls_back() {
        let settings = Settings::from_json(r#"{ "master_volume": 3.0 }"#);
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(Settings::from_json("garbage"), Settings::default());
    }
}
