//! Match settings
//!
//! Loaded once at startup: from LocalStorage in the browser, from the
//! `PURSUIT_FIELD_SETTINGS` environment variable (JSON) natively. Anything
//! missing falls back to the defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;
use crate::renderer::vertex::colors::TEAM_PALETTE;
use crate::sim::{PairOrder, SteeringMode};

/// Match settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Roster ===
    /// Agents spawned for each team
    pub agents_per_team: usize,
    /// Number of teams (each needs a palette color)
    pub team_count: usize,

    // === Simulation ===
    /// Steering rule for every agent
    pub steering: SteeringMode,
    /// Pair visiting policy of the agent-agent collision pass
    pub pair_order: PairOrder,
    /// Frame rate cap
    pub target_fps: u32,
    /// Spawn seed (time-based when absent)
    pub seed: Option<u64>,

    // === Frontends ===
    /// Frames the headless native frontend runs before requesting close
    pub headless_frames: u64,
    /// Draw the heading marker dot on each agent
    pub show_heading: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            agents_per_team: AGENTS_PER_TEAM,
            team_count: TEAM_COUNT,

            steering: SteeringMode::Pursuit,
            pair_order: PairOrder::Ordered,
            target_fps: TARGET_FPS,
            seed: None,

            headless_frames: 600,
            show_heading: true,
        }
    }
}

impl Settings {
    /// Reject settings the match cannot start with
    pub fn validate(&self) -> Result<(), SimError> {
        if self.agents_per_team == 0 {
            return Err(SimError::InvalidSettings("agents_per_team must be at least 1".into()));
        }
        if self.team_count == 0 {
            return Err(SimError::InvalidSettings("team_count must be at least 1".into()));
        }
        if self.team_count > TEAM_PALETTE.len() {
            return Err(SimError::TeamOutOfPalette {
                team_id: (self.team_count - 1) as u32,
                palette_len: TEAM_PALETTE.len(),
            });
        }
        if self.target_fps == 0 {
            return Err(SimError::InvalidSettings("target_fps must be positive".into()));
        }
        Ok(())
    }

    /// Parse settings JSON, falling back to defaults on malformed input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "pursuit_field_settings";

    /// Environment variable holding native settings JSON
    #[allow(dead_code)]
    const ENV_VAR: &'static str = "PURSUIT_FIELD_SETTINGS";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the environment (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(json) => {
                log::info!("Loaded settings from {}", Self::ENV_VAR);
                Self::from_json(&json)
            }
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.agents_per_team, 2);
        assert_eq!(settings.team_count, 2);
        assert_eq!(settings.target_fps, 60);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "team_count": 4, "pair_order": "Unordered" }"#);
        assert_eq!(settings.team_count, 4);
        assert_eq!(settings.pair_order, PairOrder::Unordered);
        assert_eq!(settings.agents_per_team, AGENTS_PER_TEAM);
        assert!(settings.show_heading);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert_eq!(Settings::from_json("{ not json"), Settings::default());
    }

    #[test]
    fn test_too_many_teams_for_palette() {
        let settings = Settings {
            team_count: 6,
            ..Default::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SimError::TeamOutOfPalette {
                team_id: 5,
                palette_len: 5
            })
        );
    }

    #[test]
    fn test_zero_counts_rejected() {
        let settings = Settings {
            agents_per_team: 0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(SimError::InvalidSettings(_))));

        let settings = Settings {
            target_fps: 0,
            ..Default::default()
        };
        assert!(settings.validate().unwrap_err().is_setup_error());
    }
}
