//! Game settings
//!
//! Supplied by the host as JSON (the canvas `data-config` attribute on web).
//! Every field has a default, so a partial document only overrides what it
//! names.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Column pool tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSettings {
    /// Pool capacity (0 disables columns)
    pub max: usize,
    /// Milliseconds the spawn timer must exceed before a spawn attempt
    pub spawn_interval_ms: f32,
    /// Probability that a ready timer actually starts a free column
    pub spawn_chance: f32,
    pub width: f32,
    /// Leftward scroll per frame
    pub scroll_speed: f32,
}

impl Default for ColumnSettings {
    fn default() -> Self {
        Self {
            max: 5,
            spawn_interval_ms: 2000.0,
            spawn_chance: 0.75,
            width: COLUMN_WIDTH,
            scroll_speed: COLUMN_SCROLL_SPEED,
        }
    }
}

/// Projectile pool tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileSettings {
    pub max: usize,
    /// Multiplier on the muzzle speed
    pub speed: f32,
    pub radius: f32,
}

impl Default for ProjectileSettings {
    fn default() -> Self {
        Self {
            max: 10,
            speed: 5.0,
            radius: 8.0,
        }
    }
}

/// Player tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Number of players sharing the keyboard
    pub count: usize,
    pub radius: f32,
    pub speed_factor: f32,
    /// Scale diagonal movement back to `speed_factor` (off keeps the √2 boost)
    pub normalize_diagonal: bool,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            count: 1,
            radius: PLAYER_RADIUS,
            speed_factor: PLAYER_SPEED_FACTOR,
            normalize_diagonal: false,
        }
    }
}

/// All game settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub columns: ColumnSettings,
    pub projectiles: ProjectileSettings,
    pub player: PlayerSettings,
    /// Fixed RNG seed; the host picks one from its clock when absent
    pub seed: Option<u64>,
}

impl GameSettings {
    /// Parse and validate a JSON settings document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings, falling back to defaults (with a warning) on any error
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(settings)) => {
                log::info!("Loaded settings from host config");
                settings
            }
            Some(Err(e)) => {
                log::warn!("Ignoring host config: {}", e);
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("columns.spawn_interval_ms", self.columns.spawn_interval_ms)?;
        positive("columns.width", self.columns.width)?;
        positive("columns.scroll_speed", self.columns.scroll_speed)?;
        positive("projectiles.speed", self.projectiles.speed)?;
        positive("projectiles.radius", self.projectiles.radius)?;
        positive("player.radius", self.player.radius)?;
        positive("player.speed_factor", self.player.speed_factor)?;

        let chance = self.columns.spawn_chance;
        if !(0.0..=1.0).contains(&chance) {
            return Err(ConfigError::OutOfUnitRange {
                field: "columns.spawn_chance",
                value: chance,
            });
        }
        if self.player.count == 0 {
            return Err(ConfigError::NoPlayers);
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    // NaN fails this check too
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = GameSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.projectiles.max, 10);
        assert_eq!(settings.columns.spawn_chance, 0.75);
    }

    #[test]
    fn test_partial_json_overrides() {
        let settings =
            GameSettings::from_json(r#"{"columns": {"max": 0}, "seed": 7}"#).unwrap();
        assert_eq!(settings.columns.max, 0);
        assert_eq!(settings.columns.spawn_interval_ms, 2000.0);
        assert_eq!(settings.seed, Some(7));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = GameSettings::from_json(r#"{"columns": {"spawn_interval_ms": 0}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NotPositive { field: "columns.spawn_interval_ms", .. }
        ));

        let err = GameSettings::from_json(r#"{"columns": {"spawn_chance": 1.5}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfUnitRange { .. }));

        let err = GameSettings::from_json(r#"{"player": {"count": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoPlayers));
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert!(matches!(
            GameSettings::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
        assert_eq!(
            GameSettings::from_json_or_default(Some("{not json")),
            GameSettings::default()
        );
        assert_eq!(GameSettings::from_json_or_default(None), GameSettings::default());
    }
}
