//! Game settings and configuration.

use crate::catalog::Translation;
use crate::locator::VerseLocation;
use crate::scoring::PointRules;
use serde::{Deserialize, Serialize};

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Number of players (1 for single-player, up to 8).
    pub player_count: u8,
    /// Automatically reveal the first/last words at round start and one
    /// extra word after every non-winning turn.
    pub auto_reveal: bool,
    /// Keep structural headings in fetched verse text (wrapped in
    /// `{{...}}` markers) instead of stripping them.
    pub headings: bool,
    /// Translation identifier (e.g. "RUF").
    pub translation: String,
    /// Point coefficients.
    pub rules: PointRules,
    /// Fixed verse location for the deterministic debug mode. When set,
    /// rounds skip the random draw and a canned verse source should be
    /// used instead of the live service.
    pub debug_location: Option<VerseLocation>,
}

impl GameSettings {
    /// Default settings for the given number of players.
    pub fn new(player_count: u8) -> Self {
        Self {
            player_count,
            auto_reveal: true,
            headings: false,
            translation: "RUF".to_string(),
            rules: PointRules::default(),
            debug_location: None,
        }
    }

    /// Single-player settings.
    pub fn solo() -> Self {
        Self::new(1)
    }

    /// Whether more than one player takes turns.
    pub fn is_multiplayer(&self) -> bool {
        self.player_count > 1
    }

    /// Validate settings and return any errors.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.player_count < 1 {
            return Err(SettingsError::NoPlayers);
        }
        if self.player_count > 8 {
            return Err(SettingsError::TooManyPlayers);
        }
        if Translation::by_code(&self.translation).is_none() {
            return Err(SettingsError::UnknownTranslation(self.translation.clone()));
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::solo()
    }
}

/// Errors from invalid game settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsError {
    NoPlayers,
    TooManyPlayers,
    UnknownTranslation(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::NoPlayers => write!(f, "Need at least one player"),
            SettingsError::TooManyPlayers => write!(f, "Maximum 8 players allowed"),
            SettingsError::UnknownTranslation(code) => {
                write!(f, "Unknown translation: {}", code)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = GameSettings::default();
        assert_eq!(settings.player_count, 1);
        assert!(settings.auto_reveal);
        assert!(!settings.headings);
        assert_eq!(settings.translation, "RUF");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_no_players() {
        let settings = GameSettings {
            player_count: 0,
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::NoPlayers));
    }

    #[test]
    fn test_validation_too_many_players() {
        let settings = GameSettings {
            player_count: 9,
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::TooManyPlayers));
    }

    #[test]
    fn test_validation_unknown_translation() {
        let settings = GameSettings {
            translation: "NIV".to_string(),
            ..Default::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::UnknownTranslation("NIV".to_string()))
        );
    }

    #[test]
    fn test_settings_serialization() {
        let mut settings = GameSettings::new(3);
        settings.rules.apply_overrides(&[20, 2, -1]);
        settings.debug_location = Some(VerseLocation::new(6, 1, 1));
        let json = serde_json::to_string(&settings).unwrap();
        let restored: GameSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, settings);
    }
}
