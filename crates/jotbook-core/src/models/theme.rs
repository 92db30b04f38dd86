//! Theme preference model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Theme mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
    /// Follow system preference
    Auto,
}

impl ThemeMode {
    /// All selectable modes, in the order the themes screen lists them
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::Auto];

    /// Stable lowercase name, matching the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "auto" => Ok(Self::Auto),
            other => Err(Error::InvalidInput(format!("unknown theme mode '{other}'"))),
        }
    }
}

/// Concrete light/dark scheme reported by the host or chosen by a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    /// Check if the scheme is dark
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_theme_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Auto).unwrap(), "\"auto\"");
        let parsed: ThemeMode = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, ThemeMode::Dark);
    }

    #[test]
    fn test_theme_mode_rejects_unknown_values() {
        assert!(serde_json::from_str::<ThemeMode>("\"system\"").is_err());
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_theme_mode_parse_is_case_insensitive() {
        assert_eq!(" Dark ".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!("AUTO".parse::<ThemeMode>().unwrap(), ThemeMode::Auto);
    }
}
