//! Layout mode for the animated name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the name is laid out inside the hero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// The whole string, left to right, centered.
    #[default]
    Normal,
    /// First token on the left edge, remainder on the right edge.
    Split,
}

impl LayoutMode {
    /// Toggle between normal and split layout.
    pub fn toggle(&self) -> Self {
        match self {
            LayoutMode::Normal => LayoutMode::Split,
            LayoutMode::Split => LayoutMode::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Normal => "normal",
            LayoutMode::Split => "split",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown layout mode `{0}` (expected `normal` or `split`)")]
pub struct ParseLayoutModeError(pub String);

impl FromStr for LayoutMode {
    type Err = ParseLayoutModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(LayoutMode::Normal),
            "split" => Ok(LayoutMode::Split),
            other => Err(ParseLayoutModeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(LayoutMode::Normal.toggle(), LayoutMode::Split);
        assert_eq!(LayoutMode::Split.toggle().toggle(), LayoutMode::Split);
    }

    #[test]
    fn test_parse() {
        assert_eq!("split".parse::<LayoutMode>(), Ok(LayoutMode::Split));
        assert_eq!(" Normal ".parse::<LayoutMode>(), Ok(LayoutMode::Normal));
        assert!("diagonal".parse::<LayoutMode>().is_err());
    }
}
