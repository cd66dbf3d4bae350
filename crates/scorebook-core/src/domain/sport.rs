use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// The game being scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    #[default]
    Baseball,
    Softball,
}

impl Sport {
    /// Regulation length of a game. Also the ERA scale.
    pub fn game_innings(&self) -> u32 {
        match self {
            Sport::Baseball => 9,
            Sport::Softball => 7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Baseball => "baseball",
            Sport::Softball => "softball",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sport {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "baseball" => Ok(Sport::Baseball),
            "softball" => Ok(Sport::Softball),
            other => Err(ValidationError::UnknownSport(other.to_string())),
        }
    }
}
