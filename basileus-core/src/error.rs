use std::error::Error;
use std::fmt;

use crate::character::Character;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    SpawnOutOfArena { x: i32 },
    SameCharacter(Character),
    InvalidFrameRate(u32),
    InvalidEndScreenSeconds(f64),
}

impl ConfigError {
    pub fn message(&self) -> &'static str {
        match self {
            ConfigError::SpawnOutOfArena { .. } => "spawn position is outside the arena",
            ConfigError::SameCharacter(_) => "both fighters use the same character",
            ConfigError::InvalidFrameRate(_) => "frame rate must be positive",
            ConfigError::InvalidEndScreenSeconds(_) => {
                "end screen duration must be finite and non-negative"
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SpawnOutOfArena { x } => write!(f, "{} (x = {})", self.message(), x),
            ConfigError::SameCharacter(character) => {
                write!(f, "{} ({})", self.message(), character.name())
            }
            ConfigError::InvalidFrameRate(rate) => write!(f, "{} (got {})", self.message(), rate),
            ConfigError::InvalidEndScreenSeconds(seconds) => {
                write!(f, "{} (got {})", self.message(), seconds)
            }
        }
    }
}

impl Error for ConfigError {}
