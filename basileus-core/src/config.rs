use serde::{Deserialize, Serialize};

use crate::bounds::Position;
use crate::character::Character;
use crate::error::ConfigError;
use crate::fighter::{ARENA_MAX_X, ARENA_MIN_X};

pub const DEFAULT_FRAME_RATE: u32 = 30;
pub const DEFAULT_END_SCREEN_SECONDS: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub human: Character,
    pub ai: Character,
    pub human_spawn: Position,
    pub ai_spawn: Position,
    pub frame_rate: u32,
    pub end_screen_seconds: f64,
    /// Fixed seed for the AI; entropy-seeded when absent.
    pub ai_seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            human: Character::Heraclius,
            ai: Character::Phocas,
            human_spawn: Position::new(50, 150),
            ai_spawn: Position::new(400, 150),
            frame_rate: DEFAULT_FRAME_RATE,
            end_screen_seconds: DEFAULT_END_SCREEN_SECONDS,
            ai_seed: None,
        }
    }
}

impl MatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for spawn in [self.human_spawn, self.ai_spawn] {
            if !(ARENA_MIN_X..=ARENA_MAX_X).contains(&spawn.x) {
                return Err(ConfigError::SpawnOutOfArena { x: spawn.x });
            }
        }

        if self.human == self.ai {
            return Err(ConfigError::SameCharacter(self.human));
        }

        if self.frame_rate == 0 {
            return Err(ConfigError::InvalidFrameRate(self.frame_rate));
        }

        if !self.end_screen_seconds.is_finite() || self.end_screen_seconds < 0.0 {
            return Err(ConfigError::InvalidEndScreenSeconds(self.end_screen_seconds));
        }

        Ok(())
    }

    pub fn step_seconds(&self) -> f32 {
        1.0 / self.frame_rate.max(1) as f32
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| format!("{{\"error\":\"{err}\"}}"))
    }
}
