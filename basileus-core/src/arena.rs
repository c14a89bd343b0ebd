use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::error::ConfigError;
use crate::fighter::FighterState;
use crate::intent::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Human,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: Winner,
    pub tick: u64,
    pub human_health: i32,
    pub ai_health: i32,
}

impl MatchOutcome {
    pub fn message(&self) -> &'static str {
        match self.winner {
            Winner::Human => "You Win",
            Winner::Ai => "You Lose",
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| format!("{{\"error\":\"{err}\"}}"))
    }
}

/// Both fighters of a single match. The AI fighter always resolves first.
pub struct Arena {
    pub tick: u64,
    human: FighterState,
    ai: FighterState,
    config: MatchConfig,
}

impl Arena {
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            tick: 0,
            human: FighterState::new(config.human, config.human_spawn),
            ai: FighterState::new(config.ai, config.ai_spawn),
            config,
        })
    }

    pub fn human(&self) -> &FighterState {
        &self.human
    }

    pub fn ai(&self) -> &FighterState {
        &self.ai
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Advances one frame. `ai_intent` of `None` leaves the AI fighter
    /// untouched this frame.
    pub fn step(&mut self, human_intent: Intent, ai_intent: Option<Intent>) -> Option<MatchOutcome> {
        if let Some(outcome) = self.outcome() {
            return Some(outcome);
        }

        if let Some(intent) = ai_intent {
            self.ai.update(&mut self.human, intent);
        }
        self.human.update(&mut self.ai, human_intent);
        self.tick += 1;

        self.outcome()
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        let winner = if self.ai.is_defeated() {
            Winner::Human
        } else if self.human.is_defeated() {
            Winner::Ai
        } else {
            return None;
        };

        Some(MatchOutcome {
            winner,
            tick: self.tick,
            human_health: self.human.health,
            ai_health: self.ai.health,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Position;
    use crate::fighter::{AttackState, HorizontalState, MAX_HEALTH, VerticalState};

    fn idle() -> Intent {
        Intent::default()
    }

    fn kick() -> Intent {
        Intent::new(
            VerticalState::Standing,
            HorizontalState::Still,
            AttackState::Kicking,
        )
    }

    fn close_arena() -> Arena {
        Arena::new(MatchConfig {
            human_spawn: Position::new(100, 150),
            ai_spawn: Position::new(150, 150),
            ..MatchConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn new_arena_uses_config_spawns() {
        let arena = Arena::new(MatchConfig::default()).unwrap();
        assert_eq!(arena.human().position, Position::new(50, 150));
        assert_eq!(arena.ai().position, Position::new(400, 150));
        assert_eq!(arena.human().health, MAX_HEALTH);
        assert_eq!(arena.ai().health, MAX_HEALTH);
        assert_eq!(arena.outcome(), None);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = MatchConfig {
            human_spawn: Position::new(-10, 150),
            ..MatchConfig::default()
        };
        assert!(Arena::new(config).is_err());
    }

    #[test]
    fn held_ai_intent_skips_ai_transition() {
        let mut arena = Arena::new(MatchConfig::default()).unwrap();
        let before = arena.ai().clone();
        arena.step(idle(), None);
        assert_eq!(arena.ai(), &before);
        assert_eq!(arena.tick, 1);
    }

    #[test]
    fn ai_resolves_before_human() {
        // The AI blocks this frame; its committed block is already in place
        // when the human's kick lands.
        let mut arena = close_arena();
        let block = Intent::new(
            VerticalState::Standing,
            HorizontalState::Still,
            AttackState::Blocking,
        );
        arena.step(kick(), Some(block));
        assert_eq!(arena.ai().health, MAX_HEALTH);
    }

    #[test]
    fn human_sees_pre_update_block_from_ai_perspective() {
        // The human's block is committed only after the AI has struck.
        let mut arena = close_arena();
        let block = Intent::new(
            VerticalState::Standing,
            HorizontalState::Still,
            AttackState::Blocking,
        );
        arena.step(block, Some(kick()));
        assert_eq!(arena.human().health, MAX_HEALTH - 10);

        arena.step(block, Some(kick()));
        assert_eq!(arena.human().health, MAX_HEALTH - 10);
    }

    #[test]
    fn human_wins_when_ai_health_hits_zero() {
        let mut arena = close_arena();
        let mut outcome = None;
        for _ in 0..10 {
            outcome = arena.step(kick(), None);
        }
        let outcome = outcome.expect("ten kicks finish the match");
        assert_eq!(outcome.winner, Winner::Human);
        assert_eq!(outcome.message(), "You Win");
        assert_eq!(outcome.ai_health, 0);
        assert_eq!(outcome.tick, 10);
    }

    #[test]
    fn human_loses_when_own_health_hits_zero() {
        let mut arena = close_arena();
        let mut outcome = None;
        for _ in 0..10 {
            outcome = arena.step(idle(), Some(kick()));
        }
        let outcome = outcome.expect("ten kicks finish the match");
        assert_eq!(outcome.winner, Winner::Ai);
        assert_eq!(outcome.message(), "You Lose");
        assert_eq!(outcome.human_health, 0);
    }

    #[test]
    fn ai_defeat_is_reported_first() {
        let mut arena = close_arena();
        for _ in 0..9 {
            arena.step(kick(), Some(kick()));
        }
        let outcome = arena.step(kick(), Some(kick())).unwrap();
        assert_eq!(outcome.human_health, 0);
        assert_eq!(outcome.ai_health, 0);
        assert_eq!(outcome.message(), "You Win");
    }

    #[test]
    fn finished_match_does_not_advance() {
        let mut arena = close_arena();
        for _ in 0..10 {
            arena.step(kick(), None);
        }
        let tick = arena.tick;
        let outcome = arena.step(kick(), Some(kick())).unwrap();
        assert_eq!(arena.tick, tick);
        assert_eq!(outcome.human_health, MAX_HEALTH);
    }

    #[test]
    fn outcome_serializes_for_logging() {
        let mut arena = close_arena();
        let mut outcome = None;
        for _ in 0..10 {
            outcome = arena.step(kick(), None);
        }
        let json = outcome.unwrap().to_json();
        assert!(json.contains("\"winner\":\"Human\""));
        assert!(json.contains("\"ai_health\":0"));
    }
}
