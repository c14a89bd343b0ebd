use fastrand::Rng;

use crate::fighter::{AttackState, HorizontalState, VerticalState};
use crate::intent::Intent;

/// Weighted towards walking left, i.e. towards the human's spawn side.
pub const HORIZONTAL_CHOICES: [HorizontalState; 4] = [
    HorizontalState::Left,
    HorizontalState::Left,
    HorizontalState::Still,
    HorizontalState::Right,
];

/// Random opponent that only decides during even wall-clock seconds.
#[derive(Debug)]
pub struct RandomPolicy {
    rng: Rng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        Self { rng: Rng::new() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }

    pub fn is_decision_second(now_seconds: f64) -> bool {
        (now_seconds.floor() as i64).rem_euclid(2) == 0
    }

    /// Returns `None` on odd seconds, meaning the fighter keeps its committed
    /// state and is not transitioned at all.
    pub fn next_intent(&mut self, now_seconds: f64) -> Option<Intent> {
        if !Self::is_decision_second(now_seconds) {
            return None;
        }
        Some(self.draw())
    }

    fn draw(&mut self) -> Intent {
        let vertical = VerticalState::ALL[self.rng.usize(..VerticalState::ALL.len())];
        let horizontal = HORIZONTAL_CHOICES[self.rng.usize(..HORIZONTAL_CHOICES.len())];
        let attack = AttackState::ALL[self.rng.usize(..AttackState::ALL.len())];
        Intent::new(vertical, horizontal, attack)
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}
