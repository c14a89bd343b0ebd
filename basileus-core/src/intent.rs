use serde::{Deserialize, Serialize};

use crate::fighter::{AttackState, HorizontalState, StateVector, VerticalState};

/// Pressed state of every key the game listens to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub punch: bool,
    pub kick: bool,
    pub block: bool,
}

/// Desired state for the next frame, before any transition rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Intent {
    pub vertical: VerticalState,
    pub horizontal: HorizontalState,
    pub attack: AttackState,
}

impl Intent {
    pub fn new(vertical: VerticalState, horizontal: HorizontalState, attack: AttackState) -> Self {
        Self {
            vertical,
            horizontal,
            attack,
        }
    }

    pub fn from_keys(keys: &KeyState) -> Self {
        let horizontal = if keys.left {
            HorizontalState::Left
        } else if keys.right {
            HorizontalState::Right
        } else {
            HorizontalState::Still
        };

        let vertical = if keys.up {
            VerticalState::Jumping
        } else if keys.down {
            VerticalState::Crouching
        } else {
            VerticalState::Standing
        };

        let attack = if keys.punch {
            AttackState::Punching
        } else if keys.kick {
            AttackState::Kicking
        } else if keys.block {
            AttackState::Blocking
        } else {
            AttackState::Neutral
        };

        Self::new(vertical, horizontal, attack)
    }
}

impl From<StateVector> for Intent {
    fn from(state: StateVector) -> Self {
        Self::new(state.vertical, state.horizontal, state.attack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_keys_is_idle() {
        let intent = Intent::from_keys(&KeyState::default());
        assert_eq!(intent, Intent::default());
    }

    #[test]
    fn left_is_checked_before_right() {
        let keys = KeyState {
            left: true,
            right: true,
            ..KeyState::default()
        };
        assert_eq!(Intent::from_keys(&keys).horizontal, HorizontalState::Left);
    }

    #[test]
    fn up_wins_over_down() {
        let keys = KeyState {
            up: true,
            down: true,
            ..KeyState::default()
        };
        assert_eq!(Intent::from_keys(&keys).vertical, VerticalState::Jumping);

        let keys = KeyState {
            down: true,
            ..KeyState::default()
        };
        assert_eq!(Intent::from_keys(&keys).vertical, VerticalState::Crouching);
    }

    #[test]
    fn attack_precedence_is_punch_kick_block() {
        let all = KeyState {
            punch: true,
            kick: true,
            block: true,
            ..KeyState::default()
        };
        assert_eq!(Intent::from_keys(&all).attack, AttackState::Punching);

        let kick_and_block = KeyState {
            kick: true,
            block: true,
            ..KeyState::default()
        };
        assert_eq!(Intent::from_keys(&kick_and_block).attack, AttackState::Kicking);

        let block = KeyState {
            block: true,
            ..KeyState::default()
        };
        assert_eq!(Intent::from_keys(&block).attack, AttackState::Blocking);
    }

    #[test]
    fn axes_resolve_independently() {
        let keys = KeyState {
            right: true,
            down: true,
            kick: true,
            ..KeyState::default()
        };
        assert_eq!(
            Intent::from_keys(&keys),
            Intent::new(
                VerticalState::Crouching,
                HorizontalState::Right,
                AttackState::Kicking
            )
        );
    }
}
