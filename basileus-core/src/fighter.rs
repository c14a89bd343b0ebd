use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bounds::{Bounds, Position};
use crate::character::Character;
use crate::intent::Intent;

pub const STANDING_SPEED: i32 = 5;
pub const BODY_WIDTH: i32 = 50;
pub const BODY_HEIGHT: i32 = 100;
pub const KICK_REACH: i32 = 8;
pub const PUNCH_REACH: i32 = 3;
pub const HIT_DAMAGE: i32 = 10;
pub const MAX_HEALTH: i32 = 100;
pub const ARENA_MIN_X: i32 = 0;
pub const ARENA_MAX_X: i32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VerticalState {
    #[default]
    Standing,
    Crouching,
    Jumping,
}

impl VerticalState {
    pub const ALL: [VerticalState; 3] = [
        VerticalState::Standing,
        VerticalState::Crouching,
        VerticalState::Jumping,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VerticalState::Standing => "STANDING",
            VerticalState::Crouching => "CROUCHING",
            VerticalState::Jumping => "JUMPING",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HorizontalState {
    #[default]
    Still,
    Left,
    Right,
}

impl HorizontalState {
    pub fn label(self) -> &'static str {
        match self {
            HorizontalState::Still => "STILL",
            HorizontalState::Left => "GOING_LEFT",
            HorizontalState::Right => "GOING_RIGHT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AttackState {
    #[default]
    Neutral,
    Kicking,
    Punching,
    Blocking,
}

impl AttackState {
    pub const ALL: [AttackState; 4] = [
        AttackState::Neutral,
        AttackState::Kicking,
        AttackState::Punching,
        AttackState::Blocking,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AttackState::Neutral => "NEUTRAL",
            AttackState::Kicking => "KICKING",
            AttackState::Punching => "PUNCHING",
            AttackState::Blocking => "BLOCKING",
        }
    }

    pub fn is_strike(self) -> bool {
        matches!(self, AttackState::Kicking | AttackState::Punching)
    }

    pub fn reach(self) -> i32 {
        let extra = if self == AttackState::Kicking {
            KICK_REACH
        } else {
            PUNCH_REACH
        };
        BODY_WIDTH + extra
    }
}

/// Committed state of a fighter along its three independent axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StateVector {
    pub vertical: VerticalState,
    pub horizontal: HorizontalState,
    pub attack: AttackState,
}

impl StateVector {
    pub fn new(vertical: VerticalState, horizontal: HorizontalState, attack: AttackState) -> Self {
        Self {
            vertical,
            horizontal,
            attack,
        }
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}]",
            self.vertical.label(),
            self.horizontal.label(),
            self.attack.label()
        )
    }
}

impl From<Intent> for StateVector {
    fn from(intent: Intent) -> Self {
        Self::new(intent.vertical, intent.horizontal, intent.attack)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FighterState {
    pub character: Character,
    pub position: Position,
    pub state: StateVector,
    pub health: i32,
}

/// Result of resolving one frame for a fighter. `damage` is what the hit is
/// worth before the defender's block is considered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: FighterState,
    pub damage: i32,
}

impl FighterState {
    pub fn new(character: Character, position: Position) -> Self {
        Self {
            character,
            position,
            state: StateVector::default(),
            health: MAX_HEALTH,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position, BODY_WIDTH, BODY_HEIGHT)
    }

    pub fn is_blocking(&self) -> bool {
        self.state.attack == AttackState::Blocking
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Applies incoming damage and returns the amount actually taken.
    pub fn take_damage(&mut self, damage: i32) -> i32 {
        let damage = if self.is_blocking() { 0 } else { damage };
        let before = self.health;
        self.health = (self.health - damage).max(0);
        before - self.health
    }

    /// Resolves `intent` against the opponent, damages it and commits the
    /// intent. Returns the damage the opponent actually took.
    pub fn update(&mut self, opponent: &mut FighterState, intent: Intent) -> i32 {
        let Transition { next, damage } = transition(self, opponent, intent);
        *self = next;
        if damage > 0 {
            opponent.take_damage(damage)
        } else {
            0
        }
    }
}

pub fn transition(current: &FighterState, opponent: &FighterState, intent: Intent) -> Transition {
    let touching = current.bounds().overlaps(&opponent.bounds());

    let x = current.position.x;
    let new_x = match intent.horizontal {
        HorizontalState::Left => x - STANDING_SPEED,
        HorizontalState::Right if !touching => x + STANDING_SPEED,
        HorizontalState::Right | HorizontalState::Still => x,
    };
    let new_x = new_x.clamp(ARENA_MIN_X, ARENA_MAX_X);

    let damage = if can_hit(current, opponent, intent) {
        hit_damage(intent.attack)
    } else {
        0
    };

    let next = FighterState {
        position: Position::new(new_x, current.position.y),
        state: StateVector::from(intent),
        ..current.clone()
    };

    Transition { next, damage }
}

/// Range is measured from the attacker's position before this frame's move.
pub fn can_hit(current: &FighterState, opponent: &FighterState, intent: Intent) -> bool {
    if !intent.attack.is_strike() {
        return false;
    }

    let in_range = (current.position.x - opponent.position.x).abs() <= intent.attack.reach();
    in_range && vertically_compatible(intent.vertical, opponent.state.vertical)
}

pub fn vertically_compatible(own: VerticalState, opponent: VerticalState) -> bool {
    // The crouching clause never looks at `own`, so any attacker reaches a
    // grounded opponent.
    let crouching_clause = opponent != VerticalState::Jumping;
    let standing_clause = own == VerticalState::Standing && opponent == VerticalState::Standing;
    let jumping_clause = own == VerticalState::Jumping && opponent != VerticalState::Crouching;
    crouching_clause || standing_clause || jumping_clause
}

/// Punches land for the same damage as kicks.
pub fn hit_damage(_attack: AttackState) -> i32 {
    HIT_DAMAGE
}
