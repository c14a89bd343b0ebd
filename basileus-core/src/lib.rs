pub mod arena;
pub mod bounds;
pub mod character;
pub mod config;
pub mod error;
pub mod fighter;
pub mod intent;
pub mod policy;

pub use arena::{Arena, MatchOutcome, Winner};
pub use bounds::{Bounds, Position};
pub use character::{Character, CharacterId};
pub use config::MatchConfig;
pub use error::ConfigError;
pub use fighter::{
    AttackState, FighterState, HorizontalState, StateVector, Transition, VerticalState,
    transition,
};
pub use intent::{Intent, KeyState};
pub use policy::RandomPolicy;
