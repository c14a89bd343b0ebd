use serde::{Deserialize, Serialize};

pub type CharacterId = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Character {
    Justinian,
    Heraclius,
    Phocas,
    Khusrow,
}

impl Character {
    pub const ALL: [Character; 4] = [
        Character::Justinian,
        Character::Heraclius,
        Character::Phocas,
        Character::Khusrow,
    ];

    pub fn id(self) -> CharacterId {
        match self {
            Character::Justinian => 0,
            Character::Heraclius => 1,
            Character::Phocas => 2,
            Character::Khusrow => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Character::Justinian => "Justinian",
            Character::Heraclius => "Heraclius",
            Character::Phocas => "Phocas",
            Character::Khusrow => "Khusrow",
        }
    }

    pub fn from_id(id: CharacterId) -> Option<Self> {
        Self::ALL.into_iter().find(|character| character.id() == id)
    }
}
