//! Move and MoveCategory: the fixed actions a contestant can perform.

use serde::{Deserialize, Serialize};

/// How reliable a move is.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveCategory {
    /// Always lands.
    #[default]
    Signature,
    /// May miss while the target is still healthy.
    Finisher,
}

/// A named move with fixed damage.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    /// Health removed from the defender when the move lands.
    pub damage: i32,
    /// Serialized as `type` to match roster files.
    #[serde(rename = "type")]
    pub category: MoveCategory,
}

impl Move {
    pub fn new(name: impl Into<String>, damage: i32, category: MoveCategory) -> Self {
        Self {
            name: name.into(),
            damage,
            category,
        }
    }

    pub fn signature(name: impl Into<String>, damage: i32) -> Self {
        Self::new(name, damage, MoveCategory::Signature)
    }

    pub fn finisher(name: impl Into<String>, damage: i32) -> Self {
        Self::new(name, damage, MoveCategory::Finisher)
    }

    pub fn is_finisher(&self) -> bool {
        self.category == MoveCategory::Finisher
    }
}
