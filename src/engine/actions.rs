use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::errors::EngineError;

/// Ход игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    /// Взять карту.
    Hit,
    /// Остановиться.
    Stick,
}

impl Move {
    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Hit => "hit",
            Move::Stick => "stick",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Строки принимаются только точно: "hit" или "stick".
impl FromStr for Move {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hit" => Ok(Move::Hit),
            "stick" => Ok(Move::Stick),
            other => Err(EngineError::InvalidMove(other.to_string())),
        }
    }
}
