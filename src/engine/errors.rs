use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{PlayerId, TableId};

/// Ошибки движка. Все они суть ошибки входных данных клиента, не сбои.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Стол {0} не найден")]
    NotFound(TableId),

    #[error("За столом {0} уже сидит игрок")]
    AlreadyJoined(TableId),

    #[error("Игрок {0} не сидит за этим столом")]
    WrongPlayer(PlayerId),

    #[error("Стол {0} не в игре")]
    NotPlaying(TableId),

    #[error("Недопустимый ход: {0:?}")]
    InvalidMove(String),

    #[error("Колода пуста")]
    DeckEmpty,

    #[error("Рука игрока ещё не роздана")]
    HandNotInitialized,
}

/// Стабильное имя вида ошибки (то, что видит клиент в поле `code`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    AlreadyJoined,
    WrongPlayer,
    NotPlaying,
    InvalidMove,
    DeckEmpty,
    HandNotInitialized,
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::NotFound(_) => ErrorKind::NotFound,
            EngineError::AlreadyJoined(_) => ErrorKind::AlreadyJoined,
            EngineError::WrongPlayer(_) => ErrorKind::WrongPlayer,
            EngineError::NotPlaying(_) => ErrorKind::NotPlaying,
            EngineError::InvalidMove(_) => ErrorKind::InvalidMove,
            EngineError::DeckEmpty => ErrorKind::DeckEmpty,
            EngineError::HandNotInitialized => ErrorKind::HandNotInitialized,
        }
    }
}
