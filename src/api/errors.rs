use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::{EngineError, ErrorKind};

/// Код ошибки для клиента.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Битый запрос на уровне транспорта (нет параметров, кривой JSON).
    BadRequest,
    NotFound,
    AlreadyJoined,
    WrongPlayer,
    NotPlaying,
    InvalidMove,
    DeckEmpty,
    HandNotInitialized,
}

impl From<ErrorKind> for ErrorCode {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NotFound => ErrorCode::NotFound,
            ErrorKind::AlreadyJoined => ErrorCode::AlreadyJoined,
            ErrorKind::WrongPlayer => ErrorCode::WrongPlayer,
            ErrorKind::NotPlaying => ErrorCode::NotPlaying,
            ErrorKind::InvalidMove => ErrorCode::InvalidMove,
            ErrorKind::DeckEmpty => ErrorCode::DeckEmpty,
            ErrorKind::HandNotInitialized => ErrorCode::HandNotInitialized,
        }
    }
}

/// Ошибка внешнего API: именованный код + сообщение.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("{code:?}: {message}")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::new(err.kind().into(), err.to_string())
    }
}
