use std::net::SocketAddr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Адрес по умолчанию, как у исходного игрового сервиса.
pub const DEFAULT_BIND: &str = "127.0.0.1:9000";

pub const ENV_BIND: &str = "PONTOON_BIND";
pub const ENV_SHUFFLE_SEED: &str = "PONTOON_SHUFFLE_SEED";

/// Ошибки загрузки конфигурации.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Некорректный адрес {value:?} в {key}")]
    InvalidBind { key: &'static str, value: String },

    #[error("Некорректный seed {value:?} в {key}")]
    InvalidSeed { key: &'static str, value: String },
}

/// Настройки менеджера столов.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Если задан, n-я раздача перемешивается `DeterministicRng(seed + n)`.
    /// None: системная энтропия.
    pub shuffle_seed: Option<u64>,
}

/// Настройки HTTP-сервера.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub manager: ManagerConfig,
}

impl ServerConfig {
    /// Собрать конфиг из переменных окружения (после dotenvy).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// То же, но с произвольным источником значений (для тестов).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = parse_bind(ENV_BIND, &bind_raw)?;

        let shuffle_seed = match lookup(ENV_SHUFFLE_SEED) {
            Some(raw) => Some(parse_seed(ENV_SHUFFLE_SEED, &raw)?),
            None => None,
        };

        Ok(Self {
            bind,
            manager: ManagerConfig { shuffle_seed },
        })
    }
}

pub fn parse_bind(key: &'static str, value: &str) -> Result<SocketAddr, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidBind {
        key,
        value: value.to_string(),
    })
}

pub fn parse_seed(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidSeed {
        key,
        value: value.to_string(),
    })
}
