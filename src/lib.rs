//! Движок понтуна (blackjack-вариант): один игрок против дилера.
//!
//! Слои:
//! - `domain` – карты, колода, подсчёт очков, рука, стол;
//! - `engine` – раздача, ходы, добор дилера, менеджер столов под RwLock;
//! - `api` – команды/запросы/снапшоты и HTTP-роутер поверх них;
//! - `infra` – RNG, генерация ID, конфигурация.
//!
//! Транспорт тонкий: ядро отдаёт обычные операции
//! (create, join, act, get, snapshot), которые можно обернуть чем угодно.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use api::{GameService, TableSnapshot};
pub use engine::{EngineError, Move, TableManager};
