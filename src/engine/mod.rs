//! Движок понтуна: раздача, ходы игрока, добор дилера, менеджер столов.
//!
//! Основные операции:
//!   - `deal_initial` – посадить игрока и раздать по две карты
//!   - `apply_move` – применить hit/stick
//!   - `resolve_dealer` – добор дилера до 17 и завершение стола
//!
//! `TableManager` оборачивает их реестром столов под одним RwLock.

pub mod actions;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod table_manager;

pub use actions::Move;
pub use errors::{EngineError, ErrorKind};
pub use game_loop::{apply_move, deal_initial, resolve_dealer, Outcome, RoundStatus, DEALER_STANDS_ON};
pub use hand_history::{TableEvent, TableEventKind, TableHistory};
pub use table_manager::TableManager;

/// RNG интерфейс для перемешивания колоды.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
