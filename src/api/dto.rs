use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::HandStatus;
use crate::domain::table::TableStatus;
use crate::domain::{PlayerId, TableId};
use crate::engine::hand_history::TableEvent;

/// Снапшот стола для клиента. Стабильный контракт, поля в camelCase.
///
/// Колоды здесь нет и быть не должно: это скрытая информация.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TableSnapshot {
    pub id: TableId,
    pub status: TableStatus,
    /// None, пока игрок не сел.
    pub player_id: Option<PlayerId>,
    /// Карты игрока в порядке получения (пусто до раздачи).
    pub player_cards: Vec<Card>,
    /// None до раздачи.
    pub player_hand_status: Option<HandStatus>,
    pub dealer_cards: Vec<Card>,
    pub player_score: u32,
    pub dealer_score: u32,
}

/// Краткая строка для лобби.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TableSummaryDto {
    pub id: TableId,
    pub status: TableStatus,
    pub created_at: DateTime<Utc>,
    pub player_id: Option<PlayerId>,
}

/// История стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryDto {
    pub table_id: TableId,
    pub events: Vec<TableEvent>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Создан новый стол.
    TableCreated(TableSnapshot),

    /// Обновлённое состояние стола после join/act.
    TableState(TableSnapshot),
}

impl CommandResponse {
    pub fn snapshot(&self) -> &TableSnapshot {
        match self {
            CommandResponse::TableCreated(s) | CommandResponse::TableState(s) => s,
        }
    }
}
