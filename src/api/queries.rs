use serde::{Deserialize, Serialize};

use crate::domain::hand::Hand;
use crate::domain::table::Table;
use crate::domain::TableId;

use super::dto::{HistoryDto, TableSnapshot, TableSummaryDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Получить снапшот стола.
    GetTable { table_id: TableId },

    /// Получить список столов (для лобби).
    ListTables,

    /// Получить историю событий стола.
    GetHistory { table_id: TableId },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Table(TableSnapshot),
    Tables(Vec<TableSummaryDto>),
    History(HistoryDto),
}

/// Чистая проекция стола в снапшот. Колода не попадает наружу.
pub fn build_snapshot(table: &Table) -> TableSnapshot {
    let hand = table.player_hand.as_ref();

    TableSnapshot {
        id: table.id.clone(),
        status: table.status,
        player_id: table.player_id.clone(),
        player_cards: hand.map(|h| h.cards().to_vec()).unwrap_or_default(),
        player_hand_status: hand.map(Hand::status),
        dealer_cards: table.dealer_cards.clone(),
        player_score: table.player_score(),
        dealer_score: table.dealer_score(),
    }
}

/// Строка лобби.
pub fn build_summary(table: &Table) -> TableSummaryDto {
    TableSummaryDto {
        id: table.id.clone(),
        status: table.status,
        created_at: table.created_at,
        player_id: table.player_id.clone(),
    }
}
