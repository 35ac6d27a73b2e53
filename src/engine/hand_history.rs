use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::HandStatus;
use crate::domain::PlayerId;
use crate::engine::game_loop::Outcome;

/// Тип события за столом.
///
/// Сюда попадают только уже открытые карты, остаток колоды никогда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TableEventKind {
    /// Стол создан.
    TableCreated,

    /// Игрок сел за стол.
    #[serde(rename_all = "camelCase")]
    PlayerJoined { player_id: PlayerId },

    /// Стартовая раздача: по две карты игроку и дилеру.
    #[serde(rename_all = "camelCase")]
    InitialDeal {
        player_cards: Vec<Card>,
        dealer_cards: Vec<Card>,
        player_status: HandStatus,
    },

    /// Игрок взял карту.
    PlayerHit {
        card: Card,
        score: u32,
        status: HandStatus,
    },

    /// Игрок остановился.
    PlayerStuck { score: u32 },

    /// Дилер добрал карту.
    DealerDrew { card: Card, score: u32 },

    /// Стол завершён.
    #[serde(rename_all = "camelCase")]
    TableFinished {
        player_score: u32,
        dealer_score: u32,
        outcome: Outcome,
    },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableEvent {
    pub index: u32,
    pub kind: TableEventKind,
}

/// Полная история стола.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableHistory {
    pub events: Vec<TableEvent>,
}

impl TableHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: TableEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(TableEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&TableEventKind> {
        self.events.last().map(|e| &e.kind)
    }
}
