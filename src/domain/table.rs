use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::Hand;
use crate::domain::scoring::score;
use crate::domain::{PlayerId, TableId};

/// Жизненный цикл стола.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    /// Стол создан, игрок ещё не сел.
    Waiting,
    /// Карты розданы, игрок ходит.
    Playing,
    /// Игрок закончил, дилер добрал карты.
    Finished,
}

/// Стол: один игрок против дилера.
///
/// Инвариант: карты колоды не пересекаются с розданными, и всего их
/// ровно 52 после посадки игрока (0 до неё).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub id: TableId,
    pub created_at: DateTime<Utc>,
    pub status: TableStatus,

    /// Единственный игрок за столом (None, пока никто не сел).
    pub player_id: Option<PlayerId>,
    pub player_hand: Option<Hand>,

    /// У дилера нет статусов bust/stick, только карты и очки.
    pub dealer_cards: Vec<Card>,

    /// Оставшаяся колода. Наружу не отдаётся и не сериализуется.
    #[serde(skip)]
    pub deck: Deck,
}

impl Table {
    /// Пустой стол в статусе `Waiting`.
    pub fn new(id: TableId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at,
            status: TableStatus::Waiting,
            player_id: None,
            player_hand: None,
            dealer_cards: Vec::new(),
            deck: Deck::empty(),
        }
    }

    pub fn has_player(&self) -> bool {
        self.player_id.is_some()
    }

    /// Очки игрока (0, если рука ещё не роздана).
    pub fn player_score(&self) -> u32 {
        self.player_hand.as_ref().map(Hand::score).unwrap_or(0)
    }

    pub fn dealer_score(&self) -> u32 {
        score(&self.dealer_cards)
    }

    /// Сколько карт сейчас на руках у игрока и дилера.
    pub fn cards_dealt(&self) -> usize {
        self.player_hand.as_ref().map(|h| h.cards().len()).unwrap_or(0) + self.dealer_cards.len()
    }
}
