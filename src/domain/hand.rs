use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::scoring::{is_soft, score, BLACKJACK};

/// Статус руки игрока.
///
/// Переходы только из `Playing`: в `Bust`, `Stick` или `Blackjack`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HandStatus {
    /// Игрок ещё может брать карты.
    Playing,
    /// Перебор, больше 21.
    Bust,
    /// Игрок остановился сам или автоматически на 21.
    Stick,
    /// Натуральные 21 на первых двух картах.
    Blackjack,
    /// Итоговая метка для отображения. Сама рука в неё не переходит.
    Finished,
}

impl HandStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, HandStatus::Playing)
    }
}

/// Рука игрока: карты в порядке получения + статус.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    status: HandStatus,
}

impl Hand {
    /// Стартовая рука из двух карт. 21 сразу = blackjack.
    pub fn new(first: Card, second: Card) -> Self {
        let cards = vec![first, second];
        let status = if score(&cards) == BLACKJACK {
            HandStatus::Blackjack
        } else {
            HandStatus::Playing
        };
        Self { cards, status }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn status(&self) -> HandStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        !self.status.is_terminal()
    }

    pub fn score(&self) -> u32 {
        score(&self.cards)
    }

    /// Есть ли туз, который сейчас считается за 11.
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Добавить карту. Если рука уже не `Playing`, ничего не делает и
    /// возвращает `false` (это не ошибка).
    ///
    /// Ровно 21 после добора = `Stick`, а не `Blackjack`.
    pub fn add(&mut self, card: Card) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.cards.push(card);

        let total = self.score();
        if total > BLACKJACK {
            self.status = HandStatus::Bust;
        } else if total == BLACKJACK {
            self.status = HandStatus::Stick;
        }
        true
    }

    /// Остановиться. Вне `Playing` ничего не делает и возвращает `false`.
    pub fn stick(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.status = HandStatus::Stick;
        true
    }
}
