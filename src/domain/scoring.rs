//! Подсчёт очков с гибким тузом.

use crate::domain::card::Card;

/// Лучший возможный итог руки.
pub const BLACKJACK: u32 = 21;

/// Разница между тузом за 11 и тузом за 1.
const ACE_DOWNGRADE: u32 = 10;

/// Сумма очков и сколько тузов осталось посчитанными как 11.
fn total_with_soft_aces(cards: &[Card]) -> (u32, u32) {
    let mut total = 0;
    let mut soft_aces = 0;
    for card in cards {
        total += card.value();
        if card.is_ace() {
            soft_aces += 1;
        }
    }

    while total > BLACKJACK && soft_aces > 0 {
        total -= ACE_DOWNGRADE;
        soft_aces -= 1;
    }

    (total, soft_aces)
}

/// Лучший итог ≤ 21, если он достижим; иначе минимальный (все тузы по 1).
///
/// Не зависит от порядка карт и не трогает входной срез.
pub fn score(cards: &[Card]) -> u32 {
    total_with_soft_aces(cards).0
}

/// "Мягкая" сумма: хотя бы один туз всё ещё считается как 11.
pub fn is_soft(cards: &[Card]) -> bool {
    total_with_soft_aces(cards).1 > 0
}
