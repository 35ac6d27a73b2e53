use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::deck::Deck;
use crate::domain::hand::{Hand, HandStatus};
use crate::domain::scoring::BLACKJACK;
use crate::domain::table::{Table, TableStatus};
use crate::domain::PlayerId;
use crate::engine::actions::Move;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{TableEventKind, TableHistory};
use crate::engine::RandomSource;

/// Дилер добирает, пока у него меньше этого числа. Без правила soft 17.
pub const DEALER_STANDS_ON: u32 = 17;

/// Итог стола. Только для отображения, ставок нет.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    PlayerBlackjack,
    PlayerBust,
    DealerBust,
    PlayerWins,
    DealerWins,
    Push,
}

/// Статус раунда для внешнего кода.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    Ongoing,
    Finished(Outcome),
}

/// Посадка игрока и стартовая раздача:
/// - собирает и перемешивает свежую колоду;
/// - первые две карты игроку, следующие две дилеру;
/// - при blackjack сразу разыгрывает дилера.
pub fn deal_initial<R: RandomSource>(
    table: &mut Table,
    history: &mut TableHistory,
    player_id: PlayerId,
    rng: &mut R,
) -> Result<RoundStatus, EngineError> {
    if table.has_player() {
        return Err(EngineError::AlreadyJoined(table.id.clone()));
    }

    let mut deck = Deck::standard_52();
    deck.shuffle(rng);

    // Порядок важен: позиции 0-1 игроку, 2-3 дилеру.
    let dealt = deck.draw_n(4);
    let &[p1, p2, d1, d2] = dealt.as_slice() else {
        return Err(EngineError::DeckEmpty);
    };

    let hand = Hand::new(p1, p2);
    let player_status = hand.status();

    table.deck = deck;
    table.player_hand = Some(hand);
    table.dealer_cards = vec![d1, d2];
    table.status = TableStatus::Playing;

    history.push(TableEventKind::PlayerJoined {
        player_id: player_id.clone(),
    });
    history.push(TableEventKind::InitialDeal {
        player_cards: vec![p1, p2],
        dealer_cards: vec![d1, d2],
        player_status,
    });
    table.player_id = Some(player_id);

    if player_status == HandStatus::Blackjack {
        debug!("table {}: blackjack на раздаче, дилер добирает сразу", table.id);
        return Ok(RoundStatus::Finished(resolve_dealer(table, history)));
    }

    Ok(RoundStatus::Ongoing)
}

/// Проверки перед ходом, в порядке приоритета:
/// стол в игре, тот ли игрок, роздана ли рука.
pub fn ensure_can_act(table: &Table, player_id: &str) -> Result<(), EngineError> {
    if table.status != TableStatus::Playing {
        return Err(EngineError::NotPlaying(table.id.clone()));
    }
    if table.player_id.as_deref() != Some(player_id) {
        return Err(EngineError::WrongPlayer(player_id.to_string()));
    }
    if table.player_hand.is_none() {
        return Err(EngineError::HandNotInitialized);
    }
    Ok(())
}

/// Применить ход игрока.
///
/// Все проверки идут до первой мутации: при ошибке стол не меняется.
pub fn apply_move(
    table: &mut Table,
    history: &mut TableHistory,
    player_id: &str,
    mv: Move,
) -> Result<RoundStatus, EngineError> {
    ensure_can_act(table, player_id)?;

    let Some(hand) = table.player_hand.as_mut() else {
        return Err(EngineError::HandNotInitialized);
    };

    match mv {
        Move::Hit => {
            let card = table.deck.draw_one().ok_or(EngineError::DeckEmpty)?;
            hand.add(card);

            let status = hand.status();
            let score = hand.score();
            debug!("table {}: hit {card} -> {score} ({status:?})", table.id);
            history.push(TableEventKind::PlayerHit {
                card,
                score,
                status,
            });

            if status.is_terminal() {
                return Ok(RoundStatus::Finished(resolve_dealer(table, history)));
            }
            Ok(RoundStatus::Ongoing)
        }
        Move::Stick => {
            hand.stick();
            let score = hand.score();
            debug!("table {}: stick на {score}", table.id);
            history.push(TableEventKind::PlayerStuck { score });

            Ok(RoundStatus::Finished(resolve_dealer(table, history)))
        }
    }
}

/// Добор дилера: пока меньше 17 и колода не пуста. Затем стол `Finished`.
///
/// Политика фиксированная и не зависит от руки игрока.
pub fn resolve_dealer(table: &mut Table, history: &mut TableHistory) -> Outcome {
    while table.dealer_score() < DEALER_STANDS_ON {
        let Some(card) = table.deck.draw_one() else {
            break;
        };
        table.dealer_cards.push(card);

        let score = table.dealer_score();
        debug!("table {}: дилер берёт {card} -> {score}", table.id);
        history.push(TableEventKind::DealerDrew { card, score });
    }

    table.status = TableStatus::Finished;

    let outcome = decide_outcome(table);
    history.push(TableEventKind::TableFinished {
        player_score: table.player_score(),
        dealer_score: table.dealer_score(),
        outcome,
    });
    outcome
}

/// Итог по финальным рукам.
pub fn decide_outcome(table: &Table) -> Outcome {
    let player_status = table
        .player_hand
        .as_ref()
        .map(Hand::status)
        .unwrap_or(HandStatus::Playing);
    let player = table.player_score();
    let dealer = table.dealer_score();
    let dealer_natural = table.dealer_cards.len() == 2 && dealer == BLACKJACK;

    match player_status {
        HandStatus::Bust => Outcome::PlayerBust,
        HandStatus::Blackjack if dealer_natural => Outcome::Push,
        HandStatus::Blackjack => Outcome::PlayerBlackjack,
        _ if dealer > BLACKJACK => Outcome::DealerBust,
        _ if dealer_natural => Outcome::DealerWins,
        _ if player > dealer => Outcome::PlayerWins,
        _ if player < dealer => Outcome::DealerWins,
        _ => Outcome::Push,
    }
}
