// tests/engine_game_loop_tests.rs
//
// Тесты чистых переходов стола (engine::game_loop) без менеджера:
//  1) стартовая раздача: позиции 0-1 игроку, 2-3 дилеру
//  2) blackjack на раздаче сразу разыгрывает дилера
//  3) hit до авто-stick на 21, затем добор дилера
//  4) hit в перебор
//  5) stick и правило дилера "до 17"
//  6) DeckEmpty не меняет стол
//  7) дилер при пустой колоде
//  8) порядок проверок ensure_can_act
//  9) decide_outcome на ручных раскладах

use chrono::Utc;
use pontoon_engine::domain::*;
use pontoon_engine::engine::game_loop::{decide_outcome, ensure_can_act};
use pontoon_engine::engine::*;

// -----------------------------
// ВСПОМОГАТЕЛЬНЫЕ RNG
// -----------------------------

/// Не перемешивает: колода в стандартном порядке (A♣, 2♣, 3♣, ...).
struct IdentityRng;

impl RandomSource for IdentityRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}

/// Переворачивает колоду: K♠, Q♠, J♠, 10♠, ...
struct ReverseRng;

impl RandomSource for ReverseRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.reverse();
    }
}

/// Сдвиг колоды влево на n позиций.
struct RotateRng(usize);

impl RandomSource for RotateRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        if !slice.is_empty() {
            let n = self.0 % slice.len();
            slice.rotate_left(n);
        }
    }
}

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn waiting_table() -> Table {
    Table::new("t-1".to_string(), Utc::now())
}

/// Стол в игре с заданной рукой, картами дилера и колодой.
fn playing_table(player: [Card; 2], dealer: Vec<Card>, deck: Vec<Card>) -> Table {
    let mut t = waiting_table();
    t.status = TableStatus::Playing;
    t.player_id = Some("p1".to_string());
    t.player_hand = Some(Hand::new(player[0], player[1]));
    t.dealer_cards = dealer;
    t.deck = Deck::from_cards(deck);
    t
}

//
// TEST 1: initial deal positions
//
#[test]
fn initial_deal_gives_first_two_to_player_next_two_to_dealer() {
    let mut t = waiting_table();
    let mut h = TableHistory::new();

    let status = deal_initial(&mut t, &mut h, "p1".to_string(), &mut IdentityRng).unwrap();
    assert_eq!(status, RoundStatus::Ongoing);

    let hand = t.player_hand.as_ref().unwrap();
    assert_eq!(hand.cards(), &[card(Rank::Ace, Suit::Clubs), card(Rank::Two, Suit::Clubs)]);
    assert_eq!(hand.status(), HandStatus::Playing);
    assert_eq!(t.dealer_cards, vec![card(Rank::Three, Suit::Clubs), card(Rank::Four, Suit::Clubs)]);

    assert_eq!(t.status, TableStatus::Playing);
    assert_eq!(t.player_id.as_deref(), Some("p1"));
    assert_eq!(t.deck.len(), 48);
    assert_eq!(t.deck.iter().next(), Some(&card(Rank::Five, Suit::Clubs)));

    // PlayerJoined + InitialDeal
    assert_eq!(h.len(), 2);
}

//
// TEST 2: natural blackjack resolves the dealer immediately
//
#[test]
fn blackjack_on_deal_resolves_dealer() {
    let mut t = waiting_table();
    let mut h = TableHistory::new();

    // K♣ A♦ игроку, 2♦ 3♦ дилеру, дальше 4♦ 5♦ 6♦ ...
    let status = deal_initial(&mut t, &mut h, "p1".to_string(), &mut RotateRng(12)).unwrap();

    assert_eq!(status, RoundStatus::Finished(Outcome::PlayerBlackjack));
    assert_eq!(t.status, TableStatus::Finished);
    assert_eq!(t.player_hand.as_ref().unwrap().status(), HandStatus::Blackjack);

    // 2+3=5 -> 4 (9) -> 5 (14) -> 6 (20)
    assert_eq!(t.dealer_cards.len(), 5);
    assert_eq!(t.dealer_score(), 20);
    assert_eq!(t.deck.len(), 45);

    assert!(matches!(
        h.last(),
        Some(TableEventKind::TableFinished {
            outcome: Outcome::PlayerBlackjack,
            ..
        })
    ));
}

//
// TEST 3: hits up to an automatic stick on 21
//
#[test]
fn hitting_to_exactly_21_auto_sticks_and_resolves_dealer() {
    let mut t = waiting_table();
    let mut h = TableHistory::new();
    deal_initial(&mut t, &mut h, "p1".to_string(), &mut IdentityRng).unwrap();

    // A 2 + 5 = 18
    assert_eq!(apply_move(&mut t, &mut h, "p1", Move::Hit).unwrap(), RoundStatus::Ongoing);
    assert_eq!(t.player_score(), 18);

    // + 6 = 24 -> туз за 1 -> 14
    assert_eq!(apply_move(&mut t, &mut h, "p1", Move::Hit).unwrap(), RoundStatus::Ongoing);
    assert_eq!(t.player_score(), 14);

    // + 7 = 21 -> stick, не blackjack
    let status = apply_move(&mut t, &mut h, "p1", Move::Hit).unwrap();
    assert_eq!(t.player_hand.as_ref().unwrap().status(), HandStatus::Stick);
    assert_eq!(t.player_score(), 21);

    // Дилер: 3 4 = 7 -> 8 (15) -> 9 (24)
    assert_eq!(status, RoundStatus::Finished(Outcome::DealerBust));
    assert_eq!(t.status, TableStatus::Finished);
    assert_eq!(t.dealer_cards.len(), 4);
    assert_eq!(t.dealer_score(), 24);
    assert_eq!(t.deck.len(), 43);

    // Created-less history: Joined, Deal, 3x Hit, 2x DealerDrew, Finished
    assert_eq!(h.len(), 8);
}

//
// TEST 4: hit into bust
//
#[test]
fn hit_into_bust_finishes_table() {
    let mut t = waiting_table();
    let mut h = TableHistory::new();
    deal_initial(&mut t, &mut h, "p1".to_string(), &mut ReverseRng).unwrap();

    // K♠ Q♠ = 20 против J♠ 10♠ = 20
    assert_eq!(t.player_score(), 20);
    assert_eq!(t.dealer_score(), 20);

    let status = apply_move(&mut t, &mut h, "p1", Move::Hit).unwrap();
    assert_eq!(status, RoundStatus::Finished(Outcome::PlayerBust));
    assert_eq!(t.player_hand.as_ref().unwrap().status(), HandStatus::Bust);
    assert_eq!(t.player_score(), 29);

    // У дилера уже 20: не добирает.
    assert_eq!(t.dealer_cards.len(), 2);
    assert_eq!(t.deck.len(), 47);
    assert_eq!(t.status, TableStatus::Finished);
}

//
// TEST 5: stick resolves the dealer up to 17
//
#[test]
fn stick_resolves_dealer_to_17() {
    let mut t = waiting_table();
    let mut h = TableHistory::new();
    deal_initial(&mut t, &mut h, "p1".to_string(), &mut IdentityRng).unwrap();

    let status = apply_move(&mut t, &mut h, "p1", Move::Stick).unwrap();

    // 3 4 = 7 -> 5 (12) -> 6 (18)
    assert_eq!(t.dealer_cards.len(), 4);
    assert_eq!(t.dealer_score(), 18);
    assert_eq!(status, RoundStatus::Finished(Outcome::DealerWins));
    assert_eq!(t.player_hand.as_ref().unwrap().status(), HandStatus::Stick);
    assert_eq!(t.deck.len(), 46);

    // Стол не теряет и не дублирует карты.
    assert_eq!(t.deck.len() + t.cards_dealt(), 52);
}

//
// TEST 6: DeckEmpty leaves the table untouched
//
#[test]
fn hit_on_empty_deck_fails_without_changes() {
    let mut t = playing_table(
        [card(Rank::Ten, Suit::Hearts), card(Rank::Two, Suit::Clubs)],
        vec![card(Rank::Nine, Suit::Spades), card(Rank::Five, Suit::Spades)],
        vec![],
    );
    let mut h = TableHistory::new();
    let before = t.clone();

    let err = apply_move(&mut t, &mut h, "p1", Move::Hit).unwrap_err();
    assert_eq!(err, EngineError::DeckEmpty);
    assert_eq!(t, before);
    assert!(h.is_empty());
}

//
// TEST 7: dealer stops when the deck runs out
//
#[test]
fn dealer_stops_on_exhausted_deck() {
    let mut t = playing_table(
        [card(Rank::Ten, Suit::Hearts), card(Rank::Two, Suit::Clubs)],
        vec![card(Rank::Two, Suit::Spades), card(Rank::Three, Suit::Spades)],
        vec![card(Rank::Four, Suit::Spades)],
    );
    let mut h = TableHistory::new();

    let status = apply_move(&mut t, &mut h, "p1", Move::Stick).unwrap();

    // 2 3 + 4 = 9, колода кончилась
    assert_eq!(t.dealer_score(), 9);
    assert!(t.deck.is_empty());
    assert_eq!(t.status, TableStatus::Finished);
    assert_eq!(status, RoundStatus::Finished(Outcome::PlayerWins));
}

//
// TEST 8: check precedence: NotPlaying, WrongPlayer, HandNotInitialized
//
#[test]
fn ensure_can_act_precedence() {
    let t = waiting_table();
    assert_eq!(ensure_can_act(&t, "p1"), Err(EngineError::NotPlaying("t-1".to_string())));

    let mut t = playing_table(
        [card(Rank::Ten, Suit::Hearts), card(Rank::Two, Suit::Clubs)],
        vec![],
        vec![],
    );
    assert_eq!(ensure_can_act(&t, "p2"), Err(EngineError::WrongPlayer("p2".to_string())));
    assert_eq!(ensure_can_act(&t, "p1"), Ok(()));

    t.player_hand = None;
    assert_eq!(ensure_can_act(&t, "p1"), Err(EngineError::HandNotInitialized));

    let mut h = TableHistory::new();
    assert_eq!(
        apply_move(&mut t, &mut h, "p1", Move::Stick),
        Err(EngineError::HandNotInitialized)
    );
}

//
// TEST 9: second deal on a seated table
//
#[test]
fn deal_twice_is_already_joined() {
    let mut t = waiting_table();
    let mut h = TableHistory::new();
    deal_initial(&mut t, &mut h, "p1".to_string(), &mut IdentityRng).unwrap();
    let before = t.clone();

    let err = deal_initial(&mut t, &mut h, "p2".to_string(), &mut IdentityRng).unwrap_err();
    assert_eq!(err, EngineError::AlreadyJoined("t-1".to_string()));
    assert_eq!(t, before);
}

//
// TEST 10: outcomes on hand-built finals
//
#[test]
fn outcome_rules() {
    let bj = [card(Rank::Ace, Suit::Hearts), card(Rank::King, Suit::Hearts)];
    let dealer_natural = vec![card(Rank::Ace, Suit::Spades), card(Rank::Queen, Suit::Spades)];

    // blackjack против натуральных 21 дилера = push
    let t = playing_table(bj, dealer_natural.clone(), vec![]);
    assert_eq!(decide_outcome(&t), Outcome::Push);

    // 21 добором против натуральных 21 дилера = дилер
    let mut t = playing_table(
        [card(Rank::Ten, Suit::Hearts), card(Rank::Five, Suit::Clubs)],
        dealer_natural,
        vec![],
    );
    t.player_hand.as_mut().unwrap().add(card(Rank::Six, Suit::Clubs));
    assert_eq!(decide_outcome(&t), Outcome::DealerWins);

    // 19 против 19 = push
    let t = playing_table(
        [card(Rank::Ten, Suit::Hearts), card(Rank::Nine, Suit::Clubs)],
        vec![card(Rank::Ten, Suit::Spades), card(Rank::Nine, Suit::Spades)],
        vec![],
    );
    assert_eq!(decide_outcome(&t), Outcome::Push);

    // 19 против 18 = игрок
    let t = playing_table(
        [card(Rank::Ten, Suit::Hearts), card(Rank::Nine, Suit::Clubs)],
        vec![card(Rank::Ten, Suit::Spades), card(Rank::Eight, Suit::Spades)],
        vec![],
    );
    assert_eq!(decide_outcome(&t), Outcome::PlayerWins);
}
