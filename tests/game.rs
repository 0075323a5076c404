//! Round engine integration tests.

use clbj::{
    Card, DECK_SIZE, Deck, DeckError, Hand, Resolution, Round, RoundError, RoundState, Ruleset,
    Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn hand(ranks: &[u8]) -> Hand {
    let cards: Vec<Card> = ranks.iter().map(|&rank| card(Suit::Hearts, rank)).collect();
    Hand::from_cards(&cards)
}

/// Deals player `player`, dealer `dealer` (hole card first), then `rest`.
fn deck_for(player: [u8; 2], dealer: [u8; 2], rest: &[u8]) -> Deck {
    let mut draws = vec![
        card(Suit::Spades, player[0]),
        card(Suit::Clubs, dealer[0]),
        card(Suit::Spades, player[1]),
        card(Suit::Clubs, dealer[1]),
    ];
    draws.extend(rest.iter().map(|&rank| card(Suit::Diamonds, rank)));
    Deck::stacked(&draws)
}

#[test]
fn new_deck_has_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    for suit in Suit::ALL {
        for rank in 1..=13 {
            let count = deck.cards().iter().filter(|&&c| c == card(suit, rank)).count();
            assert_eq!(count, 1, "{rank} of {suit:?}");
        }
    }
}

#[test]
fn shuffled_deck_is_a_permutation() {
    use rand::SeedableRng;

    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
    let shuffled = Deck::shuffled(&mut rng);
    assert_eq!(shuffled.len(), DECK_SIZE);
    assert_ne!(shuffled, Deck::new());

    let mut sorted = shuffled.cards().to_vec();
    sorted.sort_by_key(|c| (c.suit as u8, c.rank));
    let mut canonical = Deck::new().cards().to_vec();
    canonical.sort_by_key(|c| (c.suit as u8, c.rank));
    assert_eq!(sorted, canonical);
}

#[test]
fn drawing_from_exhausted_deck_fails() {
    let mut deck = Deck::stacked(&[card(Suit::Hearts, 5)]);
    assert_eq!(deck.draw(), Ok(card(Suit::Hearts, 5)));
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(DeckError::Empty));
}

#[test]
fn hand_value_without_aces_is_rank_sum() {
    assert_eq!(hand(&[2, 3, 4]).value(), 9);
    assert_eq!(hand(&[10, 11, 12]).value(), 30);
    assert_eq!(hand(&[13, 9]).value(), 19);
}

#[test]
fn hand_value_demotes_aces_only_as_needed() {
    assert_eq!(hand(&[1, 1]).value(), 12);
    assert_eq!(hand(&[1, 13]).value(), 21);
    assert_eq!(hand(&[1, 1, 9]).value(), 21);
    assert_eq!(hand(&[1, 1, 1, 1]).value(), 14);
    assert_eq!(hand(&[1, 10, 10]).value(), 21);
    assert_eq!(hand(&[1, 1, 10, 10]).value(), 22);
    assert_eq!(hand(&[]).value(), 0);
}

#[test]
fn hand_value_ignores_card_order() {
    let ranks = [1, 5, 1, 9, 3];
    let expected = hand(&ranks).value();

    for start in 0..ranks.len() {
        let mut rotated = ranks.to_vec();
        rotated.rotate_left(start);
        assert_eq!(hand(&rotated).value(), expected);
        rotated.reverse();
        assert_eq!(hand(&rotated).value(), expected);
    }
}

#[test]
fn soft_17_detection() {
    assert!(hand(&[1, 6]).is_soft_17());
    assert!(hand(&[1, 2, 4]).is_soft_17());
    assert!(!hand(&[10, 7]).is_soft_17());
    assert!(!hand(&[1, 6, 10]).is_soft_17());
    assert!(!hand(&[1, 7]).is_soft_17());
    assert!(hand(&[1, 1, 5]).is_soft_17());
}

#[test]
fn render_masks_first_card_only_when_asked() {
    let cards = Hand::from_cards(&[card(Suit::Hearts, 10), card(Suit::Spades, 12)]);
    assert_eq!(cards.render(false), "10♥, Q♠");
    assert_eq!(cards.render(true), "[Hidden], Q♠");
}

#[test]
fn dealer_policy_by_ruleset() {
    let soft_17 = hand(&[1, 6]);
    let hard_17 = hand(&[10, 7]);
    let sixteen = hand(&[10, 6]);
    let soft_18 = hand(&[1, 7]);

    for ruleset in [Ruleset::Basic, Ruleset::Casino] {
        assert!(ruleset.dealer_draws(&sixteen));
        assert!(!ruleset.dealer_draws(&hard_17));
        assert!(!ruleset.dealer_draws(&soft_18));
    }
    assert!(!Ruleset::Basic.dealer_draws(&soft_17));
    assert!(Ruleset::Casino.dealer_draws(&soft_17));
}

#[test]
fn deal_alternates_player_and_dealer() {
    let mut round = Round::new(deck_for([10, 9], [6, 10], &[]), Ruleset::Basic, None);
    round.deal().unwrap();

    assert_eq!(round.state(), RoundState::PlayerTurn);
    assert_eq!(round.player_hand().value(), 19);
    assert_eq!(round.dealer_hand().value(), 16);
    assert_eq!(round.dealer_hand().cards()[0], card(Suit::Clubs, 6));
    assert_eq!(round.cards_remaining(), 0);
}

#[test]
fn deal_requires_four_cards() {
    let deck = Deck::stacked(&[card(Suit::Hearts, 2), card(Suit::Hearts, 3)]);
    let mut round = Round::new(deck, Ruleset::Basic, None);
    assert_eq!(round.deal(), Err(RoundError::EmptyDeck));
    assert_eq!(round.state(), RoundState::Dealing);
}

#[test]
fn dealer_draws_to_21_and_wins() {
    let mut round = Round::new(deck_for([10, 9], [6, 10], &[5]), Ruleset::Basic, None);
    round.deal().unwrap();
    round.stand().unwrap();
    assert_eq!(round.state(), RoundState::DealerTurn);

    let drawn = round.dealer_play().unwrap();
    assert_eq!(drawn.len(), 1);
    assert_eq!(round.state(), RoundState::DealerStand);

    let result = round.resolve().unwrap();
    assert_eq!(result.resolution, Resolution::DealerHigher);
    assert_eq!(result.dealer_value, 21);
    assert_eq!(result.player_value, 19);
    assert_eq!(result.settlement(), None);
    assert_eq!(round.state(), RoundState::Resolved);
}

#[test]
fn natural_21_wins_without_dealer_play() {
    // Dealer also holds 21; the player still wins outright.
    let mut round = Round::new(deck_for([1, 13], [1, 12], &[]), Ruleset::Casino, Some(10));
    assert_eq!(round.ruleset(), Ruleset::Casino);
    assert_eq!(round.bet(), Some(10));
    round.deal().unwrap();
    assert_eq!(round.state(), RoundState::PlayerBlackjack);
    assert!(round.player_hand().is_twenty_one());

    assert_eq!(round.hit(), Err(RoundError::InvalidState));
    assert_eq!(round.stand(), Err(RoundError::InvalidState));
    assert_eq!(round.dealer_hit(), Err(RoundError::InvalidState));

    let result = round.resolve().unwrap();
    assert_eq!(result.resolution, Resolution::Blackjack);
    assert_eq!(result.settlement(), Some(10));
    assert_eq!(round.dealer_hand().len(), 2);
}

#[test]
fn hitting_to_21_wins_immediately() {
    let mut round = Round::new(deck_for([5, 6], [10, 8], &[10]), Ruleset::Basic, None);
    round.deal().unwrap();
    round.hit().unwrap();

    assert_eq!(round.state(), RoundState::PlayerBlackjack);
    assert!(round.player_hand().is_twenty_one());
    assert_eq!(round.player_hand().len(), 3);
    assert_eq!(round.resolve().unwrap().resolution, Resolution::Blackjack);
}

#[test]
fn hitting_past_21_busts_immediately() {
    let mut round = Round::new(deck_for([10, 9], [6, 10], &[5, 2]), Ruleset::Casino, Some(20));
    round.deal().unwrap();
    let drawn = round.hit().unwrap();
    assert_eq!(drawn.rank, 5);

    assert_eq!(round.state(), RoundState::PlayerBust);
    assert_eq!(round.player_hand().value(), 24);

    let result = round.resolve().unwrap();
    assert_eq!(result.resolution, Resolution::PlayerBust);
    assert_eq!(result.settlement(), Some(-20));
    assert_eq!(round.dealer_hand().len(), 2);
    assert_eq!(round.cards_remaining(), 1);
}

#[test]
fn dealer_bust_pays_player() {
    let mut round = Round::new(deck_for([10, 2], [10, 6], &[9]), Ruleset::Basic, None);
    round.deal().unwrap();
    round.stand().unwrap();
    round.dealer_play().unwrap();

    assert_eq!(round.state(), RoundState::DealerBust);
    assert_eq!(round.resolve().unwrap().resolution, Resolution::DealerBust);
}

#[test]
fn equal_totals_push() {
    let mut round = Round::new(deck_for([10, 8], [9, 9], &[]), Ruleset::Casino, Some(5));
    round.deal().unwrap();
    round.stand().unwrap();
    assert!(round.dealer_play().unwrap().is_empty());

    let result = round.resolve().unwrap();
    assert_eq!(result.resolution, Resolution::Push);
    assert_eq!(result.settlement(), Some(0));
}

#[test]
fn higher_player_total_wins() {
    let mut round = Round::new(deck_for([10, 10], [10, 7], &[]), Ruleset::Basic, None);
    round.deal().unwrap();
    round.stand().unwrap();
    round.dealer_play().unwrap();
    assert_eq!(round.resolve().unwrap().resolution, Resolution::PlayerHigher);
}

#[test]
fn basic_dealer_stands_on_soft_17() {
    let mut round = Round::new(deck_for([10, 8], [1, 6], &[4]), Ruleset::Basic, None);
    round.deal().unwrap();
    round.stand().unwrap();

    assert!(round.dealer_play().unwrap().is_empty());
    assert_eq!(round.resolve().unwrap().resolution, Resolution::PlayerHigher);
}

#[test]
fn casino_dealer_hits_soft_17() {
    let mut round = Round::new(deck_for([10, 8], [1, 6], &[4]), Ruleset::Casino, Some(10));
    round.deal().unwrap();
    round.stand().unwrap();

    let drawn = round.dealer_play().unwrap();
    assert_eq!(drawn.len(), 1);
    assert_eq!(round.dealer_hand().value(), 21);

    let result = round.resolve().unwrap();
    assert_eq!(result.resolution, Resolution::DealerHigher);
    assert_eq!(result.settlement(), Some(-10));
}

#[test]
fn casino_dealer_rechecks_softness_after_each_draw() {
    // A,2 -> soft 13; +4 -> soft 17 (draw again); +10 -> hard 17 (stand).
    let mut round = Round::new(deck_for([10, 9], [1, 2], &[4, 10, 5]), Ruleset::Casino, Some(1));
    round.deal().unwrap();
    round.stand().unwrap();

    let drawn = round.dealer_play().unwrap();
    assert_eq!(drawn.len(), 2);
    assert_eq!(round.dealer_hand().value(), 17);
    assert!(!round.dealer_hand().is_soft());
    assert_eq!(round.cards_remaining(), 1);
    assert_eq!(round.resolve().unwrap().resolution, Resolution::PlayerHigher);
}

#[test]
fn casino_dealer_stands_on_hard_17() {
    let mut round = Round::new(deck_for([10, 8], [10, 7], &[4]), Ruleset::Casino, Some(10));
    round.deal().unwrap();
    round.stand().unwrap();
    assert!(round.dealer_play().unwrap().is_empty());
}

#[test]
fn dealer_running_out_of_cards_is_an_error() {
    let mut round = Round::new(deck_for([10, 8], [10, 2], &[]), Ruleset::Basic, None);
    round.deal().unwrap();
    round.stand().unwrap();
    assert_eq!(round.dealer_play(), Err(RoundError::EmptyDeck));
}

#[test]
fn steps_out_of_order_are_rejected() {
    let mut round = Round::new(deck_for([10, 8], [10, 7], &[]), Ruleset::Basic, None);
    assert_eq!(round.hit(), Err(RoundError::InvalidState));
    assert_eq!(round.resolve(), Err(RoundError::InvalidState));

    round.deal().unwrap();
    assert_eq!(round.deal(), Err(RoundError::InvalidState));
    assert_eq!(round.dealer_play(), Err(RoundError::InvalidState));
    assert_eq!(round.resolve(), Err(RoundError::InvalidState));

    round.stand().unwrap();
    assert_eq!(round.hit(), Err(RoundError::InvalidState));
    assert_eq!(round.resolve(), Err(RoundError::InvalidState));

    round.dealer_play().unwrap();
    round.resolve().unwrap();
    assert_eq!(round.resolve(), Err(RoundError::InvalidState));
}
