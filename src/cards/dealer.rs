use super::card::Card;
use super::deck::Deck;
use super::hole::Hole;
use super::street::Street;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Owns the deck for one hand: shuffles it, then deals hole cards,
/// burns, and community cards strictly from the front.
///
/// Running out of cards is a caller bug, not a game state:
/// 22 players use at most 2·22 + 3 burns + 5 board = 52 cards,
/// so every deal method panics on an exhausted deck.
#[derive(Debug, Clone)]
pub struct Dealer {
    deck: Deck,
    rng: Option<SmallRng>,
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new()
    }
}

impl Dealer {
    /// fresh deck, shuffled from OS entropy
    pub fn new() -> Self {
        Self {
            deck: Deck::new(),
            rng: Some(SmallRng::from_os_rng()),
        }
    }
    /// fresh deck, reproducible shuffle
    pub fn seeded(seed: u64) -> Self {
        Self {
            deck: Deck::new(),
            rng: Some(SmallRng::seed_from_u64(seed)),
        }
    }
    /// deals the given deck as is. shuffling is a no-op
    pub fn stacked(deck: Deck) -> Self {
        Self { deck, rng: None }
    }

    pub fn remaining(&self) -> usize {
        self.deck.len()
    }
    pub fn reset(&mut self) {
        self.deck = Deck::new();
    }
    pub fn shuffle(&mut self) {
        if let Some(rng) = self.rng.as_mut() {
            self.deck.shuffle_with(|i| rng.random_range(0..=i));
        }
    }

    /// `n` pairs, dealt one card at a time around the table:
    /// card k of player j is the (k·n + j)-th card off the deck.
    pub fn deal_hole(&mut self, n: usize) -> Vec<Hole> {
        self.require(2 * n);
        let firsts = (0..n).map(|_| self.deal()).collect::<Vec<Card>>();
        let seconds = (0..n).map(|_| self.deal()).collect::<Vec<Card>>();
        firsts
            .into_iter()
            .zip(seconds)
            .map(Hole::from)
            .collect()
    }
    pub fn deal_community(&mut self, k: usize) -> Vec<Card> {
        self.require(k);
        (0..k).map(|_| self.deal()).collect()
    }
    /// the cards that open `street`, after the burn
    pub fn deal_street(&mut self, street: Street) -> Vec<Card> {
        self.deal_community(street.n_revealed())
    }
    pub fn deal_flop(&mut self) -> [Card; 3] {
        self.require(3);
        [self.deal(), self.deal(), self.deal()]
    }
    pub fn deal_turn(&mut self) -> Card {
        self.deal()
    }
    pub fn deal_river(&mut self) -> Card {
        self.deal()
    }
    pub fn burn(&mut self) -> Card {
        self.deal()
    }

    fn deal(&mut self) -> Card {
        match self.deck.pop() {
            Some(card) => card,
            None => panic!("deck is empty"),
        }
    }
    fn require(&self, n: usize) {
        assert!(
            self.deck.len() >= n,
            "deck is exhausted: want {} cards, have {}",
            n,
            self.deck.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;

    #[test]
    fn hole_cards_round_robin() {
        let mut dealer = Dealer::stacked(Deck::new());
        let holes = dealer.deal_hole(3);
        assert_eq!(dealer.remaining(), 46);
        assert_eq!(holes[0].cards(), [Card::from(0u8), Card::from(3u8)]);
        assert_eq!(holes[1].cards(), [Card::from(1u8), Card::from(4u8)]);
        assert_eq!(holes[2].cards(), [Card::from(2u8), Card::from(5u8)]);
    }

    #[test]
    fn burn_then_flop() {
        let mut dealer = Dealer::stacked(Deck::new());
        assert_eq!(dealer.burn(), Card::from(0u8));
        let flop = dealer.deal_flop();
        assert_eq!(flop, [Card::from(1u8), Card::from(2u8), Card::from(3u8)]);
        assert_eq!(dealer.remaining(), 48);
    }

    #[test]
    fn seeded_shuffles_reproduce() {
        let mut a = Dealer::seeded(7);
        let mut b = Dealer::seeded(7);
        a.shuffle();
        b.shuffle();
        assert_eq!(a.deal_community(52), b.deal_community(52));
    }

    #[test]
    fn stacked_shuffle_keeps_order() {
        let mut dealer = Dealer::stacked(Deck::new());
        dealer.shuffle();
        assert_eq!(dealer.deal_community(2), vec![Card::from(0u8), Card::from(1u8)]);
    }

    #[test]
    fn full_table_never_exhausts() {
        let mut dealer = Dealer::seeded(22);
        dealer.shuffle();
        let holes = dealer.deal_hole(crate::MAX_PLAYERS);
        let mut seen = holes.iter().map(|h| Hand::from(*h)).fold(Hand::empty(), Hand::add);
        for street in [Street::Flop, Street::Turn, Street::Rive] {
            seen = Hand::add(seen, Hand::from(dealer.burn()));
            for card in dealer.deal_street(street) {
                seen = Hand::add(seen, Hand::from(card));
            }
        }
        assert_eq!(seen.size(), 52);
        assert_eq!(dealer.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "deck is")]
    fn exhaustion_is_fatal() {
        let mut dealer = Dealer::stacked(Deck::from(vec![Card::from(0u8)]));
        dealer.deal_hole(1);
    }
}
