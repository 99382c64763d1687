use super::card::Card;
use std::collections::VecDeque;

/// An ordered sequence of the cards not yet dealt.
///
/// Cards always leave from the front, so after a shuffle the
/// order of the sequence is the order of the deal. Shuffling is
/// expressed purely through [`Deck::swap`], which lets callers
/// bring their own permutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(VecDeque<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// all 52 rank × suit combinations in canonical order
    pub fn new() -> Self {
        Self((0..52u8).map(Card::from).collect())
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// exchange two positions. out of range indices leave the deck untouched
    pub fn swap(&mut self, i: usize, j: usize) {
        if i < self.len() && j < self.len() {
            self.0.swap(i, j);
        }
    }
    /// take the front card, if any remain
    pub fn pop(&mut self) -> Option<Card> {
        self.0.pop_front()
    }
    /// Fisher–Yates over [`Deck::swap`].
    /// `pick(i)` must return an index in `0..=i`.
    pub fn shuffle_with<F>(&mut self, mut pick: F)
    where
        F: FnMut(usize) -> usize,
    {
        for i in (1..self.len()).rev() {
            let j = pick(i);
            self.swap(i, j);
        }
    }
}

/// stacked deck, dealt in the given order
impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards.into())
    }
}
impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.0.into()
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        self.pop()
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}
