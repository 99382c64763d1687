use super::card::Card;
use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;

/// A-2-3-4-5, the only straight where the Ace plays low.
const WHEEL: [Rank; 5] = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace];

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("invalid hand size: {0}, want 5")]
    InvalidHandSize(usize),
    #[error("hand contains the same card twice")]
    DuplicateCards,
    #[error("unknown hand value: rank count product {0}")]
    Inconsistent(usize),
}

/// Classifies exactly five distinct cards.
///
/// The shape of a hand is read off the multiset of rank counts:
/// the product of the counts is 6 for a full house, 4 for quads
/// or two pairs (told apart by the number of distinct ranks), 3 for
/// trips, 2 for a pair and 1 when every rank is distinct, at which
/// point only suits and spacing are left to decide.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator([Card; 5]);

impl TryFrom<&[Card]> for Evaluator {
    type Error = EvalError;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let five = <[Card; 5]>::try_from(cards).map_err(|_| EvalError::InvalidHandSize(cards.len()))?;
        if Hand::from(cards).size() != five.len() {
            return Err(EvalError::DuplicateCards);
        }
        Ok(Self(five))
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Result<Ranking, EvalError> {
        let counts = self.counts();
        let distinct = counts.iter().filter(|n| **n > 0).count();
        let product = counts
            .iter()
            .filter(|n| **n > 0)
            .map(|n| *n as usize)
            .product::<usize>();
        match (product, distinct) {
            (6, _) => Ok(Ranking::FullHouse),
            (4, 2) => Ok(Ranking::FourOfAKind),
            (4, 3) => Ok(Ranking::TwoPairs),
            (3, _) => Ok(Ranking::ThreeOfAKind),
            (2, _) => Ok(Ranking::Pair),
            (1, _) => Ok(self.find_unpaired()),
            (n, _) => Err(EvalError::Inconsistent(n)),
        }
    }

    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        if ranking.is_straight() {
            return Kickers::from(vec![self.find_straight_top()]);
        }
        let counts = self.counts();
        let mut ranks = Rank::all()
            .into_iter()
            .filter(|r| counts[u8::from(*r) as usize] > 0)
            .collect::<Vec<Rank>>();
        ranks.sort_by(|a, b| {
            let na = counts[u8::from(*a) as usize];
            let nb = counts[u8::from(*b) as usize];
            nb.cmp(&na).then(b.cmp(a))
        });
        Kickers::from(ranks)
    }

    fn find_unpaired(&self) -> Ranking {
        match (self.is_straight(), self.is_flush()) {
            (true, true) if self.min() == Rank::Ten && self.max() == Rank::Ace => Ranking::RoyalFlush,
            (true, true) => Ranking::StraightFlush,
            (true, false) => Ranking::Straight,
            (false, true) => Ranking::Flush,
            (false, false) => Ranking::HighCard,
        }
    }
    fn find_straight_top(&self) -> Rank {
        if self.is_wheel() {
            Rank::Five
        } else {
            self.max()
        }
    }

    fn is_flush(&self) -> bool {
        let suit = self.0[0].suit();
        self.0.iter().all(|c| c.suit() == suit)
    }
    /// only meaningful once all five ranks are known to be distinct
    fn is_straight(&self) -> bool {
        u8::from(self.max()) - u8::from(self.min()) == 4 || self.is_wheel()
    }
    fn is_wheel(&self) -> bool {
        let mut ranks = self.0.map(|c| c.rank());
        ranks.sort();
        ranks == WHEEL
    }
    fn max(&self) -> Rank {
        self.0.iter().map(|c| c.rank()).max().unwrap_or(Rank::MIN)
    }
    fn min(&self) -> Rank {
        self.0.iter().map(|c| c.rank()).min().unwrap_or(Rank::MAX)
    }
    fn counts(&self) -> [u8; 13] {
        let mut counts = [0u8; 13];
        for card in self.0.iter() {
            counts[u8::from(card.rank()) as usize] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace()
            .map(|c| Card::try_from(c).unwrap())
            .collect()
    }
    fn rank(s: &str) -> Result<Ranking, EvalError> {
        Evaluator::try_from(cards(s).as_slice())?.find_ranking()
    }

    #[test]
    fn high_card() {
        assert_eq!(rank("10♣ 4♥ 7♦ K♣ 2♠"), Ok(Ranking::HighCard));
    }

    #[test]
    fn pair() {
        assert_eq!(rank("K♣ K♥ 7♦ 2♣ 5♠"), Ok(Ranking::Pair));
    }

    #[test]
    fn two_pairs() {
        assert_eq!(rank("K♣ K♥ 7♦ 7♣ 5♠"), Ok(Ranking::TwoPairs));
    }

    #[test]
    fn three_of_a_kind() {
        assert_eq!(rank("K♣ K♥ K♦ 7♣ 5♠"), Ok(Ranking::ThreeOfAKind));
    }

    #[test]
    fn straight() {
        assert_eq!(rank("9c Th Jd Qc Ks"), Ok(Ranking::Straight));
        assert_eq!(rank("Ac 2h 3d 4c 5s"), Ok(Ranking::Straight));
        assert_eq!(rank("Ac Kh Qd Jc Ts"), Ok(Ranking::Straight));
    }

    #[test]
    fn no_wraparound_straight() {
        assert_eq!(rank("Qc Kh Ad 2c 3s"), Ok(Ranking::HighCard));
    }

    #[test]
    fn flush() {
        assert_eq!(rank("2h 9h Jh Kh 4h"), Ok(Ranking::Flush));
    }

    #[test]
    fn full_house() {
        assert_eq!(rank("2s 2h 2d 3c 3s"), Ok(Ranking::FullHouse));
    }

    #[test]
    fn four_of_a_kind() {
        assert_eq!(rank("As Ah Ad Ac Ks"), Ok(Ranking::FourOfAKind));
    }

    #[test]
    fn wheel_is_never_royal() {
        assert_eq!(rank("A♥ 2♥ 3♥ 4♥ 5♥"), Ok(Ranking::StraightFlush));
    }

    #[test]
    fn royal_flush() {
        assert_eq!(rank("10♥ J♥ Q♥ K♥ A♥"), Ok(Ranking::RoyalFlush));
    }

    #[test]
    fn straight_flush() {
        assert_eq!(rank("9s Ts Js Qs Ks"), Ok(Ranking::StraightFlush));
    }

    #[test]
    fn duplicate_cards() {
        assert_eq!(rank("K♣ K♣ 7♦ 2♣ 5♠"), Err(EvalError::DuplicateCards));
    }

    #[test]
    fn wrong_sizes() {
        assert_eq!(rank("K♣ K♥ 7♦ 2♣"), Err(EvalError::InvalidHandSize(4)));
        assert_eq!(rank("K♣ K♥ 7♦ 2♣ 5♠ 9d"), Err(EvalError::InvalidHandSize(6)));
    }

    #[test]
    fn kickers_group_before_rank() {
        let eval = Evaluator::try_from(cards("2s 2h 2d Ac As").as_slice()).unwrap();
        let kicks = eval.find_kickers(Ranking::FullHouse);
        assert_eq!(kicks.ranks(), &[Rank::Two, Rank::Ace]);
        let eval = Evaluator::try_from(cards("9s 9h 4d Ac 4s").as_slice()).unwrap();
        let kicks = eval.find_kickers(Ranking::TwoPairs);
        assert_eq!(kicks.ranks(), &[Rank::Nine, Rank::Four, Rank::Ace]);
    }

    #[test]
    fn wheel_kicker_is_five() {
        let eval = Evaluator::try_from(cards("Ac 2h 3d 4c 5s").as_slice()).unwrap();
        let kicks = eval.find_kickers(Ranking::Straight);
        assert_eq!(kicks.ranks(), &[Rank::Five]);
    }
}
