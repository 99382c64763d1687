/// The category of a five card hand, weakest first.
///
/// Ties inside a category are broken by [`super::kicks::Kickers`].
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord, serde::Serialize)]
pub enum Ranking {
    HighCard,
    Pair,
    TwoPairs,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl Ranking {
    pub const fn all() -> [Self; 10] {
        [
            Ranking::HighCard,
            Ranking::Pair,
            Ranking::TwoPairs,
            Ranking::ThreeOfAKind,
            Ranking::Straight,
            Ranking::Flush,
            Ranking::FullHouse,
            Ranking::FourOfAKind,
            Ranking::StraightFlush,
            Ranking::RoyalFlush,
        ]
    }
    /// straights rank by their top card alone
    pub fn is_straight(&self) -> bool {
        matches!(
            self,
            Ranking::Straight | Ranking::StraightFlush | Ranking::RoyalFlush
        )
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard => write!(f, "High Card"),
            Ranking::Pair => write!(f, "Pair"),
            Ranking::TwoPairs => write!(f, "Two Pairs"),
            Ranking::ThreeOfAKind => write!(f, "Three of a Kind"),
            Ranking::Straight => write!(f, "Straight"),
            Ranking::Flush => write!(f, "Flush"),
            Ranking::FullHouse => write!(f, "Full House"),
            Ranking::FourOfAKind => write!(f, "Four of a Kind"),
            Ranking::StraightFlush => write!(f, "Straight Flush"),
            Ranking::RoyalFlush => write!(f, "Royal Flush"),
        }
    }
}
