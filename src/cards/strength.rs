use super::card::Card;
use super::evaluator::EvalError;
use super::evaluator::Evaluator;
use super::kicks::Kickers;
use super::ranking::Ranking;

/// A hand's strength.
///
/// The category decides first and the kickers break ties, so
/// `Ord` on Strength is exactly the showdown order.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct Strength {
    ranking: Ranking,
    kickers: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn kickers(&self) -> &Kickers {
        &self.kickers
    }

    /// The strongest five card combination among 5 to 7 cards.
    /// Every combination goes through the five card [`Evaluator`].
    pub fn best(cards: &[Card]) -> Result<Self, EvalError> {
        match cards.len() {
            5 => Self::try_from(cards),
            6 | 7 => {
                let mut best = None::<Self>;
                for picks in Self::combinations(cards.len()) {
                    let next = Self::try_from(&picks.map(|i| cards[i])[..])?;
                    best = match best {
                        Some(best) if best >= next => Some(best),
                        _ => Some(next),
                    };
                }
                best.ok_or(EvalError::InvalidHandSize(cards.len()))
            }
            n => Err(EvalError::InvalidHandSize(n)),
        }
    }

    /// index sets of size five drawn from 0..n
    fn combinations(n: usize) -> Vec<[usize; 5]> {
        let mut combos = Vec::new();
        for a in 0..n {
            for b in a + 1..n {
                for c in b + 1..n {
                    for d in c + 1..n {
                        for e in d + 1..n {
                            combos.push([a, b, c, d, e]);
                        }
                    }
                }
            }
        }
        combos
    }
}

impl TryFrom<&[Card]> for Strength {
    type Error = EvalError;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let eval = Evaluator::try_from(cards)?;
        let ranking = eval.find_ranking()?;
        let kickers = eval.find_kickers(ranking);
        Ok(Self { ranking, kickers })
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((ranking, kickers): (Ranking, Kickers)) -> Self {
        Self { ranking, kickers }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<16}{}", self.ranking, self.kickers)
    }
}
