use super::pot::Pot;
use crate::Chips;
use crate::PlayerId;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Running total of what each player has put in over the whole hand.
///
/// Nothing is split while betting goes on. At showdown [`Ledger::settle`]
/// peels the contributions into a main pot and side pots, smallest
/// stake first: the first pot always includes every contributor and
/// each following pot is open to fewer of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    contributions: BTreeMap<PlayerId, Chips>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add_chips(&mut self, id: PlayerId, amount: Chips) {
        *self.contributions.entry(id).or_default() += amount;
    }
    pub fn chips_by(&self, id: &PlayerId) -> Chips {
        self.contributions.get(id).copied().unwrap_or_default()
    }
    pub fn sum(&self) -> Chips {
        self.contributions.values().sum()
    }
    pub fn is_empty(&self) -> bool {
        self.sum() == 0
    }
    pub fn contributors(&self) -> impl Iterator<Item = &PlayerId> {
        self.contributions
            .iter()
            .filter(|(_, chips)| **chips > 0)
            .map(|(id, _)| id)
    }

    /// Repeatedly take the smallest remaining stake `a`, make a pot of
    /// `a` times the number of players still holding at least `a`, and
    /// subtract `a` from each of them. Pure: settling twice without new
    /// contributions gives the same pots.
    pub fn settle(&self) -> Vec<Pot> {
        let mut stakes = self
            .contributions
            .iter()
            .filter(|(_, chips)| **chips > 0)
            .map(|(id, chips)| (*chips, *id))
            .collect::<Vec<(Chips, PlayerId)>>();
        stakes.sort();
        let mut pots = Vec::new();
        for i in 0..stakes.len() {
            let amount = stakes[i].0;
            if amount == 0 {
                continue;
            }
            let contributors = stakes[i..]
                .iter()
                .filter(|(chips, _)| *chips >= amount)
                .map(|(_, id)| *id)
                .collect::<BTreeSet<PlayerId>>();
            for (chips, _) in stakes[i..].iter_mut().filter(|(chips, _)| *chips >= amount) {
                *chips -= amount;
            }
            log::trace!("pot {} x {}", amount, contributors.len());
            pots.push(Pot::new(contributors.clone(), amount * contributors.len() as Chips));
        }
        pots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> (PlayerId, PlayerId, PlayerId) {
        (PlayerId::default(), PlayerId::default(), PlayerId::default())
    }
    fn summary(pots: &[Pot]) -> Vec<(Chips, BTreeSet<PlayerId>)> {
        pots.iter()
            .map(|p| (p.chips(), p.contributors().clone()))
            .collect()
    }

    #[test]
    fn main_and_side_pots() {
        let (a, b, c) = ids();
        let mut ledger = Ledger::new();
        ledger.add_chips(a, 100);
        ledger.add_chips(b, 200);
        ledger.add_chips(c, 300);
        assert_eq!(
            summary(&ledger.settle()),
            vec![
                (300, BTreeSet::from([a, b, c])),
                (200, BTreeSet::from([b, c])),
                (100, BTreeSet::from([c])),
            ]
        );
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let (a, b, c) = ids();
        let orders = [
            [(a, 100), (b, 200), (c, 300)],
            [(c, 300), (a, 100), (b, 200)],
            [(b, 200), (c, 300), (a, 100)],
        ];
        let settled = orders
            .iter()
            .map(|order| {
                let mut ledger = Ledger::new();
                order.iter().for_each(|(id, chips)| ledger.add_chips(*id, *chips));
                summary(&ledger.settle())
            })
            .collect::<Vec<_>>();
        assert!(settled.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn permuted_amounts() {
        let (a, b, c) = ids();
        let mut ledger = Ledger::new();
        ledger.add_chips(a, 300);
        ledger.add_chips(b, 200);
        ledger.add_chips(c, 100);
        assert_eq!(
            summary(&ledger.settle()),
            vec![
                (300, BTreeSet::from([a, b, c])),
                (200, BTreeSet::from([a, b])),
                (100, BTreeSet::from([a])),
            ]
        );
    }

    #[test]
    fn contributions_accumulate_across_streets() {
        let (a, b, _) = ids();
        let mut ledger = Ledger::new();
        ledger.add_chips(a, 2);
        ledger.add_chips(b, 2);
        ledger.add_chips(a, 10);
        ledger.add_chips(b, 10);
        assert_eq!(ledger.chips_by(&a), 12);
        assert_eq!(ledger.sum(), 24);
        assert_eq!(summary(&ledger.settle()), vec![(24, BTreeSet::from([a, b]))]);
    }

    #[test]
    fn equal_stakes_share_one_pot() {
        let (a, b, c) = ids();
        let mut ledger = Ledger::new();
        ledger.add_chips(a, 100);
        ledger.add_chips(b, 100);
        ledger.add_chips(c, 300);
        assert_eq!(
            summary(&ledger.settle()),
            vec![(300, BTreeSet::from([a, b, c])), (200, BTreeSet::from([c]))]
        );
    }

    #[test]
    fn settle_is_idempotent() {
        let (a, b, c) = ids();
        let mut ledger = Ledger::new();
        ledger.add_chips(a, 50);
        ledger.add_chips(b, 75);
        ledger.add_chips(c, 75);
        assert_eq!(ledger.settle(), ledger.settle());
        assert_eq!(ledger.settle().iter().map(Pot::chips).sum::<Chips>(), ledger.sum());
    }

    #[test]
    fn zero_contributions_are_ignored() {
        let (a, b, _) = ids();
        let mut ledger = Ledger::new();
        ledger.add_chips(a, 0);
        ledger.add_chips(b, 40);
        assert_eq!(summary(&ledger.settle()), vec![(40, BTreeSet::from([b]))]);
        assert!(Ledger::new().settle().is_empty());
        assert!(Ledger::new().is_empty());
    }
}
