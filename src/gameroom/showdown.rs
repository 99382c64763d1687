use crate::Chips;
use crate::PlayerId;
use crate::Position;
use crate::cards::Strength;
use crate::pots::Pot;
use std::collections::BTreeMap;

/// A player still holding a claim when the pots are paid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contender {
    pub seat: Position,
    pub player: PlayerId,
    /// None only when the hand was won uncontested
    pub strength: Option<Strength>,
}

/// Pays settled pots out to contenders.
///
/// Contenders are listed in seat order starting left of the button,
/// which is also the order odd chips are handed out in a split.
pub struct Showdown {
    contenders: Vec<Contender>,
}

impl From<Vec<Contender>> for Showdown {
    fn from(contenders: Vec<Contender>) -> Self {
        Self { contenders }
    }
}

impl Showdown {
    /// Every pot goes to the best contenders among its contributors.
    /// A pot none of whose contributors still contends falls to the
    /// best contenders overall.
    pub fn rewards(&self, pots: &[Pot]) -> BTreeMap<PlayerId, Chips> {
        let mut rewards = BTreeMap::new();
        for pot in pots {
            let winners = self.winners(pot);
            if winners.is_empty() {
                log::warn!("nobody can claim a pot of {}", pot.chips());
                continue;
            }
            let share = pot.chips() / winners.len() as Chips;
            let extra = pot.chips() as usize % winners.len();
            for (i, winner) in winners.iter().enumerate() {
                let odd = if i < extra { 1 } else { 0 };
                *rewards.entry(winner.player).or_default() += share + odd;
            }
        }
        rewards
    }

    fn winners(&self, pot: &Pot) -> Vec<&Contender> {
        let eligible = self
            .contenders
            .iter()
            .filter(|c| pot.is_eligible(&c.player))
            .collect::<Vec<&Contender>>();
        let eligible = if eligible.is_empty() {
            self.contenders.iter().collect()
        } else {
            eligible
        };
        let best = eligible.iter().map(|c| c.strength.as_ref()).max().flatten();
        eligible
            .into_iter()
            .filter(|c| c.strength.as_ref() == best)
            .collect()
    }
}
