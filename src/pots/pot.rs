use crate::Chips;
use crate::PlayerId;
use std::collections::BTreeSet;

/// A settled pot: the chips in it and who put them there.
/// Only [`super::Ledger::settle`] produces these.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Pot {
    contributors: BTreeSet<PlayerId>,
    chips: Chips,
}

impl Pot {
    pub(super) fn new(contributors: BTreeSet<PlayerId>, chips: Chips) -> Self {
        Self {
            contributors,
            chips,
        }
    }
    pub fn chips(&self) -> Chips {
        self.chips
    }
    pub fn contributors(&self) -> &BTreeSet<PlayerId> {
        &self.contributors
    }
    pub fn is_eligible(&self, id: &PlayerId) -> bool {
        self.contributors.contains(id)
    }
}

impl std::fmt::Display for Pot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>6} among {}", self.chips, self.contributors.len())
    }
}
