use crate::Chips;
use colored::*;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// Something a player can do when asked to act.
///
/// Amounts are the chips moved by this action alone, not the running
/// total for the street. When offered, Bet and Raise carry the minimum
/// legal amount, Call the amount owed, AllIn the whole stack.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "type", content = "chips")]
pub enum Action {
    Check,
    Fold,
    Bet(Chips),
    Call(Chips),
    Raise(Chips),
    AllIn(Chips),
    ShowHoleCards,
    HideHoleCards,
}

impl Action {
    pub fn amount(&self) -> Chips {
        match self {
            Self::Bet(n) | Self::Call(n) | Self::Raise(n) | Self::AllIn(n) => *n,
            _ => 0,
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Fold => "fold",
            Self::Bet(_) => "bet",
            Self::Call(_) => "call",
            Self::Raise(_) => "raise",
            Self::AllIn(_) => "all_in",
            Self::ShowHoleCards => "show_hole_cards",
            Self::HideHoleCards => "hide_hole_cards",
        }
    }
    /// same variant, regardless of amount
    pub fn is_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
    pub fn is_aggressive(&self) -> bool {
        matches!(self, Self::Bet(_) | Self::Raise(_) | Self::AllIn(_))
    }
    pub fn is_reveal(&self) -> bool {
        matches!(self, Self::ShowHoleCards | Self::HideHoleCards)
    }

    /// What a player who never answers ends up doing:
    /// Check when it is free, Hide when it is only about the cards, Fold otherwise.
    pub fn passive(offered: &[Self]) -> Self {
        [Self::Check, Self::HideHoleCards]
            .into_iter()
            .find(|passive| offered.contains(passive))
            .unwrap_or(Self::Fold)
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Check => write!(f, "{}", "CHECK".cyan()),
            Self::Fold => write!(f, "{}", "FOLD".red()),
            Self::Bet(n) => write!(f, "{}", format!("BET   {}", n).green()),
            Self::Call(n) => write!(f, "{}", format!("CALL  {}", n).yellow()),
            Self::Raise(n) => write!(f, "{}", format!("RAISE {}", n).green()),
            Self::AllIn(n) => write!(f, "{}", format!("SHOVE {}", n).magenta()),
            Self::ShowHoleCards => write!(f, "{}", "SHOW".white()),
            Self::HideHoleCards => write!(f, "{}", "HIDE".white()),
        }
    }
}
