use super::action::Action;
use super::error::PlayerError;
use crate::Chips;
use tokio::time::Instant;

/// "It is your turn": published to a player's handle while the round
/// waits on them. Both sides race against the same `deadline`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    turn: u64,
    offered: Vec<Action>,
    deadline: Instant,
    stack: Chips,
}

impl Prompt {
    pub(super) fn new(turn: u64, offered: Vec<Action>, deadline: Instant, stack: Chips) -> Self {
        Self {
            turn,
            offered,
            deadline,
            stack,
        }
    }
    pub fn turn(&self) -> u64 {
        self.turn
    }
    pub fn offered(&self) -> &[Action] {
        &self.offered
    }
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn offers(&self, action: &Action) -> Option<&Action> {
        self.offered.iter().find(|o| o.is_kind(action))
    }

    /// Check a proposal against what was offered. Bet and Raise may be
    /// sized anywhere from the offered minimum up to the stack; Call and
    /// AllIn are always the offered amount, whatever was proposed.
    pub fn resolve(&self, action: Action) -> Result<Action, PlayerError> {
        let offered = *self.offers(&action).ok_or(PlayerError::Unavailable(action))?;
        match action {
            Action::Bet(n) | Action::Raise(n) if n < offered.amount() || n > self.stack => {
                Err(PlayerError::OutOfBounds {
                    action,
                    min: offered.amount(),
                    max: self.stack,
                })
            }
            Action::Call(_) | Action::AllIn(_) if offered.amount() > self.stack => {
                Err(PlayerError::OutOfBounds {
                    action: offered,
                    min: offered.amount(),
                    max: self.stack,
                })
            }
            Action::Call(_) | Action::AllIn(_) => Ok(offered),
            _ => Ok(action),
        }
    }
}

/// A player's answer to the prompt numbered `turn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proposal {
    pub turn: u64,
    pub action: Action,
}

/// What the round gets back from a solicitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    action: Action,
    defaulted: bool,
}

impl Decision {
    pub(super) fn new(action: Action, defaulted: bool) -> Self {
        Self { action, defaulted }
    }
    pub fn action(&self) -> Action {
        self.action
    }
    /// chips leaving the stack for the ledger
    pub fn chips(&self) -> Chips {
        self.action.amount()
    }
    /// the player never answered and the passive action was taken
    pub fn is_defaulted(&self) -> bool {
        self.defaulted
    }
}
