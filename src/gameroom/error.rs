use super::action::Action;
use super::phase::Phase;
use super::status::Status;
use crate::Chips;
use crate::PlayerId;
use crate::Position;
use crate::cards::EvalError;

/// Failures of the action rendezvous between a round and one player.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    #[error("player must be idle to get ready, found {0:?}")]
    NotIdle(Status),
    #[error("player must be ready, found {0:?}")]
    NotReady(Status),
    #[error("no action is being solicited")]
    NotActing,
    #[error("{0:?} is not among the offered actions")]
    Unavailable(Action),
    #[error("{action:?} must be between {min} and {max} chips")]
    OutOfBounds { action: Action, min: Chips, max: Chips },
    #[error("timed out")]
    Timeout,
    #[error("cancelled while waiting for an action")]
    Cancelled,
    #[error("player has left the table")]
    Gone,
}

impl PlayerError {
    /// The proposal was bad but the turn is still open: ask again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::OutOfBounds { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("invalid button: {0}")]
    InvalidButton(Position),
    #[error("invalid player count: {0}")]
    InvalidPlayerCount(usize),
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("round has already started ({0:?})")]
    AlreadyStarted(Phase),
    #[error("seat {0} does not exist or is taken")]
    SeatTaken(Position),
    #[error("player {0} already exists")]
    PlayerExists(PlayerId),
    #[error("player {0} does not exist")]
    PlayerNotFound(PlayerId),
    #[error("round cancelled during {0:?}")]
    Cancelled(Phase),
    #[error(transparent)]
    Player(#[from] PlayerError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
