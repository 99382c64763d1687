use super::action::Action;
use super::error::PlayerError;
use super::prompt::Prompt;
use super::prompt::Proposal;
use crate::Chips;
use crate::PlayerId;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::sync::watch;

/// The decision side of a player, meant to live on another task
/// (an [`super::Actor`], a network session, a test).
///
/// A handle only ever proposes. The round validates, applies and
/// commits, so nothing done through a handle can move chips directly.
#[derive(Debug, Clone)]
pub struct Handle {
    id: PlayerId,
    prompts: watch::Receiver<Option<Prompt>>,
    proposals: mpsc::Sender<Proposal>,
    timeout: watch::Receiver<Duration>,
    answered: u64,
}

impl Handle {
    pub(super) fn new(
        id: PlayerId,
        prompts: watch::Receiver<Option<Prompt>>,
        proposals: mpsc::Sender<Proposal>,
        timeout: watch::Receiver<Duration>,
    ) -> Self {
        Self {
            id,
            prompts,
            proposals,
            timeout,
            answered: 0,
        }
    }
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The prompt currently open for this player, if any.
    pub fn current(&self) -> Option<Prompt> {
        self.prompts.borrow().clone()
    }

    /// Wait for a prompt this handle has not answered yet.
    /// Gives up with `Timeout` when the round does not ask within the
    /// player's action timeout, and with `Gone` once the player left.
    pub async fn turn(&mut self) -> Result<Prompt, PlayerError> {
        let answered = self.answered;
        let fresh = move |p: &Option<Prompt>| p.as_ref().is_some_and(|p| p.turn() > answered);
        let timeout = *self.timeout.borrow();
        let waited = tokio::time::timeout(timeout, self.prompts.wait_for(fresh)).await;
        match waited {
            Err(_) => Err(PlayerError::Timeout),
            Ok(Err(_)) => Err(PlayerError::Gone),
            Ok(Ok(prompt)) => prompt.clone().ok_or(PlayerError::NotActing),
        }
    }

    /// Answer `prompt`. The send shares the prompt's deadline, so an
    /// answer that would arrive after the round gave up fails here with
    /// `Timeout` instead of leaking into a later turn.
    pub async fn answer(&mut self, prompt: &Prompt, action: Action) -> Result<(), PlayerError> {
        let proposal = Proposal {
            turn: prompt.turn(),
            action,
        };
        match tokio::time::timeout_at(prompt.deadline(), self.proposals.send(proposal)).await {
            Err(_) => Err(PlayerError::Timeout),
            Ok(Err(_)) => Err(PlayerError::Gone),
            Ok(Ok(())) => {
                self.answered = prompt.turn();
                Ok(())
            }
        }
    }

    /// Wait for the next turn and answer it with `action`.
    pub async fn propose(&mut self, action: Action) -> Result<(), PlayerError> {
        let prompt = self.turn().await?;
        self.answer(&prompt, action).await
    }

    pub async fn check(&mut self) -> Result<(), PlayerError> {
        self.propose(Action::Check).await
    }
    pub async fn fold(&mut self) -> Result<(), PlayerError> {
        self.propose(Action::Fold).await
    }
    pub async fn bet(&mut self, chips: Chips) -> Result<(), PlayerError> {
        self.propose(Action::Bet(chips)).await
    }
    /// the amount is filled in by the round
    pub async fn call(&mut self) -> Result<(), PlayerError> {
        self.propose(Action::Call(0)).await
    }
    pub async fn raise(&mut self, chips: Chips) -> Result<(), PlayerError> {
        self.propose(Action::Raise(chips)).await
    }
    /// the amount is filled in by the round
    pub async fn all_in(&mut self) -> Result<(), PlayerError> {
        self.propose(Action::AllIn(0)).await
    }
    pub async fn show(&mut self) -> Result<(), PlayerError> {
        self.propose(Action::ShowHoleCards).await
    }
    pub async fn hide(&mut self) -> Result<(), PlayerError> {
        self.propose(Action::HideHoleCards).await
    }
}
