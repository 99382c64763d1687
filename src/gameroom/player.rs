use super::action::Action;
use super::cancel::Cancel;
use super::error::PlayerError;
use super::handle::Handle;
use super::prompt::Decision;
use super::prompt::Prompt;
use super::prompt::Proposal;
use super::status::Status;
use crate::Chips;
use crate::DEFAULT_ACTION_TIMEOUT;
use crate::DEFAULT_STACK;
use crate::PlayerId;
use crate::cards::Hole;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::sync::watch;
use tokio::time::Instant;

/// Both ends of the rendezvous that the round keeps for itself.
#[derive(Debug)]
struct Mailbox {
    prompts: watch::Sender<Option<Prompt>>,
    proposals: mpsc::Receiver<Proposal>,
    outbox: mpsc::Sender<Proposal>,
    timeout: watch::Sender<Duration>,
    turn: u64,
}

impl Mailbox {
    fn open(timeout: Duration) -> Self {
        let (prompts, _) = watch::channel(None);
        let (outbox, proposals) = mpsc::channel(1);
        let (timeout, _) = watch::channel(timeout);
        Self {
            prompts,
            proposals,
            outbox,
            timeout,
            turn: 0,
        }
    }
    /// throw away answers to turns that already closed
    fn drain(&mut self) {
        while let Ok(stale) = self.proposals.try_recv() {
            log::trace!("discarding stale proposal for turn {}", stale.turn);
        }
    }
    fn publish(&mut self, offered: &[Action], deadline: Instant, stack: Chips) -> Prompt {
        self.turn += 1;
        let prompt = Prompt::new(self.turn, offered.to_vec(), deadline, stack);
        self.prompts.send_replace(Some(prompt.clone()));
        prompt
    }
    fn revoke(&mut self) {
        self.prompts.send_replace(None);
    }
    async fn receive(&mut self, turn: u64) -> Option<Action> {
        loop {
            match self.proposals.recv().await {
                Some(proposal) if proposal.turn == turn => return Some(proposal.action),
                Some(_) => continue,
                None => return None,
            }
        }
    }
}

/// A seated player: identity, chips, cards for the current hand,
/// and the round's end of the action rendezvous.
///
/// Stack and status change only through the round calling into this
/// type. The decision process holds a [`Handle`] and can only propose.
#[derive(Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    stack: Chips,
    hole: Option<Hole>,
    status: Status,
    timeout: Duration,
    mailbox: Option<Mailbox>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::default(),
            name: name.into(),
            stack: DEFAULT_STACK,
            hole: None,
            status: Status::Idle,
            timeout: DEFAULT_ACTION_TIMEOUT,
            mailbox: None,
        }
    }
    pub fn with_id(self, id: PlayerId) -> Self {
        Self { id, ..self }
    }
    pub fn with_stack(self, stack: Chips) -> Self {
        Self { stack, ..self }
    }
    /// Handles already out see the new timeout on their next wait.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        if let Some(mailbox) = self.mailbox.as_ref() {
            mailbox.timeout.send_replace(timeout);
        }
        Self { timeout, ..self }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn hole(&self) -> Option<Hole> {
        self.hole
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Player {
    /// Idle -> Ready. Opens the rendezvous and returns the first handle to it.
    pub fn ready(&mut self) -> Result<Handle, PlayerError> {
        if self.status != Status::Idle {
            return Err(PlayerError::NotIdle(self.status));
        }
        self.mailbox = Some(Mailbox::open(self.timeout));
        self.status = Status::Ready;
        self.handle()
    }
    /// Ready -> Idle. Outstanding handles see the player as gone.
    pub fn cancel_ready(&mut self) -> Result<(), PlayerError> {
        if self.status != Status::Ready {
            return Err(PlayerError::NotReady(self.status));
        }
        self.mailbox = None;
        self.status = Status::Idle;
        Ok(())
    }
    /// Another handle onto the same rendezvous.
    pub fn handle(&self) -> Result<Handle, PlayerError> {
        self.mailbox
            .as_ref()
            .map(|m| Handle::new(self.id, m.prompts.subscribe(), m.outbox.clone(), m.timeout.subscribe()))
            .ok_or(PlayerError::Gone)
    }
    /// Re-arm for the next hand. Handles stay valid when the
    /// rendezvous is still open; a fresh one is opened otherwise.
    pub fn reset(&mut self) {
        match self.mailbox.as_mut() {
            Some(mailbox) => {
                mailbox.drain();
                mailbox.revoke();
            }
            None => self.mailbox = Some(Mailbox::open(self.timeout)),
        }
        self.hole = None;
        self.status = Status::Ready;
    }
    /// Leave the table. Closes the rendezvous once; further calls do nothing.
    pub fn gone(&mut self) {
        if self.mailbox.take().is_some() {
            log::debug!("{} left the table", self.name);
        }
    }
    pub fn is_gone(&self) -> bool {
        self.mailbox.is_none()
    }
}

impl Player {
    pub(super) fn deal(&mut self, hole: Hole) -> Result<(), PlayerError> {
        if self.status != Status::Ready {
            return Err(PlayerError::NotReady(self.status));
        }
        self.hole = Some(hole);
        Ok(())
    }
    /// Forced bet. A short stack posts what it has and is all-in.
    pub(super) fn post(&mut self, blind: Chips) -> Chips {
        let posted = blind.min(self.stack);
        self.stack -= posted;
        if self.stack == 0 {
            self.status = Status::AllIn;
        }
        posted
    }
    pub(super) fn win(&mut self, chips: Chips) {
        self.stack += chips;
        self.status = Status::Won;
    }
    pub(super) fn lose(&mut self) {
        self.status = Status::Lost;
    }

    /// Solicit one action.
    ///
    /// Publishes `offered` to the handles, then waits for a proposal
    /// until `deadline`. A valid proposal is committed to stack and
    /// status. An invalid one commits nothing and comes back as a
    /// recoverable error so the caller can ask again. Silence until the
    /// deadline commits [`Action::passive`]. Cancellation commits nothing.
    pub async fn request(
        &mut self,
        offered: &[Action],
        deadline: Instant,
        cancel: &mut Cancel,
    ) -> Result<Decision, PlayerError> {
        let stack = self.stack;
        let Some(mailbox) = self.mailbox.as_mut() else {
            log::warn!("{} is gone, acting passively", self.name);
            return Ok(self.commit(Action::passive(offered), true));
        };
        mailbox.drain();
        let prompt = mailbox.publish(offered, deadline, stack);
        let received = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            received = tokio::time::timeout_at(deadline, mailbox.receive(prompt.turn())) => Some(received),
        };
        mailbox.revoke();
        match received {
            None => Err(PlayerError::Cancelled),
            Some(Ok(Some(proposal))) => prompt
                .resolve(proposal)
                .inspect_err(|e| log::warn!("{} proposed badly: {}", self.name, e))
                .map(|action| self.commit(action, false)),
            Some(_) => {
                log::warn!("{} timed out", self.name);
                Ok(self.commit(Action::passive(offered), true))
            }
        }
    }

    fn commit(&mut self, action: Action, defaulted: bool) -> Decision {
        let chips = action.amount();
        self.stack -= chips;
        self.status = match action {
            Action::ShowHoleCards | Action::HideHoleCards => self.status,
            Action::Fold => Status::Folded,
            Action::AllIn(_) => Status::AllIn,
            _ if chips > 0 && self.stack == 0 => Status::AllIn,
            _ => Status::Waiting,
        };
        Decision::new(action, defaulted)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.hole {
            Some(hole) => write!(f, "{:<10}{:>7} {} {}", self.name, self.stack, hole, self.status),
            None => write!(f, "{:<10}{:>7}       {}", self.name, self.stack, self.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn ready(stack: Chips) -> (Player, Handle) {
        let mut player = Player::new("alice").with_stack(stack);
        let handle = player.ready().unwrap();
        (player, handle)
    }
    fn soon() -> Instant {
        Instant::now() + DEFAULT_ACTION_TIMEOUT
    }

    #[test]
    fn ready_only_from_idle() {
        let (mut player, _) = ready(100);
        assert_eq!(player.status(), Status::Ready);
        assert_eq!(player.ready().unwrap_err(), PlayerError::NotIdle(Status::Ready));
        player.cancel_ready().unwrap();
        assert_eq!(player.status(), Status::Idle);
        assert!(player.is_gone());
    }

    #[test]
    fn deal_requires_ready() {
        let hole = Hole::from((Card::from(0u8), Card::from(1u8)));
        let mut idle = Player::new("bob");
        assert_eq!(idle.deal(hole), Err(PlayerError::NotReady(Status::Idle)));
        let (mut player, _) = ready(100);
        assert_eq!(player.deal(hole), Ok(()));
        assert_eq!(player.hole(), Some(hole));
    }

    #[test]
    fn short_blind_is_all_in() {
        let (mut player, _) = ready(1);
        assert_eq!(player.post(2), 1);
        assert_eq!(player.stack(), 0);
        assert_eq!(player.status(), Status::AllIn);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_folds_facing_a_bet() {
        let (mut player, _handle) = ready(100);
        let offered = [Action::Fold, Action::Call(2), Action::Raise(4)];
        let decision = player.request(&offered, soon(), &mut Cancel::never()).await.unwrap();
        assert_eq!(decision.action(), Action::Fold);
        assert!(decision.is_defaulted());
        assert_eq!(player.status(), Status::Folded);
        assert_eq!(player.stack(), 100);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_checks_when_free() {
        let (mut player, _handle) = ready(100);
        let offered = [Action::Check, Action::Bet(2)];
        let decision = player.request(&offered, soon(), &mut Cancel::never()).await.unwrap();
        assert_eq!(decision.action(), Action::Check);
        assert!(decision.is_defaulted());
        assert_eq!(player.status(), Status::Waiting);
    }

    #[tokio::test(start_paused = true)]
    async fn proposal_is_committed() {
        let (mut player, mut handle) = ready(100);
        let task = tokio::spawn(async move { handle.raise(10).await });
        let offered = [Action::Fold, Action::AllIn(100), Action::Call(2), Action::Raise(4)];
        let decision = player.request(&offered, soon(), &mut Cancel::never()).await.unwrap();
        assert_eq!(decision.action(), Action::Raise(10));
        assert_eq!(decision.chips(), 10);
        assert!(!decision.is_defaulted());
        assert_eq!(player.stack(), 90);
        assert_eq!(player.status(), Status::Waiting);
        assert_eq!(task.await.unwrap(), Ok(()));
    }

    #[tokio::test(start_paused = true)]
    async fn call_amount_is_forced() {
        let (mut player, mut handle) = ready(100);
        let task = tokio::spawn(async move { handle.call().await });
        let offered = [Action::Fold, Action::Call(6)];
        let decision = player.request(&offered, soon(), &mut Cancel::never()).await.unwrap();
        assert_eq!(decision.action(), Action::Call(6));
        assert_eq!(player.stack(), 94);
        task.await.unwrap().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn calling_off_the_stack_is_all_in() {
        let (mut player, mut handle) = ready(6);
        let task = tokio::spawn(async move { handle.call().await });
        let offered = [Action::Fold, Action::AllIn(6), Action::Call(6)];
        player.request(&offered, soon(), &mut Cancel::never()).await.unwrap();
        assert_eq!(player.status(), Status::AllIn);
        task.await.unwrap().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_proposal_commits_nothing() {
        let (mut player, mut handle) = ready(100);
        let task = tokio::spawn(async move { handle.check().await });
        let offered = [Action::Fold, Action::Call(2)];
        let err = player.request(&offered, soon(), &mut Cancel::never()).await.unwrap_err();
        assert_eq!(err, PlayerError::Unavailable(Action::Check));
        assert!(err.is_recoverable());
        assert_eq!(player.stack(), 100);
        assert_eq!(player.status(), Status::Ready);
        task.await.unwrap().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn second_answer_waits_for_next_turn() {
        let (mut player, mut handle) = ready(100);
        let task = tokio::spawn(async move {
            handle.check().await?;
            handle.bet(5).await
        });
        let first = [Action::Check, Action::Bet(2)];
        let decision = player.request(&first, soon(), &mut Cancel::never()).await.unwrap();
        assert_eq!(decision.action(), Action::Check);
        let decision = player.request(&first, soon(), &mut Cancel::never()).await.unwrap();
        assert_eq!(decision.action(), Action::Bet(5));
        assert_eq!(player.stack(), 95);
        task.await.unwrap().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn handle_times_out_when_nobody_asks() {
        let (_player, mut handle) = ready(100);
        assert_eq!(handle.check().await, Err(PlayerError::Timeout));
    }

    #[tokio::test(start_paused = true)]
    async fn handle_follows_a_later_timeout() {
        let (player, mut handle) = ready(100);
        let player = player.with_timeout(Duration::from_millis(250));
        let mut other = player.handle().unwrap();
        let start = Instant::now();
        assert_eq!(handle.check().await, Err(PlayerError::Timeout));
        assert_eq!(start.elapsed(), Duration::from_millis(250));
        let start = Instant::now();
        assert_eq!(other.check().await, Err(PlayerError::Timeout));
        assert_eq!(start.elapsed(), Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_commits_nothing() {
        let (mut player, _handle) = ready(100);
        let (abort, mut cancel) = crate::gameroom::cancellation();
        abort.abort();
        let offered = [Action::Fold, Action::Call(2)];
        let err = player.request(&offered, soon(), &mut cancel).await.unwrap_err();
        assert_eq!(err, PlayerError::Cancelled);
        assert_eq!(player.status(), Status::Ready);
        assert_eq!(player.stack(), 100);
    }

    #[tokio::test(start_paused = true)]
    async fn gone_is_idempotent_and_ends_handles() {
        let (mut player, mut handle) = ready(100);
        player.gone();
        player.gone();
        assert!(player.is_gone());
        assert_eq!(player.handle().unwrap_err(), PlayerError::Gone);
        assert_eq!(handle.turn().await, Err(PlayerError::Gone));
        let offered = [Action::Check, Action::Bet(2)];
        let decision = player.request(&offered, soon(), &mut Cancel::never()).await.unwrap();
        assert_eq!(decision.action(), Action::Check);
        assert!(decision.is_defaulted());
    }
}
