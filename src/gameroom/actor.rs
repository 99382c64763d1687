use super::decider::Decider;
use super::error::PlayerError;
use super::handle::Handle;
use super::prompt::Prompt;

/// Runs a [`Decider`] on its own task against a player's handle.
///
/// - waits for the round to open a prompt
/// - asks the decider and answers under the prompt's deadline
/// - stops once the player has left the table
pub struct Actor {
    handle: Handle,
    decider: Box<dyn Decider>,
}

impl Actor {
    pub fn spawn<D>(handle: Handle, decider: D) -> tokio::task::JoinHandle<()>
    where
        D: Decider + 'static,
    {
        let actor = Self {
            handle,
            decider: Box::new(decider),
        };
        tokio::spawn(actor.run())
    }
    async fn run(mut self) {
        loop {
            match self.handle.turn().await {
                Ok(ref prompt) => self.act(prompt).await,
                Err(PlayerError::Timeout) => continue,
                Err(e) => {
                    log::debug!("actor for {} stops: {}", self.handle.id(), e);
                    return;
                }
            }
        }
    }
    async fn act(&mut self, prompt: &Prompt) {
        let action = self.decider.decide(prompt).await;
        if let Err(e) = self.handle.answer(prompt, action).await {
            log::warn!("{} could not answer turn {}: {}", self.handle.id(), prompt.turn(), e);
        }
    }
}
