use super::action::Action;
use super::prompt::Prompt;

/// Anything that can pick an action when prompted.
/// CPU players, humans behind a terminal or a socket, scripted tests.
///
/// The round never sees a Decider. It only ever talks to the player's
/// [`super::Handle`], which an [`super::Actor`] drives on the decider's behalf.
#[async_trait::async_trait]
pub trait Decider: Send {
    /// Called once per prompt. Answers that are not offered, or sized
    /// out of bounds, are rejected and the prompt comes back again.
    async fn decide(&mut self, prompt: &Prompt) -> Action;
}
