use super::action::Action;
use super::decider::Decider;
use super::prompt::Prompt;
use rand::seq::IndexedRandom;

/// CPU player that picks uniformly among the offered actions,
/// always at the offered size.
pub struct Fish;

#[async_trait::async_trait]
impl Decider for Fish {
    async fn decide(&mut self, prompt: &Prompt) -> Action {
        let ref mut rng = rand::rng();
        prompt
            .offered()
            .choose(rng)
            .copied()
            .unwrap_or_else(|| Action::passive(prompt.offered()))
    }
}
