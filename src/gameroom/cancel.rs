use tokio::sync::watch;

/// Trigger side of a cancellation signal. Dropping it without calling
/// [`Abort::abort`] never cancels anything.
#[derive(Debug)]
pub struct Abort(watch::Sender<bool>);

/// Listener side, handed to a round. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct Cancel(Option<watch::Receiver<bool>>);

pub fn cancellation() -> (Abort, Cancel) {
    let (tx, rx) = watch::channel(false);
    (Abort(tx), Cancel(Some(rx)))
}

impl Abort {
    pub fn abort(&self) {
        self.0.send_replace(true);
    }
}

impl Cancel {
    pub fn never() -> Self {
        Self(None)
    }
    pub fn is_cancelled(&self) -> bool {
        self.0.as_ref().is_some_and(|rx| *rx.borrow())
    }
    /// Resolves once aborted. Pends forever otherwise.
    pub async fn cancelled(&mut self) {
        let closed = match self.0.as_mut() {
            Some(rx) => rx.wait_for(|aborted| *aborted).await.map(|_| ()).is_err(),
            None => true,
        };
        if closed {
            std::future::pending::<()>().await;
        }
    }
}
