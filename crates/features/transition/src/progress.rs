use splash_domain::Stage;
use tokio::sync::watch;
use tracing::{debug, trace};

/// Receiving half of a progress channel; always holds the latest [`Stage`].
pub type ProgressReceiver = watch::Receiver<Stage>;

/// Creates a progress channel starting at [`Stage::Pending`].
#[must_use]
pub fn channel() -> (Progress, ProgressReceiver) {
    let (tx, rx) = watch::channel(Stage::Pending);
    (Progress { sender: Some(tx) }, rx)
}

/// Publishes stage changes of a running sequence.
///
/// Latest-value semantics: observers that fall behind only see the most
/// recent stage. A detached progress (the default) publishes nothing.
#[derive(Debug, Clone, Default)]
pub struct Progress {
    sender: Option<watch::Sender<Stage>>,
}

impl Progress {
    #[must_use]
    pub const fn detached() -> Self {
        Self { sender: None }
    }

    /// Creates another receiver, or `None` for a detached progress.
    #[must_use]
    pub fn subscribe(&self) -> Option<ProgressReceiver> {
        self.sender.as_ref().map(watch::Sender::subscribe)
    }

    pub(crate) fn advance(&self, stage: Stage) {
        debug!(%stage, "Transition stage reached");
        let Some(sender) = &self.sender else {
            return;
        };
        // `send_replace` stores the value even when every receiver is gone.
        let previous = sender.send_replace(stage);
        trace!(%previous, %stage, receivers = sender.receiver_count(), "Progress published");
    }
}

impl From<watch::Sender<Stage>> for Progress {
    fn from(sender: watch::Sender<Stage>) -> Self {
        Self { sender: Some(sender) }
    }
}
