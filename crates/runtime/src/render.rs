//! Render collaborator notified after every applied mutation.

use roster_core::RosterSnapshot;
use tokio::sync::watch;

/// Receives a read-only snapshot of the roster after each change.
///
/// Implemented for plain closures so callers can pass `|snapshot| ...`
/// directly, and by [`WatchRenderer`] for frontends that redraw from a
/// channel.
pub trait RenderSink: Send {
    fn render(&mut self, snapshot: &RosterSnapshot);
}

impl<F> RenderSink for F
where
    F: FnMut(&RosterSnapshot) + Send,
{
    fn render(&mut self, snapshot: &RosterSnapshot) {
        self(snapshot)
    }
}

/// Sink used when no renderer is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderer;

impl RenderSink for NoopRenderer {
    fn render(&mut self, _snapshot: &RosterSnapshot) {}
}

/// Publishes every snapshot on a `watch` channel.
///
/// Receivers only ever observe the latest roster, which is all a redraw needs.
pub struct WatchRenderer {
    tx: watch::Sender<RosterSnapshot>,
}

impl WatchRenderer {
    /// Create a renderer together with the receiver a frontend redraws from.
    pub fn channel() -> (Self, watch::Receiver<RosterSnapshot>) {
        let (tx, rx) = watch::channel(RosterSnapshot::default());
        (Self { tx }, rx)
    }
}

impl RenderSink for WatchRenderer {
    fn render(&mut self, snapshot: &RosterSnapshot) {
        self.tx.send_replace(snapshot.clone());
    }
}
