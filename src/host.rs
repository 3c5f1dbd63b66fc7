//! Rendering hosts: where structural-change notifications end up.
//!
//! The adapter calls [`RenderHost::on_change`] once per applied mutation,
//! synchronously and in call order.

use tokio::sync::mpsc;

use crate::change::ListChange;

/// Receiver of row-level change notifications.
pub trait RenderHost {
    fn on_change(&mut self, change: ListChange);
}

/// Records every change. Handy for tests and for hosts that drain
/// notifications once per frame.
impl RenderHost for Vec<ListChange> {
    fn on_change(&mut self, change: ListChange) {
        self.push(change);
    }
}

impl<H: RenderHost + ?Sized> RenderHost for &mut H {
    fn on_change(&mut self, change: ListChange) {
        (**self).on_change(change);
    }
}

/// Writes each change to the tracing log and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHost;

impl RenderHost for LoggingHost {
    fn on_change(&mut self, change: ListChange) {
        tracing::info!(
            kind = change.kind().as_str(),
            position = change.position(),
            "Medicine list changed"
        );
    }
}

/// Forwards changes to an async render loop over an unbounded channel.
///
/// Sending never blocks, so it is safe to call from the UI thread. Once the
/// receiving side is gone, changes are dropped.
#[derive(Debug, Clone)]
pub struct ChannelHost {
    tx: mpsc::UnboundedSender<ListChange>,
}

impl ChannelHost {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ListChange>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl RenderHost for ChannelHost {
    fn on_change(&mut self, change: ListChange) {
        if self.tx.send(change).is_err() {
            tracing::debug!(
                kind = change.kind().as_str(),
                position = change.position(),
                "Render loop gone, dropping change"
            );
        }
    }
}
