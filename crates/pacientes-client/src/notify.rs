//! Notification port for user-facing failure messages.
//!
//! Implementations are awaited before the failing call returns, so a modal
//! surface suspends the call exactly like an inline alert would. The
//! embedder decides what "showing the user" means.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::normalize::NormalizedFailure;

/// Port through which classified failures reach the user.
///
/// Implement this trait to plug the client into whatever surface renders
/// messages: a dialog, a toast queue, a log sink.
#[async_trait]
pub trait Notificador: Send + Sync {
    /// Deliver a user-facing failure message.
    ///
    /// Called at most once per failing call, always with a non-empty
    /// message. The failing call does not return until this does.
    async fn notificar(&self, falla: &NormalizedFailure<'_>);
}

/// Writes user messages to stderr.
///
/// The command-line analog of the modal alert: one line per failure.
pub struct StderrNotificador;

#[async_trait]
impl Notificador for StderrNotificador {
    async fn notificar(&self, falla: &NormalizedFailure<'_>) {
        eprintln!("{}", falla.user_message);
    }
}

/// Forwards user messages over an unbounded channel.
///
/// Useful when messages are rendered somewhere else (a UI loop, a test
/// assertion).
pub struct BufferNotificador {
    message_tx: mpsc::UnboundedSender<String>,
}

impl BufferNotificador {
    /// Create a notifier and the receiving end of its channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { message_tx: tx }, rx)
    }
}

#[async_trait]
impl Notificador for BufferNotificador {
    async fn notificar(&self, falla: &NormalizedFailure<'_>) {
        // Receiver may already be dropped; the message is simply lost.
        self.message_tx.send(falla.user_message.clone()).ok();
    }
}

/// Discards every notification.
pub struct SilencioNotificador;

#[async_trait]
impl Notificador for SilencioNotificador {
    async fn notificar(&self, _falla: &NormalizedFailure<'_>) {}
}
