use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Signals exchanged between surfaces. One exists today: asking the in-page
/// overlay to toggle its visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Message {
    ToggleOverlay,
}

const BUS_CAPACITY: usize = 16;

/// Fire-and-forget fan-out for [`Message`]s. Sending never fails and never
/// waits; a bus with no subscribers swallows the signal, which is the
/// intended behavior when no overlay is on screen.
#[derive(Debug, Clone)]
pub struct MessageBus {
    tx: broadcast::Sender<Message>,
}

impl MessageBus {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(BUS_CAPACITY);
        Self { tx }
    }

    /// Deliver `message` to whoever is currently subscribed, if anyone.
    pub fn send(&self, message: Message) {
        let _ = self.tx.send(message);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Message> {
        self.tx.subscribe()
    }
}

impl Default for MessageBus {
    fn default() -> Self {
        Self::new()
    }
}
