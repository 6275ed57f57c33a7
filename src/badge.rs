use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;

/// What the indicator currently shows. The badge has no identity beyond its
/// last computed value; an empty `text` is the never-updated state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeState {
    pub text: String,
    pub updated_at: Option<DateTime<Utc>>,
}

impl BadgeState {
    fn unset() -> Self {
        Self {
            text: String::new(),
            updated_at: None,
        }
    }
}

/// Writer handle for the badge, backed by a watch channel: setting the text
/// replaces the value and wakes every subscriber. Cloning shares the same
/// badge.
#[derive(Debug, Clone)]
pub struct BadgeHandle {
    tx: watch::Sender<BadgeState>,
}

impl BadgeHandle {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(BadgeState::unset());
        Self { tx }
    }

    /// Replace the badge text and stamp the update time.
    pub fn set_text(&self, text: impl Into<String>) {
        self.tx.send_replace(BadgeState {
            text: text.into(),
            updated_at: Some(Utc::now()),
        });
    }

    /// Snapshot of the last computed value.
    pub fn current(&self) -> BadgeState {
        self.tx.borrow().clone()
    }

    /// Follow badge transitions. The daemon's transition logger and any host
    /// integration hang off this.
    pub fn subscribe(&self) -> watch::Receiver<BadgeState> {
        self.tx.subscribe()
    }
}

impl Default for BadgeHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unset() {
        let badge = BadgeHandle::new();
        let state = badge.current();
        assert_eq!(state.text, "");
        assert!(state.updated_at.is_none());
    }

    #[test]
    fn set_text_replaces_the_value_and_stamps_it() {
        let badge = BadgeHandle::new();
        badge.set_text("15\u{2103}");

        let state = badge.current();
        assert_eq!(state.text, "15\u{2103}");
        assert!(state.updated_at.is_some());
    }

    #[tokio::test]
    async fn subscribers_observe_each_transition() {
        let badge = BadgeHandle::new();
        let mut updates = badge.subscribe();

        badge.set_text("15\u{2103}");
        updates.changed().await.expect("first transition");
        assert_eq!(updates.borrow_and_update().text, "15\u{2103}");

        badge.set_text("59\u{2109}");
        updates.changed().await.expect("second transition");
        assert_eq!(updates.borrow_and_update().text, "59\u{2109}");
    }

    #[test]
    fn clones_share_one_badge() {
        let badge = BadgeHandle::new();
        let other = badge.clone();
        other.set_text("3\u{2103}");
        assert_eq!(badge.current().text, "3\u{2103}");
    }
}
