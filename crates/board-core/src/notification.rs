//! Notification Tray
//!
//! Transient messages. A notification leaves in two steps: it is marked
//! `Leaving` while its exit animation plays, then removed. Both steps are
//! idempotent, so a late expiry timer or a second click does nothing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::effect::TimerToken;

pub type NotificationId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    /// Present when the page loaded
    Seeded,
    /// Created by a user action
    Posted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Shown,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub origin: Origin,
    pub phase: Phase,
}

/// Outcome of asking a notification to leave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leave {
    /// The notification is now leaving; its expiry timer, if one was armed,
    /// is handed back for cancellation
    Started { pending_expiry: Option<TimerToken> },
    /// Already leaving or removed
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationTray {
    items: Vec<Notification>,
    next_id: NotificationId,
    #[serde(skip)]
    expiry: HashMap<NotificationId, TimerToken>,
}

impl NotificationTray {
    /// Tray holding the notifications present at load
    pub fn seeded<I, T, M>(initial: I) -> Self
    where
        I: IntoIterator<Item = (T, M)>,
        T: Into<String>,
        M: Into<String>,
    {
        let mut tray = Self::default();
        for (title, message) in initial {
            tray.push(title.into(), message.into(), Origin::Seeded);
        }
        tray
    }

    fn push(&mut self, title: String, message: String, origin: Origin) -> NotificationId {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            title,
            message,
            origin,
            phase: Phase::Shown,
        });
        id
    }

    pub fn post(&mut self, title: impl Into<String>, message: impl Into<String>) -> NotificationId {
        self.push(title.into(), message.into(), Origin::Posted)
    }

    /// Remember the timer that will expire `id`
    pub fn arm_expiry(&mut self, id: NotificationId, token: TimerToken) {
        self.expiry.insert(id, token);
    }

    pub fn start_leaving(&mut self, id: NotificationId) -> Leave {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(notification) if notification.phase == Phase::Shown => {
                notification.phase = Phase::Leaving;
                Leave::Started {
                    pending_expiry: self.expiry.remove(&id),
                }
            }
            _ => Leave::Ignored,
        }
    }

    /// Drop a notification. Returns false if it was already gone.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        self.expiry.remove(&id);
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_ids_are_sequential() {
        let tray = NotificationTray::seeded([("a", "1"), ("b", "2")]);
        let ids: Vec<_> = tray.items().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(tray.items().iter().all(|n| n.origin == Origin::Seeded));
    }

    #[test]
    fn test_leave_hands_back_timer_once() {
        let mut tray = NotificationTray::default();
        let id = tray.post("Quick Add", "What would you like to add?");
        tray.arm_expiry(id, TimerToken(7));

        assert_eq!(
            tray.start_leaving(id),
            Leave::Started { pending_expiry: Some(TimerToken(7)) }
        );
        assert_eq!(tray.get(id).unwrap().phase, Phase::Leaving);
        assert_eq!(tray.start_leaving(id), Leave::Ignored);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut tray = NotificationTray::default();
        let id = tray.post("t", "m");
        assert!(tray.remove(id));
        assert!(!tray.remove(id));
        assert_eq!(tray.start_leaving(id), Leave::Ignored);
        assert!(tray.is_empty());
    }
}
