// SPDX-License-Identifier: MPL-2.0
//! Ordering, coalescing and expiry of notices.
//!
//! All notices live in one arrival-ordered list. The first [`MAX_VISIBLE`]
//! are on screen; the rest wait their turn.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Toast slots on screen at once.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    Tick(Instant),
}

#[derive(Debug, Default)]
pub struct Manager {
    entries: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a notice, mirroring it to the log.
    ///
    /// A notice equal to one already listed is folded into it instead of
    /// taking another slot, so repeated limit hits show as one toast.
    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    fn push_at(&mut self, notification: Notification, now: Instant) {
        match notification.severity() {
            Severity::Error => log::error!("{}", notification.message()),
            Severity::Warning => log::warn!("{}", notification.message()),
            Severity::Success | Severity::Info => log::debug!("{}", notification.message()),
        }

        if let Some(existing) = self.entries.iter_mut().find(|n| n.same_notice(&notification)) {
            existing.absorb_repeat(now);
            return;
        }

        self.entries.push_back(notification);
        self.show_front(now);
    }

    /// Removes a notice wherever it sits. Returns whether it was present.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let Some(index) = self.entries.iter().position(|n| n.id() == id) else {
            return false;
        };
        self.entries.remove(index);
        self.show_front(Instant::now());
        true
    }

    /// Drops on-screen notices whose time is up and starts the clocks of the
    /// ones that move into view.
    pub fn tick(&mut self, now: Instant) {
        let mut index = 0;
        while index < self.entries.len().min(MAX_VISIBLE) {
            if self.entries[index].is_expired_at(now) {
                self.entries.remove(index);
            } else {
                index += 1;
            }
        }
        self.show_front(now);
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    /// On-screen notices, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().take(MAX_VISIBLE)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.entries.len().min(MAX_VISIBLE)
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.entries.len().saturating_sub(MAX_VISIBLE)
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn show_front(&mut self, now: Instant) {
        for notice in self.entries.iter_mut().take(MAX_VISIBLE) {
            notice.show(now);
        }
    }
}
