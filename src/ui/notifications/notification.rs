// SPDX-License-Identifier: MPL-2.0
//! A single user-facing notice and its severity.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies a notice for dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// How loud a notice is. Decides its accent and how long it stays up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    /// Stays until the user closes it.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Success => palette::SUCCESS_500,
            Self::Info => palette::INFO_500,
            Self::Warning => palette::WARNING_500,
            Self::Error => palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Info => "i",
            Self::Warning | Self::Error => "!",
        }
    }

    /// Heading shown above the message.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Success => "Done",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }

    /// Time on screen before the notice closes itself.
    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Self::Success | Self::Info => Some(Duration::from_secs(3)),
            Self::Warning => Some(Duration::from_secs(5)),
            Self::Error => None,
        }
    }
}

/// A notice waiting for, or occupying, a toast slot.
///
/// The clock starts when the notice is first shown, not when it is created,
/// so queued notices get their full time on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    lifetime: Option<Duration>,
    shown_at: Option<Instant>,
    repeats: u32,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message: message.into(),
            lifetime: severity.lifetime(),
            shown_at: None,
            repeats: 1,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Replaces the severity's lifetime; also makes errors self-closing.
    #[must_use]
    pub fn auto_dismiss(mut self, lifetime: Duration) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// How many identical notices this one stands for.
    #[must_use]
    pub fn repeats(&self) -> u32 {
        self.repeats
    }

    /// Message text with a repeat counter once the notice has been coalesced.
    #[must_use]
    pub fn label(&self) -> String {
        if self.repeats > 1 {
            format!("{} (×{})", self.message, self.repeats)
        } else {
            self.message.clone()
        }
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.shown_at.is_some()
    }

    /// Whether `other` says the same thing at the same severity.
    #[must_use]
    pub fn same_notice(&self, other: &Notification) -> bool {
        self.severity == other.severity && self.message == other.message
    }

    /// Unshown notices never expire.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match (self.shown_at, self.lifetime) {
            (Some(shown), Some(lifetime)) => now.saturating_duration_since(shown) >= lifetime,
            _ => false,
        }
    }

    pub(super) fn show(&mut self, now: Instant) {
        self.shown_at.get_or_insert(now);
    }

    /// Folds a repeat into this notice and restarts its clock.
    pub(super) fn absorb_repeat(&mut self, now: Instant) {
        self.repeats = self.repeats.saturating_add(1);
        if self.shown_at.is_some() {
            self.shown_at = Some(now);
        }
    }
}
