// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the application.
//!
//! Gestures reach the viewer through its canvas, so the only app-level
//! subscription is the periodic tick driving toast auto-dismiss.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between notification ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
