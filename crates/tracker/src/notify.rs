//! Daily commute reminder scheduling.
//!
//! The tracker keeps at most one active reminder: whenever the preferred
//! window changes it cancels the previous reminder before scheduling the
//! next one, five minutes ahead of the window start.

use crate::models::window::{CommuteWindow, TimeOfDay};

pub const REMINDER_ID: &str = "commute_reminder";
pub const REMINDER_LEAD_MINUTES: u16 = 5;

const REMINDER_TITLE: &str = "Time for your green commute!";
const REMINDER_BODY: &str = "Check for eco-friendly routes and make a positive impact today.";

/// Notification payload handed to the platform scheduler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReminderMessage {
    pub title: String,
    pub body: String,
}

impl ReminderMessage {
    /// The stock green-commute reminder.
    pub fn commute_default() -> Self {
        Self {
            title: REMINDER_TITLE.to_string(),
            body: REMINDER_BODY.to_string(),
        }
    }
}

/// When the daily reminder should fire for a given window: five minutes
/// before the start, saturating at midnight.
pub fn reminder_time(window: &CommuteWindow) -> TimeOfDay {
    window.start().minus_minutes(REMINDER_LEAD_MINUTES)
}

/// Platform-local notification scheduling.
///
/// Implementations wrap whatever the host OS offers; delivery guarantees are
/// out of scope. Both calls are fire-and-forget.
pub trait ReminderScheduler: Send + Sync {
    fn schedule_daily_reminder(&self, at: TimeOfDay, message: &ReminderMessage);
    fn cancel_reminder(&self, id: &str);
}

/// Scheduler that only logs. The library default when no platform
/// integration is wired up.
pub struct NullScheduler;

impl ReminderScheduler for NullScheduler {
    fn schedule_daily_reminder(&self, at: TimeOfDay, message: &ReminderMessage) {
        tracing::debug!(%at, title = %message.title, "reminder scheduled (no-op)");
    }

    fn cancel_reminder(&self, id: &str) {
        tracing::debug!(id, "reminder cancelled (no-op)");
    }
}
