//! Time-of-day values and the recurring preferred commute window.

use std::fmt;

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::models::types::{Result, TrackerError};

/// A wall-clock time of day (hour and minute), always in a valid 24-hour
/// range. Construct through [`TimeOfDay::new`]; deserialization applies the
/// same validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "TimeOfDayRepr")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

#[derive(Deserialize)]
struct TimeOfDayRepr {
    hour: u8,
    minute: u8,
}

impl TryFrom<TimeOfDayRepr> for TimeOfDay {
    type Error = String;

    fn try_from(repr: TimeOfDayRepr) -> std::result::Result<Self, Self::Error> {
        TimeOfDay::new(repr.hour, repr.minute).map_err(|e| e.to_string())
    }
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(TrackerError::Validation(format!(
                "time of day out of range: {:02}:{:02}",
                hour, minute
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Extract the time-of-day component of a timestamp.
    pub fn from_timestamp(at: &DateTime<Utc>) -> Self {
        Self {
            hour: at.hour() as u8,
            minute: at.minute() as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn minutes_from_midnight(&self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }

    /// Step back by `lead` minutes, saturating at midnight.
    pub fn minus_minutes(&self, lead: u16) -> Self {
        let total = self.minutes_from_midnight().saturating_sub(lead);
        Self {
            hour: (total / 60) as u8,
            minute: (total % 60) as u8,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A recurring daily window during which the user intends to commute.
///
/// Containment is an inclusive `[start, end]` comparison on minutes from
/// midnight. A window whose start is later than its end does not wrap past
/// midnight; it contains no time at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommuteWindow {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl CommuteWindow {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn contains(&self, at: TimeOfDay) -> bool {
        let minutes = at.minutes_from_midnight();
        minutes >= self.start.minutes_from_midnight() && minutes <= self.end.minutes_from_midnight()
    }
}

impl fmt::Display for CommuteWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(start: (u8, u8), end: (u8, u8)) -> CommuteWindow {
        CommuteWindow::new(
            TimeOfDay::new(start.0, start.1).unwrap(),
            TimeOfDay::new(end.0, end.1).unwrap(),
        )
    }

    #[test]
    fn test_time_of_day_validation() {
        assert!(TimeOfDay::new(23, 59).is_ok());
        assert!(TimeOfDay::new(24, 0).is_err());
        assert!(TimeOfDay::new(8, 60).is_err());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let w = window((8, 0), (9, 0));

        assert!(w.contains(TimeOfDay::new(8, 30).unwrap()));
        assert!(w.contains(TimeOfDay::new(8, 0).unwrap()));
        assert!(w.contains(TimeOfDay::new(9, 0).unwrap()));
        assert!(!w.contains(TimeOfDay::new(7, 59).unwrap()));
        assert!(!w.contains(TimeOfDay::new(9, 1).unwrap()));
    }

    #[test]
    fn test_midnight_spanning_window_is_empty() {
        let w = window((22, 0), (6, 0));

        assert!(!w.contains(TimeOfDay::new(23, 0).unwrap()));
        assert!(!w.contains(TimeOfDay::new(3, 0).unwrap()));
        assert!(!w.contains(TimeOfDay::new(22, 0).unwrap()));
    }

    #[test]
    fn test_minus_minutes_saturates_at_midnight() {
        let t = TimeOfDay::new(8, 0).unwrap();
        assert_eq!(t.minus_minutes(5), TimeOfDay::new(7, 55).unwrap());

        let early = TimeOfDay::new(0, 3).unwrap();
        assert_eq!(early.minus_minutes(5), TimeOfDay::new(0, 0).unwrap());
    }

    #[test]
    fn test_deserialization_rejects_out_of_range() {
        let decoded: std::result::Result<TimeOfDay, _> =
            serde_json::from_str(r#"{"hour":25,"minute":0}"#);
        assert!(decoded.is_err());

        let ok: TimeOfDay = serde_json::from_str(r#"{"hour":8,"minute":30}"#).unwrap();
        assert_eq!(ok, TimeOfDay::new(8, 30).unwrap());
    }

    #[test]
    fn test_window_serde_round_trip() {
        let w = window((7, 45), (9, 15));
        let encoded = serde_json::to_string(&w).unwrap();
        let decoded: CommuteWindow = serde_json::from_str(&encoded).unwrap();
        assert_eq!(w, decoded);
    }

    #[test]
    fn test_display() {
        assert_eq!(window((8, 5), (9, 0)).to_string(), "08:05 - 09:00");
    }
}
