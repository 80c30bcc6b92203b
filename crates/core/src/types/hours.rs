//! Weekly working-hours types for agents and locations.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Opening and closing time for a single day.
///
/// Times are local to the location; the backend does not attach a timezone
/// to working hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    /// Start of the working window (e.g., 09:00).
    pub open: NaiveTime,
    /// End of the working window (e.g., 18:00).
    pub close: NaiveTime,
}

impl DayHours {
    /// Create a new working window.
    #[must_use]
    pub const fn new(open: NaiveTime, close: NaiveTime) -> Self {
        Self { open, close }
    }

    /// Whether the given time falls inside the window.
    #[must_use]
    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.open && time < self.close
    }
}

/// Per-weekday working-hour map.
///
/// `None` for a day means closed / not working. Mirrors the backend's
/// per-weekday map verbatim; no client-side invariants are enforced beyond
/// optional-field presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WeekHours {
    pub monday: Option<DayHours>,
    pub tuesday: Option<DayHours>,
    pub wednesday: Option<DayHours>,
    pub thursday: Option<DayHours>,
    pub friday: Option<DayHours>,
    pub saturday: Option<DayHours>,
    pub sunday: Option<DayHours>,
}

impl WeekHours {
    /// Look up the working window for a chrono weekday.
    #[must_use]
    pub const fn for_weekday(&self, weekday: chrono::Weekday) -> Option<DayHours> {
        match weekday {
            chrono::Weekday::Mon => self.monday,
            chrono::Weekday::Tue => self.tuesday,
            chrono::Weekday::Wed => self.wednesday,
            chrono::Weekday::Thu => self.thursday,
            chrono::Weekday::Fri => self.friday,
            chrono::Weekday::Sat => self.saturday,
            chrono::Weekday::Sun => self.sunday,
        }
    }

    /// Days per week with at least one working window.
    #[must_use]
    pub const fn working_day_count(&self) -> usize {
        let days = [
            self.monday.is_some(),
            self.tuesday.is_some(),
            self.wednesday.is_some(),
            self.thursday.is_some(),
            self.friday.is_some(),
            self.saturday.is_some(),
            self.sunday.is_some(),
        ];
        let mut count = 0;
        let mut i = 0;
        while i < days.len() {
            if days[i] {
                count += 1;
            }
            i += 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
    }

    #[test]
    fn test_day_hours_contains() {
        let hours = DayHours::new(t(9, 0), t(18, 0));
        assert!(hours.contains(t(9, 0)));
        assert!(hours.contains(t(17, 59)));
        assert!(!hours.contains(t(18, 0)));
        assert!(!hours.contains(t(8, 59)));
    }

    #[test]
    fn test_week_hours_lookup() {
        let week = WeekHours {
            monday: Some(DayHours::new(t(9, 0), t(18, 0))),
            ..WeekHours::default()
        };
        assert!(week.for_weekday(chrono::Weekday::Mon).is_some());
        assert!(week.for_weekday(chrono::Weekday::Sun).is_none());
        assert_eq!(week.working_day_count(), 1);
    }
}
