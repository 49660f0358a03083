use besttime_core::TimeZoneSetting;
use chrono::{DateTime, Datelike, Local, Timelike, Utc, Weekday};

/// Places UTC instants on the calendar of the configured timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocalClock {
    timezone: TimeZoneSetting,
}

impl LocalClock {
    pub fn new(timezone: TimeZoneSetting) -> Self {
        Self { timezone }
    }

    pub fn timezone(&self) -> TimeZoneSetting {
        self.timezone
    }

    /// Weekday and hour of day (0-23) of `instant` in this clock's timezone.
    pub fn weekday_and_hour(&self, instant: DateTime<Utc>) -> (Weekday, u32) {
        match self.timezone {
            TimeZoneSetting::Local => {
                let local = instant.with_timezone(&Local);
                (local.weekday(), local.hour())
            }
            TimeZoneSetting::Named(tz) => {
                let local = instant.with_timezone(&tz);
                (local.weekday(), local.hour())
            }
        }
    }

    /// The weekday it currently is in this clock's timezone.
    pub fn today(&self) -> Weekday {
        self.weekday_and_hour(Utc::now()).0
    }
}
