use crate::histogram::Bucket;
use chrono::Weekday;
use std::fmt;

/// English name for a weekday numbered from Sunday (0) to Saturday (6).
/// Anything outside that range reads as "Monday".
pub fn weekday_name(days_from_sunday: u32) -> &'static str {
    match days_from_sunday {
        0 => "Sunday",
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        _ => "Monday",
    }
}

impl Bucket for Weekday {
    const ALL: &'static [Self] = &[
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    fn label(&self) -> &'static str {
        weekday_name(self.num_days_from_sunday())
    }
}

/// One of six four-hour windows of the local day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HourRange {
    Night,
    EarlyMorning,
    Morning,
    Afternoon,
    Evening,
    LateEvening,
}

impl HourRange {
    /// Hours past 19 (including anything above 23) land in `LateEvening`.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=3 => HourRange::Night,
            4..=7 => HourRange::EarlyMorning,
            8..=11 => HourRange::Morning,
            12..=15 => HourRange::Afternoon,
            16..=19 => HourRange::Evening,
            _ => HourRange::LateEvening,
        }
    }
}

impl Bucket for HourRange {
    const ALL: &'static [Self] = &[
        HourRange::Night,
        HourRange::EarlyMorning,
        HourRange::Morning,
        HourRange::Afternoon,
        HourRange::Evening,
        HourRange::LateEvening,
    ];

    fn label(&self) -> &'static str {
        match self {
            HourRange::Night => "0-3",
            HourRange::EarlyMorning => "4-7",
            HourRange::Morning => "8-11",
            HourRange::Afternoon => "12-15",
            HourRange::Evening => "16-19",
            HourRange::LateEvening => "20-23",
        }
    }
}

impl fmt::Display for HourRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
