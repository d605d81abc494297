use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};

use crate::api::time_table_dto::{TimeOfDayDto, TimeSectionDto};
use crate::error::{ConversionError, Error, Result};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Hour and minute on the 24h clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    pub h: u32,
    pub m: u32,
}

impl TimeOfDay {
    pub fn new(h: u32, m: u32) -> Result<Self> {
        if h >= 24 || m >= 60 {
            return Err(Error::TimeTableError(format!("{}:{:02} is not a valid time of day", h, m)));
        }
        Ok(TimeOfDay { h, m })
    }

    pub fn minute_of_day(&self) -> u32 {
        self.h * 60 + self.m
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        // Fields are range-checked on construction.
        NaiveTime::from_hms_opt(self.h, self.m, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.h, self.m)
    }
}

impl TryFrom<TimeOfDayDto> for TimeOfDay {
    type Error = Error;

    fn try_from(dto: TimeOfDayDto) -> Result<Self> {
        TimeOfDay::new(dto.h, dto.m)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionType {
    Study,
    Break,
}

impl SectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Study => "study",
            SectionType::Break => "break",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionType {
    type Err = ConversionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "study" | "Study" => Ok(SectionType::Study),
            "break" | "Break" => Ok(SectionType::Break),
            _ => Err(ConversionError::UnknownSectionType(s.to_string())),
        }
    }
}

/// One window of the daily program.
///
/// `section_id` numbers the study sections of the day; break sections carry `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSection {
    pub starts: TimeOfDay,
    pub ends: TimeOfDay,
    pub section_type: SectionType,
    pub section_id: u32,
    pub part_type: String,
}

impl TimeSection {
    pub fn new(starts: TimeOfDay, ends: TimeOfDay, section_type: SectionType, section_id: u32, part_type: impl Into<String>) -> Self {
        TimeSection { starts, ends, section_type, section_id, part_type: part_type.into() }
    }

    pub fn crosses_midnight(&self) -> bool {
        self.starts.minute_of_day() > self.ends.minute_of_day()
    }

    pub fn duration_minutes(&self) -> u32 {
        (self.ends.minute_of_day() + MINUTES_PER_DAY - self.starts.minute_of_day()) % MINUTES_PER_DAY
    }

    /// Places the window on the calendar relative to `now`.
    ///
    /// A window that stays within one day is placed on `now`'s date. A window that
    /// crosses midnight either started today (when `now` is at or after `starts`) or
    /// started yesterday (when `now` is before `ends`). Returns `None` when `now`
    /// lies outside both placements.
    pub fn window_around(&self, now: NaiveDateTime) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let today = now.date();
        let starts = today.and_time(self.starts.to_naive_time());
        let ends = today.and_time(self.ends.to_naive_time());

        if !self.crosses_midnight() {
            return Some((starts, ends));
        }

        let time_of_day = now.time();
        if time_of_day >= self.starts.to_naive_time() {
            Some((starts, ends.checked_add_signed(TimeDelta::days(1))?))
        } else if time_of_day < self.ends.to_naive_time() {
            Some((starts.checked_sub_signed(TimeDelta::days(1))?, ends))
        } else {
            None
        }
    }

    pub fn contains(&self, now: NaiveDateTime) -> bool {
        match self.window_around(now) {
            Some((starts, ends)) => starts <= now && now < ends,
            None => false,
        }
    }
}

impl fmt::Display for TimeSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{} (#{}, {})", self.section_type, self.starts, self.ends, self.section_id, self.part_type)
    }
}

impl TryFrom<TimeSectionDto> for TimeSection {
    type Error = Error;

    fn try_from(dto: TimeSectionDto) -> Result<Self> {
        let section_type = SectionType::from_str(&dto.section_type)?;
        Ok(TimeSection::new(TimeOfDay::try_from(dto.starts)?, TimeOfDay::try_from(dto.ends)?, section_type, dto.section_id, dto.part_type))
    }
}
