use chrono::{NaiveDateTime, Timelike};

use crate::domain::time_table::remaining_time::remaining_time;
use crate::domain::time_table::time_section::SectionType;
use crate::domain::time_table::time_table::TimeTable;

/// Countdown shown next to the seat pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerStatus {
    pub section_type: SectionType,
    pub section_id: u32,
    pub part_type: String,

    /// Whole minutes left in the current section, not counting the running minute.
    pub remaining_min: i64,

    /// Seconds left in the running minute.
    pub remaining_sec: u32,

    pub next_section_type: SectionType,

    /// Length of the next section in minutes.
    pub next_section_duration: i64,

    /// Set when the current section could not be resolved and the table default was used.
    pub is_fallback: bool,
}

impl TimerStatus {
    pub fn at(table: &TimeTable, now: NaiveDateTime) -> TimerStatus {
        let current_match = table.resolve_current_section(now);
        let current = current_match.section();
        let next = table.section_after(current);

        let remaining_sec = (60 - now.second()) % 60;
        let mut remaining_min = remaining_time(now.hour(), now.minute(), current.ends.h, current.ends.m);
        if remaining_sec != 0 {
            remaining_min -= 1;
        }

        TimerStatus {
            section_type: current.section_type,
            section_id: current.section_id,
            part_type: current.part_type.clone(),
            remaining_min,
            remaining_sec,
            next_section_type: next.section_type,
            next_section_duration: remaining_time(next.starts.h, next.starts.m, next.ends.h, next.ends.m),
            is_fallback: current_match.is_fallback(),
        }
    }

    /// `MM:SS` as shown on the countdown.
    pub fn countdown(&self) -> String {
        format!("{}:{:02}", self.remaining_min, self.remaining_sec)
    }
}
