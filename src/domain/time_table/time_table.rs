use chrono::NaiveDateTime;

use crate::api::time_table_dto::TimeTableDto;
use crate::domain::time_table::default_table::default_sections;
use crate::domain::time_table::time_section::{MINUTES_PER_DAY, SectionType, TimeOfDay, TimeSection};
use crate::error::{Error, Result};
use crate::loader::parser::parse_json_file;

/// Outcome of resolving a point in time against the table.
///
/// `Fallback` means no section contained the instant and the first table entry
/// was substituted. Callers that display the result may use either variant,
/// but a fallback indicates a broken table and is logged as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionMatch<'a> {
    Matched(&'a TimeSection),
    Fallback(&'a TimeSection),
}

impl<'a> SectionMatch<'a> {
    pub fn section(&self) -> &'a TimeSection {
        match self {
            SectionMatch::Matched(section) | SectionMatch::Fallback(section) => section,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SectionMatch::Fallback(_))
    }
}

/// Immutable, ordered list of time sections describing one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeTable {
    sections: Vec<TimeSection>,
}

impl TimeTable {
    /// Wraps `sections` without checking coverage. Use [`TimeTable::validate`]
    /// (or [`TimeTable::from_dto`], which does both) before putting a table in service.
    pub fn new(sections: Vec<TimeSection>) -> Result<Self> {
        if sections.is_empty() {
            return Err(Error::TimeTableError("time table has no sections".to_string()));
        }
        Ok(TimeTable { sections })
    }

    /// The built-in daily program.
    pub fn default_table() -> Self {
        TimeTable { sections: default_sections() }
    }

    pub fn from_dto(dto: TimeTableDto) -> Result<Self> {
        let sections = dto.sections.into_iter().map(TimeSection::try_from).collect::<Result<Vec<_>>>()?;
        let table = TimeTable::new(sections)?;
        table.validate()?;
        Ok(table)
    }

    pub fn load(file_path: &str) -> Result<Self> {
        let dto: TimeTableDto = parse_json_file(file_path)?;
        let table = TimeTable::from_dto(dto)?;
        log::info!("Loaded time table with {} sections from '{}'.", table.sections.len(), file_path);
        Ok(table)
    }

    pub fn sections(&self) -> &[TimeSection] {
        &self.sections
    }

    /// Checks that the sections tile the day: every minute is covered by exactly
    /// one section, every section is followed by one that starts at its end, and
    /// only study sections carry a section id.
    pub fn validate(&self) -> Result<()> {
        let mut coverage = vec![0u32; MINUTES_PER_DAY as usize];

        for section in &self.sections {
            let duration = section.duration_minutes();
            if duration == 0 {
                return Err(Error::TimeTableError(format!("section {} has zero length", section)));
            }

            match section.section_type {
                SectionType::Break if section.section_id != 0 => {
                    return Err(Error::TimeTableError(format!("break section {} must have section id 0", section)));
                }
                SectionType::Study if section.section_id == 0 => {
                    return Err(Error::TimeTableError(format!("study section {} needs a non-zero section id", section)));
                }
                _ => {}
            }

            let start = section.starts.minute_of_day();
            for offset in 0..duration {
                coverage[((start + offset) % MINUTES_PER_DAY) as usize] += 1;
            }

            if self.section_starting_at(section.ends).is_none() {
                return Err(Error::TimeTableError(format!("no section starts where {} ends", section)));
            }
        }

        if let Some((minute, count)) = coverage.iter().enumerate().find(|&(_, &count)| count != 1) {
            let at = TimeOfDay { h: minute as u32 / 60, m: minute as u32 % 60 };
            let problem = if *count == 0 { "a gap" } else { "overlapping sections" };
            return Err(Error::TimeTableError(format!("{} at {}", problem, at)));
        }

        Ok(())
    }

    /// Resolves `now` to the section whose window contains it.
    pub fn resolve_current_section(&self, now: NaiveDateTime) -> SectionMatch<'_> {
        if let Some(section) = self.sections.iter().find(|section| section.contains(now)) {
            return SectionMatch::Matched(section);
        }

        let fallback = &self.sections[0];
        log::error!("No time section contains {}. Falling back to the first table entry {}.", now.time(), fallback);
        SectionMatch::Fallback(fallback)
    }

    pub fn current_section(&self, now: NaiveDateTime) -> &TimeSection {
        self.resolve_current_section(now).section()
    }

    /// The section that starts exactly when the current section ends.
    ///
    /// Falls back to the current section when the table has no such entry.
    pub fn next_section(&self, now: NaiveDateTime) -> &TimeSection {
        self.section_after(self.current_section(now))
    }

    pub fn section_after<'a>(&'a self, section: &'a TimeSection) -> &'a TimeSection {
        match self.section_starting_at(section.ends) {
            Some(next) => next,
            None => {
                log::warn!("No time section starts at {}. Keeping {} as the next section.", section.ends, section);
                section
            }
        }
    }

    fn section_starting_at(&self, at: TimeOfDay) -> Option<&TimeSection> {
        self.sections.iter().find(|section| section.starts == at)
    }
}

impl Default for TimeTable {
    fn default() -> Self {
        TimeTable::default_table()
    }
}
