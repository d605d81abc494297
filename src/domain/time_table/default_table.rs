use crate::domain::time_table::time_section::{SectionType, TimeOfDay, TimeSection};

pub mod part_type {
    pub const MORNING: &str = "morning";
    pub const BEFORE_NOON: &str = "before_noon";
    pub const NOON: &str = "noon";
    pub const AFTER_NOON1: &str = "after_noon1";
    pub const AFTER_NOON2: &str = "after_noon2";
    pub const EVENING: &str = "evening";
    pub const NIGHT1: &str = "night1";
    pub const NIGHT2: &str = "night2";
    pub const MID_NIGHT1: &str = "mid_night1";
    pub const MID_NIGHT2: &str = "mid_night2";
    pub const EARLY_MORNING: &str = "early_morning";
}

use self::part_type::*;
use crate::domain::time_table::time_section::SectionType::{Break, Study};

/// (starts.h, starts.m, ends.h, ends.m, type, section id, part)
type Row = (u32, u32, u32, u32, SectionType, u32, &'static str);

/// The daily program: 25 minute study sections with short breaks, longer breaks
/// between parts of the day. Study sections are numbered from 07:00.
const DEFAULT_ROWS: [Row; 84] = [
    (0, 5, 0, 25, Break, 0, NIGHT2),
    (0, 25, 0, 50, Study, 31, MID_NIGHT1),
    (0, 50, 0, 55, Break, 0, MID_NIGHT1),
    (0, 55, 1, 20, Study, 32, MID_NIGHT1),
    (1, 20, 1, 25, Break, 0, MID_NIGHT1),
    (1, 25, 1, 50, Study, 33, MID_NIGHT1),
    (1, 50, 1, 55, Break, 0, MID_NIGHT1),
    (1, 55, 2, 20, Study, 34, MID_NIGHT1),
    (2, 20, 2, 40, Break, 0, MID_NIGHT1),
    (2, 40, 3, 5, Study, 35, MID_NIGHT2),
    (3, 5, 3, 10, Break, 0, MID_NIGHT2),
    (3, 10, 3, 35, Study, 36, MID_NIGHT2),
    (3, 35, 3, 40, Break, 0, MID_NIGHT2),
    (3, 40, 4, 5, Study, 37, MID_NIGHT2),
    (4, 5, 4, 10, Break, 0, MID_NIGHT2),
    (4, 10, 4, 35, Study, 38, MID_NIGHT2),
    (4, 35, 4, 55, Break, 0, MID_NIGHT2),
    (4, 55, 5, 20, Study, 39, EARLY_MORNING),
    (5, 20, 5, 25, Break, 0, EARLY_MORNING),
    (5, 25, 5, 50, Study, 40, EARLY_MORNING),
    (5, 50, 5, 55, Break, 0, EARLY_MORNING),
    (5, 55, 6, 20, Study, 41, EARLY_MORNING),
    (6, 20, 6, 25, Break, 0, EARLY_MORNING),
    (6, 25, 6, 50, Study, 42, EARLY_MORNING),
    (6, 50, 7, 0, Break, 0, EARLY_MORNING),
    (7, 0, 7, 25, Study, 1, MORNING),
    (7, 25, 7, 30, Break, 0, MORNING),
    (7, 30, 7, 55, Study, 2, MORNING),
    (7, 55, 8, 0, Break, 0, MORNING),
    (8, 0, 8, 25, Study, 3, MORNING),
    (8, 25, 8, 30, Break, 0, MORNING),
    (8, 30, 8, 55, Study, 4, MORNING),
    (8, 55, 9, 15, Break, 0, MORNING),
    (9, 15, 9, 40, Study, 5, BEFORE_NOON),
    (9, 40, 9, 45, Break, 0, BEFORE_NOON),
    (9, 45, 10, 10, Study, 6, BEFORE_NOON),
    (10, 10, 10, 15, Break, 0, BEFORE_NOON),
    (10, 15, 10, 40, Study, 7, BEFORE_NOON),
    (10, 40, 10, 45, Break, 0, BEFORE_NOON),
    (10, 45, 11, 10, Study, 8, BEFORE_NOON),
    (11, 10, 11, 30, Break, 0, BEFORE_NOON),
    (11, 30, 11, 55, Study, 9, NOON),
    (11, 55, 12, 0, Break, 0, NOON),
    (12, 0, 12, 25, Study, 10, NOON),
    (12, 25, 13, 0, Break, 0, NOON),
    (13, 0, 13, 25, Study, 11, AFTER_NOON1),
    (13, 25, 13, 30, Break, 0, AFTER_NOON1),
    (13, 30, 13, 55, Study, 12, AFTER_NOON1),
    (13, 55, 14, 0, Break, 0, AFTER_NOON1),
    (14, 0, 14, 25, Study, 13, AFTER_NOON1),
    (14, 25, 14, 30, Break, 0, AFTER_NOON1),
    (14, 30, 14, 55, Study, 14, AFTER_NOON1),
    (14, 55, 15, 15, Break, 0, AFTER_NOON1),
    (15, 15, 15, 40, Study, 15, AFTER_NOON2),
    (15, 40, 15, 45, Break, 0, AFTER_NOON2),
    (15, 45, 16, 10, Study, 16, AFTER_NOON2),
    (16, 10, 16, 15, Break, 0, AFTER_NOON2),
    (16, 15, 16, 40, Study, 17, AFTER_NOON2),
    (16, 40, 16, 45, Break, 0, AFTER_NOON2),
    (16, 45, 17, 10, Study, 18, AFTER_NOON2),
    (17, 10, 17, 40, Break, 0, AFTER_NOON2),
    (17, 40, 18, 5, Study, 19, EVENING),
    (18, 5, 18, 10, Break, 0, EVENING),
    (18, 10, 18, 35, Study, 20, EVENING),
    (18, 35, 18, 40, Break, 0, EVENING),
    (18, 40, 19, 5, Study, 21, EVENING),
    (19, 5, 19, 10, Break, 0, EVENING),
    (19, 10, 19, 35, Study, 22, EVENING),
    (19, 35, 19, 55, Break, 0, EVENING),
    (19, 55, 20, 20, Study, 23, NIGHT1),
    (20, 20, 20, 25, Break, 0, NIGHT1),
    (20, 25, 20, 50, Study, 24, NIGHT1),
    (20, 50, 20, 55, Break, 0, NIGHT1),
    (20, 55, 21, 20, Study, 25, NIGHT1),
    (21, 20, 21, 25, Break, 0, NIGHT1),
    (21, 25, 21, 50, Study, 26, NIGHT1),
    (21, 50, 22, 10, Break, 0, NIGHT2),
    (22, 10, 22, 35, Study, 27, NIGHT2),
    (22, 35, 22, 40, Break, 0, NIGHT2),
    (22, 40, 23, 5, Study, 28, NIGHT2),
    (23, 5, 23, 10, Break, 0, NIGHT2),
    (23, 10, 23, 35, Study, 29, NIGHT2),
    (23, 35, 23, 40, Break, 0, NIGHT2),
    (23, 40, 0, 5, Study, 30, NIGHT2),
];

pub fn default_sections() -> Vec<TimeSection> {
    DEFAULT_ROWS
        .iter()
        .map(|&(starts_h, starts_m, ends_h, ends_m, section_type, section_id, part)| {
            TimeSection::new(TimeOfDay { h: starts_h, m: starts_m }, TimeOfDay { h: ends_h, m: ends_m }, section_type, section_id, part)
        })
        .collect()
}
