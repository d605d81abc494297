use chrono::{NaiveDate, NaiveDateTime};

use study_room_scheduler::domain::clock::clock::Clock;
use study_room_scheduler::domain::clock::clock_mock::MockClock;
use study_room_scheduler::domain::time_table::remaining_time::remaining_time;
use study_room_scheduler::domain::time_table::time_section::{SectionType, TimeOfDay, TimeSection};
use study_room_scheduler::domain::time_table::time_table::{SectionMatch, TimeTable};
use study_room_scheduler::domain::time_table::timer_status::TimerStatus;
use study_room_scheduler::error::Error;
use study_room_scheduler::loader::parser::parse_json_str;

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 4, 1).unwrap().and_hms_opt(h, m, s).unwrap()
}

fn section(starts: (u32, u32), ends: (u32, u32), section_type: SectionType, section_id: u32) -> TimeSection {
    TimeSection::new(
        TimeOfDay::new(starts.0, starts.1).unwrap(),
        TimeOfDay::new(ends.0, ends.1).unwrap(),
        section_type,
        section_id,
        "test",
    )
}

/// Three sections covering the whole day, the last one crossing midnight.
fn small_table_sections() -> Vec<TimeSection> {
    vec![
        section((0, 5), (12, 0), SectionType::Break, 0),
        section((12, 0), (23, 40), SectionType::Study, 1),
        section((23, 40), (0, 5), SectionType::Study, 2),
    ]
}

#[test]
fn test_default_table_is_valid() {
    let table = TimeTable::default_table();
    assert_eq!(table.sections().len(), 84);
    table.validate().unwrap();
}

#[test]
fn test_every_minute_resolves_to_exactly_one_section() {
    let table = TimeTable::default_table();

    for minute in 0..24 * 60 {
        let now = at(minute / 60, minute % 60, 0);
        let containing = table.sections().iter().filter(|s| s.contains(now)).count();
        assert_eq!(containing, 1, "minute {}", minute);

        let resolved = table.resolve_current_section(now);
        assert!(!resolved.is_fallback(), "minute {}", minute);
        assert!(resolved.section().contains(now));
    }
}

#[test]
fn test_section_crossing_midnight_resolves_on_both_sides() {
    let table = TimeTable::default_table();

    for now in [at(23, 45, 0), at(0, 2, 0), at(23, 40, 0), at(0, 4, 59)] {
        let current = table.current_section(now);
        assert_eq!(current.starts, TimeOfDay { h: 23, m: 40 });
        assert_eq!(current.ends, TimeOfDay { h: 0, m: 5 });
        assert_eq!(current.section_type, SectionType::Study);
    }

    // 00:05 belongs to the following break
    let after = table.current_section(at(0, 5, 0));
    assert_eq!(after.section_type, SectionType::Break);
    assert_eq!(after.starts, TimeOfDay { h: 0, m: 5 });
}

#[test]
fn test_remaining_time_examples() {
    assert_eq!(remaining_time(10, 15, 10, 40), 25);
    assert_eq!(remaining_time(23, 50, 0, 5), 15);
    assert_eq!(remaining_time(9, 50, 11, 10), 80);
}

#[test]
fn test_next_section_starts_where_current_ends() {
    let table = TimeTable::default_table();

    let now = at(10, 20, 0);
    let current = table.current_section(now);
    let next = table.next_section(now);
    assert_eq!(next.starts, current.ends);
    assert_eq!(next.section_type, SectionType::Break);

    // the table is circular
    let last = table.next_section(at(23, 50, 0));
    assert_eq!(last.starts, TimeOfDay { h: 0, m: 5 });
}

#[test]
fn test_missing_successor_keeps_current_section() {
    let table = TimeTable::new(vec![section((8, 0), (9, 0), SectionType::Study, 1)]).unwrap();
    let current = table.current_section(at(8, 30, 0));
    let next = table.next_section(at(8, 30, 0));
    assert_eq!(next, current);
}

#[test]
fn test_gap_falls_back_to_first_entry() {
    let small = TimeTable::new(vec![section((9, 0), (10, 0), SectionType::Study, 7), section((10, 0), (11, 0), SectionType::Break, 0)]).unwrap();
    let resolved = small.resolve_current_section(at(15, 0, 0));
    assert!(matches!(resolved, SectionMatch::Fallback(_)));
    assert_eq!(resolved.section().section_id, 7);
}

#[test]
fn test_validate_accepts_small_table() {
    TimeTable::new(small_table_sections()).unwrap().validate().unwrap();
}

#[test]
fn test_validate_rejects_gap() {
    let mut sections = small_table_sections();
    sections[1] = section((12, 0), (23, 30), SectionType::Study, 1);
    let err = TimeTable::new(sections).unwrap().validate().unwrap_err();
    assert!(matches!(err, Error::TimeTableError(_)));
}

#[test]
fn test_validate_rejects_overlap() {
    let mut sections = small_table_sections();
    sections.push(section((6, 0), (12, 0), SectionType::Break, 0));
    let err = TimeTable::new(sections).unwrap().validate().unwrap_err();
    assert!(err.to_string().contains("overlapping"), "{}", err);
}

#[test]
fn test_validate_rejects_numbered_break_and_zero_length() {
    let mut sections = small_table_sections();
    sections[0].section_id = 4;
    assert!(TimeTable::new(sections).unwrap().validate().is_err());

    let mut sections = small_table_sections();
    sections.push(section((5, 0), (5, 0), SectionType::Study, 9));
    assert!(TimeTable::new(sections).unwrap().validate().is_err());
}

#[test]
fn test_empty_table_is_rejected() {
    assert!(TimeTable::new(vec![]).is_err());
}

#[test]
fn test_table_from_json() {
    let json = r#"{
        "sections": [
            {"starts": {"h": 0, "m": 5}, "ends": {"h": 12, "m": 0}, "sectionType": "break", "partType": "night"},
            {"starts": {"h": 12, "m": 0}, "ends": {"h": 23, "m": 40}, "sectionType": "study", "sectionId": 1, "partType": "day"},
            {"starts": {"h": 23, "m": 40}, "ends": {"h": 0, "m": 5}, "sectionType": "study", "sectionId": 2, "partType": "night"}
        ]
    }"#;
    let table = TimeTable::from_dto(parse_json_str(json).unwrap()).unwrap();
    assert_eq!(table.current_section(at(13, 0, 0)).part_type, "day");

    let bad_type = json.replace("\"break\"", "\"nap\"");
    assert!(TimeTable::from_dto(parse_json_str(&bad_type).unwrap()).is_err());
}

#[test]
fn test_timer_status_counts_down() {
    let table = TimeTable::default_table();
    let clock = MockClock::at_hms(10, 20, 30).unwrap();

    let status = TimerStatus::at(&table, clock.now());
    assert_eq!(status.section_type, SectionType::Study);
    assert_eq!(status.section_id, 7);
    assert_eq!(status.remaining_min, 19);
    assert_eq!(status.remaining_sec, 30);
    assert_eq!(status.countdown(), "19:30");
    assert_eq!(status.next_section_type, SectionType::Break);
    assert_eq!(status.next_section_duration, 5);
    assert!(!status.is_fallback);

    clock.set_current_time(at(23, 50, 0));
    let status = TimerStatus::at(&table, clock.now());
    assert_eq!(status.section_id, 30);
    assert_eq!(status.countdown(), "15:00");
    assert_eq!(status.next_section_duration, 20);

    clock.advance(chrono::TimeDelta::seconds(12 * 60 + 15));
    let status = TimerStatus::at(&table, clock.now());
    assert_eq!(clock.now().time(), at(0, 2, 15).time());
    assert_eq!(status.section_id, 30);
    assert_eq!(status.countdown(), "2:45");
}
