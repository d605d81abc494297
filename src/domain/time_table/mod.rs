pub mod default_table;
pub mod remaining_time;
pub mod time_section;
pub mod time_table;
pub mod timer_status;
