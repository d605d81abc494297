pub mod lifecycle;
pub mod monitor_core;
pub mod study_room_monitor;
