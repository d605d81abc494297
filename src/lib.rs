use crate::api::monitor_config_dto::MonitorConfigDto;
use crate::domain::monitor::study_room_monitor::StudyRoomMonitor;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Reads the monitor config at `file_path` and builds a monitor that is ready to start.
pub fn load_monitor(file_path: &str) -> Result<(MonitorConfigDto, StudyRoomMonitor)> {
    let config: MonitorConfigDto = parse_json_file(file_path)?;
    log::info!("Monitor config '{}' parsed successfully.", file_path);

    let monitor = StudyRoomMonitor::from_config(&config)?;
    log::info!("Study room monitor constructed successfully.");

    Ok((config, monitor))
}
