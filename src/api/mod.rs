pub mod max_seats_dto;
pub mod monitor_config_dto;
pub mod occupancy_dto;
pub mod room_layout_dto;
pub mod rooms_config_dto;
pub mod time_table_dto;
