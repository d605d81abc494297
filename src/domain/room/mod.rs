pub mod room_layout;
pub mod room_pool;
pub mod rooms_config;
