pub mod file_feed;
pub mod occupancy_feed;
pub mod seat;
pub mod system_constants;
