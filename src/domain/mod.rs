pub mod capacity;
pub mod clock;
pub mod monitor;
pub mod occupancy;
pub mod pager;
pub mod room;
pub mod time_table;
pub mod utils;
