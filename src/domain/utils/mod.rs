pub mod ring_cursor;
pub mod statistics;
