pub mod layout_page;
pub mod room_layout_pager;
