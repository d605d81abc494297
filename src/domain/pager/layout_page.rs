use crate::domain::occupancy::seat::Seat;
use crate::domain::room::room_layout::RoomLayout;

/// Contiguous block of global seat ids owned by one active layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatRange {
    pub first_seat_id: u32,
    pub last_seat_id: u32,
}

impl SeatRange {
    pub fn contains(&self, seat_id: u32) -> bool {
        (self.first_seat_id..=self.last_seat_id).contains(&seat_id)
    }

    pub fn len(&self) -> u32 {
        self.last_seat_id + 1 - self.first_seat_id
    }
}

/// One screenful: an active layout and the occupants seated in it.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPage {
    pub room_layout: RoomLayout,
    pub first_seat_id: u32,
    pub used_seats: Vec<Seat>,
    pub display: bool,
    pub member_only: bool,
}

impl LayoutPage {
    pub fn seat_range(&self) -> SeatRange {
        SeatRange { first_seat_id: self.first_seat_id, last_seat_id: self.first_seat_id + self.room_layout.seat_count() - 1 }
    }

    /// Global id of the layout's local seat `local_id` (1-based).
    pub fn global_seat_id(&self, local_id: u32) -> u32 {
        self.first_seat_id + local_id - 1
    }

    pub fn occupant_of(&self, local_id: u32) -> Option<&Seat> {
        let seat_id = self.global_seat_id(local_id);
        self.used_seats.iter().find(|seat| seat.seat_id == seat_id)
    }

    pub fn vacant_seats(&self) -> u32 {
        self.room_layout.seat_count().saturating_sub(self.used_seats.len() as u32)
    }
}

/// What the pager hands to its consumers.
///
/// `NotReady` means there is nothing to page through yet, which is different
/// from pages that simply have no occupants.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PagerView {
    #[default]
    NotReady,
    Ready {
        pages: Vec<LayoutPage>,
        current_index: usize,
    },
}

impl PagerView {
    pub fn is_ready(&self) -> bool {
        matches!(self, PagerView::Ready { .. })
    }

    pub fn pages(&self) -> &[LayoutPage] {
        match self {
            PagerView::NotReady => &[],
            PagerView::Ready { pages, .. } => pages,
        }
    }

    pub fn current_page(&self) -> Option<&LayoutPage> {
        match self {
            PagerView::NotReady => None,
            PagerView::Ready { pages, current_index } => pages.get(*current_index),
        }
    }
}
