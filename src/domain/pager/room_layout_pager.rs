use std::sync::Arc;

use crate::domain::capacity::capacity_controller::CapacityPair;
use crate::domain::capacity::capacity_policy::plan_layouts;
use crate::domain::occupancy::occupancy_feed::OccupancySnapshot;
use crate::domain::occupancy::seat::{OccupancyClass, Seat};
use crate::domain::pager::layout_page::{LayoutPage, PagerView, SeatRange};
use crate::domain::room::room_layout::RoomLayout;
use crate::domain::room::room_pool::RoomPool;
use crate::domain::room::rooms_config::RoomsConfig;
use crate::domain::utils::ring_cursor::RingCursor;

/// All basic layouts, followed by as many temporary layouts as `desired_capacity` needs.
pub fn activate_layouts(pool: &RoomPool, desired_capacity: u32) -> Vec<RoomLayout> {
    let plan = plan_layouts(pool, desired_capacity);
    pool.basic().iter().cloned().chain(plan.temporary_indices.iter().map(|&index| pool.temporary()[index].clone())).collect()
}

/// Global seat id ranges for `layouts`, in order, starting at 1 without gaps.
pub fn assign_global_seat_ids(layouts: &[RoomLayout]) -> Vec<SeatRange> {
    let mut next_seat_id: u32 = 1;
    layouts
        .iter()
        .map(|layout| {
            // seat_count() >= 1 for every validated layout
            let last_seat_id = next_seat_id.saturating_add(layout.seat_count() - 1);
            let range = SeatRange { first_seat_id: next_seat_id, last_seat_id };
            next_seat_id = last_seat_id.saturating_add(1);
            range
        })
        .collect()
}

/// One page per layout, each holding the occupants in its seat range.
///
/// Occupants outside every range are dropped. This happens right after the
/// active layouts shrink and heals once capacity grows again.
pub fn build_class_pages(layouts: &[RoomLayout], occupancy: &[Seat], member_only: bool) -> Vec<LayoutPage> {
    let ranges = assign_global_seat_ids(layouts);

    let dropped = occupancy.iter().filter(|seat| !ranges.iter().any(|range| range.contains(seat.seat_id))).count();
    if dropped > 0 {
        log::debug!(
            "Dropped {} {} occupant(s) whose seat id lies outside the {} active seats.",
            dropped,
            if member_only { OccupancyClass::Member } else { OccupancyClass::General },
            ranges.last().map_or(0, |range| range.last_seat_id)
        );
    }

    layouts
        .iter()
        .zip(ranges)
        .map(|(layout, range)| LayoutPage {
            room_layout: layout.clone(),
            first_seat_id: range.first_seat_id,
            used_seats: occupancy.iter().filter(|seat| range.contains(seat.seat_id)).cloned().collect(),
            display: false,
            member_only,
        })
        .collect()
}

/// [`build_class_pages`] for the general class, showing the page at `displayed_index`.
pub fn build_pages(layouts: &[RoomLayout], occupancy: &[Seat], displayed_index: usize) -> Vec<LayoutPage> {
    let mut pages = build_class_pages(layouts, occupancy, false);
    mark_displayed(&mut pages, displayed_index);
    pages
}

fn mark_displayed(pages: &mut [LayoutPage], displayed_index: usize) {
    for (index, page) in pages.iter_mut().enumerate() {
        page.display = index == displayed_index;
    }
}

/// Owns the page list and the paging cursor.
///
/// Pages are rebuilt from scratch on every reconciliation; the cursor only
/// moves on paging ticks or explicit navigation.
#[derive(Debug)]
pub struct RoomLayoutPager {
    rooms: Arc<RoomsConfig>,
    cursor: RingCursor,
    pages: Vec<LayoutPage>,
}

impl RoomLayoutPager {
    pub fn new(rooms: Arc<RoomsConfig>) -> Self {
        RoomLayoutPager { rooms, cursor: RingCursor::default(), pages: Vec::new() }
    }

    pub fn current_index(&self) -> usize {
        self.cursor.position()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Replaces the page list with general pages followed by member pages.
    ///
    /// `target` is the capacity the layouts are activated for. Without
    /// constants or a target the pager is not ready.
    pub fn rebuild(&mut self, snapshot: &OccupancySnapshot, target: Option<CapacityPair>) -> PagerView {
        self.pages = match (snapshot.constants.as_ref(), target) {
            (Some(constants), Some(target)) => {
                let general_layouts = activate_layouts(&self.rooms.general, target.general);
                let mut pages = build_class_pages(&general_layouts, &snapshot.general_seats, false);

                if constants.youtube_membership_enabled {
                    let member_layouts = activate_layouts(&self.rooms.member, target.member);
                    pages.extend(build_class_pages(&member_layouts, &snapshot.member_seats, true));
                }
                pages
            }
            _ => Vec::new(),
        };

        let previous = self.cursor.position();
        self.cursor.resize(self.pages.len());
        if self.cursor.position() != previous {
            log::debug!("Page {} disappeared, paging restarts at the first page.", previous + 1);
        }

        mark_displayed(&mut self.pages, self.cursor.position());
        self.view()
    }

    /// Moves to the next page, or to `requested_page` (1-based) when it names an existing page.
    pub fn advance(&mut self, requested_page: Option<usize>) -> PagerView {
        let selected = requested_page.is_some_and(|page| page >= 1 && self.cursor.select(page - 1));
        if !selected {
            if let Some(page) = requested_page {
                log::debug!("Ignoring navigation to page {} of {}.", page, self.pages.len());
            }
            self.cursor.advance();
        }

        mark_displayed(&mut self.pages, self.cursor.position());
        self.view()
    }

    pub fn view(&self) -> PagerView {
        if self.pages.is_empty() {
            PagerView::NotReady
        } else {
            PagerView::Ready { pages: self.pages.clone(), current_index: self.cursor.position() }
        }
    }
}
