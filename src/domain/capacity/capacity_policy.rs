use crate::domain::room::room_pool::RoomPool;

/// Upper bound on any capacity the controller will publish.
pub const MAX_CAPACITY: u32 = 100_000;

/// Upper bound on the temporary layouts one plan may activate.
pub const MAX_TEMPORARY_LAYOUTS: usize = 1_000;

/// Seats needed so that `occupants` leave at least `min_vacancy_rate` of the room free.
///
/// Clamped to [`MAX_CAPACITY`]; a rate close to 1 would otherwise ask for an unbounded room.
pub fn min_seats_for_vacancy(occupants: u32, min_vacancy_rate: f64) -> u32 {
    let seats = (occupants as f64 / (1.0 - min_vacancy_rate)).ceil();
    if seats > MAX_CAPACITY as f64 {
        log::warn!(
            "{} occupants at a minimum vacancy rate of {} need {} seats, clamping to {}.",
            occupants,
            min_vacancy_rate,
            seats,
            MAX_CAPACITY
        );
        return MAX_CAPACITY;
    }
    seats as u32
}

/// Capacity one occupancy class should be published with.
///
/// In fixed mode this is the basic pool's size. Otherwise it is the vacancy-rate
/// requirement, never less than the basic pool.
pub fn desired_capacity(pool: &RoomPool, occupants: u32, min_vacancy_rate: f64, fixed_max_seats: bool) -> u32 {
    let basic_capacity = pool.basic_capacity();
    if fixed_max_seats {
        return basic_capacity;
    }
    min_seats_for_vacancy(occupants, min_vacancy_rate).max(basic_capacity)
}

/// Which temporary layouts back a desired capacity, and how many seats they add up to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    /// Indices into the temporary pool, in activation order. May repeat after wrapping.
    pub temporary_indices: Vec<usize>,
    pub total_seats: u32,
}

impl LayoutPlan {
    pub fn layout_count(&self, pool: &RoomPool) -> usize {
        pool.basic().len() + self.temporary_indices.len()
    }
}

/// Grows the basic pool with temporary layouts, cycling through the reserve,
/// until the running seat total reaches `desired_capacity`.
///
/// With no temporary layouts the plan stops at the basic pool. It never holds
/// more than [`MAX_TEMPORARY_LAYOUTS`] temporary layouts.
pub fn plan_layouts(pool: &RoomPool, desired_capacity: u32) -> LayoutPlan {
    let mut total_seats = pool.basic_capacity();
    let mut temporary_indices = Vec::new();
    let mut cursor = pool.temporary_cursor();

    while total_seats < desired_capacity {
        if temporary_indices.len() >= MAX_TEMPORARY_LAYOUTS {
            log::warn!(
                "Stopped growing at {} temporary layouts ({} seats) short of the desired capacity {}.",
                MAX_TEMPORARY_LAYOUTS,
                total_seats,
                desired_capacity
            );
            break;
        }
        let Some(index) = cursor.next() else {
            log::warn!(
                "Desired capacity {} exceeds the basic pool ({} seats) but there are no temporary layouts to grow into.",
                desired_capacity,
                total_seats
            );
            break;
        };
        total_seats = total_seats.saturating_add(pool.temporary()[index].seat_count());
        temporary_indices.push(index);
    }

    LayoutPlan { temporary_indices, total_seats }
}
