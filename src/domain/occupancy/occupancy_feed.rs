use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::api::occupancy_dto::{FeedSnapshotDto, SeatDto};
use crate::domain::occupancy::seat::{OccupancyClass, Seat};
use crate::domain::occupancy::system_constants::SystemConstants;

/// Latest values pushed by the realtime feed.
///
/// `constants` stays `None` until the first constants document arrives; nothing
/// is reconciled or paged before that.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OccupancySnapshot {
    pub general_seats: Vec<Seat>,
    pub member_seats: Vec<Seat>,
    pub constants: Option<SystemConstants>,
}

impl OccupancySnapshot {
    pub fn seats(&self, class: OccupancyClass) -> &[Seat] {
        match class {
            OccupancyClass::General => &self.general_seats,
            OccupancyClass::Member => &self.member_seats,
        }
    }

    pub fn occupant_count(&self, class: OccupancyClass) -> u32 {
        self.seats(class).len() as u32
    }
}

/// Shared handle the feed writes into and the monitor reads from.
///
/// Each publish replaces one value wholesale, so readers always see a
/// complete seat list.
#[derive(Debug, Clone, Default)]
pub struct OccupancyFeed {
    latest: Arc<RwLock<OccupancySnapshot>>,
}

impl OccupancyFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish_seats(&self, class: OccupancyClass, seats: Vec<Seat>) {
        let mut latest = self.write();
        match class {
            OccupancyClass::General => latest.general_seats = seats,
            OccupancyClass::Member => latest.member_seats = seats,
        }
    }

    pub fn publish_constants(&self, constants: SystemConstants) {
        self.write().constants = Some(constants);
    }

    /// Publishes a whole feed document.
    ///
    /// Seat records with an unknown state are skipped. Constants that fail
    /// validation are ignored and the previous constants stay in effect.
    pub fn publish_dto(&self, dto: FeedSnapshotDto) {
        let general = convert_seats(OccupancyClass::General, dto.general_seats);
        let member = convert_seats(OccupancyClass::Member, dto.member_seats);

        let constants = match dto.constants.map(SystemConstants::try_from) {
            Some(Ok(constants)) => Some(constants),
            Some(Err(e)) => {
                log::error!("Ignoring malformed system constants from the feed: {}", e);
                None
            }
            None => None,
        };

        let mut latest = self.write();
        latest.general_seats = general;
        latest.member_seats = member;
        if let Some(constants) = constants {
            latest.constants = Some(constants);
        }
    }

    pub fn snapshot(&self) -> OccupancySnapshot {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, OccupancySnapshot> {
        self.latest.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, OccupancySnapshot> {
        self.latest.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn convert_seats(class: OccupancyClass, dtos: Vec<SeatDto>) -> Vec<Seat> {
    dtos.into_iter()
        .filter_map(|dto| {
            let seat_id = dto.seat_id;
            match Seat::try_from(dto) {
                Ok(seat) => Some(seat),
                Err(e) => {
                    log::warn!("Skipping {} seat {}: {}", class, seat_id, e);
                    None
                }
            }
        })
        .collect()
}
