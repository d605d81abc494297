use crate::api::room_layout_dto::RoomLayoutDto;
use crate::domain::room::room_layout::{RoomLayout, total_seat_count};
use crate::domain::utils::ring_cursor::RingCursor;
use crate::error::Result;

/// Layouts available to one occupancy class.
///
/// Basic layouts are always shown; temporary layouts are a reserve that is
/// cycled through, in order and with wraparound, while more seats are needed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomPool {
    basic: Vec<RoomLayout>,
    temporary: Vec<RoomLayout>,
}

impl RoomPool {
    pub fn new(basic: Vec<RoomLayout>, temporary: Vec<RoomLayout>) -> Self {
        RoomPool { basic, temporary }
    }

    /// Builds a pool from config DTOs. Layouts are named `<label>-basic-<n>` and
    /// `<label>-temporary-<n>` unless they carry a floor image.
    pub fn from_dtos(label: &str, basic: Vec<RoomLayoutDto>, temporary: Vec<RoomLayoutDto>) -> Result<Self> {
        let basic = Self::convert(label, "basic", basic)?;
        let temporary = Self::convert(label, "temporary", temporary)?;
        Ok(RoomPool { basic, temporary })
    }

    fn convert(label: &str, kind: &str, dtos: Vec<RoomLayoutDto>) -> Result<Vec<RoomLayout>> {
        dtos.into_iter()
            .enumerate()
            .map(|(index, dto)| {
                let name = if dto.floor_image.is_empty() { format!("{}-{}-{}", label, kind, index + 1) } else { dto.floor_image.clone() };
                RoomLayout::try_from_dto(name, dto)
            })
            .collect()
    }

    pub fn basic(&self) -> &[RoomLayout] {
        &self.basic
    }

    pub fn temporary(&self) -> &[RoomLayout] {
        &self.temporary
    }

    pub fn basic_capacity(&self) -> u32 {
        total_seat_count(&self.basic)
    }

    pub fn is_empty(&self) -> bool {
        self.basic.is_empty()
    }

    /// Cursor over the temporary reserve, starting at its first layout.
    pub fn temporary_cursor(&self) -> RingCursor {
        RingCursor::new(self.temporary.len())
    }
}
