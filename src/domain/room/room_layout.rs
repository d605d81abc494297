use std::sync::Arc;

use crate::api::room_layout_dto::RoomLayoutDto;
use crate::error::{Error, Result};

/// A validated room layout.
///
/// Seat ids of a layout are exactly `1..=seat_count`, which is what makes the
/// mapping from local to global seat ids gap-free. The definition is shared,
/// so cloning a layout into many pages is cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomLayout {
    name: String,
    definition: Arc<RoomLayoutDto>,
}

impl RoomLayout {
    /// `name` only identifies the layout in logs and error messages.
    pub fn try_from_dto(name: impl Into<String>, dto: RoomLayoutDto) -> Result<Self> {
        let name = name.into();

        if dto.seats.is_empty() {
            return Err(Error::ConfigurationError(format!("layout '{}' has no seats", name)));
        }

        let mut ids: Vec<u32> = dto.seats.iter().map(|seat| seat.id).collect();
        ids.sort_unstable();
        for (expected, id) in (1u32..).zip(ids.iter()) {
            if *id != expected {
                return Err(Error::ConfigurationError(format!(
                    "layout '{}' must number its seats 1..={} without gaps or duplicates, found seat id {} where {} was expected",
                    name,
                    dto.seats.len(),
                    id,
                    expected
                )));
            }
        }

        Ok(RoomLayout { name, definition: Arc::new(dto) })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn seat_count(&self) -> u32 {
        self.definition.seats.len() as u32
    }

    pub fn definition(&self) -> &RoomLayoutDto {
        &self.definition
    }
}

pub fn total_seat_count(layouts: &[RoomLayout]) -> u32 {
    layouts.iter().map(RoomLayout::seat_count).fold(0, u32::saturating_add)
}
