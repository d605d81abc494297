use std::fmt;
use std::str::FromStr;

use crate::api::occupancy_dto::SeatDto;
use crate::error::ConversionError;

/// Which seat collection a seat, pool or page belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OccupancyClass {
    General,
    Member,
}

impl fmt::Display for OccupancyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OccupancyClass::General => write!(f, "general"),
            OccupancyClass::Member => write!(f, "member"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatState {
    Work,
    Break,
}

impl FromStr for SeatState {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(SeatState::Work),
            "break" => Ok(SeatState::Break),
            other => Err(ConversionError::UnknownSeatState(other.to_string())),
        }
    }
}

/// An occupied seat. `seat_id` is global within its occupancy class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub seat_id: u32,
    pub user_id: String,
    pub user_display_name: String,
    pub work_name: String,
    pub break_work_name: String,
    pub state: SeatState,
}

impl Seat {
    pub fn new(seat_id: u32, user_id: impl Into<String>) -> Self {
        Seat {
            seat_id,
            user_id: user_id.into(),
            user_display_name: String::new(),
            work_name: String::new(),
            break_work_name: String::new(),
            state: SeatState::Work,
        }
    }

    /// The task text to show for the seat in its current state.
    pub fn shown_work_name(&self) -> &str {
        match self.state {
            SeatState::Work => &self.work_name,
            SeatState::Break => &self.break_work_name,
        }
    }
}

impl TryFrom<SeatDto> for Seat {
    type Error = ConversionError;

    fn try_from(dto: SeatDto) -> Result<Self, Self::Error> {
        Ok(Seat {
            seat_id: dto.seat_id,
            user_id: dto.user_id,
            user_display_name: dto.user_display_name,
            work_name: dto.work_name,
            break_work_name: dto.break_work_name,
            state: dto.state.parse()?,
        })
    }
}
