use crate::api::occupancy_dto::SystemConstantsDto;
use crate::error::{Error, Result};

/// Operator-controlled settings and the seat counts the backend currently serves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemConstants {
    /// Currently published general capacity.
    pub max_seats: u32,
    /// Currently published member capacity.
    pub member_max_seats: u32,
    /// Fraction of seats to keep free, in `[0, 1)`.
    pub min_vacancy_rate: f64,
    pub youtube_membership_enabled: bool,
    pub fixed_max_seats_enabled: bool,
}

impl SystemConstants {
    pub fn new(max_seats: u32, member_max_seats: u32, min_vacancy_rate: f64) -> Result<Self> {
        validate_vacancy_rate(min_vacancy_rate)?;
        Ok(SystemConstants {
            max_seats,
            member_max_seats,
            min_vacancy_rate,
            youtube_membership_enabled: false,
            fixed_max_seats_enabled: false,
        })
    }

    pub fn with_membership(mut self, enabled: bool) -> Self {
        self.youtube_membership_enabled = enabled;
        self
    }

    pub fn with_fixed_max_seats(mut self, enabled: bool) -> Self {
        self.fixed_max_seats_enabled = enabled;
        self
    }
}

fn validate_vacancy_rate(rate: f64) -> Result<()> {
    if rate.is_finite() && (0.0..1.0).contains(&rate) {
        Ok(())
    } else {
        Err(Error::ConfigurationError(format!("min vacancy rate must be in [0, 1), got {}", rate)))
    }
}

impl TryFrom<SystemConstantsDto> for SystemConstants {
    type Error = Error;

    fn try_from(dto: SystemConstantsDto) -> Result<Self> {
        validate_vacancy_rate(dto.min_vacancy_rate)?;
        Ok(SystemConstants {
            max_seats: dto.max_seats,
            member_max_seats: dto.member_max_seats,
            min_vacancy_rate: dto.min_vacancy_rate,
            youtube_membership_enabled: dto.youtube_membership_enabled,
            fixed_max_seats_enabled: dto.fixed_max_seats_enabled,
        })
    }
}
