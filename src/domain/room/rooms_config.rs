use crate::api::rooms_config_dto::RoomsConfigDto;
use crate::domain::occupancy::seat::OccupancyClass;
use crate::domain::room::room_pool::RoomPool;
use crate::error::{Error, Result};
use crate::loader::parser::parse_json_file;

/// The general and member layout pools, loaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomsConfig {
    pub general: RoomPool,
    pub member: RoomPool,
}

impl RoomsConfig {
    pub fn new(general: RoomPool, member: RoomPool) -> Result<Self> {
        if general.is_empty() {
            return Err(Error::ConfigurationError("the general pool needs at least one basic layout".to_string()));
        }
        if member.is_empty() {
            log::warn!("The member pool has no basic layouts. Member pages will stay empty while membership is enabled.");
        }
        Ok(RoomsConfig { general, member })
    }

    pub fn from_dto(dto: RoomsConfigDto) -> Result<Self> {
        let general = RoomPool::from_dtos("general", dto.general_basic_rooms, dto.general_temporary_rooms)?;
        let member = RoomPool::from_dtos("member", dto.member_basic_rooms, dto.member_temporary_rooms)?;
        RoomsConfig::new(general, member)
    }

    pub fn load(file_path: &str) -> Result<Self> {
        let dto: RoomsConfigDto = parse_json_file(file_path)?;
        let rooms = RoomsConfig::from_dto(dto)?;

        log::info!(
            "Loaded rooms config from '{}': general {} basic seats in {} layouts (+{} temporary layouts), member {} basic seats in {} layouts (+{} temporary layouts).",
            file_path,
            rooms.general.basic_capacity(),
            rooms.general.basic().len(),
            rooms.general.temporary().len(),
            rooms.member.basic_capacity(),
            rooms.member.basic().len(),
            rooms.member.temporary().len()
        );

        Ok(rooms)
    }

    pub fn pool(&self, class: OccupancyClass) -> &RoomPool {
        match class {
            OccupancyClass::General => &self.general,
            OccupancyClass::Member => &self.member,
        }
    }
}
