use serde::{Deserialize, Serialize};

use crate::api::room_layout_dto::RoomLayoutDto;

#[derive(Debug, Deserialize, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomsConfigDto {
    pub general_basic_rooms: Vec<RoomLayoutDto>,
    #[serde(default)]
    pub general_temporary_rooms: Vec<RoomLayoutDto>,
    #[serde(default)]
    pub member_basic_rooms: Vec<RoomLayoutDto>,
    #[serde(default)]
    pub member_temporary_rooms: Vec<RoomLayoutDto>,
}
