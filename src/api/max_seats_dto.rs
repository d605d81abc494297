use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SetDesiredMaxSeatsRequestDto {
    pub desired_max_seats: u32,
    pub desired_member_max_seats: u32,
}

#[derive(Debug, Deserialize, Clone, Serialize, PartialEq, Eq)]
pub struct SetDesiredMaxSeatsResponseDto {
    pub result: String,
    #[serde(default)]
    pub message: String,
}

impl SetDesiredMaxSeatsResponseDto {
    pub const RESULT_OK: &'static str = "ok";

    pub fn is_ok(&self) -> bool {
        self.result == Self::RESULT_OK
    }
}
