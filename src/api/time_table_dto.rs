use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeTableDto {
    pub sections: Vec<TimeSectionDto>,
}

#[derive(Debug, Deserialize, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSectionDto {
    pub starts: TimeOfDayDto,
    pub ends: TimeOfDayDto,
    /// `"study"` or `"break"`.
    pub section_type: String,
    #[serde(default)]
    pub section_id: u32,
    #[serde(default)]
    pub part_type: String,
}

#[derive(Debug, Deserialize, Clone, Copy, Serialize)]
pub struct TimeOfDayDto {
    pub h: u32,
    pub m: u32,
}
