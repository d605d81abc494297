use serde::{Deserialize, Serialize};

/// Static description of one room as it is authored in the rooms config.
///
/// Field names follow the layout files of the rendering layer (snake_case),
/// so the same JSON can be shared between both sides.
#[derive(Debug, Deserialize, Clone, Serialize, PartialEq)]
pub struct RoomLayoutDto {
    #[serde(default)]
    pub floor_image: String,
    pub font_size_ratio: f64,
    pub room_shape: ShapeDto,
    pub seat_shape: ShapeDto,
    #[serde(default)]
    pub partition_shapes: Vec<PartitionShapeDto>,
    pub seats: Vec<SeatPositionDto>,
    #[serde(default)]
    pub partitions: Vec<PartitionDto>,
}

#[derive(Debug, Deserialize, Clone, Copy, Serialize, PartialEq)]
pub struct ShapeDto {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Deserialize, Clone, Serialize, PartialEq)]
pub struct PartitionShapeDto {
    pub name: String,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Deserialize, Clone, Copy, Serialize, PartialEq)]
pub struct SeatPositionDto {
    /// Layout-local id, 1-based.
    pub id: u32,
    pub x: f64,
    pub y: f64,
    /// Clockwise rotation in degrees.
    #[serde(default)]
    pub rotate: f64,
}

#[derive(Debug, Deserialize, Clone, Serialize, PartialEq)]
pub struct PartitionDto {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub shape_type: String,
    #[serde(default)]
    pub rotate: f64,
}
