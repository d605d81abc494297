use serde::{Deserialize, Serialize};

/// One occupied seat as delivered by the realtime feed.
///
/// The document store writes kebab-case keys (`seat-id`), the HTTP API uses
/// snake_case; both are accepted.
#[derive(Debug, Deserialize, Clone, Serialize, PartialEq)]
pub struct SeatDto {
    #[serde(alias = "seat-id")]
    pub seat_id: u32,
    #[serde(alias = "user-id")]
    pub user_id: String,
    #[serde(default, alias = "user-display-name")]
    pub user_display_name: String,
    #[serde(default, alias = "work-name")]
    pub work_name: String,
    #[serde(default, alias = "break-work-name")]
    pub break_work_name: String,
    #[serde(default = "default_seat_state")]
    pub state: String,
}

fn default_seat_state() -> String {
    "work".to_string()
}

#[derive(Debug, Deserialize, Clone, Serialize, PartialEq)]
pub struct SystemConstantsDto {
    #[serde(alias = "max-seats")]
    pub max_seats: u32,
    #[serde(default, alias = "member-max-seats")]
    pub member_max_seats: u32,
    #[serde(alias = "min-vacancy-rate")]
    pub min_vacancy_rate: f64,
    #[serde(default, alias = "youtube-membership-enabled")]
    pub youtube_membership_enabled: bool,
    #[serde(default, alias = "fixed-max-seats-enabled")]
    pub fixed_max_seats_enabled: bool,
}

/// Whole-collection snapshot of the feed, as written to the file polled by `FileFeed`.
#[derive(Debug, Deserialize, Clone, Serialize, Default)]
pub struct FeedSnapshotDto {
    #[serde(default)]
    pub general_seats: Vec<SeatDto>,
    #[serde(default)]
    pub member_seats: Vec<SeatDto>,
    #[serde(default)]
    pub constants: Option<SystemConstantsDto>,
}
