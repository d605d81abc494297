use serde::{Deserialize, Serialize};

pub const DEFAULT_API_KEY_ENV: &str = "STUDY_ROOM_API_KEY";

#[derive(Debug, Deserialize, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorConfigDto {
    pub rooms_config_path: String,
    #[serde(default)]
    pub time_table_path: Option<String>,
    pub max_seats_endpoint: MaxSeatsEndpointDto,
    #[serde(default)]
    pub feed_path: Option<String>,
    #[serde(default)]
    pub intervals: IntervalsDto,
}

#[derive(Debug, Deserialize, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxSeatsEndpointDto {
    pub url: String,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

/// Polling periods in milliseconds.
#[derive(Debug, Deserialize, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntervalsDto {
    pub timer_ms: u64,
    pub reconcile_ms: u64,
    pub paging_ms: u64,
    pub feed_ms: u64,
}

impl Default for IntervalsDto {
    fn default() -> Self {
        // 30 fps countdown, 5 s reconciliation, 8 s paging
        IntervalsDto { timer_ms: 33, reconcile_ms: 5_000, paging_ms: 8_000, feed_ms: 5_000 }
    }
}
