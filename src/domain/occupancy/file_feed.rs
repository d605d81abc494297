use std::time::Duration;

use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

use crate::api::occupancy_dto::FeedSnapshotDto;
use crate::domain::occupancy::occupancy_feed::OccupancyFeed;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

/// Feeds occupancy from a JSON document on disk, re-reading it on every tick.
///
/// Stands in for a realtime subscription: whatever process maintains the file
/// is the source of truth, and each read replaces the published snapshot.
#[derive(Debug, Clone)]
pub struct FileFeed {
    path: String,
    feed: OccupancyFeed,
    period: Duration,
}

impl FileFeed {
    pub fn new(path: impl Into<String>, feed: OccupancyFeed, period: Duration) -> Self {
        FileFeed { path: path.into(), feed, period }
    }

    pub fn poll_once(&self) -> Result<()> {
        let dto: FeedSnapshotDto = parse_json_file(&self.path)?;
        log::debug!(
            "Read feed '{}': {} general seats, {} member seats, constants {}.",
            self.path,
            dto.general_seats.len(),
            dto.member_seats.len(),
            if dto.constants.is_some() { "present" } else { "absent" }
        );
        self.feed.publish_dto(dto);
        Ok(())
    }

    /// Polls until `token` is cancelled. Read errors are logged and retried on the next tick.
    pub async fn run(self, token: CancellationToken) {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        log::info!("Polling occupancy feed '{}' every {:?}.", self.path, self.period);

        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    log::info!("Occupancy feed '{}' stopped.", self.path);
                    break;
                }
                _ = ticker.tick() => {
                    if let Err(e) = self.poll_once() {
                        log::warn!("Failed to read occupancy feed '{}': {}", self.path, e);
                    }
                }
            }
        }
    }
}
