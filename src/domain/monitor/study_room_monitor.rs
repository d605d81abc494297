use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::api::monitor_config_dto::MonitorConfigDto;
use crate::domain::capacity::capacity_requester::CapacityRequester;
use crate::domain::capacity::max_seats_client::MaxSeatsClient;
use crate::domain::clock::clock::{SharedClock, SystemClock};
use crate::domain::monitor::lifecycle::{Lifecycle, LifecycleState};
use crate::domain::monitor::monitor_core::{MonitorCore, MonitorHandles, MonitorIntervals};
use crate::domain::occupancy::occupancy_feed::OccupancyFeed;
use crate::domain::pager::layout_page::PagerView;
use crate::domain::room::rooms_config::RoomsConfig;
use crate::domain::time_table::time_table::TimeTable;
use crate::domain::time_table::timer_status::TimerStatus;
use crate::error::{Error, Result};

/// Owns the monitor task and its lifecycle.
///
/// Consumers read pages and the countdown through watch channels and steer
/// paging with [`StudyRoomMonitor::navigate`]. Dropping the monitor cancels
/// the task as well.
#[derive(Debug)]
pub struct StudyRoomMonitor {
    lifecycle: Lifecycle,
    intervals: MonitorIntervals,
    feed: OccupancyFeed,
    core: Option<MonitorCore>,
    handles: MonitorHandles,
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl StudyRoomMonitor {
    pub fn new(
        table: TimeTable,
        clock: SharedClock,
        feed: OccupancyFeed,
        rooms: Arc<RoomsConfig>,
        requester: Arc<dyn CapacityRequester>,
        intervals: MonitorIntervals,
    ) -> Self {
        let (core, handles) = MonitorCore::new(table, clock, feed.clone(), rooms, requester);

        StudyRoomMonitor {
            lifecycle: Lifecycle::new(),
            intervals,
            feed,
            core: Some(core),
            handles,
            token: CancellationToken::new(),
            task: None,
        }
    }

    /// Loads rooms, time table and endpoint settings. Any problem is a configuration error.
    pub fn from_config(config: &MonitorConfigDto) -> Result<Self> {
        let rooms = RoomsConfig::load(&config.rooms_config_path)?;
        let table = match &config.time_table_path {
            Some(path) => TimeTable::load(path)?,
            None => TimeTable::default_table(),
        };
        let client = MaxSeatsClient::from_config(&config.max_seats_endpoint)?;
        let intervals = MonitorIntervals::try_from(&config.intervals)?;

        log::info!("Capacity changes go to {}.", client.url());

        Ok(StudyRoomMonitor::new(table, SystemClock::shared(), OccupancyFeed::new(), Arc::new(rooms), Arc::new(client), intervals))
    }

    pub fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    /// Handle for whatever pushes occupancy into the monitor.
    pub fn feed(&self) -> OccupancyFeed {
        self.feed.clone()
    }

    /// Token that is cancelled when the monitor shuts down, for tasks that should stop with it.
    pub fn child_token(&self) -> CancellationToken {
        self.token.child_token()
    }

    pub fn feed_period(config: &MonitorConfigDto) -> Result<Duration> {
        match config.intervals.feed_ms {
            0 => Err(Error::ConfigurationError("interval 'feedMs' must be positive".to_string())),
            ms => Ok(Duration::from_millis(ms)),
        }
    }

    pub fn subscribe_pages(&self) -> watch::Receiver<PagerView> {
        self.handles.pages_rx.clone()
    }

    pub fn subscribe_timer(&self) -> watch::Receiver<Option<TimerStatus>> {
        self.handles.timer_rx.clone()
    }

    /// Pins paging to `page` (1-based) or, with `None`, returns to timed paging.
    /// Takes effect on the next paging tick.
    pub fn navigate(&self, page: Option<usize>) {
        self.handles.navigation_tx.send_replace(page);
    }

    /// Spawns the monitor task. Must be called from within a tokio runtime.
    pub fn start(&mut self) -> Result<()> {
        let from = self.lifecycle.state();
        self.lifecycle.start()?;
        let core = self.core.take().ok_or(Error::LifecycleError { from, to: LifecycleState::Polling })?;

        self.task = Some(tokio::spawn(core.run(self.intervals, self.token.clone())));
        Ok(())
    }

    /// Cancels the timers and waits for the task to finish. No tick fires after this returns.
    pub async fn shutdown(&mut self) -> Result<()> {
        self.lifecycle.tear_down()?;
        self.token.cancel();
        self.core = None;

        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                log::error!("Monitor task ended abnormally: {}", e);
            }
        }

        log::info!("Monitor torn down.");
        Ok(())
    }
}

impl Drop for StudyRoomMonitor {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
