use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, MissedTickBehavior, interval, interval_at};
use tokio_util::sync::CancellationToken;

use crate::api::max_seats_dto::SetDesiredMaxSeatsRequestDto;
use crate::api::monitor_config_dto::IntervalsDto;
use crate::domain::capacity::capacity_controller::{CapacityController, CapacityPair, RequestOutcome};
use crate::domain::capacity::capacity_requester::CapacityRequester;
use crate::domain::clock::clock::SharedClock;
use crate::domain::occupancy::occupancy_feed::OccupancyFeed;
use crate::domain::pager::layout_page::PagerView;
use crate::domain::pager::room_layout_pager::RoomLayoutPager;
use crate::domain::room::rooms_config::RoomsConfig;
use crate::domain::time_table::time_table::TimeTable;
use crate::domain::time_table::timer_status::TimerStatus;
use crate::error::{Error, Result};

/// Periods of the three monitor timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorIntervals {
    pub timer: Duration,
    pub reconcile: Duration,
    pub paging: Duration,
}

impl Default for MonitorIntervals {
    fn default() -> Self {
        MonitorIntervals { timer: Duration::from_millis(33), reconcile: Duration::from_secs(5), paging: Duration::from_secs(8) }
    }
}

impl TryFrom<&IntervalsDto> for MonitorIntervals {
    type Error = Error;

    fn try_from(dto: &IntervalsDto) -> Result<Self> {
        let period = |name: &str, ms: u64| {
            if ms == 0 {
                Err(Error::ConfigurationError(format!("interval '{}' must be positive", name)))
            } else {
                Ok(Duration::from_millis(ms))
            }
        };

        Ok(MonitorIntervals {
            timer: period("timerMs", dto.timer_ms)?,
            reconcile: period("reconcileMs", dto.reconcile_ms)?,
            paging: period("pagingMs", dto.paging_ms)?,
        })
    }
}

/// Ends of the monitor's channels that stay with the caller.
#[derive(Debug)]
pub struct MonitorHandles {
    pub navigation_tx: watch::Sender<Option<usize>>,
    pub pages_rx: watch::Receiver<PagerView>,
    pub timer_rx: watch::Receiver<Option<TimerStatus>>,
}

/// State touched by the monitor's ticks.
///
/// Every tick runs to completion on `&mut self` against a fresh occupancy
/// snapshot. Capacity requests are spawned and report back through a channel
/// that is drained at the start of the next reconciliation.
#[derive(Debug)]
pub struct MonitorCore {
    table: TimeTable,
    clock: SharedClock,
    feed: OccupancyFeed,
    controller: CapacityController,
    pager: RoomLayoutPager,
    requester: Arc<dyn CapacityRequester>,
    outcome_tx: mpsc::UnboundedSender<RequestOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<RequestOutcome>,
    navigation_rx: watch::Receiver<Option<usize>>,
    pages_tx: watch::Sender<PagerView>,
    timer_tx: watch::Sender<Option<TimerStatus>>,
}

impl MonitorCore {
    pub fn new(
        table: TimeTable,
        clock: SharedClock,
        feed: OccupancyFeed,
        rooms: Arc<RoomsConfig>,
        requester: Arc<dyn CapacityRequester>,
    ) -> (Self, MonitorHandles) {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let (navigation_tx, navigation_rx) = watch::channel(None);
        let (pages_tx, pages_rx) = watch::channel(PagerView::NotReady);
        let (timer_tx, timer_rx) = watch::channel(None);

        let core = MonitorCore {
            table,
            clock,
            feed,
            controller: CapacityController::new(Arc::clone(&rooms)),
            pager: RoomLayoutPager::new(rooms),
            requester,
            outcome_tx,
            outcome_rx,
            navigation_rx,
            pages_tx,
            timer_tx,
        };

        (core, MonitorHandles { navigation_tx, pages_rx, timer_rx })
    }

    pub fn controller(&self) -> &CapacityController {
        &self.controller
    }

    pub fn tick_timer(&mut self) {
        let status = TimerStatus::at(&self.table, self.clock.now());
        self.timer_tx.send_replace(Some(status));
    }

    /// Reconciles capacity and rebuilds the pages. Must run inside a tokio runtime.
    pub fn tick_reconcile(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.controller.record_outcome(outcome);
        }

        let snapshot = self.feed.snapshot();
        if let Some(request) = self.controller.reconcile(&snapshot) {
            self.dispatch(request);
        }

        let view = self.pager.rebuild(&snapshot, self.controller.desired());
        self.pages_tx.send_replace(view);
    }

    pub fn tick_paging(&mut self) {
        let requested_page = *self.navigation_rx.borrow();
        let view = self.pager.advance(requested_page);
        self.pages_tx.send_replace(view);
    }

    fn dispatch(&self, request: SetDesiredMaxSeatsRequestDto) {
        let requester = Arc::clone(&self.requester);
        let outcome_tx = self.outcome_tx.clone();

        tokio::spawn(async move {
            let capacity = CapacityPair::from(request);
            let outcome = match requester.request_max_seats(request).await {
                Ok(response) => {
                    log::info!("Capacity service answered '{}' {}", response.result, response.message);
                    RequestOutcome::Delivered(capacity)
                }
                Err(e) => {
                    log::error!("Capacity-change request failed: {}", e);
                    RequestOutcome::Failed(capacity)
                }
            };
            // the receiver is gone once the monitor is torn down
            let _ = outcome_tx.send(outcome);
        });
    }

    /// Drives the three timers until `token` is cancelled.
    ///
    /// Reconciliation and the countdown start right away; the first page stays
    /// up for a whole paging period.
    pub async fn run(mut self, intervals: MonitorIntervals, token: CancellationToken) {
        let mut reconcile = interval(intervals.reconcile);
        let mut timer = interval(intervals.timer);
        let mut paging = interval_at(Instant::now() + intervals.paging, intervals.paging);
        for ticker in [&mut reconcile, &mut timer, &mut paging] {
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        }

        log::info!(
            "Monitor polling: countdown every {:?}, reconciliation every {:?}, paging every {:?}.",
            intervals.timer,
            intervals.reconcile,
            intervals.paging
        );

        loop {
            tokio::select! {
                biased;

                _ = token.cancelled() => {
                    log::info!("Monitor received shutdown signal.");
                    break;
                }
                _ = reconcile.tick() => self.tick_reconcile(),
                _ = paging.tick() => self.tick_paging(),
                _ = timer.tick() => self.tick_timer(),
            }
        }
    }
}
