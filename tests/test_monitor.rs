
use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use layout_fixtures::{RecordingRequester, constants, pool, rooms, seats};
use study_room_scheduler::api::max_seats_dto::SetDesiredMaxSeatsRequestDto;
use study_room_scheduler::domain::clock::clock_mock::MockClock;
use study_room_scheduler::domain::monitor::lifecycle::LifecycleState;
use study_room_scheduler::domain::monitor::monitor_core::{MonitorCore, MonitorIntervals};
use study_room_scheduler::domain::monitor::study_room_monitor::StudyRoomMonitor;
use study_room_scheduler::domain::occupancy::occupancy_feed::OccupancyFeed;
use study_room_scheduler::domain::occupancy::seat::OccupancyClass;
use study_room_scheduler::domain::pager::layout_page::PagerView;
use study_room_scheduler::domain::time_table::time_section::SectionType;
use study_room_scheduler::domain::time_table::time_table::TimeTable;
use study_room_scheduler::error::Error;

const WAIT: Duration = Duration::from_secs(2);

fn fast_intervals() -> MonitorIntervals {
    MonitorIntervals { timer: Duration::from_millis(5), reconcile: Duration::from_millis(10), paging: Duration::from_millis(15) }
}

#[tokio::test]
async fn test_core_ticks() {
    let clock = Arc::new(MockClock::at_hms(10, 20, 30).unwrap());
    let feed = OccupancyFeed::new();
    let (requester, mut requests) = RecordingRequester::new();
    let (mut core, handles) = MonitorCore::new(TimeTable::default_table(), clock, feed.clone(), rooms(pool(&[15, 15], &[10, 10, 10]), pool(&[], &[])), requester);

    core.tick_timer();
    let status = handles.timer_rx.borrow().clone().unwrap();
    assert_eq!(status.section_type, SectionType::Study);
    assert_eq!(status.countdown(), "19:30");

    core.tick_reconcile();
    assert_eq!(*handles.pages_rx.borrow(), PagerView::NotReady);
    assert!(requests.try_recv().is_err());

    feed.publish_seats(OccupancyClass::General, seats(1..=28));
    feed.publish_constants(constants(30, 0, 0.1));
    core.tick_reconcile();

    let request = timeout(WAIT, requests.recv()).await.unwrap().unwrap();
    assert_eq!(request, SetDesiredMaxSeatsRequestDto { desired_max_seats: 32, desired_member_max_seats: 0 });

    {
        let view = handles.pages_rx.borrow();
        assert_eq!(view.pages().len(), 3);
        assert_eq!(view.current_page().map(|p| p.first_seat_id), Some(1));
    }

    core.tick_paging();
    assert_eq!(handles.pages_rx.borrow().current_page().map(|p| p.first_seat_id), Some(16));

    handles.navigation_tx.send_replace(Some(3));
    core.tick_paging();
    assert_eq!(handles.pages_rx.borrow().current_page().map(|p| p.first_seat_id), Some(31));

    // delivered and not yet reflected in the constants: no second request
    tokio::task::yield_now().await;
    core.tick_reconcile();
    tokio::task::yield_now().await;
    assert!(requests.try_recv().is_err());
    assert_eq!(core.controller().last_published().map(|c| c.general), Some(32));
}

#[tokio::test]
async fn test_core_retries_after_failed_request() {
    let clock = Arc::new(MockClock::at_hms(8, 0, 0).unwrap());
    let feed = OccupancyFeed::new();
    let (requester, mut requests) = RecordingRequester::new();
    requester.set_failing(true);
    let (mut core, _handles) = MonitorCore::new(
        TimeTable::default_table(),
        clock,
        feed.clone(),
        rooms(pool(&[15, 15], &[10, 10, 10]), pool(&[], &[])),
        requester.clone(),
    );

    feed.publish_seats(OccupancyClass::General, seats(1..=28));
    feed.publish_constants(constants(30, 0, 0.1));

    core.tick_reconcile();
    timeout(WAIT, requests.recv()).await.unwrap().unwrap();
    tokio::task::yield_now().await;

    requester.set_failing(false);
    core.tick_reconcile();
    let retried = timeout(WAIT, requests.recv()).await.unwrap().unwrap();
    assert_eq!(retried.desired_max_seats, 32);
}

fn monitor() -> (StudyRoomMonitor, OccupancyFeed) {
    let feed = OccupancyFeed::new();
    let (requester, _requests) = RecordingRequester::new();
    let monitor = StudyRoomMonitor::new(
        TimeTable::default_table(),
        Arc::new(MockClock::at_hms(23, 45, 0).unwrap()),
        feed.clone(),
        rooms(pool(&[2], &[2]), pool(&[], &[])),
        requester,
        fast_intervals(),
    );
    (monitor, feed)
}

#[tokio::test]
async fn test_monitor_lifecycle() {
    let (mut monitor, _feed) = monitor();
    assert_eq!(monitor.state(), LifecycleState::Uninitialized);

    monitor.start().unwrap();
    assert_eq!(monitor.state(), LifecycleState::Polling);
    assert!(matches!(monitor.start(), Err(Error::LifecycleError { from: LifecycleState::Polling, .. })));
    assert_eq!(monitor.state(), LifecycleState::Polling);

    // a rejected start leaves the running task alone
    let mut timer = monitor.subscribe_timer();
    for _ in 0..2 {
        timeout(WAIT, timer.changed()).await.unwrap().unwrap();
        assert_eq!(timer.borrow_and_update().as_ref().map(|s| s.section_id), Some(30));
    }

    monitor.shutdown().await.unwrap();
    assert_eq!(monitor.state(), LifecycleState::TornDown);

    // the task is gone, so the channel closes instead of ticking on
    timer.borrow_and_update();
    assert!(timer.changed().await.is_err());

    assert!(matches!(monitor.start(), Err(Error::LifecycleError { from: LifecycleState::TornDown, to: LifecycleState::Polling })));
    assert!(monitor.shutdown().await.is_err());
}

#[tokio::test]
async fn test_shutdown_without_start() {
    let (mut monitor, _feed) = monitor();
    let token = monitor.child_token();

    monitor.shutdown().await.unwrap();
    assert_eq!(monitor.state(), LifecycleState::TornDown);
    assert!(token.is_cancelled());
}

#[tokio::test]
async fn test_monitor_pages_and_navigation() {
    let (mut monitor, feed) = monitor();
    feed.publish_seats(OccupancyClass::General, seats([1, 5]));
    feed.publish_constants(constants(10, 0, 0.5));

    let mut pages = monitor.subscribe_pages();
    monitor.start().unwrap();

    let ready = timeout(WAIT, pages.wait_for(|view| view.pages().len() == 2)).await.unwrap().unwrap().clone();
    assert_eq!(ready.pages()[0].used_seats.len(), 1);

    monitor.navigate(Some(2));
    let navigated = timeout(WAIT, pages.wait_for(|view| matches!(view, PagerView::Ready { current_index: 1, .. }))).await.unwrap().is_ok();
    assert!(navigated);

    monitor.shutdown().await.unwrap();
}
