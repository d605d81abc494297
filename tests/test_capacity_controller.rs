
use layout_fixtures::{constants, pool, rooms, seats, snapshot};
use study_room_scheduler::api::max_seats_dto::SetDesiredMaxSeatsRequestDto;
use study_room_scheduler::domain::capacity::capacity_controller::{CapacityController, CapacityPair, RequestOutcome};
use study_room_scheduler::domain::capacity::capacity_policy::{MAX_CAPACITY, MAX_TEMPORARY_LAYOUTS, desired_capacity, plan_layouts};
use study_room_scheduler::domain::occupancy::occupancy_feed::OccupancySnapshot;
use study_room_scheduler::domain::pager::room_layout_pager::{RoomLayoutPager, activate_layouts};

/// Basic pool of 30 seats, temporary reserve of three 10-seat rooms.
fn controller() -> CapacityController {
    CapacityController::new(rooms(pool(&[15, 15], &[10, 10, 10]), pool(&[6], &[4])))
}

fn request(general: u32, member: u32) -> SetDesiredMaxSeatsRequestDto {
    SetDesiredMaxSeatsRequestDto { desired_max_seats: general, desired_member_max_seats: member }
}

#[test]
fn test_never_requests_below_basic_pool() {
    let controller = controller();
    for rate in [0.0, 0.1, 0.3, 0.5] {
        for occupants in 0..60 {
            let snapshot = snapshot(seats(1..=occupants), vec![], constants(30, 0, rate));
            let desired = controller.compute_desired(&snapshot).unwrap();
            assert!(desired.general >= 30, "rate {} occupants {} -> {}", rate, occupants, desired.general);
        }
    }

    let empty = snapshot(vec![], vec![], constants(30, 0, 0.1));
    assert_eq!(controller.compute_desired(&empty).unwrap().general, 30);
}

#[test]
fn test_desired_capacity_grows_monotonically() {
    let general = pool(&[15, 15], &[10, 10, 10]);
    for rate in [0.0, 0.1, 0.25, 0.6] {
        let mut previous = 0;
        for occupants in 0..300 {
            let desired = desired_capacity(&general, occupants, rate, false);
            assert!(desired >= previous);
            previous = desired;
        }
    }
}

#[test]
fn test_fixed_mode_uses_basic_pool() {
    let general = pool(&[8, 12], &[10]);
    assert_eq!(desired_capacity(&general, 19, 0.1, true), 20);
    assert_eq!(desired_capacity(&general, 500, 0.1, true), 20);
    assert_eq!(desired_capacity(&general, 19, 0.1, false), 22);

    let mut controller = controller();
    let fixed = constants(30, 0, 0.1).with_fixed_max_seats(true);
    assert_eq!(controller.reconcile(&snapshot(seats(1..=29), vec![], fixed)), None);

    let drifted = constants(36, 0, 0.1).with_fixed_max_seats(true);
    assert_eq!(controller.reconcile(&snapshot(seats(1..=29), vec![], drifted)), Some(request(30, 0)));
}

#[test]
fn test_scenario_grows_by_one_temporary_layout() {
    let mut controller = controller();
    let snapshot = snapshot(seats(1..=28), vec![], constants(30, 0, 0.1));

    assert_eq!(controller.reconcile(&snapshot), Some(request(32, 0)));
    assert_eq!(controller.desired(), Some(CapacityPair::new(32, 0)));

    let general = &controller.rooms().general;
    let plan = plan_layouts(general, 32);
    assert_eq!(plan.total_seats, 40);
    assert_eq!(plan.temporary_indices, vec![0]);

    let active = activate_layouts(general, 32);
    assert_eq!(active.len(), general.basic().len() + 1);
}

#[test]
fn test_temporary_pool_wraps_around() {
    let general = pool(&[5], &[3, 4]);
    let plan = plan_layouts(&general, 20);
    assert_eq!(plan.temporary_indices, vec![0, 1, 0, 1, 0]);
    assert_eq!(plan.total_seats, 22);
}

#[test]
fn test_empty_temporary_pool_stops_at_basic() {
    let general = pool(&[10], &[]);
    let plan = plan_layouts(&general, 50);
    assert!(plan.temporary_indices.is_empty());
    assert_eq!(plan.total_seats, 10);
    assert_eq!(desired_capacity(&general, 45, 0.1, false), 50);
}

#[test]
fn test_vacancy_rate_near_one_is_bounded() {
    let rooms = rooms(pool(&[10], &[1]), pool(&[4], &[]));
    let mut controller = CapacityController::new(rooms.clone());
    let snapshot = snapshot(seats(1..=5), vec![], constants(10, 4, 0.999_999_999));

    assert_eq!(controller.reconcile(&snapshot), Some(request(MAX_CAPACITY, 4)));

    let plan = plan_layouts(&rooms.general, MAX_CAPACITY);
    assert_eq!(plan.temporary_indices.len(), MAX_TEMPORARY_LAYOUTS);
    assert_eq!(plan.total_seats, 10 + MAX_TEMPORARY_LAYOUTS as u32);

    let mut pager = RoomLayoutPager::new(rooms);
    let view = pager.rebuild(&snapshot, controller.desired());
    assert_eq!(view.pages().len(), 1 + MAX_TEMPORARY_LAYOUTS);
}

#[test]
fn test_nothing_happens_before_constants_arrive() {
    let mut controller = controller();
    let snapshot = OccupancySnapshot { general_seats: seats(1..=50), ..Default::default() };
    assert_eq!(controller.reconcile(&snapshot), None);
    assert_eq!(controller.desired(), None);
    assert_eq!(controller.last_published(), None);
}

#[test]
fn test_no_request_when_published_capacity_matches() {
    let mut controller = controller();
    let snapshot = snapshot(seats(1..=10), vec![], constants(30, 0, 0.1));
    assert_eq!(controller.reconcile(&snapshot), None);
    assert_eq!(controller.last_published(), Some(CapacityPair::new(30, 0)));
}

#[test]
fn test_request_is_not_repeated_while_constants_lag() {
    let mut controller = controller();
    let lagging = snapshot(seats(1..=28), vec![], constants(30, 0, 0.1));

    assert!(controller.reconcile(&lagging).is_some());
    assert_eq!(controller.reconcile(&lagging), None);
    controller.record_outcome(RequestOutcome::Delivered(CapacityPair::new(32, 0)));
    assert_eq!(controller.reconcile(&lagging), None);

    let caught_up = snapshot(seats(1..=28), vec![], constants(32, 0, 0.1));
    assert_eq!(controller.reconcile(&caught_up), None);
}

#[test]
fn test_failed_request_is_retried_on_next_tick() {
    let mut controller = controller();
    let snapshot = snapshot(seats(1..=28), vec![], constants(30, 0, 0.1));

    assert_eq!(controller.reconcile(&snapshot), Some(request(32, 0)));
    controller.record_outcome(RequestOutcome::Failed(CapacityPair::new(32, 0)));
    assert_eq!(controller.last_published(), Some(CapacityPair::new(30, 0)));
    assert_eq!(controller.reconcile(&snapshot), Some(request(32, 0)));
}

#[test]
fn test_superseded_failure_is_ignored() {
    let mut controller = controller();
    assert!(controller.reconcile(&snapshot(seats(1..=28), vec![], constants(30, 0, 0.1))).is_some());
    assert_eq!(controller.reconcile(&snapshot(seats(1..=40), vec![], constants(30, 0, 0.1))), Some(request(45, 0)));

    controller.record_outcome(RequestOutcome::Failed(CapacityPair::new(32, 0)));
    assert_eq!(controller.last_published(), Some(CapacityPair::new(45, 0)));
}

#[test]
fn test_operator_change_is_corrected() {
    let mut controller = controller();
    assert_eq!(controller.reconcile(&snapshot(seats(1..=5), vec![], constants(30, 0, 0.1))), None);

    // someone published 50 by hand
    assert_eq!(controller.reconcile(&snapshot(seats(1..=5), vec![], constants(50, 0, 0.1))), Some(request(30, 0)));
}

#[test]
fn test_member_capacity_held_while_membership_disabled() {
    let controller = controller();
    let disabled = snapshot(seats(1..=3), seats(1..=40), constants(30, 17, 0.1));
    assert_eq!(controller.compute_desired(&disabled), Some(CapacityPair::new(30, 17)));

    let enabled = snapshot(seats(1..=3), seats(1..=9), constants(30, 17, 0.1).with_membership(true));
    assert_eq!(controller.compute_desired(&enabled), Some(CapacityPair::new(30, 10)));

    let quiet = snapshot(seats(1..=3), vec![], constants(30, 17, 0.1).with_membership(true));
    assert_eq!(controller.compute_desired(&quiet), Some(CapacityPair::new(30, 6)));
}

#[test]
fn test_member_change_alone_triggers_request() {
    let mut controller = controller();
    let snapshot = snapshot(seats(1..=3), seats(1..=9), constants(30, 6, 0.1).with_membership(true));
    assert_eq!(controller.reconcile(&snapshot), Some(request(30, 10)));
}
