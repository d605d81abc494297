use std::sync::Arc;

use crate::api::max_seats_dto::SetDesiredMaxSeatsRequestDto;
use crate::domain::capacity::capacity_policy::{desired_capacity, plan_layouts};
use crate::domain::occupancy::occupancy_feed::OccupancySnapshot;
use crate::domain::occupancy::seat::OccupancyClass;
use crate::domain::occupancy::system_constants::SystemConstants;
use crate::domain::room::rooms_config::RoomsConfig;
use crate::domain::utils::statistics::ANALYTICS_TARGET;

/// General and member capacity, always handled together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityPair {
    pub general: u32,
    pub member: u32,
}

impl CapacityPair {
    pub fn new(general: u32, member: u32) -> Self {
        CapacityPair { general, member }
    }

    /// The capacity the backend currently serves, as carried by the constants.
    pub fn observed(constants: &SystemConstants) -> Self {
        CapacityPair { general: constants.max_seats, member: constants.member_max_seats }
    }

    pub fn to_request(self) -> SetDesiredMaxSeatsRequestDto {
        SetDesiredMaxSeatsRequestDto { desired_max_seats: self.general, desired_member_max_seats: self.member }
    }
}

impl From<SetDesiredMaxSeatsRequestDto> for CapacityPair {
    fn from(request: SetDesiredMaxSeatsRequestDto) -> Self {
        CapacityPair { general: request.desired_max_seats, member: request.desired_member_max_seats }
    }
}

/// Result of a dispatched capacity-change request, reported back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Delivered(CapacityPair),
    Failed(CapacityPair),
}

/// Decides on every reconciliation tick whether the published capacity has to change.
///
/// The controller is the only writer of the last published capacity. That value
/// follows the constants whenever they change, and is set to the requested
/// capacity as soon as a request is built, so a request still in flight is not
/// sent again while the constants lag behind.
#[derive(Debug)]
pub struct CapacityController {
    rooms: Arc<RoomsConfig>,
    last_observed: Option<CapacityPair>,
    last_published: Option<CapacityPair>,
    desired: Option<CapacityPair>,
}

impl CapacityController {
    pub fn new(rooms: Arc<RoomsConfig>) -> Self {
        CapacityController { rooms, last_observed: None, last_published: None, desired: None }
    }

    pub fn rooms(&self) -> &Arc<RoomsConfig> {
        &self.rooms
    }

    pub fn last_published(&self) -> Option<CapacityPair> {
        self.last_published
    }

    /// Desired capacity computed by the most recent tick that saw constants.
    pub fn desired(&self) -> Option<CapacityPair> {
        self.desired
    }

    /// Desired capacity for `snapshot`, or `None` before any constants arrived.
    ///
    /// The member value is held at the observed member capacity while
    /// membership is disabled.
    pub fn compute_desired(&self, snapshot: &OccupancySnapshot) -> Option<CapacityPair> {
        let constants = snapshot.constants.as_ref()?;

        let general = desired_capacity(
            &self.rooms.general,
            snapshot.occupant_count(OccupancyClass::General),
            constants.min_vacancy_rate,
            constants.fixed_max_seats_enabled,
        );

        let member = if constants.youtube_membership_enabled {
            desired_capacity(
                &self.rooms.member,
                snapshot.occupant_count(OccupancyClass::Member),
                constants.min_vacancy_rate,
                constants.fixed_max_seats_enabled,
            )
        } else {
            constants.member_max_seats
        };

        Some(CapacityPair { general, member })
    }

    /// Runs one reconciliation and returns the request to dispatch, if any.
    pub fn reconcile(&mut self, snapshot: &OccupancySnapshot) -> Option<SetDesiredMaxSeatsRequestDto> {
        let Some(constants) = snapshot.constants.as_ref() else {
            log::debug!("No system constants observed yet, skipping reconciliation.");
            return None;
        };

        let observed = CapacityPair::observed(constants);
        if self.last_observed != Some(observed) {
            self.last_observed = Some(observed);
            self.last_published = Some(observed);
        }

        let desired = self.compute_desired(snapshot)?;
        self.desired = Some(desired);

        if self.last_published == Some(desired) {
            return None;
        }

        let request = desired.to_request();
        self.log_request(snapshot, constants, desired);
        self.last_published = Some(desired);

        Some(request)
    }

    /// Feeds back the result of a dispatched request.
    ///
    /// A failure makes the last observed capacity current again, so the next
    /// tick asks once more.
    pub fn record_outcome(&mut self, outcome: RequestOutcome) {
        match outcome {
            RequestOutcome::Delivered(capacity) => {
                log::debug!("Capacity service accepted general {} / member {}.", capacity.general, capacity.member);
            }
            RequestOutcome::Failed(capacity) => {
                if self.last_published == Some(capacity) {
                    self.last_published = self.last_observed;
                    log::warn!(
                        "Request for general {} / member {} failed. It will be retried on the next reconciliation.",
                        capacity.general,
                        capacity.member
                    );
                } else {
                    log::debug!("Ignoring failure of superseded request for general {} / member {}.", capacity.general, capacity.member);
                }
            }
        }
    }

    fn log_request(&self, snapshot: &OccupancySnapshot, constants: &SystemConstants, desired: CapacityPair) {
        let general_plan = plan_layouts(&self.rooms.general, desired.general);

        log::info!(
            "Requesting capacity change: general {} -> {}, member {} -> {}.",
            constants.max_seats,
            desired.general,
            constants.member_max_seats,
            desired.member
        );

        tracing::info!(
            target: ANALYTICS_TARGET,
            LogDescription = "Capacity change requested",
            GeneralOccupants = snapshot.occupant_count(OccupancyClass::General),
            MemberOccupants = snapshot.occupant_count(OccupancyClass::Member),
            MinVacancyRate = constants.min_vacancy_rate,
            FixedMaxSeats = constants.fixed_max_seats_enabled,
            MembershipEnabled = constants.youtube_membership_enabled,
            PublishedGeneral = constants.max_seats,
            PublishedMember = constants.member_max_seats,
            DesiredGeneral = desired.general,
            DesiredMember = desired.member,
            GeneralLayoutSeats = general_plan.total_seats,
            GeneralLayouts = general_plan.layout_count(&self.rooms.general),
        );
    }
}
