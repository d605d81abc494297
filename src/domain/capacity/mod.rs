pub mod capacity_controller;
pub mod capacity_policy;
pub mod capacity_requester;
pub mod max_seats_client;
