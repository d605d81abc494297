/// `tracing` target for structured capacity events, kept apart from the plain log.
pub const ANALYTICS_TARGET: &str = "capacity_analytics";
