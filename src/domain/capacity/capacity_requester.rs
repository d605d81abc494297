use async_trait::async_trait;
use std::fmt::Debug;

use crate::api::max_seats_dto::{SetDesiredMaxSeatsRequestDto, SetDesiredMaxSeatsResponseDto};
use crate::error::Result;

/// Delivers capacity-change requests to the external capacity service.
///
/// An `Err` covers both transport failures and responses that were not `ok`.
#[async_trait]
pub trait CapacityRequester: Debug + Send + Sync {
    async fn request_max_seats(&self, request: SetDesiredMaxSeatsRequestDto) -> Result<SetDesiredMaxSeatsResponseDto>;
}
