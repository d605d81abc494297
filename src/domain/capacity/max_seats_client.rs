use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};

use crate::api::max_seats_dto::{SetDesiredMaxSeatsRequestDto, SetDesiredMaxSeatsResponseDto};
use crate::api::monitor_config_dto::MaxSeatsEndpointDto;
use crate::domain::capacity::capacity_requester::CapacityRequester;
use crate::error::{Error, Result};

const API_KEY_HEADER: &str = "x-api-key";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the set-desired-max-seats endpoint.
#[derive(Debug, Clone)]
pub struct MaxSeatsClient {
    client: reqwest::Client,
    url: String,
}

impl MaxSeatsClient {
    pub fn new(url: impl Into<String>, api_key: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(api_key).map_err(|e| Error::ConfigurationError(format!("API key is not a valid header value: {}", e)))?;
        headers.insert(API_KEY_HEADER, key);

        let client = reqwest::Client::builder().default_headers(headers).timeout(REQUEST_TIMEOUT).build()?;

        Ok(MaxSeatsClient { client, url: url.into() })
    }

    /// Reads the API key from the environment variable named in the config.
    pub fn from_config(dto: &MaxSeatsEndpointDto) -> Result<Self> {
        let api_key = std::env::var(&dto.api_key_env)
            .map_err(|_| Error::ConfigurationError(format!("environment variable '{}' with the capacity service API key is not set", dto.api_key_env)))?;
        MaxSeatsClient::new(dto.url.clone(), &api_key)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CapacityRequester for MaxSeatsClient {
    async fn request_max_seats(&self, request: SetDesiredMaxSeatsRequestDto) -> Result<SetDesiredMaxSeatsResponseDto> {
        log::debug!("POST {} {:?}", self.url, request);

        let response = self.client.post(&self.url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RequestRejected(format!("HTTP {}: {}", status, body)));
        }

        let body: SetDesiredMaxSeatsResponseDto = response.json().await?;
        if !body.is_ok() {
            return Err(Error::RequestRejected(format!("result '{}': {}", body.result, body.message)));
        }

        Ok(body)
    }
}
