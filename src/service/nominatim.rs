use crate::{model::Address, model::Coordinate, Error, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;
use url::Url;

/// Administrative granularity, 10 is roughly city level
pub const ZOOM: u8 = 10;

const USER_AGENT: &str = concat!("vibecheck-locations-api/", env!("CARGO_PKG_VERSION"));

#[derive(Deserialize)]
struct ReverseResponse {
    address: Option<Address>,
    error: Option<String>,
}

#[async_trait]
pub trait ReverseGeocodeService: Send + Sync {
    /// `Ok(None)` means the service answered but has no address for this point
    async fn reverse(&self, coordinate: &Coordinate, zoom: u8) -> Result<Option<Address>>;
}

pub struct NominatimClient {
    client: reqwest::Client,
    reverse_url: Url,
}

impl NominatimClient {
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(NominatimClient {
            client,
            reverse_url: base_url.join("reverse")?,
        })
    }
}

#[async_trait]
impl ReverseGeocodeService for NominatimClient {
    async fn reverse(&self, coordinate: &Coordinate, zoom: u8) -> Result<Option<Address>> {
        info!(
            url = self.reverse_url.as_str(),
            lat = coordinate.lat,
            lon = coordinate.lon,
            zoom,
            "Querying Nominatim",
        );

        let response = self
            .client
            .get(self.reverse_url.clone())
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", coordinate.lat.to_string()),
                ("lon", coordinate.lon.to_string()),
                ("zoom", zoom.to_string()),
                ("addressdetails", "1".to_string()),
            ])
            .send()
            .await?;

        info!(response_status = ?response.status(), "Got response from Nominatim");

        if !response.status().is_success() {
            Err(Error::NominatimApi(format!(
                "Unexpected response status: {}",
                response.status()
            )))?
        }

        Ok(address(response.json().await?))
    }
}

fn address(response: ReverseResponse) -> Option<Address> {
    if let Some(error) = &response.error {
        info!(error, "Nominatim has no address for this point");
    }
    response.address
}
