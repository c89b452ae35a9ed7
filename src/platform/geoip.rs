use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::time::Instant;

use super::LocationProvider;
use crate::models::{LocationRequest, Position};

const DEFAULT_ENDPOINT: &str = "http://ip-api.com/json";

/// Resolves the machine's position from a public IP-geolocation endpoint.
/// The last fix is cached and reused while younger than the request's
/// `max_age`, so repeated fetches in one session cost one lookup.
pub struct GeoIpProvider {
    client: reqwest::blocking::Client,
    endpoint: String,
    last_fix: Option<(Instant, Position)>,
}

#[derive(Debug, Deserialize)]
struct GeoIpBody {
    status: String,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
}

impl GeoIpProvider {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .context("Building geolocation HTTP client")?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            last_fix: None,
        })
    }

    fn cached(&self, request: &LocationRequest) -> Option<Position> {
        let (at, position) = self.last_fix?;
        (at.elapsed() < request.max_age).then_some(position)
    }
}

impl LocationProvider for GeoIpProvider {
    fn current_position(&mut self, request: &LocationRequest) -> Result<Position> {
        if let Some(position) = self.cached(request) {
            debug!("reusing cached position fix");
            return Ok(position);
        }

        let body: GeoIpBody = self
            .client
            .get(&self.endpoint)
            .timeout(request.timeout)
            .send()
            .context("Querying geolocation endpoint")?
            .json()
            .context("Decoding geolocation response")?;

        if body.status != "success" {
            return Err(anyhow!("geolocation lookup failed: {}", body.status));
        }

        let position = Position {
            latitude: body.lat,
            longitude: body.lon,
        };
        info!(
            "resolved position {:.4}, {:.4}",
            position.latitude, position.longitude
        );
        self.last_fix = Some((Instant::now(), position));
        Ok(position)
    }
}
