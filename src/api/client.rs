use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::config::settings::ApiConfig;
use crate::models::{LocationQuery, PrayerTimeSet};

/// Where today's timings come from. Handlers depend on this instead of the
/// concrete HTTP client so the fetch-and-schedule flow is testable offline.
pub trait TimingsSource {
    fn timings_for(&self, query: &LocationQuery) -> Result<PrayerTimeSet, FetchError>;
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http transport: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("response body missing data.timings")]
    MalformedBody,
}

#[derive(Debug, Deserialize)]
struct TimingsResponse {
    data: TimingsData,
}

#[derive(Debug, Deserialize)]
struct TimingsData {
    timings: PrayerTimeSet,
}

/// Client for the Aladhan timings API. One GET per fetch, no retry, no
/// backoff, default client timeouts.
pub struct AladhanClient {
    client: reqwest::blocking::Client,
    base_url: String,
    country: String,
    method: u32,
}

impl AladhanClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .context("Building API HTTP client")?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            country: config.country.clone(),
            method: config.method,
        })
    }

    fn get_timings(&self, url: &str, params: &[(&str, String)]) -> Result<PrayerTimeSet, FetchError> {
        debug!("GET {}", url);
        let response = self.client.get(url).query(params).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text()?;
        let parsed: TimingsResponse =
            serde_json::from_str(&body).map_err(|_| FetchError::MalformedBody)?;
        Ok(parsed.data.timings)
    }
}

impl TimingsSource for AladhanClient {
    fn timings_for(&self, query: &LocationQuery) -> Result<PrayerTimeSet, FetchError> {
        match query {
            LocationQuery::City(name) => self.get_timings(
                &format!("{}/v1/timingsByCity", self.base_url),
                &[
                    ("city", name.clone()),
                    ("country", self.country.clone()),
                    ("method", self.method.to_string()),
                ],
            ),
            LocationQuery::Coordinates {
                latitude,
                longitude,
            } => self.get_timings(
                &format!("{}/v1/timings", self.base_url),
                &[
                    ("latitude", latitude.to_string()),
                    ("longitude", longitude.to_string()),
                    ("method", self.method.to_string()),
                ],
            ),
        }
    }
}
