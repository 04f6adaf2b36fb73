//! Reqwest-backed weather source.
//!
//! The upstream feed is a JSON array of `{date: "MM-dd", weather}` entries;
//! a new todo captures the entry for today's date.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::{Config, WEATHER_DATE_FORMAT};
use crate::errors::{messages, AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// One day's entry in the weather feed
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WeatherEntry {
    pub date: String,
    pub weather: String,
}

/// Supplies the current weather label.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Weather label for today
    async fn today_weather(&self) -> AppResult<String>;
}

/// Weather source that GETs the configured feed URL.
pub struct WeatherClient {
    client: Client,
    endpoint: String,
}

impl WeatherClient {
    /// Build a client with the configured endpoint and request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.weather_timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Weather client build failed: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.weather_api_url.clone(),
        })
    }

    async fn fetch_entries(&self) -> AppResult<Vec<WeatherEntry>> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::upstream(format!(
                "{} 상태 코드: {}",
                messages::WEATHER_FETCH_FAILED,
                status.as_u16()
            )));
        }

        response.json::<Vec<WeatherEntry>>().await.map_err(|e| {
            tracing::warn!(error = %e, "Weather payload could not be decoded");
            AppError::upstream(messages::WEATHER_EMPTY)
        })
    }
}

#[async_trait]
impl WeatherSource for WeatherClient {
    async fn today_weather(&self) -> AppResult<String> {
        let entries = self.fetch_entries().await?;
        let today = chrono::Local::now().format(WEATHER_DATE_FORMAT).to_string();

        let weather = find_today_weather(&entries, &today)?;
        tracing::debug!(date = %today, weather = %weather, "Resolved today's weather");
        Ok(weather)
    }
}

fn map_transport_error(error: reqwest::Error) -> AppError {
    tracing::warn!(error = %error, "Weather request failed");
    AppError::upstream(messages::WEATHER_FETCH_FAILED)
}

/// Pick the entry whose date matches `today` (formatted `MM-dd`).
pub fn find_today_weather(entries: &[WeatherEntry], today: &str) -> AppResult<String> {
    if entries.is_empty() {
        return Err(AppError::upstream(messages::WEATHER_EMPTY));
    }

    entries
        .iter()
        .find(|entry| entry.date == today)
        .map(|entry| entry.weather.clone())
        .ok_or_else(|| AppError::upstream(messages::WEATHER_TODAY_MISSING))
}
