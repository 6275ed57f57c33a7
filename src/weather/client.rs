use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder};

use super::{CurrentWeather, TempScale};

/// Production endpoint for current-conditions lookups.
pub const OPEN_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// The one external data source the background process polls.
///
/// This is a seam rather than a provider abstraction: production talks to
/// OpenWeather, tests substitute a recording stub.
#[async_trait]
pub trait WeatherApi: Send + Sync {
    /// Fetch current conditions for `city`, converted to `scale`.
    async fn current_weather(&self, city: &str, scale: TempScale) -> Result<CurrentWeather>;
}

/// HTTP client for the OpenWeather current-weather endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: OPEN_WEATHER_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point the client at a different endpoint (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn request(&self, city: &str, scale: TempScale) -> RequestBuilder {
        self.http.get(&self.base_url).query(&[
            ("q", city),
            ("units", scale.as_query()),
            ("appid", self.api_key.as_str()),
        ])
    }
}

#[async_trait]
impl WeatherApi for OpenWeatherClient {
    async fn current_weather(&self, city: &str, scale: TempScale) -> Result<CurrentWeather> {
        debug!("fetching current weather for '{city}' ({})", scale.as_query());

        let response = self
            .request(city, scale)
            .send()
            .await
            .with_context(|| format!("weather request for '{city}' failed"))?;

        // Every non-success status collapses into the same condition; callers
        // never branch on the failure subtype.
        if !response.status().is_success() {
            bail!("city not found: '{city}' (status {})", response.status());
        }

        response
            .json::<CurrentWeather>()
            .await
            .with_context(|| format!("unreadable weather response for '{city}'"))
    }
}
