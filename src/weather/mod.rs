//! Current-conditions lookups against OpenWeather.
//!
//! Responses are consumed immediately and never cached; the badge only ever
//! reflects the most recent successful fetch.

mod client;
mod types;

pub use client::{OpenWeatherClient, WeatherApi, OPEN_WEATHER_URL};
pub use types::{Condition, CurrentWeather, Readings, TempScale, Wind};
