use serde::{Deserialize, Serialize};

/// Unit system for a fetch. Chooses both the `units` query parameter and the
/// symbol appended to rendered temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TempScale {
    Metric,
    Imperial,
}

impl Default for TempScale {
    fn default() -> Self {
        TempScale::Metric
    }
}

impl TempScale {
    /// Value of the `units` request parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            TempScale::Metric => "metric",
            TempScale::Imperial => "imperial",
        }
    }

    /// Symbol shown after a rounded temperature.
    pub fn symbol(&self) -> char {
        match self {
            TempScale::Metric => '\u{2103}',
            TempScale::Imperial => '\u{2109}',
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            TempScale::Metric => TempScale::Imperial,
            TempScale::Imperial => TempScale::Metric,
        }
    }
}

/// One city's current conditions, already converted to the requested scale
/// by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Canonical city name as the service resolved it.
    pub name: String,
    pub main: Readings,
    pub weather: Vec<Condition>,
    pub wind: Wind,
}

/// Thermometer and barometer block of a report. Every measurement is a raw
/// JSON number; the service sends fractional values where station data has
/// them, so nothing here assumes an integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readings {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: f64,
    pub humidity: f64,
}

/// A sky condition entry. Reports usually carry exactly one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: u32,
    pub main: String,
    pub description: String,
    pub icon: String,
}

impl Condition {
    /// URL of the 2x icon asset for this condition. A pure string transform;
    /// nothing checks that the asset exists.
    pub fn icon_url(&self) -> String {
        format!("https://openweathermap.org/img/wn/{}@2x.png", self.icon)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
    pub deg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_serializes_to_query_values() {
        assert_eq!(
            serde_json::to_string(&TempScale::Metric).expect("serialize"),
            "\"metric\""
        );
        assert_eq!(
            serde_json::to_string(&TempScale::Imperial).expect("serialize"),
            "\"imperial\""
        );
        let parsed: TempScale = serde_json::from_str("\"imperial\"").expect("parse");
        assert_eq!(parsed, TempScale::Imperial);
    }

    #[test]
    fn toggling_flips_between_the_two_scales() {
        assert_eq!(TempScale::Metric.toggled(), TempScale::Imperial);
        assert_eq!(TempScale::Imperial.toggled(), TempScale::Metric);
        assert_eq!(TempScale::Metric.toggled().toggled(), TempScale::Metric);
    }

    #[test]
    fn parses_a_full_service_response() {
        // Real response shape, including the fields this crate ignores.
        let body = r#"{
            "coord": {"lon": -0.1257, "lat": 51.5085},
            "weather": [
                {"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}
            ],
            "base": "stations",
            "main": {
                "temp": 14.6,
                "feels_like": 14.18,
                "temp_min": 13.33,
                "temp_max": 15.56,
                "pressure": 1014,
                "humidity": 77
            },
            "visibility": 10000,
            "wind": {"speed": 4.12, "deg": 240},
            "clouds": {"all": 75},
            "dt": 1692787200,
            "sys": {"country": "GB", "sunrise": 1692765248, "sunset": 1692816049},
            "timezone": 3600,
            "id": 2643743,
            "name": "London",
            "cod": 200
        }"#;

        let report: CurrentWeather = serde_json::from_str(body).expect("parse");
        assert_eq!(report.name, "London");
        assert_eq!(report.main.temp, 14.6);
        assert_eq!(report.main.humidity, 77.0);
        assert_eq!(report.weather.len(), 1);
        assert_eq!(report.weather[0].description, "broken clouds");
        assert_eq!(report.wind.deg, 240.0);
    }

    #[test]
    fn tolerates_fractional_measurements() {
        let body = r#"{
            "name": "Bergen",
            "main": {
                "temp": 9.8,
                "feels_like": 7.2,
                "temp_min": 9.1,
                "temp_max": 10.4,
                "pressure": 998.6,
                "humidity": 93.0
            },
            "weather": [{"id": 501, "main": "Rain", "description": "moderate rain", "icon": "10d"}],
            "wind": {"speed": 8.7, "deg": 247.5}
        }"#;

        let report: CurrentWeather = serde_json::from_str(body).expect("parse");
        assert_eq!(report.main.pressure, 998.6);
        assert_eq!(report.main.humidity, 93.0);
        assert_eq!(report.wind.deg, 247.5);
    }

    #[test]
    fn icon_url_points_at_the_2x_asset() {
        let condition = Condition {
            id: 803,
            main: "Clouds".to_string(),
            description: "broken clouds".to_string(),
            icon: "04d".to_string(),
        };
        assert_eq!(
            condition.icon_url(),
            "https://openweathermap.org/img/wn/04d@2x.png"
        );
    }
}
