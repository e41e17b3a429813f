//! Weather card: static mock data dressed up as a forecast.
//!
//! There is no weather service behind this. Searching for a city only
//! relabels the card, exactly like the demo it reproduces.

use serde::Serialize;

/// One forecast row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastDay {
    /// Day label ("Today", "Tomorrow", weekday).
    pub day: &'static str,
    /// High temperature, Celsius.
    pub high: i16,
    /// Low temperature, Celsius.
    pub low: i16,
    /// Short condition glyph.
    pub icon: &'static str,
}

/// The full mock report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherReport {
    city: String,
    /// Current temperature, Celsius.
    pub temperature: i16,
    /// Current condition text.
    pub condition: &'static str,
    /// Relative humidity, percent.
    pub humidity: u8,
    /// Wind speed, km/h.
    pub wind_kmh: u16,
    /// Visibility, km.
    pub visibility_km: u16,
    /// UV index.
    pub uv_index: u8,
    /// Four-day outlook.
    pub forecast: Vec<ForecastDay>,
}

impl WeatherReport {
    /// The mock report for a city.
    pub fn mock(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            temperature: 22,
            condition: "Partly Cloudy",
            humidity: 65,
            wind_kmh: 12,
            visibility_km: 10,
            uv_index: 6,
            forecast: vec![
                ForecastDay {
                    day: "Today",
                    high: 24,
                    low: 18,
                    icon: "⛅",
                },
                ForecastDay {
                    day: "Tomorrow",
                    high: 26,
                    low: 20,
                    icon: "☀",
                },
                ForecastDay {
                    day: "Wed",
                    high: 23,
                    low: 17,
                    icon: "🌧",
                },
                ForecastDay {
                    day: "Thu",
                    high: 25,
                    low: 19,
                    icon: "⛅",
                },
            ],
        }
    }

    /// The city label.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// "Searches" for a city: relabels the card, data unchanged.
    /// Blank input is ignored.
    pub fn search(&mut self, city: &str) {
        let city = city.trim();
        if !city.is_empty() {
            self.city = city.to_string();
        }
    }
}

impl Default for WeatherReport {
    fn default() -> Self {
        Self::mock("New York")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report() {
        let report = WeatherReport::default();
        assert_eq!(report.city(), "New York");
        assert_eq!(report.temperature, 22);
        assert_eq!(report.forecast.len(), 4);
    }

    #[test]
    fn test_search_only_relabels() {
        let mut report = WeatherReport::default();
        let temperature = report.temperature;
        report.search("  Lisbon ");
        assert_eq!(report.city(), "Lisbon");
        assert_eq!(report.temperature, temperature);
        report.search("   ");
        assert_eq!(report.city(), "Lisbon");
    }
}
