use std::fmt;

use serde::Deserialize;

/// Top-level shape of every weather-details response.
///
/// `code == 0` means the request was accepted and `data` carries the
/// payload; any other code is an application-level rejection explained by
/// `msg`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    pub code: i64,
    pub msg: Option<String>,
    pub data: Option<WeatherPayload>,
}

/// A single weather field as returned by the API.
///
/// The endpoint is loose about types (temperature may arrive as `22` or
/// `"22"`), so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            // Integral values print without a decimal point, so 22 stays "22".
            FieldValue::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            FieldValue::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Weather data for one city. Every field is optional; an entirely empty
/// payload is a valid response, not an error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WeatherPayload {
    pub date: Option<FieldValue>,
    pub time: Option<FieldValue>,
    pub weather: Option<FieldValue>,
    pub temperature: Option<FieldValue>,
    pub humidity: Option<FieldValue>,
    pub wind_direction: Option<FieldValue>,
    pub wind_power: Option<FieldValue>,
    pub air_quality: Option<FieldValue>,
    pub pm25: Option<FieldValue>,
}

impl WeatherPayload {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.time.is_none()
            && self.weather.is_none()
            && self.temperature.is_none()
            && self.humidity.is_none()
            && self.wind_direction.is_none()
            && self.wind_power.is_none()
            && self.air_quality.is_none()
            && self.pm25.is_none()
    }
}
