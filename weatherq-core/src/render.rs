use crate::model::{FieldValue, WeatherPayload};

/// Shown in place of any field the API did not include.
pub const PLACEHOLDER: &str = "unknown";

/// Format the payload as display lines, one per known field in a fixed
/// order. An empty payload collapses to a single notice line. Pure: the
/// caller does the printing.
pub fn render(city: &str, payload: &WeatherPayload) -> Vec<String> {
    if payload.is_empty() {
        return vec!["No weather information obtained.".to_string()];
    }

    vec![
        format!("=== Weather for {city} ==="),
        format!("Date: {}", field(&payload.date, "")),
        format!("Time: {}", field(&payload.time, "")),
        format!("Weather: {}", field(&payload.weather, "")),
        format!("Temperature: {}", field(&payload.temperature, "°C")),
        format!("Humidity: {}", field(&payload.humidity, "%")),
        format!("Wind direction: {}", field(&payload.wind_direction, "")),
        format!("Wind power: {}", field(&payload.wind_power, "")),
        format!("Air quality: {}", field(&payload.air_quality, "")),
        format!("PM2.5: {}", field(&payload.pm25, "")),
    ]
}

// The unit suffix stays even when the value is missing.
fn field(value: &Option<FieldValue>, unit: &str) -> String {
    match value {
        Some(v) => format!("{v}{unit}"),
        None => format!("{PLACEHOLDER}{unit}"),
    }
}
