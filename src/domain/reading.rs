use chrono::NaiveDate;

/// Placeholder token rendered when a stored record lacks a sensor field.
pub const MISSING_VALUE: &str = "null";

const FALLBACK_TIME: &str = "00:00";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reading {
    pub date: Option<String>,
    pub time: Option<String>,
    pub temp: Option<String>,
    pub hmd: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherInfo {
    pub date: String,
    pub time: String,
    pub temperature: String,
    pub humidity: String,
}

impl WeatherInfo {
    fn from_reading(reading: &Reading) -> Self {
        Self {
            date: reading.date.clone().unwrap_or_default(),
            time: reading.time.clone().unwrap_or_default(),
            temperature: format!(
                "{}°C",
                reading.temp.as_deref().unwrap_or(MISSING_VALUE)
            ),
            humidity: format!("{}%", reading.hmd.as_deref().unwrap_or(MISSING_VALUE)),
        }
    }
}

/// Picks the reading with the greatest `time` field.
///
/// Comparison is plain string order over zero-padded `HH:MM` values; a record
/// without a `time` field sorts as midnight. Ties keep the later element.
pub fn select_latest(readings: &[Reading]) -> Option<WeatherInfo> {
    readings
        .iter()
        .max_by(|a, b| sort_time(a).cmp(sort_time(b)))
        .map(WeatherInfo::from_reading)
}

fn sort_time(reading: &Reading) -> &str {
    reading.time.as_deref().unwrap_or(FALLBACK_TIME)
}

pub fn format_query_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
