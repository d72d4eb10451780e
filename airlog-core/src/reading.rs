//! Reading records, sensor kinds, and derived statistics
//!
//! ## Wire format
//!
//! Readings persist as a pretty-printed JSON array of objects:
//!
//! ```json
//! {
//!   "sensor_id": 1,
//!   "kind": "Temperature",
//!   "value": 22.5,
//!   "timestamp": "2024-05-17 12:00:00"
//! }
//! ```
//!
//! Files written by the predecessor system used Portuguese field names
//! (`tipo`, `valor`) and kind spellings (`"Temperatura"`, `"Umidade"`,
//! `"Pressao"`, `"Luminosidade"`); those are accepted on input via serde
//! aliases so old stores remain loadable. Output always uses the English
//! names above. Timestamps may carry an optional `" UTC"` suffix on input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `strftime`-style layout of persisted timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Sensor kind enumeration
///
/// Closed set: the fleet is fixed at one sensor per kind, so a plain enum
/// plus lookup tables replaces any trait-object hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensorKind {
    /// Air temperature in °C
    #[serde(alias = "Temperatura")]
    Temperature,
    /// Relative humidity in %
    #[serde(alias = "Umidade")]
    Humidity,
    /// Barometric pressure in hPa
    #[serde(alias = "Pressao")]
    Pressure,
    /// Illuminance in lx
    #[serde(alias = "Luminosidade")]
    Luminosity,
    /// CO2 concentration in ppm
    #[serde(rename = "CO2")]
    Co2,
}

impl SensorKind {
    /// All kinds in fixed registry order (ids 1..=5 map onto this array).
    pub const ALL: [SensorKind; 5] = [
        SensorKind::Temperature,
        SensorKind::Humidity,
        SensorKind::Pressure,
        SensorKind::Luminosity,
        SensorKind::Co2,
    ];

    /// Get human-readable name (matches the serialized spelling)
    pub const fn name(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "Temperature",
            SensorKind::Humidity => "Humidity",
            SensorKind::Pressure => "Pressure",
            SensorKind::Luminosity => "Luminosity",
            SensorKind::Co2 => "CO2",
        }
    }

    /// Get expected unit of measurement
    pub const fn unit(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "°C",
            SensorKind::Humidity => "%",
            SensorKind::Pressure => "hPa",
            SensorKind::Luminosity => "lx",
            SensorKind::Co2 => "ppm",
        }
    }

    /// Inclusive simulated value range for this kind
    pub const fn range(&self) -> (f64, f64) {
        match self {
            SensorKind::Temperature => (15.0, 35.0),
            SensorKind::Humidity => (30.0, 90.0),
            SensorKind::Pressure => (980.0, 1030.0),
            SensorKind::Luminosity => (0.0, 1000.0),
            SensorKind::Co2 => (300.0, 1000.0),
        }
    }
}

/// One timestamped sensor observation, immutable once created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Owning sensor, within the fixed registry range 1..=5
    pub sensor_id: u32,

    /// Sensor category (`tipo` in legacy files)
    #[serde(alias = "tipo")]
    pub kind: SensorKind,

    /// Simulated measurement, rounded to 1 decimal place (`valor` in
    /// legacy files)
    #[serde(alias = "valor")]
    pub value: f64,

    /// Capture instant, persisted as `"YYYY-MM-DD HH:MM:SS"` in UTC
    #[serde(with = "wire_time")]
    pub timestamp: DateTime<Utc>,
}

/// Derived per-sensor statistics, computed on demand and never stored
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Statistics {
    /// Number of readings in the filtered set
    pub count: usize,
    /// Arithmetic mean, rounded to 2 decimal places; 0 when empty
    pub mean: f64,
    /// Smallest value; 0 when empty
    pub min: f64,
    /// Largest value; 0 when empty
    pub max: f64,
}

impl Statistics {
    /// Aggregate a slice of values.
    ///
    /// Empty input yields the all-zero statistics block rather than an
    /// error, matching the report renderer's "no readings" path.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let count = values.len();
        let sum: f64 = values.iter().sum();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &value in values {
            min = min.min(value);
            max = max.max(value);
        }

        Self {
            count,
            mean: (sum / count as f64 * 100.0).round() / 100.0,
            min,
            max,
        }
    }
}

/// Serde adapter for the `"YYYY-MM-DD HH:MM:SS"` timestamp strings.
mod wire_time {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&ts.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        // Some writers suffix the zone name even though the layout has no
        // zone field.
        let trimmed = raw.trim_end_matches(" UTC").trim();
        NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}
