use serde::{Deserialize, Serialize};

/// Location name used when the payload carries none.
pub const DEFAULT_LOCATION_NAME: &str = "Unknown";

/// Country code used when the payload carries none.
pub const DEFAULT_COUNTRY_CODE: &str = "--";

/// A validated, fully-populated weather observation.
///
/// Produced only by [`normalize`](crate::normalize); every field is present,
/// so downstream code never handles optionality. Immutable by convention:
/// construct once, read, discard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Display name of the location, [`DEFAULT_LOCATION_NAME`] if unknown.
    pub location_name: String,

    /// ISO-like country code, [`DEFAULT_COUNTRY_CODE`] if unknown.
    pub country_code: String,

    /// Degrees, in whatever unit the caller requested upstream. The one
    /// field a reading cannot exist without.
    pub temperature: f64,

    /// Percentage, always within `[0, 100]`; `0` if unknown.
    pub humidity: f64,

    /// Weather conditions in provider order; empty if unknown.
    pub conditions: Vec<Condition>,
}

/// One validated weather condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Category, e.g. "Clouds".
    pub category: String,

    /// Human-readable description; empty string if the provider gave none.
    pub description: String,
}
