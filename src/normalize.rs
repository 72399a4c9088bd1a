use thiserror::Error;

use crate::{
    model::{Condition, DEFAULT_COUNTRY_CODE, DEFAULT_LOCATION_NAME, WeatherReading},
    raw::RawPayload,
};

/// Why a payload could not be turned into a [`WeatherReading`].
///
/// Only the essential field is fatal; everything else degrades via the
/// defaulting rules documented on [`normalize`]. Marked non-exhaustive so
/// further required fields can be added without breaking callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ReadingError {
    /// `main.temp` was absent or not a finite number.
    #[error("payload carries no usable temperature")]
    MissingTemperature,
}

/// Validate, default, and filter a raw payload into a [`WeatherReading`].
///
/// Best-effort assembly, failing only on the essential field:
/// - `main.temp` must be a finite number, else [`ReadingError::MissingTemperature`].
///   No unit conversion happens here; the value passes through exactly.
/// - `name` and `sys.country` fall back to [`DEFAULT_LOCATION_NAME`] and
///   [`DEFAULT_COUNTRY_CODE`]; an empty string counts as absent.
/// - `main.humidity` is clamped into `[0, 100]`, defaulting to `0`.
/// - `weather` entries without a category are dropped, the rest keep their
///   order; a missing description becomes the empty string.
///
/// Pure and stateless: no I/O, no shared state, safe to call concurrently.
pub fn normalize(raw: &RawPayload) -> Result<WeatherReading, ReadingError> {
    // Checked first so a broken temperature decides the error even when
    // other fields are malformed too.
    let temperature = raw
        .main
        .as_ref()
        .and_then(|m| m.temp)
        .filter(|t| t.is_finite())
        .ok_or(ReadingError::MissingTemperature)?;

    let location_name = raw
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_LOCATION_NAME)
        .to_string();

    let country_code = raw
        .sys
        .as_ref()
        .and_then(|s| s.country.as_deref())
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_COUNTRY_CODE)
        .to_string();

    let humidity = raw
        .main
        .as_ref()
        .and_then(|m| m.humidity)
        .filter(|h| h.is_finite())
        .map_or(0.0, |h| h.clamp(0.0, 100.0));

    let conditions = raw
        .weather
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|entry| {
            let category = entry.main.as_deref().filter(|m| !m.is_empty())?;
            Some(Condition {
                category: category.to_string(),
                description: entry.description.clone().unwrap_or_default(),
            })
        })
        .collect();

    Ok(WeatherReading {
        location_name,
        country_code,
        temperature,
        humidity,
        conditions,
    })
}
