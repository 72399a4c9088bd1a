use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

/// Raw, untrusted payload as decoded from a weather provider's JSON response.
///
/// Every field and every nested region may independently be absent. Fields
/// that are present but carry the wrong JSON type are collapsed to `None`
/// during deserialization, so a single malformed field never rejects the
/// whole payload; deciding what a missing field means is
/// [`normalize`](crate::normalize)'s job, not this struct's.
///
/// Unknown provider fields are ignored, so a full OpenWeather-style response
/// decodes into just the regions declared here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawPayload {
    /// Location display name.
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub sys: Option<RawSys>,

    #[serde(default, deserialize_with = "lenient")]
    pub main: Option<RawMain>,

    #[serde(default, deserialize_with = "lenient")]
    pub weather: Option<Vec<RawCondition>>,
}

/// The provider's `sys` region.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawSys {
    /// ISO-like country code.
    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<String>,
}

/// The provider's `main` region, holding the numeric readings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawMain {
    /// Degrees; the unit is fixed by the caller's request parameters and is
    /// not part of this shape.
    #[serde(default, deserialize_with = "lenient")]
    pub temp: Option<f64>,

    /// Percentage, nominally 0–100 but not enforced by the provider.
    #[serde(default, deserialize_with = "lenient")]
    pub humidity: Option<f64>,
}

/// One entry of the provider's `weather` array.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCondition {
    /// Category, e.g. "Clouds". The provider declares this required per
    /// entry, but it is modelled as optional so one bad entry cannot reject
    /// the payload.
    #[serde(default, deserialize_with = "lenient")]
    pub main: Option<String>,

    /// Human-readable description, e.g. "overcast clouds".
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
}

/// Deserialize a field as `Some(T)` when it is present and well-typed,
/// `None` when it is absent, `null`, or carries the wrong type.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_payload_deserializes() {
        let raw: RawPayload = serde_json::from_value(json!({
            "name": "Lyon",
            "sys": { "country": "FR" },
            "main": { "temp": 21.5, "humidity": 64 },
            "weather": [{ "main": "Clouds", "description": "overcast" }],
        }))
        .expect("well-formed payload should deserialize");

        assert_eq!(raw.name.as_deref(), Some("Lyon"));
        assert_eq!(raw.sys.expect("sys").country.as_deref(), Some("FR"));
        let main = raw.main.expect("main");
        assert_eq!(main.temp, Some(21.5));
        assert_eq!(main.humidity, Some(64.0));
        let weather = raw.weather.expect("weather");
        assert_eq!(weather.len(), 1);
        assert_eq!(weather[0].main.as_deref(), Some("Clouds"));
        assert_eq!(weather[0].description.as_deref(), Some("overcast"));
    }

    #[test]
    fn empty_object_is_all_absent() {
        let raw: RawPayload = serde_json::from_str("{}").expect("empty object");
        assert_eq!(raw, RawPayload::default());
    }

    #[test]
    fn wrong_typed_fields_collapse_to_none() {
        let raw: RawPayload = serde_json::from_value(json!({
            "name": 42,
            "sys": "not an object",
            "main": { "temp": "hot", "humidity": 64 },
            "weather": [{ "main": ["Clouds"], "description": "overcast" }],
        }))
        .expect("wrong-typed fields must not reject the payload");

        assert_eq!(raw.name, None);
        assert_eq!(raw.sys, None);
        let main = raw.main.expect("main region is well-typed");
        assert_eq!(main.temp, None);
        assert_eq!(main.humidity, Some(64.0));
        let weather = raw.weather.expect("weather");
        assert_eq!(weather[0].main, None);
        assert_eq!(weather[0].description.as_deref(), Some("overcast"));
    }

    #[test]
    fn nulls_are_treated_as_absent() {
        let raw: RawPayload = serde_json::from_value(json!({
            "name": null,
            "sys": { "country": null },
            "main": null,
        }))
        .expect("nulls must not reject the payload");

        assert_eq!(raw.name, None);
        assert_eq!(raw.sys.expect("sys").country, None);
        assert_eq!(raw.main, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let raw: RawPayload = serde_json::from_value(json!({
            "coord": { "lon": 4.85, "lat": 45.76 },
            "main": { "temp": 18.0, "pressure": 1013, "humidity": 55 },
            "dt": 1_700_000_000,
            "cod": 200,
        }))
        .expect("extra provider fields should be ignored");

        let main = raw.main.expect("main");
        assert_eq!(main.temp, Some(18.0));
        assert_eq!(main.humidity, Some(55.0));
    }

    #[test]
    fn integer_temperature_reads_as_f64() {
        let raw: RawPayload =
            serde_json::from_value(json!({ "main": { "temp": 21 } })).expect("integer temp");
        assert_eq!(raw.main.expect("main").temp, Some(21.0));
    }
}
