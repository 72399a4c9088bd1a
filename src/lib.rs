//! Normalization of raw weather-provider payloads into validated readings.
//!
//! This crate defines:
//! - The untrusted wire shape of a provider response ([`RawPayload`])
//! - The validated, fully-populated domain model ([`WeatherReading`])
//! - The [`normalize`] pass that validates, defaults, and filters one into
//!   the other, failing only when the temperature is unusable
//!
//! Transport, caching, and display stay with the caller: decode the
//! provider's JSON into a [`RawPayload`], hand it to [`normalize`], and
//! surface a [`ReadingError`] at your own error-reporting boundary.

pub mod model;
pub mod normalize;
pub mod raw;

pub use model::{Condition, DEFAULT_COUNTRY_CODE, DEFAULT_LOCATION_NAME, WeatherReading};
pub use normalize::{ReadingError, normalize};
pub use raw::{RawCondition, RawMain, RawPayload, RawSys};
