//! Deliberate format and casing variance
//!
//! Each helper here makes one independent random choice per call, so two fields of the
//! same record can come out encoded differently.

use chrono::{DateTime, SecondsFormat, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::FlightStatus;

/// Timestamp value as it appears in a record
///
/// Serialized untagged, so epoch seconds land in JSON as a plain integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RenderedTimestamp {
    /// Integer seconds since the Unix epoch
    Epoch(i64),
    /// Textual rendering
    Text(String),
}

/// Strategies for rendering a timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimestampFormat {
    /// `2024-05-01T08:00:00.000000+00:00`
    #[default]
    Iso8601,
    /// `1714550400`
    EpochSeconds,
    /// `01/May/2024 08:00:00`
    Locale,
}

impl TimestampFormat {
    /// All strategies, chosen between uniformly
    pub const ALL: [TimestampFormat; 3] =
        [TimestampFormat::Iso8601, TimestampFormat::EpochSeconds, TimestampFormat::Locale];

    /// Pick a strategy uniformly at random
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL.choose(rng).copied().unwrap_or_default()
    }

    /// Render `timestamp` with this strategy
    pub fn render(&self, timestamp: DateTime<Utc>) -> RenderedTimestamp {
        match self {
            TimestampFormat::Iso8601 => RenderedTimestamp::Text(iso8601(timestamp)),
            TimestampFormat::EpochSeconds => RenderedTimestamp::Epoch(timestamp.timestamp()),
            TimestampFormat::Locale => {
                RenderedTimestamp::Text(timestamp.format("%d/%b/%Y %H:%M:%S").to_string())
            }
        }
    }
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampFormat::Iso8601 => write!(f, "ISO-8601"),
            TimestampFormat::EpochSeconds => write!(f, "Epoch Seconds"),
            TimestampFormat::Locale => write!(f, "Locale"),
        }
    }
}

/// Render a timestamp with a randomly chosen strategy
pub fn render_messy_timestamp<R: Rng + ?Sized>(
    timestamp: DateTime<Utc>,
    rng: &mut R,
) -> RenderedTimestamp {
    TimestampFormat::choose(rng).render(timestamp)
}

/// Canonical ISO-8601 rendering with microseconds and an explicit UTC offset
pub fn iso8601(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Re-casing applied to a messy status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusCasing {
    /// `EN-ROUTE`
    #[default]
    Upper,
    /// `en-route`
    Lower,
    /// `En-Route`
    Title,
}

impl StatusCasing {
    /// All casings, chosen between uniformly
    pub const ALL: [StatusCasing; 3] = [StatusCasing::Upper, StatusCasing::Lower, StatusCasing::Title];

    /// Apply the casing to `s`
    pub fn apply(&self, s: &str) -> String {
        match self {
            StatusCasing::Upper => s.to_uppercase(),
            StatusCasing::Lower => s.to_lowercase(),
            StatusCasing::Title => title_case(s),
        }
    }
}

/// Status string with a `probability` chance of being padded and re-cased
pub fn mess_up_status<R: Rng + ?Sized>(
    status: FlightStatus,
    probability: f64,
    rng: &mut R,
) -> String {
    if rng.gen_bool(probability) {
        let casing = StatusCasing::ALL.choose(rng).copied().unwrap_or_default();
        format!("  {}  ", casing.apply(status.as_str()))
    } else {
        status.as_str().to_string()
    }
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest
fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = true;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 8, 5, 9).unwrap()
    }

    #[test]
    fn test_timestamp_renderings() {
        assert_eq!(
            TimestampFormat::Iso8601.render(sample_time()),
            RenderedTimestamp::Text("2024-05-01T08:05:09.000000+00:00".to_string())
        );
        assert_eq!(
            TimestampFormat::EpochSeconds.render(sample_time()),
            RenderedTimestamp::Epoch(sample_time().timestamp())
        );
        assert_eq!(
            TimestampFormat::Locale.render(sample_time()),
            RenderedTimestamp::Text("01/May/2024 08:05:09".to_string())
        );
    }

    #[test]
    fn test_epoch_serializes_as_json_integer() {
        let json = serde_json::to_value(RenderedTimestamp::Epoch(1_714_550_709)).unwrap();
        assert!(json.is_i64());
        let json = serde_json::to_value(RenderedTimestamp::Text("x".to_string())).unwrap();
        assert!(json.is_string());
    }

    #[test]
    fn test_every_strategy_is_chosen() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(TimestampFormat::choose(&mut rng));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_every_casing_is_chosen() {
        let mut rng = StdRng::seed_from_u64(22);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(mess_up_status(FlightStatus::EnRoute, 1.0, &mut rng));
        }
        let expected: std::collections::HashSet<String> =
            ["  EN-ROUTE  ", "  en-route  ", "  En-Route  "].iter().map(|s| s.to_string()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("en-route"), "En-Route");
        assert_eq!(title_case("landed"), "Landed");
        assert_eq!(StatusCasing::Upper.apply("en-route"), "EN-ROUTE");
    }

    #[test]
    fn test_status_is_canonical_when_probability_is_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(mess_up_status(FlightStatus::EnRoute, 0.0, &mut rng), "en-route");
        }
    }

    #[test]
    fn test_messy_status_is_padded_and_still_parses() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let messy = mess_up_status(FlightStatus::EnRoute, 1.0, &mut rng);
            assert!(messy.starts_with("  ") && messy.ends_with("  "));
            assert_eq!(messy.parse::<FlightStatus>().unwrap(), FlightStatus::EnRoute);
        }
    }
}
