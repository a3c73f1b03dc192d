use chrono::{DateTime, FixedOffset, ParseError};

/// Parses the timestamp strings carried by time entities.
///
/// Accepts RFC 3339 (`Z` or `±HH:MM` suffix) and the numeric-offset
/// variant without a colon (`±HHMM`), each with optional fractional
/// seconds.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    DateTime::parse_from_rfc3339(raw).or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%#z"))
}

/// Renders a parsed timestamp for display.
///
/// The machine-readable `datetime` attribute always carries the original
/// string; this trait only controls the human-readable text, so consumers
/// inject their own locale or zone handling through
/// [`ConvertOptions`](crate::ConvertOptions).
pub trait TimeFormatter {
    fn format(&self, instant: DateTime<FixedOffset>) -> String;
}

/// Long date-time form: `M/D/YYYY, H:MM:SS AM|PM`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LongDateTime {
    /// Convert into this zone before rendering; `None` keeps the
    /// timestamp's own offset.
    pub zone: Option<FixedOffset>,
}

impl TimeFormatter for LongDateTime {
    fn format(&self, instant: DateTime<FixedOffset>) -> String {
        let instant = match self.zone {
            Some(zone) => instant.with_timezone(&zone),
            None => instant,
        };
        instant.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
    }
}
