//! UTC timestamp helpers.
//!
//! Measurement windows are always described in UTC; these helpers pin naive
//! and epoch-based timestamps to a zero offset without any local-time lookup.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};

/// Attaches a zero-offset UTC marker to a naive timestamp.
pub fn make_datetime_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    naive.and_utc()
}

/// Converts a Unix epoch value (whole or fractional seconds) to a UTC-aware
/// timestamp.
///
/// Errors on non-finite input or values outside the representable range.
pub fn unix_timestamp_to_utc(unix_timestamp: f64) -> Result<DateTime<Utc>> {
    if !unix_timestamp.is_finite() {
        bail!("unix timestamp is not finite: {}", unix_timestamp);
    }
    let whole = unix_timestamp.floor();
    let mut secs = whole as i64;
    let mut nanos = ((unix_timestamp - whole) * 1e9).round() as u32;
    if nanos >= 1_000_000_000 {
        secs += 1;
        nanos = 0;
    }
    DateTime::<Utc>::from_timestamp(secs, nanos)
        .with_context(|| format!("unix timestamp out of range: {}", unix_timestamp))
}
