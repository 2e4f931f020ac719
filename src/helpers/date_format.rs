//! Timestamp handling shared by the record mappers.
//!
//! Providers hand out epoch seconds, epoch milliseconds, or `YYYY-MM-DD HH:MM:SS` strings.
//! Each is parsed into a structured value first and only then formatted to the precision
//! the normalized record needs.

use anyhow::{anyhow, Context};
use time::macros::format_description;
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Renders an instant as `Www Mmm DD YYYY` in UTC, e.g. `Tue Oct 16 2018`.
pub fn day_label(instant: OffsetDateTime) -> anyhow::Result<String> {
    let format = format_description!("[weekday repr:short] [month repr:short] [day] [year]");
    instant
        .format(format)
        .context("Failed to format date label")
}

pub fn day_label_from_unix_seconds(seconds: i64) -> anyhow::Result<String> {
    let instant = OffsetDateTime::from_unix_timestamp(seconds)
        .with_context(|| format!("Timestamp {} is out of range", seconds))?;
    day_label(instant)
}

pub fn day_label_from_unix_millis(millis: i64) -> anyhow::Result<String> {
    let instant = OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
        .with_context(|| format!("Timestamp {}ms is out of range", millis))?;
    day_label(instant)
}

/// Length of the `YYYY-MM-DDTHH:MM:SS` stamp that precedes any fraction or zone.
const STAMP_LEN: usize = 19;

/// Parses `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD HH:MM:SS`.
pub fn parse_date_time(raw: &str) -> anyhow::Result<PrimitiveDateTime> {
    let with_t = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let with_space = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

    PrimitiveDateTime::parse(raw, with_t)
        .or_else(|_| PrimitiveDateTime::parse(raw, with_space))
        .map_err(|e| anyhow!("Unrecognised timestamp {:?}: {}", raw, e))
}

/// Accepts what may follow the seconds field: nothing, a fraction, a zone, or both
/// (`.000`, `Z`, `+02:00`, `.000Z`).
fn check_suffix(raw: &str, suffix: &str) -> anyhow::Result<()> {
    if suffix.is_empty() {
        return Ok(());
    }

    let normalized = raw.replacen(' ', "T", 1);
    let fractional = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");

    OffsetDateTime::parse(&normalized, &Rfc3339)
        .map(|_| ())
        .or_else(|_| PrimitiveDateTime::parse(&normalized, fractional).map(|_| ()))
        .map_err(|e| anyhow!("Unrecognised timestamp suffix {:?} in {:?}: {}", suffix, raw, e))
}

/// Splits a timestamp into its `YYYY-MM-DD` date and the time of day. The time is
/// `HH:MM:SS` followed by whatever fraction or zone the provider sent.
pub fn split_date_time(raw: &str) -> anyhow::Result<(String, String)> {
    let (stamp, suffix) = match (raw.get(..STAMP_LEN), raw.get(STAMP_LEN..)) {
        (Some(stamp), Some(suffix)) => (stamp, suffix),
        _ => return Err(anyhow!("Unrecognised timestamp {:?}: too short", raw)),
    };

    let parsed = parse_date_time(stamp)?;
    check_suffix(raw, suffix)?;

    let date = parsed
        .date()
        .format(format_description!("[year]-[month]-[day]"))
        .context("Failed to format date")?;
    let time = parsed
        .time()
        .format(format_description!("[hour]:[minute]:[second]"))
        .context("Failed to format time")?;
    Ok((date, format!("{}{}", time, suffix)))
}
