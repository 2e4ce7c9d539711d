//! # Scan Timing
//!
//! Reads the `Start date is ...` / `End date is ...` lines, assumes UTC, and
//! reports start, end and elapsed time.
//!
//! Accepted timestamp shapes (each may carry a `UTC` or `GMT` token anywhere):
//!
//! | Example | Format |
//! |---------|--------|
//! | `2023-01-01T12:00:00Z` | RFC 3339 |
//! | `Sun, 01 Jan 2023 12:00:00 +0000` | RFC 2822 |
//! | `2023-01-01 12:00:00` | `%Y-%m-%d %H:%M:%S` |
//! | `2023-01-01T12:00:00` | `%Y-%m-%dT%H:%M:%S` |
//! | `2023/01/01 12:00:00` | `%Y/%m/%d %H:%M:%S` |
//! | `Sun Jan  1 12:00:00 2023` | ctime |
//! | `Sun 01 Jan 2023 12:00:00 PM` | 12-hour `date(1)` |

use super::errors::TimestampError;
use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

static START_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?R)Start date is (.+)").expect("start date pattern is valid"));
static END_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?R)End date is (.+)").expect("end date pattern is valid"));

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%a %b %e %H:%M:%S %Y",
    "%a %d %b %Y %I:%M:%S %p",
];

/// Rendering of start/end, matching HTTP-date style.
const DISPLAY_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Timing of one scan. All three are set, or none is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanTiming {
    pub start: Option<String>,
    pub end: Option<String>,
    pub duration: Option<String>,
}

impl ScanTiming {
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some() && self.duration.is_some()
    }
}

/// Extract scan start, end and duration from a report.
///
/// A missing line or an unreadable timestamp yields an empty `ScanTiming`.
pub fn extract_scan_timestamps(text: &str) -> ScanTiming {
    let start = first_capture(&START_DATE, text);
    let end = first_capture(&END_DATE, text);
    let (Some(start), Some(end)) = (start, end) else {
        return ScanTiming::default();
    };

    match resolve(start, end) {
        Ok(timing) => timing,
        Err(error) => {
            debug!(%error, "Ignoring scan timestamps");
            ScanTiming::default()
        }
    }
}

fn first_capture<'a>(pattern: &Regex, text: &'a str) -> Option<&'a str> {
    pattern
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn resolve(start: &str, end: &str) -> Result<ScanTiming, TimestampError> {
    let start = parse_utc(start)?;
    let end = parse_utc(end)?;
    let seconds = round_to_seconds((end - start).num_milliseconds());

    Ok(ScanTiming {
        start: Some(start.format(DISPLAY_FORMAT).to_string()),
        end: Some(end.format(DISPLAY_FORMAT).to_string()),
        duration: Some(format_duration(seconds)),
    })
}

/// Round half up, so `-500ms` is `0`.
fn round_to_seconds(millis: i64) -> i64 {
    (millis + 500).div_euclid(1000)
}

/// `"<N> sec"` below a minute, `"<M>m <S>s"` from a minute on.
pub fn format_duration(seconds: i64) -> String {
    if seconds < 60 {
        format!("{seconds} sec")
    } else {
        format!("{}m {}s", seconds / 60, seconds % 60)
    }
}

/// Parse `raw` as a UTC instant.
pub fn parse_utc(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    let stripped = raw
        .split_whitespace()
        .filter(|token| !token.eq_ignore_ascii_case("UTC") && !token.eq_ignore_ascii_case("GMT"))
        .collect::<Vec<_>>()
        .join(" ");

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&stripped, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TimestampError::Unparseable(raw.to_string()))
}
