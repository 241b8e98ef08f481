//! Date helper functions

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Format a timestamp the way RSS 2.0 expects (RFC 822, always GMT)
///
/// # Examples
/// ```ignore
/// rfc822(&date) // -> "Wed, 01 May 2024 00:00:00 GMT"
/// ```
pub fn rfc822<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    date.with_timezone(&Utc)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

/// Midnight UTC of a calendar day, formatted with [`rfc822`]
pub fn day_rfc822(day: NaiveDate) -> String {
    rfc822(&day.and_time(chrono::NaiveTime::MIN).and_utc())
}

/// Four-digit year of a timestamp
pub fn year<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y").to_string()
}
