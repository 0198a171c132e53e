use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: i64 = 86_400_000;
const DAYS_PER_YEAR: f64 = 365.0;

/// Whole days elapsed between `last_publish_ms` and `now`, floored.
pub fn days_since(last_publish_ms: i64, now: DateTime<Utc>) -> i64 {
    now.timestamp_millis()
        .saturating_sub(last_publish_ms)
        .div_euclid(MILLIS_PER_DAY)
}

/// Decays linearly from 1 on the publish day to 0 a year later.
pub fn responsive_maintainer(last_publish_ms: i64, now: DateTime<Utc>) -> f64 {
    let days = days_since(last_publish_ms, now) as f64;
    (1.0 - days / DAYS_PER_YEAR).clamp(0.0, 1.0)
}
