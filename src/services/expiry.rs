//! Expiry badge classification for inventory items.
//!
//! "Now" is always passed in by the caller. Months are fixed 30-day spans
//! measured in milliseconds.

use crate::errors::RulesError;
use crate::models::{ExpiryClassification, ExpiryStatus, ExpiryStyle};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub const ONE_MONTH_MS: i64 = 30 * 24 * 60 * 60 * 1000;
pub const TWO_MONTHS_MS: i64 = 2 * ONE_MONTH_MS;
pub const THREE_MONTHS_MS: i64 = 3 * ONE_MONTH_MS;

fn delta_ms(expiry: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (expiry - now).num_milliseconds()
}

/// Past dates also land in the critical bucket.
pub fn expiry_style(expiry: DateTime<Utc>, now: DateTime<Utc>) -> ExpiryStyle {
    let delta = delta_ms(expiry, now);
    if delta <= ONE_MONTH_MS {
        ExpiryStyle::NearExpiryCritical
    } else if delta <= TWO_MONTHS_MS {
        ExpiryStyle::NearExpiryWarning
    } else {
        ExpiryStyle::None
    }
}

pub fn expiry_status(expiry: DateTime<Utc>, now: DateTime<Utc>) -> ExpiryStatus {
    if now > expiry {
        return ExpiryStatus::Expired;
    }

    // Within one, two and three months all read as Warning; one range check
    // covers the three of them.
    if delta_ms(expiry, now) <= THREE_MONTHS_MS {
        ExpiryStatus::Warning
    } else {
        ExpiryStatus::StillValid
    }
}

pub fn classify(expiry: DateTime<Utc>, now: DateTime<Utc>) -> ExpiryClassification {
    ExpiryClassification {
        expiry_date: expiry,
        style: expiry_style(expiry, now),
        status: expiry_status(expiry, now),
    }
}

/// Accepts RFC 3339, a naive date-time or a bare date. Values without an
/// offset are read as UTC.
pub fn parse_expiry_date(input: &str) -> Result<DateTime<Utc>, RulesError> {
    let input = input.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| RulesError::InvalidExpiryDate(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn reference_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn forty_days_ahead_is_warning() {
        let now = reference_now();
        let expiry = now + Duration::days(40);
        assert_eq!(expiry_style(expiry, now), ExpiryStyle::NearExpiryWarning);
        assert_eq!(expiry_status(expiry, now), ExpiryStatus::Warning);
    }

    #[test]
    fn yesterday_is_expired() {
        let now = reference_now();
        let expiry = now - Duration::days(1);
        assert_eq!(expiry_status(expiry, now), ExpiryStatus::Expired);
        assert_eq!(expiry_style(expiry, now), ExpiryStyle::NearExpiryCritical);
    }

    #[test]
    fn two_hundred_days_ahead_is_still_valid() {
        let now = reference_now();
        let expiry = now + Duration::days(200);
        assert_eq!(expiry_style(expiry, now), ExpiryStyle::None);
        assert_eq!(expiry_status(expiry, now), ExpiryStatus::StillValid);
    }

    #[test]
    fn style_boundaries_are_inclusive() {
        let now = reference_now();
        let one = now + Duration::milliseconds(ONE_MONTH_MS);
        let two = now + Duration::milliseconds(TWO_MONTHS_MS);
        assert_eq!(expiry_style(one, now), ExpiryStyle::NearExpiryCritical);
        assert_eq!(
            expiry_style(one + Duration::milliseconds(1), now),
            ExpiryStyle::NearExpiryWarning
        );
        assert_eq!(expiry_style(two, now), ExpiryStyle::NearExpiryWarning);
        assert_eq!(expiry_style(two + Duration::milliseconds(1), now), ExpiryStyle::None);
    }

    #[test]
    fn status_covers_three_months_as_warning() {
        let now = reference_now();
        let three = now + Duration::milliseconds(THREE_MONTHS_MS);
        assert_eq!(expiry_status(now + Duration::days(75), now), ExpiryStatus::Warning);
        assert_eq!(expiry_status(three, now), ExpiryStatus::Warning);
        assert_eq!(
            expiry_status(three + Duration::milliseconds(1), now),
            ExpiryStatus::StillValid
        );
    }

    #[test]
    fn expiring_right_now_is_not_expired_yet() {
        let now = reference_now();
        assert_eq!(expiry_status(now, now), ExpiryStatus::Warning);
        assert_eq!(
            expiry_status(now - Duration::milliseconds(1), now),
            ExpiryStatus::Expired
        );
    }

    #[test]
    fn classification_follows_injected_clock() {
        let expiry = Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap();
        let early = classify(expiry, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
        let late = classify(expiry, Utc.with_ymd_and_hms(2027, 2, 1, 0, 0, 0).unwrap());
        assert_eq!(early.status, ExpiryStatus::StillValid);
        assert_eq!(late.status, ExpiryStatus::Expired);
    }

    #[test]
    fn parses_supported_date_formats() {
        let midnight = Utc.with_ymd_and_hms(2026, 11, 28, 0, 0, 0).unwrap();
        assert_eq!(parse_expiry_date("2026-11-28").unwrap(), midnight);
        assert_eq!(parse_expiry_date("2026-11-28T00:00:00Z").unwrap(), midnight);
        assert_eq!(parse_expiry_date("2026-11-28T02:00:00+02:00").unwrap(), midnight);
        assert_eq!(parse_expiry_date("2026-11-28T00:00:00").unwrap(), midnight);
        assert_eq!(parse_expiry_date(" 2026-11-28 00:00:00.000 ").unwrap(), midnight);
    }

    #[test]
    fn rejects_garbage_dates() {
        assert_eq!(
            parse_expiry_date("next tuesday"),
            Err(RulesError::InvalidExpiryDate("next tuesday".to_string()))
        );
        assert!(parse_expiry_date("2026-02-30").is_err());
    }
}
