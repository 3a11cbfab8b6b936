//! Display strings for the clock face on top of the case.

use std::fmt;

use chrono::{DateTime, Locale, TimeZone};
use serde::Serialize;

use crate::error::{Result, SceneError};

const DAY_FORMAT: &str = "%A";
const TIME_FORMAT_24H: &str = "%H:%M:%S";
const TIME_FORMAT_12H: &str = "%-I:%M:%S %p";
const DATE_FORMAT: &str = "%b %-d";

/// The three labels shown on the clock face for one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockSnapshot {
    pub day_name: String,
    pub time_string: String,
    pub date_string: String,
}

impl fmt::Display for ClockSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day_name, self.time_string, self.date_string)
    }
}

/// Formats `instant` in its own time zone.
///
/// 24-hour mode is strictly `HH:MM:SS`; 12-hour mode drops the leading zero
/// of the hour and appends the locale's AM/PM marker.
pub fn format<Tz>(instant: &DateTime<Tz>, locale: Locale, use_24_hour: bool) -> ClockSnapshot
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let time_format = if use_24_hour {
        TIME_FORMAT_24H
    } else {
        TIME_FORMAT_12H
    };

    ClockSnapshot {
        day_name: instant.format_localized(DAY_FORMAT, locale).to_string(),
        time_string: instant.format_localized(time_format, locale).to_string(),
        date_string: instant.format_localized(DATE_FORMAT, locale).to_string(),
    }
}

/// [`format`] with its locale and hour mode fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockFormatter {
    pub locale: Locale,
    pub use_24_hour: bool,
}

impl ClockFormatter {
    pub fn new(locale: Locale, use_24_hour: bool) -> Self {
        Self { locale, use_24_hour }
    }

    /// Looks up a POSIX locale name such as `en_US` or `de_DE`.
    pub fn from_locale_name(name: &str, use_24_hour: bool) -> Result<Self> {
        let locale = Locale::try_from(name)
            .map_err(|_| SceneError::UnknownLocale(name.to_string()))?;
        Ok(Self::new(locale, use_24_hour))
    }

    pub fn format<Tz>(&self, instant: &DateTime<Tz>) -> ClockSnapshot
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        format(instant, self.locale, self.use_24_hour)
    }
}

impl Default for ClockFormatter {
    fn default() -> Self {
        Self::new(Locale::en_US, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_saturday_morning() {
        // 2024-01-06 was a Saturday
        let instant = Utc.with_ymd_and_hms(2024, 1, 6, 3, 5, 9).unwrap();
        let snapshot = format(&instant, Locale::en_US, true);
        assert_eq!(snapshot.day_name, "Saturday");
        assert_eq!(snapshot.time_string, "03:05:09");
        assert_eq!(snapshot.date_string, "Jan 6");
    }

    #[test]
    fn test_twelve_hour() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 6, 15, 5, 9).unwrap();
        let snapshot = ClockFormatter::new(Locale::en_US, false).format(&instant);
        assert_eq!(snapshot.time_string, "3:05:09 PM");
    }

    #[test]
    fn test_display() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 6, 3, 5, 9).unwrap();
        let snapshot = ClockFormatter::default().format(&instant);
        assert_eq!(snapshot.to_string(), "Saturday 03:05:09 Jan 6");
    }

    #[test]
    fn test_unknown_locale() {
        assert!(matches!(
            ClockFormatter::from_locale_name("xx_NOPE", true),
            Err(SceneError::UnknownLocale(_))
        ));
        assert!(ClockFormatter::from_locale_name("de_DE", true).is_ok());
    }
}
