//! Input encoding catalog and resolution to a GPST [Epoch].

use hifitime::Epoch;
use strum_macros::EnumIter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::ParsingError;
use crate::fmt::scan_time;
use crate::gps;

/// The fixed catalog of supported input encodings. Each entry carries
/// its flag identity, the default directive pattern its literal is
/// parsed with, and a field layout description for help text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InputKind {
    /// Integer seconds since the Unix reference
    Ansi,
    /// Civil calendar date
    Civil,
    /// Civil date as found in RINEX file headers (2-digit year)
    RinexFile,
    /// GPS epoch, 10-bit week and second of week
    EpochWeekSow,
    /// Full GPS week and second of week
    WeekSow,
    /// Full GPS week and Z-count of week
    WeekZcount,
    /// GPS epoch and 29-bit Z-count
    Zcount29,
    /// Self contained 32-bit Z-count
    Zcount32,
    /// Julian Date
    Julian,
    /// Modified Julian Date
    Mjd,
    /// Unix seconds and microseconds
    Unix,
    /// Year, day of year and second of day
    YearDoySod,
}

impl InputKind {
    /// Long flag identity.
    pub fn flag(&self) -> &'static str {
        match self {
            Self::Ansi => "ansi",
            Self::Civil => "civil",
            Self::RinexFile => "rinex-file",
            Self::EpochWeekSow => "ews",
            Self::WeekSow => "ws",
            Self::WeekZcount => "wz",
            Self::Zcount29 => "z29",
            Self::Zcount32 => "z32",
            Self::Julian => "julian",
            Self::Mjd => "mjd",
            Self::Unix => "unixtime",
            Self::YearDoySod => "doy",
        }
    }

    /// Short flag identity, when one exists.
    pub fn short_flag(&self) -> Option<char> {
        match self {
            Self::Ansi => Some('A'),
            Self::Civil => Some('c'),
            Self::RinexFile => Some('R'),
            Self::EpochWeekSow => Some('o'),
            Self::WeekSow => Some('f'),
            Self::WeekZcount => Some('w'),
            Self::Zcount29 => None,
            Self::Zcount32 => Some('Z'),
            Self::Julian => Some('j'),
            Self::Mjd => Some('m'),
            Self::Unix => Some('u'),
            Self::YearDoySod => Some('y'),
        }
    }

    /// Default directive pattern the literal value is parsed with.
    pub fn directive(&self) -> &'static str {
        match self {
            Self::Ansi => "%K",
            Self::Civil => "%m %d %Y %H:%M:%f",
            Self::RinexFile => "%y %m %d %H %M %S",
            Self::EpochWeekSow => "%E %G %g",
            Self::WeekSow => "%F %g",
            Self::WeekZcount => "%F %Z",
            Self::Zcount29 => "%E %c",
            Self::Zcount32 => "%C",
            Self::Julian => "%J",
            Self::Mjd => "%Q",
            Self::Unix => "%U %u",
            Self::YearDoySod => "%Y %j %s",
        }
    }

    /// Field layout of the expected literal, for flag help text.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Ansi => "\"ANSI-Second\"",
            Self::Civil => "\"Month(numeric) DayOfMonth Year Hour:Minute:Second\"",
            Self::RinexFile => "\"Year(2-digit) Month(numeric) DayOfMonth Hour Minute Second\"",
            Self::EpochWeekSow => "\"GPSEpoch 10bitGPSweek SecondOfWeek\"",
            Self::WeekSow => "\"FullGPSWeek SecondOfWeek\"",
            Self::WeekZcount => "\"FullGPSWeek Zcount\"",
            Self::Zcount29 => "\"29bitZcount\"",
            Self::Zcount32 => "\"32bitZcount\"",
            Self::Julian => "\"JulianDate\"",
            Self::Mjd => "\"ModifiedJulianDate\"",
            Self::Unix => "\"UnixSeconds UnixMicroseconds\"",
            Self::YearDoySod => "\"Year DayOfYear SecondsOfDay\"",
        }
    }
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt.write_str(self.flag())
    }
}

/// The single time specification of one invocation. At most one
/// encoding carries a value per run (the caller enforces exclusivity);
/// the "nothing supplied" case is an explicit variant, not a fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeInput {
    /// No encoding supplied: resolve to current system time.
    Now,
    /// One of the fixed encodings, with its literal value.
    Encoded(InputKind, String),
    /// Generic directive pattern and literal value pair.
    Custom { format: String, value: String },
}

impl Default for TimeInput {
    fn default() -> Self {
        Self::Now
    }
}

impl TimeInput {
    /// Resolves this specification into an [Epoch] tagged
    /// [hifitime::TimeScale::GPST]. Resolution is pure: given the same
    /// specification (other than [TimeInput::Now]) it always returns
    /// the same instant.
    pub fn resolve(&self) -> Result<Epoch, ParsingError> {
        match self {
            Self::Now => Ok(gps::retag_gpst(Epoch::now()?)),
            Self::Encoded(kind, value) => scan_time(kind.directive(), value),
            Self::Custom { format, value } => scan_time(format, value),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hifitime::{Duration, TimeScale};
    use strum::IntoEnumIterator;

    #[test]
    fn catalog_is_complete() {
        assert_eq!(InputKind::iter().count(), 12);

        let mut flags: Vec<&str> = InputKind::iter().map(|k| k.flag()).collect();
        flags.sort_unstable();
        flags.dedup();
        assert_eq!(flags.len(), 12, "flag identities must be unique");

        for kind in InputKind::iter() {
            assert!(kind.directive().starts_with('%'));
            assert!(!kind.description().is_empty());
        }
    }

    #[test]
    fn encoded_resolution() {
        let input = TimeInput::Encoded(InputKind::WeekSow, "1877 432000".to_string());
        assert_eq!(
            input.resolve().unwrap(),
            Epoch::from_gregorian(2016, 1, 1, 0, 0, 0, 0, TimeScale::GPST)
        );
    }

    #[test]
    fn custom_resolution() {
        let input = TimeInput::Custom {
            format: "%Y %j %s".to_string(),
            value: "2016 1 0".to_string(),
        };
        assert_eq!(
            input.resolve().unwrap(),
            Epoch::from_gregorian(2016, 1, 1, 0, 0, 0, 0, TimeScale::GPST)
        );
    }

    #[test]
    fn now_resolution() {
        let resolved = TimeInput::Now.resolve().unwrap();
        assert_eq!(resolved.time_scale, TimeScale::GPST);

        // the civil reading is the UTC reading, retagged
        let (y, m, d, hh, mm, ss, _) = Epoch::now().unwrap().to_gregorian(TimeScale::UTC);
        let utc_reading = Epoch::from_gregorian(y, m, d, hh, mm, ss, 0, TimeScale::GPST);
        assert!((resolved - utc_reading).abs() < Duration::from_seconds(2.0));
    }
}
