//! Directive based parsing of a time literal (mixed scan).

use hifitime::{Epoch, TimeScale, Unit};

use super::{lex_directive, MONTH_ABBREV, MONTH_FULL};
use crate::errors::ParsingError;
use crate::gps;

/// Parses `literal` according to the `%` directive `pattern` and
/// builds the GPST tagged [Epoch] it describes.
///
/// The pattern and the literal are walked together: literal text must
/// match, whitespace matches any run of whitespace, and each directive
/// captures one field. The captured fields are then combined into an
/// instant from whichever complete combination was supplied (civil
/// date, GPS week forms, Z-counts, Julian dates, Unix pair,
/// year/day-of-year).
pub fn scan_time(pattern: &str, literal: &str) -> Result<Epoch, ParsingError> {
    let mut fields = TimeFields::default();
    let mut fmt = pattern.chars().peekable();
    let mut lit = literal.chars().peekable();

    while let Some(c) = fmt.next() {
        if c.is_whitespace() {
            while lit.peek().map_or(false, |l| l.is_whitespace()) {
                lit.next();
            }
            continue;
        }

        if c != '%' {
            match lit.next() {
                Some(l) if l == c => continue,
                _ => return Err(ParsingError::LiteralMismatch(c)),
            }
        }

        let directive = match lex_directive(&mut fmt) {
            Ok(d) => d,
            // the pattern ended mid directive, nothing left to capture
            Err(_) => continue,
        };

        if directive.token == '%' {
            match lit.next() {
                Some('%') => continue,
                _ => return Err(ParsingError::LiteralMismatch('%')),
            }
        }

        // one field is captured up to the next pattern delimiter,
        // or up to whitespace when directives are back to back
        let delimiter = fmt.peek().copied();
        let mut captured = String::new();

        while let Some(&l) = lit.peek() {
            if l.is_whitespace() {
                break;
            }
            if let Some(d) = delimiter {
                if d != '%' && !d.is_whitespace() && l == d {
                    break;
                }
            }
            captured.push(l);
            lit.next();
        }

        if captured.is_empty() {
            return Err(ParsingError::UnexpectedEndOfLiteral(directive.token));
        }

        fields.capture(directive.token, &captured)?;
    }

    fields.into_epoch()
}

/// Fields captured from a directive/literal pair, before they are
/// combined into an [Epoch].
#[derive(Debug, Default)]
struct TimeFields {
    year: Option<i32>,
    month: Option<u8>,
    day: Option<u8>,
    hour: Option<u8>,
    minute: Option<u8>,
    second: Option<f64>,
    gps_epoch: Option<u32>,
    full_week: Option<u32>,
    mod_week: Option<u32>,
    day_of_week: Option<u8>,
    seconds_of_week: Option<f64>,
    zcount: Option<u32>,
    zcount29: Option<u32>,
    zcount32: Option<u32>,
    julian_date: Option<f64>,
    mjd: Option<f64>,
    unix_seconds: Option<i64>,
    unix_micros: Option<u32>,
    day_of_year: Option<u16>,
    seconds_of_day: Option<f64>,
}

impl TimeFields {
    fn capture(&mut self, token: char, raw: &str) -> Result<(), ParsingError> {
        match token {
            'Y' => self.year = Some(raw.parse()?),
            'y' => {
                // two digit years: 1900s when >= 80, 2000s below
                let yy: i32 = raw.parse()?;
                self.year = Some(match yy {
                    0..=79 => yy + 2_000,
                    80..=99 => yy + 1_900,
                    _ => yy,
                });
            },
            'm' => self.month = Some(raw.parse()?),
            'b' | 'B' => self.month = Some(month_from_name(raw)?),
            'd' => self.day = Some(raw.parse()?),
            'H' => self.hour = Some(raw.parse()?),
            'M' => self.minute = Some(raw.parse()?),
            'S' | 'f' => self.second = Some(raw.parse()?),
            'E' => self.gps_epoch = Some(raw.parse()?),
            'F' => self.full_week = Some(raw.parse()?),
            'G' => self.mod_week = Some(raw.parse()?),
            'w' => self.day_of_week = Some(raw.parse()?),
            'g' => self.seconds_of_week = Some(raw.parse()?),
            'z' | 'Z' => self.zcount = Some(raw.parse()?),
            'c' => self.zcount29 = Some(raw.parse()?),
            'C' => self.zcount32 = Some(raw.parse()?),
            'J' => self.julian_date = Some(raw.parse()?),
            'Q' => self.mjd = Some(raw.parse()?),
            'U' | 'K' => self.unix_seconds = Some(raw.parse()?),
            'u' => self.unix_micros = Some(raw.parse()?),
            'j' => self.day_of_year = Some(raw.parse()?),
            's' => self.seconds_of_day = Some(raw.parse()?),
            'P' => {}, // scale names are ignored: inputs are retagged GPST
            other => return Err(ParsingError::NonParsableDirective(other)),
        }
        Ok(())
    }

    fn into_epoch(self) -> Result<Epoch, ParsingError> {
        if let (Some(y), Some(m), Some(d)) = (self.year, self.month, self.day) {
            let seconds = self.second.unwrap_or(0.0);
            let whole = seconds.floor();
            let nanos = ((seconds - whole) * 1.0E9).round() as u32;
            return Ok(Epoch::maybe_from_gregorian(
                y,
                m,
                d,
                self.hour.unwrap_or(0),
                self.minute.unwrap_or(0),
                whole as u8,
                nanos,
                TimeScale::GPST,
            )?);
        }

        if let Some(gps_epoch) = self.gps_epoch {
            if let Some(mod_week) = self.mod_week {
                let week = gps_epoch * gps::WEEKS_PER_GPS_EPOCH + mod_week;
                if let Some(sow) = self.seconds_of_week {
                    return Ok(gps::from_week_sow(week, sow));
                }
                if let Some(z) = self.zcount {
                    return Ok(gps::from_week_zcount(week, z));
                }
                if let Some(dow) = self.day_of_week {
                    return Ok(gps::from_week_sow(week, dow as f64 * 86_400.0));
                }
            }
            if let Some(z29) = self.zcount29 {
                return Ok(gps::from_zcount29(gps_epoch, z29));
            }
        }

        if let Some(week) = self.full_week {
            if let Some(sow) = self.seconds_of_week {
                return Ok(gps::from_week_sow(week, sow));
            }
            if let Some(z) = self.zcount {
                return Ok(gps::from_week_zcount(week, z));
            }
            if let Some(dow) = self.day_of_week {
                return Ok(gps::from_week_sow(week, dow as f64 * 86_400.0));
            }
        }

        if let Some(z32) = self.zcount32 {
            return Ok(gps::from_zcount32(z32));
        }

        if let Some(jd) = self.julian_date {
            return Ok(gps::from_jd(jd));
        }

        if let Some(mjd) = self.mjd {
            return Ok(gps::from_mjd(mjd));
        }

        if let Some(seconds) = self.unix_seconds {
            return Ok(gps::from_unix(seconds, self.unix_micros.unwrap_or(0)));
        }

        if let (Some(y), Some(doy)) = (self.year, self.day_of_year) {
            let year_start = Epoch::maybe_from_gregorian(y, 1, 1, 0, 0, 0, 0, TimeScale::GPST)?;
            return Ok(year_start
                + (doy as f64 - 1.0) * Unit::Day
                + self.seconds_of_day.unwrap_or(0.0) * Unit::Second);
        }

        Err(ParsingError::IncompleteTime)
    }
}

fn month_from_name(raw: &str) -> Result<u8, ParsingError> {
    for (index, abbrev) in MONTH_ABBREV.iter().enumerate() {
        if raw.eq_ignore_ascii_case(abbrev) || raw.eq_ignore_ascii_case(MONTH_FULL[index]) {
            return Ok(index as u8 + 1);
        }
    }
    Err(ParsingError::UnknownMonthName(raw.to_string()))
}

#[cfg(test)]
mod test {
    use super::*;
    use hifitime::Duration;

    /// 2016-01-01T00:00:00 GPST
    fn t0() -> Epoch {
        Epoch::from_gregorian(2016, 1, 1, 0, 0, 0, 0, TimeScale::GPST)
    }

    fn assert_close(a: Epoch, b: Epoch) {
        assert!(
            (a - b).abs() < Duration::from_microseconds(1.0),
            "{} != {}",
            a,
            b
        );
    }

    #[test]
    fn civil_forms() {
        assert_eq!(
            scan_time("%m %d %Y %H:%M:%f", "01 01 2016 00:00:0.0").unwrap(),
            t0()
        );
        assert_eq!(
            scan_time("%y %m %d %H %M %S", "16 01 01 00 00 00").unwrap(),
            t0()
        );
        assert_eq!(scan_time("%b %d %Y", "Jan 01 2016").unwrap(), t0());
    }

    #[test]
    fn week_forms() {
        assert_eq!(scan_time("%E %G %g", "1 853 432000.0").unwrap(), t0());
        assert_eq!(scan_time("%F %g", "1877 432000").unwrap(), t0());
        assert_eq!(scan_time("%F %Z", "1877 288000").unwrap(), t0());
    }

    #[test]
    fn week_and_day_of_week_forms() {
        // a day of week alone stands in for the second of week
        assert_eq!(scan_time("%F %w", "1877 5").unwrap(), t0());
        assert_eq!(scan_time("%E %G %w", "1 853 5").unwrap(), t0());
        // an explicit second of week still wins
        assert_eq!(scan_time("%F %w %g", "1877 5 432000").unwrap(), t0());
    }

    #[test]
    fn zcount_forms() {
        assert_eq!(scan_time("%E %c", "1 447505664").unwrap(), t0());
        assert_eq!(scan_time("%C", "984376576").unwrap(), t0());
    }

    #[test]
    fn julian_forms() {
        assert_close(scan_time("%J", "2457388.5").unwrap(), t0());
        assert_close(scan_time("%Q", "57388").unwrap(), t0());
    }

    #[test]
    fn unix_and_yds_forms() {
        assert_close(scan_time("%U %u", "1451606400 0").unwrap(), t0());
        assert_close(scan_time("%K", "1451606400").unwrap(), t0());
        assert_eq!(scan_time("%Y %j %s", "2016 1 0").unwrap(), t0());
    }

    #[test]
    fn incomplete_literal() {
        assert!(matches!(
            scan_time("%m %d %Y", "01 01"),
            Err(ParsingError::UnexpectedEndOfLiteral('Y'))
        ));
        assert!(matches!(
            scan_time("%F", "1877"),
            Err(ParsingError::IncompleteTime)
        ));
    }

    #[test]
    fn non_parsable_directive() {
        assert!(matches!(
            scan_time("%N", "5"),
            Err(ParsingError::NonParsableDirective('N'))
        ));
    }

    #[test]
    fn literal_text_must_match() {
        assert!(matches!(
            scan_time("%H:%M", "10 30"),
            Err(ParsingError::LiteralMismatch(':'))
        ));
    }
}
