//! Directive based rendering of an [Epoch].

use hifitime::{Epoch, TimeScale};

use super::{lex_directive, Directive, MONTH_ABBREV, MONTH_FULL};
use crate::gps;

/// Renders `t` through a `%` directive pattern.
/// Unrecognized directives are reproduced literally, never rejected.
pub fn print_time(t: Epoch, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match lex_directive(&mut chars) {
            Ok(directive) => out.push_str(&render(t, &directive)),
            Err(partial) => {
                out.push('%');
                out.push_str(&partial);
            },
        }
    }

    out
}

/// Full week of `t` read in the given time scale.
fn week_in(t: Epoch, ts: TimeScale) -> u32 {
    t.to_time_scale(ts).to_time_of_week().0
}

fn render(t: Epoch, directive: &Directive) -> String {
    let (year, month, day, hour, minute, second, nanos) = gps::to_civil(t);

    match directive.token {
        // civil
        'Y' => pad_int(directive, year as i64),
        'y' => pad_2digit_year(directive, year),
        'm' => pad_int(directive, month as i64),
        'b' => pad_str(directive, MONTH_ABBREV[(month - 1) as usize]),
        'B' => pad_str(directive, MONTH_FULL[(month - 1) as usize]),
        'd' => pad_int(directive, day as i64),
        'H' => pad_int(directive, hour as i64),
        'M' => pad_int(directive, minute as i64),
        'S' => pad_int(directive, second as i64),
        'f' => pad_float(directive, second as f64 + nanos as f64 * 1.0E-9),
        // GPS weeks
        'E' => pad_int(directive, gps::gps_epoch_number(t) as i64),
        'F' => pad_int(directive, gps::full_week(t) as i64),
        'G' => pad_int(directive, gps::mod_week(t) as i64),
        // BDS weeks
        'R' => pad_int(directive, (week_in(t, TimeScale::BDT) / 8_192) as i64),
        'D' => pad_int(directive, week_in(t, TimeScale::BDT) as i64),
        'e' => pad_int(directive, (week_in(t, TimeScale::BDT) % 8_192) as i64),
        // GAL weeks
        'T' => pad_int(directive, (week_in(t, TimeScale::GST) / 4_096) as i64),
        'L' => pad_int(directive, week_in(t, TimeScale::GST) as i64),
        'l' => pad_int(directive, (week_in(t, TimeScale::GST) % 4_096) as i64),
        // QZS weeks
        'V' => pad_int(directive, (week_in(t, TimeScale::QZSST) / 1_024) as i64),
        'I' => pad_int(directive, week_in(t, TimeScale::QZSST) as i64),
        'i' => pad_int(directive, (week_in(t, TimeScale::QZSST) % 1_024) as i64),
        // week second
        'w' => pad_int(directive, gps::day_of_week(t) as i64),
        'g' => pad_float(directive, gps::seconds_of_week(t)),
        // Z-counts
        'z' | 'Z' => pad_int(directive, gps::zcount(t) as i64),
        'c' => pad_int(directive, gps::zcount29(t) as i64),
        'C' => pad_int(directive, gps::zcount32(t) as i64),
        // Julian dates
        'J' => pad_float(directive, gps::to_jd(t)),
        'Q' => pad_float(directive, gps::to_mjd(t)),
        // Unix / ANSI
        'U' | 'K' => pad_int(directive, gps::unix_pair(t).0),
        'u' => pad_int(directive, gps::unix_pair(t).1 as i64),
        // year / day of year
        'j' => pad_int(directive, gps::day_of_year(t) as i64),
        's' => pad_float(directive, gps::seconds_of_day(t)),
        // time system name
        'P' => pad_str(directive, &t.time_scale.to_string()),
        '%' => String::from("%"),
        _ => directive.raw(),
    }
}

fn pad_int(directive: &Directive, value: i64) -> String {
    match (directive.fill, directive.width) {
        (Some('0'), Some(width)) => format!("{:0width$}", value, width = width),
        (_, Some(width)) => format!("{:width$}", value, width = width),
        _ => value.to_string(),
    }
}

fn pad_float(directive: &Directive, value: f64) -> String {
    match (directive.width, directive.precision) {
        (Some(width), Some(precision)) => {
            if directive.fill == Some('0') {
                format!("{:0width$.precision$}", value, width = width, precision = precision)
            } else {
                format!("{:width$.precision$}", value, width = width, precision = precision)
            }
        },
        (None, Some(precision)) => format!("{:.precision$}", value, precision = precision),
        (Some(width), None) => format!("{:width$}", value, width = width),
        (None, None) => value.to_string(),
    }
}

fn pad_str(directive: &Directive, value: &str) -> String {
    match directive.width {
        Some(width) => format!("{:>width$}", value, width = width),
        None => value.to_string(),
    }
}

/// `%y` defaults to two zero padded digits unless a width is supplied.
fn pad_2digit_year(directive: &Directive, year: i32) -> String {
    let yy = year.rem_euclid(100) as i64;
    if directive.width.is_some() {
        pad_int(directive, yy)
    } else {
        format!("{:02}", yy)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// 2016-01-01T00:00:00 GPST
    fn t0() -> Epoch {
        Epoch::from_gregorian(2016, 1, 1, 0, 0, 0, 0, TimeScale::GPST)
    }

    #[test]
    fn civil_rendering() {
        assert_eq!(
            print_time(t0(), "%02m/%02d/%04Y %02H:%02M:%02S %P"),
            "01/01/2016 00:00:00 GPST"
        );
        assert_eq!(print_time(t0(), "%b %B %y"), "Jan January 16");
    }

    #[test]
    fn week_rendering() {
        assert_eq!(print_time(t0(), "%E %G %g"), "1 853 432000");
        assert_eq!(print_time(t0(), "%4F %w % 13.6g"), "1877 5 432000.000000");
    }

    #[test]
    fn multi_constellation_week_rendering() {
        // BDT week 0 opened on 2006-01-01 (GPS week 1356),
        // GST week 0 on 1999-08-22 (GPS week 1024), and QZSST
        // shares the GPS week numbering
        assert_eq!(print_time(t0(), "%R %D %e"), "0 521 521");
        assert_eq!(print_time(t0(), "%T %L %l"), "0 853 853");
        assert_eq!(print_time(t0(), "%V %I %i"), "1 1877 853");
    }

    #[test]
    fn zcount_rendering() {
        assert_eq!(print_time(t0(), "%4F % 6z"), "1877 288000");
        assert_eq!(print_time(t0(), "%c (%C)"), "447505664 (984376576)");
    }

    #[test]
    fn yds_rendering() {
        assert_eq!(print_time(t0(), "%04Y %03j % 12.6s"), "2016 001     0.000000");
    }

    #[test]
    fn unix_rendering() {
        assert_eq!(print_time(t0(), "%U % 6u"), "1451606400      0");
        assert_eq!(print_time(t0(), "%K"), "1451606400");
    }

    #[test]
    fn julian_rendering() {
        assert_eq!(print_time(t0(), "%.1J"), "2457388.5");
        assert_eq!(print_time(t0(), "%.1Q"), "57388.0");
    }

    #[test]
    fn unknown_directives_pass_through() {
        assert_eq!(print_time(t0(), "%N %4X!"), "%N %4X!");
        assert_eq!(print_time(t0(), "100%%"), "100%");
    }

    #[test]
    fn truncated_directives_pass_through() {
        assert_eq!(print_time(t0(), "week %"), "week %");
        assert_eq!(print_time(t0(), "week %4"), "week %4");
        assert_eq!(print_time(t0(), "sow % 13.6"), "sow % 13.6");
    }
}
