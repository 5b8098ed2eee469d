//! GPS time scale arithmetic on top of [Epoch].
//!
//! All conversions in this module interpret and decompose instants in
//! [TimeScale::GPST], which is the scale every resolved input is
//! tagged with.

use hifitime::{Epoch, TimeScale, Unit};

/// Duration of one Z-count, in seconds.
pub const ZCOUNT_PERIOD_SECONDS: f64 = 1.5;

/// Number of Z-counts in one GPS week.
pub const ZCOUNTS_PER_WEEK: u32 = 403_200;

/// Number of weeks in one GPS epoch (10-bit week rollover).
pub const WEEKS_PER_GPS_EPOCH: u32 = 1_024;

/// Modified Julian Date of the GPS reference epoch,
/// 1980-01-06T00:00:00 GPST.
pub const GPS_EPOCH_MJD: f64 = 44_244.0;

/// Offset between Julian Date and Modified Julian Date.
pub const JD_MJD_OFFSET: f64 = 2_400_000.5;

const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_DAY: u64 = 86_400 * NANOS_PER_SECOND;

/// Returns the GPS reference [Epoch] (start of GPS week 0).
fn gps_epoch() -> Epoch {
    Epoch::from_time_of_week(0, 0, TimeScale::GPST)
}

/// Returns the Unix reference read in the GPS scale,
/// 1970-01-01T00:00:00 GPST. Used by the retagged Unix conversions.
fn unix_anchor() -> Epoch {
    Epoch::from_gregorian(1970, 1, 1, 0, 0, 0, 0, TimeScale::GPST)
}

/// Returns (full week, nanoseconds into week) of `t` in [TimeScale::GPST].
pub fn time_of_week(t: Epoch) -> (u32, u64) {
    t.to_time_scale(TimeScale::GPST).to_time_of_week()
}

/// Continuous (non-modulo) GPS week number.
pub fn full_week(t: Epoch) -> u32 {
    time_of_week(t).0
}

/// 10-bit GPS week number.
pub fn mod_week(t: Epoch) -> u32 {
    full_week(t) % WEEKS_PER_GPS_EPOCH
}

/// GPS epoch number (count of 10-bit week rollovers).
pub fn gps_epoch_number(t: Epoch) -> u32 {
    full_week(t) / WEEKS_PER_GPS_EPOCH
}

/// GPS day of week, 0 (Sunday) through 6 (Saturday).
pub fn day_of_week(t: Epoch) -> u8 {
    (time_of_week(t).1 / NANOS_PER_DAY) as u8
}

/// Second of current GPS week.
pub fn seconds_of_week(t: Epoch) -> f64 {
    time_of_week(t).1 as f64 / NANOS_PER_SECOND as f64
}

/// Z-count within the current GPS week (1.5 s units).
pub fn zcount(t: Epoch) -> u32 {
    (seconds_of_week(t) / ZCOUNT_PERIOD_SECONDS) as u32
}

/// 29-bit Z-count: 10-bit week and 19-bit Z-count of week.
/// Only unambiguous when paired with the GPS epoch number.
pub fn zcount29(t: Epoch) -> u32 {
    (mod_week(t) << 19) | zcount(t)
}

/// 32-bit Z-count: 13-bit week and 19-bit Z-count of week.
pub fn zcount32(t: Epoch) -> u32 {
    ((full_week(t) & 0x1FFF) << 19) | zcount(t)
}

/// Builds a GPST [Epoch] from full week and second of week.
pub fn from_week_sow(week: u32, sow: f64) -> Epoch {
    let nanos = (sow * NANOS_PER_SECOND as f64).round() as u64;
    Epoch::from_time_of_week(week, nanos, TimeScale::GPST)
}

/// Builds a GPST [Epoch] from full week and Z-count of week.
pub fn from_week_zcount(week: u32, zcount: u32) -> Epoch {
    from_week_sow(week, zcount as f64 * ZCOUNT_PERIOD_SECONDS)
}

/// Builds a GPST [Epoch] from a GPS epoch number and a 29-bit Z-count.
pub fn from_zcount29(gps_epoch: u32, z29: u32) -> Epoch {
    let week = gps_epoch * WEEKS_PER_GPS_EPOCH + (z29 >> 19);
    from_week_zcount(week, z29 & 0x7FFFF)
}

/// Builds a GPST [Epoch] from a self contained 32-bit Z-count.
pub fn from_zcount32(z32: u32) -> Epoch {
    from_week_zcount(z32 >> 19, z32 & 0x7FFFF)
}

/// Modified Julian Date of `t` in the GPS scale.
pub fn to_mjd(t: Epoch) -> f64 {
    GPS_EPOCH_MJD + (t.to_time_scale(TimeScale::GPST) - gps_epoch()).to_unit(Unit::Day)
}

/// Builds a GPST [Epoch] from a Modified Julian Date.
pub fn from_mjd(mjd: f64) -> Epoch {
    gps_epoch() + (mjd - GPS_EPOCH_MJD) * Unit::Day
}

/// Julian Date of `t` in the GPS scale.
pub fn to_jd(t: Epoch) -> f64 {
    to_mjd(t) + JD_MJD_OFFSET
}

/// Builds a GPST [Epoch] from a Julian Date.
pub fn from_jd(jd: f64) -> Epoch {
    from_mjd(jd - JD_MJD_OFFSET)
}

/// (seconds, microseconds) elapsed since the Unix reference,
/// both read in the GPS scale.
pub fn unix_pair(t: Epoch) -> (i64, u32) {
    let dt = t.to_time_scale(TimeScale::GPST) - unix_anchor();
    let nanos = dt.total_nanoseconds();
    let seconds = nanos.div_euclid(NANOS_PER_SECOND as i128) as i64;
    let micros = (nanos.rem_euclid(NANOS_PER_SECOND as i128) / 1_000) as u32;
    (seconds, micros)
}

/// Builds a GPST [Epoch] from a Unix (seconds, microseconds) pair.
pub fn from_unix(seconds: i64, micros: u32) -> Epoch {
    unix_anchor() + seconds as f64 * Unit::Second + micros as f64 * Unit::Microsecond
}

/// Civil decomposition of `t` in the GPS scale:
/// (year, month, day, hour, minute, second, nanoseconds).
pub fn to_civil(t: Epoch) -> (i32, u8, u8, u8, u8, u8, u32) {
    t.to_gregorian(TimeScale::GPST)
}

/// January 1st, midnight, of the civil GPST year of `t`.
pub fn year_start(t: Epoch) -> Epoch {
    let (year, ..) = to_civil(t);
    Epoch::from_gregorian(year, 1, 1, 0, 0, 0, 0, TimeScale::GPST)
}

/// Day of year in the GPS scale, January 1st being day 1.
pub fn day_of_year(t: Epoch) -> u16 {
    let dt = t.to_time_scale(TimeScale::GPST) - year_start(t);
    dt.to_unit(Unit::Day) as u16 + 1
}

/// Second of current day in the GPS scale.
pub fn seconds_of_day(t: Epoch) -> f64 {
    let (_, _, _, h, m, s, ns) = to_civil(t);
    (h as f64) * 3_600.0 + (m as f64) * 60.0 + s as f64 + ns as f64 * 1.0E-9
}

/// Forces the GPST tag onto `t` without converting the civil reading:
/// the calendar decomposition in the original scale is re-interpreted
/// as a GPST reading.
pub fn retag_gpst(t: Epoch) -> Epoch {
    let (y, m, d, hh, mm, ss, ns) = t.to_gregorian(t.time_scale);
    Epoch::from_gregorian(y, m, d, hh, mm, ss, ns, TimeScale::GPST)
}

/// Week of year: difference of full GPS weeks between `t` and the week
/// containing January 1st of its civil year, plus one.
///
/// This is not an ISO week number. The GPS week boundary (Saturday to
/// Sunday midnight) rarely falls on January 1st, so the first and last
/// weeks of a year are usually partial, and no rollover correction is
/// applied.
pub fn week_of_year(t: Epoch) -> i64 {
    full_week(t) as i64 - full_week(year_start(t)) as i64 + 1
}

#[cfg(test)]
mod test {
    use super::*;
    use hifitime::Duration;

    /// 2016-01-01T00:00:00 GPST: GPS week 1877, day 5 (Friday).
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
    fn weeks() {
        assert_eq!(full_week(t0()), 1877);
        assert_eq!(mod_week(t0()), 853);
        assert_eq!(gps_epoch_number(t0()), 1);
        assert_eq!(day_of_week(t0()), 5);
        assert_eq!(seconds_of_week(t0()), 432_000.0);
    }

    #[test]
    fn zcounts() {
        assert_eq!(zcount(t0()), 288_000);
        assert_eq!(zcount29(t0()), 447_505_664);
        assert_eq!(zcount32(t0()), 984_376_576);
    }

    #[test]
    fn julian_dates() {
        assert!((to_mjd(t0()) - 57_388.0).abs() < 1.0E-9);
        assert!((to_jd(t0()) - 2_457_388.5).abs() < 1.0E-9);
    }

    #[test]
    fn unix_reading() {
        assert_eq!(unix_pair(t0()), (1_451_606_400, 0));
    }

    #[test]
    fn days_and_seconds_of_year() {
        assert_eq!(day_of_year(t0()), 1);
        assert_eq!(seconds_of_day(t0()), 0.0);

        let t = t0() + 100_000.0 * Unit::Second;
        assert_eq!(day_of_year(t), 2);
        assert_eq!(seconds_of_day(t), 13_600.0);
    }

    #[test]
    fn constructors() {
        assert_eq!(from_week_sow(1877, 432_000.0), t0());
        assert_eq!(from_week_zcount(1877, 288_000), t0());
        assert_eq!(from_zcount29(1, 447_505_664), t0());
        assert_eq!(from_zcount32(984_376_576), t0());
        assert_close(from_mjd(57_388.0), t0());
        assert_close(from_jd(2_457_388.5), t0());
        assert_close(from_unix(1_451_606_400, 0), t0());
    }

    #[test]
    fn week_of_year_at_boundary() {
        assert_eq!(week_of_year(t0()), 1);
        assert_eq!(week_of_year(t0() + 7.0 * 86_400.0 * Unit::Second), 2);
    }

    #[test]
    fn retag_keeps_civil_reading() {
        let utc = Epoch::from_gregorian_utc(2016, 1, 1, 0, 0, 0, 0);
        assert_eq!(retag_gpst(utc), t0());
    }
}
