use strum::IntoEnumIterator;
use timecvt::prelude::*;

/// 2016-01-01T00:00:00 GPST
fn t0() -> Epoch {
    Epoch::from_gregorian(2016, 1, 1, 0, 0, 0, 0, TimeScale::GPST)
}

#[test]
fn every_encoding_round_trips() {
    for kind in InputKind::iter() {
        let literal = print_time(t0(), kind.directive());
        let resolved = TimeInput::Encoded(kind, literal.clone())
            .resolve()
            .unwrap_or_else(|e| panic!("{} failed on \"{}\": {}", kind, literal, e));

        assert_eq!(resolved.time_scale, TimeScale::GPST);
        // Julian dates go through f64 days, all other encodings are
        // well below this tolerance
        assert!(
            (resolved - t0()).abs() < Duration::from_milliseconds(1.0),
            "{} drifted: \"{}\" resolved to {}",
            kind,
            literal,
            resolved,
        );
    }
}

#[test]
fn custom_pair_resolution() {
    let input = TimeInput::Custom {
        format: "%F %w %g".to_string(),
        value: "1877 5 432000".to_string(),
    };
    assert_eq!(input.resolve().unwrap(), t0());
}

#[test]
fn offsets_after_resolution() {
    // -s 3 -a 10 -a 5 on the command line
    let mut offsets = TimeOffsets::new();
    offsets.subtract(3.0);
    offsets.add(10.0);
    offsets.add(5.0);

    let resolved = TimeInput::Encoded(InputKind::WeekSow, "1877 432000".to_string())
        .resolve()
        .unwrap();

    assert_eq!(offsets.apply(resolved), t0() + 12.0 * Unit::Second);
}

#[test]
fn now_is_close_to_system_time() {
    let resolved = TimeInput::Now.resolve().unwrap();
    assert_eq!(resolved.time_scale, TimeScale::GPST);

    // "now" keeps the UTC civil reading and retags it GPST
    let (y, m, d, hh, mm, ss, _) = Epoch::now().unwrap().to_gregorian(TimeScale::UTC);
    let utc_reading = Epoch::from_gregorian(y, m, d, hh, mm, ss, 0, TimeScale::GPST);
    assert!((resolved - utc_reading).abs() < Duration::from_seconds(2.0));
}
