use clap::{Arg, ArgAction, ArgGroup, ArgMatches, ColorChoice, Command};

use strum::IntoEnumIterator;

use timecvt::prelude::{InputKind, TimeInput, TimeOffsets};

const FORMAT_HELP: &str = "Time format to use on output, directives are as follows:
\t--CivilTime:
\t      %Y         integer 4-digit year
\t      %y         integer 2-digit year
\t      %m         integer month
\t      %b         abbreviated month name string (e.g. \"Jan\")
\t      %B         full month name string (e.g. \"January\")
\t      %d         integer day-of-month
\t      %H         integer hour-of-day
\t      %M         integer minute-of-hour
\t      %S         integer second-of-minute
\t      %f         float second-of-minute
\t--Week (GPS/BDS/GAL/QZS):
\t      %E         integer GPS Epoch
\t      %F         integer full GPS Week
\t      %G         integer mod (10-bit) GPS Week
\t      %R         integer BDS Epoch
\t      %D         integer full BDS Week
\t      %e         integer mod BDS Week
\t      %T         integer GAL Epoch
\t      %L         integer full GAL Week
\t      %l         integer mod GAL Week
\t      %V         integer QZS Epoch
\t      %I         integer full QZS Week
\t      %i         integer mod QZS Week
\t--WeekSecond:
\t      %w         integer GPS day-of-week
\t      %g         float GPS second-of-week
\t--GPSWeekZcount:
\t      %z, %Z     integer GPS Z-count
\t      %c         integer 29-bit Z-count
\t      %C         integer 32-bit Z-count
\t--JulianDate:
\t      %J         float Julian Date
\t--MJD:
\t      %Q         float Modified Julian Date
\t--UnixTime:
\t      %U         integer seconds since Unix Epoch (00:00, Jan 1, 1970)
\t      %u         integer microseconds
\t--YDSTime:
\t      %j         integer day-of-year
\t      %s         float second-of-day
\t--ANSITime:
\t      %K         integer seconds since Unix Epoch
\t--Common Identifiers:
\t      %P         string TimeSystem";

pub struct Cli {
    /// Arguments passed by user
    matches: ArgMatches,
}

impl Cli {
    /// Build new command line interface.
    /// Flag errors (and help requests) surface as [clap::Error].
    pub fn new() -> Result<Self, clap::Error> {
        let mut cmd = Command::new("timecvt")
            .version(env!("CARGO_PKG_VERSION"))
            .about(
                "Converts from a given input time specification to other time formats. \
                Include the quotation marks. All year values are four digit years.",
            )
            .color(ColorChoice::Always);

        // one argument per supported input encoding,
        // straight from the catalog
        for kind in InputKind::iter() {
            let mut arg = Arg::new(kind.flag())
                .long(kind.flag())
                .value_name("TIME")
                .help(kind.description());
            if let Some(short) = kind.short_flag() {
                arg = arg.short(short);
            }
            cmd = cmd.arg(arg);
        }

        let mut exclusive: Vec<&'static str> =
            InputKind::iter().map(|kind| kind.flag()).collect();
        exclusive.push("input-time");

        let cmd = cmd
            .arg(
                Arg::new("input-format")
                    .long("input-format")
                    .value_name("PATTERN")
                    .requires("input-time")
                    .help("Time format to use on input"),
            )
            .arg(
                Arg::new("input-time")
                    .long("input-time")
                    .value_name("TIME")
                    .requires("input-format")
                    .help("Time to be parsed by \"input-format\" option"),
            )
            .group(ArgGroup::new("input").args(exclusive).multiple(false))
            .arg(
                Arg::new("woy")
                    .short('W')
                    .long("woy")
                    .action(ArgAction::SetTrue)
                    .help("Print week of year with no argument"),
            )
            .arg(
                Arg::new("add-offset")
                    .short('a')
                    .long("add-offset")
                    .value_name("NUM")
                    .action(ArgAction::Append)
                    .allow_hyphen_values(true)
                    .value_parser(clap::value_parser!(f64))
                    .help("add NUM seconds to specified time"),
            )
            .arg(
                Arg::new("sub-offset")
                    .short('s')
                    .long("sub-offset")
                    .value_name("NUM")
                    .action(ArgAction::Append)
                    .allow_hyphen_values(true)
                    .value_parser(clap::value_parser!(f64))
                    .help("subtract NUM seconds from specified time"),
            )
            .arg(
                Arg::new("format")
                    .short('F')
                    .long("format")
                    .value_name("PATTERN")
                    .help(FORMAT_HELP),
            );

        Ok(Self {
            matches: cmd.try_get_matches()?,
        })
    }

    /// Returns the single active time specification, or "now" when no
    /// input flag was supplied. Exclusivity between the encodings is
    /// already enforced by the argument group.
    pub fn time_input(&self) -> TimeInput {
        for kind in InputKind::iter() {
            if let Some(value) = self.matches.get_one::<String>(kind.flag()) {
                return TimeInput::Encoded(kind, value.clone());
            }
        }
        if let (Some(format), Some(value)) = (
            self.matches.get_one::<String>("input-format"),
            self.matches.get_one::<String>("input-time"),
        ) {
            return TimeInput::Custom {
                format: format.clone(),
                value: value.clone(),
            };
        }
        TimeInput::Now
    }

    /// Returns configured offsets, each kind in flag occurrence order.
    pub fn offsets(&self) -> TimeOffsets {
        let mut offsets = TimeOffsets::new();
        if let Some(values) = self.matches.get_many::<f64>("add-offset") {
            for seconds in values {
                offsets.add(*seconds);
            }
        }
        if let Some(values) = self.matches.get_many::<f64>("sub-offset") {
            for seconds in values {
                offsets.subtract(*seconds);
            }
        }
        offsets
    }

    pub fn week_of_year(&self) -> bool {
        self.matches.get_flag("woy")
    }

    pub fn output_format(&self) -> Option<&String> {
        self.matches.get_one::<String>("format")
    }
}
