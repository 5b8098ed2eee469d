#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod errors;
pub mod fmt;
pub mod gps;
pub mod input;
pub mod offset;
pub mod report;

pub mod prelude {

    pub use crate::{
        errors::{FormattingError, ParsingError},
        fmt::{print_time, scan_time},
        gps::week_of_year,
        input::{InputKind, TimeInput},
        offset::TimeOffsets,
        report::{render, render_report},
    };

    pub use hifitime::prelude::{Duration, Epoch, TimeScale, Unit};
}
